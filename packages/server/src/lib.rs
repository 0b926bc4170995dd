pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod repository;
pub mod routes;
pub mod state;
pub mod utils;

use axum::Json;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pokédex Lookup",
        version = "1.0.0",
        description = "HTML lookup of Pokémon records by national dex number"
    ),
    tags((name = "Lookup", description = "Dex number lookup pages")),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let images = ServeDir::new(&state.config.assets.images_dir);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::lookup_routes())
        .split_for_parts();

    let spec = api.clone();
    router
        .nest_service("/images", images)
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let spec = spec.clone();
                async move { Json(spec) }
            }),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .merge(Scalar::with_url("/scalar", api))
}
