use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn lookup_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::pokemon::lookup_pokemon))
}
