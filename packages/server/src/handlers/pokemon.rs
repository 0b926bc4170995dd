use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, instrument};

use crate::error::AppError;
use crate::models::lookup::LookupQuery;
use crate::pages::render_results;
use crate::repository;
use crate::state::AppState;
use crate::utils::identifier::parse_identifier;

#[utoipa::path(
    get,
    path = "/pokemon",
    tag = "Lookup",
    operation_id = "lookupPokemon",
    summary = "Look up a Pokémon by national dex number",
    description = "Without `pokemon_id` the search form is returned. A valid id returns a page with one block per stored form (possibly none). Every response is an HTML document.",
    params(LookupQuery),
    responses(
        (status = 200, description = "Search form, or the result page for a valid id", body = String, content_type = "text/html"),
        (status = 400, description = "Error page for a non-numeric or out-of-range id", body = String, content_type = "text/html"),
        (status = 500, description = "Storage unavailable page", body = String, content_type = "text/html"),
    ),
)]
#[instrument(skip(state, uri), fields(query = ?uri.query()))]
pub async fn lookup_pokemon(State(state): State<AppState>, uri: Uri) -> Response {
    match lookup(&state, &uri).await {
        Ok(page) => page,
        Err(err) => err.render(&state.pages, state.config.server.legacy_status_codes),
    }
}

async fn lookup(state: &AppState, uri: &Uri) -> Result<Response, AppError> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map_err(|e| AppError::MalformedQuery(e.body_text()))?;
    let query = LookupQuery::from_pairs(pairs);

    let Some(key) = parse_identifier(query.pokemon_id.as_deref())? else {
        return Ok(Html(state.pages.search.clone()).into_response());
    };

    let records = repository::find_by_key(&state.db, &key)
        .await
        .map_err(|source| AppError::StorageUnavailable { key: key.clone(), source })?;
    debug!(key = %key, matches = records.len(), "Lookup complete");

    Ok(Html(render_results(&records)).into_response())
}
