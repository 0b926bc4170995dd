use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use sea_orm::DbErr;
use thiserror::Error;

use crate::pages::PageAssets;
use crate::utils::identifier::{IdentifierError, LookupKey};

/// Application-level error type. Every variant renders one of the static
/// HTML pages, so a failed request still gets a complete document.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),
    #[error("malformed query string: {0}")]
    MalformedQuery(String),
    #[error("storage unavailable for {key}: {source}")]
    StorageUnavailable {
        key: LookupKey,
        #[source]
        source: DbErr,
    },
}

impl AppError {
    /// Status for this error. `legacy_status_codes` reproduces the servlet,
    /// which answered invalid identifiers with `200 OK`.
    pub fn status(&self, legacy_status_codes: bool) -> StatusCode {
        match self {
            AppError::InvalidIdentifier(_) | AppError::MalformedQuery(_) => {
                if legacy_status_codes {
                    StatusCode::OK
                } else {
                    StatusCode::BAD_REQUEST
                }
            }
            AppError::StorageUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn page(&self, pages: &PageAssets) -> Bytes {
        match self {
            AppError::InvalidIdentifier(_) | AppError::MalformedQuery(_) => pages.error.clone(),
            AppError::StorageUnavailable { .. } => pages.unavailable.clone(),
        }
    }

    pub fn render(self, pages: &PageAssets, legacy_status_codes: bool) -> Response {
        match &self {
            AppError::StorageUnavailable { key, source } => {
                tracing::error!(key = %key, "Storage error: {}", source);
            }
            other => {
                tracing::debug!("Rejected lookup: {}", other);
            }
        }

        (self.status(legacy_status_codes), Html(self.page(pages))).into_response()
    }
}
