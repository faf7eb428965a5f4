use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use deadpool_postgres::PoolError;
use log::error;
use thiserror::Error;

/// Per-request fault taxonomy. Every variant collapses to an empty-body status
/// response; internal detail never reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing or malformed query parameter")]
    BadRequest,
    #[error("no post matched the request")]
    NotFound,
    #[error("failed to acquire a database session: {0}")]
    Pool(#[from] PoolError),
    #[error("database query failed: {0}")]
    Db(#[from] tokio_postgres::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Pool(_) | ApiError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Only the session-acquisition path is logged; query faults inside a
        // handler are swallowed into the generic 500.
        if let ApiError::Pool(e) = self {
            error!("session acquisition failed: {e}");
        }
        HttpResponse::new(self.status_code())
    }
}
