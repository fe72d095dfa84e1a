use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::url_param::StateParseError;
use thiserror::Error;

use crate::db_utils::SourceError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed search state: {0}")]
    MalformedState(#[from] StateParseError),

    #[error("Listings unavailable: {0}")]
    ListingsUnavailable(#[from] SourceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedState { .. } => {
                tracing::warn!("rejected search state: {}", self);
                StatusCode::BAD_REQUEST
            }
            AppError::ListingsUnavailable { .. } => {
                tracing::error!("request failed: {:#?}", self);
                StatusCode::BAD_GATEWAY
            }
        };

        (status, self.to_string()).into_response()
    }
}
