use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Business rule rejections. None of these leave partial state behind.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuleError {
    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Collection is full")]
    CollectionFull,

    /// Collection is inactive or past its expiry. Only raised when the collection
    /// window is enforced.
    #[error("Collection is closed")]
    CollectionClosed,

    #[error("Amount must be positive")]
    InvalidAmount,
}

impl IntoResponse for RuleError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InsufficientFunds => StatusCode::PAYMENT_REQUIRED,
            Self::CollectionFull | Self::CollectionClosed => StatusCode::CONFLICT,
            Self::InvalidAmount => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
