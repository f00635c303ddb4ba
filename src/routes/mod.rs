pub mod ai;
pub mod catalog;
pub mod media;
pub mod nutrition;
pub mod professionals;
pub mod promotions;
pub mod raffles;
pub mod uploads;
pub mod users;

use axum::extract::FromRequest;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;

/// `axum::Json`, but with rejections reported through `AppError` (400 instead of 422).
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Body returned by mutating endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
    /// Id of the created row, when the call inserted one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
        }
    }

    pub fn created(id: i32) -> Self {
        Self {
            success: true,
            id: Some(id),
        }
    }
}

/// Reject blank required text fields.
pub(crate) fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidRequest(format!("{} is required", field)));
    }
    Ok(())
}
