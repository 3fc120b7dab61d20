//! # Body Extraction
//!
//! Maps axum's JSON and form rejections to [`AppError::BadRequest`] so
//! every malformed body produces the same error shape.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::{Form, Json};

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a URL-encoded form body, mapping rejections to [`AppError::BadRequest`].
pub fn extract_form<T>(result: Result<Form<T>, FormRejection>) -> Result<T, AppError> {
    result
        .map(|Form(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
