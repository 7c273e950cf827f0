//! HTTP handlers.

pub mod browse;
pub mod file;
pub mod share;

use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::Response;

use gitshelf_core::AppError;
use gitshelf_core::traits::source::FileStream;

use crate::error::ApiError;

/// Build a raw proxied response from an upstream file stream.
///
/// The upstream status and content headers pass through; the body is
/// forwarded frame by frame, never buffered.
pub(crate) fn proxy_response(stream: FileStream) -> Result<Response, ApiError> {
    let status = StatusCode::from_u16(stream.status).unwrap_or(StatusCode::OK);
    let mut builder = Response::builder().status(status);

    if let Some(content_type) = &stream.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    if let Some(content_length) = stream.content_length {
        builder = builder.header(header::CONTENT_LENGTH, content_length);
    }

    builder
        .body(Body::from_stream(stream.body))
        .map_err(|e| ApiError(AppError::internal(format!("Response build failed: {e}"))))
}
