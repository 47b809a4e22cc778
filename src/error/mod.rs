//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every query service operation. It
//! wraps store failures, configuration problems and the two request-level conditions
//! legacy clients can observe: a missing record and an invalid search request. It
//! implements `IntoResponse` so HTTP handlers can return it directly.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{config::ConfigError, validation::ValidationError},
    model::api::ErrorDto,
};

/// Top-level application error type.
///
/// Legacy-id collisions and ordering fields dropped under the drop-silently policy are
/// not errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Record store failure from SeaORM.
    ///
    /// Propagated unchanged and never retried. Results in 500 Internal Server Error with
    /// details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// The search request was malformed.
    ///
    /// Raised before the store is touched, so the request is never partially
    /// processed. Results in 400 Bad Request naming the offending input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Neither the canonical fast path nor the legacy scan produced a record.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For store and configuration failures
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so store
/// details never leak to legacy clients.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
