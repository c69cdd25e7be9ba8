use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use crate::waitlist::WaitlistError;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("waitlist error: {0}")]
    Waitlist(#[from] WaitlistError),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        match self {
            Error::Waitlist(WaitlistError::Validation(er)) => (
                StatusCode::BAD_REQUEST,
                ClientError::InvalidInput(er.to_string()),
            ),
            Error::Waitlist(WaitlistError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ClientError::ServiceError)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The error as the client gets to see it.
#[derive(Debug, Clone, PartialEq, Eq, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Received invalid input: {_0}")]
    InvalidInput(String),
    #[display("Something went wrong. Please try again later.")]
    ServiceError,
}

impl ClientError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::InvalidInput(detail) => Some(detail.as_str()),
            ClientError::ServiceError => None,
        }
    }
}
