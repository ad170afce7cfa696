//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, api::ApiError, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A call to the wallet API failed.
    ///
    /// Transport failures ([ApiError::Request]) are not shown to the user, callers log them
    /// and leave the page as it was.
    #[error(transparent)]
    WalletApi(#[from] ApiError),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The displayed transactions could not be written as CSV.
    #[error("could not export transactions as CSV: {0}")]
    CsvExport(String),
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::CsvExport(error.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::WalletApi(ApiError::Request(_)) => InternalServerError {
                description: "Could not reach the wallet service",
                fix: "Check that the wallet API is running and try again.",
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::WalletApi(ApiError::Rejected(reason)) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "The wallet service rejected the request".to_owned(),
                    details: reason,
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}

/// The response for an htmx request whose wallet API call failed.
///
/// Transport failures are logged and answered with 204 No Content so the page stays as it was.
/// Everything else is shown as an alert.
pub(crate) fn wallet_api_failure_response(error: ApiError) -> Response {
    match error {
        ApiError::Request(message) => {
            tracing::error!("could not reach the wallet API: {message}");
            StatusCode::NO_CONTENT.into_response()
        }
        error => Error::from(error).into_alert_response(),
    }
}
