//! Conversion of errors into user-facing messages

use reqwest::StatusCode;

use super::ApiError;
use super::Error;

/// Turns an error into the single line shown to the user.
///
/// HTTP failures render as `"<status> - <reason> <body>"`; everything else
/// uses the error's own message.
pub fn handle_error(err: &Error) -> String {
    match err {
        Error::Api(ApiError::Http { status, message }) => {
            let reason = StatusCode::from_u16(*status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("");
            format!("{} - {} {}", status, reason, message)
        }
        Error::Api(ApiError::Network(e)) => e.to_string(),
        other => other.to_string(),
    }
}
