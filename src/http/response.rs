//! Response body formatting.
//!
//! # Responsibilities
//! - Render the descriptive body for a rotated status code
//! - Build the final response (status + body, no custom headers)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Body sent with every rotated response: `HTTP <code> - <reason>\n`.
///
/// Codes without a canonical reason phrase get an empty reason.
pub fn status_body(status: StatusCode) -> String {
    format!(
        "HTTP {} - {}\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    )
}

/// Build the response for a rotated status code.
pub fn rotated_response(status: StatusCode) -> Response {
    (status, status_body(status)).into_response()
}
