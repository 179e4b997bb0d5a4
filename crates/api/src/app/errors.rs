use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use finapi_ledger::LedgerError;

/// Map a domain error to its HTTP response.
///
/// The wire contract is flat: every domain failure is a 400 with an
/// `{"error": message}` body. No 5xx paths are modeled.
pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, err.to_string())
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
