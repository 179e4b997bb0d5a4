use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, FixedOffset, Local, NaiveDate};

use finapi_ledger::LedgerError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AccountContext;

pub async fn get_statement(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AccountContext>,
) -> axum::response::Response {
    match services.ledger.statement(ctx.account_id()) {
        Some(statement) => (
            StatusCode::OK,
            Json(serde_json::json!({ "statement": statement })),
        )
            .into_response(),
        None => errors::ledger_error_to_response(LedgerError::AccountNotFound),
    }
}

/// GET /statement/date?date=… — entries for one local calendar day.
///
/// Responds with a bare JSON array on match; 400 when nothing was recorded
/// on that day.
pub async fn get_statement_by_date(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AccountContext>,
    Query(query): Query<dto::StatementDateQuery>,
) -> axum::response::Response {
    let Some(day) = parse_day(&query.date) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "invalid date");
    };

    match services.ledger.statement_on(ctx.account_id(), day) {
        Some(entries) if !entries.is_empty() => (StatusCode::OK, Json(entries)).into_response(),
        Some(_) => errors::ledger_error_to_response(LedgerError::NoStatementForDate),
        None => errors::ledger_error_to_response(LedgerError::AccountNotFound),
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp; either way the value is
/// truncated to the local calendar day, ignoring time-of-day.
fn parse_day(raw: &str) -> Option<NaiveDate> {
    if let Ok(day) = raw.parse::<NaiveDate>() {
        return Some(day);
    }
    raw.parse::<DateTime<FixedOffset>>()
        .ok()
        .map(|ts| ts.with_timezone(&Local).date_naive())
}

pub async fn deposit(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AccountContext>,
    Json(body): Json<dto::AmountRequest>,
) -> axum::response::Response {
    match services.ledger.deposit(ctx.account_id(), body.amount) {
        Some(statements) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "statements": statements })),
        )
            .into_response(),
        None => errors::ledger_error_to_response(LedgerError::AccountNotFound),
    }
}

pub async fn withdraw(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AccountContext>,
    Json(body): Json<dto::AmountRequest>,
) -> axum::response::Response {
    match services.ledger.withdraw(ctx.account_id(), body.amount) {
        Ok(statements) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "statements": statements })),
        )
            .into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}
