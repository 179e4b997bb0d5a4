use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use finapi_ledger::LedgerError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AccountContext;

/// POST /account — the only route that skips the account resolver.
pub async fn create_account(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateAccountRequest>,
) -> axum::response::Response {
    match services.ledger.create(&body.cpf, &body.name) {
        Ok(accounts) => (
            StatusCode::OK,
            Json(serde_json::json!({ "accounts": accounts })),
        )
            .into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn get_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AccountContext>,
) -> axum::response::Response {
    match services.ledger.get(ctx.account_id()) {
        Some(account) => (
            StatusCode::OK,
            Json(serde_json::json!({ "account": account })),
        )
            .into_response(),
        None => errors::ledger_error_to_response(LedgerError::AccountNotFound),
    }
}

pub async fn update_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AccountContext>,
    Json(body): Json<dto::UpdateAccountRequest>,
) -> axum::response::Response {
    match services.ledger.rename(ctx.account_id(), &body.name) {
        Some(account) => (
            StatusCode::OK,
            Json(serde_json::json!({ "account": account })),
        )
            .into_response(),
        None => errors::ledger_error_to_response(LedgerError::AccountNotFound),
    }
}

pub async fn delete_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AccountContext>,
) -> axum::response::Response {
    let accounts = services.ledger.remove(ctx.account_id());
    (
        StatusCode::OK,
        Json(serde_json::json!({ "accounts": accounts })),
    )
        .into_response()
}
