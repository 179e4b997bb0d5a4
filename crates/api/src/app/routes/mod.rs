use axum::{
    Router,
    routing::{get, post},
};

pub mod accounts;
pub mod statements;

/// Router for all account-resolved endpoints (everything except creation,
/// which cannot require an existing account).
pub fn router() -> Router {
    Router::new()
        .route(
            "/account",
            get(accounts::get_account)
                .put(accounts::update_account)
                .delete(accounts::delete_account),
        )
        .route("/statement", get(statements::get_statement))
        .route("/statement/date", get(statements::get_statement_by_date))
        .route("/deposit", post(statements::deposit))
        .route("/withdraw", post(statements::withdraw))
}
