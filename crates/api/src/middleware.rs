use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use finapi_ledger::{LedgerError, LedgerStore};

use crate::app::errors;
use crate::context::AccountContext;

#[derive(Clone)]
pub struct ResolverState {
    pub ledger: Arc<LedgerStore>,
}

/// Resolve the `cpf` header to an account and attach it to the request.
///
/// On failure (missing header or unknown cpf) this short-circuits with a
/// client error; the downstream handler never runs. The header is a lookup
/// key, not a credential: any caller presenting a known cpf acts as that
/// account.
pub async fn resolve_account(
    State(state): State<ResolverState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let resolved = extract_cpf(req.headers()).and_then(|cpf| state.ledger.resolve(cpf));

    let Some(account_id) = resolved else {
        return errors::ledger_error_to_response(LedgerError::AccountNotFound);
    };

    req.extensions_mut().insert(AccountContext::new(account_id));

    next.run(req).await
}

fn extract_cpf(headers: &HeaderMap) -> Option<&str> {
    let cpf = headers.get("cpf")?.to_str().ok()?.trim();
    if cpf.is_empty() {
        return None;
    }
    Some(cpf)
}
