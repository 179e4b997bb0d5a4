use std::sync::Arc;

use finapi_ledger::LedgerStore;

/// Shared services handed to handlers via `Extension`.
pub struct AppServices {
    pub ledger: Arc<LedgerStore>,
}

/// Wire up application services: one in-memory ledger store per process,
/// owned here and injected into the router (never a module-level global).
pub fn build_services() -> AppServices {
    AppServices {
        ledger: Arc::new(LedgerStore::new()),
    }
}
