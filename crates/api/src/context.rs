use finapi_ledger::AccountId;

/// Resolved account for a request.
///
/// Inserted into request extensions by the account resolver middleware;
/// present for every route except account creation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AccountContext {
    account_id: AccountId,
}

impl AccountContext {
    pub fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }
}
