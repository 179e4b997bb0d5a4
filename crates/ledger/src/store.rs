use std::sync::RwLock;

use chrono::NaiveDate;

use crate::account::{Account, AccountId, StatementEntry, balance, entries_on};
use crate::error::{LedgerError, LedgerResult};

/// Process-wide account store.
///
/// All accounts live in one ordered, lock-guarded vector. Every operation is
/// a single bounded read-modify-write under the lock; the lock is never held
/// across an await point because nothing in here is async.
#[derive(Debug)]
pub struct LedgerStore {
    accounts: RwLock<Vec<Account>>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(Vec::new()),
        }
    }

    /// Register a new account.
    ///
    /// Rejects the cpf if it is already taken; otherwise appends a fresh
    /// account (empty statement, new id) and returns a snapshot of the whole
    /// account list.
    pub fn create(&self, cpf: &str, name: &str) -> LedgerResult<Vec<Account>> {
        let mut accounts = self.accounts.write().unwrap();
        if accounts.iter().any(|account| account.cpf == cpf) {
            return Err(LedgerError::DuplicateAccount);
        }

        let account = Account::new(cpf, name);
        tracing::debug!(account_id = %account.id, "account created");
        accounts.push(account);

        Ok(accounts.clone())
    }

    /// Resolve a cpf to its account id.
    pub fn resolve(&self, cpf: &str) -> Option<AccountId> {
        let accounts = self.accounts.read().unwrap();
        accounts
            .iter()
            .find(|account| account.cpf == cpf)
            .map(|account| account.id)
    }

    pub fn get(&self, id: AccountId) -> Option<Account> {
        let accounts = self.accounts.read().unwrap();
        accounts.iter().find(|account| account.id == id).cloned()
    }

    pub fn list(&self) -> Vec<Account> {
        self.accounts.read().unwrap().clone()
    }

    /// Update the display name; the cpf and statement are untouched.
    pub fn rename(&self, id: AccountId, name: &str) -> Option<Account> {
        let mut accounts = self.accounts.write().unwrap();
        let account = accounts.iter_mut().find(|account| account.id == id)?;
        account.name = name.to_string();
        Some(account.clone())
    }

    /// Delete the account and its entire statement.
    ///
    /// Silent no-op when the account is already absent (at-most-once
    /// removal). Returns the remaining accounts.
    pub fn remove(&self, id: AccountId) -> Vec<Account> {
        let mut accounts = self.accounts.write().unwrap();
        accounts.retain(|account| account.id != id);
        tracing::debug!(account_id = %id, "account removed");
        accounts.clone()
    }

    pub fn statement(&self, id: AccountId) -> Option<Vec<StatementEntry>> {
        self.get(id).map(|account| account.statement)
    }

    /// Entries recorded on the given local calendar day.
    pub fn statement_on(&self, id: AccountId, day: NaiveDate) -> Option<Vec<StatementEntry>> {
        let accounts = self.accounts.read().unwrap();
        let account = accounts.iter().find(|account| account.id == id)?;
        Some(entries_on(&account.statement, day))
    }

    /// Append a deposit entry and return the updated statement.
    ///
    /// The amount is accepted unchecked, matching the unvalidated wire
    /// contract.
    pub fn deposit(&self, id: AccountId, amount: f64) -> Option<Vec<StatementEntry>> {
        let mut accounts = self.accounts.write().unwrap();
        let account = accounts.iter_mut().find(|account| account.id == id)?;
        account.statement.push(StatementEntry::deposit(amount));
        Some(account.statement.clone())
    }

    /// Append a withdrawal entry and return the updated statement.
    ///
    /// Balance check and append happen under one write lock. A zero balance
    /// always rejects, even for a zero amount.
    pub fn withdraw(&self, id: AccountId, amount: f64) -> LedgerResult<Vec<StatementEntry>> {
        let mut accounts = self.accounts.write().unwrap();
        let account = accounts
            .iter_mut()
            .find(|account| account.id == id)
            .ok_or(LedgerError::AccountNotFound)?;

        let current = balance(&account.statement);
        if current < amount || current == 0.0 {
            return Err(LedgerError::InsufficientFunds);
        }

        account.statement.push(StatementEntry::withdraw(amount));
        Ok(account.statement.clone())
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}
