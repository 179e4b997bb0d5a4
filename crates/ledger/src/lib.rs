//! `finapi-ledger` — bank-account domain: accounts, statements, the balance
//! fold, and the in-process ledger store.
//!
//! This crate contains **pure domain** types plus the single mutable store
//! the HTTP layer is wired around. No framework concerns live here.

pub mod account;
pub mod error;
pub mod store;

pub use account::{Account, AccountId, EntryKind, StatementEntry, balance, entries_on};
pub use error::{LedgerError, LedgerResult};
pub use store::LedgerStore;
