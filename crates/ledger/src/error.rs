//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger domain.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Deterministic domain failures.
///
/// Every variant maps to a client error at the HTTP boundary; the display
/// strings are the wire-visible messages.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// An account already exists for the presented cpf.
    #[error("CPF already registered")]
    DuplicateAccount,

    /// No account is registered for the presented cpf.
    #[error("There is no account registered with this CPF")]
    AccountNotFound,

    /// No statement entry was recorded on the requested calendar day.
    #[error("There is no statement registered at this date")]
    NoStatementForDate,

    /// The account balance does not cover the requested withdrawal.
    #[error("Insufficient funds")]
    InsufficientFunds,
}
