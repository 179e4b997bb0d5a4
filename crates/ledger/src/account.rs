use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Statement entry kind.
///
/// Closed enum: a statement entry is either a deposit or a withdrawal, so an
/// unknown kind is unrepresentable rather than checked at insertion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Deposit,
    Withdraw,
}

/// A single deposit or withdrawal record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementEntry {
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Assigned server-side at insertion.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl StatementEntry {
    pub fn deposit(amount: f64) -> Self {
        Self {
            amount,
            kind: EntryKind::Deposit,
            created_at: Utc::now(),
        }
    }

    pub fn withdraw(amount: f64) -> Self {
        Self {
            amount,
            kind: EntryKind::Withdraw,
            created_at: Utc::now(),
        }
    }

    /// Local calendar day this entry was recorded on (time-of-day ignored).
    pub fn local_day(&self) -> NaiveDate {
        self.created_at.with_timezone(&Local).date_naive()
    }
}

/// A ledger account: keyed by its tax id (`cpf`), with a mutable display
/// name and an append-only statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub cpf: String,
    pub statement: Vec<StatementEntry>,
}

impl Account {
    /// Create a fresh account with an empty statement and a new id.
    pub fn new(cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            cpf: cpf.into(),
            statement: Vec::new(),
        }
    }

    pub fn balance(&self) -> f64 {
        balance(&self.statement)
    }
}

/// Fold an ordered statement into a signed balance: deposits add,
/// withdrawals subtract. An empty statement yields 0.
pub fn balance(statement: &[StatementEntry]) -> f64 {
    statement.iter().fold(0.0, |acc, entry| match entry.kind {
        EntryKind::Deposit => acc + entry.amount,
        EntryKind::Withdraw => acc - entry.amount,
    })
}

/// Entries recorded on the given local calendar day.
pub fn entries_on(statement: &[StatementEntry], day: NaiveDate) -> Vec<StatementEntry> {
    statement
        .iter()
        .filter(|entry| entry.local_day() == day)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn entry_at(kind: EntryKind, amount: f64, ts: DateTime<Utc>) -> StatementEntry {
        StatementEntry {
            amount,
            kind,
            created_at: ts,
        }
    }

    #[test]
    fn balance_of_empty_statement_is_zero() {
        assert_eq!(balance(&[]), 0.0);
    }

    #[test]
    fn balance_folds_deposits_minus_withdrawals() {
        let now = Utc::now();
        let statement = vec![
            entry_at(EntryKind::Deposit, 100.0, now),
            entry_at(EntryKind::Withdraw, 30.0, now),
            entry_at(EntryKind::Deposit, 5.5, now),
        ];

        assert_eq!(balance(&statement), 75.5);
    }

    #[test]
    fn entries_on_matches_calendar_day_ignoring_time() {
        let morning = Local
            .with_ymd_and_hms(2024, 3, 10, 8, 15, 0)
            .unwrap()
            .with_timezone(&Utc);
        let evening = Local
            .with_ymd_and_hms(2024, 3, 10, 22, 45, 0)
            .unwrap()
            .with_timezone(&Utc);
        let next_day = Local
            .with_ymd_and_hms(2024, 3, 11, 0, 0, 1)
            .unwrap()
            .with_timezone(&Utc);

        let statement = vec![
            entry_at(EntryKind::Deposit, 1.0, morning),
            entry_at(EntryKind::Withdraw, 2.0, evening),
            entry_at(EntryKind::Deposit, 3.0, next_day),
        ];

        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let matched = entries_on(&statement, day);
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|e| e.local_day() == day));

        let empty = entries_on(&statement, NaiveDate::from_ymd_opt(1999, 1, 1).unwrap());
        assert!(empty.is_empty());
    }

    #[test]
    fn new_account_starts_with_empty_statement() {
        let account = Account::new("12345678900", "Alice");
        assert!(account.statement.is_empty());
        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn entry_kind_serializes_lowercase_as_type() {
        let entry = entry_at(EntryKind::Deposit, 10.0, Utc::now());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "deposit");
        assert!(json.get("createdAt").is_some());
    }

    proptest! {
        // Integral amounts keep the fold exact in f64, so the property can
        // assert equality instead of an epsilon.
        #[test]
        fn balance_equals_deposits_minus_withdrawals(
            ops in proptest::collection::vec((0u32..1_000_000, any::<bool>()), 0..64)
        ) {
            let now = Utc::now();
            let statement: Vec<StatementEntry> = ops
                .iter()
                .map(|&(amount, is_deposit)| {
                    let kind = if is_deposit { EntryKind::Deposit } else { EntryKind::Withdraw };
                    entry_at(kind, f64::from(amount), now)
                })
                .collect();

            let deposits: f64 = statement
                .iter()
                .filter(|e| e.kind == EntryKind::Deposit)
                .map(|e| e.amount)
                .sum();
            let withdrawals: f64 = statement
                .iter()
                .filter(|e| e.kind == EntryKind::Withdraw)
                .map(|e| e.amount)
                .sum();

            prop_assert_eq!(balance(&statement), deposits - withdrawals);
        }
    }
}
