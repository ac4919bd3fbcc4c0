//! Transaction model
//!
//! A transaction is one dated money movement, either income or expense.
//! Records are immutable once written; the ledger only appends, and identity
//! is positional (row order in the file).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TallyError, TallyResult};

use super::dates::{self, DATE_FORMAT};
use super::money::Money;

/// Category assigned when the input leaves the field blank
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Kind of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl FromStr for TransactionKind {
    type Err = TallyError;

    /// Case-insensitive parse; "EXPENSE" and "expense" are the same kind
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(TallyError::Validation(format!(
                "type must be 'income' or 'expense', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A single ledger record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Calendar date of the movement
    pub date: NaiveDate,

    /// Income or expense
    pub kind: TransactionKind,

    /// Non-negative amount, exact to 2 fraction digits
    pub amount: Money,

    /// Spending/earning category, never blank
    pub category: String,

    /// Optional free text, trimmed
    pub description: String,
}

impl Transaction {
    /// Create a transaction from already-typed values
    ///
    /// Normalizes the text fields: blank category becomes
    /// [`DEFAULT_CATEGORY`], both category and description are trimmed.
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        amount: Money,
        category: impl AsRef<str>,
        description: impl AsRef<str>,
    ) -> Self {
        let category = category.as_ref().trim();
        let category = if category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category.to_string()
        };

        Self {
            date,
            kind,
            amount,
            category,
            description: description.as_ref().trim().to_string(),
        }
    }

    /// Build a transaction from raw user input, validating every field
    ///
    /// This is the validation boundary: bad kind text or a non-numeric or
    /// negative amount is a `Validation` error, unparseable date text is an
    /// `InvalidDate` error.
    pub fn from_input(
        date: &str,
        kind: &str,
        amount: &str,
        category: &str,
        description: &str,
    ) -> TallyResult<Self> {
        let date = dates::parse_date(date)?;
        let kind: TransactionKind = kind.parse()?;
        let amount =
            Money::parse(amount).map_err(|e| TallyError::Validation(e.to_string()))?;
        if amount.is_negative() {
            return Err(TallyError::Validation(format!(
                "amount must be non-negative, got {amount}"
            )));
        }
        Ok(Self::new(date, kind, amount, category, description))
    }

    /// Check if this is an income record
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense record
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.kind,
            self.amount,
            self.category
        )
    }
}
