//! Account model
//!
//! An account is an immutable ledger entry. Every transformation returns a
//! new value; the receiver is never mutated in place.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PassbookError, PassbookResult};

use super::ids::AccountId;
use super::money::Money;

/// A single ledger entry: id, display name, current balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned at creation, never changes
    pub id: AccountId,

    /// Display label (e.g., the account holder's name)
    pub name: String,

    /// Current balance
    pub balance: Money,
}

impl Account {
    /// Create a new account with a fresh id
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            balance,
        }
    }

    /// Reconstruct an account with a known id, keeping name and balance
    pub fn with_id(id: AccountId, name: impl Into<String>, balance: Money) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
        }
    }

    /// Return a new account with the amount added to the balance
    ///
    /// No upper bound check.
    pub fn deposit(&self, amount: Money) -> Self {
        Self::with_id(self.id, self.name.clone(), self.balance + amount)
    }

    /// Return a new account with the amount subtracted from the balance
    ///
    /// Fails with [`PassbookError::InsufficientBalance`] when the amount
    /// exceeds the current balance; no new value is produced in that case.
    pub fn withdraw(&self, amount: Money) -> PassbookResult<Self> {
        if amount <= self.balance {
            Ok(Self::with_id(self.id, self.name.clone(), self.balance - amount))
        } else {
            Err(PassbookError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            })
        }
    }

    /// Return a new account with the given name, same id and balance
    pub fn with_name(&self, new_name: impl Into<String>) -> Self {
        Self::with_id(self.id, new_name, self.balance)
    }

    /// Check whether the balance covers the given amount
    ///
    /// True iff `balance >= amount`; the boundary `amount == balance` is
    /// sufficient.
    pub fn has_sufficient_balance(&self, amount: Money) -> bool {
        self.balance >= amount
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.balance)
    }
}
