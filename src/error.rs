//! Custom error types for passbook
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{AccountId, Money};

/// The main error type for passbook operations
#[derive(Error, Debug)]
pub enum PassbookError {
    /// Withdrawal larger than the current balance
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: Money, available: Money },

    /// The referenced account does not exist
    #[error("Account not found: {id}")]
    AccountNotFound { id: AccountId },

    /// Repository lock errors
    #[error("Lock error: {0}")]
    Lock(String),
}

impl PassbookError {
    /// Create a "not found" error for an account id
    pub fn account_not_found(id: AccountId) -> Self {
        Self::AccountNotFound { id }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound { .. })
    }

    /// Check if this is an insufficient-balance error
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, Self::InsufficientBalance { .. })
    }
}

/// Result type alias for passbook operations
pub type PassbookResult<T> = Result<T, PassbookError>;
