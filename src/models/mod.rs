//! Core data models for passbook
//!
//! The value types of the ledger: account entries, identifiers, and money.

pub mod account;
pub mod ids;
pub mod money;

pub use account::Account;
pub use ids::AccountId;
pub use money::{Money, MoneyParseError};
