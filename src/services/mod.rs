//! Service layer for passbook
//!
//! Business logic on top of the repository: balance queries and the
//! debit/credit/transfer operations.

pub mod balance;

pub use balance::BalanceService;
