//! passbook - in-memory account ledger
//!
//! Immutable account values, an in-memory repository keyed by id, and a
//! balance service for debit, credit, and transfer operations.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, ids, money)
//! - `storage`: In-memory repository
//! - `services`: Business logic layer
//!
//! # Example
//!
//! ```rust
//! use passbook::models::Money;
//! use passbook::services::BalanceService;
//! use passbook::storage::AccountRepository;
//!
//! # fn main() -> passbook::error::PassbookResult<()> {
//! let repository = AccountRepository::new();
//! let from = repository.create("Angelo", Money::from_cents(15000))?;
//! let to = repository.create("Clarice", Money::from_cents(25000))?;
//!
//! let service = BalanceService::new(&repository);
//! service.transfer(from, to, Money::from_cents(5000))?;
//!
//! assert_eq!(service.balance(from)?, Money::from_cents(10000));
//! assert_eq!(service.balance(to)?, Money::from_cents(30000));
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! The repository guards its map with a lock, so individual operations are
//! safe to call through shared references. `transfer` however issues two
//! independent balance updates with the lock released in between; it is not
//! atomic under concurrent access and can be observed mid-flight. The crate
//! is intended for single-threaded use.

pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PassbookError, PassbookResult};
pub use models::{Account, AccountId, Money};
pub use services::BalanceService;
pub use storage::AccountRepository;
