//! Storage layer for passbook
//!
//! A single in-memory repository; no files, no persistence.

pub mod accounts;

pub use accounts::AccountRepository;
