//! In-memory account repository
//!
//! Owns the authoritative collection of accounts, keyed by id. There is no
//! persistence: entries live until an explicit delete or the end of the
//! process.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{PassbookError, PassbookResult};
use crate::models::{Account, AccountId, Money};

/// Repository holding the current account set
pub struct AccountRepository {
    data: RwLock<HashMap<AccountId, Account>>,
}

impl AccountRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Create a new account with a fresh id and return the id
    pub fn create(
        &self,
        name: impl Into<String>,
        initial_balance: Money,
    ) -> PassbookResult<AccountId> {
        let account = Account::new(name, initial_balance);
        let id = account.id;

        let mut data = self
            .data
            .write()
            .map_err(|e| PassbookError::Lock(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(id, account);
        Ok(id)
    }

    /// Get an account by ID
    ///
    /// Absence is `None`, never a domain error.
    pub fn get(&self, id: AccountId) -> PassbookResult<Option<Account>> {
        let data = self
            .data
            .read()
            .map_err(|e| PassbookError::Lock(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Replace the stored account with one carrying the same id and name and
    /// the given balance
    ///
    /// Silently does nothing when the id is unknown.
    pub fn update_balance(&self, id: AccountId, new_balance: Money) -> PassbookResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PassbookError::Lock(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(account) = data.get(&id) {
            let updated = Account::with_id(account.id, account.name.clone(), new_balance);
            data.insert(id, updated);
        }

        Ok(())
    }

    /// Delete an account
    ///
    /// Fails with [`PassbookError::AccountNotFound`] when no entry has the id.
    pub fn delete(&self, id: AccountId) -> PassbookResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PassbookError::Lock(format!("Failed to acquire write lock: {}", e)))?;

        match data.remove(&id) {
            Some(_) => Ok(()),
            None => Err(PassbookError::account_not_found(id)),
        }
    }

    /// Count accounts
    pub fn count(&self) -> PassbookResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| PassbookError::Lock(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Check if an account exists
    pub fn exists(&self, id: AccountId) -> PassbookResult<bool> {
        let data = self
            .data
            .read()
            .map_err(|e| PassbookError::Lock(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&id))
    }
}

impl Default for AccountRepository {
    fn default() -> Self {
        Self::new()
    }
}
