//! Balance service
//!
//! Cross-account balance operations expressed as read-modify-write sequences
//! against the account repository.

use crate::error::{PassbookError, PassbookResult};
use crate::models::{AccountId, Money};
use crate::storage::AccountRepository;

/// Service for balance queries, debits, credits, and transfers
pub struct BalanceService<'a> {
    repository: &'a AccountRepository,
}

impl<'a> BalanceService<'a> {
    /// Create a new balance service
    pub fn new(repository: &'a AccountRepository) -> Self {
        Self { repository }
    }

    /// Get the current balance of an account
    pub fn balance(&self, id: AccountId) -> PassbookResult<Money> {
        let account = self
            .repository
            .get(id)?
            .ok_or(PassbookError::AccountNotFound { id })?;

        Ok(account.balance)
    }

    /// Subtract an amount from an account's balance
    ///
    /// Unlike [`Account::withdraw`](crate::models::Account::withdraw), this
    /// is not guarded: the balance may go negative.
    pub fn debit(&self, id: AccountId, amount: Money) -> PassbookResult<()> {
        let account = self
            .repository
            .get(id)?
            .ok_or(PassbookError::AccountNotFound { id })?;

        self.repository.update_balance(id, account.balance - amount)
    }

    /// Add an amount to an account's balance
    pub fn credit(&self, id: AccountId, amount: Money) -> PassbookResult<()> {
        let account = self
            .repository
            .get(id)?
            .ok_or(PassbookError::AccountNotFound { id })?;

        self.repository.update_balance(id, account.balance + amount)
    }

    /// Move an amount from one account to another
    ///
    /// Both accounts are fetched first; if either is missing, the transfer
    /// fails with no writes. The two balance updates are independent, so a
    /// concurrent caller could observe the decrement before the increment.
    pub fn transfer(&self, from: AccountId, to: AccountId, amount: Money) -> PassbookResult<()> {
        let from_account = self
            .repository
            .get(from)?
            .ok_or(PassbookError::AccountNotFound { id: from })?;
        let to_account = self
            .repository
            .get(to)?
            .ok_or(PassbookError::AccountNotFound { id: to })?;

        self.repository
            .update_balance(from, from_account.balance - amount)?;
        self.repository
            .update_balance(to, to_account.balance + amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (AccountRepository, AccountId, AccountId) {
        let repository = AccountRepository::new();
        let id1 = repository.create("Angelo", Money::from_cents(15000)).unwrap();
        let id2 = repository
            .create("Clarice", Money::from_cents(25000))
            .unwrap();
        (repository, id1, id2)
    }

    #[test]
    fn test_balance() {
        let (repository, id1, _) = setup();
        let service = BalanceService::new(&repository);

        assert_eq!(service.balance(id1).unwrap(), Money::from_cents(15000));
    }

    #[test]
    fn test_debit() {
        let (repository, id1, _) = setup();
        let service = BalanceService::new(&repository);

        service.debit(id1, Money::from_cents(5000)).unwrap();

        assert_eq!(service.balance(id1).unwrap(), Money::from_cents(10000));
    }

    #[test]
    fn test_debit_is_not_guarded_against_overdraft() {
        let repository = AccountRepository::new();
        let id = repository.create("Angelo", Money::from_cents(5000)).unwrap();
        let service = BalanceService::new(&repository);

        service.debit(id, Money::from_cents(10000)).unwrap();

        assert_eq!(service.balance(id).unwrap(), Money::from_cents(-5000));
    }

    #[test]
    fn test_credit() {
        let (repository, id1, _) = setup();
        let service = BalanceService::new(&repository);

        service.credit(id1, Money::from_cents(5000)).unwrap();

        assert_eq!(service.balance(id1).unwrap(), Money::from_cents(20000));
    }

    #[test]
    fn test_transfer() {
        let (repository, id1, id2) = setup();
        let service = BalanceService::new(&repository);

        service.transfer(id1, id2, Money::from_cents(5000)).unwrap();

        assert_eq!(service.balance(id1).unwrap(), Money::from_cents(10000));
        assert_eq!(service.balance(id2).unwrap(), Money::from_cents(30000));
    }

    #[test]
    fn test_balance_account_not_found() {
        let repository = AccountRepository::new();
        let service = BalanceService::new(&repository);

        let err = service.balance(AccountId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_debit_account_not_found() {
        let repository = AccountRepository::new();
        let service = BalanceService::new(&repository);

        let err = service.debit(AccountId::new(), Money::from_cents(100)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_credit_account_not_found() {
        let repository = AccountRepository::new();
        let service = BalanceService::new(&repository);

        let err = service
            .credit(AccountId::new(), Money::from_cents(100))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_transfer_from_account_not_found() {
        let (repository, _, id2) = setup();
        let service = BalanceService::new(&repository);

        let err = service
            .transfer(AccountId::new(), id2, Money::from_cents(100))
            .unwrap_err();

        assert!(err.is_not_found());
        // no write happened
        assert_eq!(service.balance(id2).unwrap(), Money::from_cents(25000));
    }

    #[test]
    fn test_transfer_to_account_not_found() {
        let (repository, id1, _) = setup();
        let service = BalanceService::new(&repository);

        let err = service
            .transfer(id1, AccountId::new(), Money::from_cents(100))
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(service.balance(id1).unwrap(), Money::from_cents(15000));
    }

    #[test]
    fn test_transfer_neither_account_found() {
        let repository = AccountRepository::new();
        let service = BalanceService::new(&repository);

        let err = service
            .transfer(AccountId::new(), AccountId::new(), Money::from_cents(100))
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
