//! Money balance with guarded withdrawal and income/expense history

use serde::Serialize;

use crate::core::error::{Result, ZooError};

#[derive(Debug, Clone, Serialize)]
pub struct LedgerEntry {
    pub amount: f64,
    pub reason: String,
}

/// The zoo's finances
///
/// Balance never goes negative through an expense: a debit larger than
/// the balance is rejected before any mutation.
#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    balance: f64,
    income_history: Vec<LedgerEntry>,
    expense_history: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new(starting_balance: f64) -> Self {
        Self {
            balance: starting_balance,
            income_history: Vec::new(),
            expense_history: Vec::new(),
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn add_income(&mut self, amount: f64, reason: impl Into<String>) {
        self.balance += amount;
        self.income_history.push(LedgerEntry { amount, reason: reason.into() });
    }

    pub fn add_expense(&mut self, amount: f64, reason: impl Into<String>) -> Result<()> {
        if amount > self.balance {
            return Err(ZooError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.expense_history.push(LedgerEntry { amount, reason: reason.into() });
        Ok(())
    }

    pub fn income_history(&self) -> &[LedgerEntry] {
        &self.income_history
    }

    pub fn expense_history(&self) -> &[LedgerEntry] {
        &self.expense_history
    }
}
