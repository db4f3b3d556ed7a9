//! Core types and data structures for the expense and tax calculator

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::money::round_currency;

/// Expense categories used for grouping the monthly breakdown
///
/// Classification is keyword-based on the expense name, matching the
/// Turkish terms freight workers actually type in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Fuel purchases (yakıt, benzin, mazot)
    Fuel,
    /// Road, bridge and highway tolls (yol, otoyol, köprü, geçiş)
    Tolls,
    /// Vehicle maintenance and repairs (bakım, onarım, servis, lastik)
    Maintenance,
    /// Insurance premiums (sigorta, kasko)
    Insurance,
    /// Meals on the road (yemek, restoran, kahvaltı)
    Meals,
    /// Recurring bills (telefon, elektrik, su, internet)
    Utilities,
    /// Anything that matches no known keyword
    Other,
}

impl ExpenseCategory {
    /// Classify an expense by its free-text name
    pub fn from_name(name: &str) -> Self {
        let keyword = name.to_lowercase();
        let contains_any = |words: &[&str]| words.iter().any(|w| keyword.contains(w));

        if contains_any(&["yakıt", "benzin", "mazot"]) {
            ExpenseCategory::Fuel
        } else if contains_any(&["yol", "otoyol", "köprü", "geçiş"]) {
            ExpenseCategory::Tolls
        } else if contains_any(&["bakım", "onarım", "servis", "lastik"]) {
            ExpenseCategory::Maintenance
        } else if contains_any(&["sigorta", "kasko"]) {
            ExpenseCategory::Insurance
        } else if contains_any(&["yemek", "restoran", "kahvaltı", "öğle", "akşam"]) {
            ExpenseCategory::Meals
        } else if contains_any(&["telefon", "elektrik", "su", "gaz", "internet"]) {
            ExpenseCategory::Utilities
        } else {
            ExpenseCategory::Other
        }
    }
}

/// A single expense entered for the current month
///
/// Amounts are VAT-inclusive; the VAT rate is a percentage (20 for 20%).
/// Only invoiced expenses contribute deductible VAT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier for deletion from the session
    pub id: String,
    /// Free-text name as entered by the user
    pub name: String,
    /// Gross amount, VAT included
    pub amount: BigDecimal,
    /// VAT percentage embedded in the amount
    pub vat_rate: BigDecimal,
    /// Whether an invoice (fatura) backs this expense
    pub has_invoice: bool,
    /// Derived category for the breakdown
    pub category: ExpenseCategory,
}

impl Expense {
    /// Create a new expense with a generated ID and derived category
    pub fn new(name: String, amount: BigDecimal, vat_rate: BigDecimal, has_invoice: bool) -> Self {
        let category = ExpenseCategory::from_name(&name);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            amount,
            vat_rate,
            has_invoice,
            category,
        }
    }
}

/// A recurring yearly expense (insurance, inspection, chamber fees)
///
/// Aggregation works on monthly figures, so the yearly amount is spread
/// evenly across twelve months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedExpense {
    /// Free-text name as entered by the user
    pub name: String,
    /// Gross yearly amount, VAT included
    pub yearly_amount: BigDecimal,
    /// VAT percentage embedded in the amount
    pub vat_rate: BigDecimal,
}

impl FixedExpense {
    /// Create a new fixed expense
    pub fn new(name: String, yearly_amount: BigDecimal, vat_rate: BigDecimal) -> Self {
        Self {
            name,
            yearly_amount,
            vat_rate,
        }
    }

    /// Monthly-equivalent gross amount (yearly amount / 12, rounded)
    pub fn monthly_amount(&self) -> BigDecimal {
        round_currency(&(&self.yearly_amount / BigDecimal::from(12)))
    }
}

/// Complete monthly tax and income breakdown
///
/// All figures are monthly and rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSummary {
    /// Gross income, VAT included
    pub gross_income: BigDecimal,
    /// Session expenses plus fixed-expense monthly equivalents
    pub total_expenses: BigDecimal,
    /// VAT embedded in the gross income
    pub income_vat: BigDecimal,
    /// Deductible VAT from invoiced and fixed expenses
    pub deductible_vat: BigDecimal,
    /// VAT owed after deduction, never negative
    pub vat_payable: BigDecimal,
    /// Income-tax base after the configured expense deduction
    pub taxable_income: BigDecimal,
    /// Monthly income tax from the progressive bracket table
    pub income_tax: BigDecimal,
    /// VAT payable plus income tax
    pub total_tax: BigDecimal,
    /// Income minus expenses and taxes, negative on a loss
    pub net_result: BigDecimal,
}

/// Per-category expense total for the monthly breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: BigDecimal,
}

/// An append-only snapshot of one computed summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique identifier for individual deletion
    pub id: String,
    /// When the snapshot was recorded (UTC)
    pub recorded_at: NaiveDateTime,
    /// Gross income the summary was computed from
    pub income: BigDecimal,
    /// Session expenses at the time of recording
    pub expenses: Vec<Expense>,
    /// Fixed expenses at the time of recording
    pub fixed_expenses: Vec<FixedExpense>,
    /// The computed breakdown
    pub summary: TaxSummary,
}

impl HistoryRecord {
    /// Create a new record with a generated ID and the current timestamp
    pub fn new(
        income: BigDecimal,
        expenses: Vec<Expense>,
        fixed_expenses: Vec<FixedExpense>,
        summary: TaxSummary,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            recorded_at: chrono::Utc::now().naive_utc(),
            income,
            expenses,
            fixed_expenses,
            summary,
        }
    }
}

/// Errors that can occur in the calculator system
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(String),
    #[error("History record not found: {0}")]
    RecordNotFound(String),
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
