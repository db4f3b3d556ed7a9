//! Working state for one month of income and expenses
//!
//! A `CalcSession` holds what the user has entered so far and turns it into
//! a [`TaxSummary`] with a [`TaxCalculator`]. It owns no storage; snapshots
//! go through the history module.

use bigdecimal::BigDecimal;
use std::collections::HashMap;

use crate::tax::{net_of_vat, net_result, vat_component, DeductionPolicy, TaxCalculator};
use crate::traits::{DefaultExpenseValidator, ExpenseValidator};
use crate::types::*;
use crate::utils::money::round_currency;

/// In-memory working state: monthly gross income, session expenses and
/// yearly fixed expenses
pub struct CalcSession {
    income: BigDecimal,
    expenses: Vec<Expense>,
    fixed_expenses: Vec<FixedExpense>,
    validator: Box<dyn ExpenseValidator>,
}

impl CalcSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self {
            income: BigDecimal::from(0),
            expenses: Vec::new(),
            fixed_expenses: Vec::new(),
            validator: Box::new(DefaultExpenseValidator),
        }
    }

    /// Create a session with a custom expense validator
    pub fn with_validator(validator: Box<dyn ExpenseValidator>) -> Self {
        Self {
            income: BigDecimal::from(0),
            expenses: Vec::new(),
            fixed_expenses: Vec::new(),
            validator,
        }
    }

    /// Set the monthly gross income (VAT-inclusive)
    ///
    /// A negative income is not meaningful and is clamped to 0.
    pub fn set_income(&mut self, income: BigDecimal) {
        let zero = BigDecimal::from(0);
        self.income = if income < zero { zero } else { income };
    }

    /// The current monthly gross income
    pub fn income(&self) -> &BigDecimal {
        &self.income
    }

    /// Add a session expense after validation
    pub fn add_expense(&mut self, expense: Expense) -> CalcResult<()> {
        self.validator.validate_expense(&expense)?;
        self.expenses.push(expense);
        Ok(())
    }

    /// Add a fixed yearly expense after validation
    pub fn add_fixed_expense(&mut self, fixed_expense: FixedExpense) -> CalcResult<()> {
        self.validator.validate_fixed_expense(&fixed_expense)?;
        self.fixed_expenses.push(fixed_expense);
        Ok(())
    }

    /// Remove a session expense by ID
    pub fn remove_expense(&mut self, expense_id: &str) -> CalcResult<()> {
        let position = self
            .expenses
            .iter()
            .position(|expense| expense.id == expense_id)
            .ok_or_else(|| CalcError::ExpenseNotFound(expense_id.to_string()))?;
        self.expenses.remove(position);
        Ok(())
    }

    /// Remove a fixed expense by name
    pub fn remove_fixed_expense(&mut self, name: &str) -> CalcResult<()> {
        let position = self
            .fixed_expenses
            .iter()
            .position(|fixed| fixed.name == name)
            .ok_or_else(|| CalcError::ExpenseNotFound(name.to_string()))?;
        self.fixed_expenses.remove(position);
        Ok(())
    }

    /// Clear all session and fixed expenses
    pub fn clear_expenses(&mut self) {
        self.expenses.clear();
        self.fixed_expenses.clear();
    }

    /// Session expenses entered so far
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Fixed expenses entered so far
    pub fn fixed_expenses(&self) -> &[FixedExpense] {
        &self.fixed_expenses
    }

    /// Total gross expenses: session amounts plus fixed monthly equivalents
    pub fn total_expenses(&self) -> BigDecimal {
        let session_total: BigDecimal = self.expenses.iter().map(|e| &e.amount).sum();
        let fixed_total: BigDecimal = self
            .fixed_expenses
            .iter()
            .map(|f| f.monthly_amount())
            .sum();
        round_currency(&(session_total + fixed_total))
    }

    /// Session expense totals grouped by category, largest first
    pub fn category_breakdown(&self) -> Vec<CategoryTotal> {
        let mut totals: HashMap<ExpenseCategory, BigDecimal> = HashMap::new();
        for expense in &self.expenses {
            let entry = totals
                .entry(expense.category)
                .or_insert_with(|| BigDecimal::from(0));
            *entry += &expense.amount;
        }

        let mut breakdown: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect();
        breakdown.sort_by(|a, b| b.total.cmp(&a.total));
        breakdown
    }

    /// Compute the monthly tax summary with the given calculator
    ///
    /// Fixed expenses are treated as invoiced: their monthly-equivalent VAT
    /// always counts toward the deduction.
    pub fn summarize(&self, calculator: &TaxCalculator) -> TaxSummary {
        let gross_income = self.income.clone();
        let total_expenses = self.total_expenses();

        let expense_vat = crate::tax::deductible_vat(&self.expenses);
        let fixed_vat: BigDecimal = self
            .fixed_expenses
            .iter()
            .map(|f| vat_component(&f.monthly_amount(), &f.vat_rate))
            .sum();
        let deductible_vat = round_currency(&(expense_vat + fixed_vat));

        let income_vat = vat_component(&gross_income, calculator.income_vat_rate());
        let vat_payable = calculator.vat_payable_on_income(&gross_income, &deductible_vat);

        let deduction_base = match calculator.deduction_policy() {
            DeductionPolicy::InvoicedNetOfVat => {
                let invoiced: BigDecimal = self
                    .expenses
                    .iter()
                    .filter(|e| e.has_invoice)
                    .map(|e| net_of_vat(&e.amount, &e.vat_rate))
                    .sum();
                let fixed: BigDecimal = self
                    .fixed_expenses
                    .iter()
                    .map(|f| net_of_vat(&f.monthly_amount(), &f.vat_rate))
                    .sum();
                invoiced + fixed
            }
            DeductionPolicy::AllExpensesGross => total_expenses.clone(),
        };

        let net_income = net_of_vat(&gross_income, calculator.income_vat_rate());
        let taxable_income = round_currency(&(net_income - deduction_base));
        let income_tax = calculator.monthly_income_tax(&taxable_income);

        let total_tax = round_currency(&(&vat_payable + &income_tax));
        let net_result = net_result(&gross_income, &total_expenses, &vat_payable, &income_tax);

        TaxSummary {
            gross_income,
            total_expenses,
            income_vat,
            deductible_vat,
            vat_payable,
            taxable_income,
            income_tax,
            total_tax,
            net_result,
        }
    }
}

impl Default for CalcSession {
    fn default() -> Self {
        Self::new()
    }
}
