//! Boundary validation and numeric coercion
//!
//! Raw form input arrives as loosely-typed numbers. Everything is coerced
//! or rejected here, before it reaches the calculator, which is total over
//! its inputs and never validates.

use bigdecimal::{BigDecimal, FromPrimitive};

use crate::traits::ExpenseValidator;
use crate::types::*;

/// Coerce a raw numeric input to a non-negative amount
///
/// NaN, infinities and negative values all become 0, so malformed form
/// input can never reach the calculator.
pub fn coerce_amount(value: f64) -> BigDecimal {
    if !value.is_finite() || value < 0.0 {
        return BigDecimal::from(0);
    }
    BigDecimal::from_f64(value).unwrap_or_else(|| BigDecimal::from(0))
}

/// Coerce an optional raw numeric input, treating missing as 0
pub fn coerce_optional_amount(value: Option<f64>) -> BigDecimal {
    value.map(coerce_amount).unwrap_or_else(|| BigDecimal::from(0))
}

/// Validate that an expense name is usable
pub fn validate_expense_name(name: &str) -> CalcResult<()> {
    if name.trim().is_empty() {
        return Err(CalcError::Validation(
            "Expense name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(CalcError::Validation(
            "Expense name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a VAT rate is a percentage between 0 and 100
pub fn validate_vat_rate(vat_rate: &BigDecimal) -> CalcResult<()> {
    if *vat_rate < BigDecimal::from(0) || *vat_rate > BigDecimal::from(100) {
        return Err(CalcError::Validation(format!(
            "VAT rate must be between 0 and 100, got {}",
            vat_rate
        )));
    }

    Ok(())
}

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> CalcResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(CalcError::Validation(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Strict expense validator with full field checks
pub struct StrictExpenseValidator;

impl ExpenseValidator for StrictExpenseValidator {
    fn validate_expense(&self, expense: &Expense) -> CalcResult<()> {
        validate_expense_name(&expense.name)?;
        validate_positive_amount(&expense.amount)?;
        validate_vat_rate(&expense.vat_rate)?;
        Ok(())
    }

    fn validate_fixed_expense(&self, fixed_expense: &FixedExpense) -> CalcResult<()> {
        validate_expense_name(&fixed_expense.name)?;
        validate_positive_amount(&fixed_expense.yearly_amount)?;
        validate_vat_rate(&fixed_expense.vat_rate)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_amount_handles_malformed_input() {
        assert_eq!(coerce_amount(f64::NAN), BigDecimal::from(0));
        assert_eq!(coerce_amount(f64::INFINITY), BigDecimal::from(0));
        assert_eq!(coerce_amount(-125.5), BigDecimal::from(0));
        assert_eq!(coerce_amount(0.0), BigDecimal::from(0));
    }

    #[test]
    fn test_coerce_amount_passes_valid_input() {
        assert_eq!(coerce_amount(1500.0), BigDecimal::from(1500));
    }

    #[test]
    fn test_coerce_optional_amount() {
        assert_eq!(coerce_optional_amount(None), BigDecimal::from(0));
        assert_eq!(coerce_optional_amount(Some(250.0)), BigDecimal::from(250));
    }

    #[test]
    fn test_validate_vat_rate_range() {
        assert!(validate_vat_rate(&BigDecimal::from(0)).is_ok());
        assert!(validate_vat_rate(&BigDecimal::from(20)).is_ok());
        assert!(validate_vat_rate(&BigDecimal::from(101)).is_err());
        assert!(validate_vat_rate(&BigDecimal::from(-1)).is_err());
    }

    #[test]
    fn test_strict_validator_rejects_bad_rate() {
        let validator = StrictExpenseValidator;
        let expense = Expense::new(
            "Mazot".to_string(),
            BigDecimal::from(1000),
            BigDecimal::from(150),
            true,
        );
        assert!(matches!(
            validator.validate_expense(&expense),
            Err(CalcError::Validation(_))
        ));
    }

    #[test]
    fn test_strict_validator_rejects_zero_amount() {
        let validator = StrictExpenseValidator;
        let fixed = FixedExpense::new("Kasko".to_string(), BigDecimal::from(0), BigDecimal::from(20));
        assert!(validator.validate_fixed_expense(&fixed).is_err());
    }
}
