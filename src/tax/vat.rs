//! VAT (KDV) decomposition of VAT-inclusive amounts
//!
//! Turkish invoices quote gross, VAT-inclusive amounts, so the embedded VAT
//! is recovered with `gross * rate / (100 + rate)`. All functions are total:
//! non-positive amounts and rates yield 0 rather than an error.

use bigdecimal::BigDecimal;

use crate::types::Expense;
use crate::utils::money::round_currency;

/// VAT portion embedded in a VAT-inclusive gross amount
///
/// `vat_rate` is a percentage (20 for 20%). A rate of 0 or a non-positive
/// gross yields 0.
pub fn vat_component(gross_amount: &BigDecimal, vat_rate: &BigDecimal) -> BigDecimal {
    let zero = BigDecimal::from(0);
    if gross_amount <= &zero || vat_rate <= &zero {
        return zero;
    }
    let divisor = BigDecimal::from(100) + vat_rate;
    round_currency(&((gross_amount * vat_rate) / divisor))
}

/// VAT-exclusive portion of a VAT-inclusive gross amount
pub fn net_of_vat(gross_amount: &BigDecimal, vat_rate: &BigDecimal) -> BigDecimal {
    gross_amount - vat_component(gross_amount, vat_rate)
}

/// Total deductible VAT over a set of expenses
///
/// Only invoiced expenses contribute; an expense without an invoice carries
/// no deductible VAT regardless of its rate.
pub fn deductible_vat(expenses: &[Expense]) -> BigDecimal {
    expenses
        .iter()
        .filter(|expense| expense.has_invoice)
        .map(|expense| vat_component(&expense.amount, &expense.vat_rate))
        .sum()
}

/// VAT liability: VAT on income minus deductible VAT, floored at zero
///
/// No refund is modeled, so excess deductible VAT is lost rather than
/// returned as a negative liability.
pub fn vat_payable(
    gross_income: &BigDecimal,
    vat_rate_on_income: &BigDecimal,
    deductible: &BigDecimal,
) -> BigDecimal {
    let zero = BigDecimal::from(0);
    let liability = vat_component(gross_income, vat_rate_on_income) - deductible;
    if liability < zero {
        zero
    } else {
        round_currency(&liability)
    }
}

/// Net result after expenses and taxes; negative on a loss
pub fn net_result(
    gross_income: &BigDecimal,
    total_expenses: &BigDecimal,
    vat_payable: &BigDecimal,
    income_tax_owed: &BigDecimal,
) -> BigDecimal {
    round_currency(&(gross_income - total_expenses - vat_payable - income_tax_owed))
}
