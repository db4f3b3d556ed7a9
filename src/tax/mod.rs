//! Tax calculation engine: progressive income tax and VAT (KDV)

pub mod income;
pub mod vat;

pub use income::*;
pub use vat::*;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::utils::money::round_currency;

/// How expenses reduce the income-tax base
///
/// The app's drafts disagreed on this, so it is an explicit policy rather
/// than a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeductionPolicy {
    /// Only invoiced expenses reduce the base, at their VAT-exclusive amount
    InvoicedNetOfVat,
    /// Every expense reduces the base at its gross amount, invoice or not
    AllExpensesGross,
}

impl Default for DeductionPolicy {
    fn default() -> Self {
        DeductionPolicy::InvoicedNetOfVat
    }
}

/// Tax calculation engine
///
/// Pure and stateless: holds an immutable bracket table, the VAT rate
/// applied to income (20% for freight work), and the expense deduction
/// policy. Safe to share and call from anywhere.
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    table: BracketTable,
    income_vat_rate: BigDecimal,
    deduction_policy: DeductionPolicy,
}

impl TaxCalculator {
    /// Create a calculator with the standard 20% income VAT rate and the
    /// default deduction policy
    pub fn new(table: BracketTable) -> Self {
        Self {
            table,
            income_vat_rate: BigDecimal::from(20),
            deduction_policy: DeductionPolicy::default(),
        }
    }

    /// Override the VAT rate applied to income
    pub fn with_income_vat_rate(mut self, income_vat_rate: BigDecimal) -> Self {
        self.income_vat_rate = income_vat_rate;
        self
    }

    /// Override the expense deduction policy
    pub fn with_deduction_policy(mut self, deduction_policy: DeductionPolicy) -> Self {
        self.deduction_policy = deduction_policy;
        self
    }

    /// The bracket table in use
    pub fn table(&self) -> &BracketTable {
        &self.table
    }

    /// The VAT rate applied to income, as a percentage
    pub fn income_vat_rate(&self) -> &BigDecimal {
        &self.income_vat_rate
    }

    /// The configured expense deduction policy
    pub fn deduction_policy(&self) -> DeductionPolicy {
        self.deduction_policy
    }

    /// Income tax owed on a taxable annual income
    pub fn income_tax(&self, taxable_annual_income: &BigDecimal) -> BigDecimal {
        self.table.income_tax(taxable_annual_income)
    }

    /// Monthly income tax: annualize, tax, spread back over twelve months
    ///
    /// Bracket bounds are annual figures, so a monthly base must be
    /// annualized before lookup.
    pub fn monthly_income_tax(&self, taxable_monthly_income: &BigDecimal) -> BigDecimal {
        let annual = taxable_monthly_income * BigDecimal::from(12);
        let annual_tax = self.table.income_tax(&annual);
        round_currency(&(annual_tax / BigDecimal::from(12)))
    }

    /// VAT payable on a gross income, after subtracting deductible VAT
    pub fn vat_payable_on_income(
        &self,
        gross_income: &BigDecimal,
        deductible: &BigDecimal,
    ) -> BigDecimal {
        vat::vat_payable(gross_income, &self.income_vat_rate, deductible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_income_tax_annualizes() {
        let calculator = TaxCalculator::new(BracketTable::turkey_2025());
        // 10,000/month -> 120,000/year -> 18,000 tax -> 1,500/month
        assert_eq!(
            calculator.monthly_income_tax(&BigDecimal::from(10_000)),
            BigDecimal::from(1_500)
        );
        // 20,000/month -> 240,000/year crosses into the 20% bracket:
        // 23,700 + 82,000 * 0.20 = 40,100 -> 3,341.67/month
        assert_eq!(
            calculator.monthly_income_tax(&BigDecimal::from(20_000)),
            "3341.67".parse::<BigDecimal>().unwrap()
        );
    }

    #[test]
    fn test_monthly_income_tax_non_positive() {
        let calculator = TaxCalculator::new(BracketTable::turkey_2025());
        assert_eq!(
            calculator.monthly_income_tax(&BigDecimal::from(-100)),
            BigDecimal::from(0)
        );
    }

    #[test]
    fn test_custom_income_vat_rate() {
        let calculator = TaxCalculator::new(BracketTable::turkey_2025())
            .with_income_vat_rate(BigDecimal::from(10));
        // 110,000 * 10 / 110 = 10,000
        assert_eq!(
            calculator.vat_payable_on_income(&BigDecimal::from(110_000), &BigDecimal::from(0)),
            BigDecimal::from(10_000)
        );
    }
}
