//! Progressive income-tax brackets (gelir vergisi)

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::utils::money::{rate_from_percent, round_currency};

/// One bracket of the progressive income-tax tariff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Exclusive lower bound of the bracket
    pub lower_bound: BigDecimal,
    /// Inclusive upper bound; `None` marks the unbounded top bracket
    pub upper_bound: Option<BigDecimal>,
    /// Marginal rate as a fraction (0.15 for 15%)
    pub marginal_rate: BigDecimal,
    /// Total tax owed on an income exactly at the lower bound
    pub cumulative_fixed_tax: BigDecimal,
}

impl TaxBracket {
    /// Create a bracket; `upper_bound = None` for the top bracket
    pub fn new(
        lower_bound: BigDecimal,
        upper_bound: Option<BigDecimal>,
        marginal_rate: BigDecimal,
        cumulative_fixed_tax: BigDecimal,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            marginal_rate,
            cumulative_fixed_tax,
        }
    }
}

/// Immutable progressive bracket table for one tax year
///
/// Brackets are sorted ascending, contiguous and non-overlapping; an income
/// exactly on a boundary belongs to the lower bracket (inclusive upper
/// bound). Construction validates all of this once, so lookups never fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTable {
    tax_year: i32,
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Build a validated table from raw brackets
    pub fn new(tax_year: i32, brackets: Vec<TaxBracket>) -> Result<Self, TaxError> {
        let table = Self { tax_year, brackets };
        table.validate()?;
        Ok(table)
    }

    /// Get the canonical table for a supported tax year
    pub fn for_year(tax_year: i32) -> Result<Self, TaxError> {
        match tax_year {
            2025 => Ok(Self::turkey_2025()),
            _ => Err(TaxError::UnknownTaxYear(tax_year)),
        }
    }

    /// Turkish income-tax tariff for 2025
    pub fn turkey_2025() -> Self {
        let brackets = vec![
            TaxBracket::new(
                BigDecimal::from(0),
                Some(BigDecimal::from(158_000)),
                rate_from_percent(15),
                BigDecimal::from(0),
            ),
            TaxBracket::new(
                BigDecimal::from(158_000),
                Some(BigDecimal::from(330_000)),
                rate_from_percent(20),
                BigDecimal::from(23_700),
            ),
            TaxBracket::new(
                BigDecimal::from(330_000),
                Some(BigDecimal::from(1_200_000)),
                rate_from_percent(27),
                BigDecimal::from(58_100),
            ),
            TaxBracket::new(
                BigDecimal::from(1_200_000),
                Some(BigDecimal::from(4_300_000)),
                rate_from_percent(35),
                BigDecimal::from(293_000),
            ),
            TaxBracket::new(
                BigDecimal::from(4_300_000),
                None,
                rate_from_percent(40),
                BigDecimal::from(1_378_000),
            ),
        ];
        Self {
            tax_year: 2025,
            brackets,
        }
    }

    /// The tax year this table applies to
    pub fn tax_year(&self) -> i32 {
        self.tax_year
    }

    /// The brackets, sorted ascending by lower bound
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Validate the table invariants
    fn validate(&self) -> Result<(), TaxError> {
        let zero = BigDecimal::from(0);

        if self.brackets.is_empty() {
            return Err(TaxError::InvalidTable("table has no brackets".to_string()));
        }

        let first = &self.brackets[0];
        if first.lower_bound != zero {
            return Err(TaxError::InvalidTable(format!(
                "first bracket must start at 0, starts at {}",
                first.lower_bound
            )));
        }
        if first.cumulative_fixed_tax != zero {
            return Err(TaxError::InvalidTable(
                "first bracket must carry no fixed tax".to_string(),
            ));
        }

        for (i, bracket) in self.brackets.iter().enumerate() {
            if bracket.marginal_rate < zero {
                return Err(TaxError::InvalidTable(format!(
                    "bracket {} has a negative marginal rate",
                    i
                )));
            }

            let is_last = i == self.brackets.len() - 1;
            match (&bracket.upper_bound, is_last) {
                (None, false) => {
                    return Err(TaxError::InvalidTable(format!(
                        "bracket {} is unbounded but not last",
                        i
                    )));
                }
                (Some(_), true) => {
                    return Err(TaxError::InvalidTable(
                        "last bracket must be unbounded".to_string(),
                    ));
                }
                (Some(upper), false) => {
                    if upper <= &bracket.lower_bound {
                        return Err(TaxError::InvalidTable(format!(
                            "bracket {} has upper bound {} <= lower bound {}",
                            i, upper, bracket.lower_bound
                        )));
                    }

                    // Contiguity and cumulative consistency with the next bracket
                    let next = &self.brackets[i + 1];
                    if &next.lower_bound != upper {
                        return Err(TaxError::InvalidTable(format!(
                            "bracket {} ends at {} but bracket {} starts at {}",
                            i,
                            upper,
                            i + 1,
                            next.lower_bound
                        )));
                    }

                    let span_tax = (upper - &bracket.lower_bound) * &bracket.marginal_rate;
                    let expected = &bracket.cumulative_fixed_tax + span_tax;
                    if next.cumulative_fixed_tax != expected {
                        return Err(TaxError::InvalidTable(format!(
                            "bracket {} fixed tax {} does not match accumulated {}",
                            i + 1,
                            next.cumulative_fixed_tax,
                            expected
                        )));
                    }
                }
                (None, true) => {}
            }
        }

        Ok(())
    }

    /// Income tax owed on a taxable annual income
    ///
    /// Finds the bracket with `lower < income <= upper` and returns
    /// `cumulative_fixed_tax + (income - lower) * marginal_rate`, rounded to
    /// currency precision. Non-positive income owes nothing.
    pub fn income_tax(&self, taxable_annual_income: &BigDecimal) -> BigDecimal {
        let zero = BigDecimal::from(0);
        if taxable_annual_income <= &zero {
            return zero;
        }

        for bracket in &self.brackets {
            let above_lower = taxable_annual_income > &bracket.lower_bound;
            let within_upper = bracket
                .upper_bound
                .as_ref()
                .map_or(true, |upper| taxable_annual_income <= upper);

            if above_lower && within_upper {
                let marginal =
                    (taxable_annual_income - &bracket.lower_bound) * &bracket.marginal_rate;
                return round_currency(&(&bracket.cumulative_fixed_tax + marginal));
            }
        }

        // Unreachable with a validated table: brackets cover (0, inf)
        zero
    }
}

/// Errors from bracket-table construction and lookup
#[derive(Debug, thiserror::Error)]
pub enum TaxError {
    #[error("Invalid bracket table: {0}")]
    InvalidTable(String),
    #[error("No bracket table for tax year {0}")]
    UnknownTaxYear(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BracketTable {
        BracketTable::turkey_2025()
    }

    #[test]
    fn test_non_positive_income_owes_nothing() {
        assert_eq!(table().income_tax(&BigDecimal::from(0)), BigDecimal::from(0));
        assert_eq!(table().income_tax(&BigDecimal::from(-5000)), BigDecimal::from(0));
    }

    #[test]
    fn test_boundary_belongs_to_lower_bracket() {
        // 158,000 * 0.15 = 23,700, computed entirely in the first bracket
        assert_eq!(
            table().income_tax(&BigDecimal::from(158_000)),
            BigDecimal::from(23_700)
        );
        // Just above the boundary the tax is continuous
        let just_above: BigDecimal = "158000.01".parse().unwrap();
        assert_eq!(
            table().income_tax(&just_above),
            "23700.00".parse::<BigDecimal>().unwrap()
        );
    }

    #[test]
    fn test_continuity_at_every_boundary() {
        for bracket in table().brackets() {
            if let Some(upper) = &bracket.upper_bound {
                let at_boundary = table().income_tax(upper);
                let epsilon: BigDecimal = "0.01".parse().unwrap();
                let just_above = table().income_tax(&(upper + &epsilon));
                let gap = (just_above - at_boundary).abs();
                assert!(gap <= epsilon, "discontinuity above {}", upper);
            }
        }
    }

    #[test]
    fn test_top_bracket() {
        // 1,378,000 + (5,000,000 - 4,300,000) * 0.40 = 1,658,000
        assert_eq!(
            table().income_tax(&BigDecimal::from(5_000_000)),
            BigDecimal::from(1_658_000)
        );
    }

    #[test]
    fn test_middle_brackets() {
        // 23,700 + (200,000 - 158,000) * 0.20 = 32,100
        assert_eq!(
            table().income_tax(&BigDecimal::from(200_000)),
            BigDecimal::from(32_100)
        );
        // 58,100 + (500,000 - 330,000) * 0.27 = 104,000
        assert_eq!(
            table().income_tax(&BigDecimal::from(500_000)),
            BigDecimal::from(104_000)
        );
        // 293,000 + (2,000,000 - 1,200,000) * 0.35 = 573,000
        assert_eq!(
            table().income_tax(&BigDecimal::from(2_000_000)),
            BigDecimal::from(573_000)
        );
    }

    #[test]
    fn test_monotonically_non_decreasing() {
        let samples = [
            0, 1, 100_000, 158_000, 158_001, 250_000, 330_000, 500_000, 1_200_000, 2_000_000,
            4_300_000, 5_000_000, 10_000_000,
        ];
        let mut previous = BigDecimal::from(-1);
        for income in samples {
            let tax = table().income_tax(&BigDecimal::from(income));
            assert!(tax >= previous, "tax decreased at income {}", income);
            previous = tax;
        }
    }

    #[test]
    fn test_for_year() {
        assert!(BracketTable::for_year(2025).is_ok());
        assert!(matches!(
            BracketTable::for_year(1999),
            Err(TaxError::UnknownTaxYear(1999))
        ));
    }

    #[test]
    fn test_rejects_gap_between_brackets() {
        let brackets = vec![
            TaxBracket::new(
                BigDecimal::from(0),
                Some(BigDecimal::from(100_000)),
                rate_from_percent(15),
                BigDecimal::from(0),
            ),
            TaxBracket::new(
                BigDecimal::from(150_000),
                None,
                rate_from_percent(20),
                BigDecimal::from(15_000),
            ),
        ];
        assert!(matches!(
            BracketTable::new(2025, brackets),
            Err(TaxError::InvalidTable(_))
        ));
    }

    #[test]
    fn test_rejects_inconsistent_fixed_tax() {
        let brackets = vec![
            TaxBracket::new(
                BigDecimal::from(0),
                Some(BigDecimal::from(100_000)),
                rate_from_percent(15),
                BigDecimal::from(0),
            ),
            TaxBracket::new(
                BigDecimal::from(100_000),
                None,
                rate_from_percent(20),
                // Should be 15,000
                BigDecimal::from(14_000),
            ),
        ];
        assert!(matches!(
            BracketTable::new(2025, brackets),
            Err(TaxError::InvalidTable(_))
        ));
    }

    #[test]
    fn test_rejects_bounded_last_bracket() {
        let brackets = vec![TaxBracket::new(
            BigDecimal::from(0),
            Some(BigDecimal::from(100_000)),
            rate_from_percent(15),
            BigDecimal::from(0),
        )];
        assert!(matches!(
            BracketTable::new(2025, brackets),
            Err(TaxError::InvalidTable(_))
        ));
    }
}
