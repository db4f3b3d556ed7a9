//! VAT (KDV) and income-tax calculation examples

use bigdecimal::BigDecimal;
use cargocalc_core::{
    deductible_vat, net_of_vat, vat_component, vat_payable, BracketTable, Expense, TaxCalculator,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 CargoCalc Core - VAT and Income Tax Examples\n");

    // 1. Decomposing a VAT-inclusive amount
    println!("📊 VAT Decomposition (gross 125,000 @ 20%):");
    let gross = BigDecimal::from(125_000);
    let rate = BigDecimal::from(20);
    println!("  Embedded VAT: ₺{}", vat_component(&gross, &rate));
    println!("  Net of VAT:   ₺{}", net_of_vat(&gross, &rate));
    println!();

    // 2. Deductible VAT is invoice-gated
    println!("🧾 Deductible VAT (only invoiced expenses count):");
    let expenses = vec![
        Expense::new(
            "Mazot".to_string(),
            BigDecimal::from(10_000),
            BigDecimal::from(20),
            true,
        ),
        Expense::new(
            "Yemek".to_string(),
            BigDecimal::from(600),
            BigDecimal::from(20),
            false,
        ),
    ];
    let deductible = deductible_vat(&expenses);
    println!("  Deductible: ₺{}", deductible);
    println!("  Payable:    ₺{}", vat_payable(&gross, &rate, &deductible));
    println!();

    // 3. Progressive income tax across the tariff
    println!("📈 Income Tax by Annual Income (2025 tariff):");
    let calculator = TaxCalculator::new(BracketTable::turkey_2025());
    for income in [100_000, 158_000, 250_000, 500_000, 2_000_000, 5_000_000] {
        let tax = calculator.income_tax(&BigDecimal::from(income));
        println!("  ₺{:>9} -> ₺{}", income, tax);
    }
    println!();

    // 4. Monthly income tax annualizes before the bracket lookup
    println!("📅 Monthly Income Tax:");
    for monthly in [10_000, 20_000, 50_000] {
        let tax = calculator.monthly_income_tax(&BigDecimal::from(monthly));
        println!("  ₺{:>6}/month -> ₺{}/month", monthly, tax);
    }

    Ok(())
}
