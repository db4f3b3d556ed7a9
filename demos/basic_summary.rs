//! End-to-end monthly summary example

use bigdecimal::BigDecimal;
use cargocalc_core::{
    utils::MemoryStorage, BracketTable, CalcSession, Expense, FixedExpense, HistoryManager,
    TaxCalculator,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚚 CargoCalc Core - Monthly Summary Example\n");

    let calculator = TaxCalculator::new(BracketTable::turkey_2025());

    // 1. Enter the month's income and expenses
    let mut session = CalcSession::new();
    session.set_income(BigDecimal::from(125_000));

    session.add_expense(Expense::new(
        "Mazot".to_string(),
        BigDecimal::from(10_000),
        BigDecimal::from(20),
        true,
    ))?;
    session.add_expense(Expense::new(
        "Otoyol geçişi".to_string(),
        BigDecimal::from(1_200),
        BigDecimal::from(20),
        false,
    ))?;
    session.add_fixed_expense(FixedExpense::new(
        "Trafik sigortası".to_string(),
        BigDecimal::from(12_000),
        BigDecimal::from(20),
    ))?;

    // 2. Compute the summary
    let summary = session.summarize(&calculator);
    println!("📊 Monthly Breakdown:");
    println!("  Gross income:     ₺{}", summary.gross_income);
    println!("  Total expenses:   ₺{}", summary.total_expenses);
    println!("  VAT on income:    ₺{}", summary.income_vat);
    println!("  Deductible VAT:   ₺{}", summary.deductible_vat);
    println!("  VAT payable:      ₺{}", summary.vat_payable);
    println!("  Taxable income:   ₺{}", summary.taxable_income);
    println!("  Income tax:       ₺{}", summary.income_tax);
    println!("  Total tax:        ₺{}", summary.total_tax);
    println!("  Net result:       ₺{}", summary.net_result);
    println!();

    // 3. Expense breakdown by category
    println!("🍩 Expenses by Category:");
    for item in session.category_breakdown() {
        println!("  {:?}: ₺{}", item.category, item.total);
    }
    println!();

    // 4. Snapshot into history
    let mut history = HistoryManager::new(MemoryStorage::new());
    let record = history.record_snapshot(&session, &calculator).await?;
    println!("💾 Saved snapshot {} at {}", record.id, record.recorded_at);

    for record in history.list_records().await? {
        println!(
            "  {} -> net ₺{}",
            record.recorded_at.format("%Y-%m-%d %H:%M"),
            record.summary.net_result
        );
    }

    Ok(())
}
