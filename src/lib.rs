//! # CargoCalc Core
//!
//! The expense and tax calculation core of CargoCalc, an expense tracker
//! for freight workers in Turkey.
//!
//! ## Features
//!
//! - **Progressive income tax**: validated bracket tables versioned by tax
//!   year, with continuous marginal calculation
//! - **VAT (KDV) decomposition**: embedded-VAT extraction from gross
//!   amounts, invoice-gated deductible VAT, zero-floored VAT liability
//! - **Monthly summaries**: income, expense and tax breakdowns including
//!   fixed yearly expenses spread across months
//! - **Expense categorization**: keyword-based grouping for breakdowns
//! - **Calculation history**: append-only snapshots behind a trait-based
//!   storage abstraction
//!
//! ## Quick Start
//!
//! ```rust
//! use cargocalc_core::{BracketTable, CalcSession, Expense, TaxCalculator};
//! use bigdecimal::BigDecimal;
//!
//! let calculator = TaxCalculator::new(BracketTable::turkey_2025());
//!
//! let mut session = CalcSession::new();
//! session.set_income(BigDecimal::from(120_000));
//! session
//!     .add_expense(Expense::new(
//!         "Mazot".to_string(),
//!         BigDecimal::from(12_000),
//!         BigDecimal::from(20),
//!         true,
//!     ))
//!     .unwrap();
//!
//! let summary = session.summarize(&calculator);
//! assert_eq!(summary.vat_payable, BigDecimal::from(18_000));
//! ```

pub mod history;
pub mod session;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use history::*;
pub use session::*;
pub use tax::*;
pub use traits::*;
pub use types::*;
