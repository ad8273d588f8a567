//! # Statement Analyzer
//!
//! Parses the text export of a fixed-layout bank statement and classifies
//! each transaction into spending/income totals and shop-category buckets,
//! cross-validating the result against the statement's own balance figures
//! before rendering a summary chart.
//!
//! ## Design Principles
//!
//! - **Single-pass scan**: lines are consumed once, in order, with one
//!   pending-operation slot standing in for lookahead
//! - **Deterministic categorization**: keyword matching iterates in sorted
//!   order, so repeated runs bucket identically
//! - **Strict reconciliation**: computed totals must agree with the stated
//!   closing balance within a small tolerance, or the run aborts
//!
//! ## Example
//!
//! ```
//! use statement_analyzer::{CategoryMap, StatementEngine};
//!
//! let categories: CategoryMap = [("lidl", "Groceries")].into_iter().collect();
//!
//! let statement = "Saldo poprzednie  100,00\n\
//!                  01.01  01.01  Zakup kartą  -50,00  50,00\n\
//!                  Nr karty:  Lidl 77  Warszawa\n\
//!                  Saldo końcowe  50,00";
//!
//! let mut engine = StatementEngine::new(categories);
//! engine.process_lines(statement.lines());
//! let summary = engine.finish().unwrap();
//!
//! assert_eq!(summary.spendings, -50.0);
//! ```

pub mod categories;
pub mod chart;
pub mod engine;
pub mod error;
pub mod numeric;
pub mod pdf;
pub mod sections;
pub mod summary;

pub use categories::CategoryMap;
pub use engine::{ScanConfig, StatementEngine};
pub use error::{AnalyzerError, Result};
pub use summary::{CategoryBalances, StatementSummary};
