//! Error types for the statement analyzer.

use thiserror::Error;

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Fatal, whole-run errors.
///
/// Per-line defects (an unparseable amount, an unmatched description) are not
/// errors: they are logged and the scan continues. Everything here aborts the
/// run before any chart is produced.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Category mapping file could not be deserialized
    #[error("Category config error: {0}")]
    CategoryConfig(#[from] serde_json::Error),

    /// `pdftotext` could not be run or reported failure
    #[error("PDF conversion failed: {message}")]
    PdfConversion { message: String },

    /// The statement file contained no lines at all
    #[error("No lines were read from the statement file")]
    EmptyStatement,

    /// Computed balance disagrees with the statement's stated closing balance
    #[error(
        "Calculated balance ({calculated:.2}) does not match closing balance ({closing:.2})"
    )]
    BalanceMismatch { calculated: f64, closing: f64 },

    /// Per-category totals disagree with the computed spendings sum
    #[error(
        "Categorized spendings ({categorized:.2}) don't add up to calculated spendings ({spendings:.2})"
    )]
    CategorizedSpendingsMismatch { categorized: f64, spendings: f64 },

    /// Chart backend failure while rendering the summary
    #[error("Chart rendering error: {0}")]
    Chart(String),
}
