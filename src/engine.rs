//! Statement classification engine.
//!
//! Scans the extracted statement lines once, in order, and dispatches on
//! the number of sections per line. The bank's layout puts a transaction's
//! signed amount and operation word on one five-column line and the
//! categorizing merchant detail on a following two- or three-column line,
//! so the engine carries a single pending-operation slot between lines
//! instead of buffering or looking ahead. A pending operation superseded by
//! the next amount line is abandoned: it stays in the totals but never
//! reaches a category, and reconciliation surfaces the gap.

use crate::categories::{CategoryMap, OTHER_CATEGORY};
use crate::error::{AnalyzerError, Result};
use crate::numeric::parse_amount;
use crate::sections::split_into_sections;
use crate::summary::{CategoryBalances, StatementSummary};
use log::{debug, warn};
use std::collections::BTreeSet;

/// Scan constants for one bank's statement layout.
///
/// Balance labels, the operation-keyword set, and the reconciliation
/// tolerance are all locale-specific; porting the scanner to another bank's
/// export means supplying a different config, not editing the engine.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Label announcing the opening balance on a two-column line.
    pub previous_balance_label: String,

    /// Label announcing the closing balance on a two-column line.
    pub closing_balance_label: String,

    /// Lowercase first words of descriptions identifying debit-type
    /// operations eligible for categorization.
    pub operation_keywords: BTreeSet<String>,

    /// Largest acceptable drift between computed and stated figures.
    pub tolerance: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            previous_balance_label: "Saldo poprzednie".to_string(),
            closing_balance_label: "Saldo końcowe".to_string(),
            operation_keywords: ["zakup", "przelew", "płatność", "opłata"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            tolerance: 0.01,
        }
    }
}

/// A transaction amount waiting for its descriptive line.
///
/// At most one operation is ever in flight; a new amount line overwrites a
/// pending one that was never described.
#[derive(Debug, Clone)]
struct PendingOperation {
    /// Lowercased first word of the amount line's description column.
    keyword: String,

    /// Signed transaction amount.
    amount: f64,
}

/// The statement classification engine.
///
/// Feed it the full ordered line sequence with [`process_lines`], then call
/// [`finish`] to reconcile and obtain the summary.
///
/// [`process_lines`]: StatementEngine::process_lines
/// [`finish`]: StatementEngine::finish
pub struct StatementEngine {
    config: ScanConfig,
    categories: CategoryMap,
    pending: Option<PendingOperation>,
    previous_balance: f64,
    closing_balance: f64,
    spendings: f64,
    incomes: f64,
    balances: CategoryBalances,
}

impl StatementEngine {
    /// Creates an engine with the default scan constants.
    pub fn new(categories: CategoryMap) -> Self {
        Self::with_config(categories, ScanConfig::default())
    }

    /// Creates an engine with explicit scan constants.
    pub fn with_config(categories: CategoryMap, config: ScanConfig) -> Self {
        StatementEngine {
            config,
            categories,
            pending: None,
            previous_balance: 0.0,
            closing_balance: 0.0,
            spendings: 0.0,
            incomes: 0.0,
            balances: CategoryBalances::new(),
        }
    }

    /// Scans the full ordered line sequence.
    pub fn process_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.process_line(line.as_ref());
        }
    }

    /// Applies the three scan rules to one line.
    ///
    /// The rules are independent and checked in a fixed order; lines with
    /// other section counts match none of them and are ignored.
    fn process_line(&mut self, line: &str) {
        let sections = split_into_sections(line);

        if sections.len() == 2 {
            self.scan_balance_labels(&sections);
        }

        if sections.len() == 2 || sections.len() == 3 {
            self.assign_category(&sections);
        }

        if sections.len() == 5 {
            self.scan_amount(&sections);
        }
    }

    /// Balance-label rule: a two-column line whose first column equals one
    /// of the balance labels stores the parsed second column.
    fn scan_balance_labels(&mut self, sections: &[&str]) {
        let label = sections[0];
        let is_previous = label == self.config.previous_balance_label;
        let is_closing = label == self.config.closing_balance_label;
        if !is_previous && !is_closing {
            return;
        }

        let value = match parse_amount(sections[1]) {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "Failed converting value. Expected a number, but got: {}",
                    sections[1]
                );
                return;
            }
        };

        if is_previous {
            self.previous_balance = value;
            debug!("Scanned previous balance: {:.2}", value);
        } else {
            self.closing_balance = value;
            debug!("Scanned closing balance: {:.2}", value);
        }
    }

    /// Category-assignment rule: a two- or three-column line consumes a
    /// pending spending operation.
    ///
    /// Only a pending operation with a recognized keyword and a negative
    /// amount is eligible; income-type operations are never categorized and
    /// stay pending until the next amount line overwrites them. The first
    /// column is layout filler; the descriptive text is the concatenation
    /// of the remaining columns, lowercased, with no separator.
    fn assign_category(&mut self, sections: &[&str]) {
        let pending = match self.pending.take() {
            Some(p) if p.amount < 0.0 && self.config.operation_keywords.contains(&p.keyword) => p,
            other => {
                self.pending = other;
                return;
            }
        };

        let mut search = sections[1].to_lowercase();
        if let Some(extra) = sections.get(2) {
            search.push_str(&extra.to_lowercase());
        }

        match self.categories.find_match(&search) {
            Some((keyword, category)) => {
                debug!(
                    "Found category '{}' for '{}', amount: {:.2}",
                    category, search, pending.amount
                );
                self.balances.add(category, keyword, pending.amount);
            }
            None => {
                warn!(
                    "No category found for '{}', adding to '{}', amount: {:.2}",
                    search, OTHER_CATEGORY, pending.amount
                );
                self.balances.add(OTHER_CATEGORY, &search, pending.amount);
            }
        }
    }

    /// Amount-scan rule: a five-column line carries the signed amount in
    /// column 3 and the operation word at the start of column 2.
    ///
    /// The parsed amount immediately lands in the spendings or incomes
    /// total and becomes the new pending operation, overwriting any prior
    /// pending one that was never described.
    fn scan_amount(&mut self, sections: &[&str]) {
        let amount = match parse_amount(sections[3]) {
            Ok(amount) => amount,
            Err(_) => {
                warn!(
                    "Failed converting value. Expected a number, but got: {}",
                    sections[3]
                );
                return;
            }
        };

        let keyword = sections[2]
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_lowercase();

        debug!("Scanned amount {:.2} for operation '{}'", amount, keyword);

        if let Some(dropped) = self.pending.replace(PendingOperation { keyword, amount }) {
            debug!(
                "Pending operation '{}' ({:.2}) superseded before classification",
                dropped.keyword, dropped.amount
            );
        }

        if amount < 0.0 {
            self.spendings += amount;
        } else {
            self.incomes += amount;
        }
    }

    /// Reconciles the scan and returns the summary.
    ///
    /// Two independent cross-checks, both fatal on failure: the computed
    /// balance against the stated closing balance, and the per-category
    /// totals against the spendings figure. The second check catches
    /// spendings that entered the totals but never reached a category, for
    /// example a pending operation abandoned by the next amount line.
    pub fn finish(self) -> Result<StatementSummary> {
        let calculated = self.previous_balance + self.spendings + self.incomes;
        if (calculated - self.closing_balance).abs() > self.config.tolerance {
            return Err(AnalyzerError::BalanceMismatch {
                calculated,
                closing: self.closing_balance,
            });
        }
        debug!("Calculated balance matches closing balance");

        let categorized = self.balances.categorized_spendings();
        if (categorized - self.spendings).abs() > self.config.tolerance {
            return Err(AnalyzerError::CategorizedSpendingsMismatch {
                categorized,
                spendings: self.spendings,
            });
        }
        debug!("Categorized spendings: {:.2}", categorized);

        Ok(StatementSummary {
            spendings: self.spendings,
            incomes: self.incomes,
            previous_balance: self.previous_balance,
            closing_balance: self.closing_balance,
            categories: self.balances,
        })
    }
}
