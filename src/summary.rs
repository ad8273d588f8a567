//! Aggregate totals produced by the statement scan.
//!
//! Category balances are nested maps: category name to match key to
//! accumulated amount, with a synthetic `"total"` key per category holding
//! the category's running sum. `BTreeMap` keeps iteration order stable so
//! repeated runs render identically.

use serde::Serialize;
use std::collections::BTreeMap;

/// Synthetic per-category key holding the category's running sum.
pub const TOTAL_KEY: &str = "total";

/// Per-category balances: category name -> match key -> accumulated amount.
///
/// The match key is the keyword that classified the amount, or the full
/// descriptive text when nothing matched. Keys are created lazily on first
/// contribution.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CategoryBalances(BTreeMap<String, BTreeMap<String, f64>>);

impl CategoryBalances {
    /// Creates an empty set of balances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` under `category` for `match_key`, updating the
    /// category's `"total"` alongside.
    pub fn add(&mut self, category: &str, match_key: &str, amount: f64) {
        let entries = self.0.entry(category.to_string()).or_default();
        *entries.entry(match_key.to_string()).or_insert(0.0) += amount;
        *entries.entry(TOTAL_KEY.to_string()).or_insert(0.0) += amount;
    }

    /// Accumulated amount for one match key within a category.
    pub fn amount(&self, category: &str, match_key: &str) -> Option<f64> {
        self.0.get(category)?.get(match_key).copied()
    }

    /// Running sum of one category, 0.0 if the category was never touched.
    pub fn category_total(&self, category: &str) -> f64 {
        self.amount(category, TOTAL_KEY).unwrap_or(0.0)
    }

    /// Sum of every category's `"total"`.
    ///
    /// Reconciliation compares this against the spendings figure computed
    /// from the amount lines themselves.
    pub fn categorized_spendings(&self) -> f64 {
        self.0
            .values()
            .filter_map(|entries| entries.get(TOTAL_KEY))
            .sum()
    }

    /// Iterates categories in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, f64>)> {
        self.0.iter().map(|(name, entries)| (name.as_str(), entries))
    }

    /// Returns `true` when no amount was ever categorized.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Final aggregate handed to rendering after a successful scan.
#[derive(Debug, Clone, Serialize)]
pub struct StatementSummary {
    /// Sum of all negative transaction amounts.
    pub spendings: f64,

    /// Sum of all non-negative transaction amounts.
    pub incomes: f64,

    /// Balance stated at the top of the statement.
    pub previous_balance: f64,

    /// Balance stated at the bottom of the statement.
    pub closing_balance: f64,

    /// Spendings broken down by category and shop.
    pub categories: CategoryBalances,
}
