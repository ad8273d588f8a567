//! Scenario tests for the statement classification engine.
//!
//! Each test feeds a small synthetic statement through the public API and
//! checks the reconciled summary, the same way the binary drives the
//! library.

use statement_analyzer::{AnalyzerError, CategoryMap, StatementEngine, StatementSummary};

fn category_map() -> CategoryMap {
    [
        ("biedronka", "Groceries"),
        ("lidl", "Groceries"),
        ("orlen", "Fuel"),
        ("prowizj", "Fees"),
    ]
    .into_iter()
    .collect()
}

fn scan(input: &str) -> statement_analyzer::Result<StatementSummary> {
    let mut engine = StatementEngine::new(category_map());
    engine.process_lines(input.lines());
    engine.finish()
}

// ==================== FULL STATEMENTS ====================

#[test]
fn test_full_statement_with_all_operation_kinds() {
    let summary = scan(
        "Bank Przykładowy S.A.\n\
         Wyciąg nr 1/2025\n\
         \n\
         Saldo poprzednie  1 000,00\n\
         01.01  01.01  Zakup kartą  -120,50  879,50\n\
         Nr karty:  Biedronka 123  Kraków\n\
         03.01  03.01  Przelew wychodzący  -300,00  579,50\n\
         Odbiorca:  Stacja Orlen 7\n\
         05.01  05.01  Płatność internetowa  -50,00  529,50\n\
         Tytuł:  Lidl zakupy online\n\
         08.01  08.01  Opłata za kartę  -10,00  519,50\n\
         Tytuł:  Prowizje bankowe\n\
         10.01  10.01  Wpłata wynagrodzenia  2 000,00  2 519,50\n\
         Saldo końcowe  2 519,50",
    )
    .unwrap();

    assert_eq!(summary.spendings, -480.5);
    assert_eq!(summary.incomes, 2000.0);
    assert_eq!(summary.categories.amount("Groceries", "biedronka"), Some(-120.5));
    assert_eq!(summary.categories.amount("Groceries", "lidl"), Some(-50.0));
    assert_eq!(summary.categories.amount("Fuel", "orlen"), Some(-300.0));
    assert_eq!(summary.categories.amount("Fees", "prowizj"), Some(-10.0));
    assert_eq!(summary.categories.categorized_spendings(), -480.5);
}

#[test]
fn test_same_shop_accumulates_across_transactions() {
    let summary = scan(
        "Saldo poprzednie  500,00\n\
         01.01  01.01  Zakup kartą  -40,00  460,00\n\
         Nr karty:  Lidl 1\n\
         02.01  02.01  Zakup kartą  -60,00  400,00\n\
         Nr karty:  Lidl 2\n\
         Saldo końcowe  400,00",
    )
    .unwrap();

    assert_eq!(summary.categories.amount("Groceries", "lidl"), Some(-100.0));
    assert_eq!(summary.categories.category_total("Groceries"), -100.0);
}

#[test]
fn test_unmatched_spending_goes_to_other_bucket() {
    let summary = scan(
        "Saldo poprzednie  100,00\n\
         01.01  01.01  Zakup kartą  -25,00  75,00\n\
         Nr karty:  Kiosk Ruchu  Poznań\n\
         Saldo końcowe  75,00",
    )
    .unwrap();

    assert_eq!(
        summary.categories.amount("Other", "kiosk ruchupoznań"),
        Some(-25.0)
    );
    assert_eq!(summary.categories.category_total("Other"), -25.0);
}

#[test]
fn test_income_only_statement_has_no_categories() {
    let summary = scan(
        "Saldo poprzednie  0,00\n\
         01.01  01.01  Wpłata gotówki  150,00  150,00\n\
         Nadawca:  Lidl sp. z o.o.\n\
         Saldo końcowe  150,00",
    )
    .unwrap();

    assert_eq!(summary.incomes, 150.0);
    assert_eq!(summary.spendings, 0.0);
    assert!(summary.categories.is_empty());
}

#[test]
fn test_statement_of_noise_lines_reconciles_trivially() {
    let summary = scan(
        "Bank Przykładowy S.A.\n\
         \n\
         strona 1 z 1\n\
         a  b  c  d\n\
         a  b  c  d  e  f",
    )
    .unwrap();

    assert_eq!(summary.spendings, 0.0);
    assert_eq!(summary.incomes, 0.0);
    assert_eq!(summary.previous_balance, 0.0);
    assert_eq!(summary.closing_balance, 0.0);
}

#[test]
fn test_restated_balance_label_last_write_wins() {
    let summary = scan(
        "Saldo poprzednie  100,00\n\
         Saldo poprzednie  200,00\n\
         Saldo końcowe  200,00",
    )
    .unwrap();

    assert_eq!(summary.previous_balance, 200.0);
}

// ==================== RECONCILIATION FAILURES ====================

#[test]
fn test_balance_mismatch_is_fatal() {
    let result = scan(
        "Saldo poprzednie  100,00\n\
         01.01  01.01  Zakup kartą  -25,00  75,00\n\
         Nr karty:  Lidl 1\n\
         Saldo końcowe  80,00",
    );

    assert!(matches!(
        result,
        Err(AnalyzerError::BalanceMismatch { .. })
    ));
}

#[test]
fn test_missing_closing_balance_is_a_mismatch() {
    // Closing balance stays at 0.0 when never declared, so any non-zero
    // activity fails the cross-check.
    let result = scan(
        "Saldo poprzednie  100,00\n\
         01.01  01.01  Wpłata gotówki  50,00  150,00",
    );

    assert!(matches!(
        result,
        Err(AnalyzerError::BalanceMismatch { .. })
    ));
}

#[test]
fn test_never_described_spending_is_fatal() {
    // The spending reconciles against the closing balance but was never
    // categorized, which the second check surfaces.
    let result = scan(
        "Saldo poprzednie  100,00\n\
         01.01  01.01  Zakup kartą  -25,00  75,00\n\
         Saldo końcowe  75,00",
    );

    assert!(matches!(
        result,
        Err(AnalyzerError::CategorizedSpendingsMismatch { .. })
    ));
}

#[test]
fn test_mismatch_error_reports_both_figures() {
    let err = scan(
        "Saldo poprzednie  100,00\n\
         Saldo końcowe  150,00",
    )
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("100.00"));
    assert!(message.contains("150.00"));
}
