//! Statement line segmentation.
//!
//! A statement exported with `pdftotext -layout` keeps the bank's column
//! alignment: fields are separated by runs of two or more spaces, while the
//! words inside a field keep their single spaces. Splitting on those runs
//! recovers the original columns without knowing their pixel positions.

/// Index of the line carrying the reporting-period phrase.
const PERIOD_LINE_INDEX: usize = 4;

/// Marker word preceding the reporting period on the header line.
const PERIOD_MARKER: &str = "okres ";

/// Splits a line into sections on runs of two or more spaces.
///
/// The line is trimmed first. Any input, including an empty string, yields
/// at least one section.
///
/// # Examples
///
/// ```
/// use statement_analyzer::sections::split_into_sections;
///
/// assert_eq!(split_into_sections("A  B   C"), vec!["A", "B", "C"]);
/// assert_eq!(split_into_sections("  A B  "), vec!["A B"]);
/// ```
pub fn split_into_sections(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    let mut sections = Vec::new();

    let mut field_start = 0;
    let mut run_start = 0;
    let mut run_len = 0;

    for (idx, ch) in trimmed.char_indices() {
        if ch == ' ' {
            if run_len == 0 {
                run_start = idx;
            }
            run_len += 1;
        } else {
            if run_len >= 2 {
                sections.push(&trimmed[field_start..run_start]);
                field_start = idx;
            }
            run_len = 0;
        }
    }

    // Trimming guarantees the line does not end in a separator run.
    sections.push(&trimmed[field_start..]);
    sections
}

/// Extracts the reporting-period label from the statement header.
///
/// The fifth line of the export carries a phrase like
/// `Wyciąg za okres 01.01.2025 - 31.01.2025`; the part after the marker
/// word, case-folded, is the period label shown on the chart. Returns
/// `None` when the file is too short or the marker is absent.
pub fn reporting_period(lines: &[String]) -> Option<String> {
    let line = lines.get(PERIOD_LINE_INDEX)?.to_lowercase();
    let start = line.find(PERIOD_MARKER)? + PERIOD_MARKER.len();
    Some(line[start..].trim().to_string())
}
