//! Summary chart rendering.
//!
//! Draws two pies into one SVG: spendings against incomes on the left, and
//! the per-category spending breakdown on the right, with the reporting
//! period and both stated balances in the header. Amounts are flipped to
//! their absolute values for display; the sign convention stays inside the
//! summary.

use crate::error::{AnalyzerError, Result};
use crate::summary::{StatementSummary, TOTAL_KEY};
use plotters::prelude::*;
use std::path::Path;
use std::process::Command;

const CHART_WIDTH: u32 = 1280;
const CHART_HEIGHT: u32 = 720;
const PIE_RADIUS: f64 = 220.0;

const SLICE_COLORS: [RGBColor; 9] = [
    RGBColor(84, 112, 198),
    RGBColor(145, 204, 117),
    RGBColor(250, 200, 88),
    RGBColor(238, 102, 102),
    RGBColor(115, 192, 222),
    RGBColor(59, 162, 114),
    RGBColor(252, 132, 82),
    RGBColor(154, 96, 180),
    RGBColor(234, 124, 204),
];

fn chart_error<E: std::error::Error>(e: E) -> AnalyzerError {
    AnalyzerError::Chart(e.to_string())
}

/// Renders the statement summary as an SVG chart.
pub fn render_chart(
    summary: &StatementSummary,
    period: Option<&str>,
    out_path: &Path,
) -> Result<()> {
    let root = SVGBackend::new(out_path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    root.draw(&Text::new(
        "Total transactions",
        (40, 30),
        ("sans-serif", 32).into_font(),
    ))
    .map_err(chart_error)?;

    let header = format!(
        "Time period: {}    Previous balance: {:.2} zł    Closing balance: {:.2} zł",
        period.unwrap_or("unknown"),
        summary.previous_balance,
        summary.closing_balance,
    );
    root.draw(&Text::new(header, (40, 78), ("sans-serif", 18).into_font()))
        .map_err(chart_error)?;

    let totals: Vec<(String, f64)> = [
        ("Spendings".to_string(), -summary.spendings),
        ("Incomes".to_string(), summary.incomes),
    ]
    .into_iter()
    .filter(|(_, value)| *value > 0.0)
    .collect();
    draw_pie(&root, (340, 420), &totals, "Spendings vs incomes")?;

    let breakdown: Vec<(String, f64)> = summary
        .categories
        .iter()
        .map(|(name, entries)| {
            let total = entries.get(TOTAL_KEY).copied().unwrap_or(0.0);
            (format!("{}: {:.2} zł", name, -total), -total)
        })
        .filter(|(_, value)| *value > 0.0)
        .collect();
    draw_pie(&root, (940, 420), &breakdown, "Spendings by category")?;

    root.present().map_err(chart_error)?;
    Ok(())
}

/// Draws one labeled pie with a caption underneath. Empty data skips the
/// pie but keeps the caption, so an all-income statement still renders.
fn draw_pie(
    root: &DrawingArea<SVGBackend, plotters::coord::Shift>,
    center: (i32, i32),
    data: &[(String, f64)],
    caption: &str,
) -> Result<()> {
    if !data.is_empty() {
        let sizes: Vec<f64> = data.iter().map(|(_, value)| *value).collect();
        let labels: Vec<&String> = data.iter().map(|(label, _)| label).collect();
        let colors: Vec<RGBColor> = (0..data.len())
            .map(|i| SLICE_COLORS[i % SLICE_COLORS.len()])
            .collect();

        let mut pie = Pie::new(&center, &PIE_RADIUS, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 16).into_font());
        pie.percentages(("sans-serif", 14).into_font());
        root.draw(&pie).map_err(chart_error)?;
    }

    root.draw(&Text::new(
        caption.to_string(),
        (center.0 - 90, center.1 + PIE_RADIUS as i32 + 40),
        ("sans-serif", 20).into_font(),
    ))
    .map_err(chart_error)?;

    Ok(())
}

/// Opens a rendered chart with the platform's default viewer.
///
/// Callers treat failure as a warning; the chart file is already on disk.
pub fn open_in_viewer(path: &Path) -> std::io::Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/c", "start", ""]).arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    let status = cmd.status()?;
    if !status.success() {
        return Err(std::io::Error::other(format!(
            "viewer exited with {}",
            status
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::CategoryBalances;
    use std::fs;

    fn sample_summary() -> StatementSummary {
        let mut categories = CategoryBalances::new();
        categories.add("Groceries", "lidl", -120.5);
        categories.add("Fuel", "orlen", -80.0);

        StatementSummary {
            spendings: -200.5,
            incomes: 2500.0,
            previous_balance: 1000.0,
            closing_balance: 3299.5,
            categories,
        }
    }

    #[test]
    fn test_renders_svg_with_category_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");

        render_chart(&sample_summary(), Some("01.01.2025 - 31.01.2025"), &path).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Groceries"));
        assert!(svg.contains("01.01.2025 - 31.01.2025"));
    }

    #[test]
    fn test_renders_without_categories_or_period() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");

        let summary = StatementSummary {
            spendings: 0.0,
            incomes: 100.0,
            previous_balance: 0.0,
            closing_balance: 100.0,
            categories: CategoryBalances::new(),
        };

        render_chart(&summary, None, &path).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("unknown"));
    }
}
