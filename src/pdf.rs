//! Statement input: PDF text extraction and line loading.
//!
//! Extraction shells out to `pdftotext -layout`, which preserves the bank's
//! column alignment the section splitter depends on. The tool must be on
//! `PATH`.

use crate::error::{AnalyzerError, Result};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Converts a statement PDF to a layout-preserving text file.
///
/// The text file is written into the current directory as `<stem>.txt` and
/// its path is returned. A missing tool or a non-zero exit is fatal, with
/// the tool's stderr folded into the error.
pub fn convert_pdf_to_text(pdf_path: &Path) -> Result<PathBuf> {
    let text_path = match pdf_path.file_name() {
        Some(name) => Path::new(name).with_extension("txt"),
        None => {
            return Err(AnalyzerError::PdfConversion {
                message: format!("not a file path: {}", pdf_path.display()),
            })
        }
    };

    let output = Command::new("pdftotext")
        .arg("-layout")
        .arg(pdf_path)
        .arg(&text_path)
        .output()
        .map_err(|e| AnalyzerError::PdfConversion {
            message: format!("could not run pdftotext: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AnalyzerError::PdfConversion {
            message: format!("pdftotext exited with {}: {}", output.status, stderr.trim()),
        });
    }

    debug!("Extracted statement text to {}", text_path.display());
    Ok(text_path)
}

/// Reads all lines of an extracted statement file.
///
/// An empty file means the export went wrong upstream and is fatal.
pub fn read_statement_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()?;

    if lines.is_empty() {
        return Err(AnalyzerError::EmptyStatement);
    }

    debug!("Read {} statement lines from {}", lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_statement_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Saldo poprzednie  100,00").unwrap();
        writeln!(file, "Saldo końcowe  100,00").unwrap();

        let lines = read_statement_lines(file.path()).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Saldo poprzednie  100,00");
    }

    #[test]
    fn test_empty_file_is_fatal() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = read_statement_lines(file.path());
        assert!(matches!(result, Err(AnalyzerError::EmptyStatement)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_statement_lines(Path::new("does-not-exist.txt"));
        assert!(matches!(result, Err(AnalyzerError::Io(_))));
    }
}
