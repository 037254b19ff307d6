//! Diagnostic rendering using ariadne
//!
//! This module renders parse and validation diagnostics with rich
//! formatting and source code snippets, for CLI-style embedders.

use crate::{Diagnostic, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Render diagnostics with rich formatting to stderr
pub fn render_diagnostics(source: &str, diagnostics: &[Diagnostic]) {
    render_to_writer(source, diagnostics, &mut std::io::stderr(), true).ok();
}

/// Render diagnostics to a specific writer
///
/// This is useful when you want to control where the output is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_diagnostics_to(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_to_writer(source, diagnostics, writer, true)
}

/// Render diagnostics to a String (useful for tests, web UIs, etc.)
pub fn render_diagnostics_to_string(source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut buf = Vec::new();
    render_to_writer(source, diagnostics, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render diagnostics to a String without color codes
///
/// This is the same as `render_diagnostics_to_string` but without ANSI
/// color codes, making the output easier to compare in tests.
pub fn render_diagnostics_to_string_no_color(source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut buf = Vec::new();
    render_to_writer(source, diagnostics, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_to_writer(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
        };

        let report = Report::build(kind, ("<unknown>", diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color))
            .with_label(
                Label::new(("<unknown>", diag.span.0.clone()))
                    .with_message(&diag.message)
                    .with_color(colors.next()),
            );

        report
            .finish()
            .write(("<unknown>", Source::from(source)), &mut *writer)?;
    }

    Ok(())
}
