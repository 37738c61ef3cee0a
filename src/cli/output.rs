//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats, with text labels in English or
//! Japanese.

use crate::core::{Report, Survey};
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Label language for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// English labels.
    En,
    /// Japanese labels.
    Ja,
}

impl Locale {
    /// Parses locale from string, falling back to English.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ja" | "ja_jp" | "ja-jp" => Self::Ja,
            _ => Self::En,
        }
    }

    const fn labels(self) -> Labels {
        match self {
            Self::En => Labels {
                start: "Starting value",
                sequence: "Collatz sequence",
                steps: "Steps",
                max: "Maximum value",
            },
            Self::Ja => Labels {
                start: "初期値",
                sequence: "コラッツ数列",
                steps: "ステップ数",
                max: "最大値",
            },
        }
    }
}

struct Labels {
    start: &'static str,
    sequence: &'static str,
    steps: &'static str,
    max: &'static str,
}

/// Formats a single-sequence report.
#[must_use]
pub fn format_report(report: &Report, format: OutputFormat, locale: Locale) -> String {
    match format {
        OutputFormat::Text => format_report_text(report, locale),
        OutputFormat::Json => format_json(report),
    }
}

fn format_report_text(report: &Report, locale: Locale) -> String {
    let labels = locale.labels();
    let mut output = String::new();
    let _ = writeln!(output, "{}: {}", labels.start, report.start);
    let _ = writeln!(
        output,
        "{}: {}",
        labels.sequence,
        format_list(&report.sequence)
    );
    let _ = writeln!(output, "{}: {}", labels.steps, report.steps);
    let _ = writeln!(output, "{}: {}", labels.max, report.max);
    output
}

/// Formats a range survey.
#[must_use]
pub fn format_survey(survey: &Survey, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_survey_text(survey),
        OutputFormat::Json => format_json(survey),
    }
}

fn format_survey_text(survey: &Survey) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Starts {}..={}:", survey.from, survey.to);
    let _ = writeln!(output, "{:<12} {:<8} Max", "Start", "Steps");
    output.push_str(&"-".repeat(40));
    output.push('\n');

    for entry in &survey.entries {
        let _ = writeln!(
            output,
            "{:<12} {:<8} {}",
            entry.start, entry.steps, entry.max
        );
    }

    output.push('\n');
    let _ = writeln!(
        output,
        "Longest: {} ({} steps)",
        survey.longest.start, survey.longest.steps
    );
    let _ = writeln!(
        output,
        "Highest: {} (peak {})",
        survey.highest.start, survey.highest.max
    );
    output
}

/// Formats an error for the given output format.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

/// Renders values as `[a, b, c]`.
fn format_list(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}
