//! Check command - verify that a cover text encodes a plaintext.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use trevanion::{check_constraints, extract, highlight, PositionStatus};

use super::{remember_params, render_spans, resolve_params, CommandExecutor};

/// Check that a cover text encodes a plaintext.
///
/// Runs the extraction over the cover text and compares it position by
/// position (case-insensitive) against the plaintext with whitespace
/// removed. Prints a per-position report and a highlight preview.
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// The plaintext the cover is supposed to encode
    #[arg(short, long)]
    pub message: String,

    /// Cover text (mutually exclusive with --cover-file)
    #[arg(short, long, conflicts_with = "cover_file")]
    pub cover: Option<String>,

    /// Read the cover text from a file
    #[arg(long)]
    pub cover_file: Option<PathBuf>,

    /// Trigger punctuation marks
    #[arg(short, long)]
    pub puncts: Option<String>,

    /// Extraction offset
    #[arg(short, long)]
    pub offset: Option<usize>,

    /// Whether whitespace counts toward the offset
    #[arg(long)]
    pub count_spaces: Option<bool>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable the colored highlight preview
    #[arg(long)]
    pub no_color: bool,
}

impl CheckCommand {
    fn read_cover(&self) -> Result<String> {
        if let Some(cover) = &self.cover {
            return Ok(cover.clone());
        }
        let path = self
            .cover_file
            .as_ref()
            .context("Provide the cover text with --cover or --cover-file")?;
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read cover text from {}", path.display()))
    }
}

impl CommandExecutor for CheckCommand {
    fn execute(&self) -> Result<()> {
        let cover = self.read_cover()?;
        let params = resolve_params(
            self.puncts.as_deref(),
            self.offset,
            self.count_spaces,
            None,
        );

        let report = check_constraints(&self.message, &cover, &params);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            remember_params(&params);
            return Ok(());
        }

        if report.is_valid {
            println!("OK: every character is in place.");
        } else {
            println!("Constraint check failed:");
            if !report.missing.is_empty() {
                println!("  missing:    {} character(s)", report.missing.len());
            }
            if !report.mismatches.is_empty() {
                println!("  mismatched: {} position(s)", report.mismatches.len());
            }
            if !report.extra.is_empty() {
                println!("  extra:      {} character(s)", report.extra.len());
            }
        }
        println!("Matched {}/{} characters", report.matches, report.expected_length);

        if !report.details.is_empty() {
            println!();
            println!(" pos | expected | actual | status");
            println!("-----+----------+--------+---------");
            for detail in &report.details {
                let expected = detail.expected.map(String::from).unwrap_or_else(|| "-".into());
                let actual = detail.actual.map(String::from).unwrap_or_else(|| "-".into());
                let status = match detail.status {
                    PositionStatus::Match => "match",
                    PositionStatus::Mismatch => "mismatch",
                    PositionStatus::Missing => "missing",
                    PositionStatus::Extra => "extra",
                };
                println!(
                    " {:>3} | {:>8} | {:>6} | {}",
                    detail.index + 1,
                    expected,
                    actual,
                    status
                );
            }
        }

        let extraction = extract(&cover, &params);
        let spans = highlight(&cover, &extraction.indices, &params.punctuation);
        println!();
        println!("{}", render_spans(&spans, !self.no_color));

        remember_params(&params);
        Ok(())
    }
}
