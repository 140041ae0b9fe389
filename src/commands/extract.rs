//! Extract command - recover the hidden message from a cover text.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use trevanion::{extract, highlight};

use super::{remember_params, render_spans, resolve_params, CommandExecutor};

/// Extract the hidden message from a cover text.
///
/// The cover text comes from --text, --file, or stdin. Punctuation, offset
/// and space counting default to the persisted settings; the values actually
/// used are saved back as the new defaults.
#[derive(Args, Debug)]
pub struct ExtractCommand {
    /// Cover text (mutually exclusive with --file; stdin when both omitted)
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the cover text from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Trigger punctuation marks
    #[arg(short, long)]
    pub puncts: Option<String>,

    /// Extraction offset (characters counted after each trigger)
    #[arg(short, long)]
    pub offset: Option<usize>,

    /// Whether whitespace counts toward the offset
    #[arg(long)]
    pub count_spaces: Option<bool>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable the colored highlight preview
    #[arg(long)]
    pub no_color: bool,
}

impl ExtractCommand {
    fn read_cover(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read cover text from {}", path.display()));
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read cover text from stdin")?;
        Ok(buffer)
    }
}

impl CommandExecutor for ExtractCommand {
    fn execute(&self) -> Result<()> {
        let cover = self.read_cover()?;
        let params = resolve_params(
            self.puncts.as_deref(),
            self.offset,
            self.count_spaces,
            None,
        );

        let result = extract(&cover, &params);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("Hidden message: {}", result.message);
            println!(
                "Extracted {} character(s) (offset {}, marks \"{}\")",
                result.len(),
                params.offset,
                params.punctuation
            );
            let spans = highlight(&cover, &result.indices, &params.punctuation);
            println!();
            println!("{}", render_spans(&spans, !self.no_color));
        }

        remember_params(&params);
        Ok(())
    }
}
