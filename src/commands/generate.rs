//! Generate command - produce quality-ranked candidate cover texts.

use anyhow::{anyhow, Result};
use clap::Args;
use serde::Serialize;

use trevanion::{evaluate_quality, CandidateGenerator, Quality, Style};

use super::{make_rng, resolve_params, CommandExecutor};

/// Generate candidate cover texts for a plaintext.
///
/// Candidates are scored by how much of the plaintext their extraction
/// reproduces and listed best first. Generation does not count spaces
/// unless --count-spaces=true is given.
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Plaintext to hide
    #[arg(short, long)]
    pub message: String,

    /// Trigger punctuation marks
    #[arg(short, long)]
    pub puncts: Option<String>,

    /// Extraction offset
    #[arg(short, long)]
    pub offset: Option<usize>,

    /// Whether whitespace counts toward the offset (default: false)
    #[arg(long)]
    pub count_spaces: Option<bool>,

    /// Cover style: formal, casual, literary or japanese
    #[arg(short, long, default_value = "formal")]
    pub style: String,

    /// Number of candidates to produce
    #[arg(short = 'n', long, default_value_t = 7)]
    pub count: usize,

    /// RNG seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the candidates as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CandidateOutput {
    text: String,
    #[serde(flatten)]
    quality: Quality,
}

impl CommandExecutor for GenerateCommand {
    fn execute(&self) -> Result<()> {
        let style: Style = self.style.parse().map_err(|e: String| anyhow!(e))?;
        let params = resolve_params(
            self.puncts.as_deref(),
            self.offset,
            self.count_spaces,
            Some(false),
        );

        let generator = CandidateGenerator::new();
        let mut rng = make_rng(self.seed);
        let candidates =
            generator.ranked_candidates(&self.message, &params, style, self.count, &mut rng);

        let scored: Vec<CandidateOutput> = candidates
            .into_iter()
            .map(|text| {
                let quality = evaluate_quality(&self.message, &text, &params);
                CandidateOutput { text, quality }
            })
            .collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&scored)?);
            return Ok(());
        }

        println!(
            "{} candidate(s) for \"{}\" (offset {}, style {}):",
            scored.len(),
            self.message,
            params.offset,
            style
        );
        for (i, candidate) in scored.iter().enumerate() {
            let badge = if candidate.quality.is_valid {
                " PERFECT"
            } else {
                ""
            };
            println!();
            println!(
                "[{}]{} {}/{} matched",
                i + 1,
                badge,
                candidate.quality.matches,
                candidate.quality.total
            );
            println!("{}", candidate.text);
        }

        Ok(())
    }
}
