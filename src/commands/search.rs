//! Search command - hunt for cover texts that encode the plaintext exactly.

use anyhow::{anyhow, Result};
use clap::Args;
use tokio::sync::mpsc;

use trevanion::{
    CandidateGenerator, GeneratorSource, ProgressEvent, SearchController, SearchOutcome, Style,
};

use super::{make_rng, resolve_params, CommandExecutor};

/// Search for perfect-match cover texts.
///
/// Repeatedly generates and verifies candidates until the requested number
/// of perfect matches is found or the attempt budget is spent. Ctrl-C stops
/// the search at the next iteration and reports what was found so far.
#[derive(Args, Debug)]
pub struct SearchCommand {
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

    /// Perfect matches to collect before stopping
    #[arg(short, long, default_value_t = 2)]
    pub target: usize,

    /// Attempt budget (floored at 100)
    #[arg(long, default_value_t = 1000)]
    pub max_attempts: u64,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommandExecutor for SearchCommand {
    fn execute(&self) -> Result<()> {
        let style: Style = self.style.parse().map_err(|e: String| anyhow!(e))?;
        let params = resolve_params(
            self.puncts.as_deref(),
            self.offset,
            self.count_spaces,
            Some(false),
        );

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let generator = CandidateGenerator::new();
        let mut source = GeneratorSource::new(&generator, self.message.clone(), params.offset, style);
        let mut rng = make_rng(self.seed);
        let mut controller = SearchController::new();

        let stop_handle = controller.handle();
        let target = self.target.max(1);
        let max_attempts = self.max_attempts.max(100);

        let report = runtime.block_on(async {
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    stop_handle.stop();
                }
            });

            let (tx, mut rx) = mpsc::unbounded_channel::<ProgressEvent>();
            let quiet = self.json;
            let printer = tokio::spawn(async move {
                let mut last_found = 0;
                while let Some(event) = rx.recv().await {
                    if quiet {
                        continue;
                    }
                    if event.found_count > last_found {
                        last_found = event.found_count;
                        eprintln!(
                            "Perfect match {} at attempt {}",
                            event.found_count, event.attempts
                        );
                    }
                    if event.attempts % 100 == 0 {
                        eprintln!(
                            "  {} attempt(s), {} found, {:.0}%, {:.1}s",
                            event.attempts,
                            event.found_count,
                            event.percentage,
                            event.elapsed_ms as f64 / 1000.0
                        );
                    }
                }
            });

            let report = controller
                .run(
                    &self.message,
                    &params,
                    &mut source,
                    &mut rng,
                    target,
                    max_attempts,
                    Some(&tx),
                )
                .await;

            drop(tx);
            let _ = printer.await;
            report
        });

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        match report.outcome {
            SearchOutcome::TargetReached => println!(
                "Target reached: {} perfect match(es) in {} attempt(s).",
                report.perfect_matches.len(),
                report.attempts
            ),
            SearchOutcome::BudgetExhausted => println!(
                "Attempt budget exhausted after {} attempt(s); {} perfect match(es) found.",
                report.attempts,
                report.perfect_matches.len()
            ),
            SearchOutcome::Stopped => println!(
                "Search stopped after {} attempt(s); {} perfect match(es) found.",
                report.attempts,
                report.perfect_matches.len()
            ),
        }

        for (i, cover) in report.perfect_matches.iter().enumerate() {
            println!();
            println!("[{}] {}", i + 1, cover);
        }

        Ok(())
    }
}
