//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor`
//! trait. Shared parameter resolution (flags override persisted settings,
//! which override built-in defaults) lives here.

mod check;
mod extract;
mod generate;
mod search;

pub use check::CheckCommand;
pub use extract::ExtractCommand;
pub use generate::GenerateCommand;
pub use search::SearchCommand;

use anyhow::Result;
use crossterm::style::Stylize;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use trevanion::{CipherParams, Settings, Span, SpanKind};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements this trait
/// to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Resolves cipher parameters: explicit flags win, then persisted settings,
/// then built-in defaults. `count_spaces_default` overrides the persisted
/// value for commands whose natural default differs (generation and search
/// skip spaces unless told otherwise).
pub fn resolve_params(
    puncts: Option<&str>,
    offset: Option<usize>,
    count_spaces: Option<bool>,
    count_spaces_default: Option<bool>,
) -> CipherParams {
    let settings = Settings::load().unwrap_or_default();

    let punctuation = puncts.unwrap_or(&settings.punctuation);
    let offset = offset.unwrap_or(settings.offset);
    let count_spaces = count_spaces
        .or(count_spaces_default)
        .unwrap_or(settings.count_spaces);

    CipherParams::new(punctuation, offset, count_spaces)
}

/// Persists the parameters a command ran with, so they become the defaults
/// for the next run. Failure to save is reported, not fatal.
pub fn remember_params(params: &CipherParams) {
    let settings = Settings {
        punctuation: params.punctuation.to_string(),
        offset: params.offset,
        count_spaces: params.count_spaces,
    };
    if let Err(err) = settings.save() {
        eprintln!("Warning: could not save settings: {}", err);
    }
}

/// Builds the RNG: seeded when requested, from entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    }
}

/// Renders highlight spans for the terminal: extracted characters yellow and
/// bold, trigger marks blue.
pub fn render_spans(spans: &[Span], color: bool) -> String {
    if !color {
        return spans.iter().map(|span| span.text.as_str()).collect();
    }

    spans
        .iter()
        .map(|span| match span.kind {
            SpanKind::Plain => span.text.clone(),
            SpanKind::Trigger => span.text.as_str().blue().to_string(),
            SpanKind::Extracted => span.text.as_str().yellow().bold().to_string(),
        })
        .collect()
}
