//! Trevanion - hide messages behind punctuation
//!
//! CLI for the Trevanion punctuation-offset cipher: extract hidden messages
//! from cover texts, verify covers against a plaintext, generate candidate
//! covers, and search for perfect matches.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{CheckCommand, CommandExecutor, ExtractCommand, GenerateCommand, SearchCommand};

/// Trevanion - hide messages behind punctuation
///
/// After every trigger punctuation mark in a cover text, the N-th following
/// character belongs to the hidden message. These commands recover such
/// messages, verify covers, and build new ones.
#[derive(Parser)]
#[command(name = "trevanion")]
#[command(version)]
#[command(about = "Hide and recover messages with the Trevanion punctuation-offset cipher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the hidden message from a cover text
    Extract(ExtractCommand),

    /// Check that a cover text encodes a plaintext
    Check(CheckCommand),

    /// Generate candidate cover texts for a plaintext
    Generate(GenerateCommand),

    /// Search for cover texts that encode a plaintext exactly
    Search(SearchCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract(cmd) => cmd.execute(),
        Commands::Check(cmd) => cmd.execute(),
        Commands::Generate(cmd) => cmd.execute(),
        Commands::Search(cmd) => cmd.execute(),
    }
}
