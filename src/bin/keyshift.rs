// Keyshift CLI
// Host glue: reads the transformation and text files and prints the
// rewritten text

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use keyshift_core::{parse_operations, TransformEngine};

/// Keyboard-grid substitution cipher
#[derive(Parser, Debug)]
#[command(name = "keyshift")]
#[command(about = "Rewrites text through a transformed keyboard grid", long_about = None)]
struct Args {
    /// File holding the comma-separated transformation string
    #[arg(short, long, value_name = "FILE")]
    transform: PathBuf,

    /// File holding the text to rewrite
    #[arg(short = 'x', long, value_name = "FILE")]
    text: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let transform = std::fs::read_to_string(&args.transform)
        .with_context(|| format!("reading transformation file {}", args.transform.display()))?;
    let text = std::fs::read_to_string(&args.text)
        .with_context(|| format!("reading text file {}", args.text.display()))?;

    // Editors leave a trailing newline the token grammar does not
    // accept; strip it here rather than in the parser.
    let operations = parse_operations(transform.trim_end_matches(['\n', '\r']));
    log::debug!("parsed {} operation(s)", operations.len());

    let mut engine = TransformEngine::new();
    print!("{}", engine.apply_transformations(&operations, &text));

    Ok(())
}
