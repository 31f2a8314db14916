use anyhow::Result;
use clap::Parser;
use log::debug;
use std::io::{self, Write};

use menagerie::{demo, output};

/// Menagerie - a short tour of animals that describe themselves and vehicles that move
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(short = 'j', long, conflicts_with = "color")]
    json: bool,

    /// Colourize text output
    #[arg(long, conflicts_with = "json")]
    color: bool,

    /// Log what happens along the way to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter_level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::builder()
        .filter_level(filter_level)
        .parse_default_env()
        .init();

    colored::control::set_override(cli.color);

    let report = demo::run()?;
    debug!("rendering {} entries", report.entries.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = if cli.json {
        output::output_json(&report, &mut out)
    } else {
        output::output_text(&report, &mut out)
    };
    output::ignore_broken_pipe(written.and_then(|_| Ok(out.flush()?)))
}
