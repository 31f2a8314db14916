use std::io::{self, Write};

use anyhow::Result;
use colored::*;
use log::debug;

use crate::demo::{BreedStage, Entry, Report};

// Output the report as JSON
pub fn output_json(report: &Report, out: &mut dyn Write) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

// Output the report as text, one line per entry
pub fn output_text(report: &Report, out: &mut dyn Write) -> Result<()> {
    for entry in &report.entries {
        writeln!(out, "{}", styled(entry))?;
    }
    Ok(())
}

// A reader that hangs up early (`| head`) is not a failure
pub fn ignore_broken_pipe(result: Result<()>) -> Result<()> {
    match result {
        Err(err)
            if err
                .downcast_ref::<io::Error>()
                .map_or(false, |e| e.kind() == io::ErrorKind::BrokenPipe) =>
        {
            debug!("reader closed the pipe early");
            Ok(())
        }
        other => other,
    }
}

// Colour is applied only when `colored` is allowed to; otherwise this is the bare line
fn styled(entry: &Entry) -> ColoredString {
    let line = entry.line();
    match entry {
        Entry::Description { .. } => line.green(),
        Entry::Breed { stage: BreedStage::Current, .. } => line.yellow(),
        Entry::Breed { stage: BreedStage::New, .. } => line.yellow().bold(),
        Entry::Movement { .. } => line.cyan(),
    }
}
