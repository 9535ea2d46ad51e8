mod args;
mod error;
mod logging;
mod report;
mod scan;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use report::TextReport;
use scan::{Scanner, SourceText};
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.debug);

    let source = SourceText::load(&args.path)?;
    let scanner = Scanner::new(args.context).context("failed to prepare patterns")?;

    let stdout = io::stdout().lock();
    let mut report = TextReport::new(BufWriter::new(stdout));
    scanner.scan(&source, &mut report)?;

    Ok(())
}
