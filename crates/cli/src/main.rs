// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, finds the stronger of two five cards Poker hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::{error, info};
use std::io::{self, BufRead, Write};

use showdown_eval::{Showdown, showdown};

#[derive(Debug, Parser)]
struct Cli {
    /// Ten cards like `AH TD 5C 9S JS 3D 7H 5S JC 5H`, the first five are the
    /// left hand. If no cards are given reads ten cards per line from stdin.
    cards: Vec<String>,
    /// Print the hands categories and enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let mut stdout = io::stdout().lock();

    if cli.cards.is_empty() {
        let failed = analyze_lines(io::stdin().lock(), &mut stdout, cli.verbose)?;
        if failed > 0 {
            bail!("{failed} lines failed");
        }
    } else {
        let res = showdown(&cli.cards.join(" "))?;
        write_showdown(&mut stdout, &res, cli.verbose)?;
    }

    Ok(())
}

/// Analyzes one hands pair per line, returns the number of lines that failed.
///
/// Blank lines and lines starting with `#` are skipped.
fn analyze_lines<R, W>(input: R, out: &mut W, verbose: bool) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut analyzed = 0;
    let mut failed = 0;

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match showdown(line) {
            Ok(res) => {
                write_showdown(out, &res, verbose)?;
                analyzed += 1;
            }
            Err(e) => {
                error!("Line {}: {e}", idx + 1);
                failed += 1;
            }
        }
    }

    info!("Analyzed {analyzed} hands pairs, {failed} failed");
    Ok(failed)
}

fn write_showdown<W: Write>(out: &mut W, res: &Showdown, verbose: bool) -> Result<()> {
    if verbose {
        writeln!(
            out,
            "{}\t{}\t{}",
            res.winner,
            res.left.rank(),
            res.right.rank()
        )?;
    } else {
        writeln!(out, "{}", res.winner)?;
    }

    Ok(())
}
