//! `affect` — interactive front end for the appraisal pipeline.
//!
//! Reads one line of input per turn, runs the full pipeline pass, and
//! renders the turn report: appraisal path, emotion intensities, decision
//! scores, and the canned response for the chosen option. A literal `exit`
//! ends the session.
//!
//! The response templates live here, not in the core: the pipeline decides
//! *which* option to take, the front end owns what that option says.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use affect_core::session::{Session, TurnReport};
use affect_core::types::ResponseOption;
use affect_core::AffectConfig;

/// Interactive appraisal session.
#[derive(Parser)]
#[command(name = "affect", about = "Turn-based emotional appraisal session", version)]
struct Cli {
    /// Path to a TOML configuration file (defaults apply when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    verbose: bool,

    /// Print only the response line, without the turn report.
    #[arg(short, long)]
    quiet: bool,
}

/// Canned response string for a chosen option.
fn response_text(option: ResponseOption) -> &'static str {
    match option {
        ResponseOption::A => "I will do my best to provide a helpful and detailed response.",
        ResponseOption::B => {
            "To best assist you, could you please provide more details about your request?"
        }
        ResponseOption::C => "Understood. I will provide a concise answer to your question.",
    }
}

/// Render one turn report to stdout.
fn print_report(out: &mut impl Write, report: &TurnReport) -> Result<()> {
    writeln!(out, "category: {}", report.category)?;
    writeln!(
        out,
        "path: {:?} / {:?} / {:?} / {:?} / {:?} / {:?}",
        report.path.valence,
        report.path.relevance,
        report.path.physiological,
        report.path.expression,
        report.path.emotion,
        report.path.intensity,
    )?;

    write!(out, "intensities:")?;
    for (emotion, intensity) in report.emotions.iter() {
        write!(out, " {emotion}={intensity:.2}")?;
    }
    writeln!(out)?;

    write!(out, "scores:")?;
    for (option, score) in report.scores.iter() {
        write!(out, " {option}={score:.2}")?;
    }
    writeln!(out)?;
    writeln!(out, "chosen: {}", report.chosen)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &cli.config {
        Some(path) => AffectConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AffectConfig::default(),
    };

    let mut session = Session::new(&config);
    debug!(session = %session.id(), "starting interactive session");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Starting appraisal session. Type 'exit' to end.");
    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break; // EOF
        };
        let line = line?;

        let report = session.run_turn(&line);
        if !cli.quiet {
            print_report(&mut stdout, &report)?;
        }
        println!("{}", response_text(report.chosen));

        // Matches the session contract: the exit turn still runs the full
        // pipeline pass before the loop ends.
        if line.trim().eq_ignore_ascii_case("exit") {
            println!("Ending session.");
            break;
        }
        println!();
    }

    Ok(())
}
