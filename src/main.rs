//! # excess-odds
//!
//! Runs the excess-odds stopping rule many times and prints the net tally.
//!
//! ## Usage
//!
//! ```bash
//! # 10,000 trials, every draw printed, fresh seed
//! excess-odds
//!
//! # Reproducible run, tally only
//! excess-odds --seed 42 --quiet
//!
//! # Bigger batch with per-trial debug logs on stderr
//! excess-odds --trials 100000 --quiet -v
//! ```

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use excess_odds::core::{ExperimentConfig, DEFAULT_TRIALS};
use excess_odds::experiment::Experiment;
use excess_odds::trial::{DrawPrinter, Silent};

#[derive(Parser, Debug)]
#[command(name = "excess-odds")]
#[command(about = "Estimate how often the excess-odds stopping rule ends on an even card")]
#[command(version)]
struct Args {
    /// Number of trials
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    trials: u32,

    /// Random seed (drawn from OS entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only print the final tally
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Filter used when `RUST_LOG` is unset. The crate logs at `info` by
/// default so the seed of every run reaches stderr.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "excess_odds=debug,warn"
    } else {
        "excess_odds=info,warn"
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = ExperimentConfig::new().with_trials(args.trials);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut experiment = Experiment::new(config);
    let mut out = BufWriter::new(io::stdout().lock());

    let tally = if args.quiet {
        experiment.run(&mut Silent)
    } else {
        experiment.run(&mut DrawPrinter::new(&mut out))
    }
    .context("experiment failed")?;

    writeln!(out, "{tally}").context("failed to write tally")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
