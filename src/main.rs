//! cogex-stroop - Stroop interference tasks in the terminal
//!
//! Usage:
//!   cogex-stroop                       # choose a variant from the menu
//!   cogex-stroop classic --trials 40   # run one session
//!   cogex-stroop spatial --json        # print the summary as JSON
//!   cogex-stroop --list                # list the variants

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use cogex_core::Variant;
use cogex_experiment::{TrialRunner, run_session};
use cogex_timing::HighPrecisionTimer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, Level};

mod config;
mod report;
mod terminal;

use config::{apply_overrides, load_config, Overrides};
use terminal::{parse_variant, StdinResponses, TerminalPresenter};

#[derive(Parser)]
#[command(name = "cogex-stroop")]
#[command(about = "Classic, emotional, numerical, spatial and task-switching Stroop tasks")]
#[command(version)]
struct Cli {
    /// Variant to run; omit to choose from a menu
    variant: Option<Variant>,

    /// Number of trials per session
    #[arg(short = 'n', long)]
    trials: Option<usize>,

    /// TOML file with experiment settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible trial sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Response window in milliseconds (0 waits indefinitely)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print the summary as JSON on stdout
    #[arg(long)]
    json: bool,

    /// List the variants and exit
    #[arg(long)]
    list: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

type Runner = TrialRunner<HighPrecisionTimer, StdRng>;
type Screen = TerminalPresenter<Box<dyn Write>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    if cli.list {
        for variant in Variant::ALL {
            println!("{:<10} {}", variant.as_str(), variant.title());
        }
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    let config = apply_overrides(
        config,
        &Overrides {
            trials: cli.trials,
            seed: cli.seed,
            timeout_ms: cli.timeout_ms,
        },
    )?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut runner = TrialRunner::new(config, HighPrecisionTimer::new(), rng);

    // Trials go to stderr when stdout carries JSON
    let out: Box<dyn Write> = if cli.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut screen = TerminalPresenter::new(out);
    let mut source = StdinResponses::spawn();

    match cli.variant {
        Some(variant) => {
            run_variant(&mut runner, &mut screen, &mut source, variant, cli.json)?;
        }
        None => loop {
            screen.show_menu();
            let Some(line) = source.next_line() else {
                break;
            };
            if line.trim().eq_ignore_ascii_case("q") {
                break;
            }
            match parse_variant(&line) {
                Some(variant) => {
                    run_variant(&mut runner, &mut screen, &mut source, variant, cli.json)?;
                }
                None => screen.emit(&format!("Unknown variant '{}'.", line.trim())),
            }
        },
    }

    Ok(())
}

/// Runs one session and reports it; an abort is not an error
fn run_variant(
    runner: &mut Runner,
    screen: &mut Screen,
    source: &mut StdinResponses,
    variant: Variant,
    json: bool,
) -> Result<()> {
    let trials = runner.config.trial_count;
    screen.show_instructions(variant, trials);

    let completion = run_session(runner, screen, source, variant, trials)
        .with_context(|| format!("{} session failed", variant))?;

    match completion {
        Some(completion) if json => println!("{}", report::render_json(&completion)?),
        Some(completion) => {
            screen.emit("");
            screen.emit(&report::render_text(&completion));
        }
        None => {
            info!("{} session aborted", variant);
            screen.emit("Session aborted.");
        }
    }
    Ok(())
}
