//! Shell sort benchmark harness.
//! Without a subcommand an interactive menu is started.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};

use shellsort_research_rs::config::{ExperimentConfig, DEMO_LEN};
use shellsort_research_rs::data::{ElementKind, DEFAULT_STRING_LEN};
use shellsort_research_rs::menu::Menu;
use shellsort_research_rs::{demo, experiment, Direction};

#[derive(Parser, Debug)]
#[command(author, version, about = "Times shell sort on numbers, strings and records", long_about = None)]
struct Args {
    /// Seed for all generated data, random if omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Length of every generated string.
    #[arg(long, global = true, default_value_t = DEFAULT_STRING_LEN)]
    string_len: usize,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort one small dataset and print it before and after.
    Demo {
        #[arg(long, value_enum, default_value_t = ElementKind::Numbers)]
        kind: ElementKind,

        #[arg(long)]
        descending: bool,

        #[arg(long, default_value_t = DEMO_LEN)]
        len: usize,
    },
    /// Time every element kind at every size, write charts and results.json.
    Experiment {
        #[arg(long, value_delimiter = ',', default_values_t = [100, 1_000, 10_000, 100_000])]
        sizes: Vec<usize>,

        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    let config = ExperimentConfig {
        string_len: args.string_len,
        ..ExperimentConfig::default()
    }
    .with_seed(args.seed);
    debug!("{config:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        None => {
            let stdin = io::stdin();
            Menu::new(stdin.lock(), &mut out, config)
                .run()
                .context("interactive menu failed")?;
        }
        Some(Command::Demo {
            kind,
            descending,
            len,
        }) => {
            info!("Seed: {}", config.seed);
            demo::run(
                kind,
                Direction::from(descending),
                len,
                config.string_len,
                &mut config.rng(),
                &mut out,
            )
            .context("demonstration failed")?;
        }
        Some(Command::Experiment { sizes, out_dir }) => {
            let config = ExperimentConfig {
                sizes,
                out_dir,
                ..config
            };
            let report = experiment::run(&config, &mut out).with_context(|| {
                format!("experiment writing to {} failed", config.out_dir.display())
            })?;
            info!(
                "{} element kinds timed, seed {}",
                report.kinds.len(),
                report.seed
            );
        }
    }

    out.flush()?;
    Ok(())
}
