use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::LevelFilter;
use snake::{app, build_info, logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snake")]
#[command(version, long_version = build_info::LONG_VERSION)]
#[command(about = "Classic Snake in the terminal")]
struct Cli {
    /// Seed for apple placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log file location (defaults to the per-user data directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, cli.log_level.into())?;

    info!(
        "snake {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        build_info::BUILD_DATE,
        build_info::BUILD_COMMIT
    );

    let rng = match cli.seed {
        Some(seed) => {
            info!("apple seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    app::run(rng)?;

    println!("Goodbye!");
    Ok(())
}
