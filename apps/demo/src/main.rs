use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use xacc::logger::{LevelFilter, Logger};
use xacc_demo::config::{DemoConfig, load_config};

/// Wraps a sample array and evaluates the registered accessor paths.
#[derive(Debug, Parser)]
#[command(name = "xacc-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Accessor namespace demo")]
struct Cli {
    /// TOML configuration file (defaults to an optional `xacc-demo.toml`)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Log at debug level regardless of the configured level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: DemoConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::from_str(&cfg.logging.level)
            .with_context(|| format!("Unknown log level '{}'", cfg.logging.level))?
    };

    let mut logger =
        Logger::builder(env!("CARGO_PKG_NAME")).level(level).console(cfg.logging.console);
    if let Some(filter) = &cfg.logging.filter {
        logger = logger.env_filter(filter.clone());
    }
    if let Some(dir) = &cfg.logging.directory {
        logger = logger.path(dir).json(cfg.logging.json);
    }
    let _log = logger.init()?;

    xacc_demo::run(&cfg.sample)?;

    Ok(())
}
