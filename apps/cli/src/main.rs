use anyhow::Context;
use clap::Parser;
use std::io::{self, IsTerminal};
use subreg_cli::args::Cli;
use subreg_logger::{LevelFilter, Logger};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = subreg_cli::settings(&cli).context("Critical: Configuration is malformed")?;

    let mut logger = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .ansi(io::stderr().is_terminal())
        .json(config.logging.json);
    logger = if cli.verbose {
        logger.level(LevelFilter::DEBUG)
    } else {
        logger.env_filter(config.logging.level.as_str())
    };
    if let Some(dir) = &config.logging.dir {
        logger = logger.dir(dir);
    }
    let _logger = logger.init()?;

    debug!(
        file = ?cli.config,
        dir = %config.declarations.dir.display(),
        registrar = %config.commit.registrar,
        provider = %config.commit.provider,
        "Configuration loaded"
    );

    subreg_cli::run(&cli.command, &config, io::stdout().lock())
}
