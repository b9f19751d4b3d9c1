//! # subreg
//!
//! Command-line front end for the subdomain registry: loads declaration files, runs them
//! through [`subreg_registry::Registrar`] and prints the compiled commit plan.

pub mod args;
pub mod config;
pub mod plan;
pub mod source;

use crate::args::{Cli, Command};
use crate::config::{ConfigError, load_config};
use crate::plan::JsonPlan;
use crate::source::load_declarations;
use anyhow::Result;
use std::io::Write;
use subreg_domain::config::SubregConfig;
use subreg_registry::{Registrar, Registry, StandardRecords, Submission, compile};
use tracing::info;

/// Effective configuration: file and environment, then command-line overrides.
///
/// # Errors
/// Returns [`ConfigError`] if the configuration cannot be loaded.
pub fn settings(cli: &Cli) -> Result<SubregConfig, ConfigError> {
    let mut config: SubregConfig = load_config(cli.config.as_deref())?;
    if let Some(dir) = &cli.dir {
        config.declarations.dir.clone_from(dir);
    }
    Ok(config)
}

/// Executes `command`, writing its result to `out`.
///
/// # Errors
/// Fails on the first unreadable file, rejected declaration or output error.
pub fn run<W: Write>(command: &Command, config: &SubregConfig, mut out: W) -> Result<()> {
    match command {
        Command::Check => {
            let registry = register(config)?;
            writeln!(out, "{} declarations valid", registry.len())?;
        },
        Command::Compile { pretty } => {
            let registry = register(config)?;
            let commit = compile(&registry, &StandardRecords)?;

            let submission =
                Submission { registrar: &config.commit.registrar, provider: &config.commit.provider };
            let mut plan = JsonPlan::new();
            commit.submit(&submission, &mut plan)?;

            plan.write_to(out, *pretty)?;
        },
    }
    Ok(())
}

/// Loads every declaration file and registers it, stopping at the first failure.
///
/// # Errors
/// Returns the load or registration error, naming the offending file.
pub fn register(config: &SubregConfig) -> Result<Registry> {
    let declarations = load_declarations(&config.declarations.dir, &config.declarations.extension)?;

    let registrar = Registrar::new().deny(&config.policy.denylist);
    let mut registry = Registry::new();
    registrar.register_all(&mut registry, declarations)?;

    info!(dir = %config.declarations.dir.display(), declarations = registry.len(), "Declarations registered");

    Ok(registry)
}
