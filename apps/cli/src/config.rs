use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use subreg_domain::constants::DEFAULT_CONFIG_FILE;

/// Prefix of environment overrides, e.g. `SUBREG__COMMIT__PROVIDER`.
pub const ENV_PREFIX: &str = "SUBREG";

#[subreg_derive::subreg_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a TOML file layered with environment overrides.
///
/// An explicit `path` must exist. Without one, `subreg.toml` in the working directory is
/// read if present, and defaults apply otherwise. Environment variables prefixed with
/// `SUBREG__` override file values; nested keys are separated by double underscores
/// (`SUBREG__LOGGING__LEVEL` maps to `logging.level`). `SUBREG__POLICY__DENYLIST` takes a
/// comma-separated list.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the explicit file is missing or any source does
/// not match the structure of `T`.
pub fn load_config<T>(path: Option<&Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("policy.denylist"),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
