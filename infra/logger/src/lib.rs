//! # Logger
//!
//! Tracing setup for the subreg command-line tools.
//!
//! Console output goes to **stderr**, so anything a tool prints on stdout (a compiled
//! plan, for instance) stays machine readable. An optional log file receives the same
//! events, plain or as JSON lines, through a non-blocking writer.
//!
//! Filtering starts from [`LoggerBuilder::level`]; [`LoggerBuilder::env_filter`] adds
//! directives such as `"subreg_registry=debug,info"`. Without explicit directives,
//! `RUST_LOG` is honoured.
//!
//! ## Example
//!
//! ```rust
//! # use subreg_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("subreg")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    ansi: bool,
    dir: Option<PathBuf>,
    level: LevelFilter,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, ansi: true, dir: None, level: LevelFilter::INFO, json: false, env_filter: None }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger, also used as the log file name.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds filter directives (e.g., `subreg_registry=debug,warn`).
    ///
    /// When set, `RUST_LOG` is ignored. Invalid directives cause [`LoggerBuilder::init`]
    /// to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables logging to stderr.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Enables ANSI colours on the console layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.ansi = enabled;
        self
    }

    /// Writes the log file as JSON lines. Has no effect without [`LoggerBuilder::dir`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }

    /// Also logs to `<dir>/<name>.log`. The directory is created if missing.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.dir = Some(dir.into());
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. It owns the file writer's [`WorkerGuard`]; keep it alive
    /// until the program ends so buffered lines reach the file.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set,
    /// [`LoggerError::Io`] or [`LoggerError::Appender`] if the log file cannot be opened,
    /// and [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        validate_config(&self.config, &name)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_writer(io::stderr).with_ansi(self.config.ansi).boxed());
        }

        let (guard, file) = match &self.config.dir {
            Some(dir) => {
                let (file_layer, guard, file) = file_layer(dir, &name, self.config.json)?;
                layers.push(file_layer);
                (Some(guard), Some(file))
            },
            None => (None, None),
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable the console or a log directory.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard, file })
    }
}

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

fn file_layer<S>(
    dir: &Path,
    name: &str,
    json: bool,
) -> Result<(BoxedLayer<S>, WorkerGuard, PathBuf), LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fs::create_dir_all(dir).context(format!("Failed to create {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(dir)
        .context(dir.display().to_string())?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let plain = layer().with_writer(writer).with_ansi(false);
    let boxed = if json { plain.json().boxed() } else { plain.boxed() };

    Ok((boxed, guard, dir.join(format!("{name}.{LOG_FILE_SUFFIX}"))))
}

/// A handle to the initialized logging system.
///
/// Holds the background writer of the log file, if one is configured. Drop it only
/// when the program is about to exit.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
    file: Option<PathBuf>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// # Example
    ///
    /// ```rust
    /// use subreg_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("subreg")
    ///     .level(LevelFilter::WARN)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    /// Path of the log file, if file logging is enabled.
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Returns a reference to the underlying worker guard, if present.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log file");
        }
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.dir.is_some() && name.contains(['/', '\\']) {
        return Err(LoggerError::InvalidConfiguration {
            message: format!("Logger name '{name}' cannot be used as a file name").into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
