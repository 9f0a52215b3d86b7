//! Structured logging for the bosk command line.
//!
//! The CLI logs through `tracing`; this module wires the process-global
//! subscriber: an `EnvFilter` honouring `RUST_LOG`, a format layer writing
//! to stderr, and a best-effort `log` bridge for dependencies that still
//! emit through the `log` facade.

use std::{env, io, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the event output format.
const FORMAT_VAR: &str = "BOSK_LOG_FORMAT";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Output format for the subscriber's event layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Human,
    /// Newline-delimited JSON carrying span context.
    Json,
}

impl LogFormat {
    /// Parses a `BOSK_LOG_FORMAT` value, ignoring case and surrounding
    /// whitespace.
    fn parse(raw: &str) -> Result<Self, LoggingError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnknownFormat {
                value: raw.trim().to_owned(),
            }),
        }
    }
}

/// Errors raised while wiring the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `BOSK_LOG_FORMAT` held a value other than `human` or `json`.
    #[error("BOSK_LOG_FORMAT must be `human` or `json`, got `{value}`")]
    UnknownFormat {
        /// The rejected value.
        value: String,
    },
    /// `BOSK_LOG_FORMAT` was not valid UTF-8.
    #[error("BOSK_LOG_FORMAT is not valid UTF-8")]
    NonUnicodeFormat {
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
}

/// Installs the global `tracing` subscriber once per process.
///
/// Events go to stderr so the rendered summary on stdout stays parseable.
/// The filter comes from `RUST_LOG` and defaults to `info`; the format
/// comes from `BOSK_LOG_FORMAT` and defaults to human-readable output.
/// Later calls return without touching the existing configuration.
///
/// # Errors
/// Returns [`LoggingError`] when `BOSK_LOG_FORMAT` is malformed.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let format = format_from_env()?;
    if let Err(source) = install(format) {
        // A subscriber installed earlier in the process (test harnesses
        // set one) keeps priority over ours.
        eprintln!("tracing subscriber already installed, keeping it: {source}");
    }
    let _ = INSTALLED.set(());
    Ok(())
}

/// Reads `BOSK_LOG_FORMAT`, defaulting to human output when unset.
fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(FORMAT_VAR) {
        Ok(raw) => LogFormat::parse(&raw),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(source @ env::VarError::NotUnicode(_)) => {
            Err(LoggingError::NonUnicodeFormat { source })
        }
    }
}

fn install(format: LogFormat) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Span close events carry the busy/idle timings, which is all the CLI
    // needs to account for a run.
    let events = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(io::stderr);
    let events = match format {
        LogFormat::Human => events.boxed(),
        LogFormat::Json => events
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // The log bridge is best-effort: losing it only drops events from
    // `log`-based dependencies, never our own.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init()
}
