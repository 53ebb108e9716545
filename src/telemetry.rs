use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Directives appended below the configured level so HTTP plumbing does not
/// drown out scan and classification logs.
const QUIET_INTERNALS: &str = "hyper=warn,mio=warn,tower=warn";

#[derive(Debug)]
pub enum TelemetryError {
    Filter { directives: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directives, .. } => {
                write!(f, "invalid log filter '{directives}'")
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    install(build_filter(&config.log_level)?)
}

/// One-off scan runs only surface warnings (bad feed rows, orphaned
/// passengers) so the stdout report stays readable. RUST_LOG still overrides.
pub fn init_for_scan() -> Result<(), TelemetryError> {
    install(build_filter("warn")?)
}

fn build_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directives = format!("{level},{QUIET_INTERNALS}");
    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter { directives, source })
}

fn install(filter: EnvFilter) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
