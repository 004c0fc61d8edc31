//! Logging subscriber initialisation.

use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{LogFormat, ServerConfig, observability::LoggingConfig};

use super::ObservabilityError;

/// Crates whose output is noise at the configured level unless asked for.
const QUIET_TARGETS: [&str; 3] = ["h2", "hyper", "salvo_core"];

pub(super) fn init_subscriber(config: &ServerConfig) -> Result<(), ObservabilityError> {
    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = match config.logging.log_format {
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .flatten_event(true)
            .boxed(),
    };

    let filter = EnvFilter::try_from_env("TIFFIN_LOG")
        .unwrap_or_else(|_unset| EnvFilter::new(default_directives(&config.logging)));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()?;

    Ok(())
}

/// `LOG_SQL` lifts sqlx to `debug` so every statement is logged.
fn default_directives(logging: &LoggingConfig) -> String {
    let sqlx = if logging.log_sql { "debug" } else { "warn" };

    let mut directives = vec![logging.log_level.clone(), format!("sqlx={sqlx}")];

    directives.extend(QUIET_TARGETS.iter().map(|target| format!("{target}=warn")));

    directives.join(",")
}
