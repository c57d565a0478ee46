use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vizualx_config::{LogFormat, LoggingConfig};

/// Filter directive derived from configuration.
///
/// The configured level applies to the service crates and HTTP tracing;
/// dependencies stay at `warn` so probe traffic from `reqwest`/`hyper`
/// does not flood the output.
pub fn filter_directive(config: &LoggingConfig) -> String {
    let level = config.level.as_str();
    format!(
        "warn,vizualx_sync={level},vizualx_rest_api={level},vizualx_web={level},vizualx_server={level},vizualx_config={level},tower_http={level}"
    )
}

/// Initialize logging from configuration
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn init_logging_from_config(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(config)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so `check` output on stdout stays machine-readable
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    // Use try_init to avoid panic if global subscriber already set
    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    if installed.is_err() {
        tracing::debug!("Global tracing subscriber already initialized, skipping");
    }

    Ok(())
}
