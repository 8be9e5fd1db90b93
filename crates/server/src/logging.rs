//! Tracing subscriber setup.

use time::format_description;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

use crate::config::LogFormat;

/// UTC timestamp layout for log lines, e.g. `2024/05/01 13:07:09.042`.
pub const TIMESTAMP_FORMAT: &str = "[year]/[month]/[day] [hour]:[minute]:[second].[subsecond digits:3]";

/// Installs the global subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Fails instead of
/// panicking when a subscriber is already installed.
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let timer = UtcTime::new(format_description::parse(TIMESTAMP_FORMAT)?);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_target(false);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
