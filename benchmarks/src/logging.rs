use std::env::{self, VarError};

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_ENV: &str = "MINIMATH_LOG";

struct LoggerConfig {
    filter: Result<String, VarError>,
}

impl LoggerConfig {
    fn from_env() -> Self {
        Self {
            filter: env::var(LOG_ENV),
        }
    }
}

/// Installs a stderr subscriber filtered by `MINIMATH_LOG`, e.g. `MINIMATH_LOG=minimath=trace`.
///
/// Leaves tracing uninstalled when the variable is not set.
pub fn init_tracing() {
    let filter = match LoggerConfig::from_env().filter {
        Ok(filter) => EnvFilter::new(filter),
        Err(_) => return,
    };
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
    {
        eprintln!("Warning: could not install tracing subscriber: {err}");
    }
}
