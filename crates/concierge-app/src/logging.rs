//! Tracing setup.
//!
//! The subscriber is installed before the config file is read so loader
//! warnings are not lost. Once the config is known its `logging.level`
//! replaces the startup filter, unless the filter was given explicitly
//! with `--log-level` or `RUST_LOG`.

use concierge_config::schema::LogLevel;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter, Registry};

const DEFAULT_DIRECTIVE: &str = "concierge=info";

/// Handle for swapping the active filter after startup.
pub(crate) struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

impl LogHandle {
    /// Switch to the configured level. Returns `false` when an explicit
    /// directive pinned the filter or the reload failed.
    pub(crate) fn apply_config_level(&self, level: LogLevel) -> bool {
        if self.pinned {
            return false;
        }
        let directive = format!("concierge={}", level.as_directive());
        match self.handle.reload(EnvFilter::new(&directive)) {
            Ok(()) => {
                tracing::debug!(%directive, "Log filter set from config");
                true
            }
            Err(e) => {
                tracing::warn!("Failed to apply config log level: {e}");
                false
            }
        }
    }
}

/// Build the subscriber writing to `writer`.
///
/// An explicit `directive` pins the filter; an invalid one falls back to
/// `concierge=info`.
pub(crate) fn subscriber<W>(
    directive: Option<String>,
    writer: W,
) -> (impl Subscriber + Send + Sync + 'static, LogHandle)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = directive
        .as_deref()
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE));
    let (filter, handle) = reload::Layer::new(filter);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer));

    let handle = LogHandle {
        handle,
        pinned: directive.is_some(),
    };
    (subscriber, handle)
}

/// Install the global subscriber. Logs go to stderr; stdout carries the
/// transcript.
pub(crate) fn init(directive: Option<String>) -> LogHandle {
    let (subscriber, handle) = subscriber(directive, std::io::stderr);
    subscriber.init();
    handle
}
