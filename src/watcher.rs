use crate::extract::parse_leading_float;
use crate::source::PriceSource;
use crate::transport::Transport;
use std::time::Duration;
use tracing::{info, warn};

/// Configuration for the price watcher.
pub struct WatcherConfig {
    /// How often to poll the page element.
    pub poll_interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(500),
        }
    }
}

/// Polls a price source on a fixed period, suppresses consecutive duplicate
/// values, and forwards each changed value to its transport.
///
/// One instance owns its entire state: the last emitted value, the source,
/// and the transport. Multiple watchers run independently.
pub struct PriceWatcher<S, T> {
    source: S,
    transport: T,
    config: WatcherConfig,
    last_value: Option<f64>,
}

impl<S: PriceSource, T: Transport> PriceWatcher<S, T> {
    pub fn new(source: S, transport: T) -> Self {
        Self::with_config(source, transport, WatcherConfig::default())
    }

    pub fn with_config(source: S, transport: T, config: WatcherConfig) -> Self {
        Self {
            source,
            transport,
            config,
            last_value: None,
        }
    }

    /// The most recently emitted value, if any.
    pub fn last_value(&self) -> Option<f64> {
        self.last_value
    }

    /// Decision step for one raw text read: parse the leading numeric prefix
    /// and compare against the last emitted value (strict float inequality).
    /// Returns the value to dispatch, updating state on change. Unparseable
    /// text leaves state untouched. The first successful parse always counts
    /// as a change.
    fn observe(&mut self, raw: &str) -> Option<f64> {
        let value = parse_leading_float(raw)?;
        if self.last_value == Some(value) {
            return None;
        }
        self.last_value = Some(value);
        Some(value)
    }

    /// One poll: read the element text, decide, dispatch on change.
    ///
    /// A missing element or unparseable text skips the tick silently. State
    /// is advanced before the send, so a failed send is never retried - not
    /// directly, and not implicitly by an unchanged subsequent value.
    /// Returns the emitted value regardless of send outcome.
    pub async fn tick(&mut self) -> Option<f64> {
        let raw = self.source.read().await?;
        let value = self.observe(&raw)?;

        match self.transport.send(value).await {
            Ok(()) => info!("Sent price: {}", value),
            Err(e) => warn!("Failed to send price {}: {}", value, e),
        }

        Some(value)
    }

    /// Runs the poll loop forever. Ticks are strictly sequential: each
    /// tick's work completes before the next begins. No error terminates
    /// the loop; it runs until process teardown.
    pub async fn run(mut self) {
        info!(
            "PriceWatcher started (interval: {}ms)",
            self.config.poll_interval.as_millis()
        );

        let mut interval = tokio::time::interval(self.config.poll_interval);
        loop {
            interval.tick().await;
            let _ = self.tick().await;
        }
    }
}
