//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the walker's verbosity system.
//!
//! [`WalkLayer`] is a tracing-subscriber layer that maps events whose target
//! names a diagnostic category (`dirwalk::walk`, `dirwalk::stat`, ...) onto
//! the matching [`InfoFlag`] or [`DebugFlag`]. Events pass through only when
//! the thread's [`VerbosityConfig`] enables the flag at the event's level,
//! and are then recorded exactly like [`debug_log!`](crate::debug_log)
//! output.
//!
//! In the other direction, every event recorded by [`debug_log!`] or
//! [`info_log!`](crate::info_log) is forwarded as a tracing event on the same
//! target, marked `forwarded` so the layer does not record it twice.
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2))?;
//! tracing::debug!(target: "dirwalk::walk", "entering directory");
//! ```

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use super::thread_local::{debug_gte, info_gte, record_debug, record_info};
use tracing::{Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Target prefix shared by every walker diagnostic.
pub const TARGET_PREFIX: &str = "dirwalk";

const FORWARDED: &str = "forwarded";

/// Re-emits a recorded debug diagnostic as a tracing event.
pub(crate) fn forward_debug(flag: DebugFlag, message: &str) {
    match flag {
        DebugFlag::Walk => tracing::debug!(target: "dirwalk::walk", forwarded = true, "{message}"),
        DebugFlag::Stat => tracing::debug!(target: "dirwalk::stat", forwarded = true, "{message}"),
        DebugFlag::Symlink => {
            tracing::debug!(target: "dirwalk::symlink", forwarded = true, "{message}");
        }
        DebugFlag::Dup => tracing::debug!(target: "dirwalk::dup", forwarded = true, "{message}"),
    }
}

/// Re-emits a recorded info diagnostic as a tracing event.
pub(crate) fn forward_info(flag: InfoFlag, message: &str) {
    match flag {
        InfoFlag::Walk => tracing::info!(target: "dirwalk::walk", forwarded = true, "{message}"),
        InfoFlag::Skip => tracing::info!(target: "dirwalk::skip", forwarded = true, "{message}"),
    }
}

/// A tracing layer that routes events into the walker's verbosity system.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkLayer;

impl WalkLayer {
    /// Create a new layer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn category(target: &str) -> &str {
        target.rsplit("::").next().unwrap_or(target)
    }

    /// Map a tracing target to an info flag.
    ///
    /// Only the final path segment is compared, so `dirwalk::skip` and a bare
    /// `skip` both resolve.
    fn target_to_info_flag(target: &str) -> Option<InfoFlag> {
        let category = Self::category(target);
        InfoFlag::ALL.into_iter().find(|flag| flag.name() == category)
    }

    /// Map a tracing target to a debug flag.
    fn target_to_debug_flag(target: &str) -> Option<DebugFlag> {
        let category = Self::category(target);
        DebugFlag::ALL.into_iter().find(|flag| flag.name() == category)
    }

    /// Map a tracing level to a verbosity level.
    const fn level_to_verbosity_level(level: &Level) -> u8 {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO => 1,
            Level::DEBUG => 2,
            Level::TRACE => 3,
        }
    }
}

impl<S> Layer<S> for WalkLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        let level = Self::level_to_verbosity_level(metadata.level());

        // Info is checked first for INFO-level events; `walk` names both an
        // info and a debug category.
        if *metadata.level() <= Level::INFO {
            if let Some(flag) = Self::target_to_info_flag(target) {
                if info_gte(flag, level) {
                    if let Some(message) = MessageVisitor::extract(event) {
                        record_info(flag, level, message);
                    }
                }
                return;
            }
        }

        if let Some(flag) = Self::target_to_debug_flag(target) {
            if debug_gte(flag, level) {
                if let Some(message) = MessageVisitor::extract(event) {
                    record_debug(flag, level, message);
                }
            }
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    forwarded: bool,
}

impl MessageVisitor {
    /// Returns the message, or `None` for events that were forwarded from
    /// the event buffer in the first place.
    fn extract(event: &tracing::Event<'_>) -> Option<String> {
        let mut visitor = Self::default();
        event.record(&mut visitor);
        if visitor.forwarded {
            return None;
        }
        visitor.message
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        if field.name() == FORWARDED {
            self.forwarded = value;
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Install a global subscriber that routes walker events through [`WalkLayer`]
/// and prints them to stderr.
///
/// The configuration is also installed for the calling thread.
pub fn init_tracing(config: VerbosityConfig) -> Result<(), TryInitError> {
    super::thread_local::init(config);
    tracing_subscriber::registry()
        .with(WalkLayer::new())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

/// Install a global subscriber with an [`EnvFilter`] in front of [`WalkLayer`].
///
/// Directives come from `RUST_LOG` when set; otherwise a `dirwalk=<level>`
/// directive is derived from the configuration's highest flag level.
pub fn init_tracing_with_env_filter(config: VerbosityConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config)));
    super::thread_local::init(config);
    tracing_subscriber::registry()
        .with(filter)
        .with(WalkLayer::new())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

fn default_directive(config: &VerbosityConfig) -> String {
    let level = match config.max_level() {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("{TARGET_PREFIX}={level}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thread_local::{DiagnosticEvent, drain_events, init};

    #[test]
    fn test_target_to_info_flag() {
        assert_eq!(
            WalkLayer::target_to_info_flag("dirwalk::skip"),
            Some(InfoFlag::Skip)
        );
        assert_eq!(WalkLayer::target_to_info_flag("walk"), Some(InfoFlag::Walk));
        assert_eq!(WalkLayer::target_to_info_flag("dirwalk::stat"), None);
    }

    #[test]
    fn test_target_to_debug_flag() {
        assert_eq!(
            WalkLayer::target_to_debug_flag("dirwalk::symlink"),
            Some(DebugFlag::Symlink)
        );
        assert_eq!(
            WalkLayer::target_to_debug_flag("dirwalk::dup"),
            Some(DebugFlag::Dup)
        );
        assert_eq!(WalkLayer::target_to_debug_flag("unknown"), None);
        assert_eq!(WalkLayer::target_to_debug_flag("dirwalk::unstat"), None);
    }

    #[test]
    fn test_level_to_verbosity_level() {
        assert_eq!(WalkLayer::level_to_verbosity_level(&Level::ERROR), 1);
        assert_eq!(WalkLayer::level_to_verbosity_level(&Level::INFO), 1);
        assert_eq!(WalkLayer::level_to_verbosity_level(&Level::DEBUG), 2);
        assert_eq!(WalkLayer::level_to_verbosity_level(&Level::TRACE), 3);
    }

    #[test]
    fn default_directive_tracks_max_level() {
        assert_eq!(
            default_directive(&VerbosityConfig::default()),
            "dirwalk=warn"
        );
        assert_eq!(
            default_directive(&VerbosityConfig::from_verbose_level(3)),
            "dirwalk=trace"
        );
    }

    #[test]
    fn layer_records_enabled_events_only() {
        let mut config = VerbosityConfig::default();
        config.debug.stat = 2;
        init(config);
        drain_events();

        let subscriber = tracing_subscriber::registry().with(WalkLayer::new());
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: "dirwalk::stat", "lstat failed for {}", "a.txt");
            tracing::debug!(target: "dirwalk::symlink", "not recorded");
        });

        let events = drain_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            DiagnosticEvent::Debug {
                flag,
                level,
                message,
            } => {
                assert_eq!(*flag, DebugFlag::Stat);
                assert_eq!(*level, 2);
                assert_eq!(message, "lstat failed for a.txt");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn forwarded_events_are_not_recorded_twice() {
        let mut config = VerbosityConfig::default();
        config.debug.walk = 2;
        init(config);
        drain_events();

        let subscriber = tracing_subscriber::registry().with(WalkLayer::new());
        tracing::subscriber::with_default(subscriber, || {
            crate::debug_log!(Walk, 2, "entering directory: {:?}", "/r");
        });

        let events = drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message(), "entering directory: \"/r\"");
    }
}
