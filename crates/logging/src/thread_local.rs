//! crates/logging/src/thread_local.rs
//! Thread-local storage for verbosity configuration and event collection.

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use std::cell::RefCell;

thread_local! {
    static VERBOSITY: RefCell<VerbosityConfig> = RefCell::new(VerbosityConfig::default());
    #[allow(clippy::missing_const_for_thread_local)]
    static EVENTS: RefCell<Vec<DiagnosticEvent>> = RefCell::new(Vec::new());
}

/// Diagnostic event collected during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Info-level diagnostic event.
    Info {
        /// The info flag category.
        flag: InfoFlag,
        /// The verbosity level.
        level: u8,
        /// The diagnostic message.
        message: String,
    },
    /// Debug-level diagnostic event.
    Debug {
        /// The debug flag category.
        flag: DebugFlag,
        /// The verbosity level.
        level: u8,
        /// The diagnostic message.
        message: String,
    },
}

impl DiagnosticEvent {
    /// Returns the rendered message.
    pub fn message(&self) -> &str {
        match self {
            Self::Info { message, .. } | Self::Debug { message, .. } => message,
        }
    }
}

/// Initialize verbosity configuration for the current thread.
pub fn init(config: VerbosityConfig) {
    VERBOSITY.with(|v| {
        *v.borrow_mut() = config;
    });
}

/// Returns a copy of the current thread's verbosity configuration.
pub fn current() -> VerbosityConfig {
    VERBOSITY.with(|v| v.borrow().clone())
}

/// Check if the info flag is at or above the specified level.
pub fn info_gte(flag: InfoFlag, level: u8) -> bool {
    VERBOSITY.with(|v| v.borrow().info.get(flag) >= level)
}

/// Check if the debug flag is at or above the specified level.
pub fn debug_gte(flag: DebugFlag, level: u8) -> bool {
    VERBOSITY.with(|v| v.borrow().debug.get(flag) >= level)
}

/// Emit an info diagnostic event.
///
/// With the `tracing` feature the event is also forwarded to the current
/// tracing subscriber.
pub fn emit_info(flag: InfoFlag, level: u8, message: String) {
    #[cfg(feature = "tracing")]
    super::tracing_bridge::forward_info(flag, &message);
    record_info(flag, level, message);
}

pub(crate) fn record_info(flag: InfoFlag, level: u8, message: String) {
    EVENTS.with(|e| {
        e.borrow_mut().push(DiagnosticEvent::Info {
            flag,
            level,
            message,
        });
    });
}

/// Emit a debug diagnostic event.
///
/// With the `tracing` feature the event is also forwarded to the current
/// tracing subscriber.
pub fn emit_debug(flag: DebugFlag, level: u8, message: String) {
    #[cfg(feature = "tracing")]
    super::tracing_bridge::forward_debug(flag, &message);
    record_debug(flag, level, message);
}

pub(crate) fn record_debug(flag: DebugFlag, level: u8, message: String) {
    EVENTS.with(|e| {
        e.borrow_mut().push(DiagnosticEvent::Debug {
            flag,
            level,
            message,
        });
    });
}

/// Drain all collected events, clearing the internal buffer.
pub fn drain_events() -> Vec<DiagnosticEvent> {
    EVENTS.with(|e| e.borrow_mut().drain(..).collect())
}

/// Apply an info flag token to the current configuration.
pub fn apply_info_flag(token: &str) -> Result<(), String> {
    VERBOSITY.with(|v| v.borrow_mut().apply_info_flag(token))
}

/// Apply a debug flag token to the current configuration.
pub fn apply_debug_flag(token: &str) -> Result<(), String> {
    VERBOSITY.with(|v| v.borrow_mut().apply_debug_flag(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_and_stat_levels_gate_checks() {
        let mut config = VerbosityConfig::default();
        config.info.skip = 2;
        config.debug.stat = 3;

        init(config);

        assert!(info_gte(InfoFlag::Skip, 1));
        assert!(info_gte(InfoFlag::Skip, 2));
        assert!(!info_gte(InfoFlag::Skip, 3));

        assert!(debug_gte(DebugFlag::Stat, 1));
        assert!(debug_gte(DebugFlag::Stat, 3));
        assert!(!debug_gte(DebugFlag::Stat, 4));
    }

    #[test]
    fn drained_events_keep_emission_order() {
        init(VerbosityConfig::default());
        drain_events();

        emit_info(InfoFlag::Walk, 1, "root/a.txt".to_string());
        emit_debug(DebugFlag::Walk, 2, "entering directory: \"root/sub\"".to_string());

        let events = drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message(), "root/a.txt");
        assert_eq!(events[1].message(), "entering directory: \"root/sub\"");
        assert!(drain_events().is_empty());
    }

    #[test]
    fn flag_tokens_update_thread_config() {
        init(VerbosityConfig::default());
        apply_debug_flag("dup2").expect("valid");
        apply_info_flag("walk").expect("valid");

        let config = current();
        assert_eq!(config.debug.dup, 2);
        assert_eq!(config.info.walk, 1);
    }

    #[test]
    fn walk_config_does_not_leak_across_threads() {
        let mut config = VerbosityConfig::default();
        config.debug.walk = 4;
        init(config);

        let other = std::thread::spawn(|| debug_gte(DebugFlag::Walk, 1))
            .join()
            .expect("thread");
        assert!(!other);
        assert!(debug_gte(DebugFlag::Walk, 4));
    }
}
