//! crates/logging/src/macros.rs
//! Level-gated diagnostic macros.
//!
//! Both macros take the flag variant name, the minimum level and a format
//! string. The message is only formatted when the current thread's
//! [`VerbosityConfig`](crate::VerbosityConfig) enables the flag at that level.

/// Emit a debug diagnostic for the given [`DebugFlag`](crate::DebugFlag).
///
/// ```
/// use logging::{debug_log, drain_events, init, VerbosityConfig};
///
/// let mut config = VerbosityConfig::default();
/// config.debug.walk = 2;
/// init(config);
///
/// debug_log!(Walk, 2, "entering directory: {:?}", "/tmp");
/// debug_log!(Walk, 3, "suppressed");
/// assert_eq!(drain_events().len(), 1);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {
        if $crate::debug_gte($crate::DebugFlag::$flag, $level) {
            $crate::emit_debug($crate::DebugFlag::$flag, $level, ::std::format!($($arg)+));
        }
    };
}

/// Emit an info diagnostic for the given [`InfoFlag`](crate::InfoFlag).
#[macro_export]
macro_rules! info_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {
        if $crate::info_gte($crate::InfoFlag::$flag, $level) {
            $crate::emit_info($crate::InfoFlag::$flag, $level, ::std::format!($($arg)+));
        }
    };
}
