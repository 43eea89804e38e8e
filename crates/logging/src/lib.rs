#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the verbosity flag system used by the directory walker.
//! Diagnostics are grouped into categories ([`InfoFlag`], [`DebugFlag`]) with
//! an integer level per category, so callers can ask for "every directory
//! entered" without also receiving every metadata lookup.
//!
//! # Design
//!
//! - [`VerbosityConfig`] holds the info and debug levels. It can be derived
//!   from a single verbose level or adjusted with flag tokens such as
//!   `"walk4"` or `"stat"`.
//! - The configuration lives in thread-local storage ([`init`]). The
//!   [`debug_log!`] and [`info_log!`] macros check it before formatting and
//!   record a [`DiagnosticEvent`], which tests and hosts collect with
//!   [`drain_events`].
//! - With the `tracing` feature, [`WalkLayer`] routes `tracing` events with
//!   `dirwalk::<category>` targets into the same event buffer, every
//!   recorded event is forwarded to `tracing` on its category target, and
//!   [`init_tracing`] installs the layer plus a stderr formatter as the
//!   global subscriber.
//!
//! # Invariants
//!
//! - A message is only formatted when its flag is enabled at the requested
//!   level.
//! - Events recorded on one thread are never visible from another.
//!
//! # Examples
//!
//! ```
//! use logging::{debug_log, drain_events, init, DebugFlag, DiagnosticEvent, VerbosityConfig};
//!
//! let mut config = VerbosityConfig::default();
//! config.apply_debug_flag("stat2").unwrap();
//! init(config);
//!
//! debug_log!(Stat, 1, "lstat {}", "a.txt");
//! let events = drain_events();
//! assert!(matches!(
//!     &events[0],
//!     DiagnosticEvent::Debug { flag: DebugFlag::Stat, level: 1, .. }
//! ));
//! ```

mod config;
mod levels;
mod macros;
mod thread_local;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
pub use thread_local::{
    DiagnosticEvent, apply_debug_flag, apply_info_flag, current, debug_gte, drain_events,
    emit_debug, emit_info, info_gte, init,
};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{TARGET_PREFIX, WalkLayer, init_tracing, init_tracing_with_env_filter};
