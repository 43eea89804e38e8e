#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `dirwalk` enumerates the entries beneath a directory according to four
//! independent options (recursion, symlink following, dotfiles, directory
//! matching) and reports a single [`WalkResult`] for the whole tree alongside
//! every individual failure.
//!
//! The workspace is split by concern:
//!
//! - [`walk`](mod@walk): the traversal itself, both as a pull iterator
//!   ([`WalkBuilder`], [`Walker`]) and as a callback front-end ([`walk()`]).
//! - [`metadata`]: link-aware mode lookups and the raw [`file_stat`]
//!   accessor.
//! - [`logging`]: per-category verbosity levels and the
//!   [`debug_log!`](logging::debug_log) / [`info_log!`](logging::info_log)
//!   macros the walker reports through.
//!
//! # Examples
//!
//! ```
//! use dirwalk::{walk, WalkOptions, WalkResult};
//! use std::fs;
//!
//! # fn demo() -> std::io::Result<()> {
//! let temp = tempfile::tempdir()?;
//! fs::write(temp.path().join("a.txt"), b"a")?;
//! fs::write(temp.path().join(".hidden"), b"h")?;
//! fs::create_dir(temp.path().join("sub"))?;
//!
//! let options = WalkOptions::new().match_directories(true).sort_entries(true);
//! let mut seen = Vec::new();
//! let report = walk(temp.path(), &options, |path| seen.push(path));
//!
//! assert_eq!(report.result(), WalkResult::Ok);
//! assert_eq!(seen, vec![temp.path().join("a.txt"), temp.path().join("sub")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

pub use logging;
pub use metadata;
pub use ::walk;

pub use logging::{DebugFlag, InfoFlag, VerbosityConfig};
#[cfg(feature = "tracing")]
pub use logging::{init_tracing, init_tracing_with_env_filter};
pub use metadata::{FileKind, FileMode, MetadataError, STAT_FAILED, file_stat};
pub use ::walk::{
    DEFAULT_MAX_PATH_LEN, FileSystem, OsFileSystem, WalkBuilder, WalkEntry, WalkError,
    WalkErrorKind, WalkOptions, WalkReport, WalkResult, Walker, walk, walk_with,
};
