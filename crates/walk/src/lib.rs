#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` enumerates the entries beneath a root directory, depth first,
//! reporting each match as an owned path. Four independent options select
//! what is reported: recursion into subdirectories, following symlinked
//! directories, inclusion of dotfiles, and reporting of directories
//! themselves.
//!
//! # Design
//!
//! - [`WalkOptions`] holds the named traversal options; [`WalkBuilder`]
//!   pairs them with a root and builds a [`Walker`].
//! - [`Walker`] implements [`Iterator`] over `Result<WalkEntry, WalkError>`.
//!   Each directory level is one frame on an explicit stack, so depth is
//!   bounded by the heap rather than the call stack. Dropping the iterator
//!   cancels the walk.
//! - [`walk`] is the callback front-end: it drains a [`Walker`], hands every
//!   matched path to the callback and collects failures in a [`WalkReport`]
//!   whose [`WalkReport::result`] is the [`WalkResult`] for the whole tree.
//! - All filesystem access goes through the [`FileSystem`] trait;
//!   [`OsFileSystem`] is the host implementation.
//!
//! # Invariants
//!
//! - `.` and `..` are never reported.
//! - Symlinks are skipped outright unless `follow_symlinks` is set. When it
//!   is, a directory is never descended while it is already being listed
//!   further up the current chain, so symlink cycles terminate. A directory
//!   reachable through several aliases is walked under each of them.
//! - Paths are never truncated. A child path whose length reaches
//!   `max_path_len` is reported as [`WalkErrorKind::NameTooLong`] and skipped.
//! - At most one directory handle is open at a time: each listing is read in
//!   full and closed before its entries are visited.
//!
//! # Errors
//!
//! [`WalkBuilder::build`] fails when the root is too long or cannot be
//! opened as a directory. Every other failure is yielded in place by the
//! iterator and the walk continues:
//!
//! | Kind | Scope |
//! |------|-------|
//! | [`WalkErrorKind::NameTooLong`] | the over-long entry is skipped |
//! | [`WalkErrorKind::CannotStat`] | the entry is skipped |
//! | [`WalkErrorKind::CannotOpen`] | the subdirectory's contents are skipped |
//! | [`WalkErrorKind::Io`] | the rest of that directory's listing is lost |
//!
//! # Examples
//!
//! ```
//! use walk::WalkBuilder;
//! use std::collections::BTreeSet;
//! use std::fs;
//! use std::path::PathBuf;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path();
//! fs::create_dir_all(root.join("nested"))?;
//! fs::write(root.join("file.txt"), b"data")?;
//! fs::write(root.join(".hidden"), b"data")?;
//! fs::write(root.join("nested/more.txt"), b"data")?;
//!
//! let walker = WalkBuilder::new(root)
//!     .recursive(true)
//!     .match_directories(true)
//!     .build()?;
//! let mut seen = BTreeSet::new();
//! for entry in walker {
//!     seen.insert(entry?.relative_path().to_path_buf());
//! }
//!
//! let expected: BTreeSet<PathBuf> = ["file.txt", "nested", "nested/more.txt"]
//!     .into_iter()
//!     .map(PathBuf::from)
//!     .collect();
//! assert_eq!(seen, expected);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
mod fs;
mod options;
mod report;
mod result;
mod walker;


pub use builder::WalkBuilder;
pub use entry::WalkEntry;
pub use error::{WalkError, WalkErrorKind};
pub use fs::{FileSystem, OsFileSystem, OsReadDir};
pub use options::{DEFAULT_MAX_PATH_LEN, WalkOptions};
pub use report::{WalkReport, walk, walk_with};
pub use result::WalkResult;
pub use walker::Walker;
