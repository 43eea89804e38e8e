#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `metadata` answers one question for the directory walker: what kind of
//! filesystem object lives at a path, and what are its raw mode bits. Lookups
//! come in a link-aware flavour ([`symlink_mode`], `lstat` semantics) and a
//! following flavour ([`follow_mode`], `stat` semantics).
//!
//! [`file_stat`] is the standalone accessor for hosts that want the raw
//! integer: it returns the `lstat` mode bits or [`STAT_FAILED`] (`-1`).
//!
//! # Errors
//!
//! Lookups return [`MetadataError`], which names the syscall flavour and the
//! path and exposes the underlying [`std::io::Error`] as its source.
//!
//! # Examples
//!
//! ```
//! use metadata::{symlink_mode, FileKind};
//!
//! let temp = tempfile::tempdir()?;
//! let mode = symlink_mode(temp.path())?;
//! assert_eq!(mode.kind(), FileKind::Directory);
//! assert!(mode.permissions() & 0o700 != 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod mode;

pub use error::MetadataError;
pub use mode::{
    FileKind, FileMode, S_IFDIR, S_IFLNK, S_IFMT, S_IFREG, STAT_FAILED, file_stat, follow_mode,
    symlink_mode,
};
