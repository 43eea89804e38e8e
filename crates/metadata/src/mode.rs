//! Raw `st_mode` bits and the lookups that produce them.
//!
//! On Linux the lookups go through `statx` with `AT_STATX_DONT_SYNC` and only
//! request the mode field, falling back to plain `lstat`/`stat` when the
//! kernel lacks `statx`. Other Unix platforms use `lstat`/`stat` directly.
//! Non-Unix targets synthesize the type bits from [`std::fs::Metadata`].

use crate::error::MetadataError;
use std::fmt;
use std::io;
use std::path::Path;

/// Bit mask selecting the file type from a mode.
pub const S_IFMT: u32 = 0o170_000;
/// Directory type bits.
pub const S_IFDIR: u32 = 0o040_000;
/// Regular file type bits.
pub const S_IFREG: u32 = 0o100_000;
/// Symbolic link type bits.
pub const S_IFLNK: u32 = 0o120_000;

/// Sentinel returned by [`file_stat`] when a path cannot be inspected.
pub const STAT_FAILED: i32 = -1;

/// Coarse classification of a [`FileMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// A directory.
    Directory,
    /// A regular file.
    File,
    /// A symbolic link (only reported by link-aware lookups).
    Symlink,
    /// Sockets, FIFOs, device nodes.
    Other,
}

/// File mode bits as reported by `stat(2)`: type bits plus permissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    /// Wraps raw mode bits.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw mode bits.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the permission bits (`0o7777` mask, including setuid/setgid/sticky).
    #[must_use]
    pub const fn permissions(self) -> u32 {
        self.0 & 0o7777
    }

    /// Classifies the type bits.
    #[must_use]
    pub const fn kind(self) -> FileKind {
        match self.0 & S_IFMT {
            S_IFDIR => FileKind::Directory,
            S_IFREG => FileKind::File,
            S_IFLNK => FileKind::Symlink,
            _ => FileKind::Other,
        }
    }

    /// Reports whether the mode describes a directory.
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self.kind(), FileKind::Directory)
    }

    /// Reports whether the mode describes a regular file.
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self.kind(), FileKind::File)
    }

    /// Reports whether the mode describes a symbolic link.
    #[must_use]
    pub const fn is_symlink(self) -> bool {
        matches!(self.kind(), FileKind::Symlink)
    }
}

impl fmt::Octal for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.0, f)
    }
}

/// Reads the mode of `path` without following a final symlink (`lstat`).
pub fn symlink_mode(path: &Path) -> Result<FileMode, MetadataError> {
    fetch_mode(path, false).map_err(|error| MetadataError::symlink_stat(path, error))
}

/// Reads the mode of `path`, following symlinks (`stat`).
pub fn follow_mode(path: &Path) -> Result<FileMode, MetadataError> {
    fetch_mode(path, true).map_err(|error| MetadataError::stat(path, error))
}

/// Returns the raw `lstat` mode bits of `path`, or [`STAT_FAILED`] when the
/// path cannot be inspected (missing, permission denied, ...).
///
/// ```
/// use metadata::{file_stat, STAT_FAILED};
///
/// assert_eq!(file_stat(std::path::Path::new("/definitely/not/here")), STAT_FAILED);
/// ```
#[must_use]
pub fn file_stat(path: &Path) -> i32 {
    symlink_mode(path).map_or(STAT_FAILED, |mode| mode.raw() as i32)
}

#[cfg(unix)]
fn fetch_mode(path: &Path, follow: bool) -> io::Result<FileMode> {
    #[cfg(target_os = "linux")]
    {
        match statx_mode(path, follow) {
            Ok(mode) => return Ok(mode),
            Err(e) if e.raw_os_error() == Some(libc::ENOSYS) => {}
            Err(e) => return Err(e),
        }
    }

    let stat = if follow {
        rustix::fs::stat(path)
    } else {
        rustix::fs::lstat(path)
    }
    .map_err(io::Error::from)?;

    Ok(FileMode::from_raw(stat.st_mode as u32))
}

#[cfg(all(unix, target_os = "linux"))]
fn statx_mode(path: &Path, follow: bool) -> io::Result<FileMode> {
    use rustix::fs::{AtFlags, CWD, StatxFlags, statx};

    let flags = if follow {
        AtFlags::STATX_DONT_SYNC
    } else {
        AtFlags::SYMLINK_NOFOLLOW.union(AtFlags::STATX_DONT_SYNC)
    };

    let stat = statx(CWD, path, flags, StatxFlags::TYPE.union(StatxFlags::MODE))
        .map_err(io::Error::from)?;

    Ok(FileMode::from_raw(u32::from(stat.stx_mode)))
}

#[cfg(not(unix))]
fn fetch_mode(path: &Path, follow: bool) -> io::Result<FileMode> {
    let metadata = if follow {
        std::fs::metadata(path)?
    } else {
        std::fs::symlink_metadata(path)?
    };
    let file_type = metadata.file_type();
    let type_bits = if file_type.is_symlink() {
        S_IFLNK
    } else if file_type.is_dir() {
        S_IFDIR
    } else if file_type.is_file() {
        S_IFREG
    } else {
        0
    };
    let perm_bits = if metadata.permissions().readonly() {
        0o444
    } else {
        0o644
    };
    Ok(FileMode::from_raw(type_bits | perm_bits))
}
