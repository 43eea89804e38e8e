use crate::result::WalkResult;
use std::io;
use std::path::{Path, PathBuf};

/// Error recorded while walking a tree.
///
/// Apart from failures on the root, errors never stop a walk: the iterator
/// yields them in place and continues with the next entry or sibling subtree.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn new(kind: WalkErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn name_too_long(path: PathBuf, max: usize) -> Self {
        let len = path.as_os_str().len();
        Self::new(WalkErrorKind::NameTooLong { path, len, max })
    }

    pub(crate) fn cannot_open(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::CannotOpen { path, source })
    }

    pub(crate) fn cannot_stat(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::CannotStat { path, source })
    }

    pub(crate) fn io(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Io { path, source })
    }

    /// Returns the specific failure.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Consumes the error, returning its kind.
    #[must_use]
    pub fn into_kind(self) -> WalkErrorKind {
        self.kind
    }

    /// Returns the filesystem path associated with the error.
    ///
    /// ```
    /// use walk::WalkBuilder;
    ///
    /// let error = WalkBuilder::new("./definitely_missing_root")
    ///     .build()
    ///     .err()
    ///     .expect("missing root yields error");
    /// assert!(error.path().ends_with("definitely_missing_root"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }

    /// Returns the outcome code this error maps to.
    #[must_use]
    pub fn code(&self) -> WalkResult {
        self.kind.code()
    }
}

/// Classification of traversal failures.
#[derive(Debug, thiserror::Error)]
pub enum WalkErrorKind {
    /// A path reached the configured maximum length. The entry is skipped;
    /// paths are never truncated.
    #[error("path '{}' is {len} bytes, limit is {max}", .path.display())]
    NameTooLong {
        /// The over-long path.
        path: PathBuf,
        /// Its length in bytes.
        len: usize,
        /// The configured limit.
        max: usize,
    },
    /// A directory could not be opened; its subtree is skipped.
    #[error("failed to open directory '{}': {source}", .path.display())]
    CannotOpen {
        /// Directory that could not be opened.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// An entry's metadata could not be read; the entry is skipped.
    #[error("failed to inspect metadata for '{}': {source}", .path.display())]
    CannotStat {
        /// Entry whose metadata could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// Reading a directory listing failed before it was exhausted. Entries
    /// read before the failure are still visited.
    #[error("failed to read entry in '{}': {source}", .path.display())]
    Io {
        /// Directory whose listing failed.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
}

impl WalkErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NameTooLong { path, .. }
            | Self::CannotOpen { path, .. }
            | Self::CannotStat { path, .. }
            | Self::Io { path, .. } => path,
        }
    }

    /// Returns the outcome code this failure maps to.
    #[must_use]
    pub const fn code(&self) -> WalkResult {
        match self {
            Self::NameTooLong { .. } => WalkResult::NameTooLong,
            Self::CannotOpen { .. } => WalkResult::CannotOpen,
            Self::CannotStat { .. } => WalkResult::CannotStat,
            Self::Io { .. } => WalkResult::IoError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn io_error(message: &'static str) -> io::Error {
        io::Error::other(message)
    }

    #[test]
    fn walk_error_path_matches_variant_path() {
        let long = WalkError::name_too_long(PathBuf::from("long"), 3);
        assert_eq!(Path::new("long"), long.path());

        let open = WalkError::cannot_open(PathBuf::from("dir"), io_error("dir"));
        assert_eq!(Path::new("dir"), open.path());

        let stat = WalkError::cannot_stat(PathBuf::from("meta"), io_error("meta"));
        assert_eq!(Path::new("meta"), stat.path());

        let read = WalkError::io(PathBuf::from("entry"), io_error("entry"));
        assert_eq!(Path::new("entry"), read.path());
    }

    #[test]
    fn walk_error_display_is_specific_per_variant() {
        assert_eq!(
            "path 'abcd' is 4 bytes, limit is 3",
            WalkError::name_too_long(PathBuf::from("abcd"), 3).to_string()
        );
        assert_eq!(
            "failed to open directory 'dir': boom",
            WalkError::cannot_open(PathBuf::from("dir"), io_error("boom")).to_string()
        );
        assert_eq!(
            "failed to inspect metadata for 'meta': boom",
            WalkError::cannot_stat(PathBuf::from("meta"), io_error("boom")).to_string()
        );
        assert_eq!(
            "failed to read entry in 'entry': boom",
            WalkError::io(PathBuf::from("entry"), io_error("boom")).to_string()
        );
    }

    #[test]
    fn walk_error_maps_to_result_codes() {
        assert_eq!(
            WalkError::name_too_long(PathBuf::from("x"), 1).code(),
            WalkResult::NameTooLong
        );
        assert_eq!(
            WalkError::cannot_open(PathBuf::new(), io_error("x")).code(),
            WalkResult::CannotOpen
        );
        assert_eq!(
            WalkError::cannot_stat(PathBuf::new(), io_error("x")).code(),
            WalkResult::CannotStat
        );
        assert_eq!(
            WalkError::io(PathBuf::new(), io_error("x")).code(),
            WalkResult::IoError
        );
    }

    #[test]
    fn walk_error_source_refers_to_underlying_io_error() {
        let error = WalkError::cannot_open(PathBuf::from("dir"), io_error("source"));
        let source_ref = error
            .source()
            .and_then(|err| err.downcast_ref::<io::Error>())
            .expect("walk error should expose the underlying io::Error");
        assert_eq!(source_ref.to_string(), "source");

        let long = WalkError::name_too_long(PathBuf::from("x"), 1);
        assert!(long.source().is_none());
    }

    #[test]
    fn walk_error_kind_accessor_reveals_inner_variant() {
        let error = WalkError::cannot_stat(PathBuf::from("meta"), io_error("meta"));
        match error.into_kind() {
            WalkErrorKind::CannotStat { path, .. } => assert_eq!(Path::new("meta"), path),
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}
