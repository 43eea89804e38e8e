use std::io;
use std::path::{Path, PathBuf};

/// Error returned when metadata for a path cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// `lstat` failed; the final path component was not dereferenced.
    #[error("failed to lstat '{}': {source}", .path.display())]
    SymlinkStat {
        /// Path that could not be inspected.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// `stat` failed while following symlinks.
    #[error("failed to stat '{}': {source}", .path.display())]
    Stat {
        /// Path that could not be inspected.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
}

impl MetadataError {
    pub(crate) fn symlink_stat(path: &Path, source: io::Error) -> Self {
        Self::SymlinkStat {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn stat(path: &Path, source: io::Error) -> Self {
        Self::Stat {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the path that could not be inspected.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::SymlinkStat { path, .. } | Self::Stat { path, .. } => path,
        }
    }

    /// Consumes the error and returns the underlying [`io::Error`].
    #[must_use]
    pub fn into_io(self) -> io::Error {
        match self {
            Self::SymlinkStat { source, .. } | Self::Stat { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_names_the_syscall_and_path() {
        let error = MetadataError::symlink_stat(
            Path::new("a/b"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(error.to_string(), "failed to lstat 'a/b': gone");

        let error = MetadataError::stat(Path::new("c"), io::Error::other("boom"));
        assert_eq!(error.to_string(), "failed to stat 'c': boom");
    }

    #[test]
    fn source_and_into_io_expose_os_error() {
        let error = MetadataError::stat(
            Path::new("x"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(error.path(), Path::new("x"));
        assert!(error.source().is_some());
        assert_eq!(error.into_io().kind(), io::ErrorKind::PermissionDenied);
    }
}
