//! The filesystem primitives the walker consumes.
//!
//! [`Walker`](crate::Walker) never touches `std::fs` directly; it goes
//! through a [`FileSystem`] so hosts can substitute an in-memory or
//! instrumented implementation.

use metadata::{FileMode, MetadataError};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory listing and metadata primitives.
pub trait FileSystem {
    /// Iterator over the names in a directory listing.
    type ReadDir: Iterator<Item = io::Result<OsString>>;

    /// Opens `path` for listing. The returned iterator owns the directory
    /// handle; dropping it closes the handle.
    fn read_dir(&self, path: &Path) -> io::Result<Self::ReadDir>;

    /// Mode of `path` without following a final symlink (`lstat`).
    fn symlink_mode(&self, path: &Path) -> io::Result<FileMode>;

    /// Mode of `path` after following symlinks (`stat`).
    fn follow_mode(&self, path: &Path) -> io::Result<FileMode>;

    /// Resolves `path` to a canonical absolute path.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    type ReadDir = F::ReadDir;

    fn read_dir(&self, path: &Path) -> io::Result<Self::ReadDir> {
        (**self).read_dir(path)
    }

    fn symlink_mode(&self, path: &Path) -> io::Result<FileMode> {
        (**self).symlink_mode(path)
    }

    fn follow_mode(&self, path: &Path) -> io::Result<FileMode> {
        (**self).follow_mode(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).canonicalize(path)
    }
}

/// The host operating system's filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    type ReadDir = OsReadDir;

    fn read_dir(&self, path: &Path) -> io::Result<Self::ReadDir> {
        fs::read_dir(path).map(|inner| OsReadDir { inner })
    }

    fn symlink_mode(&self, path: &Path) -> io::Result<FileMode> {
        metadata::symlink_mode(path).map_err(MetadataError::into_io)
    }

    fn follow_mode(&self, path: &Path) -> io::Result<FileMode> {
        metadata::follow_mode(path).map_err(MetadataError::into_io)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }
}

/// Directory listing produced by [`OsFileSystem`].
#[derive(Debug)]
pub struct OsReadDir {
    inner: fs::ReadDir,
}

impl Iterator for OsReadDir {
    type Item = io::Result<OsString>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|entry| entry.map(|entry| entry.file_name()))
    }
}
