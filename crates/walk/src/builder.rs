use crate::error::WalkError;
use crate::fs::{FileSystem, OsFileSystem};
use crate::options::WalkOptions;
use crate::walker::Walker;
use std::path::PathBuf;

/// Configures a walk rooted at a specific directory.
///
/// The setters mirror the fields of [`WalkOptions`]; [`options`](Self::options)
/// replaces them all at once.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    options: WalkOptions,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            options: WalkOptions::default(),
        }
    }

    /// Replaces every option.
    #[must_use]
    pub const fn options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    /// Descend into subdirectories.
    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.options.recursive = recursive;
        self
    }

    /// Treat symlinked directories as directories.
    ///
    /// When enabled, a symlink that resolves to the directory being listed or
    /// to one of its ancestors is reported but not descended, so cycles
    /// terminate. Other aliases of a directory are walked in full.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.options.follow_symlinks = follow;
        self
    }

    /// Report entries whose name begins with `.`.
    #[must_use]
    pub const fn include_dotfiles(mut self, include: bool) -> Self {
        self.options.include_dotfiles = include;
        self
    }

    /// Report directories as well as non-directory entries.
    #[must_use]
    pub const fn match_directories(mut self, matches: bool) -> Self {
        self.options.match_directories = matches;
        self
    }

    /// Maximum path length in bytes.
    #[must_use]
    pub const fn max_path_len(mut self, max: usize) -> Self {
        self.options.max_path_len = max;
        self
    }

    /// Visit entries in name order.
    #[must_use]
    pub const fn sort_entries(mut self, sort: bool) -> Self {
        self.options.sort_entries = sort;
        self
    }

    /// Builds a [`Walker`] over the host filesystem.
    ///
    /// Fails with [`WalkResult::NameTooLong`](crate::WalkResult::NameTooLong)
    /// before touching the filesystem when the root is too long, and with
    /// [`WalkResult::CannotOpen`](crate::WalkResult::CannotOpen) when the root
    /// cannot be opened as a directory.
    pub fn build(self) -> Result<Walker, WalkError> {
        self.build_with(OsFileSystem)
    }

    /// Builds a [`Walker`] over a custom [`FileSystem`].
    pub fn build_with<F: FileSystem>(self, fs: F) -> Result<Walker<F>, WalkError> {
        Walker::new(fs, self.root, self.options)
    }
}
