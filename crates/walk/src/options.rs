/// Default upper bound on path length in bytes, matching Linux `PATH_MAX`.
pub const DEFAULT_MAX_PATH_LEN: usize = 4096;

/// Traversal options.
///
/// Each flag is independent. The defaults produce a shallow walk that reports
/// only non-hidden, non-directory entries of the root and never follows
/// symlinks.
///
/// ```
/// use walk::WalkOptions;
///
/// let options = WalkOptions::new().recursive(true).include_dotfiles(true);
/// assert!(options.recursive);
/// assert!(!options.follow_symlinks);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WalkOptions {
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Treat symlinks to directories as directories rather than skipping them.
    ///
    /// When unset, every symlink is skipped outright.
    pub follow_symlinks: bool,
    /// Report entries whose name starts with `.`; `.` and `..` are always
    /// skipped.
    pub include_dotfiles: bool,
    /// Report directories themselves, not only non-directory entries.
    pub match_directories: bool,
    /// Maximum accepted path length in bytes.
    ///
    /// The root must be shorter than `max_path_len - 1`; child paths must be
    /// shorter than `max_path_len`.
    pub max_path_len: usize,
    /// Visit each directory's entries in byte-wise name order instead of the
    /// order the operating system lists them in.
    pub sort_entries: bool,
}

impl WalkOptions {
    /// Returns the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recursive: false,
            follow_symlinks: false,
            include_dotfiles: false,
            match_directories: false,
            max_path_len: DEFAULT_MAX_PATH_LEN,
            sort_entries: false,
        }
    }

    /// Sets the `recursive` field.
    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets the `follow_symlinks` field.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Sets the `include_dotfiles` field.
    #[must_use]
    pub const fn include_dotfiles(mut self, include: bool) -> Self {
        self.include_dotfiles = include;
        self
    }

    /// Sets the `match_directories` field.
    #[must_use]
    pub const fn match_directories(mut self, matches: bool) -> Self {
        self.match_directories = matches;
        self
    }

    /// Sets the `max_path_len` field.
    #[must_use]
    pub const fn max_path_len(mut self, max: usize) -> Self {
        self.max_path_len = max;
        self
    }

    /// Sets the `sort_entries` field.
    #[must_use]
    pub const fn sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::new()
    }
}
