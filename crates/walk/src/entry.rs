use metadata::FileMode;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// An entry reported by the walker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkEntry {
    pub(crate) path: PathBuf,
    pub(crate) relative_path: PathBuf,
    pub(crate) mode: FileMode,
    pub(crate) target_mode: Option<FileMode>,
    pub(crate) depth: usize,
}

impl WalkEntry {
    /// Returns the entry's path: the walk root joined with the relative path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consumes the entry, returning its owned path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }

    /// Returns the path relative to the walk root.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Returns the entry's own name.
    ///
    /// ```
    /// use walk::WalkBuilder;
    /// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
    /// let temp = tempfile::tempdir()?;
    /// std::fs::write(temp.path().join("notes.txt"), b"x")?;
    /// let mut walker = WalkBuilder::new(temp.path()).build()?;
    /// let entry = walker.next().unwrap()?;
    /// assert_eq!(entry.file_name(), "notes.txt");
    /// assert_eq!(entry.depth(), 1);
    /// # Ok(())
    /// # }
    /// # demo().unwrap();
    /// ```
    #[must_use]
    pub fn file_name(&self) -> &OsStr {
        self.relative_path
            .file_name()
            .unwrap_or_else(|| self.relative_path.as_os_str())
    }

    /// Returns the link-aware (`lstat`) mode of the entry itself.
    #[must_use]
    pub const fn mode(&self) -> FileMode {
        self.mode
    }

    /// Returns the mode of the symlink target when the entry is a symlink
    /// that was followed.
    #[must_use]
    pub const fn target_mode(&self) -> Option<FileMode> {
        self.target_mode
    }

    /// Reports whether the entry is, or resolves to, a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        match self.target_mode {
            Some(target) => target.is_dir(),
            None => self.mode.is_dir(),
        }
    }

    /// Reports whether the entry itself is a symbolic link.
    #[must_use]
    pub const fn is_symlink(&self) -> bool {
        self.mode.is_symlink()
    }

    /// Depth below the walk root; the root's children are at depth 1.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}
