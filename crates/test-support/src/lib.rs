//! Shared test utilities for the dirwalk workspace.
//!
//! [`TestDir`] owns a temporary directory that is removed on drop.
//! [`FileTree`] describes a set of files, directories and symlinks and
//! materialises them inside a [`TestDir`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Creates a new empty temporary directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Returns the root of the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Joins a relative path onto the root.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: impl AsRef<Path>, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Creates `relative` and any missing parents.
    pub fn mkdir(&self, relative: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = self.join(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Creates a symlink at `relative` pointing at `target` (used verbatim).
    #[cfg(unix)]
    pub fn symlink(
        &self,
        target: impl AsRef<Path>,
        relative: impl AsRef<Path>,
    ) -> io::Result<PathBuf> {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        std::os::unix::fs::symlink(target, &path)?;
        Ok(path)
    }

    /// Reads the file at `relative`.
    pub fn read_file(&self, relative: impl AsRef<Path>) -> io::Result<Vec<u8>> {
        fs::read(self.join(relative))
    }

    /// Reports whether `relative` exists, without following a final symlink.
    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        fs::symlink_metadata(self.join(relative)).is_ok()
    }
}

/// Restores a directory's permissions when dropped.
///
/// Tests that make a directory unreadable hold one of these so the
/// temporary tree can still be removed if an assertion fails.
#[cfg(unix)]
pub struct PermissionGuard {
    path: PathBuf,
    original: u32,
}

#[cfg(unix)]
impl PermissionGuard {
    /// Sets `mode` on `path`, remembering the previous mode.
    pub fn set(path: impl Into<PathBuf>, mode: u32) -> io::Result<Self> {
        use std::os::unix::fs::PermissionsExt;

        let path = path.into();
        let original = fs::metadata(&path)?.permissions().mode();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode))?;
        Ok(Self { path, original })
    }
}

#[cfg(unix)]
impl Drop for PermissionGuard {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;

        let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(self.original));
    }
}

/// Reports whether the test process can bypass permission checks.
///
/// Permission-denied scenarios cannot be reproduced as root.
#[cfg(unix)]
pub fn running_as_root() -> bool {
    let probe = match TestDir::new() {
        Ok(probe) => probe,
        Err(_) => return false,
    };
    let locked = match probe.mkdir("locked") {
        Ok(locked) => locked,
        Err(_) => return false,
    };
    let Ok(_guard) = PermissionGuard::set(&locked, 0o000) else {
        return false;
    };
    fs::read_dir(&locked).is_ok()
}

#[derive(Clone, Debug)]
enum Node {
    File(PathBuf, Vec<u8>),
    Dir(PathBuf),
    #[cfg(unix)]
    Symlink(PathBuf, PathBuf),
}

/// Declarative description of a directory tree.
#[derive(Clone, Debug, Default)]
pub struct FileTree {
    nodes: Vec<Node>,
}

impl FileTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text file.
    pub fn text_file(&mut self, relative: impl Into<PathBuf>, contents: &str) -> &mut Self {
        self.nodes
            .push(Node::File(relative.into(), contents.as_bytes().to_vec()));
        self
    }

    /// Adds an empty directory.
    pub fn dir(&mut self, relative: impl Into<PathBuf>) -> &mut Self {
        self.nodes.push(Node::Dir(relative.into()));
        self
    }

    /// Adds a symlink at `relative` pointing at `target`.
    #[cfg(unix)]
    pub fn symlink(
        &mut self,
        relative: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
    ) -> &mut Self {
        self.nodes.push(Node::Symlink(relative.into(), target.into()));
        self
    }

    /// Materialises the tree inside `dir`, in insertion order.
    pub fn create_in(&self, dir: &TestDir) -> io::Result<()> {
        for node in &self.nodes {
            match node {
                Node::File(path, contents) => {
                    dir.write_file(path, contents)?;
                }
                Node::Dir(path) => {
                    dir.mkdir(path)?;
                }
                #[cfg(unix)]
                Node::Symlink(path, target) => {
                    dir.symlink(target, path)?;
                }
            }
        }
        Ok(())
    }
}
