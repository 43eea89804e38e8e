use crate::builder::WalkBuilder;
use crate::error::WalkError;
use crate::fs::{FileSystem, OsFileSystem};
use crate::options::WalkOptions;
use crate::result::WalkResult;
use std::path::PathBuf;

/// Outcome of a callback-driven walk.
#[derive(Debug, Default)]
pub struct WalkReport {
    matched: usize,
    errors: Vec<WalkError>,
    root_failed: bool,
}

impl WalkReport {
    fn root_failure(error: WalkError) -> Self {
        Self {
            matched: 0,
            errors: vec![error],
            root_failed: true,
        }
    }

    /// Number of entries handed to the callback.
    #[must_use]
    pub const fn matched(&self) -> usize {
        self.matched
    }

    /// Every failure recorded, in the order it was encountered.
    #[must_use]
    pub fn errors(&self) -> &[WalkError] {
        &self.errors
    }

    /// Consumes the report, returning the recorded failures.
    #[must_use]
    pub fn into_errors(self) -> Vec<WalkError> {
        self.errors
    }

    /// Reports whether the root itself could not be walked.
    #[must_use]
    pub const fn root_failed(&self) -> bool {
        self.root_failed
    }

    /// Summarizes the walk as a single outcome.
    ///
    /// A failure on the root wins. Otherwise the most severe recorded
    /// failure decides, in the order `CannotStat`, `IoError`, `CannotOpen`,
    /// `NameTooLong`.
    #[must_use]
    pub fn result(&self) -> WalkResult {
        if self.root_failed {
            if let Some(error) = self.errors.first() {
                return error.code();
            }
        }
        self.errors
            .iter()
            .map(WalkError::code)
            .max_by_key(|code| severity(*code))
            .unwrap_or(WalkResult::Ok)
    }

    /// Reports whether the walk finished without recording any failure.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

const fn severity(result: WalkResult) -> u8 {
    match result {
        WalkResult::Ok => 0,
        WalkResult::NameTooLong => 1,
        WalkResult::CannotOpen => 2,
        WalkResult::IoError => 3,
        WalkResult::CannotStat => 4,
    }
}

/// Walks `root` on the host filesystem, handing each matched path to
/// `callback`.
///
/// The walk always runs to completion; use [`WalkBuilder`] and the
/// [`Walker`](crate::Walker) iterator to stop early.
///
/// ```
/// use walk::{walk, WalkOptions, WalkResult};
///
/// # fn demo() -> std::io::Result<()> {
/// let temp = tempfile::tempdir()?;
/// std::fs::create_dir(temp.path().join("sub"))?;
/// std::fs::write(temp.path().join("sub/leaf.txt"), b"x")?;
///
/// let mut seen = Vec::new();
/// let report = walk(temp.path(), &WalkOptions::new().recursive(true), |path| {
///     seen.push(path)
/// });
/// assert_eq!(report.result(), WalkResult::Ok);
/// assert_eq!(seen, vec![temp.path().join("sub/leaf.txt")]);
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
pub fn walk<P, C>(root: P, options: &WalkOptions, callback: C) -> WalkReport
where
    P: Into<PathBuf>,
    C: FnMut(PathBuf),
{
    walk_with(OsFileSystem, root, options, callback)
}

/// Like [`walk`], over a custom [`FileSystem`].
pub fn walk_with<F, P, C>(fs: F, root: P, options: &WalkOptions, mut callback: C) -> WalkReport
where
    F: FileSystem,
    P: Into<PathBuf>,
    C: FnMut(PathBuf),
{
    let walker = match WalkBuilder::new(root).options(*options).build_with(fs) {
        Ok(walker) => walker,
        Err(error) => return WalkReport::root_failure(error),
    };

    let mut report = WalkReport::default();
    for item in walker {
        match item {
            Ok(entry) => {
                report.matched += 1;
                callback(entry.into_path());
            }
            Err(error) => report.errors.push(error),
        }
    }
    report
}
