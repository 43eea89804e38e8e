use crate::entry::WalkEntry;
use crate::error::WalkError;
use crate::fs::{FileSystem, OsFileSystem};
use crate::options::WalkOptions;
use logging::{debug_log, info_log};
use std::collections::VecDeque;
use std::ffi::{OsStr, OsString};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::vec;

/// Depth-first iterator over the entries beneath a root directory.
///
/// Directories are yielded before their contents. Failures below the root
/// are yielded as `Err` items and traversal carries on with the next entry
/// or sibling subtree, so a single pass sees every reachable entry together
/// with every failure. Dropping the iterator stops the walk.
#[derive(Debug)]
pub struct Walker<F: FileSystem = OsFileSystem> {
    fs: F,
    root: PathBuf,
    options: WalkOptions,
    stack: Vec<DirectoryState>,
    pending: VecDeque<WalkError>,
}

impl<F: FileSystem> Walker<F> {
    pub(crate) fn new(fs: F, root: PathBuf, options: WalkOptions) -> Result<Self, WalkError> {
        // One byte for the separator, one for at least one character of a
        // child name.
        let limit = options.max_path_len.saturating_sub(1);
        if root.as_os_str().len() >= limit {
            debug_log!(
                Walk,
                1,
                "root path is {} bytes, limit is {}",
                root.as_os_str().len(),
                options.max_path_len
            );
            return Err(WalkError::name_too_long(root, options.max_path_len));
        }

        debug_log!(Walk, 1, "walking {:?}", root);

        let (mut state, failure) = DirectoryState::open(
            &fs,
            root.clone(),
            PathBuf::new(),
            0,
            options.sort_entries,
        )?;

        let mut pending: VecDeque<WalkError> = failure.into_iter().collect();
        if options.follow_symlinks {
            match fs.canonicalize(&root) {
                Ok(canonical) => state.canonical = Some(canonical),
                Err(error) => pending.push_back(WalkError::cannot_stat(root.clone(), error)),
            }
        }

        Ok(Self {
            fs,
            root,
            options,
            stack: vec![state],
            pending,
        })
    }

    /// Returns the root this walker was built for.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the options in effect.
    #[must_use]
    pub const fn options(&self) -> &WalkOptions {
        &self.options
    }

    fn is_hidden(name: &OsStr) -> bool {
        name.as_encoded_bytes().first() == Some(&b'.')
    }

    /// Applies the filtering and recursion policy to one listed name.
    ///
    /// Returns `None` when the entry is skipped.
    fn visit(
        &mut self,
        name: &OsStr,
        path: PathBuf,
        relative_path: PathBuf,
        depth: usize,
    ) -> Option<Result<WalkEntry, WalkError>> {
        if name == "." || name == ".." {
            return None;
        }

        if !self.options.include_dotfiles && Self::is_hidden(name) {
            info_log!(Skip, 2, "skipping hidden entry {:?}", path);
            return None;
        }

        debug_log!(Walk, 4, "processing entry: {:?}", relative_path);

        if path.as_os_str().len() >= self.options.max_path_len {
            return Some(Err(WalkError::name_too_long(
                path,
                self.options.max_path_len,
            )));
        }

        let mode = match self.fs.symlink_mode(&path) {
            Ok(mode) => mode,
            Err(error) => {
                debug_log!(Stat, 1, "lstat failed for {:?}: {}", path, error);
                return Some(Err(WalkError::cannot_stat(path, error)));
            }
        };

        let mut target_mode = None;
        if mode.is_symlink() {
            if !self.options.follow_symlinks {
                debug_log!(Symlink, 2, "not following symlink {:?}", path);
                return None;
            }
            match self.fs.follow_mode(&path) {
                Ok(target) => {
                    debug_log!(Symlink, 2, "following symlink {:?}", path);
                    target_mode = Some(target);
                }
                // Dangling: reported as the link itself.
                Err(error) => {
                    debug_log!(Symlink, 1, "dangling symlink {:?}: {}", path, error);
                }
            }
        }

        let is_dir = target_mode.unwrap_or(mode).is_dir();
        if is_dir && self.options.recursive {
            self.descend(&path, &relative_path, depth);
        }
        if is_dir && !self.options.match_directories {
            return None;
        }

        info_log!(Walk, 1, "{}", path.display());
        Some(Ok(WalkEntry {
            path,
            relative_path,
            mode,
            target_mode,
            depth,
        }))
    }

    /// Reports whether `canonical` is the current directory or one of its
    /// ancestors. The stack only ever holds the chain from the root down to
    /// the directory being listed.
    fn is_ancestor(&self, canonical: &Path) -> bool {
        self.stack
            .iter()
            .any(|state| state.canonical.as_deref() == Some(canonical))
    }

    /// Pushes a frame for `path`. Failures are queued, never returned, so the
    /// parent's scan is unaffected.
    fn descend(&mut self, path: &Path, relative_path: &Path, depth: usize) {
        let mut canonical = None;
        if self.options.follow_symlinks {
            match self.fs.canonicalize(path) {
                Ok(resolved) => {
                    if self.is_ancestor(&resolved) {
                        debug_log!(Dup, 1, "not descending into ancestor directory: {:?}", path);
                        return;
                    }
                    canonical = Some(resolved);
                }
                Err(error) => {
                    self.pending
                        .push_back(WalkError::cannot_stat(path.to_path_buf(), error));
                    return;
                }
            }
        }

        match DirectoryState::open(
            &self.fs,
            path.to_path_buf(),
            relative_path.to_path_buf(),
            depth,
            self.options.sort_entries,
        ) {
            Ok((mut state, failure)) => {
                state.canonical = canonical;
                self.pending.extend(failure);
                self.stack.push(state);
            }
            Err(error) => {
                debug_log!(Walk, 1, "{}", error);
                self.pending.push_back(error);
            }
        }
    }
}

impl<F: FileSystem> Iterator for Walker<F> {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(error) = self.pending.pop_front() {
                return Some(Err(error));
            }

            let (name, path, relative_path, depth) = {
                let state = self.stack.last_mut()?;
                let Some(name) = state.next_name() else {
                    self.stack.pop();
                    continue;
                };
                let path = state.fs_path.join(&name);
                let relative_path = state.relative_prefix.join(&name);
                (name, path, relative_path, state.depth + 1)
            };

            if let Some(item) = self.visit(&name, path, relative_path, depth) {
                return Some(item);
            }
        }
    }
}

impl<F: FileSystem> FusedIterator for Walker<F> {}

/// One open level of the walk.
///
/// Names are read eagerly when the frame is created, so the directory handle
/// is closed before any entry is visited and at most one handle is open at a
/// time regardless of depth.
#[derive(Debug)]
struct DirectoryState {
    fs_path: PathBuf,
    relative_prefix: PathBuf,
    /// Resolved path, recorded only when following symlinks.
    canonical: Option<PathBuf>,
    entries: vec::IntoIter<OsString>,
    depth: usize,
}

impl DirectoryState {
    /// Lists `fs_path`. A failure to open is an error; a failure part way
    /// through the listing is returned alongside the names read so far.
    fn open<F: FileSystem>(
        fs: &F,
        fs_path: PathBuf,
        relative_prefix: PathBuf,
        depth: usize,
        sort: bool,
    ) -> Result<(Self, Option<WalkError>), WalkError> {
        debug_log!(Walk, 2, "entering directory: {:?}", fs_path);

        let listing = fs
            .read_dir(&fs_path)
            .map_err(|error| WalkError::cannot_open(fs_path.clone(), error))?;

        let mut entries = Vec::new();
        let mut failure = None;
        for entry in listing {
            match entry {
                Ok(name) => entries.push(name),
                Err(error) => {
                    failure = Some(WalkError::io(fs_path.clone(), error));
                    break;
                }
            }
        }
        if sort {
            entries.sort();
        }

        debug_log!(Walk, 3, "found {} entries in {:?}", entries.len(), fs_path);

        Ok((
            Self {
                fs_path,
                relative_prefix,
                canonical: None,
                entries: entries.into_iter(),
                depth,
            },
            failure,
        ))
    }

    fn next_name(&mut self) -> Option<OsString> {
        self.entries.next()
    }
}
