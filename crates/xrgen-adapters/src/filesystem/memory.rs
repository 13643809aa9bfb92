//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use xrgen_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::EntryKind,
    error::{XrgenError, XrgenResult},
};

/// In-memory filesystem for testing.
///
/// Stores file text by path plus a set of directories. A third set holds
/// "special" entries that classify as neither file nor directory, so tests
/// can exercise the corrupted-template path without conjuring a socket on
/// disk.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    specials: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    // ── test setup helpers ──

    /// Insert a directory and all its ancestors.
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        insert_with_ancestors(&mut inner.directories, &path);
    }

    /// Insert a file, creating parent directories implicitly.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_with_ancestors(&mut inner.directories, parent);
        }
        inner.files.insert(path, content.into());
    }

    /// Insert an entry that classifies as neither file nor directory.
    pub fn add_special(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_with_ancestors(&mut inner.directories, parent);
        }
        inner.specials.insert(path);
    }

    // ── test inspection helpers ──

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut paths: Vec<PathBuf> = inner.files.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
        inner.specials.clear();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Register every ancestor of `path` as a directory.
fn insert_with_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn poisoned() -> XrgenError {
    XrgenError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path)
            || inner.directories.contains(path)
            || inner.specials.contains(path)
    }

    fn classify(&self, path: &Path) -> EntryKind {
        let inner = self.inner.read().unwrap();
        if inner.files.contains_key(path) {
            EntryKind::FileLike
        } else if inner.directories.contains(path) {
            EntryKind::DirectoryLike
        } else {
            // Specials and missing paths both land here.
            EntryKind::Neither
        }
    }

    fn copy_tree(&self, src: &Path, dst: &Path) -> XrgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        if inner.files.contains_key(dst) || inner.directories.contains(dst) {
            return Err(ApplicationError::CopyFailed {
                path: dst.to_path_buf(),
                reason: "destination already exists".into(),
            }
            .into());
        }

        // Degraded path: a single-file source is copied as-is.
        if let Some(content) = inner.files.get(src).cloned() {
            inner.files.insert(dst.to_path_buf(), content);
            return Ok(());
        }

        if !inner.directories.contains(src) {
            return Err(ApplicationError::CopyFailed {
                path: src.to_path_buf(),
                reason: "source does not exist".into(),
            }
            .into());
        }

        let remap = |paths: Vec<PathBuf>| -> XrgenResult<Vec<PathBuf>> {
            paths
                .into_iter()
                .map(|p| match p.strip_prefix(src) {
                    Ok(rel) => Ok(dst.join(rel)),
                    Err(e) => Err(XrgenError::Internal {
                        message: format!("copy escaped the source root: {e}"),
                    }),
                })
                .collect()
        };

        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|p| p.starts_with(src))
            .cloned()
            .collect();
        for dir in remap(dirs)? {
            inner.directories.insert(dir);
        }

        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter(|(p, _)| p.starts_with(src))
            .map(|(p, c)| (p.clone(), c.clone()))
            .collect();
        for (path, content) in files {
            let rel = path.strip_prefix(src).map_err(|e| XrgenError::Internal {
                message: format!("copy escaped the source root: {e}"),
            })?;
            inner.files.insert(dst.join(rel), content);
        }

        // Specials travel with the tree so a corrupted template stays
        // corrupted in the clone, exactly like on a real disk.
        let specials: Vec<PathBuf> = inner
            .specials
            .iter()
            .filter(|p| p.starts_with(src))
            .cloned()
            .collect();
        for special in remap(specials)? {
            inner.specials.insert(special);
        }

        Ok(())
    }

    fn list_dir(&self, path: &Path) -> XrgenResult<Vec<String>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::Io {
                path: path.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into());
        }

        let mut names: Vec<String> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .chain(inner.specials.iter())
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn remove_file(&self, path: &Path) -> XrgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if inner.files.remove(path).is_some() || inner.specials.remove(path) {
            Ok(())
        } else {
            Err(ApplicationError::Io {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into())
        }
    }

    fn remove_dir_all(&self, path: &Path) -> XrgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if !inner.directories.contains(path) {
            return Err(ApplicationError::Io {
                path: path.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into());
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        inner.specials.retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn walk_files(&self, root: &Path, pruned_dirs: &[&str]) -> XrgenResult<Vec<PathBuf>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;

        let mut files: Vec<PathBuf> = inner
            .files
            .keys()
            .filter(|p| p.starts_with(root) && p.as_path() != root)
            .filter(|p| {
                let Ok(rel) = p.strip_prefix(root) else {
                    return false;
                };
                // Prune by directory name anywhere between the root and the
                // file itself; a file merely named like a pruned directory
                // is still visited.
                let components: Vec<_> = rel.components().collect();
                !components[..components.len().saturating_sub(1)]
                    .iter()
                    .any(|c| {
                        c.as_os_str()
                            .to_str()
                            .is_some_and(|name| pruned_dirs.contains(&name))
                    })
            })
            .cloned()
            .collect();

        files.sort();
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> XrgenResult<String> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::Io {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn write_string(&self, path: &Path, content: &str) -> XrgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Io {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
