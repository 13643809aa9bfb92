//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `xrgen-adapters` crate provides implementations.

use crate::domain::EntryKind;
use crate::error::XrgenResult;
use std::path::{Path, PathBuf};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `xrgen_adapters::filesystem::LocalFilesystem` (production)
/// - `xrgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths arrive fully resolved; the port never consults process state
///   such as the current working directory
/// - Classification never follows symlinks
/// - Walks return files only; traversal order is not part of the contract
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Classify a path without following symlinks.
    ///
    /// Paths that do not exist classify as [`EntryKind::Neither`].
    fn classify(&self, path: &Path) -> EntryKind;

    /// Recursively copy a directory tree, preserving relative structure.
    ///
    /// Falls back to a plain file copy when `src` is a single file rather
    /// than a directory. `dst` must not already exist. The source tree is
    /// never modified.
    fn copy_tree(&self, src: &Path, dst: &Path) -> XrgenResult<()>;

    /// List the names of a directory's immediate children.
    fn list_dir(&self, path: &Path) -> XrgenResult<Vec<String>>;

    /// Remove a single file or symlink (the link itself, never its target).
    fn remove_file(&self, path: &Path) -> XrgenResult<()>;

    /// Remove a directory and all its contents.
    fn remove_dir_all(&self, path: &Path) -> XrgenResult<()>;

    /// Collect every file under `root`, skipping entire subtrees whose
    /// directory name appears in `pruned_dirs`. Returns nothing when `root`
    /// is not a directory.
    fn walk_files(&self, root: &Path, pruned_dirs: &[&str]) -> XrgenResult<Vec<PathBuf>>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> XrgenResult<String>;

    /// Overwrite a file with new text content.
    fn write_string(&self, path: &Path, content: &str) -> XrgenResult<()>;
}
