//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use xrgen_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::EntryKind,
    error::{XrgenError, XrgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn classify(&self, path: &Path) -> EntryKind {
        // symlink_metadata so links classify as FileLike instead of
        // whatever they point at (or Neither when broken).
        match path.symlink_metadata() {
            Ok(meta) => {
                let ft = meta.file_type();
                if ft.is_file() || ft.is_symlink() {
                    EntryKind::FileLike
                } else if ft.is_dir() {
                    EntryKind::DirectoryLike
                } else {
                    EntryKind::Neither
                }
            }
            Err(_) => EntryKind::Neither,
        }
    }

    fn copy_tree(&self, src: &Path, dst: &Path) -> XrgenResult<()> {
        if !src.is_dir() {
            // Degraded path: a single-file template is copied as-is.
            std::fs::copy(src, dst).map_err(|e| map_copy_error(src, e))?;
            return Ok(());
        }

        // create_dir, not create_dir_all: a pre-existing destination must
        // fail here rather than be silently merged into.
        std::fs::create_dir(dst).map_err(|e| map_copy_error(dst, e))?;

        for entry in WalkDir::new(src).min_depth(1) {
            let entry = entry.map_err(|e| map_copy_error(src, e.into()))?;
            let rel = entry
                .path()
                .strip_prefix(src)
                .map_err(|e| XrgenError::Internal {
                    message: format!("walk produced a path outside the source root: {e}"),
                })?;
            let target = dst.join(rel);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target).map_err(|e| map_copy_error(&target, e))?;
            } else {
                std::fs::copy(entry.path(), &target)
                    .map_err(|e| map_copy_error(entry.path(), e))?;
            }
            trace!(path = %target.display(), "copied");
        }

        Ok(())
    }

    fn list_dir(&self, path: &Path) -> XrgenResult<Vec<String>> {
        let entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "list directory"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn remove_file(&self, path: &Path) -> XrgenResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir_all(&self, path: &Path) -> XrgenResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn walk_files(&self, root: &Path, pruned_dirs: &[&str]) -> XrgenResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root).min_depth(1).into_iter();
        let not_pruned = |entry: &walkdir::DirEntry| {
            !(entry.file_type().is_dir()
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| pruned_dirs.contains(&name)))
        };

        for entry in walker.filter_entry(not_pruned) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                XrgenError::from(ApplicationError::Io {
                    path,
                    reason: format!("Failed to walk: {e}"),
                })
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> XrgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => ApplicationError::Decode {
                path: path.to_path_buf(),
            }
            .into(),
            _ => map_io_error(path, e, "read file"),
        })
    }

    fn write_string(&self, path: &Path, content: &str) -> XrgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> XrgenError {
    ApplicationError::Io {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

fn map_copy_error(path: &Path, e: io::Error) -> XrgenError {
    ApplicationError::CopyFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    // ── classify ──

    #[test]
    fn classifies_files_dirs_and_missing_paths() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let file = tmp.path().join("a.txt");
        write(&file, "hello");
        assert_eq!(fs.classify(&file), EntryKind::FileLike);

        assert_eq!(fs.classify(tmp.path()), EntryKind::DirectoryLike);
        assert_eq!(fs.classify(&tmp.path().join("nope")), EntryKind::Neither);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_classify_as_file_like() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let target = tmp.path().join("target.txt");
        write(&target, "data");
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(fs.classify(&link), EntryKind::FileLike);

        // Broken links still unlink like files.
        std::fs::remove_file(&target).unwrap();
        assert_eq!(fs.classify(&link), EntryKind::FileLike);
    }

    // ── copy_tree ──

    #[test]
    fn copies_a_nested_tree() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let src = tmp.path().join("src");
        write(&src.join("a.txt"), "top");
        write(&src.join("sub/deep/b.txt"), "nested");
        std::fs::create_dir_all(src.join("empty")).unwrap();

        let dst = tmp.path().join("dst");
        fs.copy_tree(&src, &dst).unwrap();

        assert_eq!(std::fs::read_to_string(dst.join("a.txt")).unwrap(), "top");
        assert_eq!(
            std::fs::read_to_string(dst.join("sub/deep/b.txt")).unwrap(),
            "nested"
        );
        assert!(dst.join("empty").is_dir());
        // Source is untouched.
        assert_eq!(std::fs::read_to_string(src.join("a.txt")).unwrap(), "top");
    }

    #[test]
    fn falls_back_to_plain_copy_for_a_single_file() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let src = tmp.path().join("only.txt");
        write(&src, "alone");

        let dst = tmp.path().join("copy.txt");
        fs.copy_tree(&src, &dst).unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "alone");
    }

    #[test]
    fn refuses_an_existing_destination() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let src = tmp.path().join("src");
        write(&src.join("a.txt"), "x");
        let dst = tmp.path().join("dst");
        write(&dst.join("keep.txt"), "precious");

        let err = fs.copy_tree(&src, &dst).unwrap_err();
        assert!(matches!(
            err,
            XrgenError::Application(ApplicationError::CopyFailed { .. })
        ));
        // Nothing in the pre-existing destination was touched.
        assert_eq!(
            std::fs::read_to_string(dst.join("keep.txt")).unwrap(),
            "precious"
        );
    }

    // ── walk_files ──

    #[test]
    fn walk_prunes_named_subtrees_at_any_depth() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let root = tmp.path().join("tree");
        write(&root.join("main.cpp"), "");
        write(&root.join("assets/shader.bin"), "");
        write(&root.join("sub/assets/texture.bin"), "");
        write(&root.join("sub/notes.txt"), "");
        // A file named like a pruned directory is still visited.
        write(&root.join("sub/assets.txt"), "");

        let mut rel: Vec<PathBuf> = fs
            .walk_files(&root, &["assets"])
            .unwrap()
            .into_iter()
            .map(|p| p.strip_prefix(&root).unwrap().to_path_buf())
            .collect();
        rel.sort();

        assert_eq!(
            rel,
            vec![
                PathBuf::from("main.cpp"),
                PathBuf::from("sub/assets.txt"),
                PathBuf::from("sub/notes.txt"),
            ]
        );
    }

    #[test]
    fn walk_of_a_file_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let file = tmp.path().join("only.txt");
        write(&file, "alone");
        assert!(fs.walk_files(&file, &["assets"]).unwrap().is_empty());
    }

    // ── read / write ──

    #[test]
    fn read_rejects_non_utf8_content() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let path = tmp.path().join("binary.dat");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = fs.read_to_string(&path).unwrap_err();
        assert!(matches!(
            err,
            XrgenError::Application(ApplicationError::Decode { .. })
        ));
    }

    #[test]
    fn write_overwrites_in_place() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let path = tmp.path().join("f.txt");
        write(&path, "before");
        fs.write_string(&path, "after").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "after");
    }

    // ── list / remove ──

    #[test]
    fn lists_child_names_sorted() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        write(&tmp.path().join("b.txt"), "");
        write(&tmp.path().join("a.txt"), "");
        std::fs::create_dir(tmp.path().join("jni")).unwrap();

        assert_eq!(fs.list_dir(tmp.path()).unwrap(), ["a.txt", "b.txt", "jni"]);
    }

    #[test]
    fn list_of_a_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let err = fs.list_dir(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(
            err,
            XrgenError::Application(ApplicationError::Io { .. })
        ));
    }

    #[test]
    fn removes_files_and_trees() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let file = tmp.path().join("gone.txt");
        write(&file, "");
        fs.remove_file(&file).unwrap();
        assert!(!file.exists());

        let dir = tmp.path().join("tree");
        write(&dir.join("inner/leaf.txt"), "");
        fs.remove_dir_all(&dir).unwrap();
        assert!(!dir.exists());
    }
}
