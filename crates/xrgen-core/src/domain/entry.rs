//! Classification of filesystem entries for the cleanup pass.

use std::fmt;

/// What kind of thing a filesystem path points at.
///
/// The cleanup pass picks its deletion strategy from this: `FileLike`
/// entries are unlinked, `DirectoryLike` entries are removed recursively,
/// and `Neither` aborts the run — an entry that is neither a file, a
/// symlink, nor a directory means the template layout is corrupted or
/// something unexpected (socket, device node) landed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file or a symlink. Removed with a plain unlink; symlinks
    /// are never followed.
    FileLike,
    /// A directory. Removed recursively.
    DirectoryLike,
    /// Anything else, including a path that does not exist.
    Neither,
}

impl EntryKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FileLike => "file",
            Self::DirectoryLike => "directory",
            Self::Neither => "neither file nor directory",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_kind() {
        assert_eq!(EntryKind::FileLike.to_string(), "file");
        assert_eq!(EntryKind::DirectoryLike.to_string(), "directory");
        assert_eq!(EntryKind::Neither.to_string(), "neither file nor directory");
    }
}
