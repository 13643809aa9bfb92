//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Preflight: template present, destination absent
//! 2. Clone the template tree
//! 3. Clean stale build output from the platform project folder
//! 4. Rewrite identifiers through every eligible file
//!
//! The workflow is strictly linear. The first failure aborts the run: files
//! already rewritten stay rewritten, files not yet reached stay in template
//! form. There is deliberately no rollback.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{EntryKind, SampleIdentifiers, SubstitutionTable, layout},
    error::XrgenResult,
};

/// What a completed run did, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerateReport {
    /// Stale platform-project entries deleted after the clone.
    pub entries_removed: usize,
    /// Every file rewritten in place, in walk order.
    pub rewritten: Vec<PathBuf>,
    /// Files left untouched because their name is on the ignore list.
    pub files_skipped: usize,
}

impl GenerateReport {
    pub fn files_rewritten(&self) -> usize {
        self.rewritten.len()
    }
}

/// Main generation service.
///
/// Owns the injected filesystem port and runs the clone → clean → rewrite
/// sequence against it. The service itself holds no state between runs.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate a new sample: clone the template, clean it, rewrite it.
    ///
    /// `source` is the base template directory and `dest` the sample
    /// directory to create; both are fully resolved by the caller.
    #[instrument(
        skip_all,
        fields(
            sample = %identifiers.folder_name(),
            source = %source.display(),
            dest = %dest.display()
        )
    )]
    pub fn generate(
        &self,
        identifiers: &SampleIdentifiers,
        source: &Path,
        dest: &Path,
    ) -> XrgenResult<GenerateReport> {
        info!("Generating {}", identifiers.folder_name());

        // 1. Preflight
        if !self.filesystem.exists(source) {
            return Err(ApplicationError::TemplateMissing {
                path: source.to_path_buf(),
            }
            .into());
        }
        if self.filesystem.exists(dest) {
            return Err(ApplicationError::DestinationExists {
                path: dest.to_path_buf(),
            }
            .into());
        }

        // 2. Clone
        self.filesystem.copy_tree(source, dest)?;
        info!("Template cloned");

        // Degraded path: a single-file source produces a single-file clone,
        // which has no platform folder to clean and no tree to walk.
        if self.filesystem.classify(dest) != EntryKind::DirectoryLike {
            warn!("Source was a single file; nothing to clean or rewrite");
            return Ok(GenerateReport::default());
        }

        // 3. Clean
        let platform_dir = dest.join(layout::PLATFORM_PROJECT_SUBDIR);
        let entries_removed = self.clean_platform_dir(&platform_dir)?;
        info!(entries_removed, "Stale build output removed");

        // 4. Rewrite
        let table = SubstitutionTable::for_identifiers(identifiers);
        let (rewritten, files_skipped) = self.rewrite_tree(dest, &table)?;
        info!(
            files = rewritten.len(),
            skipped = files_skipped,
            "Generation completed successfully"
        );

        Ok(GenerateReport {
            entries_removed,
            rewritten,
            files_skipped,
        })
    }

    /// Delete everything in the platform project folder that is not on the
    /// retained allow-list. Returns the number of entries removed.
    fn clean_platform_dir(&self, dir: &Path) -> XrgenResult<usize> {
        let mut removed = 0;

        for name in self.filesystem.list_dir(dir)? {
            if layout::is_retained_platform_entry(&name) {
                debug!(entry = %name, "retained");
                continue;
            }

            let path = dir.join(&name);
            match self.filesystem.classify(&path) {
                EntryKind::FileLike => self.filesystem.remove_file(&path)?,
                EntryKind::DirectoryLike => self.filesystem.remove_dir_all(&path)?,
                EntryKind::Neither => {
                    return Err(ApplicationError::InvalidEntryKind { path }.into());
                }
            }
            debug!(entry = %name, "removed");
            removed += 1;
        }

        Ok(removed)
    }

    /// Walk the clone and apply the rewrite table to every eligible file.
    /// Returns the rewritten paths and the count of name-skipped files.
    fn rewrite_tree(
        &self,
        root: &Path,
        table: &SubstitutionTable,
    ) -> XrgenResult<(Vec<PathBuf>, usize)> {
        let mut rewritten = Vec::new();
        let mut skipped = 0;

        for file in self.filesystem.walk_files(root, &layout::PRUNED_DIRS)? {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if layout::is_ignored_file(&name) {
                debug!(path = %file.display(), "skipped");
                skipped += 1;
                continue;
            }

            let content = self.filesystem.read_to_string(&file)?;
            self.filesystem.write_string(&file, &table.apply(&content))?;
            info!(path = %file.display(), "rewritten");
            rewritten.push(file);
        }

        Ok((rewritten, skipped))
    }
}
