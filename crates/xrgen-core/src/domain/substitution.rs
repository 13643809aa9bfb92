//! The ordered identifier rewrite table.
//!
//! Rewriting is sequential literal substring replacement — case-sensitive,
//! no pattern matching. The table is order-sensitive: the longest,
//! most-specific tokens are consumed first so that shorter tokens applied
//! later cannot corrupt an already-rewritten longer string. Ordering and
//! completeness are both testable because the table is an explicit data
//! structure, not a chain of inline calls.
//!
//! # Domain purity
//!
//! This module must not import `tracing` or perform I/O.

use std::fmt;

use crate::domain::{SampleIdentifiers, layout};

// ── Substitution ──────────────────────────────────────────────────────────────

/// One literal rewrite: every occurrence of `pattern` becomes `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    label: &'static str,
    pattern: String,
    replacement: String,
}

impl Substitution {
    fn new(
        label: &'static str,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            label,
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Short human-readable tag naming what this entry rewrites.
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every occurrence of this entry's pattern.
    pub fn apply(&self, input: &str) -> String {
        input.replace(&self.pattern, &self.replacement)
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.pattern, self.replacement)
    }
}

// ── SubstitutionTable ─────────────────────────────────────────────────────────

/// The full ordered rewrite sequence for one generated sample.
///
/// Built once per run from the derived identifiers; immutable thereafter.
/// Applying the table to text that has already been rewritten is a no-op,
/// since one pass removes every base token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: Vec<Substitution>,
}

impl SubstitutionTable {
    /// Build the rewrite table for the given identifier family.
    ///
    /// Entry order is load-bearing:
    /// 1. the fully-qualified base root path (longest token)
    /// 2. the colon-qualified build-target reference
    /// 3. the base app class name
    /// 4. remaining occurrences of the base folder name
    /// 5. the base package name
    /// 6. the base lowercase build-target name
    /// 7. remaining lowercase base tokens
    /// 8. the base display title (disjoint string space)
    pub fn for_identifiers(ids: &SampleIdentifiers) -> Self {
        let entries = vec![
            Substitution::new(
                "target root path",
                layout::base_root_path(),
                ids.target_root_path(),
            ),
            Substitution::new(
                "build target reference",
                layout::base_target_reference(),
                format!("{}:{}", layout::SAMPLES_DIR, ids.folder_name()),
            ),
            Substitution::new("app class", layout::base_app_class(), ids.app_class()),
            Substitution::new("folder name", layout::BASE_FOLDER, ids.folder_name()),
            Substitution::new(
                "package name",
                layout::base_package_name(),
                ids.package_name(),
            ),
            Substitution::new(
                "build target name",
                layout::base_target_name(),
                ids.target_name(),
            ),
            Substitution::new(
                "lowercase folder name",
                layout::BASE_FOLDER.to_lowercase(),
                ids.folder_name().to_lowercase(),
            ),
            Substitution::new("app title", layout::BASE_TITLE, ids.app_title()),
        ];

        Self { entries }
    }

    /// Run every rewrite over `input`, in table order.
    pub fn apply(&self, input: &str) -> String {
        self.entries
            .iter()
            .fold(input.to_owned(), |text, sub| sub.apply(&text))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Substitution> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
