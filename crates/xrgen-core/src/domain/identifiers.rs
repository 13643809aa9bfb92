//! The identifier family derived from one user-supplied app name.
//!
//! Everything a generated sample is named after — its folder, app class,
//! display title, package, and build target — is a pure function of the raw
//! name entered by the user. Derivation happens exactly once per run; the
//! resulting [`SampleIdentifiers`] is immutable from then on.
//!
//! # Domain purity
//!
//! This module must not import `tracing` or perform I/O. Observability is
//! the responsibility of the application and CLI layers.

use serde::Serialize;
use std::fmt;

use crate::domain::layout;

/// The full set of names derived from a raw app name.
///
/// Guaranteed deterministic: two derivations from the same raw name are
/// identical. No randomness, no hidden state, no filesystem probing.
///
/// Serializes with camelCase keys so the CLI's JSON view matches the field
/// names the template wiring uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleIdentifiers {
    raw_name: String,
    folder_name: String,
    app_class: String,
    app_title: String,
    package_name: String,
    target_name: String,
    target_root_path: String,
}

impl SampleIdentifiers {
    /// Derive the identifier family from the raw app name.
    ///
    /// The raw name is taken as-is; legality in any build or package system
    /// is not this type's concern. Case transformation is the only
    /// normalization applied, and only where the derivation table calls for
    /// it (package and target names are lowercased).
    pub fn derive(raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        let folder_name = format!("{}{raw_name}", layout::FOLDER_PREFIX);
        let folder_lower = folder_name.to_lowercase();

        // Title derivation is template-specific: the folder prefix is spaced
        // off the remainder. Since derivation just prepended the prefix, the
        // remainder is the raw name itself.
        let app_title = format!(
            "{} {raw_name}{}",
            layout::FOLDER_PREFIX,
            layout::TITLE_SUFFIX
        );

        Self {
            app_class: format!("{folder_name}App"),
            app_title,
            package_name: format!("{}{folder_lower}", layout::PACKAGE_PREFIX),
            target_name: format!("{}_{folder_lower}", layout::SAMPLES_DIR.to_lowercase()),
            target_root_path: format!(
                "{}/{}/{folder_name}",
                layout::MOBILE_ROOT,
                layout::SAMPLES_DIR
            ),
            raw_name,
            folder_name,
        }
    }

    /// The name exactly as the user supplied it.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Folder name of the generated sample, e.g. `XrPassthrough`.
    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    /// App class name, e.g. `XrPassthroughApp`.
    pub fn app_class(&self) -> &str {
        &self.app_class
    }

    /// Human-readable display title, e.g. `Xr Passthrough Sample`.
    pub fn app_title(&self) -> &str {
        &self.app_title
    }

    /// Package name, e.g. `com.oculus.sdk.xrpassthrough`.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Lowercase build-target name, e.g. `xrsamples_xrpassthrough`.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Fully-qualified monorepo root path of the generated sample.
    pub fn target_root_path(&self) -> &str {
        &self.target_root_path
    }
}

impl fmt::Display for SampleIdentifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.folder_name)
    }
}
