//! Fixed layout of the base sample template.
//!
//! Every value in this module describes `XrAppBase` and the monorepo
//! locations it is wired into. The rewrite table and the cleanup pass are
//! both driven from here, so the full set of base tokens lives in exactly
//! one place.
//!
//! # Design
//!
//! These are deliberately constants, not configuration: the tool supports a
//! single fixed template layout. The only runtime-configurable location is
//! the samples root on disk, which the CLI passes into the service
//! explicitly.

// ── Names ─────────────────────────────────────────────────────────────────────

/// Folder name of the base template cloned for every new sample.
pub const BASE_FOLDER: &str = "XrAppBase";

/// Parent directory housing the base template and all generated samples.
pub const SAMPLES_DIR: &str = "XrSamples";

/// Monorepo root that sample build targets hang off.
pub const MOBILE_ROOT: &str = "//arvr/projects/xrruntime/mobile";

/// Prefix prepended to the raw app name to form the sample folder name.
pub const FOLDER_PREFIX: &str = "Xr";

/// Suffix appended to the spaced folder name to form the display title.
pub const TITLE_SUFFIX: &str = " Sample";

/// Package prefix for generated samples.
pub const PACKAGE_PREFIX: &str = "com.oculus.sdk.";

/// Human-readable display title of the base template.
pub const BASE_TITLE: &str = "Xr App Base";

// ── Walk and cleanup rules ────────────────────────────────────────────────────

/// Subdirectory of a generated sample that receives the post-clone cleanup
/// pass. Everything under it not named in [`RETAINED_PLATFORM_ENTRIES`] is
/// build output left behind by the template and gets deleted.
pub const PLATFORM_PROJECT_SUBDIR: &str = "Projects/Android";

/// Entries under [`PLATFORM_PROJECT_SUBDIR`] that survive cleanup: the
/// manifest, the build scripts, the build and keystore configuration, and
/// the native sources.
pub const RETAINED_PLATFORM_ENTRIES: [&str; 9] = [
    "AndroidManifest.xml",
    "buck_build.bat",
    "buck_build.py",
    "build.bat",
    "build.gradle",
    "build.py",
    "keystore.properties",
    "settings.gradle",
    "jni",
];

/// Directory names pruned entirely from the rewrite walk. Asset payloads are
/// opaque binaries and must never be text-substituted.
pub const PRUNED_DIRS: [&str; 1] = ["assets"];

/// File names never opened during the rewrite walk.
pub const IGNORED_FILES: [&str; 1] = [".DS_Store"];

// ── Derived base tokens ───────────────────────────────────────────────────────

/// Fully-qualified monorepo root path of the base template.
pub fn base_root_path() -> String {
    format!("{MOBILE_ROOT}/{SAMPLES_DIR}/{BASE_FOLDER}")
}

/// Colon-qualified build-target reference of the base template.
pub fn base_target_reference() -> String {
    format!("{SAMPLES_DIR}:{BASE_FOLDER}")
}

/// App class name of the base template.
pub fn base_app_class() -> String {
    format!("{BASE_FOLDER}App")
}

/// Package name of the base template.
pub fn base_package_name() -> String {
    format!("{}{}", PACKAGE_PREFIX, BASE_FOLDER.to_lowercase())
}

/// Lowercase build-target name of the base template.
pub fn base_target_name() -> String {
    format!(
        "{}_{}",
        SAMPLES_DIR.to_lowercase(),
        BASE_FOLDER.to_lowercase()
    )
}

// ── Membership helpers ────────────────────────────────────────────────────────

/// Whether a platform-project entry name survives the cleanup pass.
pub fn is_retained_platform_entry(name: &str) -> bool {
    RETAINED_PLATFORM_ENTRIES.contains(&name)
}

/// Whether a directory name is pruned from the rewrite walk.
pub fn is_pruned_dir(name: &str) -> bool {
    PRUNED_DIRS.contains(&name)
}

/// Whether a file name is skipped by the rewrite walk.
pub fn is_ignored_file(name: &str) -> bool {
    IGNORED_FILES.contains(&name)
}
