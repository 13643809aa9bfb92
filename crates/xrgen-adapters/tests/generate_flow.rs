//! End-to-end generation flow over the filesystem adapters.
//!
//! These tests drive `GenerateService` through `MemoryFilesystem` for the
//! fast cases and through `LocalFilesystem` on a temporary directory for the
//! real-disk case.

use std::path::{Path, PathBuf};

use xrgen_adapters::{LocalFilesystem, MemoryFilesystem};
use xrgen_core::{application::ApplicationError, prelude::*};

const ROOT: &str = "/xr/XrSamples";

const MAIN_CPP: &str = "#include \"XrAppBaseApp.h\"\n\n\
class XrAppBaseApp : public OVRFW::XrAppBase {\n\
public:\n\
    XrAppBaseApp() = default;\n\
};\n";

const MANIFEST: &str = "<manifest package=\"com.oculus.sdk.xrappbase\">\n\
  <application android:label=\"Xr App Base\" />\n\
</manifest>\n";

const BUILD_PY: &str = "TARGET = \"//arvr/projects/xrruntime/mobile/XrSamples/XrAppBase:xrsamples_xrappbase\"\n\
DEP = \"XrSamples:XrAppBase\"\n";

const ANDROID_MK: &str = "LOCAL_MODULE := xrappbase\n\
LOCAL_SRC := ../../Src/XrAppBaseApp.cpp\n";

/// Seed the full base template under `ROOT`, including stale build output,
/// an asset payload, and a Finder droppings file.
fn seed_template(fs: &MemoryFilesystem) {
    let base = format!("{ROOT}/XrAppBase");
    fs.add_file(format!("{base}/Src/main.cpp"), MAIN_CPP);
    fs.add_file(format!("{base}/java/MainActivity.java"), "// com.oculus.sdk.xrappbase\n");
    fs.add_file(format!("{base}/assets/shader.bin"), "payload mentioning XrAppBase");
    fs.add_file(format!("{base}/.DS_Store"), "finder droppings");
    fs.add_file(format!("{base}/Projects/Android/AndroidManifest.xml"), MANIFEST);
    fs.add_file(format!("{base}/Projects/Android/build.py"), BUILD_PY);
    fs.add_file(format!("{base}/Projects/Android/keystore.properties"), "keyAlias=xrappbase\n");
    fs.add_file(format!("{base}/Projects/Android/jni/Android.mk"), ANDROID_MK);
    // Stale build output that the clean step must delete.
    fs.add_file(format!("{base}/Projects/Android/bin/app.apk"), "apk bytes");
    fs.add_file(format!("{base}/Projects/Android/.cxx/metadata.json"), "{}");
    fs.add_file(format!("{base}/Projects/Android/XrAppBase.iml"), "<module/>");
}

fn service_over(fs: &MemoryFilesystem) -> GenerateService {
    GenerateService::new(Box::new(fs.clone()))
}

// ── happy path ──

#[test]
fn generates_a_renamed_sample_end_to_end() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);

    let ids = SampleIdentifiers::derive("Demo");
    let source = PathBuf::from(format!("{ROOT}/XrAppBase"));
    let dest = PathBuf::from(format!("{ROOT}/XrDemo"));

    let report = service_over(&fs).generate(&ids, &source, &dest).unwrap();

    // bin, .cxx and the .iml were stale; everything else was retained.
    assert_eq!(report.entries_removed, 3);
    assert_eq!(report.files_skipped, 1);
    assert_eq!(report.files_rewritten(), 6);

    // Code picked up the new class, folder and package names.
    let main = fs.read_file(&dest.join("Src/main.cpp")).unwrap();
    assert!(main.contains("class XrDemoApp : public OVRFW::XrDemo"));
    assert!(!main.contains("XrAppBase"));

    let java = fs.read_file(&dest.join("java/MainActivity.java")).unwrap();
    assert_eq!(java, "// com.oculus.sdk.xrdemo\n");

    // Build wiring follows the longest-match-first table.
    let build = fs
        .read_file(&dest.join("Projects/Android/build.py"))
        .unwrap();
    assert!(build.contains("//arvr/projects/xrruntime/mobile/XrSamples/XrDemo:xrsamples_xrdemo"));
    assert!(build.contains("DEP = \"XrSamples:XrDemo\""));

    let manifest = fs
        .read_file(&dest.join("Projects/Android/AndroidManifest.xml"))
        .unwrap();
    assert!(manifest.contains("package=\"com.oculus.sdk.xrdemo\""));
    assert!(manifest.contains("android:label=\"Xr Demo Sample\""));

    // Assets are carried over byte for byte, ignored files untouched.
    assert_eq!(
        fs.read_file(&dest.join("assets/shader.bin")).unwrap(),
        "payload mentioning XrAppBase"
    );
    assert_eq!(
        fs.read_file(&dest.join(".DS_Store")).unwrap(),
        "finder droppings"
    );

    // The allow-list survived the clean, the stale output did not.
    assert!(fs.exists(&dest.join("Projects/Android/AndroidManifest.xml")));
    assert!(fs.exists(&dest.join("Projects/Android/keystore.properties")));
    assert!(fs.exists(&dest.join("Projects/Android/jni/Android.mk")));
    assert!(!fs.exists(&dest.join("Projects/Android/bin")));
    assert!(!fs.exists(&dest.join("Projects/Android/.cxx")));
    assert!(!fs.exists(&dest.join("Projects/Android/XrAppBase.iml")));

    // The template itself is never modified.
    let template_main = fs.read_file(&source.join("Src/main.cpp")).unwrap();
    assert!(template_main.contains("XrAppBaseApp"));
    assert!(fs.exists(&source.join("Projects/Android/bin/app.apk")));
}

#[test]
fn rewritten_paths_all_live_under_the_destination() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);

    let ids = SampleIdentifiers::derive("Demo");
    let source = PathBuf::from(format!("{ROOT}/XrAppBase"));
    let dest = PathBuf::from(format!("{ROOT}/XrDemo"));

    let report = service_over(&fs).generate(&ids, &source, &dest).unwrap();

    assert!(!report.rewritten.is_empty());
    for path in &report.rewritten {
        assert!(path.starts_with(&dest), "escaped destination: {}", path.display());
    }
    assert!(report.rewritten.contains(&dest.join("Src/main.cpp")));
}

// ── preflight failures ──

#[test]
fn refuses_to_overwrite_an_existing_destination() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.add_file(format!("{ROOT}/XrDemo/keep.txt"), "precious");

    let ids = SampleIdentifiers::derive("Demo");
    let err = service_over(&fs)
        .generate(
            &ids,
            Path::new("/xr/XrSamples/XrAppBase"),
            Path::new("/xr/XrSamples/XrDemo"),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        XrgenError::Application(ApplicationError::DestinationExists { .. })
    ));
    // The pre-existing content is left exactly as it was.
    assert_eq!(
        fs.read_file(Path::new("/xr/XrSamples/XrDemo/keep.txt"))
            .unwrap(),
        "precious"
    );
}

#[test]
fn fails_when_the_template_is_missing() {
    let fs = MemoryFilesystem::new();

    let ids = SampleIdentifiers::derive("Demo");
    let err = service_over(&fs)
        .generate(
            &ids,
            Path::new("/xr/XrSamples/XrAppBase"),
            Path::new("/xr/XrSamples/XrDemo"),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        XrgenError::Application(ApplicationError::TemplateMissing { .. })
    ));
    assert!(!fs.exists(Path::new("/xr/XrSamples/XrDemo")));
}

// ── mid-run failures abort without rollback ──

#[test]
fn fails_on_an_entry_that_is_neither_file_nor_directory() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    // A socket-like entry inside the platform folder travels with the clone
    // and is neither deletable kind.
    fs.add_special(format!("{ROOT}/XrAppBase/Projects/Android/odd.sock"));

    let ids = SampleIdentifiers::derive("Demo");
    let dest = PathBuf::from(format!("{ROOT}/XrDemo"));
    let err = service_over(&fs)
        .generate(&ids, Path::new("/xr/XrSamples/XrAppBase"), &dest)
        .unwrap_err();

    match err {
        XrgenError::Application(ApplicationError::InvalidEntryKind { path }) => {
            assert_eq!(path, dest.join("Projects/Android/odd.sock"));
        }
        other => panic!("unexpected error: {other}"),
    }

    // The run stopped before the rewrite pass; the clone stays in template
    // form rather than being rolled back.
    assert!(fs.exists(&dest));
    let main = fs.read_file(&dest.join("Src/main.cpp")).unwrap();
    assert!(main.contains("XrAppBaseApp"));
}

#[test]
fn fails_when_the_platform_folder_is_absent() {
    let fs = MemoryFilesystem::new();
    fs.add_file(format!("{ROOT}/XrAppBase/Src/main.cpp"), MAIN_CPP);

    let ids = SampleIdentifiers::derive("Demo");
    let dest = PathBuf::from(format!("{ROOT}/XrDemo"));
    let err = service_over(&fs)
        .generate(&ids, Path::new("/xr/XrSamples/XrAppBase"), &dest)
        .unwrap_err();

    assert!(matches!(
        err,
        XrgenError::Application(ApplicationError::Io { .. })
    ));
    // The clone itself happened before the failure.
    assert!(fs.exists(&dest.join("Src/main.cpp")));
}

// ── degraded single-file template ──

#[test]
fn copies_a_single_file_template_without_rewriting() {
    let fs = MemoryFilesystem::new();
    fs.add_file(format!("{ROOT}/XrAppBase"), "single file with XrAppBase inside");

    let ids = SampleIdentifiers::derive("Demo");
    let report = service_over(&fs)
        .generate(
            &ids,
            Path::new("/xr/XrSamples/XrAppBase"),
            Path::new("/xr/XrSamples/XrDemo"),
        )
        .unwrap();

    assert_eq!(report, GenerateReport::default());
    // A plain copy: no clean, no rewrite.
    assert_eq!(
        fs.read_file(Path::new("/xr/XrSamples/XrDemo")).unwrap(),
        "single file with XrAppBase inside"
    );
}

// ── real disk ──

#[test]
fn generates_on_a_real_filesystem() {
    let tmp = tempfile::tempdir().unwrap();
    let samples = tmp.path().join("XrSamples");
    let base = samples.join("XrAppBase");

    std::fs::create_dir_all(base.join("Src")).unwrap();
    std::fs::create_dir_all(base.join("assets")).unwrap();
    std::fs::create_dir_all(base.join("Projects/Android/jni")).unwrap();
    std::fs::create_dir_all(base.join("Projects/Android/bin")).unwrap();
    std::fs::create_dir_all(base.join("Projects/Android/gen")).unwrap();

    std::fs::write(base.join("Src/main.cpp"), MAIN_CPP).unwrap();
    std::fs::write(base.join("Projects/Android/AndroidManifest.xml"), MANIFEST).unwrap();
    std::fs::write(base.join("Projects/Android/build.py"), BUILD_PY).unwrap();
    std::fs::write(base.join("Projects/Android/jni/Android.mk"), ANDROID_MK).unwrap();
    std::fs::write(base.join("Projects/Android/gen/R.java"), "// generated\n").unwrap();
    // Non-UTF-8 payloads: the run only succeeds if these are never decoded.
    let blob: &[u8] = &[0xff, 0xfe, 0x00, 0x42, 0x58, 0x72];
    std::fs::write(base.join("assets/logo.png"), blob).unwrap();
    std::fs::write(base.join(".DS_Store"), blob).unwrap();
    std::fs::write(base.join("Projects/Android/bin/app.apk"), blob).unwrap();

    let ids = SampleIdentifiers::derive("Anchors");
    let dest = samples.join("XrAnchors");
    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let report = service.generate(&ids, &base, &dest).unwrap();

    assert_eq!(report.entries_removed, 2);
    assert_eq!(report.files_skipped, 1);
    assert_eq!(report.files_rewritten(), 4);

    let main = std::fs::read_to_string(dest.join("Src/main.cpp")).unwrap();
    assert!(main.contains("class XrAnchorsApp : public OVRFW::XrAnchors"));
    assert!(!main.contains("XrAppBase"));

    let manifest =
        std::fs::read_to_string(dest.join("Projects/Android/AndroidManifest.xml")).unwrap();
    assert!(manifest.contains("com.oculus.sdk.xranchors"));
    assert!(manifest.contains("Xr Anchors Sample"));

    // Binary payloads survive byte for byte.
    assert_eq!(std::fs::read(dest.join("assets/logo.png")).unwrap(), blob);
    assert_eq!(std::fs::read(dest.join(".DS_Store")).unwrap(), blob);

    assert!(!dest.join("Projects/Android/bin").exists());
    assert!(!dest.join("Projects/Android/gen").exists());
    assert!(dest.join("Projects/Android/jni/Android.mk").exists());

    // Template untouched, stale output and all.
    assert!(base.join("Projects/Android/bin/app.apk").exists());
    let template_main = std::fs::read_to_string(base.join("Src/main.cpp")).unwrap();
    assert!(template_main.contains("XrAppBaseApp"));
}
