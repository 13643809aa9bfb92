//! Implementation of the `xrgen new` command.
//!
//! Responsibility: collect the raw application name, derive the identifier
//! family, and drive the core generate service. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use xrgen_adapters::LocalFilesystem;
use xrgen_core::{
    application::GenerateService,
    domain::{SampleIdentifiers, SubstitutionTable, layout},
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `xrgen new` command.
///
/// Dispatch sequence:
/// 1. Collect and validate the raw application name
/// 2. Derive the identifier family and resolve source/destination paths
/// 3. Early-exit if `--dry-run`
/// 4. Confirm with user unless `--yes` or `--quiet`
/// 5. Run clone → clean → rewrite via `GenerateService`
/// 6. Print the report and next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Collect the name
    let raw_name = match args.name {
        Some(name) => name,
        None => prompt_for_name()?,
    };
    let raw_name = raw_name.trim().to_string();
    validate_sample_name(&raw_name)?;

    // 2. Derive identifiers and resolve paths
    let identifiers = SampleIdentifiers::derive(&raw_name);
    let samples_root = resolve_samples_root(args.samples_root, &config);
    let source = samples_root.join(layout::BASE_FOLDER);
    let dest = samples_root.join(identifiers.folder_name());

    debug!(
        folder = %identifiers.folder_name(),
        package = %identifiers.package_name(),
        root = %samples_root.display(),
        "Identifiers resolved"
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        return show_dry_run(&identifiers, &source, &dest, &output);
    }

    // 4. Show configuration and confirm
    if !global.quiet && !args.yes {
        show_configuration(&identifiers, &source, &dest, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Generate
    let service = GenerateService::new(Box::new(LocalFilesystem::new()));

    output.header(&format!("Generating '{}'...", identifiers.folder_name()))?;
    info!(sample = %identifiers.folder_name(), dest = %dest.display(), "Generation started");

    let report = service
        .generate(&identifiers, &source, &dest)
        .map_err(CliError::Core)?;

    info!(sample = %identifiers.folder_name(), "Generation completed");

    // 6. Report + next steps
    if !global.quiet {
        for path in &report.rewritten {
            output.print(&format!("  rewrote {}", path.display()))?;
        }
    }
    output.success(&format!(
        "Sample '{}' generated ({} files rewritten, {} stale entries removed, {} skipped)",
        identifiers.folder_name(),
        report.files_rewritten(),
        report.entries_removed,
        report.files_skipped,
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", dest.display()))?;
        output.print(&format!(
            "  # Build '{}' and run it on device",
            identifiers.app_title()
        ))?;
    }

    Ok(())
}

// ── Name collection ───────────────────────────────────────────────────────────

/// Ask for the application name on stdin, previewing what the derived
/// names will look like.
fn prompt_for_name() -> CliResult<String> {
    use std::io::{self, Write};

    println!("What is your app's name?");
    println!("    Input Example:");
    println!("        NameOfYourApp");
    println!("    Expectation:");
    println!("        App Folder: Xr[NameOfYourApp]");
    println!("        Target: xrsamples_xr[nameofyourapp]");
    println!("        Package: com.oculus.sdk.xr[nameofyourapp]");
    println!("        App Class Name: Xr[NameOfYourApp]App");
    print!("> ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read the application name")?;

    Ok(input)
}

fn validate_sample_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidSampleName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidSampleName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Flag beats config file beats the current directory.
fn resolve_samples_root(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.or_else(|| config.paths.samples_root.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    identifiers: &SampleIdentifiers,
    source: &Path,
    dest: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  App Folder:   {}", identifiers.folder_name()))?;
    out.print(&format!("  App Class:    {}", identifiers.app_class()))?;
    out.print(&format!("  App Title:    {}", identifiers.app_title()))?;
    out.print(&format!("  Package:      {}", identifiers.package_name()))?;
    out.print(&format!("  Target:       {}", identifiers.target_name()))?;
    out.print(&format!("  Template:     {}", source.display()))?;
    out.print(&format!("  Destination:  {}", dest.display()))?;
    out.print("")?;
    Ok(())
}

fn show_dry_run(
    identifiers: &SampleIdentifiers,
    source: &Path,
    dest: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.info(&format!(
        "Dry run: would clone {} to {}",
        source.display(),
        dest.display(),
    ))?;
    show_configuration(identifiers, source, dest, out)?;

    out.header("Substitutions (in order)")?;
    let table = SubstitutionTable::for_identifiers(identifiers);
    for substitution in table.iter() {
        out.print(&format!("  {substitution}"))?;
    }
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
