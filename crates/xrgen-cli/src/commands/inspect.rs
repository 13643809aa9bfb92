//! Implementation of the `xrgen inspect` command.
//!
//! Derives the identifier family for a name and prints it without touching
//! the filesystem.

use xrgen_core::domain::SampleIdentifiers;

use crate::{
    cli::{InspectArgs, InspectFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: InspectArgs, output: OutputManager) -> CliResult<()> {
    let identifiers = SampleIdentifiers::derive(args.name.trim());

    match args.format {
        InspectFormat::Table => {
            output.header(&format!("Identifiers for '{}'", identifiers.raw_name()))?;
            output.print(&format!("  App Folder:   {}", identifiers.folder_name()))?;
            output.print(&format!("  App Class:    {}", identifiers.app_class()))?;
            output.print(&format!("  App Title:    {}", identifiers.app_title()))?;
            output.print(&format!("  Package:      {}", identifiers.package_name()))?;
            output.print(&format!("  Target:       {}", identifiers.target_name()))?;
            output.print(&format!("  Target Root:  {}", identifiers.target_root_path()))?;
        }
        InspectFormat::Json => {
            // Serialised straight to stdout, bypassing the OutputManager:
            // JSON output must stay parseable even in quiet mode and in
            // non-TTY pipes.
            let json = serde_json::to_string_pretty(&identifiers).map_err(|e| {
                CliError::Config {
                    message: format!("failed to serialise identifiers: {e}"),
                    source: Some(Box::new(e)),
                }
            })?;
            println!("{json}");
        }
    }

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_serialise_with_camel_case_keys() {
        let identifiers = SampleIdentifiers::derive("Passthrough");
        let json = serde_json::to_value(&identifiers).unwrap();

        assert_eq!(json["folderName"], "XrPassthrough");
        assert_eq!(json["appClass"], "XrPassthroughApp");
        assert_eq!(json["appTitle"], "Xr Passthrough Sample");
        assert_eq!(json["packageName"], "com.oculus.sdk.xrpassthrough");
        assert_eq!(json["targetName"], "xrsamples_xrpassthrough");
    }
}
