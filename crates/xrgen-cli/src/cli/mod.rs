//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "xrgen",
    bin_name = "xrgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant XR sample scaffolding",
    long_about = "Xrgen generates a new OpenXR sample app by cloning the \
                  XrAppBase template and rewriting its identifiers.",
    after_help = "EXAMPLES:\n\
        \x20 xrgen new Passthrough\n\
        \x20 xrgen new Anchors --samples-root ~/xr/XrSamples --yes\n\
        \x20 xrgen inspect HandTracking --format json\n\
        \x20 xrgen completions bash > /usr/share/bash-completion/completions/xrgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new sample app from the base template.
    #[command(
        visible_alias = "n",
        about = "Generate a new sample app",
        after_help = "EXAMPLES:\n\
            \x20 xrgen new Passthrough\n\
            \x20 xrgen new Anchors --samples-root ~/xr/XrSamples\n\
            \x20 xrgen new Demo --dry-run\n\
            \x20 xrgen new            # prompts for the name"
    )]
    New(NewArgs),

    /// Show the identifiers a name would derive, without writing anything.
    #[command(
        about = "Show derived identifiers for a name",
        after_help = "EXAMPLES:\n\
            \x20 xrgen inspect Passthrough\n\
            \x20 xrgen inspect HandTracking --format json"
    )]
    Inspect(InspectArgs),

    /// Initialise an xrgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 xrgen init           # platform config directory\n\
            \x20 xrgen init --local   # ./xrgen.toml\n\
            \x20 xrgen init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 xrgen completions bash > ~/.local/share/bash-completion/completions/xrgen\n\
            \x20 xrgen completions zsh  > ~/.zfunc/_xrgen\n\
            \x20 xrgen completions fish > ~/.config/fish/completions/xrgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `xrgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Raw application name, e.g. `Passthrough`.  The generated sample lands
    /// in `Xr<NAME>` next to the template.  Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Application name (prompted if omitted)")]
    pub name: Option<String>,

    /// Directory containing the XrAppBase template.
    #[arg(
        long = "samples-root",
        value_name = "DIR",
        help = "Samples root containing XrAppBase (default: config, then '.')"
    )]
    pub samples_root: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Preview what would be generated without writing any files.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

// ── inspect ───────────────────────────────────────────────────────────────────

/// Arguments for `xrgen inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Raw application name to derive identifiers from.
    #[arg(value_name = "NAME", help = "Application name")]
    pub name: String,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: InspectFormat,
}

/// Output format for the `inspect` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    /// Human-readable table.
    Table,
    /// JSON object with camelCase keys.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `xrgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `./xrgen.toml` instead of the platform config directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `xrgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
