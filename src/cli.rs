use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::clipboard::ClipboardBackend;
use crate::lister::SubdirErrorPolicy;

/// dirlist - List a directory tree and copy it as rich text
#[derive(Parser, Debug)]
#[command(name = "dirlist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the folders (and optionally files) under a directory
    List(ListArgs),

    /// Render a displayed listing as RTF
    Rtf(RtfArgs),

    /// Browse listings interactively
    Tui(TuiArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print the man page
    Man,
}

/// Output format for `list`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented lines, folders marked with a trailing slash
    #[default]
    Text,
    /// Rich Text Format document
    Rtf,
    /// JSON array of lines
    Json,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to list
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Include files, not only folders
    #[arg(short, long)]
    pub files: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also copy the listing to the clipboard as RTF
    #[arg(long)]
    pub copy: bool,

    /// Deepest indentation level to list (0 = only direct children)
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Treat symbolic links as plain entries
    #[arg(long)]
    pub no_follow_symlinks: bool,

    /// Don't cross filesystem boundaries
    #[arg(short = 'x', long)]
    pub one_file_system: bool,

    /// Unreadable subdirectories: skip, abort
    #[arg(long, value_name = "POLICY")]
    pub on_error: Option<SubdirErrorPolicy>,

    /// Leave backslashes and braces in names unescaped in RTF
    #[arg(long)]
    pub no_escape: bool,

    /// Clipboard tool: auto, wl-copy, xclip, pbcopy
    #[arg(long, value_name = "TOOL")]
    pub clipboard: Option<ClipboardBackend>,
}

#[derive(Args, Debug)]
pub struct RtfArgs {
    /// File holding the displayed listing ("-" for stdin)
    #[arg(default_value = "-")]
    pub input: String,

    /// Copy to the clipboard instead of printing
    #[arg(long)]
    pub copy: bool,

    /// Leave backslashes and braces in names unescaped
    #[arg(long)]
    pub no_escape: bool,

    /// Clipboard tool: auto, wl-copy, xclip, pbcopy
    #[arg(long, value_name = "TOOL")]
    pub clipboard: Option<ClipboardBackend>,
}

#[derive(Args, Debug)]
pub struct TuiArgs {
    /// Directory to list on start
    pub path: Option<PathBuf>,

    /// Start with files included
    #[arg(short, long)]
    pub files: bool,
}
