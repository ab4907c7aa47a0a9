//! List command implementation

use std::io::Write;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{ListArgs, OutputFormat};
use crate::clipboard::NativeClipboard;
use crate::config::Config;
use crate::error::{ListerError, Result};
use crate::export::export_rtf;
use crate::lister::{list_tree_with, ListOptions, ListingLine};
use crate::rtf::{encode_latin1, render_rtf, RenderOptions};

/// Command-line flags layered over the configured defaults.
pub fn list_options(args: &ListArgs, config: &Config) -> ListOptions {
    let mut options = config.list_options();
    if args.files {
        options.include_files = true;
    }
    if args.no_follow_symlinks {
        options.follow_symlinks = false;
    }
    if args.one_file_system {
        options.one_file_system = true;
    }
    if args.max_depth.is_some() {
        options.max_depth = args.max_depth;
    }
    if let Some(policy) = args.on_error {
        options.on_subdir_error = policy;
    }
    options
}

pub fn render_options(args: &ListArgs, config: &Config) -> RenderOptions {
    let options = config.render_options();
    if args.no_escape {
        options.with_escaping(false)
    } else {
        options
    }
}

/// Run the list command
pub fn run(args: ListArgs, config: &Config, quiet: bool) -> Result<()> {
    let options = list_options(&args, config);
    let render = render_options(&args, config);

    tracing::info!(path = %args.path.display(), ?options, "Listing directory");

    let spinner = spinner(quiet);
    let result = list_tree_with(&args.path, &options);
    spinner.finish_and_clear();
    let listing = result?;

    if !quiet {
        for skipped in &listing.skipped {
            eprintln!("warning: skipped {}: {}", skipped.path.display(), skipped.reason);
        }
    }

    let texts = || listing.lines.iter().map(ListingLine::text);

    match args.format {
        OutputFormat::Text => {
            for text in texts() {
                println!("{}", text);
            }
        }
        OutputFormat::Rtf => {
            let document = render_rtf(texts(), &render);
            write_stdout(&encode_latin1(&document).bytes)?;
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&listing.lines)?);
        }
    }

    if args.copy {
        let backend = args.clipboard.unwrap_or(config.clipboard.backend);
        let mut sink = NativeClipboard::new(backend);
        let report = export_rtf(texts(), &render, &mut sink)?;
        if !quiet {
            eprintln!(
                "Copied {} lines to the clipboard as RTF ({} bytes)",
                report.paragraphs, report.bytes
            );
        }
    }

    Ok(())
}

fn spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::default_spinner());
    bar.set_message("Listing...");
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Write raw bytes to stdout.
pub(crate) fn write_stdout(bytes: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(bytes)
        .and_then(|_| stdout.flush())
        .map_err(|source| ListerError::Io {
            path: "<stdout>".into(),
            source,
        })
}
