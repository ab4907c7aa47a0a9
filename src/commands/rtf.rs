//! Rtf command: render an already displayed listing.

use std::io::Read;

use crate::cli::RtfArgs;
use crate::clipboard::NativeClipboard;
use crate::config::Config;
use crate::error::{ListerError, Result};
use crate::export::export_rtf;
use crate::rtf::{encode_latin1, render_rtf};

use super::list::write_stdout;

/// Run the rtf command
pub fn run(args: RtfArgs, config: &Config, quiet: bool) -> Result<()> {
    let text = read_input(&args.input)?;
    let options = if args.no_escape {
        config.render_options().with_escaping(false)
    } else {
        config.render_options()
    };

    tracing::info!(input = %args.input, lines = text.lines().count(), "Rendering RTF");

    if args.copy {
        let backend = args.clipboard.unwrap_or(config.clipboard.backend);
        let mut sink = NativeClipboard::new(backend);
        let report = export_rtf(text.lines(), &options, &mut sink)?;
        if !quiet {
            eprintln!(
                "Copied {} lines to the clipboard as RTF ({} bytes)",
                report.paragraphs, report.bytes
            );
        }
        return Ok(());
    }

    let document = render_rtf(text.lines(), &options);
    write_stdout(&encode_latin1(&document).bytes)
}

fn read_input(input: &str) -> Result<String> {
    let bytes = if input == "-" {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .map_err(|source| ListerError::Io {
                path: "<stdin>".into(),
                source,
            })?;
        bytes
    } else {
        std::fs::read(input).map_err(|e| ListerError::from_io(input, e))?
    };
    Ok(decode_listing(bytes))
}

/// Decode UTF-8, falling back to Latin-1 so single-byte listings survive.
fn decode_listing(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|err| {
        tracing::debug!("Input is not UTF-8, decoding as Latin-1");
        err.into_bytes().into_iter().map(char::from).collect()
    })
}
