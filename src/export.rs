//! Displayed text → RTF → clipboard.

use serde::Serialize;

use crate::clipboard::ClipboardSink;
use crate::error::Result;
use crate::rtf::{encode_latin1, render_rtf, RenderOptions};

/// What an export put on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub paragraphs: usize,
    pub bytes: usize,
    /// Characters replaced because Latin-1 cannot represent them
    pub substituted: usize,
}

/// Render `lines` as RTF and hand the encoded document to `sink`.
pub fn export_rtf<I, S>(
    lines: I,
    options: &RenderOptions,
    sink: &mut dyn ClipboardSink,
) -> Result<ExportReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut paragraphs = 0;
    let document = render_rtf(
        lines.into_iter().inspect(|_| paragraphs += 1),
        options,
    );
    let encoded = encode_latin1(&document);

    sink.set_rtf(&encoded.bytes)?;

    tracing::info!(
        sink = sink.name(),
        paragraphs,
        bytes = encoded.bytes.len(),
        "Copied listing as RTF"
    );

    Ok(ExportReport {
        paragraphs,
        bytes: encoded.bytes.len(),
        substituted: encoded.substituted,
    })
}
