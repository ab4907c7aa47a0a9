use std::borrow::Cow;

use crate::lister::{Category, INDENT};

/// Document header: ANSI charset and a two-entry color table. The
/// paragraph color indices below depend on this exact table.
pub const RTF_HEADER: &str =
    "{\\rtf1\\ansi\n{\\colortbl;\\red0\\green0\\blue255;\\red0\\green0\\blue0;}\n";

/// Closes the document opened by [`RTF_HEADER`].
pub const RTF_TRAILER: &str = "}";

/// Replacement for each indentation tab in emitted text.
pub const TAB_EXPANSION: &str = "    ";

const FOLDER_OPEN: &str = "\\b\\cf1 ";
const FOLDER_CLOSE: &str = "\\b0\\par\n";
const FILE_OPEN: &str = "\\cf0 ";
const FILE_CLOSE: &str = "\\par\n";

/// Options for RTF rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `\`, `{` and `}` in line text
    pub escape_control_chars: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_control_chars: true,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_escaping(mut self, enabled: bool) -> Self {
        self.escape_control_chars = enabled;
        self
    }
}

/// Render displayed lines as an RTF document.
///
/// Only the text is trusted: each line is classified by its trailing folder
/// marker, so edited or re-read text renders the same way as freshly
/// generated lines.
pub fn render_rtf<I, S>(lines: I, options: &RenderOptions) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = String::from(RTF_HEADER);
    for line in lines {
        render_paragraph(line.as_ref(), options, &mut output);
    }
    output.push_str(RTF_TRAILER);
    output
}

/// Append one paragraph for `line` to `output`.
pub fn render_paragraph(line: &str, options: &RenderOptions, output: &mut String) {
    let expanded = expand_tabs(line);
    let text = if options.escape_control_chars {
        escape_control_chars(&expanded)
    } else {
        Cow::Borrowed(&*expanded)
    };

    match Category::classify(line) {
        Category::Folder => {
            output.push_str(FOLDER_OPEN);
            output.push_str(&text);
            output.push_str(FOLDER_CLOSE);
        }
        Category::File => {
            output.push_str(FILE_OPEN);
            output.push_str(&text);
            output.push_str(FILE_CLOSE);
        }
    }
}

/// Replace every tab with four spaces.
pub fn expand_tabs(line: &str) -> Cow<'_, str> {
    if line.contains(INDENT) {
        Cow::Owned(line.replace(INDENT, TAB_EXPANSION))
    } else {
        Cow::Borrowed(line)
    }
}

/// Escape the characters RTF treats as control syntax.
pub fn escape_control_chars(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '{', '}']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if matches!(c, '\\' | '{' | '}') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}
