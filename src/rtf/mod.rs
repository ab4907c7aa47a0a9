mod document;
mod encoding;

pub use document::{
    escape_control_chars, expand_tabs, render_paragraph, render_rtf, RenderOptions, RTF_HEADER,
    RTF_TRAILER, TAB_EXPANSION,
};
pub use encoding::{encode_latin1, Latin1, SUBSTITUTE};
