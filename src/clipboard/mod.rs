//! Clipboard sinks for the RTF payload.

mod native;

pub use native::{ClipboardBackend, NativeClipboard, RTF_MIME};

use crate::error::ClipboardError;

/// Destination for an encoded RTF document.
///
/// Implementations either publish the whole buffer or nothing.
pub trait ClipboardSink {
    /// Short name used in status and log messages.
    fn name(&self) -> &str;

    /// Replace the clipboard contents with `data`, tagged as rich text.
    fn set_rtf(&mut self, data: &[u8]) -> Result<(), ClipboardError>;
}

/// In-process clipboard, used by tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<Vec<u8>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every write, as if another process held it.
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }

    pub fn contents(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    fn set_rtf(&mut self, data: &[u8]) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Failed {
                tool: self.name().to_string(),
                status: "clipboard busy".to_string(),
            });
        }
        self.contents = Some(data.to_vec());
        Ok(())
    }
}
