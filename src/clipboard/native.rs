use std::io::Write;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

use crate::error::ClipboardError;

use super::ClipboardSink;

/// MIME type used for the rich text payload.
pub const RTF_MIME: &str = "text/rtf";

/// External tool used to reach the system clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClipboardBackend {
    /// Pick from the environment
    #[default]
    Auto,
    WlCopy,
    Xclip,
    Pbcopy,
}

impl std::str::FromStr for ClipboardBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ClipboardBackend::Auto),
            "wl-copy" => Ok(ClipboardBackend::WlCopy),
            "xclip" => Ok(ClipboardBackend::Xclip),
            "pbcopy" => Ok(ClipboardBackend::Pbcopy),
            other => Err(format!("unknown clipboard backend '{}'", other)),
        }
    }
}

impl ClipboardBackend {
    /// Program name.
    pub fn program(self) -> &'static str {
        match self {
            ClipboardBackend::Auto => "auto",
            ClipboardBackend::WlCopy => "wl-copy",
            ClipboardBackend::Xclip => "xclip",
            ClipboardBackend::Pbcopy => "pbcopy",
        }
    }

    /// Arguments that register the input as RTF on the clipboard.
    pub fn args(self) -> &'static [&'static str] {
        match self {
            ClipboardBackend::Auto => &[],
            ClipboardBackend::WlCopy => &["--type", RTF_MIME],
            ClipboardBackend::Xclip => &["-selection", "clipboard", "-t", RTF_MIME, "-i"],
            // pbcopy detects RTF from the document header.
            ClipboardBackend::Pbcopy => &[],
        }
    }

    /// Concrete backends to try for `Auto`, most specific first.
    pub fn candidates(self) -> Vec<ClipboardBackend> {
        match self {
            ClipboardBackend::Auto => {
                let mut found = Vec::new();
                if cfg!(target_os = "macos") {
                    found.push(ClipboardBackend::Pbcopy);
                }
                if std::env::var_os("WAYLAND_DISPLAY").is_some() {
                    found.push(ClipboardBackend::WlCopy);
                }
                if std::env::var_os("DISPLAY").is_some() {
                    found.push(ClipboardBackend::Xclip);
                }
                found
            }
            concrete => vec![concrete],
        }
    }
}

/// Clipboard sink that pipes the payload into a clipboard tool.
///
/// The tool gets the whole buffer on stdin and owns the clipboard update;
/// a failed spawn, write or exit status leaves the clipboard untouched.
#[derive(Debug, Clone)]
pub struct NativeClipboard {
    backend: ClipboardBackend,
}

impl NativeClipboard {
    pub fn new(backend: ClipboardBackend) -> Self {
        Self { backend }
    }
}

impl ClipboardSink for NativeClipboard {
    fn name(&self) -> &str {
        self.backend.program()
    }

    fn set_rtf(&mut self, data: &[u8]) -> Result<(), ClipboardError> {
        let candidates = self.backend.candidates();
        let mut last_spawn_error = None;

        for backend in &candidates {
            match pipe_to_tool(*backend, data) {
                Err(ClipboardError::Spawn { tool, source })
                    if source.kind() == std::io::ErrorKind::NotFound =>
                {
                    tracing::debug!(tool = %tool, "Clipboard tool not installed");
                    last_spawn_error = Some(ClipboardError::Spawn { tool, source });
                }
                other => return other,
            }
        }

        if candidates.len() == 1 {
            if let Some(err) = last_spawn_error {
                return Err(err);
            }
        }

        let tried = if candidates.is_empty() {
            "no display detected".to_string()
        } else {
            candidates
                .iter()
                .map(|b| b.program())
                .collect::<Vec<_>>()
                .join(", ")
        };
        Err(ClipboardError::NoBackend { tried })
    }
}

fn pipe_to_tool(backend: ClipboardBackend, data: &[u8]) -> Result<(), ClipboardError> {
    let tool = backend.program().to_string();

    let mut child = Command::new(backend.program())
        .args(backend.args())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ClipboardError::Spawn {
            tool: tool.clone(),
            source,
        })?;

    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(data),
        None => Err(std::io::Error::other("stdin not captured")),
    };

    if let Err(source) = written {
        // Without the full payload the tool must not publish anything.
        let _ = child.kill();
        let _ = child.wait();
        return Err(ClipboardError::Write { tool, source });
    }

    let status = child.wait().map_err(|source| ClipboardError::Write {
        tool: tool.clone(),
        source,
    })?;

    if !status.success() {
        return Err(ClipboardError::Failed {
            tool,
            status: status.to_string(),
        });
    }

    tracing::debug!(tool = %tool, bytes = data.len(), "RTF placed on clipboard");
    Ok(())
}
