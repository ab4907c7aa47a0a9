//! Application state for the TUI.

use std::path::{Path, PathBuf};

use ratatui::style::{Color, Modifier, Style};

use crate::clipboard::{ClipboardSink, NativeClipboard};
use crate::config::{Config, TuiConfig};
use crate::export::export_rtf;
use crate::lister::{list_tree_with, ListOptions};
use crate::rtf::RenderOptions;

use super::view::ListingView;

/// Rows moved by PageUp/PageDown.
pub const PAGE_SIZE: usize = 20;

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation mode.
    Normal,
    /// Typing a folder path.
    Prompt,
    /// Help overlay mode.
    Help,
}

/// Severity of a status line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Message shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Row styles for the two display tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub folder: Style,
    pub file: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&TuiConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &TuiConfig) -> Self {
        let folder = config.folder_color.parse().unwrap_or(Color::Blue);
        let file = config.file_color.parse().unwrap_or(Color::Gray);
        Self {
            folder: Style::default().fg(folder).add_modifier(Modifier::BOLD),
            file: Style::default().fg(file),
        }
    }
}

/// Main application state for the TUI.
pub struct App {
    /// Directory currently listed.
    pub root: Option<PathBuf>,

    /// "Include files" toggle, applied to the next listing.
    pub include_files: bool,

    /// Listing pane content.
    pub view: ListingView,

    /// Index of the first visible row.
    pub scroll: usize,

    /// Current UI mode.
    pub mode: Mode,

    /// Path prompt input.
    pub path_input: String,

    /// Status message to display.
    pub status: Option<StatusMessage>,

    /// Application should quit.
    pub should_quit: bool,

    pub theme: Theme,

    list_options: ListOptions,
    render_options: RenderOptions,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    /// Create a new App instance.
    pub fn new(
        list_options: ListOptions,
        render_options: RenderOptions,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        Self {
            root: None,
            include_files: list_options.include_files,
            view: ListingView::new(),
            scroll: 0,
            mode: Mode::Normal,
            path_input: String::new(),
            status: None,
            should_quit: false,
            theme: Theme::default(),
            list_options,
            render_options,
            clipboard,
        }
    }

    /// Build the app from configuration, copying through the system clipboard.
    pub fn from_config(config: &Config) -> Self {
        let clipboard = NativeClipboard::new(config.clipboard.backend);
        let mut app = Self::new(
            config.list_options(),
            config.render_options(),
            Box::new(clipboard),
        );
        app.theme = Theme::from_config(&config.tui);
        app
    }

    pub fn clipboard_name(&self) -> &str {
        self.clipboard.name()
    }

    /// Open the folder prompt, prefilled with the current root.
    pub fn open_prompt(&mut self) {
        self.path_input = self
            .root
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.mode = Mode::Prompt;
    }

    /// Close the prompt without doing anything.
    pub fn cancel_prompt(&mut self) {
        self.path_input.clear();
        self.mode = Mode::Normal;
    }

    /// List the typed folder. Empty input behaves like a cancel.
    pub fn submit_prompt(&mut self) {
        let input = std::mem::take(&mut self.path_input);
        self.mode = Mode::Normal;

        let input = input.trim();
        if input.is_empty() {
            return;
        }
        self.select_folder(expand_home(input));
    }

    /// List `path` and replace the view on success. On failure the view
    /// is left as it was and the error goes to the status line.
    pub fn select_folder(&mut self, path: PathBuf) {
        let options = self.list_options.clone().with_files(self.include_files);
        tracing::debug!(path = %path.display(), ?options, "Listing from TUI");

        match list_tree_with(&path, &options) {
            Ok(listing) => {
                let count = listing.lines.len();
                let skipped = listing.skipped.len();
                self.view.populate(listing.lines);
                self.scroll = 0;
                self.status = Some(if skipped > 0 {
                    StatusMessage::new(
                        StatusLevel::Warning,
                        format!(
                            "Listed {} lines, skipped {} unreadable folder{}",
                            count,
                            skipped,
                            if skipped == 1 { "" } else { "s" }
                        ),
                    )
                } else {
                    StatusMessage::new(
                        StatusLevel::Info,
                        format!("Listed {} lines from {}", count, path.display()),
                    )
                });
                self.root = Some(path);
            }
            Err(err) => {
                self.status = Some(StatusMessage::new(
                    StatusLevel::Error,
                    format!("Cannot list folder: {}", err),
                ));
            }
        }
    }

    /// List the current root again.
    pub fn relist(&mut self) {
        match self.root.clone() {
            Some(root) => self.select_folder(root),
            None => {
                self.status = Some(StatusMessage::new(
                    StatusLevel::Info,
                    "No folder selected. Press 'o' to choose one",
                ));
            }
        }
    }

    pub fn toggle_files(&mut self) {
        self.include_files = !self.include_files;
        self.status = Some(StatusMessage::new(
            StatusLevel::Info,
            if self.include_files {
                "Files will be included in the next listing"
            } else {
                "Only folders will be listed"
            },
        ));
    }

    /// Export the displayed text as RTF to the clipboard.
    pub fn copy_to_clipboard(&mut self) {
        if self.view.is_empty() {
            self.status = Some(StatusMessage::new(StatusLevel::Warning, "Nothing to copy"));
            return;
        }

        let lines = self.view.read_lines();
        self.status = Some(
            match export_rtf(&lines, &self.render_options, self.clipboard.as_mut()) {
                Ok(report) if report.substituted > 0 => StatusMessage::new(
                    StatusLevel::Warning,
                    format!(
                        "Copied {} lines as RTF; {} characters replaced with '?'",
                        report.paragraphs, report.substituted
                    ),
                ),
                Ok(report) => StatusMessage::new(
                    StatusLevel::Info,
                    format!(
                        "Copied {} lines as RTF ({} bytes)",
                        report.paragraphs, report.bytes
                    ),
                ),
                Err(err) => StatusMessage::new(StatusLevel::Error, format!("Copy failed: {}", err)),
            },
        );
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.view.len().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.view.len().saturating_sub(1);
    }
}

fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    Path::new(input).to_path_buf()
}
