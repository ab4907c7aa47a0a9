//! Integration tests for the TUI module.
//!
//! These tests exercise the TUI with simulated input and an in-memory
//! clipboard, verifying behavior without requiring an actual terminal.

use std::fs;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dirlist::clipboard::{ClipboardSink, MemoryClipboard};
use dirlist::error::ClipboardError;
use dirlist::lister::{Category, ListOptions};
use dirlist::rtf::{RenderOptions, RTF_HEADER};
use dirlist::tui::app::{Mode, StatusLevel};
use dirlist::tui::event::handle_key_event;
use dirlist::tui::ui::render;
use dirlist::tui::App;
use ratatui::{backend::TestBackend, Terminal};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::{tempdir, TempDir};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key_event(app, key_char(c));
    }
}

/// Clipboard whose contents stay visible to the test after the app owns it.
#[derive(Clone, Default)]
struct SharedClipboard {
    inner: Rc<RefCell<MemoryClipboard>>,
}

impl ClipboardSink for SharedClipboard {
    fn name(&self) -> &str {
        "shared"
    }

    fn set_rtf(&mut self, data: &[u8]) -> Result<(), ClipboardError> {
        self.inner.borrow_mut().set_rtf(data)
    }
}

fn create_example_tree() -> TempDir {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("B")).unwrap();
    fs::create_dir(temp.path().join("a")).unwrap();
    fs::write(temp.path().join("a/x.txt"), "x").unwrap();
    fs::write(temp.path().join("z.txt"), "z").unwrap();
    temp
}

fn app_with(clipboard: impl ClipboardSink + 'static) -> App {
    App::new(
        ListOptions::default(),
        RenderOptions::default(),
        Box::new(clipboard),
    )
}

fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal.draw(|frame| render(app, frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut output = String::new();

    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            output.push_str(buffer[(x, y)].symbol());
        }
        output.push('\n');
    }

    output
}

#[test]
fn test_select_folder_through_prompt() {
    let temp = create_example_tree();
    let mut app = app_with(MemoryClipboard::new());

    handle_key_event(&mut app, key_char('o'));
    type_text(&mut app, &temp.path().display().to_string());
    handle_key_event(&mut app, key(KeyCode::Enter));

    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.root.as_deref(), Some(temp.path()));
    assert_eq!(app.view.read_lines(), vec!["a/", "B/"]);
    assert_eq!(app.status.as_ref().unwrap().level, StatusLevel::Info);
}

#[test]
fn test_include_files_applies_to_next_listing() {
    let temp = create_example_tree();
    let mut app = app_with(MemoryClipboard::new());

    app.select_folder(temp.path().to_path_buf());
    assert_eq!(app.view.len(), 2);

    handle_key_event(&mut app, key_char('f'));
    // The current view is untouched until the folder is listed again.
    assert_eq!(app.view.len(), 2);

    handle_key_event(&mut app, key_char('r'));
    assert_eq!(app.view.read_lines(), vec!["a/", "\tx.txt", "B/", "z.txt"]);
    let categories: Vec<_> = app.view.rows().iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::Folder,
            Category::File,
            Category::Folder,
            Category::File
        ]
    );
}

#[test]
fn test_failed_listing_keeps_view_and_reports_error() {
    let temp = create_example_tree();
    let mut app = app_with(MemoryClipboard::new());
    app.select_folder(temp.path().to_path_buf());

    app.select_folder(temp.path().join("does-not-exist"));

    let status = app.status.as_ref().unwrap();
    assert_eq!(status.level, StatusLevel::Error);
    assert!(status.text.contains("Path not found"));
    assert_eq!(app.view.read_lines(), vec!["a/", "B/"]);
    assert_eq!(app.root.as_deref(), Some(temp.path()));
}

#[test]
fn test_cancelled_prompt_does_nothing() {
    let temp = create_example_tree();
    let mut app = app_with(MemoryClipboard::new());

    handle_key_event(&mut app, key_char('o'));
    type_text(&mut app, &temp.path().display().to_string());
    handle_key_event(&mut app, key(KeyCode::Esc));

    assert!(app.root.is_none());
    assert!(app.view.is_empty());
    assert!(app.status.is_none());
}

#[test]
fn test_copy_puts_rtf_on_clipboard() {
    let temp = create_example_tree();
    let clipboard = SharedClipboard::default();
    let mut app = app_with(clipboard.clone());
    app.include_files = true;
    app.select_folder(temp.path().to_path_buf());

    handle_key_event(&mut app, key_char('c'));

    let inner = clipboard.inner.borrow();
    let bytes = inner.contents().expect("clipboard should hold RTF");
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with(RTF_HEADER));
    assert!(text.contains("\\b\\cf1 a/\\b0\\par\n\\cf0     x.txt\\par\n"));
    assert!(text.ends_with("\\cf0 z.txt\\par\n}"));
    assert_eq!(app.status.as_ref().unwrap().level, StatusLevel::Info);
}

#[test]
fn test_copy_failure_is_reported() {
    let temp = create_example_tree();
    let mut app = app_with(MemoryClipboard::failing());
    app.select_folder(temp.path().to_path_buf());

    handle_key_event(&mut app, key_char('c'));

    let status = app.status.as_ref().unwrap();
    assert_eq!(status.level, StatusLevel::Error);
    assert!(status.text.starts_with("Copy failed"));
    // The app keeps running and the view is intact.
    assert!(!app.should_quit);
    assert_eq!(app.view.len(), 2);
}

#[test]
fn test_render_listing() {
    let temp = create_example_tree();
    let mut app = app_with(MemoryClipboard::new());
    app.include_files = true;
    app.select_folder(temp.path().to_path_buf());

    let output = render_to_string(&app, 80, 16);
    assert!(output.contains("Directory Lister"));
    assert!(output.contains("[x] Include files"));
    assert!(output.contains("a/"));
    assert!(output.contains("    x.txt"));
    assert!(output.contains("z.txt"));
    assert!(!output.contains('\t'));
}

#[test]
fn test_render_empty_and_overlays() {
    let mut app = app_with(MemoryClipboard::new());
    let output = render_to_string(&app, 80, 24);
    assert!(output.contains("Press 'o' to select a folder"));
    assert!(output.contains("[ ] Include files"));

    app.mode = Mode::Prompt;
    app.path_input = "/home/user".to_string();
    let output = render_to_string(&app, 80, 24);
    assert!(output.contains("Select Folder"));
    assert!(output.contains("/home/user"));

    app.mode = Mode::Help;
    let output = render_to_string(&app, 80, 30);
    assert!(output.contains("Copy listing as RTF"));
}

#[test]
fn test_render_scrolls() {
    let temp = tempdir().unwrap();
    for i in 0..30 {
        fs::create_dir(temp.path().join(format!("dir{:02}", i))).unwrap();
    }
    let mut app = app_with(MemoryClipboard::new());
    app.select_folder(temp.path().to_path_buf());

    handle_key_event(&mut app, key(KeyCode::PageDown));
    let output = render_to_string(&app, 60, 12);
    assert!(output.contains("dir20/"));
    assert!(!output.contains("dir00/"));
}

#[test]
fn test_overlays_fit_tiny_terminal() {
    let mut app = app_with(MemoryClipboard::new());
    app.mode = Mode::Prompt;
    app.path_input = "/a/rather/long/path/that/does/not/fit".to_string();

    for (width, height) in [(40, 2), (40, 1), (3, 5), (1, 1)] {
        render_to_string(&app, width, height);
    }

    app.mode = Mode::Help;
    for (width, height) in [(40, 2), (5, 3), (1, 1)] {
        render_to_string(&app, width, height);
    }
}
