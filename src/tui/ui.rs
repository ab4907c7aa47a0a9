//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::lister::Category;
use crate::rtf::expand_tabs;

use super::app::{App, Mode, StatusLevel};

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Listing
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_listing(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    match app.mode {
        Mode::Prompt => render_prompt_overlay(app, frame),
        Mode::Help => render_help_overlay(frame),
        Mode::Normal => {}
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let path_display = app
        .root
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "No folder selected".to_string());

    let files_flag = if app.include_files { "[x]" } else { "[ ]" };
    let header_text = format!(" {}  │  {} Include files", path_display, files_flag);

    let block = Block::default()
        .title(" Directory Lister ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(header_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_listing(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if app.view.is_empty() {
        let message = if app.root.is_none() {
            "Press 'o' to select a folder"
        } else {
            "Nothing to list"
        };

        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));

        frame.render_widget(paragraph, area);
        return;
    }

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .view
        .rows()
        .iter()
        .skip(app.scroll)
        .take(inner_area.height as usize)
        .map(|row| {
            let style = match row.category {
                Category::Folder => app.theme.folder,
                Category::File => app.theme.file,
            };
            // Terminals render tabs inconsistently; the stored text keeps them.
            Line::styled(expand_tabs(&row.text).into_owned(), style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner_area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal => {
            "[o] Open folder  [f] Files  [c] Copy RTF  [r] Relist  [↑↓] Scroll  [?] Help  [q] Quit"
        }
        Mode::Prompt => "[Enter] List  [Esc] Cancel",
        Mode::Help => "[Esc] Close",
    };

    let (text, color) = match &app.status {
        Some(status) => (
            status.text.as_str(),
            match status.level {
                StatusLevel::Info => Color::Green,
                StatusLevel::Warning => Color::Yellow,
                StatusLevel::Error => Color::Red,
            },
        ),
        None => (hints, Color::DarkGray),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_prompt_overlay(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let prompt_area = Rect {
        x: 2,
        y: area.height.saturating_sub(6),
        width: area.width.saturating_sub(4).min(70),
        height: 3,
    }
    .intersection(area);

    frame.render_widget(Clear, prompt_area);

    let block = Block::default()
        .title(" Select Folder ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(app.path_input.as_str())
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, prompt_area);

    // No room for the input line inside the borders.
    if prompt_area.height < 3 || prompt_area.width < 3 {
        return;
    }

    let max_x = prompt_area.right().saturating_sub(2);
    frame.set_cursor_position(Position::new(
        (prompt_area.x + app.path_input.chars().count() as u16 + 1).min(max_x),
        prompt_area.y + 1,
    ));
}

fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let help_width = 52u16.min(area.width.saturating_sub(8));
    let help_height = 19u16.min(area.height.saturating_sub(4));
    let help_area = Rect {
        x: (area.width.saturating_sub(help_width)) / 2,
        y: (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    }
    .intersection(area);

    frame.render_widget(Clear, help_area);

    let help_text = r#"
 LISTING
 ─────────────────────────────────
 o          Select folder to list
 f          Toggle include files
 r          List current folder again
 c          Copy listing as RTF

 SCROLLING
 ─────────────────────────────────
 ↑/k ↓/j    Scroll one line
 PgUp/PgDn  Scroll one page
 g/G        Top / bottom

 ?          Toggle this help
 q/Esc      Quit
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, help_area);
}
