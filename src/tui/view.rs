//! The listing pane's content.
//!
//! The view keeps what is on screen as `(text, category)` rows. Export
//! reads the raw text back out and never looks at the stored category.

use crate::lister::{Category, ListingLine};

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    pub text: String,
    pub category: Category,
}

/// Read-only text content of the listing pane.
#[derive(Debug, Clone, Default)]
pub struct ListingView {
    rows: Vec<ViewRow>,
}

impl ListingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the view, then insert `lines` in order, tagged by category.
    pub fn populate<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = ListingLine>,
    {
        self.rows.clear();
        self.rows.extend(lines.into_iter().map(|line| ViewRow {
            category: line.category(),
            text: line.text().to_string(),
        }));
    }

    pub fn rows(&self) -> &[ViewRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The full text as shown, one newline-terminated row per line.
    pub fn displayed_text(&self) -> String {
        let mut text = String::new();
        for row in &self.rows {
            text.push_str(&row.text);
            text.push('\n');
        }
        text
    }

    /// Split the displayed text back into lines.
    pub fn read_lines(&self) -> Vec<String> {
        self.displayed_text().lines().map(str::to_string).collect()
    }
}
