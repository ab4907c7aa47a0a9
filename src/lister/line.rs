use serde::Serialize;

/// Marker appended to folder names. It is a display marker, not a path
/// separator, so it is the same on every platform.
pub const FOLDER_MARKER: char = '/';

/// One indentation unit per depth level.
pub const INDENT: char = '\t';

/// Whether a listing line names a folder or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Folder,
    File,
}

impl Category {
    /// Derive the category from displayed text: a line is a folder if,
    /// with surrounding whitespace removed, it ends with the folder marker.
    pub fn classify(text: &str) -> Self {
        if text.trim().ends_with(FOLDER_MARKER) {
            Category::Folder
        } else {
            Category::File
        }
    }
}

/// A single line of a directory listing, indentation included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingLine {
    text: String,
    category: Category,
    depth: usize,
}

impl ListingLine {
    pub fn folder(name: &str, depth: usize) -> Self {
        let mut text = indentation(depth, name.len() + 1);
        text.push_str(name);
        text.push(FOLDER_MARKER);
        Self {
            text,
            category: Category::Folder,
            depth,
        }
    }

    pub fn file(name: &str, depth: usize) -> Self {
        let mut text = indentation(depth, name.len());
        text.push_str(name);
        Self {
            text,
            category: Category::File,
            depth,
        }
    }

    /// The full line text as displayed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Nesting depth relative to the listed root (its children are 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_folder(&self) -> bool {
        self.category == Category::Folder
    }
}

fn indentation(depth: usize, extra: usize) -> String {
    let mut text = String::with_capacity(depth + extra);
    text.extend(std::iter::repeat(INDENT).take(depth));
    text
}
