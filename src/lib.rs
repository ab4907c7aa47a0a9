//! dirlist - List a directory tree and copy it as rich text
//!
//! This crate provides functionality for:
//! - Listing folders (and optionally files) under a directory as indented lines
//! - Rendering a listing as an RTF document
//! - Placing that document on the system clipboard
//! - Interactive TUI for browsing and copying listings

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod lister;
pub mod rtf;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use error::{ListerError, Result};
pub use lister::{list_tree, list_tree_with, Category, ListOptions, ListingLine};
pub use rtf::{render_rtf, RenderOptions};
