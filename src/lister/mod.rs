mod line;
mod options;
mod order;
mod walker;

pub use line::{Category, ListingLine, FOLDER_MARKER, INDENT};
pub use options::{ListOptions, SubdirErrorPolicy};
pub use order::compare_siblings;
pub use walker::{list_tree, list_tree_with, Listing, SkippedDir};
