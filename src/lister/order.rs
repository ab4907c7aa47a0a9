//! Sibling ordering: directories first, then case-insensitive name.

use std::cmp::Ordering;

/// Compare two siblings. The raw name breaks ties between names that only
/// differ in case, so the order never depends on enumeration order.
pub fn compare_siblings(a_is_dir: bool, a_name: &str, b_is_dir: bool, b_name: &str) -> Ordering {
    b_is_dir
        .cmp(&a_is_dir)
        .then_with(|| a_name.to_lowercase().cmp(&b_name.to_lowercase()))
        .then_with(|| a_name.cmp(b_name))
}
