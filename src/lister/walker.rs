use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{ListerError, Result};

use super::line::ListingLine;
use super::options::{ListOptions, SubdirErrorPolicy};
use super::order::compare_siblings;

/// A subtree whose contents were left out of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDir {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of a full listing: the ordered lines plus anything skipped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Listing {
    pub lines: Vec<ListingLine>,
    pub skipped: Vec<SkippedDir>,
}

/// List `root` with default options, returning only the lines.
pub fn list_tree(root: &Path, include_files: bool) -> Result<Vec<ListingLine>> {
    let options = ListOptions::new().with_files(include_files);
    list_tree_with(root, &options).map(|listing| listing.lines)
}

/// Walk `root` depth-first and produce one line per folder (and per file
/// when requested), siblings ordered directories first and then by
/// case-insensitive name.
///
/// A root that cannot be enumerated is always an error. Failures below the
/// root follow `options.on_subdir_error`.
pub fn list_tree_with(root: &Path, options: &ListOptions) -> Result<Listing> {
    check_root(root)?;

    let follow = options.follow_symlinks;
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(follow)
        .same_file_system(options.one_file_system)
        .sort_by(move |a, b| {
            let a_name = a.file_name().to_string_lossy();
            let b_name = b.file_name().to_string_lossy();
            compare_siblings(
                sorts_as_dir(a, follow),
                &a_name,
                sorts_as_dir(b, follow),
                &b_name,
            )
        });

    if let Some(depth) = options.max_depth {
        // walkdir counts the root as depth 0, its children as 1
        walker = walker.max_depth(depth + 1);
    }

    let mut listing = Listing::default();

    for result in walker {
        match result {
            Ok(entry) => {
                let depth = entry.depth() - 1;
                let name = entry.file_name().to_string_lossy();
                if entry.file_type().is_dir() {
                    listing.lines.push(ListingLine::folder(&name, depth));
                } else if options.include_files {
                    listing.lines.push(ListingLine::file(&name, depth));
                }
            }
            Err(err) => handle_walk_error(err, options, &mut listing)?,
        }
    }

    tracing::debug!(
        root = %root.display(),
        lines = listing.lines.len(),
        skipped = listing.skipped.len(),
        "Listing complete"
    );

    Ok(listing)
}

fn check_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|e| ListerError::from_io(root, e))?;
    if !metadata.is_dir() {
        return Err(ListerError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|e| ListerError::from_io(root, e))?;
    Ok(())
}

/// The sorter sees entries before links are resolved, so symlinks are
/// tested against their target here.
fn sorts_as_dir(entry: &walkdir::DirEntry, follow: bool) -> bool {
    if follow && entry.path_is_symlink() {
        entry.path().is_dir()
    } else {
        entry.file_type().is_dir()
    }
}

fn handle_walk_error(
    err: walkdir::Error,
    options: &ListOptions,
    listing: &mut Listing,
) -> Result<()> {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();

    if err.depth() == 0 {
        return Err(root_error(path, err));
    }

    let depth = err.depth() - 1;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if err.loop_ancestor().is_some() {
        tracing::warn!(path = %path.display(), "Not descending into filesystem loop");
        listing.lines.push(ListingLine::folder(&name, depth));
        listing.skipped.push(SkippedDir {
            path,
            reason: "filesystem loop".to_string(),
        });
        return Ok(());
    }

    if is_broken_symlink(&err, &path) {
        // A dangling link is not a directory, so it is listed like a file.
        if options.include_files {
            listing.lines.push(ListingLine::file(&name, depth));
        }
        return Ok(());
    }

    apply_subdir_policy(options.on_subdir_error, path, err, listing)
}

fn apply_subdir_policy(
    policy: SubdirErrorPolicy,
    path: PathBuf,
    err: walkdir::Error,
    listing: &mut Listing,
) -> Result<()> {
    match policy {
        SubdirErrorPolicy::Skip => {
            tracing::warn!(path = %path.display(), error = %err, "Skipping unreadable directory");
            listing.skipped.push(SkippedDir {
                path,
                reason: err.to_string(),
            });
            Ok(())
        }
        SubdirErrorPolicy::Abort => Err(ListerError::Walk { path, source: err }),
    }
}

fn is_broken_symlink(err: &walkdir::Error, path: &Path) -> bool {
    let not_found = err
        .io_error()
        .map_or(false, |e| e.kind() == ErrorKind::NotFound);
    not_found
        && fs::symlink_metadata(path)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false)
}

fn root_error(path: PathBuf, err: walkdir::Error) -> ListerError {
    match err.io_error().map(|e| e.kind()) {
        Some(ErrorKind::NotFound) => ListerError::PathNotFound(path),
        Some(ErrorKind::PermissionDenied) => ListerError::PermissionDenied(path),
        _ => ListerError::Walk { path, source: err },
    }
}
