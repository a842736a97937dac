//! Finding open todo records by substring

use std::fs;
use std::io;
use std::path::Path;

use crate::config::{TODO_EXTENSION, TODO_MARKER};

/// Whether `file_name` names a todo record (`§...md`)
pub fn is_todo_file(file_name: &str) -> bool {
    file_name.starts_with(TODO_MARKER) && file_name.ends_with(TODO_EXTENSION)
}

/// Whether `file_name` is selected by the user's `substring`.
///
/// Plain substring test anywhere in the file name, marker and extension
/// included.
pub fn matches(file_name: &str, substring: &str) -> bool {
    file_name.contains(substring)
}

/// Lists the regular files directly inside a directory
pub trait TodoListing {
    fn file_names(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// [`TodoListing`] backed by the real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsListing;

impl TodoListing for FsListing {
    fn file_names(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // Follows symlinks; dangling links are skipped
            let is_file = fs::metadata(entry.path())
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            // Non UTF-8 names can never carry the marker
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }
}

/// Todo files in `dir` (non-recursive) whose names contain `substring`,
/// sorted by name
pub fn find_matches(
    listing: &dyn TodoListing,
    dir: &Path,
    substring: &str,
) -> io::Result<Vec<String>> {
    let mut matched: Vec<String> = listing
        .file_names(dir)?
        .into_iter()
        .filter(|name| is_todo_file(name) && matches(name, substring))
        .collect();
    matched.sort();
    Ok(matched)
}
