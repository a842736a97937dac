//! Move a finished todo record into the done location

use fs_extra::file::{self, CopyOptions};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::matcher::{find_matches, TodoListing};
use crate::config::ProjectLayout;
use crate::error::SquadsError;
use crate::git::VersionControl;

/// A todo record that was moved to done
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTodo {
    pub file_name: String,
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Find the single open todo whose file name contains `query`, move it
/// to `done/` and commit both sides of the move.
///
/// Zero or several matches fail without touching anything. Git is only
/// called after the move succeeded.
///
/// An empty `query` is a usage error rather than a substring of every
/// file name, so `squads done ""` can never pick a todo by accident.
pub fn complete_todo(
    layout: &ProjectLayout,
    query: &str,
    listing: &dyn TodoListing,
    vcs: &dyn VersionControl,
) -> Result<CompletedTodo, SquadsError> {
    if query.is_empty() {
        return Err(SquadsError::Usage { command: "done" });
    }

    let todo_dir = layout.todo_dir();
    let done_dir = layout.done_dir();

    fs::create_dir_all(&done_dir)
        .map_err(|e| SquadsError::io("Failed to create", &done_dir, e))?;

    let mut matched = find_matches(listing, &todo_dir, query)
        .map_err(|e| SquadsError::io("Failed to read", &todo_dir, e))?;

    let file_name = match matched.len() {
        0 => {
            return Err(SquadsError::NoMatch {
                query: query.to_string(),
            })
        }
        1 => matched.remove(0),
        _ => {
            return Err(SquadsError::AmbiguousMatch {
                query: query.to_string(),
                matches: matched,
            })
        }
    };

    let from = todo_dir.join(&file_name);
    let to = done_dir.join(&file_name);

    let mut options = CopyOptions::new();
    options.overwrite = true;
    file::move_file(&from, &to, &options).map_err(|source| SquadsError::Move {
        file_name: file_name.clone(),
        source,
    })?;
    debug!(from = %from.display(), to = %to.display(), "moved todo");

    // Old path records the deletion, new path the addition
    vcs.stage(&from);
    vcs.stage(&to);
    vcs.commit(&format!("squads::done {}", query), false);

    Ok(CompletedTodo { file_name, from, to })
}
