//! Errors of the todo operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a todo operation. Version control problems are not errors;
/// see [`crate::git::GitOutcome`].
#[derive(Debug, Error)]
pub enum SquadsError {
    #[error("todo_name is required\nUsage: squads {command} <todo_name>")]
    Usage { command: &'static str },

    #[error("Todo file '{file_name}' already exists")]
    AlreadyExists { file_name: String },

    #[error("No files match '{query}'")]
    NoMatch { query: String },

    #[error("Multiple files match '{query}':{}", format_matches(.matches))]
    AmbiguousMatch { query: String, matches: Vec<String> },

    #[error("Failed to move file: {source}")]
    Move {
        file_name: String,
        #[source]
        source: fs_extra::error::Error,
    },

    #[error("{context} {}: {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SquadsError {
    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }
}

fn format_matches(matches: &[String]) -> String {
    matches.iter().map(|m| format!("\n  - {m}")).collect()
}
