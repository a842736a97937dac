//! Project layout and paths

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix that marks a markdown file as a todo record
pub const TODO_MARKER: char = '§';

/// Extension of todo record files
pub const TODO_EXTENSION: &str = ".md";

/// Resolve the project root: the explicit `--project-root` if given,
/// otherwise the current working directory.
///
/// The result is absolute, since git runs inside the root and is handed
/// paths built from it. An explicit root must be an existing directory.
pub fn resolve_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let root = match explicit {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().context("Could not determine current directory")?,
    };

    let root = fs::canonicalize(&root)
        .with_context(|| format!("Project root does not exist: {}", root.display()))?;
    if !root.is_dir() {
        bail!("Project root is not a directory: {}", root.display());
    }
    Ok(root)
}

/// Paths of the squads scaffold, relative to a project root
///
/// ```text
/// <root>/squads/
///   next.md
///   endgame.md
///   todo/          open todos (§name.md)
///     backlogs/
///     done/        completed todos
/// ```
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn squads_dir(&self) -> PathBuf {
        self.root.join("squads")
    }

    /// The open location
    pub fn todo_dir(&self) -> PathBuf {
        self.squads_dir().join("todo")
    }

    pub fn backlogs_dir(&self) -> PathBuf {
        self.todo_dir().join("backlogs")
    }

    /// The done location
    pub fn done_dir(&self) -> PathBuf {
        self.todo_dir().join("done")
    }

    pub fn next_md(&self) -> PathBuf {
        self.squads_dir().join("next.md")
    }

    pub fn endgame_md(&self) -> PathBuf {
        self.squads_dir().join("endgame.md")
    }

    /// Directories the scaffold needs, parents first
    pub fn scaffold_dirs(&self) -> [PathBuf; 4] {
        [
            self.squads_dir(),
            self.todo_dir(),
            self.backlogs_dir(),
            self.done_dir(),
        ]
    }
}
