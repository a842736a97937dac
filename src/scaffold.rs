//! Project scaffold for the squads workflow

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing::debug;

use crate::config::ProjectLayout;

/// Onboarding prompt written to `squads/endgame.md`
pub const ENDGAME_TEMPLATE: &str = "_who are using this project?_

_what are the users trying to achieve with this project?_

_how does this project help them better with achieving their goal compared to other similar projects?_
";

/// What [`initialize`] changed
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    /// Directories that did not exist before
    pub created_dirs: Vec<PathBuf>,
    /// Directories that were already there
    pub existing_dirs: Vec<PathBuf>,
    pub next_md_created: bool,
    /// Always set: `endgame.md` is rewritten on every run
    pub endgame_md: PathBuf,
}

/// Create the squads layout under the project root. Safe to re-run.
///
/// `next.md` is only touched, so notes in it survive. `endgame.md` is
/// rewritten with [`ENDGAME_TEMPLATE`] every time, dropping local edits.
pub fn initialize(layout: &ProjectLayout) -> Result<ScaffoldReport> {
    let mut report = ScaffoldReport::default();

    for dir in layout.scaffold_dirs() {
        if dir.is_dir() {
            report.existing_dirs.push(dir);
            continue;
        }
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        debug!(dir = %dir.display(), "created directory");
        report.created_dirs.push(dir);
    }

    let next_md = layout.next_md();
    report.next_md_created = !next_md.exists();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&next_md)
        .with_context(|| format!("Failed to touch {}", next_md.display()))?;

    let endgame_md = layout.endgame_md();
    fs::write(&endgame_md, ENDGAME_TEMPLATE)
        .with_context(|| format!("Failed to write {}", endgame_md.display()))?;
    debug!(path = %endgame_md.display(), "wrote endgame template");
    report.endgame_md = endgame_md;

    Ok(report)
}
