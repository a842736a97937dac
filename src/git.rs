//! Best-effort git integration
//!
//! Filesystem changes are the primary effect of every command and have
//! already happened by the time git is called. A failing `git add` or
//! `git commit` is therefore reported as a warning and returned as a
//! [`GitOutcome`], never as an error.

use owo_colors::{OwoColorize, Stream::Stderr};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Result of a single version control call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitOutcome {
    Ok,
    /// Commit had nothing staged. Benign; callers should not escalate it.
    NothingToCommit,
    Failed(String),
}

impl GitOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, GitOutcome::Ok)
    }
}

/// Stage and commit operations used by the todo commands
pub trait VersionControl {
    /// Add `path` to the pending change set
    fn stage(&self, path: &Path) -> GitOutcome;

    /// Create a commit from whatever is staged
    fn commit(&self, message: &str, allow_empty: bool) -> GitOutcome;

    /// Stage `path`, then commit only if staging succeeded
    fn stage_and_commit(&self, path: &Path, message: &str) -> GitOutcome {
        match self.stage(path) {
            GitOutcome::Ok => self.commit(message, false),
            failed => failed,
        }
    }
}

/// `git` subprocess wrapper running in a working directory
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn run(&self, args: &[&str]) -> std::io::Result<Output> {
        debug!(?args, workdir = %self.workdir.display(), "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
    }
}

impl VersionControl for Git {
    fn stage(&self, path: &Path) -> GitOutcome {
        let path_arg = path.to_string_lossy();
        let outcome = match self.run(&["add", &*path_arg]) {
            Ok(output) if output.status.success() => GitOutcome::Ok,
            Ok(output) => {
                GitOutcome::Failed(String::from_utf8_lossy(&output.stderr).into_owned())
            }
            Err(e) => GitOutcome::Failed(format!("could not run git: {}", e)),
        };

        if let GitOutcome::Failed(reason) = &outcome {
            eprintln!(
                "{} Failed to git add {}: {}",
                "Warning:".if_supports_color(Stderr, |text| text.yellow()),
                path.display(),
                reason.trim_end()
            );
        }
        outcome
    }

    fn commit(&self, message: &str, allow_empty: bool) -> GitOutcome {
        let mut args = vec!["commit", "-m", message];
        if allow_empty {
            args.push("--allow-empty");
        }

        let outcome = match self.run(&args) {
            Ok(output) => commit_outcome(&output),
            Err(e) => GitOutcome::Failed(format!("could not run git: {}", e)),
        };

        match &outcome {
            GitOutcome::Ok => {}
            GitOutcome::NothingToCommit => {
                eprintln!(
                    "{} Nothing to commit",
                    "Warning:".if_supports_color(Stderr, |text| text.yellow())
                );
            }
            GitOutcome::Failed(reason) => {
                eprintln!(
                    "{} Failed to git commit: {}",
                    "Warning:".if_supports_color(Stderr, |text| text.yellow()),
                    reason.trim_end()
                );
            }
        }
        outcome
    }
}

/// Classify a finished `git commit`
fn commit_outcome(output: &Output) -> GitOutcome {
    if output.status.success() {
        return GitOutcome::Ok;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    classify_commit_failure(&stdout, &stderr)
}

fn classify_commit_failure(stdout: &str, stderr: &str) -> GitOutcome {
    // git prints this on stdout, but some versions and hooks use stderr
    if stdout.contains("nothing to commit") || stderr.contains("nothing to commit") {
        GitOutcome::NothingToCommit
    } else {
        GitOutcome::Failed(stderr.to_string())
    }
}
