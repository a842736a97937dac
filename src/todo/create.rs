//! Create a todo record in the open location

use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::{render_template, todo_file_name};
use crate::config::ProjectLayout;
use crate::error::SquadsError;
use crate::git::VersionControl;

/// Write `§<name>.md` from the template and commit it.
///
/// The file write decides success. A failing git call only prints a
/// warning.
pub fn create_todo(
    layout: &ProjectLayout,
    name: &str,
    vcs: &dyn VersionControl,
) -> Result<PathBuf, SquadsError> {
    if name.is_empty() {
        return Err(SquadsError::Usage { command: "todo" });
    }

    let file_name = todo_file_name(name);
    let file_path = layout.todo_dir().join(&file_name);

    if file_path.exists() {
        return Err(SquadsError::AlreadyExists { file_name });
    }

    fs::write(&file_path, render_template(name))
        .map_err(|e| SquadsError::io("Failed to write", &file_path, e))?;
    debug!(path = %file_path.display(), "created todo");

    vcs.stage_and_commit(&file_path, &format!("squads::todo {}", name));

    Ok(file_path)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::git::GitOutcome;
    use std::cell::RefCell;
    use std::path::Path;

    /// Records every git call, optionally failing all of them
    #[derive(Default)]
    pub(crate) struct RecordingVcs {
        pub calls: RefCell<Vec<String>>,
        pub fail: bool,
    }

    impl RecordingVcs {
        fn outcome(&self) -> GitOutcome {
            if self.fail {
                GitOutcome::Failed("fatal: not a git repository".to_string())
            } else {
                GitOutcome::Ok
            }
        }
    }

    impl VersionControl for RecordingVcs {
        fn stage(&self, path: &Path) -> GitOutcome {
            self.calls
                .borrow_mut()
                .push(format!("add {}", path.display()));
            self.outcome()
        }

        fn commit(&self, message: &str, _allow_empty: bool) -> GitOutcome {
            self.calls.borrow_mut().push(format!("commit {}", message));
            self.outcome()
        }
    }

    fn project() -> (tempfile::TempDir, ProjectLayout) {
        let tmp = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(tmp.path());
        fs::create_dir_all(layout.todo_dir()).unwrap();
        (tmp, layout)
    }

    #[test]
    fn test_create_writes_template() {
        let (_tmp, layout) = project();
        let vcs = RecordingVcs::default();

        let path = create_todo(&layout, "login-flow", &vcs).unwrap();

        assert_eq!(path, layout.todo_dir().join("§login-flow.md"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "§login-flow\n\n## overview\n\n## user journey\n\n## tech spec\n"
        );
        assert_eq!(
            *vcs.calls.borrow(),
            vec![
                format!("add {}", path.display()),
                "commit squads::todo login-flow".to_string(),
            ]
        );
    }

    #[test]
    fn test_create_twice_keeps_first_file() {
        let (_tmp, layout) = project();
        let vcs = RecordingVcs::default();

        let path = create_todo(&layout, "login-flow", &vcs).unwrap();
        fs::write(&path, "edited").unwrap();
        vcs.calls.borrow_mut().clear();

        let err = create_todo(&layout, "login-flow", &vcs).unwrap_err();
        assert!(matches!(err, SquadsError::AlreadyExists { .. }));
        assert_eq!(err.to_string(), "Todo file '§login-flow.md' already exists");
        assert_eq!(fs::read_to_string(&path).unwrap(), "edited");
        assert!(vcs.calls.borrow().is_empty());
    }

    #[test]
    fn test_create_succeeds_when_git_fails() {
        let (_tmp, layout) = project();
        let vcs = RecordingVcs {
            fail: true,
            ..Default::default()
        };

        let path = create_todo(&layout, "offline", &vcs).unwrap();
        assert!(path.exists());
        // commit is skipped once staging failed
        assert_eq!(vcs.calls.borrow().len(), 1);
    }

    #[test]
    fn test_create_empty_name_is_usage_error() {
        let (_tmp, layout) = project();
        let vcs = RecordingVcs::default();

        let err = create_todo(&layout, "", &vcs).unwrap_err();
        assert!(matches!(err, SquadsError::Usage { command: "todo" }));
        assert_eq!(fs::read_dir(layout.todo_dir()).unwrap().count(), 0);
    }

    #[test]
    fn test_create_without_scaffold_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(tmp.path());
        let vcs = RecordingVcs::default();

        let err = create_todo(&layout, "early", &vcs).unwrap_err();
        assert!(matches!(err, SquadsError::Io { .. }));
        assert!(vcs.calls.borrow().is_empty());
    }
}
