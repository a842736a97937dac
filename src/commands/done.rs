//! Done command - move a finished todo into done/

use anyhow::Result;
use owo_colors::{OwoColorize, Stream::Stdout};

use squads::config::ProjectLayout;
use squads::error::SquadsError;
use squads::git::Git;
use squads::todo::complete::complete_todo;
use squads::todo::matcher::FsListing;

/// Execute the done command
pub fn execute(layout: &ProjectLayout, todo_name: Option<&str>) -> Result<()> {
    let query = todo_name.ok_or(SquadsError::Usage { command: "done" })?;

    let git = Git::new(layout.root());
    let done = complete_todo(layout, query, &FsListing, &git)?;

    println!(
        "{} {} to done/",
        "Moved".if_supports_color(Stdout, |text| text.green()),
        done.file_name
    );
    Ok(())
}
