//! Todo command - create a new todo record

use anyhow::Result;
use owo_colors::{OwoColorize, Stream::Stdout};

use squads::config::ProjectLayout;
use squads::error::SquadsError;
use squads::git::Git;
use squads::todo::create::create_todo;

/// Execute the todo command
pub fn execute(layout: &ProjectLayout, todo_name: Option<&str>) -> Result<()> {
    let name = todo_name.ok_or(SquadsError::Usage { command: "todo" })?;

    let git = Git::new(layout.root());
    let path = create_todo(layout, name, &git)?;

    println!(
        "{} {}",
        "Created todo:".if_supports_color(Stdout, |text| text.green()),
        path.display()
    );
    Ok(())
}
