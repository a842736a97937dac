//! Init command - create the squads/ layout

use anyhow::Result;
use owo_colors::{OwoColorize, Stream::Stdout};
use std::path::Path;

use squads::config::ProjectLayout;
use squads::scaffold;

/// Execute the init command
pub fn execute(layout: &ProjectLayout) -> Result<()> {
    let report = scaffold::initialize(layout)?;

    for dir in &report.created_dirs {
        print_created(&format!("{}/", relative(layout, dir).display()));
    }
    for dir in &report.existing_dirs {
        print_exists(&format!("{}/", relative(layout, dir).display()));
    }

    let next_md = relative(layout, &layout.next_md()).display().to_string();
    if report.next_md_created {
        print_created(&next_md);
    } else {
        print_exists(&next_md);
    }

    println!(
        "{} {}",
        "Wrote:".if_supports_color(Stdout, |text| text.yellow()),
        relative(layout, &report.endgame_md).display()
    );

    Ok(())
}

fn print_created(item: &str) {
    println!(
        "{} {}",
        "Created:".if_supports_color(Stdout, |text| text.green()),
        item
    );
}

fn print_exists(item: &str) {
    println!(
        "{} {}",
        "Exists:".if_supports_color(Stdout, |text| text.dimmed()),
        item
    );
}

fn relative<'a>(layout: &ProjectLayout, path: &'a Path) -> &'a Path {
    path.strip_prefix(layout.root()).unwrap_or(path)
}
