//! Todo records: markdown files named `§<name>.md`

pub mod complete;
pub mod create;
pub mod matcher;

use crate::config::{TODO_EXTENSION, TODO_MARKER};

/// File name of the todo record called `name`
pub fn todo_file_name(name: &str) -> String {
    format!("{}{}{}", TODO_MARKER, name, TODO_EXTENSION)
}

/// Initial content of a new todo record
pub fn render_template(name: &str) -> String {
    format!(
        "{}{}\n\n## overview\n\n## user journey\n\n## tech spec\n",
        TODO_MARKER, name
    )
}
