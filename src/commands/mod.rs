//! CLI commands

pub mod done;
pub mod init;
pub mod todo;
