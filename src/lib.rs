//! squads library
//!
//! Markdown todo records kept under `squads/todo/`, created from a
//! template, moved to `squads/todo/done/` when finished, with each change
//! committed to git on a best-effort basis.

pub mod config;
pub mod error;
pub mod git;
pub mod scaffold;
pub mod todo;
