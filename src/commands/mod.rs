//! Subcommand implementations for the ghsearch and ghpr binaries

pub mod approve;
pub mod base;
pub mod code;
pub mod comment;
pub mod commits;
pub mod create;
pub mod repos;
pub mod validators;

pub use base::{Command, ConnectionArgs, PrSettings, PrTargetArgs};
