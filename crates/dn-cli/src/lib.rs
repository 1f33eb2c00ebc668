//! Diggernaut CLI library.
//!
//! This crate provides the `dn` command-line interface over `dn-api`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, DiggerFieldArgs, DiggersAction, ProjectsAction, SessionsAction};
pub use config::Config;
