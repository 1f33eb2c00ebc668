//! CLI subcommand implementations.

pub mod diggers;
pub mod projects;
pub mod sessions;
mod util;

#[cfg(test)]
mod testing;
