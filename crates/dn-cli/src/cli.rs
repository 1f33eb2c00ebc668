//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Diggernaut API client.
///
/// Manages projects and diggers and retrieves session results from the
/// Diggernaut scraping platform.
#[derive(Debug, Parser)]
#[command(name = "dn", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage projects.
    #[command(subcommand)]
    Projects(ProjectsAction),

    /// Manage diggers.
    #[command(subcommand)]
    Diggers(DiggersAction),

    /// Inspect digger sessions and their scraped data.
    #[command(subcommand)]
    Sessions(SessionsAction),
}

/// Project operations.
#[derive(Debug, Subcommand)]
pub enum ProjectsAction {
    /// List all projects.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show one project.
    Get {
        id: u64,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Create a project.
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Update a project (partial unless --replace).
    Update {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Fetch the project and send every field back (PUT).
        #[arg(long)]
        replace: bool,
    },

    /// Delete a project.
    Delete { id: u64 },
}

/// Digger operations.
#[derive(Debug, Subcommand)]
pub enum DiggersAction {
    /// List the diggers of a project.
    List {
        /// Project ID.
        project: u64,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show one digger.
    Get {
        id: u64,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Create a digger in a project.
    Create {
        /// Project ID.
        project: u64,

        #[command(flatten)]
        fields: DiggerFieldArgs,
    },

    /// Update a digger (partial unless --replace).
    Update {
        id: u64,

        #[command(flatten)]
        fields: DiggerFieldArgs,

        /// Fetch the digger and send every field back (PUT).
        #[arg(long)]
        replace: bool,
    },

    /// Delete a digger.
    Delete { id: u64 },
}

/// Writable digger fields.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DiggerFieldArgs {
    #[arg(long)]
    pub name: Option<String>,

    /// Start URL.
    #[arg(long)]
    pub url: Option<String>,

    /// Scraper configuration text.
    #[arg(long)]
    pub scraper_config: Option<String>,

    /// Schedule window start (e.g., 2026-01-15T10:30:00Z).
    #[arg(long)]
    pub schedule_from: Option<String>,

    /// Schedule window end.
    #[arg(long)]
    pub schedule_to: Option<String>,
}

/// Session operations.
#[derive(Debug, Subcommand)]
pub enum SessionsAction {
    /// List the sessions of a digger.
    List {
        /// Digger ID.
        digger: u64,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show one session.
    Get {
        /// Digger ID.
        digger: u64,

        /// Session ID.
        session: u64,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the data scraped in a session as JSON.
    Data {
        /// Digger ID.
        digger: u64,

        /// Session ID.
        session: u64,
    },
}
