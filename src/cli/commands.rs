//! CLI subcommand definitions

use clap::{Args, Subcommand};

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Show records grouped by month (default)
    Timeline,
    /// Show all records as a flat list, newest first
    List,
    /// Show the available record types
    Types,
    /// Add one record through the capture form, then show the timeline
    Add(AddArgs),
    /// Interactive session reading commands from stdin
    Session,
}

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Record type (operation, medication, rehabilitation, document)
    #[arg(value_name = "TYPE")]
    pub(crate) record_type: String,

    /// Record title
    #[arg(short, long)]
    pub(crate) title: String,

    /// Record date (YYYYMMDD, YYYY-MM-DD, today or yesterday)
    #[arg(short, long)]
    pub(crate) date: String,

    /// Optional free-text description
    #[arg(short = 'm', long)]
    pub(crate) description: Option<String>,
}
