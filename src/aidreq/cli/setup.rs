use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aidreq", bin_name = "aidreq", version)]
#[command(about = "Track item requests from submission to completion", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print JSON instead of tables
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a new item request
    #[command(alias = "n", display_order = 1)]
    Create {
        /// Who is asking (3 to 30 characters)
        name: String,

        /// What they are asking for (2 to 100 characters)
        item: String,

        /// Approve the request right away
        #[arg(long)]
        approve: bool,
    },

    /// List requests, newest first
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only show requests in this status (pending, approved, completed, rejected)
        #[arg(short, long)]
        status: Option<String>,

        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },

    /// Change the status of a request
    #[command(alias = "edit", display_order = 3)]
    SetStatus {
        /// Request id
        id: String,

        /// New status (pending, approved, completed, rejected)
        status: String,
    },

    /// Show a single request
    #[command(alias = "v", display_order = 4)]
    View {
        /// Request id
        id: String,
    },

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Configuration key (page-size, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
