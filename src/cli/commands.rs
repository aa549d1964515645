//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todos")]
#[command(about = "Minimal terminal todo list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new todo workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Name of the collection to create
        #[arg(short, long, default_value = "todos")]
        name: String,
    },

    /// Add a todo
    Add {
        /// Title words (joined with spaces, then trimmed)
        #[arg(num_args = 1.., allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// List todos
    #[command(alias = "ls")]
    List {
        /// Only the todo with this id
        id: Option<String>,

        /// Only active todos
        #[arg(long, conflicts_with = "completed")]
        active: bool,

        /// Only completed todos
        #[arg(long)]
        completed: bool,

        /// Only todos with exactly this title
        #[arg(long)]
        title: Option<String>,
    },

    /// Mark a todo as completed
    Done { id: String },

    /// Mark a todo as active again
    Undo { id: String },

    /// Change the title of a todo
    Edit {
        id: String,

        /// New title words
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// Remove a todo
    #[command(alias = "remove")]
    Rm { id: String },

    /// Remove every todo (or only completed ones)
    Clear {
        /// Only remove completed todos
        #[arg(long)]
        completed: bool,
    },

    /// Mark every todo as completed
    ToggleAll {
        /// Mark every todo as active instead
        #[arg(long)]
        undo: bool,
    },

    /// Show active, completed and total counts
    Count,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List the collections stored in this workspace
    Stores,
}
