use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "glossa")]
#[command(about = "Glossary-aware translation chat client")]
#[command(version)]
pub struct Args {
    /// Backend base URL (e.g., http://127.0.0.1:8000)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Do not highlight glossary terms in replies
    #[arg(long, global = true)]
    pub no_highlight: bool,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Print request diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat mode (default)
    Chat,
    /// Translate a file or stdin, confirming glossary terms first
    Translate {
        /// File to translate (reads from stdin if not provided)
        file: Option<String>,

        /// Accept the suggested glossary without prompting
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Fix grammar and spelling of a file or stdin
    Polish {
        /// File to polish (reads from stdin if not provided)
        file: Option<String>,
    },
    /// Manage the backend's glossary store
    Glossary {
        #[command(subcommand)]
        command: GlossaryCommand,
    },
    /// Configure glossa settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum GlossaryCommand {
    /// Add a term
    Add {
        /// Source term
        term: String,
        /// Target definition
        definition: String,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Replace a stored term
    Edit {
        /// Id of the stored term
        id: u64,
        /// Source term
        term: String,
        /// Target definition
        definition: String,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a stored term
    Remove {
        /// Id of the stored term
        id: u64,
    },
    /// Export the glossary as CSV
    Export {
        /// Write to this file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}
