use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum SessionCommands {
    /// Show the current selection
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Change the current selection (empty string clears a field)
    Set {
        /// Chat file name, e.g. "Aria - 2024-05-01.txt"
        #[arg(long)]
        chat: Option<String>,
        #[arg(long)]
        character: Option<String>,
        #[arg(long)]
        project: Option<String>,
        /// Directory holding <character>_memory.txt files
        #[arg(long)]
        memory_dir: Option<PathBuf>,
    },
}
