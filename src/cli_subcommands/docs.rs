use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum DocsCommands {
    /// List the project's documents
    List {
        /// Project name (defaults to the session's project)
        #[arg(long)]
        project: Option<String>,
    },
    /// Upload a file to the project
    Upload {
        path: PathBuf,
        #[arg(long)]
        project: Option<String>,
    },
    /// Delete a document from the project
    Delete {
        filename: String,
        #[arg(long)]
        project: Option<String>,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
