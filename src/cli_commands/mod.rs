use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::{
    DocsCommands, MemoryCommands, NoteCommands, OpeningLineCommands, ProjectCommands,
    RemoteCommands, SessionCommands,
};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Initialize a workspace (.parlor)
    Init(InitArgs),

    /// Configure or show the backend
    Remote {
        #[command(subcommand)]
        command: RemoteCommands,
    },

    /// Select the current chat, character and project
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },

    /// Author's note for the current chat
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },

    /// Opening line for the current character
    #[command(name = "opening-line")]
    OpeningLine {
        #[command(subcommand)]
        command: OpeningLineCommands,
    },

    /// Long-term memory for the current character
    Memory {
        #[command(subcommand)]
        command: MemoryCommands,
    },

    /// Documents attached to a project
    Docs {
        #[command(subcommand)]
        command: DocsCommands,
    },

    /// Manage projects on the backend
    Projects {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Print a byte count the way the document panel shows it
    Size {
        bytes: u64,
    },
}

#[derive(Args)]
pub(crate) struct InitArgs {
    /// Re-initialize if .parlor already exists
    #[arg(long)]
    pub(crate) force: bool,
    /// Path to initialize (defaults to current directory)
    #[arg(long)]
    pub(crate) path: Option<PathBuf>,
}
