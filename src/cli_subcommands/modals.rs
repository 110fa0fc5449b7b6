use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum NoteCommands {
    /// Print the note saved for the current chat
    Show,
    /// Save the note for the current chat
    Set { text: String },
}

#[derive(Subcommand)]
pub(crate) enum OpeningLineCommands {
    /// Print the saved toggle and text for the current character
    Show,
    /// Save the toggle and text for the current character
    Set {
        #[arg(long)]
        enabled: bool,
        text: String,
    },
    /// Print the character's opening lines as stored on the backend
    Lines {
        #[arg(long)]
        json: bool,
    },
    /// Replace the character's opening lines on the backend
    Push {
        /// One opening line (repeatable)
        #[arg(long = "line", required = true)]
        lines: Vec<String>,
        #[arg(long)]
        enabled: bool,
    },
    /// Create a new chat for the current character, select it and greet it
    /// with a random opening line
    Greet,
}

#[derive(Subcommand)]
pub(crate) enum MemoryCommands {
    /// Print the current character's memory
    Show,
    /// Replace the current character's memory
    Set { text: String },
}
