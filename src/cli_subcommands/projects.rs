use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ProjectCommands {
    /// List projects and the active one
    List {
        #[arg(long)]
        json: bool,
    },
    /// Create a project (it becomes active)
    Create {
        name: String,
        #[arg(long, default_value = "")]
        instructions: String,
    },
    /// Show a project's config
    Show {
        name: String,
        #[arg(long)]
        json: bool,
    },
    /// Change a project's display name or instructions
    Update {
        name: String,
        #[arg(long)]
        display_name: Option<String>,
        #[arg(long)]
        instructions: Option<String>,
    },
    /// Switch the active project (omit the name to clear it)
    Switch { name: Option<String> },
    /// Delete a project and everything in it
    Delete { name: String },
}
