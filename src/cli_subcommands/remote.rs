use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum RemoteCommands {
    /// Show the configured backend
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Set the backend base URL
    Set {
        #[arg(long)]
        url: String,
    },
}
