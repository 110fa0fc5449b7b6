use super::docs::handle_docs_command;
use super::modals::{handle_memory_command, handle_note_command, handle_opening_line_command};
use super::projects::handle_projects_command;
use super::session::{handle_init_command, handle_remote_command, handle_session_command};
use super::workspace::with_workspace;
use super::*;

pub(super) fn handle_command(command: Commands, url: Option<String>) -> Result<()> {
    match command {
        Commands::Init(args) => handle_init_command(args.force, args.path)?,
        Commands::Remote { command } => {
            with_workspace(url, |ws| handle_remote_command(ws, command))?
        }
        Commands::Session { command } => {
            with_workspace(url, |ws| handle_session_command(ws, command))?
        }
        Commands::Note { command } => with_workspace(url, |ws| handle_note_command(ws, command))?,
        Commands::OpeningLine { command } => {
            with_workspace(url, |ws| handle_opening_line_command(ws, command))?
        }
        Commands::Memory { command } => {
            with_workspace(url, |ws| handle_memory_command(ws, command))?
        }
        Commands::Docs { command } => with_workspace(url, |ws| handle_docs_command(ws, command))?,
        Commands::Projects { command } => {
            with_workspace(url, |ws| handle_projects_command(ws, command))?
        }
        Commands::Size { bytes } => println!("{}", parlor::format::format_file_size(bytes)),
    }

    Ok(())
}
