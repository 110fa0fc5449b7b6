use anyhow::{Context, Result};

use parlor::context::SessionContext;
use parlor::model::ClientConfig;
use parlor::remote::RemoteClient;
use parlor::store::LocalStore;

use crate::cli_runtime::require_remote;
use crate::{
    Commands, DocsCommands, MemoryCommands, NoteCommands, OpeningLineCommands, ProjectCommands,
    RemoteCommands, SessionCommands,
};

mod dispatch;
mod docs;
mod modals;
mod projects;
mod session;
mod terminal_view;
mod workspace;

pub(super) fn handle_command(command: Commands, url: Option<String>) -> Result<()> {
    dispatch::handle_command(command, url)
}
