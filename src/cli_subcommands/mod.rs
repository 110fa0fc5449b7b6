mod docs;
mod modals;
mod projects;
mod remote;
mod session;

pub(crate) use docs::DocsCommands;
pub(crate) use modals::{MemoryCommands, NoteCommands, OpeningLineCommands};
pub(crate) use projects::ProjectCommands;
pub(crate) use remote::RemoteCommands;
pub(crate) use session::SessionCommands;
