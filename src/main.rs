mod cli_commands;
mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

pub(crate) use cli_commands::Commands;
pub(crate) use cli_subcommands::{
    DocsCommands, MemoryCommands, NoteCommands, OpeningLineCommands, ProjectCommands,
    RemoteCommands, SessionCommands,
};

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
