use anyhow::anyhow;

use parlor::model::{ChatMessage, OpeningLines};
use parlor::modals::{author_note, memory, opening_line};
use parlor::remote::{ChatBackend, RemoteError};

use super::terminal_view::TerminalView;
use super::workspace::Workspace;
use super::*;

/// Stands in for the backend when none is configured; local saves never
/// reach it because the CLI has no loaded transcript.
struct Offline;

impl ChatBackend for Offline {
    fn opening_lines(&self, _character: &str) -> Result<OpeningLines, RemoteError> {
        Err(anyhow!("no remote configured").into())
    }

    fn new_chat(&self, _character: &str) -> Result<String, RemoteError> {
        Err(anyhow!("no remote configured").into())
    }

    fn save_chat(&self, _chat_id: &str, _messages: &[ChatMessage]) -> Result<(), RemoteError> {
        Err(anyhow!("no remote configured").into())
    }
}

pub(super) fn handle_note_command(ws: &mut Workspace, command: NoteCommands) -> Result<()> {
    let ctx = ws.ctx();
    if ctx.chat_id.is_none() {
        anyhow::bail!("no chat selected (run `parlor session set --chat ...`)");
    }
    let mut view = TerminalView::new();
    match command {
        NoteCommands::Show => {
            author_note::open(&ctx, &ws.store, &mut view)?;
            author_note::close(&mut view);
        }
        NoteCommands::Set { text } => {
            author_note::save(&ctx, &mut ws.store, &mut view, &text)?;
            println!("Author note saved");
        }
    }
    Ok(())
}

pub(super) fn handle_opening_line_command(
    ws: &mut Workspace,
    command: OpeningLineCommands,
) -> Result<()> {
    let mut ctx = ws.ctx();
    let mut view = TerminalView::new();
    match command {
        OpeningLineCommands::Show => {
            opening_line::open(&ctx, &ws.store, &mut view)?;
            opening_line::close(&mut view);
        }
        OpeningLineCommands::Set { enabled, text } => {
            let client = ws.client().ok();
            let backend: &dyn ChatBackend = match &client {
                Some(c) => c,
                None => &Offline,
            };
            opening_line::save(&mut ctx, &mut ws.store, backend, &mut view, enabled, &text)?;
            println!("Opening line saved for {}", ctx.character_name());
        }
        OpeningLineCommands::Lines { json } => {
            let client = ws.client()?;
            let set = client.get_opening_lines(ctx.character_name())?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&set).context("serialize opening lines json")?
                );
            } else {
                println!("enabled: {}", set.enabled);
                for line in &set.lines {
                    println!("- {}", line);
                }
            }
        }
        OpeningLineCommands::Push { lines, enabled } => {
            let client = ws.client()?;
            client.save_opening_lines(ctx.character_name(), enabled, &lines)?;
            println!(
                "Pushed {} opening line(s) for {}",
                lines.len(),
                ctx.character_name()
            );
        }
        OpeningLineCommands::Greet => {
            let client = ws.client()?;
            let greeted = opening_line::start_chat(&mut ctx, &client, &mut view)?;
            ws.config.session.chat_id = ctx.chat_id.clone();
            ws.store.write_config(&ws.config)?;
            println!(
                "Started chat {}",
                ctx.chat_id.as_deref().unwrap_or_default()
            );
            if greeted.is_none() {
                println!("No opening line available for {}", ctx.character_name());
            }
        }
    }
    Ok(())
}

pub(super) fn handle_memory_command(ws: &mut Workspace, command: MemoryCommands) -> Result<()> {
    let ctx = ws.ctx();
    let mut source = ws.memory_source();
    let mut view = TerminalView::new();
    match command {
        MemoryCommands::Show => {
            memory::open(&ctx, &source, &mut view);
            memory::close(&mut view);
            if view.alerted() {
                anyhow::bail!("memory for {} could not be loaded", ctx.character_name());
            }
        }
        MemoryCommands::Set { text } => {
            memory::save(&ctx, &mut source, &mut view, &text)?;
            println!("Memory saved for {}", ctx.character_name());
        }
    }
    Ok(())
}
