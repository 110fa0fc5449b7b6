use std::path::PathBuf;

use parlor::model::RemoteConfig;

use super::workspace::Workspace;
use super::*;

pub(super) fn handle_init_command(force: bool, path: Option<PathBuf>) -> Result<()> {
    let root = match path {
        Some(p) => p,
        None => std::env::current_dir().context("get current dir")?,
    };
    LocalStore::init(&root, force)?;
    println!("Initialized parlor workspace at {}", root.display());
    Ok(())
}

pub(super) fn handle_remote_command(ws: &mut Workspace, command: RemoteCommands) -> Result<()> {
    match command {
        RemoteCommands::Show { json } => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ws.config.remote)
                        .context("serialize remote json")?
                );
            } else if let Some(remote) = &ws.config.remote {
                println!("url: {}", remote.base_url);
            } else {
                println!("No remote configured");
            }
        }
        RemoteCommands::Set { url } => {
            let url = url.trim_end_matches('/').to_string();
            reqwest::Url::parse(&url).with_context(|| format!("invalid url {}", url))?;
            ws.config.remote = Some(RemoteConfig { base_url: url });
            ws.store.write_config(&ws.config)?;
            println!("Remote configured");
        }
    }
    Ok(())
}

fn apply(field: &mut Option<String>, value: Option<String>) {
    if let Some(v) = value {
        *field = if v.is_empty() { None } else { Some(v) };
    }
}

pub(super) fn handle_session_command(ws: &mut Workspace, command: SessionCommands) -> Result<()> {
    match command {
        SessionCommands::Show { json } => {
            let session = &ws.config.session;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(session).context("serialize session json")?
                );
            } else {
                let ctx = ws.ctx();
                println!("chat: {}", session.chat_id.as_deref().unwrap_or("-"));
                println!("character: {}", ctx.character_name());
                println!("project: {}", session.project.as_deref().unwrap_or("-"));
                if let Some(dir) = &ws.config.memory_dir {
                    println!("memory_dir: {}", dir.display());
                }
            }
        }
        SessionCommands::Set {
            chat,
            character,
            project,
            memory_dir,
        } => {
            let session = &mut ws.config.session;
            apply(&mut session.chat_id, chat);
            apply(&mut session.character, character);
            apply(&mut session.project, project);
            if let Some(dir) = memory_dir {
                ws.config.memory_dir = Some(dir);
            }
            ws.store.write_config(&ws.config)?;
            println!("Session updated");
        }
    }
    Ok(())
}
