//! Per-character opening line: a local toggle and draft text, plus display of
//! a server-side line when a chat starts out empty.

use anyhow::{Result, anyhow};
use tracing::{debug, info, warn};

use crate::context::SessionContext;
use crate::model::{ChatMessage, PrefKey};
use crate::remote::{ChatBackend, RemoteError};
use crate::store::PreferenceStore;
use crate::view::{ModalForm, ModalKind, View};

pub fn open(ctx: &SessionContext, store: &dyn PreferenceStore, view: &mut dyn View) -> Result<()> {
    let scope = ctx.character_scope();
    let enabled = store
        .get_pref(PrefKey::OpeningLineEnabled, &scope)?
        .as_deref()
        == Some("true");
    let text = store
        .get_pref(PrefKey::OpeningLineText, &scope)?
        .unwrap_or_default();
    view.show_modal(ModalForm::OpeningLine { enabled, text });
    Ok(())
}

pub fn close(view: &mut dyn View) {
    view.hide_modal(ModalKind::OpeningLine);
}

/// Persists the form for the current character and closes the modal. A loaded
/// but still empty transcript then gets an opening line.
pub fn save(
    ctx: &mut SessionContext,
    store: &mut dyn PreferenceStore,
    backend: &dyn ChatBackend,
    view: &mut dyn View,
    enabled: bool,
    text: &str,
) -> Result<()> {
    let scope = ctx.character_scope();
    let flag = if enabled { "true" } else { "false" };
    store.set_pref(PrefKey::OpeningLineEnabled, &scope, flag)?;
    store.set_pref(PrefKey::OpeningLineText, &scope, text)?;
    info!(character = %scope, enabled, "opening line saved");

    close(view);

    if ctx.transcript_is_empty() {
        display_in_chat(ctx, backend, view);
    }
    Ok(())
}

/// Appends a random server-side opening line to an empty transcript, renders
/// it and auto-saves the chat. Every failure is logged and swallowed.
pub fn display_in_chat(
    ctx: &mut SessionContext,
    backend: &dyn ChatBackend,
    view: &mut dyn View,
) -> Option<ChatMessage> {
    let character = ctx.character_name().to_string();

    let set = match backend.opening_lines(&character) {
        Ok(set) => set,
        Err(err) => {
            warn!(%character, error = %err, "failed to load opening lines");
            return None;
        }
    };
    if !set.enabled {
        debug!(%character, "opening line not enabled");
        return None;
    }
    if set.lines.is_empty() {
        debug!(%character, "no opening lines available");
        return None;
    }

    let transcript = ctx.transcript.get_or_insert_with(Vec::new);
    if !transcript.is_empty() {
        debug!(%character, "chat not empty, skipping opening line");
        return None;
    }

    let line = match pick_line(&set.lines) {
        Ok(line) => line.to_string(),
        Err(err) => {
            warn!(error = %format!("{:#}", err), "failed to pick opening line");
            return None;
        }
    };
    info!(%character, available = set.lines.len(), "picked opening line");

    let message = ChatMessage::assistant(line);
    transcript.push(message.clone());
    view.render_chat(transcript);

    match ctx.chat_id.as_deref() {
        Some(chat_id) => {
            if let Err(err) = backend.save_chat(chat_id, transcript) {
                warn!(chat = chat_id, error = %err, "failed to auto-save chat");
            }
        }
        None => debug!("no chat selected, skipping auto-save"),
    }

    Some(message)
}

/// Creates a new chat for the current character, makes it current and greets
/// it. Only the new chat is ever auto-saved; on failure `ctx` is untouched.
pub fn start_chat(
    ctx: &mut SessionContext,
    backend: &dyn ChatBackend,
    view: &mut dyn View,
) -> Result<Option<ChatMessage>, RemoteError> {
    let character = ctx.character_name().to_string();
    let filename = backend.new_chat(&character)?;
    info!(%character, chat = %filename, "new chat created");

    ctx.chat_id = Some(filename);
    ctx.transcript = Some(Vec::new());
    view.render_chat(&[]);
    Ok(display_in_chat(ctx, backend, view))
}

/// Uniform pick over `lines`, which must be non-empty.
pub fn pick_line(lines: &[String]) -> Result<&str> {
    if lines.is_empty() {
        anyhow::bail!("no lines to pick from");
    }
    let idx = random_index(lines.len())?;
    Ok(lines[idx].as_str())
}

fn random_index(len: usize) -> Result<usize> {
    let len = len as u64;
    // Reject the tail of the u64 range so every index is equally likely.
    let zone = u64::MAX - (u64::MAX % len);
    loop {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes).map_err(|e| anyhow!("getrandom: {:?}", e))?;
        let v = u64::from_le_bytes(bytes);
        if v < zone {
            return Ok((v % len) as usize);
        }
    }
}

#[cfg(test)]
#[path = "../tests/modals/opening_line_tests.rs"]
mod tests;
