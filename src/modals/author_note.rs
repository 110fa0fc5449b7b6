//! Per-chat author's note.

use anyhow::Result;
use tracing::{debug, info};

use crate::context::SessionContext;
use crate::model::PrefKey;
use crate::store::PreferenceStore;
use crate::view::{ModalForm, ModalKind, View};

/// Shows the modal with the note saved for the current chat, or an empty
/// field when there is none (or no chat is selected).
pub fn open(ctx: &SessionContext, store: &dyn PreferenceStore, view: &mut dyn View) -> Result<()> {
    let note = match ctx.chat_scope() {
        Some(scope) => store
            .get_pref(PrefKey::AuthorNote, &scope)?
            .unwrap_or_default(),
        None => String::new(),
    };
    view.show_modal(ModalForm::AuthorNote { note });
    Ok(())
}

pub fn close(view: &mut dyn View) {
    view.hide_modal(ModalKind::AuthorNote);
}

pub fn save(
    ctx: &SessionContext,
    store: &mut dyn PreferenceStore,
    view: &mut dyn View,
    note: &str,
) -> Result<()> {
    match ctx.chat_scope() {
        Some(scope) => {
            store.set_pref(PrefKey::AuthorNote, &scope, note)?;
            info!(chat = %scope, "author note saved");
        }
        None => debug!("no chat selected, author note not saved"),
    }
    close(view);
    Ok(())
}

#[cfg(test)]
#[path = "../tests/modals/author_note_tests.rs"]
mod tests;
