//! Character memory viewer/editor.

use anyhow::Result;
use tracing::{error, info};

use crate::context::SessionContext;
use crate::memory::MemorySource;
use crate::view::{ModalForm, ModalKind, View};

/// Shows the modal straight away, then fills it once the memory has loaded.
pub fn open(ctx: &SessionContext, source: &dyn MemorySource, view: &mut dyn View) {
    view.show_modal(ModalForm::Memory {
        text: String::new(),
    });

    let character = ctx.character_name();
    match source.load_memory(character) {
        Ok(text) => view.update_modal(ModalForm::Memory { text }),
        Err(err) => {
            error!(%character, error = %format!("{:#}", err), "failed to load character memory");
            view.alert("Failed to load character memory");
        }
    }
}

pub fn close(view: &mut dyn View) {
    view.hide_modal(ModalKind::Memory);
}

pub fn save(
    ctx: &SessionContext,
    source: &mut dyn MemorySource,
    view: &mut dyn View,
    text: &str,
) -> Result<()> {
    let character = ctx.character_name();
    source.save_memory(character, text)?;
    info!(%character, bytes = text.len(), "character memory saved");
    close(view);
    Ok(())
}

#[cfg(test)]
#[path = "../tests/modals/memory_tests.rs"]
mod tests;
