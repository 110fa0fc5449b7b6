use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::modal::handle_modal_key;

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.screen.alert.is_some() {
        app.screen.alert = None;
        return;
    }

    if app.screen.modal.is_some() {
        handle_modal_key(app, key);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('a') => app.open_author_note(),
        KeyCode::Char('m') => app.open_memory(),
        KeyCode::Char('o') => app.open_opening_line(),
        KeyCode::Char('n') => app.new_chat(),
        KeyCode::Char('r') => app.refresh_documents(),
        KeyCode::Char('u') => app.begin_upload(),
        KeyCode::Char('d') => app.begin_delete(),
        KeyCode::Up => app.screen.move_selection(-1),
        KeyCode::Down => app.screen.move_selection(1),
        _ => {}
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/keys_tests.rs"]
mod tests;
