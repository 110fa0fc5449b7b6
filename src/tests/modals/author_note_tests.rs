use super::*;
use crate::store::MemoryPrefs;
use crate::view::RecordingView;

fn ctx_for_chat(chat: &str) -> SessionContext {
    SessionContext {
        chat_id: Some(chat.to_string()),
        ..SessionContext::default()
    }
}

#[test]
fn open_without_saved_note_shows_empty_field() -> Result<()> {
    let prefs = MemoryPrefs::new();
    let mut view = RecordingView::default();
    open(&ctx_for_chat("c1"), &prefs, &mut view)?;
    assert_eq!(
        view.open,
        Some(ModalForm::AuthorNote {
            note: String::new()
        })
    );
    Ok(())
}

#[test]
fn save_then_open_returns_last_saved_note() -> Result<()> {
    let ctx = ctx_for_chat("Aria - 1.txt");
    let mut prefs = MemoryPrefs::new();
    let mut view = RecordingView::default();

    open(&ctx, &prefs, &mut view)?;
    save(&ctx, &mut prefs, &mut view, "draft")?;
    save(&ctx, &mut prefs, &mut view, "Keep replies short.")?;
    assert_eq!(view.open, None);
    assert_eq!(view.hidden.last(), Some(&ModalKind::AuthorNote));

    open(&ctx, &prefs, &mut view)?;
    assert_eq!(
        view.open,
        Some(ModalForm::AuthorNote {
            note: "Keep replies short.".to_string()
        })
    );
    assert_eq!(
        prefs.get("author-note-Aria - 1.txt")?.as_deref(),
        Some("Keep replies short.")
    );
    Ok(())
}

#[test]
fn notes_are_scoped_per_chat() -> Result<()> {
    let mut prefs = MemoryPrefs::new();
    let mut view = RecordingView::default();
    save(&ctx_for_chat("a"), &mut prefs, &mut view, "note a")?;

    open(&ctx_for_chat("b"), &prefs, &mut view)?;
    assert_eq!(
        view.open,
        Some(ModalForm::AuthorNote {
            note: String::new()
        })
    );
    Ok(())
}

#[test]
fn save_without_chat_writes_nothing_but_closes() -> Result<()> {
    let mut prefs = MemoryPrefs::new();
    let mut view = RecordingView::default();
    save(&SessionContext::default(), &mut prefs, &mut view, "lost")?;
    assert!(prefs.is_empty());
    assert_eq!(view.hidden, vec![ModalKind::AuthorNote]);
    Ok(())
}
