use std::cell::RefCell;

use super::*;
use crate::model::OpeningLines;
use crate::remote::RemoteError;
use crate::store::MemoryPrefs;
use crate::view::RecordingView;

#[derive(Default)]
struct FakeChat {
    lines: Option<OpeningLines>,
    /// Backend refuses to create chats with this message.
    refuse_new: Option<String>,
    created: RefCell<Vec<String>>,
    requested: RefCell<Vec<String>>,
    saved: RefCell<Vec<(String, Vec<ChatMessage>)>>,
}

impl FakeChat {
    fn serving(enabled: bool, lines: &[&str]) -> Self {
        Self {
            lines: Some(OpeningLines {
                enabled,
                lines: lines.iter().map(|s| s.to_string()).collect(),
            }),
            ..Self::default()
        }
    }
}

impl ChatBackend for FakeChat {
    fn opening_lines(&self, character: &str) -> Result<OpeningLines, RemoteError> {
        self.requested.borrow_mut().push(character.to_string());
        self.lines
            .clone()
            .ok_or_else(|| RemoteError::Transport(anyhow!("connection refused")))
    }

    fn new_chat(&self, character: &str) -> Result<String, RemoteError> {
        if let Some(msg) = &self.refuse_new {
            return Err(RemoteError::Server(msg.clone()));
        }
        let filename = format!("{} - New Chat.txt", character);
        self.created.borrow_mut().push(filename.clone());
        Ok(filename)
    }

    fn save_chat(&self, chat_id: &str, messages: &[ChatMessage]) -> Result<(), RemoteError> {
        self.saved
            .borrow_mut()
            .push((chat_id.to_string(), messages.to_vec()));
        Ok(())
    }
}

fn ctx_for(character: &str) -> SessionContext {
    SessionContext {
        chat_id: Some("Aria - 1.txt".to_string()),
        character: Some(character.to_string()),
        ..SessionContext::default()
    }
}

#[test]
fn defaults_when_nothing_saved() -> Result<()> {
    let prefs = MemoryPrefs::new();
    let mut view = RecordingView::default();
    open(&ctx_for("Aria"), &prefs, &mut view)?;
    assert_eq!(
        view.open,
        Some(ModalForm::OpeningLine {
            enabled: false,
            text: String::new()
        })
    );
    Ok(())
}

#[test]
fn save_then_reopen_for_same_character() -> Result<()> {
    let mut ctx = ctx_for("Aria");
    let mut prefs = MemoryPrefs::new();
    let backend = FakeChat::default();
    let mut view = RecordingView::default();

    save(&mut ctx, &mut prefs, &backend, &mut view, true, "Hello!")?;
    assert_eq!(prefs.get("opening-line-enabled-Aria")?.as_deref(), Some("true"));
    assert_eq!(prefs.get("opening-line-Aria")?.as_deref(), Some("Hello!"));

    open(&ctx, &prefs, &mut view)?;
    assert_eq!(
        view.open,
        Some(ModalForm::OpeningLine {
            enabled: true,
            text: "Hello!".to_string()
        })
    );

    open(&ctx_for("Bram"), &prefs, &mut view)?;
    assert_eq!(
        view.open,
        Some(ModalForm::OpeningLine {
            enabled: false,
            text: String::new()
        })
    );
    Ok(())
}

#[test]
fn missing_character_falls_back_to_unknown() -> Result<()> {
    let mut ctx = SessionContext::default();
    let mut prefs = MemoryPrefs::new();
    let mut view = RecordingView::default();
    save(&mut ctx, &mut prefs, &FakeChat::default(), &mut view, false, "hi")?;
    assert_eq!(prefs.get("opening-line-enabled-Unknown")?.as_deref(), Some("false"));
    assert_eq!(prefs.get("opening-line-Unknown")?.as_deref(), Some("hi"));
    Ok(())
}

#[test]
fn save_with_unloaded_transcript_does_not_fetch() -> Result<()> {
    let mut ctx = ctx_for("Aria");
    let backend = FakeChat::serving(true, &["Hi there."]);
    let mut view = RecordingView::default();
    save(&mut ctx, &mut MemoryPrefs::new(), &backend, &mut view, true, "x")?;
    assert!(backend.requested.borrow().is_empty());
    assert!(ctx.transcript.is_none());
    Ok(())
}

#[test]
fn save_on_empty_chat_displays_and_autosaves_a_line() -> Result<()> {
    let mut ctx = ctx_for("Aria");
    ctx.transcript = Some(Vec::new());
    let backend = FakeChat::serving(true, &["Hi there.", "You again?"]);
    let mut view = RecordingView::default();

    save(&mut ctx, &mut MemoryPrefs::new(), &backend, &mut view, true, "x")?;

    let transcript = ctx.transcript.clone().unwrap_or_default();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].role, crate::model::Role::Assistant);
    assert!(["Hi there.", "You again?"].contains(&transcript[0].content.as_str()));
    assert_eq!(view.chat.as_ref(), Some(&transcript));

    let saved = backend.saved.borrow();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, "Aria - 1.txt");
    assert_eq!(saved[0].1, transcript);
    Ok(())
}

#[test]
fn non_empty_chat_is_left_alone() {
    let mut ctx = ctx_for("Aria");
    ctx.transcript = Some(vec![ChatMessage::user("hello?")]);
    let backend = FakeChat::serving(true, &["Hi there."]);
    let mut view = RecordingView::default();

    assert_eq!(display_in_chat(&mut ctx, &backend, &mut view), None);
    assert_eq!(ctx.transcript.as_ref().map(Vec::len), Some(1));
    assert!(view.chat.is_none());
    assert!(backend.saved.borrow().is_empty());
}

#[test]
fn disabled_or_empty_sets_show_nothing() {
    for backend in [
        FakeChat::serving(false, &["Hi there."]),
        FakeChat::serving(true, &[]),
    ] {
        let mut ctx = ctx_for("Aria");
        ctx.transcript = Some(Vec::new());
        let mut view = RecordingView::default();
        assert_eq!(display_in_chat(&mut ctx, &backend, &mut view), None);
        assert_eq!(ctx.transcript, Some(Vec::new()));
    }
}

#[test]
fn fetch_failure_is_swallowed() {
    let mut ctx = ctx_for("Aria");
    ctx.transcript = Some(Vec::new());
    let mut view = RecordingView::default();
    assert_eq!(display_in_chat(&mut ctx, &FakeChat::default(), &mut view), None);
    assert!(view.alerts.is_empty());
}

#[test]
fn display_initialises_unloaded_transcript() {
    let mut ctx = ctx_for("Aria");
    let backend = FakeChat::serving(true, &["Only line."]);
    let mut view = RecordingView::default();

    let shown = display_in_chat(&mut ctx, &backend, &mut view);
    assert_eq!(shown, Some(ChatMessage::assistant("Only line.")));
    assert_eq!(ctx.transcript, Some(vec![ChatMessage::assistant("Only line.")]));
}

#[test]
fn no_autosave_without_chat_id() {
    let mut ctx = ctx_for("Aria");
    ctx.chat_id = None;
    ctx.transcript = Some(Vec::new());
    let backend = FakeChat::serving(true, &["Only line."]);
    let mut view = RecordingView::default();

    assert!(display_in_chat(&mut ctx, &backend, &mut view).is_some());
    assert!(backend.saved.borrow().is_empty());
}

#[test]
fn start_chat_saves_only_under_the_new_chat() -> Result<()> {
    let mut ctx = ctx_for("Aria");
    ctx.chat_id = Some("Aria - long chat.txt".to_string());
    let backend = FakeChat::serving(true, &["Hello there."]);
    let mut view = RecordingView::default();

    let greeted = start_chat(&mut ctx, &backend, &mut view)?;

    assert_eq!(greeted, Some(ChatMessage::assistant("Hello there.")));
    assert_eq!(ctx.chat_id.as_deref(), Some("Aria - New Chat.txt"));
    assert_eq!(*backend.created.borrow(), vec!["Aria - New Chat.txt".to_string()]);
    let saved = backend.saved.borrow();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, "Aria - New Chat.txt");
    assert!(saved.iter().all(|(chat, _)| chat != "Aria - long chat.txt"));
    Ok(())
}

#[test]
fn start_chat_without_lines_still_switches_to_an_empty_chat() -> Result<()> {
    let mut ctx = ctx_for("Aria");
    let backend = FakeChat::serving(false, &["Hello there."]);
    let mut view = RecordingView::default();

    assert_eq!(start_chat(&mut ctx, &backend, &mut view)?, None);
    assert_eq!(ctx.chat_id.as_deref(), Some("Aria - New Chat.txt"));
    assert_eq!(ctx.transcript, Some(Vec::new()));
    assert_eq!(view.chat, Some(Vec::new()));
    assert!(backend.saved.borrow().is_empty());
    Ok(())
}

#[test]
fn failed_chat_creation_leaves_the_session_alone() {
    let mut ctx = ctx_for("Aria");
    ctx.transcript = Some(vec![ChatMessage::user("still here")]);
    let backend = FakeChat {
        refuse_new: Some("disk full".to_string()),
        ..FakeChat::serving(true, &["Hello there."])
    };
    let mut view = RecordingView::default();

    let err = start_chat(&mut ctx, &backend, &mut view).unwrap_err();
    assert!(matches!(err, RemoteError::Server(ref m) if m == "disk full"));
    assert_eq!(ctx.chat_id.as_deref(), Some("Aria - 1.txt"));
    assert_eq!(ctx.transcript, Some(vec![ChatMessage::user("still here")]));
    assert!(backend.requested.borrow().is_empty());
    assert!(backend.saved.borrow().is_empty());
}

#[test]
fn pick_line_stays_in_bounds_and_reaches_every_line() -> Result<()> {
    let lines: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..300 {
        seen.insert(pick_line(&lines)?.to_string());
    }
    assert_eq!(seen.len(), 3);
    assert!(pick_line(&[]).is_err());
    Ok(())
}
