use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::view::{ModalForm, ModalKind};

use super::app::App;
use super::input::Input;

pub(super) enum ModalState {
    /// One of the side-panel forms.
    Form { kind: ModalKind, enabled: bool },
    UploadPath,
    ConfirmDelete { filename: String },
}

pub(super) struct Modal {
    pub(super) state: ModalState,
    pub(super) input: Input,
}

impl Modal {
    pub(super) fn form(form: ModalForm) -> Self {
        let kind = form.kind();
        let (enabled, text) = match form {
            ModalForm::AuthorNote { note } => (false, note),
            ModalForm::Memory { text } => (false, text),
            ModalForm::OpeningLine { enabled, text } => (enabled, text),
        };
        let mut input = Input::default();
        input.set(text);
        Self {
            state: ModalState::Form { kind, enabled },
            input,
        }
    }

    pub(super) fn prompt(state: ModalState) -> Self {
        Self {
            state,
            input: Input::default(),
        }
    }

    pub(super) fn form_kind(&self) -> Option<ModalKind> {
        match self.state {
            ModalState::Form { kind, .. } => Some(kind),
            _ => None,
        }
    }

    fn title(&self) -> String {
        match &self.state {
            ModalState::Form { kind, .. } => kind.title().to_string(),
            ModalState::UploadPath => "Upload Document".to_string(),
            ModalState::ConfirmDelete { .. } => "Delete Document".to_string(),
        }
    }

    fn hint(&self) -> &'static str {
        match &self.state {
            ModalState::Form {
                kind: ModalKind::OpeningLine,
                ..
            } => "Enter save  Alt+Enter newline  Tab toggle  Esc close",
            ModalState::Form { .. } => "Enter save  Alt+Enter newline  Esc close",
            ModalState::UploadPath => "Enter upload  Esc cancel",
            ModalState::ConfirmDelete { .. } => "y delete  n/Esc keep",
        }
    }
}

fn centered(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(6).clamp(20, max_w).min(area.width);
    let h = area.height.saturating_sub(6).clamp(5, max_h).min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// Screen cell for a text cursor at (`line`, `col`) inside `area`; `None` when
/// the line is below the visible rows.
fn cursor_position(area: Rect, line: usize, col: usize) -> Option<(u16, u16)> {
    let line = u16::try_from(line).unwrap_or(u16::MAX);
    if line >= area.height {
        return None;
    }
    let col = u16::try_from(col)
        .unwrap_or(u16::MAX)
        .min(area.width.saturating_sub(1));
    Some((area.x.saturating_add(col), area.y.saturating_add(line)))
}

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let box_area = centered(frame.area(), 90, 22);
    frame.render_widget(Clear, box_area);

    let block = Block::default().borders(Borders::ALL).title(modal.title());
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let header = match &modal.state {
        ModalState::Form {
            kind: ModalKind::OpeningLine,
            enabled,
        } => Line::from(vec![
            Span::styled(
                if *enabled { "[x] " } else { "[ ] " },
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("Show opening line in new chats"),
        ]),
        ModalState::Form { .. } => Line::from(""),
        ModalState::UploadPath => Line::from("Path of the file to upload:"),
        ModalState::ConfirmDelete { filename } => {
            Line::from(format!("Delete \"{}\"?", filename))
        }
    };
    frame.render_widget(Paragraph::new(header), parts[0]);

    if !matches!(modal.state, ModalState::ConfirmDelete { .. }) {
        let body = Block::default().borders(Borders::ALL);
        let body_inner = body.inner(parts[1]);
        frame.render_widget(
            Paragraph::new(modal.input.buf.as_str())
                .block(body)
                .wrap(Wrap { trim: false }),
            parts[1],
        );
        let (line, col) = modal.input.cursor_line_col();
        if let Some(pos) = cursor_position(body_inner, line, col) {
            frame.set_cursor_position(pos);
        }
    }

    frame.render_widget(
        Paragraph::new(Span::styled(modal.hint(), Style::default().fg(Color::DarkGray))),
        parts[2],
    );
}

pub(super) fn draw_alert(frame: &mut ratatui::Frame, message: &str) {
    let box_area = centered(frame.area(), 60, 7);
    frame.render_widget(Clear, box_area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(message, Style::default().fg(Color::Red))),
            Line::from(""),
            Line::from(Span::styled(
                "press any key",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Alert")),
        box_area,
    );
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    enum ModalAction {
        None,
        CloseForm(ModalKind),
        SaveForm {
            kind: ModalKind,
            enabled: bool,
            text: String,
        },
        Upload(String),
        Delete {
            filename: String,
            confirmed: bool,
        },
        Dismiss,
    }

    let action = {
        let Some(m) = app.screen.modal.as_mut() else {
            return;
        };

        let pending_delete = match &m.state {
            ModalState::ConfirmDelete { filename } => Some(filename.clone()),
            _ => None,
        };

        match pending_delete {
            Some(filename) => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => ModalAction::Delete {
                    filename,
                    confirmed: true,
                },
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ModalAction::Delete {
                    filename,
                    confirmed: false,
                },
                _ => ModalAction::None,
            },
            None => match key.code {
                KeyCode::Esc => match m.form_kind() {
                    Some(kind) => ModalAction::CloseForm(kind),
                    None => ModalAction::Dismiss,
                },
                KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                    if m.form_kind().is_some() {
                        m.input.insert_char('\n');
                    }
                    ModalAction::None
                }
                KeyCode::Enter => match m.state {
                    ModalState::Form { kind, enabled } => ModalAction::SaveForm {
                        kind,
                        enabled,
                        text: m.input.buf.clone(),
                    },
                    _ => ModalAction::Upload(m.input.buf.clone()),
                },
                KeyCode::Tab => {
                    if let ModalState::Form {
                        kind: ModalKind::OpeningLine,
                        enabled,
                    } = &mut m.state
                    {
                        *enabled = !*enabled;
                    }
                    ModalAction::None
                }
                KeyCode::Backspace => {
                    m.input.backspace();
                    ModalAction::None
                }
                KeyCode::Delete => {
                    m.input.delete();
                    ModalAction::None
                }
                KeyCode::Left => {
                    m.input.move_left();
                    ModalAction::None
                }
                KeyCode::Right => {
                    m.input.move_right();
                    ModalAction::None
                }
                KeyCode::Char(c) => {
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT)
                    {
                        m.input.insert_char(c);
                    }
                    ModalAction::None
                }
                _ => ModalAction::None,
            },
        }
    };

    match action {
        ModalAction::None => {}
        ModalAction::CloseForm(kind) => app.close_form(kind),
        ModalAction::SaveForm {
            kind,
            enabled,
            text,
        } => app.save_form(kind, enabled, text),
        ModalAction::Upload(path) => app.upload(path),
        ModalAction::Delete {
            filename,
            confirmed,
        } => app.delete(filename, confirmed),
        ModalAction::Dismiss => app.screen.modal = None,
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/modal_tests.rs"]
mod tests;
