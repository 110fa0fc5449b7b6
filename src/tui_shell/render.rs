use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::model::Role;
use crate::view::DocumentListing;

use super::app::App;
use super::modal::{draw_alert, draw_modal};

const STATUS_LINES: usize = 4;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(STATUS_LINES as u16 + 1),
            Constraint::Length(1),
        ])
        .split(area);

    // Header
    let field = |v: Option<&str>| v.filter(|s| !s.is_empty()).unwrap_or("-").to_string();
    let spans = vec![
        Span::styled("Parlor", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  chat="),
        Span::styled(
            field(app.ctx.chat_id.as_deref()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  character="),
        Span::styled(app.ctx.character_name(), Style::default().fg(Color::Yellow)),
        Span::raw("  project="),
        Span::styled(
            field(app.config.session.project.as_deref()),
            Style::default().fg(Color::Green),
        ),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    // Transcript
    let transcript: Vec<Line> = match &app.screen.chat {
        None => vec![Line::from(Span::styled(
            "(no chat loaded, press n for a new chat)",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(messages) if messages.is_empty() => vec![Line::from(Span::styled(
            "(empty chat)",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(messages) => messages
            .iter()
            .flat_map(|m| {
                let color = match m.role {
                    Role::User => Color::Cyan,
                    Role::Assistant => Color::Yellow,
                    Role::System => Color::Gray,
                };
                let mut lines = vec![Line::from(Span::styled(
                    format!("{}:", m.role.as_str()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))];
                lines.extend(m.content.lines().map(|l| Line::from(l.to_string())));
                lines.push(Line::from(""));
                lines
            })
            .collect(),
    };
    frame.render_widget(
        Paragraph::new(transcript)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Chat")),
        main[0],
    );

    draw_documents(frame, main[1], app.screen.documents.as_ref(), app.screen.selected);

    // Status
    let skip = app.screen.status.len().saturating_sub(STATUS_LINES);
    let status: Vec<Line> = app.screen.status[skip..]
        .iter()
        .map(|s| {
            let style = if s.starts_with("! ") {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            Line::from(Span::styled(s.as_str(), style))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(status).block(Block::default().borders(Borders::TOP).title("Status")),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "a note  m memory  o opening line  n new chat  u upload  d delete  r refresh  q quit",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[3],
    );

    if let Some(modal) = &app.screen.modal {
        draw_modal(frame, modal);
    }
    if let Some(msg) = &app.screen.alert {
        draw_alert(frame, msg);
    }
}

fn draw_documents(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    listing: Option<&DocumentListing>,
    selected: usize,
) {
    let Some(listing) = listing else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "(documents not loaded)",
                Style::default().fg(Color::DarkGray),
            ))
            .block(Block::default().borders(Borders::ALL).title("Documents")),
            area,
        );
        return;
    };

    let title = format!("Documents: {}", listing.project);
    if listing.rows.is_empty() {
        frame.render_widget(
            Paragraph::new(DocumentListing::EMPTY_PLACEHOLDER)
                .block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = listing
        .rows
        .iter()
        .map(|r| {
            ListItem::new(Line::from(vec![
                Span::raw(r.filename.as_str()),
                Span::raw("  "),
                Span::styled(r.size_label.as_str(), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
