use std::io::{self, BufRead, Write};

use parlor::model::ChatMessage;
use parlor::view::{DocumentListing, ModalForm, ModalKind, View};

/// Prints what a modal or panel would show; confirmations prompt on stdin.
pub(super) struct TerminalView {
    assume_yes: bool,
    alerted: bool,
}

impl TerminalView {
    pub(super) fn new() -> Self {
        Self::assuming_yes(false)
    }

    pub(super) fn assuming_yes(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            alerted: false,
        }
    }

    /// Whether any alert was shown; handlers that swallow their errors
    /// report failure through this.
    pub(super) fn alerted(&self) -> bool {
        self.alerted
    }

    fn print_form(form: &ModalForm) {
        match form {
            ModalForm::AuthorNote { note } => println!("{}", note),
            ModalForm::Memory { text } => println!("{}", text),
            ModalForm::OpeningLine { enabled, text } => {
                println!("enabled: {}", enabled);
                println!("text: {}", text);
            }
        }
    }
}

impl View for TerminalView {
    fn show_modal(&mut self, form: ModalForm) {
        // Memory opens blank and is filled by update_modal once loaded.
        if form.kind() != ModalKind::Memory {
            Self::print_form(&form);
        }
    }

    fn update_modal(&mut self, form: ModalForm) {
        Self::print_form(&form);
    }

    fn hide_modal(&mut self, _kind: ModalKind) {}

    fn alert(&mut self, message: &str) {
        self.alerted = true;
        eprintln!("{}", message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{} [y/N] ", message);
        io::stderr().flush().ok();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn render_chat(&mut self, messages: &[ChatMessage]) {
        for m in messages {
            println!("{}: {}", m.role.as_str(), m.content);
        }
    }

    fn render_documents(&mut self, listing: &DocumentListing) {
        if listing.rows.is_empty() {
            println!("{}", DocumentListing::EMPTY_PLACEHOLDER);
            return;
        }
        for row in &listing.rows {
            println!("{}\t{}", row.filename, row.size_label);
        }
    }
}
