//! Terminal-side state the handlers draw on through [`View`].

use crate::model::ChatMessage;
use crate::view::{DocumentListing, ModalForm, ModalKind, View};

use super::modal::Modal;

#[derive(Default)]
pub(super) struct Screen {
    pub(super) chat: Option<Vec<ChatMessage>>,
    pub(super) documents: Option<DocumentListing>,
    pub(super) selected: usize,
    pub(super) status: Vec<String>,
    pub(super) modal: Option<Modal>,
    pub(super) alert: Option<String>,
    /// Answer handed to the next `confirm`; the shell asks the user itself
    /// before it triggers an action that confirms.
    pub(super) preconfirmed: bool,
}

impl Screen {
    pub(super) fn push_status(&mut self, line: impl Into<String>) {
        self.status.push(line.into());
        if self.status.len() > 50 {
            let excess = self.status.len() - 50;
            self.status.drain(..excess);
        }
    }

    pub(super) fn selected_document(&self) -> Option<&str> {
        self.documents
            .as_ref()
            .and_then(|l| l.rows.get(self.selected))
            .map(|r| r.filename.as_str())
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let len = self.documents.as_ref().map(|l| l.rows.len()).unwrap_or(0);
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = (self.selected as isize + delta).clamp(0, len as isize - 1);
        self.selected = next as usize;
    }
}

impl View for Screen {
    fn show_modal(&mut self, form: ModalForm) {
        self.modal = Some(Modal::form(form));
    }

    fn update_modal(&mut self, form: ModalForm) {
        if self.modal.as_ref().and_then(Modal::form_kind) == Some(form.kind()) {
            self.modal = Some(Modal::form(form));
        }
    }

    fn hide_modal(&mut self, kind: ModalKind) {
        if self.modal.as_ref().and_then(Modal::form_kind) == Some(kind) {
            self.modal = None;
        }
    }

    fn alert(&mut self, message: &str) {
        self.push_status(format!("! {}", message));
        self.alert = Some(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        let answer = std::mem::take(&mut self.preconfirmed);
        if !answer {
            self.push_status(format!("{} (declined)", message));
        }
        answer
    }

    fn render_chat(&mut self, messages: &[ChatMessage]) {
        self.chat = Some(messages.to_vec());
    }

    fn render_documents(&mut self, listing: &DocumentListing) {
        self.documents = Some(listing.clone());
        self.move_selection(0);
    }
}
