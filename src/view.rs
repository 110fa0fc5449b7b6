//! The surface handlers draw on. Front-ends implement [`View`]; handlers never
//! touch a terminal or stdout directly.

use crate::model::ChatMessage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    AuthorNote,
    Memory,
    OpeningLine,
}

impl ModalKind {
    pub fn title(self) -> &'static str {
        match self {
            ModalKind::AuthorNote => "Author's Note",
            ModalKind::Memory => "Character Memory",
            ModalKind::OpeningLine => "Opening Line",
        }
    }
}

/// A modal plus the values its fields open with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalForm {
    AuthorNote { note: String },
    Memory { text: String },
    OpeningLine { enabled: bool, text: String },
}

impl ModalForm {
    pub fn kind(&self) -> ModalKind {
        match self {
            ModalForm::AuthorNote { .. } => ModalKind::AuthorNote,
            ModalForm::Memory { .. } => ModalKind::Memory,
            ModalForm::OpeningLine { .. } => ModalKind::OpeningLine,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRow {
    pub filename: String,
    pub size_label: String,
}

/// A freshly built document list; rows replace whatever was shown before.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentListing {
    pub project: String,
    pub rows: Vec<DocumentRow>,
}

impl DocumentListing {
    pub const EMPTY_PLACEHOLDER: &'static str = "No documents uploaded yet.";
}

pub trait View {
    /// Shows `form`'s modal with its fields populated.
    fn show_modal(&mut self, form: ModalForm);
    /// Replaces field contents of a modal that is already open.
    fn update_modal(&mut self, form: ModalForm);
    fn hide_modal(&mut self, kind: ModalKind);
    fn alert(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
    fn render_chat(&mut self, messages: &[ChatMessage]);
    fn render_documents(&mut self, listing: &DocumentListing);
}

/// Records every call; used by tests and as a headless front-end.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub open: Option<ModalForm>,
    pub hidden: Vec<ModalKind>,
    pub alerts: Vec<String>,
    pub confirmations: Vec<String>,
    pub confirm_answer: bool,
    pub chat: Option<Vec<ChatMessage>>,
    pub documents: Option<DocumentListing>,
    pub document_renders: usize,
}

impl RecordingView {
    pub fn confirming(answer: bool) -> Self {
        Self {
            confirm_answer: answer,
            ..Self::default()
        }
    }
}

impl View for RecordingView {
    fn show_modal(&mut self, form: ModalForm) {
        self.open = Some(form);
    }

    fn update_modal(&mut self, form: ModalForm) {
        if self.open.as_ref().map(ModalForm::kind) == Some(form.kind()) {
            self.open = Some(form);
        }
    }

    fn hide_modal(&mut self, kind: ModalKind) {
        if self.open.as_ref().map(ModalForm::kind) == Some(kind) {
            self.open = None;
        }
        self.hidden.push(kind);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.confirm_answer
    }

    fn render_chat(&mut self, messages: &[ChatMessage]) {
        self.chat = Some(messages.to_vec());
    }

    fn render_documents(&mut self, listing: &DocumentListing) {
        self.documents = Some(listing.clone());
        self.document_renders += 1;
    }
}
