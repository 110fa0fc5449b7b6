use std::path::PathBuf;

use anyhow::Result;
use tracing::error;

use crate::context::SessionContext;
use crate::documents::{DocumentPanel, FileSelection, PanelOutcome};
use crate::memory::MemoryDir;
use crate::modals::{author_note, memory, opening_line};
use crate::model::{ClientConfig, RemoteConfig};
use crate::remote::RemoteClient;
use crate::store::LocalStore;
use crate::tui::TuiRunOptions;
use crate::view::{ModalKind, View};

use super::modal::{Modal, ModalState};
use super::screen::Screen;

pub(super) struct App {
    pub(super) store: LocalStore,
    pub(super) config: ClientConfig,
    pub(super) client: Option<RemoteClient>,
    pub(super) memory: MemoryDir,
    pub(super) ctx: SessionContext,
    pub(super) screen: Screen,
    pub(super) quit: bool,
}

impl App {
    pub(super) fn load(opts: TuiRunOptions) -> Result<Self> {
        let config = opts.store.read_config()?;
        let remote = match opts.url {
            Some(base_url) => Some(RemoteConfig { base_url }),
            None => config.remote.clone(),
        };
        let client = remote.map(RemoteClient::new).transpose()?;
        let memory = match &config.memory_dir {
            Some(dir) => MemoryDir::new(dir),
            None => MemoryDir::new(opts.store.root().join("memories")),
        };
        let ctx = SessionContext::from_config(&config.session);

        let mut screen = Screen::default();
        if client.is_none() {
            screen.push_status("no remote configured; documents and opening lines are offline");
        }

        Ok(Self {
            store: opts.store,
            config,
            client,
            memory,
            ctx,
            screen,
            quit: false,
        })
    }

    fn report(&mut self, res: Result<()>) {
        if let Err(err) = res {
            let msg = format!("{:#}", err);
            self.screen.alert(&msg);
        }
    }

    pub(super) fn open_author_note(&mut self) {
        let res = author_note::open(&self.ctx, &self.store, &mut self.screen);
        self.report(res);
    }

    pub(super) fn open_memory(&mut self) {
        memory::open(&self.ctx, &self.memory, &mut self.screen);
    }

    pub(super) fn open_opening_line(&mut self) {
        let res = opening_line::open(&self.ctx, &self.store, &mut self.screen);
        self.report(res);
    }

    pub(super) fn close_form(&mut self, kind: ModalKind) {
        match kind {
            ModalKind::AuthorNote => author_note::close(&mut self.screen),
            ModalKind::Memory => memory::close(&mut self.screen),
            ModalKind::OpeningLine => opening_line::close(&mut self.screen),
        }
    }

    pub(super) fn save_form(&mut self, kind: ModalKind, enabled: bool, text: String) {
        let res = match kind {
            ModalKind::AuthorNote => {
                author_note::save(&self.ctx, &mut self.store, &mut self.screen, &text)
            }
            ModalKind::Memory => memory::save(&self.ctx, &mut self.memory, &mut self.screen, &text),
            ModalKind::OpeningLine => match &self.client {
                Some(client) => opening_line::save(
                    &mut self.ctx,
                    &mut self.store,
                    client,
                    &mut self.screen,
                    enabled,
                    &text,
                ),
                None => opening_line::save(
                    &mut self.ctx,
                    &mut self.store,
                    &Disconnected,
                    &mut self.screen,
                    enabled,
                    &text,
                ),
            },
        };
        if res.is_ok() {
            self.screen.push_status(format!("{} saved", kind.title()));
        }
        self.report(res);
    }

    /// Creates a chat on the backend, switches to it and lets the character
    /// open it. The previously selected chat is left as it was.
    pub(super) fn new_chat(&mut self) {
        let Some(client) = &self.client else {
            self.screen.push_status("new chat needs a remote (run `parlor remote set --url ...`)");
            return;
        };
        let greeted = match opening_line::start_chat(&mut self.ctx, client, &mut self.screen) {
            Ok(greeted) => greeted,
            Err(err) => {
                error!(error = %err, "failed to create chat");
                self.screen.alert("Failed to start a new chat");
                return;
            }
        };

        self.config.session.chat_id = self.ctx.chat_id.clone();
        let res = self.store.write_config(&self.config);
        self.report(res);

        let chat = self.ctx.chat_id.clone().unwrap_or_default();
        match greeted {
            Some(_) => self.screen.push_status(format!("{} started with opening line", chat)),
            None => self.screen.push_status(format!("{} started", chat)),
        }
    }

    fn project(&mut self) -> Option<String> {
        let project = self.config.session.project.clone().filter(|p| !p.is_empty());
        if project.is_none() {
            self.screen
                .push_status("no project selected (run `parlor session set --project ...`)");
        }
        project
    }

    pub(super) fn refresh_documents(&mut self) {
        let Some(client) = &self.client else {
            return;
        };
        let Some(project) = self.config.session.project.clone().filter(|p| !p.is_empty()) else {
            return;
        };
        DocumentPanel::new(client, &mut self.screen).refresh(&project);
    }

    pub(super) fn begin_upload(&mut self) {
        if self.client.is_none() || self.project().is_none() {
            return;
        }
        self.screen.modal = Some(Modal::prompt(ModalState::UploadPath));
    }

    pub(super) fn upload(&mut self, path: String) {
        self.screen.modal = None;
        let Some(project) = self.project() else {
            return;
        };
        let Some(client) = &self.client else {
            return;
        };
        let path = path.trim();
        let mut selection = if path.is_empty() {
            FileSelection::new()
        } else {
            FileSelection::of(PathBuf::from(path))
        };
        let outcome = DocumentPanel::new(client, &mut self.screen).upload(&project, &mut selection);
        self.log_outcome("upload", outcome);
    }

    pub(super) fn begin_delete(&mut self) {
        let Some(filename) = self.screen.selected_document().map(str::to_string) else {
            self.screen.push_status("no document selected");
            return;
        };
        self.screen.modal = Some(Modal::prompt(ModalState::ConfirmDelete { filename }));
    }

    pub(super) fn delete(&mut self, filename: String, confirmed: bool) {
        self.screen.modal = None;
        let Some(project) = self.project() else {
            return;
        };
        let Some(client) = &self.client else {
            return;
        };
        self.screen.preconfirmed = confirmed;
        let outcome = DocumentPanel::new(client, &mut self.screen).delete(&project, &filename);
        self.screen.preconfirmed = false;
        self.log_outcome("delete", outcome);
    }

    fn log_outcome(&mut self, action: &str, outcome: PanelOutcome) {
        let line = match outcome {
            PanelOutcome::Completed => format!("{} done", action),
            PanelOutcome::Skipped => format!("{}: nothing to do", action),
            PanelOutcome::Cancelled => format!("{} cancelled", action),
            PanelOutcome::Rejected(msg) => format!("{} rejected: {}", action, msg),
            PanelOutcome::Failed => format!("{} failed", action),
        };
        self.screen.push_status(line);
    }
}

/// Backend used while no remote is configured.
struct Disconnected;

impl crate::remote::ChatBackend for Disconnected {
    fn opening_lines(
        &self,
        _character: &str,
    ) -> Result<crate::model::OpeningLines, crate::remote::RemoteError> {
        Err(anyhow::anyhow!("no remote configured").into())
    }

    fn new_chat(&self, _character: &str) -> Result<String, crate::remote::RemoteError> {
        Err(anyhow::anyhow!("no remote configured").into())
    }

    fn save_chat(
        &self,
        _chat_id: &str,
        _messages: &[crate::model::ChatMessage],
    ) -> Result<(), crate::remote::RemoteError> {
        Err(anyhow::anyhow!("no remote configured").into())
    }
}
