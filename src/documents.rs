//! Project document panel: upload, list and delete against the backend, with
//! the list re-rendered from scratch after every change.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::format::format_file_size;
use crate::remote::{DocumentBackend, RemoteError};
use crate::view::{DocumentListing, DocumentRow, View};

const UPLOAD_FAILED: &str = "Failed to upload document";
const LIST_FAILED: &str = "Failed to load documents";
const DELETE_FAILED: &str = "Failed to delete document";

/// What a panel action ended up doing. Alerts have already been shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelOutcome {
    Completed,
    /// Nothing to do (no file selected).
    Skipped,
    /// The user declined the confirmation; no request was sent.
    Cancelled,
    /// The backend refused with its own message.
    Rejected(String),
    /// Transport, decoding or local IO failure.
    Failed,
}

/// The file picked for upload. Cleared after a successful upload so the same
/// file can be picked again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSelection {
    path: Option<PathBuf>,
}

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn clear(&mut self) {
        self.path = None;
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_none()
    }
}

pub struct DocumentPanel<'a> {
    backend: &'a dyn DocumentBackend,
    view: &'a mut dyn View,
}

impl<'a> DocumentPanel<'a> {
    pub fn new(backend: &'a dyn DocumentBackend, view: &'a mut dyn View) -> Self {
        Self { backend, view }
    }

    pub fn upload(&mut self, project: &str, selection: &mut FileSelection) -> PanelOutcome {
        let Some(path) = selection.path().map(Path::to_path_buf) else {
            return PanelOutcome::Skipped;
        };

        let Some(filename) = path.file_name().and_then(|n| n.to_str()).map(str::to_string)
        else {
            error!(path = %path.display(), "upload path has no usable file name");
            self.view.alert(UPLOAD_FAILED);
            return PanelOutcome::Failed;
        };

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to read document");
                self.view.alert(UPLOAD_FAILED);
                return PanelOutcome::Failed;
            }
        };

        match self.backend.upload_document(project, &filename, bytes) {
            Ok(receipt) => {
                match receipt.filename {
                    Some(stored) => info!(project, filename = %stored, "document uploaded"),
                    None => warn!(project, %filename, "upload reply carried no filename"),
                }
                self.refresh(project);
                selection.clear();
                PanelOutcome::Completed
            }
            Err(RemoteError::Server(msg)) => {
                warn!(project, %filename, reason = %msg, "upload rejected");
                self.view.alert(&format!("Upload failed: {}", msg));
                PanelOutcome::Rejected(msg)
            }
            Err(RemoteError::Transport(err)) => {
                error!(project, %filename, error = %format!("{:#}", err), "upload error");
                self.view.alert(UPLOAD_FAILED);
                PanelOutcome::Failed
            }
        }
    }

    /// Fetches the project's documents and replaces the rendered list.
    pub fn refresh(&mut self, project: &str) -> PanelOutcome {
        match self.backend.list_documents(project) {
            Ok(docs) => {
                let listing = DocumentListing {
                    project: project.to_string(),
                    rows: docs
                        .iter()
                        .map(|d| DocumentRow {
                            filename: d.filename.clone(),
                            size_label: format_file_size(d.size),
                        })
                        .collect(),
                };
                debug!(project, count = listing.rows.len(), "documents listed");
                self.view.render_documents(&listing);
                PanelOutcome::Completed
            }
            Err(err) => {
                error!(project, error = %err, "failed to load documents");
                self.view.alert(LIST_FAILED);
                match err {
                    RemoteError::Server(msg) => PanelOutcome::Rejected(msg),
                    RemoteError::Transport(_) => PanelOutcome::Failed,
                }
            }
        }
    }

    pub fn delete(&mut self, project: &str, filename: &str) -> PanelOutcome {
        if !self.view.confirm(&format!("Delete \"{}\"?", filename)) {
            debug!(project, filename, "delete declined");
            return PanelOutcome::Cancelled;
        }

        match self.backend.delete_document(project, filename) {
            Ok(()) => {
                info!(project, filename, "document deleted");
                self.refresh(project);
                PanelOutcome::Completed
            }
            Err(RemoteError::Server(msg)) => {
                warn!(project, filename, reason = %msg, "delete rejected");
                self.view.alert(&format!("Delete failed: {}", msg));
                PanelOutcome::Rejected(msg)
            }
            Err(RemoteError::Transport(err)) => {
                error!(project, filename, error = %format!("{:#}", err), "delete error");
                self.view.alert(DELETE_FAILED);
                PanelOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/documents_tests.rs"]
mod tests;
