use anyhow::{Context, Result};

use crate::model::{ChatMessage, DocumentDescriptor, OpeningLines, RemoteConfig, UploadReceipt};

mod error;
pub use self::error::RemoteError;

mod http_client;

mod types;
pub use self::types::*;
mod chats;
mod documents;
mod projects;

/// Chat-side calls the modal handlers make.
pub trait ChatBackend {
    fn opening_lines(&self, character: &str) -> Result<OpeningLines, RemoteError>;
    /// Creates an empty chat for `character`; returns its filename.
    fn new_chat(&self, character: &str) -> Result<String, RemoteError>;
    fn save_chat(&self, chat_id: &str, messages: &[ChatMessage]) -> Result<(), RemoteError>;
}

/// Project document storage the document panel drives.
pub trait DocumentBackend {
    fn upload_document(
        &self,
        project: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadReceipt, RemoteError>;
    fn list_documents(&self, project: &str) -> Result<Vec<DocumentDescriptor>, RemoteError>;
    fn delete_document(&self, project: &str, filename: &str) -> Result<(), RemoteError>;
}

pub struct RemoteClient {
    remote: RemoteConfig,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(remote: RemoteConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("parlor")
            .build()
            .context("build reqwest client")?;
        Ok(Self { remote, client })
    }
}
