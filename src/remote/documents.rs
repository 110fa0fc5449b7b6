//! Project document upload, listing and removal.

use reqwest::blocking::multipart::{Form, Part};
use serde::de::IgnoredAny;

use crate::model::DocumentList;

use super::*;

impl DocumentBackend for RemoteClient {
    fn upload_document(
        &self,
        project: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadReceipt, RemoteError> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(filename.to_string()));
        let resp = self
            .client
            .post(self.url(&["projects", project, "documents", "upload"])?)
            .multipart(form)
            .send()
            .context("upload document request")?;
        self.read_json(resp, "upload document")
    }

    fn list_documents(&self, project: &str) -> Result<Vec<DocumentDescriptor>, RemoteError> {
        let resp = self
            .client
            .get(self.url(&["projects", project, "documents", "list"])?)
            .send()
            .context("list documents request")?;
        let list: DocumentList = self.read_json(resp, "list documents")?;
        Ok(list.documents)
    }

    fn delete_document(&self, project: &str, filename: &str) -> Result<(), RemoteError> {
        let resp = self
            .client
            .delete(self.url(&["projects", project, "documents", filename])?)
            .send()
            .context("delete document request")?;
        let _: IgnoredAny = self.read_json(resp, "delete document")?;
        Ok(())
    }
}
