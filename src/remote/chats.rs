//! Opening lines and chat transcript persistence.

use serde::de::IgnoredAny;

use super::*;

impl RemoteClient {
    pub fn get_opening_lines(&self, character: &str) -> Result<OpeningLines, RemoteError> {
        let resp = self
            .client
            .get(self.url(&["get_opening_lines", character])?)
            .send()
            .context("get opening lines request")?;
        self.read_json(resp, "get opening lines")
    }

    pub fn save_opening_lines(
        &self,
        character: &str,
        enabled: bool,
        lines: &[String],
    ) -> Result<(), RemoteError> {
        let resp = self
            .client
            .post(self.url(&["save_opening_lines"])?)
            .json(&SaveOpeningLinesRequest {
                character,
                enabled,
                lines,
            })
            .send()
            .context("save opening lines request")?;
        let _: IgnoredAny = self.read_json(resp, "save opening lines")?;
        Ok(())
    }

    /// Asks the backend for a fresh, empty chat file for `character`.
    pub fn create_chat(&self, character: &str) -> Result<String, RemoteError> {
        let resp = self
            .client
            .post(self.url(&["chats", "new"])?)
            .json(&NewChatRequest { character })
            .send()
            .context("new chat request")?;
        let created: NewChatResponse = self.read_json(resp, "new chat")?;
        Ok(created.filename)
    }

    pub fn save_chat_messages(
        &self,
        chat_id: &str,
        messages: &[ChatMessage],
    ) -> Result<(), RemoteError> {
        let resp = self
            .client
            .post(self.url(&["chats", "save"])?)
            .json(&SaveChatRequest {
                filename: chat_id,
                messages,
            })
            .send()
            .context("save chat request")?;
        let _: IgnoredAny = self.read_json(resp, "save chat")?;
        Ok(())
    }
}

impl ChatBackend for RemoteClient {
    fn opening_lines(&self, character: &str) -> Result<OpeningLines, RemoteError> {
        self.get_opening_lines(character)
    }

    fn new_chat(&self, character: &str) -> Result<String, RemoteError> {
        self.create_chat(character)
    }

    fn save_chat(&self, chat_id: &str, messages: &[ChatMessage]) -> Result<(), RemoteError> {
        self.save_chat_messages(chat_id, messages)
    }
}
