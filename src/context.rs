use crate::model::{ChatMessage, Scope, SessionConfig, UNKNOWN_CHARACTER};

/// What the user currently has selected, handed to every handler.
#[derive(Clone, Debug, Default)]
pub struct SessionContext {
    pub chat_id: Option<String>,
    pub character: Option<String>,
    pub project: Option<String>,
    /// Transcript of the open chat; `None` until a chat is loaded.
    pub transcript: Option<Vec<ChatMessage>>,
}

impl SessionContext {
    pub fn from_config(session: &SessionConfig) -> Self {
        Self {
            chat_id: session.chat_id.clone(),
            character: session.character.clone(),
            project: session.project.clone(),
            transcript: None,
        }
    }

    pub fn chat_scope(&self) -> Option<Scope> {
        self.chat_id.clone().map(Scope::Chat)
    }

    /// Falls back to `"Unknown"` so character-scoped saves always land somewhere.
    pub fn character_name(&self) -> &str {
        self.character
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(UNKNOWN_CHARACTER)
    }

    pub fn character_scope(&self) -> Scope {
        Scope::Character(self.character_name().to_string())
    }

    pub fn transcript_is_empty(&self) -> bool {
        self.transcript.as_ref().is_some_and(|t| t.is_empty())
    }
}
