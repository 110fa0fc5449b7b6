/// Failure of a backend call, split so callers can show the server's own
/// message and fall back to a generic one for everything else.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The backend answered with an `{"error": ...}` payload.
    #[error("{0}")]
    Server(String),
    /// Connection, status or decoding failure.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl RemoteError {
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RemoteError::Server(msg) => Some(msg),
            RemoteError::Transport(_) => None,
        }
    }
}
