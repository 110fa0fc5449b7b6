use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    pub filename: String,
    pub size: u64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DocumentList {
    #[serde(default)]
    pub documents: Vec<DocumentDescriptor>,
}

/// Body of a successful upload. The server echoes the stored filename, but
/// older builds answer with a bare `{}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub filename: Option<String>,
}
