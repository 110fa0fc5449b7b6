mod chat;
mod config;
mod documents;
mod opening_lines;
mod prefs;
mod project;

pub use self::chat::{ChatMessage, Role};
pub use self::config::{ClientConfig, RemoteConfig, SessionConfig};
pub use self::documents::{DocumentDescriptor, DocumentList, UploadReceipt};
pub use self::opening_lines::OpeningLines;
pub use self::prefs::{PrefKey, Scope, UNKNOWN_CHARACTER};
pub use self::project::{ProjectConfig, ProjectList, ProjectSummary};
