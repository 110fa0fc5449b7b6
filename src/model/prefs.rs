use std::fmt;

/// Character name used when no character is selected.
pub const UNKNOWN_CHARACTER: &str = "Unknown";

/// The preference slots a modal can persist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefKey {
    AuthorNote,
    OpeningLineEnabled,
    OpeningLineText,
}

impl PrefKey {
    pub fn prefix(self) -> &'static str {
        match self {
            PrefKey::AuthorNote => "author-note",
            PrefKey::OpeningLineEnabled => "opening-line-enabled",
            PrefKey::OpeningLineText => "opening-line",
        }
    }

    /// Storage key for this slot within `scope`, e.g. `author-note-chat1.txt`.
    pub fn storage_key(self, scope: &Scope) -> String {
        format!("{}-{}", self.prefix(), scope)
    }
}

/// What a preference entry is keyed to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    Chat(String),
    Character(String),
}

impl Scope {
    pub fn as_str(&self) -> &str {
        match self {
            Scope::Chat(s) | Scope::Character(s) => s,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
