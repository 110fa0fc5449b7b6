use serde::{Deserialize, Serialize};

/// Server-side opening line set for one character.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningLines {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub lines: Vec<String>,
}
