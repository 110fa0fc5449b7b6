//! Request and response bodies that only exist on the wire.

use crate::model::ChatMessage;

#[derive(Debug, serde::Serialize)]
pub(super) struct SaveOpeningLinesRequest<'a> {
    pub(super) character: &'a str,
    pub(super) enabled: bool,
    pub(super) lines: &'a [String],
}

#[derive(Debug, serde::Serialize)]
pub(super) struct NewChatRequest<'a> {
    pub(super) character: &'a str,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct NewChatResponse {
    pub(super) filename: String,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct SaveChatRequest<'a> {
    pub(super) filename: &'a str,
    pub(super) messages: &'a [ChatMessage],
}

#[derive(Debug, serde::Serialize)]
pub(super) struct CreateProjectRequest<'a> {
    pub(super) name: &'a str,
    pub(super) instructions: &'a str,
}

#[derive(Debug, Default, serde::Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct SwitchProjectRequest<'a> {
    pub(super) name: Option<&'a str>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct CreateProjectResponse {
    pub(super) name: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct SwitchProjectResponse {
    #[serde(default)]
    pub(super) active: Option<String>,
}
