//! Project catalogue operations.

use serde::de::IgnoredAny;

use crate::model::{ProjectConfig, ProjectList};

use super::*;

impl RemoteClient {
    pub fn list_projects(&self) -> Result<ProjectList, RemoteError> {
        let resp = self
            .client
            .get(self.url(&["projects", "list"])?)
            .send()
            .context("list projects request")?;
        self.read_json(resp, "list projects")
    }

    /// Returns the filesystem-safe name the backend stored the project under.
    pub fn create_project(&self, name: &str, instructions: &str) -> Result<String, RemoteError> {
        let resp = self
            .client
            .post(self.url(&["projects", "create"])?)
            .json(&CreateProjectRequest { name, instructions })
            .send()
            .context("create project request")?;
        let created: CreateProjectResponse = self.read_json(resp, "create project")?;
        Ok(created.name)
    }

    pub fn get_project(&self, name: &str) -> Result<ProjectConfig, RemoteError> {
        let resp = self
            .client
            .get(self.url(&["projects", "get", name])?)
            .send()
            .context("get project request")?;
        self.read_json(resp, "get project")
    }

    pub fn update_project(&self, name: &str, update: &ProjectUpdate) -> Result<(), RemoteError> {
        let resp = self
            .client
            .post(self.url(&["projects", "update", name])?)
            .json(update)
            .send()
            .context("update project request")?;
        let _: IgnoredAny = self.read_json(resp, "update project")?;
        Ok(())
    }

    /// `None` clears the active project.
    pub fn switch_project(&self, name: Option<&str>) -> Result<Option<String>, RemoteError> {
        let resp = self
            .client
            .post(self.url(&["projects", "switch"])?)
            .json(&SwitchProjectRequest { name })
            .send()
            .context("switch project request")?;
        let switched: SwitchProjectResponse = self.read_json(resp, "switch project")?;
        Ok(switched.active)
    }

    pub fn delete_project(&self, name: &str) -> Result<(), RemoteError> {
        let resp = self
            .client
            .delete(self.url(&["projects", "delete", name])?)
            .send()
            .context("delete project request")?;
        let _: IgnoredAny = self.read_json(resp, "delete project")?;
        Ok(())
    }
}
