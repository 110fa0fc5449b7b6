use parlor::memory::MemoryDir;

use super::*;

/// Everything a handler needs from the on-disk workspace.
pub(super) struct Workspace {
    pub(super) store: LocalStore,
    pub(super) config: ClientConfig,
    url: Option<String>,
}

impl Workspace {
    pub(super) fn ctx(&self) -> SessionContext {
        SessionContext::from_config(&self.config.session)
    }

    pub(super) fn client(&self) -> Result<RemoteClient> {
        let remote = require_remote(&self.store, self.url.as_deref())?;
        RemoteClient::new(remote)
    }

    /// Configured memory directory, else `.parlor/memories`.
    pub(super) fn memory_source(&self) -> MemoryDir {
        match &self.config.memory_dir {
            Some(dir) => MemoryDir::new(dir),
            None => MemoryDir::new(self.store.root().join("memories")),
        }
    }

    pub(super) fn project(&self, explicit: Option<String>) -> Result<String> {
        explicit
            .or_else(|| self.config.session.project.clone())
            .filter(|p| !p.is_empty())
            .context("no project selected (run `parlor session set --project ...` or pass --project)")
    }
}

pub(super) fn with_workspace<T>(
    url: Option<String>,
    f: impl FnOnce(&mut Workspace) -> Result<T>,
) -> Result<T> {
    let cwd = std::env::current_dir().context("get current dir")?;
    let store = LocalStore::discover(&cwd)?;
    let config = store.read_config()?;
    let mut ws = Workspace { store, config, url };
    f(&mut ws)
}
