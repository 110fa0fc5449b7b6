use anyhow::Result;

use crate::store::LocalStore;

pub struct TuiRunOptions {
    pub store: LocalStore,
    /// Overrides the configured backend URL.
    pub url: Option<String>,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
