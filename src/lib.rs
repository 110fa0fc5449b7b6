pub mod context;
pub mod documents;
pub mod format;
pub mod memory;
pub mod modals;
pub mod model;
pub mod remote;
pub mod store;
pub mod tui;
pub mod view;

mod tui_shell;
