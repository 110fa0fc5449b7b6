//! Open/close/save handlers for the side-panel modals.
//!
//! Each handler reads and writes only the scope selected in the
//! [`SessionContext`](crate::context::SessionContext) it is handed.

pub mod author_note;
pub mod memory;
pub mod opening_line;
