//! Control session
//!
//! Handles the control connection, its state, and the reply reader.

pub mod operations;
pub mod reader;
pub mod session;
pub mod state;

pub use reader::{ContinuationMode, ReplyQuirks};
pub use session::ControlSession;
pub use state::SessionState;
