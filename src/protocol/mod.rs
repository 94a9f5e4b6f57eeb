//! FTP Protocol implementation
//!
//! Handles the control-channel grammar: commands sent, status lines
//! decoded, and the payloads embedded in success replies.

pub mod codec;
pub mod commands;
pub mod replies;
pub mod responses;

pub use codec::parse_status_line;
pub use commands::Command;
pub use replies::{parse_epsv_reply, parse_pasv_reply, parse_pwd_reply};
pub use responses::{ExpectedReply, Reply};
