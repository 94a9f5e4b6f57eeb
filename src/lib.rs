//! RAX FTP Client
//!
//! An async FTP client: one control session per server, passive-mode data
//! connections, and a LIST parser that understands the common server
//! dialects.

pub mod client;
pub mod config;
pub mod error;
pub mod listing;
pub mod protocol;
pub mod transfer;
pub mod utils;

pub use client::ControlSession;
pub use config::{ClientConfig, SessionConfig};
pub use error::{FtpClientError, FtpResult};
pub use listing::{DirectoryEntry, ListingParser, ListingReport};
pub use transfer::DataTransferChannel;
