//! Transfer module for the FTP client
//!
//! Handles passive-mode negotiation results, the data channel and the
//! commands that move bytes over it.

pub mod data_channel;
pub mod modes;
pub mod operations;
pub mod results;

// Re-export key types
pub use data_channel::DataTransferChannel;
pub use modes::PassiveModeKind;
pub use results::PassiveEndpoint;
