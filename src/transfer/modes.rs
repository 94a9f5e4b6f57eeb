//! FTP Transfer modes
//!
//! Selects how the data port is negotiated before a transfer.

use serde::Deserialize;
use std::fmt;

/// Passive negotiation used when opening a data connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassiveModeKind {
    /// `PASV`, port taken from the `(h1,h2,h3,h4,p1,p2)` list
    #[default]
    Pasv,
    /// `EPSV`, port taken from `(|||port|)`
    Epsv,
}

impl fmt::Display for PassiveModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassiveModeKind::Pasv => f.write_str("PASV"),
            PassiveModeKind::Epsv => f.write_str("EPSV"),
        }
    }
}
