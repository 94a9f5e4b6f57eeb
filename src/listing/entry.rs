//! Directory entry types
//!
//! The normalized result of parsing one LIST line, whatever its dialect.

use chrono::{DateTime, Utc};

use crate::listing::dialect::Dialect;

/// How much is known about `DirectoryEntry::mtime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MtimeKind {
    #[default]
    Unknown,
    /// Seconds since the epoch, as reported by the server (EPLF).
    LocalClock,
    /// Server-local wall clock, minute precision.
    RemoteMinute,
    /// Server-local date only; the time of day is midnight.
    RemoteDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdKind {
    #[default]
    Unknown,
    /// A server-unique identifier (EPLF `i` fact).
    Full,
}

/// One entry of a directory listing.
///
/// `try_cwd` and `try_retr` are hints and may both be set (symlinks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub raw_line: String,
    pub dialect: Dialect,
    pub name: String,
    pub try_cwd: bool,
    pub try_retr: bool,
    pub size: u64,
    pub mtime_kind: MtimeKind,
    pub mtime: Option<DateTime<Utc>>,
    pub id_kind: IdKind,
    pub id: Option<String>,
    pub link_target: Option<String>,
}

impl DirectoryEntry {
    pub(crate) fn new(raw_line: &str, dialect: Dialect) -> Self {
        Self {
            raw_line: raw_line.to_string(),
            dialect,
            name: String::new(),
            try_cwd: false,
            try_retr: false,
            size: 0,
            mtime_kind: MtimeKind::Unknown,
            mtime: None,
            id_kind: IdKind::Unknown,
            id: None,
            link_target: None,
        }
    }

    pub(crate) fn set_mtime(&mut self, kind: MtimeKind, mtime: DateTime<Utc>) {
        self.mtime_kind = kind;
        self.mtime = Some(mtime);
    }
}
