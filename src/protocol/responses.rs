//! FTP Response handling
//!
//! Defines FTP reply codes, decoded replies and reply-code expectations.

/// Standard FTP reply codes
pub const ALREADY_OPEN: u16 = 125;
pub const ABOUT_TO_SEND: u16 = 150;
pub const COMMAND_OK: u16 = 200;
pub const READY: u16 = 220;
pub const CLOSING_DATA_CONNECTION: u16 = 226;
pub const PASSIVE_MODE: u16 = 227;
pub const EXTENDED_PASSIVE_MODE: u16 = 229;
pub const LOGGED_IN: u16 = 230;
pub const REQUESTED_FILE_ACTION_OK: u16 = 250;
pub const PATH_CREATED: u16 = 257;
pub const USER_OK: u16 = 331;
pub const REQUEST_FILE_PENDING: u16 = 350;

/// One decoded reply from the control connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub code: u16,
    /// The first line was hyphen-marked (`DDD-`).
    pub continued: bool,
    /// Text after the separator on the first line.
    pub message: String,
    /// Raw follow-up lines absorbed while completing a multi-line reply.
    pub extra_lines: Vec<String>,
}

impl Reply {
    pub fn new(code: u16, continued: bool, message: impl Into<String>) -> Self {
        Self {
            code,
            continued,
            message: message.into(),
            extra_lines: Vec::new(),
        }
    }
}

/// The reply code (or family of codes) a command is allowed to answer with.
///
/// A family is a truncated code: class `2` matches 200-299, group `22`
/// matches 220-229.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedReply {
    Any,
    Class(u16),
    Group(u16),
    Exact(u16),
}

impl ExpectedReply {
    /// Interpret a 1, 2 or 3 digit number as class, group or exact code.
    pub fn family(value: u16) -> Self {
        match value {
            1..=9 => ExpectedReply::Class(value),
            10..=99 => ExpectedReply::Group(value),
            100..=999 => ExpectedReply::Exact(value),
            _ => ExpectedReply::Any,
        }
    }

    pub fn matches(&self, code: u16) -> bool {
        match *self {
            ExpectedReply::Any => true,
            ExpectedReply::Class(class) => code / 100 == class,
            ExpectedReply::Group(group) => code / 10 == group,
            ExpectedReply::Exact(exact) => code == exact,
        }
    }
}
