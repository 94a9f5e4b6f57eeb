//! Module `commands`
//!
//! Defines the FTP commands the client sends on the control connection
//! and their exact wire form.

use std::fmt;

/// Represents an FTP command sent to the server.
///
/// Commands that take an argument store it as a `String`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    User(String), // Username for login
    Pass(String), // Password for login
    Pasv,         // Enter passive mode
    Epsv,         // Enter extended passive mode
    List(String), // Directory listing, empty for the current directory
    Cwd(String),  // Change working directory
    Cdup,
    Pwd,
    Retr(String), // Retrieve/download file
    Stor(String), // Store/upload file
    Rnfr(String),
    Rnto(String),
    Dele(String),
    Mkd(String),
    Rmd(String),
    Noop,
    Quit,
}

impl Command {
    /// The command verb, as it appears on the wire.
    pub fn verb(&self) -> &'static str {
        match self {
            Command::User(_) => "USER",
            Command::Pass(_) => "PASS",
            Command::Pasv => "PASV",
            Command::Epsv => "EPSV",
            Command::List(_) => "LIST",
            Command::Cwd(_) => "CWD",
            Command::Cdup => "CDUP",
            Command::Pwd => "PWD",
            Command::Retr(_) => "RETR",
            Command::Stor(_) => "STOR",
            Command::Rnfr(_) => "RNFR",
            Command::Rnto(_) => "RNTO",
            Command::Dele(_) => "DELE",
            Command::Mkd(_) => "MKD",
            Command::Rmd(_) => "RMD",
            Command::Noop => "NOOP",
            Command::Quit => "QUIT",
        }
    }

    pub fn argument(&self) -> Option<&str> {
        match self {
            Command::User(arg)
            | Command::Pass(arg)
            | Command::List(arg)
            | Command::Cwd(arg)
            | Command::Retr(arg)
            | Command::Stor(arg)
            | Command::Rnfr(arg)
            | Command::Rnto(arg)
            | Command::Dele(arg)
            | Command::Mkd(arg)
            | Command::Rmd(arg) => Some(arg),
            _ => None,
        }
    }

    /// Full line sent to the server, CRLF terminated.
    pub fn to_wire(&self) -> String {
        format!("{}\r\n", self)
    }

    /// Printable form with the password masked.
    pub fn redacted(&self) -> String {
        match self {
            Command::Pass(_) => "PASS ****".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.argument() {
            Some(arg) if !arg.is_empty() => write!(f, "{} {}", self.verb(), arg),
            _ => f.write_str(self.verb()),
        }
    }
}
