//! Logging utilities
//!
//! Provides logging setup and control-channel tracing.

use env_logger::Env;
use log::debug;

use crate::protocol::{Command, Reply};

/// Setup logging for the client. `RUST_LOG` overrides the `info` default.
pub fn setup_logging() {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Err(e) = builder.try_init() {
        debug!("Logger already initialised: {}", e);
    }
}

/// Trace an outgoing command. Passwords are never written.
pub fn log_command(host: &str, command: &Command) {
    debug!("{} >>> {}", host, command.redacted());
}

pub fn log_reply(host: &str, reply: &Reply) {
    debug!("{} <<< {} {}", host, reply.code, reply.message);
}
