//! Module `state`
//!
//! Tracks what the control session knows about itself: which host it talks
//! to, whether login succeeded, whether a data transfer still owes the
//! session a completion reply, and whether the connection is gone.

/// State of one control session.
#[derive(Debug, Clone)]
pub struct SessionState {
    host: String,
    username: Option<String>,
    is_logged_in: bool,
    is_completion_pending: bool,
    is_closed: bool,
}

impl SessionState {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            username: None,
            is_logged_in: false,
            is_completion_pending: false,
            is_closed: false,
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Host part of the address the session dialed. Data connections go here.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns whether the server accepted the login.
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    /// Returns whether an abandoned transfer's completion reply is still unread.
    pub fn is_completion_pending(&self) -> bool {
        self.is_completion_pending
    }

    /// Returns whether the control connection is unusable.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    // --------------------
    // Setter methods
    // --------------------

    /// Records a successful login for `username`.
    pub fn set_logged_in(&mut self, username: &str) {
        self.username = Some(username.to_string());
        self.is_logged_in = true;
    }

    pub fn set_completion_pending(&mut self, pending: bool) {
        self.is_completion_pending = pending;
    }

    /// Marks the session closed. Closing is permanent.
    pub fn set_closed(&mut self) {
        self.is_closed = true;
        self.is_completion_pending = false;
    }
}
