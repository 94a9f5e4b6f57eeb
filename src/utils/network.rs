//! Network utilities
//!
//! Address handling for the control and data connections.

/// A control-connection address split into what is dialed and the host the
/// data connections reuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress {
    pub dial: String,
    pub host: String,
}

/// Append `default_port` when `address` carries no port.
pub fn normalize_address(address: &str, default_port: u16) -> ServerAddress {
    let address = address.trim();
    let dial = if address.contains(':') {
        address.to_string()
    } else {
        format!("{}:{}", address, default_port)
    };
    let host = dial.split(':').next().unwrap_or_default().to_string();
    ServerAddress { dial, host }
}

/// Data connections go to the control host on the negotiated port.
pub fn data_address(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}
