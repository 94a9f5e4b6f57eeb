//! Transfer result types
//!
//! Defines result structures returned by data-port negotiation.

use std::net::Ipv4Addr;

/// Result of a PASV or EPSV negotiation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassiveEndpoint {
    pub port: u16,
    /// Address the server advertised in a PASV reply. Only logged; the
    /// data connection always dials the control host.
    pub advertised_ip: Option<Ipv4Addr>,
}
