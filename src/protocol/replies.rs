//! Reply payload parsers
//!
//! Extracts the data embedded in PASV, EPSV and PWD success replies.

use crate::error::ProtocolError;
use crate::transfer::results::PassiveEndpoint;
use std::net::Ipv4Addr;

/// Parse `(h1,h2,h3,h4,p1,p2)` out of a PASV reply message.
pub fn parse_pasv_reply(message: &str) -> Result<PassiveEndpoint, ProtocolError> {
    let malformed = || ProtocolError::MalformedPassiveReply(message.to_string());

    let start = message.find('(').ok_or_else(malformed)?;
    let end = message.find(')').ok_or_else(malformed)?;
    if end <= start {
        return Err(malformed());
    }

    let fields = message[start + 1..end]
        .split(',')
        .map(|f| f.trim().parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| malformed())?;
    if fields.len() != 6 {
        return Err(malformed());
    }

    let port = u16::from(fields[4]) * 256 + u16::from(fields[5]);
    Ok(PassiveEndpoint {
        port,
        advertised_ip: Some(Ipv4Addr::new(fields[0], fields[1], fields[2], fields[3])),
    })
}

/// Parse `(|||port|)` out of an EPSV reply message.
pub fn parse_epsv_reply(message: &str) -> Result<PassiveEndpoint, ProtocolError> {
    let malformed = || ProtocolError::MalformedPassiveReply(message.to_string());

    let start = message.find("|||").ok_or_else(malformed)?;
    let end = message.rfind('|').ok_or_else(malformed)?;
    if end < start + 3 {
        return Err(malformed());
    }

    let port = message[start + 3..end]
        .parse::<u16>()
        .map_err(|_| malformed())?;
    Ok(PassiveEndpoint {
        port,
        advertised_ip: None,
    })
}

/// Extract the path between the first and last double quote of a PWD reply.
pub fn parse_pwd_reply(message: &str) -> Result<String, ProtocolError> {
    match (message.find('"'), message.rfind('"')) {
        (Some(start), Some(end)) if end > start => Ok(message[start + 1..end].to_string()),
        _ => Err(ProtocolError::UnsupportedReplyFormat(message.to_string())),
    }
}
