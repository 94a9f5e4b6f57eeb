//! Listing dialect detection
//!
//! The first byte of a LIST line is enough to tell the formats apart.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Easily Parsed List Format, `+facts\tname`
    Eplf,
    /// `ls -l` layout, also used by NetWare, NetPresenz and Windows servers
    Unix,
    /// VMS and MultiNet, `NAME.EXT;version ...`
    Vms,
    /// `MM-DD-YY  HH:MMAM  <DIR>|size  name`
    MsDos,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Eplf => f.write_str("EPLF"),
            Dialect::Unix => f.write_str("Unix"),
            Dialect::Vms => f.write_str("VMS"),
            Dialect::MsDos => f.write_str("MS-DOS"),
        }
    }
}

/// Pick the dialect for `line`, or `None` when no parser applies.
pub fn classify(line: &str) -> Option<Dialect> {
    let bytes = line.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    match bytes[0] {
        b'+' => Some(Dialect::Eplf),
        b'b' | b'c' | b'd' | b'l' | b'p' | b's' | b'-' => Some(Dialect::Unix),
        _ if matches!(line.find(';'), Some(i) if i > 0) => Some(Dialect::Vms),
        b'0'..=b'9' => Some(Dialect::MsDos),
        _ => None,
    }
}
