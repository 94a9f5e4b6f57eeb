//! Listing result types

use log::debug;

use crate::listing::clock::Clock;
use crate::listing::entry::DirectoryEntry;
use crate::listing::ListingParser;

/// Outcome of parsing a whole listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingReport {
    pub entries: Vec<DirectoryEntry>,
    /// Non-blank lines no dialect could parse, without their line terminator.
    pub skipped: Vec<String>,
}

impl ListingReport {
    /// Parse one raw line into the report. Blank lines are ignored.
    pub fn record<C: Clock>(&mut self, parser: &ListingParser<C>, raw: &str) {
        let line = raw.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return;
        }

        match parser.parse_line(line) {
            Some(entry) => self.entries.push(entry),
            None => {
                debug!("Skipping unparsable listing line: {:?}", line);
                self.skipped.push(line.to_string());
            }
        }
    }
}
