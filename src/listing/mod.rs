//! Directory listing parser
//!
//! Turns LIST output into `DirectoryEntry` values. Each line is classified
//! by its first byte and handed to the matching dialect parser. A line no
//! parser accepts produces no entry; it never aborts the listing.

pub mod clock;
pub mod dialect;
pub mod entry;
mod eplf;
mod msdos;
pub mod results;
mod scan;
mod unix;
mod vms;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dialect::{classify, Dialect};
pub use entry::{DirectoryEntry, IdKind, MtimeKind};
pub use results::ListingReport;

/// Strip the whitespace listings pad lines with.
pub(crate) fn trim_line(line: &str) -> &str {
    line.trim_matches(['\t', '\n', '\r', ' '])
}

/// Listing parser bound to a time source for year guessing.
#[derive(Debug, Clone, Default)]
pub struct ListingParser<C: Clock = SystemClock> {
    clock: C,
}

impl ListingParser<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> ListingParser<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Parse one line, or `None` when no dialect accepts it.
    pub fn parse_line(&self, line: &str) -> Option<DirectoryEntry> {
        match classify(line)? {
            Dialect::Eplf => eplf::parse(line),
            Dialect::Unix => unix::parse(line, self.clock.now()),
            Dialect::Vms => vms::parse(line),
            Dialect::MsDos => msdos::parse(line),
        }
    }

    /// Parse a complete listing, one entry per line.
    pub fn parse_listing(&self, text: &str) -> ListingReport {
        let mut report = ListingReport::default();
        for line in text.lines() {
            report.record(self, line);
        }
        report
    }
}
