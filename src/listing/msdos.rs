//! MS-DOS style lines, as sent by IIS
//!
//! ```text
//! 04-27-00  09:09PM       <DIR>          licensed
//! 04-14-99  03:47PM                  589 readme.htm
//! ```

use crate::listing::clock::utc_datetime;
use crate::listing::dialect::Dialect;
use crate::listing::entry::{DirectoryEntry, MtimeKind};
use crate::listing::scan::{digits, Scanner};
use crate::listing::trim_line;

/// Two-digit years: 00-49 are 20xx, 50-99 are 19xx.
fn normalize_year(year: i32) -> i32 {
    if year < 50 {
        year + 2000
    } else if year < 1000 {
        year + 1900
    } else {
        year
    }
}

pub(crate) fn parse(line: &str) -> Option<DirectoryEntry> {
    let buf = trim_line(line);
    let mut scan = Scanner::new(buf);

    let month: u32 = digits(scan.take_until(b'-')?)?;
    scan.skip_run(b'-')?;
    let day: u32 = digits(scan.take_until(b'-')?)?;
    scan.skip_run(b'-')?;
    let year = normalize_year(digits(scan.take_until(b' ')?)?);
    scan.skip_run(b' ')?;

    let mut hour: u32 = digits(scan.take_until(b':')?)?;
    scan.skip_run(b':')?;
    let minute: u32 = digits(scan.take_until_any(b"AP")?)?;
    if scan.peek() == Some(b'A') {
        scan.advance()?;
    }
    if scan.peek() == Some(b'P') {
        hour = (hour + 12) % 24;
        scan.advance()?;
    }
    if scan.peek() == Some(b'M') {
        scan.advance()?;
    }
    scan.skip_run(b' ')?;

    let mut entry = DirectoryEntry::new(line, Dialect::MsDos);
    if scan.peek() == Some(b'<') {
        entry.try_cwd = true;
        scan.seek(b' ')?;
    } else {
        entry.try_retr = true;
        entry.size = digits(scan.take_until(b' ')?)?;
    }
    scan.skip_run(b' ')?;

    entry.name = scan.rest().to_string();
    entry.set_mtime(
        MtimeKind::RemoteMinute,
        utc_datetime(year, month, day, hour, minute)?,
    );
    Some(entry)
}
