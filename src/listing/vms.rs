//! VMS and MultiNet lines
//!
//! ```text
//! CORE.DIR;1      1 8-NOV-1999 07:02 [SYSTEM] (RWED,RWED,RE,RE)
//! CII-MANUAL.TEX;1  213/216  29-JAN-1996 03:33:12  [ANONYMOU,ANONYMOUS]   (RWED,RWED,,)
//! ```
//!
//! Sizes are in blocks and are not reported. Seconds are dropped.

use crate::listing::clock::{month_from_abbrev, utc_datetime};
use crate::listing::dialect::Dialect;
use crate::listing::entry::{DirectoryEntry, MtimeKind};
use crate::listing::scan::{digits, Scanner};
use crate::listing::trim_line;

pub(crate) fn parse(line: &str) -> Option<DirectoryEntry> {
    let buf = trim_line(line);
    let semi = buf.find(';').filter(|&i| i > 0)?;

    let mut entry = DirectoryEntry::new(line, Dialect::Vms);
    let name = &buf[..semi];
    match name.strip_suffix(".DIR") {
        Some(dir) if !dir.is_empty() => {
            entry.name = dir.to_string();
            entry.try_cwd = true;
        }
        _ => {
            entry.name = name.to_string();
            entry.try_retr = true;
        }
    }

    let mut scan = Scanner::at(buf, semi);
    // version, then block count
    for _ in 0..2 {
        scan.seek(b' ')?;
        scan.skip_run(b' ')?;
    }

    let day: u32 = digits(scan.take_until(b'-')?)?;
    scan.skip_run(b'-')?;
    let month = month_from_abbrev(scan.take_until(b'-')?)?;
    scan.skip_run(b'-')?;
    let year: i32 = digits(scan.take_until(b' ')?)?;
    scan.skip_run(b' ')?;
    let hour: u32 = digits(scan.take_until(b':')?)?;
    scan.skip_run(b':')?;
    let minute: u32 = digits(scan.take_until_any(b": ")?)?;

    entry.set_mtime(
        MtimeKind::RemoteMinute,
        utc_datetime(year, month, day, hour, minute)?,
    );
    Some(entry)
}
