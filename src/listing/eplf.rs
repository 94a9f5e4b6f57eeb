//! EPLF lines: `+fact,fact,...\tname`

use chrono::{TimeZone, Utc};

use crate::listing::dialect::Dialect;
use crate::listing::entry::{DirectoryEntry, IdKind, MtimeKind};
use crate::listing::scan::digits;
use crate::listing::trim_line;

pub(crate) fn parse(line: &str) -> Option<DirectoryEntry> {
    let buf = trim_line(line);
    let (facts, name) = buf.strip_prefix('+')?.split_once('\t')?;
    if name.is_empty() {
        return None;
    }

    let mut entry = DirectoryEntry::new(line, Dialect::Eplf);
    for fact in facts.split(',') {
        let mut chars = fact.chars();
        let Some(tag) = chars.next() else {
            continue;
        };
        let value = chars.as_str();
        match tag {
            '/' => entry.try_cwd = true,
            'r' => entry.try_retr = true,
            's' => entry.size = digits(value)?,
            'm' => {
                let secs: i64 = digits(value)?;
                entry.set_mtime(MtimeKind::LocalClock, Utc.timestamp_opt(secs, 0).single()?);
            }
            'i' => {
                entry.id_kind = IdKind::Full;
                entry.id = Some(value.to_string());
            }
            _ => {}
        }
    }

    entry.name = name.to_string();
    Some(entry)
}
