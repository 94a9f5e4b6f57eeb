//! `ls -l` style lines and their NetWare, NetPresenz and Windows variants
//!
//! ```text
//! -rw-r--r--   1 root     other     531 Jan 29 03:26 README
//! d [R----F--] supervisor    512    Jan 16 18:53    login
//! drwxrwxr-x               folder   2 May 10  1996 bar.sit
//! ```
//!
//! The line is split on spaces and fed token by token through `Field`;
//! once the time-or-year field has been read, the rest of the line is the
//! name.

use chrono::{DateTime, Utc};

use crate::listing::clock::{guess_year, month_from_abbrev, utc_datetime};
use crate::listing::dialect::Dialect;
use crate::listing::entry::{DirectoryEntry, MtimeKind};
use crate::listing::scan::digits;
use crate::listing::trim_line;

/// Which field the next token fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Permissions,
    LinkCount,
    Owner,
    TentativeSize,
    MonthOrSize,
    Day,
    TimeOrYear,
    Name,
}

#[derive(Debug, Default)]
struct Fields {
    size: Option<u64>,
    month: u32,
    day: u32,
    mtime: Option<(MtimeKind, DateTime<Utc>)>,
}

impl Field {
    /// Consume one token. `None` aborts the parse.
    fn next(self, token: &str, fields: &mut Fields, now: DateTime<Utc>) -> Option<Field> {
        match self {
            Field::Permissions => Some(Field::LinkCount),
            // NetPresenz puts "folder" where the link count goes and has no group.
            Field::LinkCount if token.len() == 6 && token.starts_with('f') => {
                Some(Field::TentativeSize)
            }
            Field::LinkCount => Some(Field::Owner),
            Field::Owner => Some(Field::TentativeSize),
            Field::TentativeSize => {
                fields.size = digits(token);
                Some(Field::MonthOrSize)
            }
            Field::MonthOrSize => match month_from_abbrev(token) {
                Some(month) => {
                    fields.size?;
                    fields.month = month;
                    Some(Field::Day)
                }
                None => {
                    fields.size = digits(token);
                    Some(Field::MonthOrSize)
                }
            },
            Field::Day => {
                fields.day = digits(token)?;
                Some(Field::TimeOrYear)
            }
            Field::TimeOrYear => {
                fields.mtime = Some(time_or_year(token, fields.month, fields.day, now)?);
                Some(Field::Name)
            }
            Field::Name => Some(Field::Name),
        }
    }
}

/// `H:MM` or `HH:MM` means a date within the last year; anything else of
/// four or more characters is a year.
fn time_or_year(
    token: &str,
    month: u32,
    day: u32,
    now: DateTime<Utc>,
) -> Option<(MtimeKind, DateTime<Utc>)> {
    let b = token.as_bytes();
    let clock = match b.len() {
        4 if b[1] == b':' => Some((&token[..1], &token[2..])),
        5 if b[2] == b':' => Some((&token[..2], &token[3..])),
        _ => None,
    };

    match clock {
        Some((hour, minute)) => {
            let t = guess_year(now, month, day, digits(hour)?, digits(minute)?)?;
            Some((MtimeKind::RemoteMinute, t))
        }
        None if b.len() >= 4 => {
            let year = digits(token)?;
            Some((MtimeKind::RemoteDay, utc_datetime(year, month, day, 0, 0)?))
        }
        None => None,
    }
}

pub(crate) fn parse(line: &str, now: DateTime<Utc>) -> Option<DirectoryEntry> {
    let buf = trim_line(line);
    let bytes = buf.as_bytes();

    let mut field = Field::Permissions;
    let mut fields = Fields::default();
    let mut token_start = 0;
    let mut name_start = None;
    for j in 1..bytes.len() {
        if bytes[j] != b' ' || bytes[j - 1] == b' ' {
            continue;
        }
        field = field.next(&buf[token_start..j], &mut fields, now)?;
        if field == Field::Name {
            name_start = Some(j + 1);
            break;
        }
        token_start = j + 1;
        while bytes.get(token_start) == Some(&b' ') {
            token_start += 1;
        }
    }

    let (kind, mtime) = fields.mtime?;
    let mut name = &buf[name_start?..];

    let mut entry = DirectoryEntry::new(line, Dialect::Unix);
    match bytes[0] {
        b'd' => entry.try_cwd = true,
        b'-' => entry.try_retr = true,
        b'l' => {
            entry.try_cwd = true;
            entry.try_retr = true;
            if let Some((link, target)) = name.split_once(" -> ") {
                name = link;
                entry.link_target = Some(target.to_string());
            }
        }
        _ => {}
    }

    // NetWare pads the name with spaces.
    if matches!(bytes.get(1), Some(b' ' | b'[')) && name.len() > 3 {
        name = name.trim();
    }
    if name.is_empty() {
        return None;
    }

    entry.name = name.to_string();
    entry.size = fields.size?;
    entry.set_mtime(kind, mtime);
    Some(entry)
}
