use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A modification timestamp broken into the pieces the table renders,
/// already converted to local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModTime {
    /// Carried for parity with the stat data; the table renders month,
    /// day and hh:mm only.
    pub year: i32,
    pub month: &'static str,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ModTime {
    pub fn from_unix_secs(secs: i64) -> Self {
        let local = Local
            .timestamp_opt(secs, 0)
            .earliest()
            .unwrap_or_else(Local::now);
        Self::from_datetime(local)
    }

    pub fn from_datetime(dt: DateTime<Local>) -> Self {
        ModTime {
            year: dt.year(),
            month: MONTH_ABBREV[dt.month0() as usize],
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }
}

/// One row of the long listing. Immutable once built; the pipeline only
/// reorders records and measures column widths over them.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Inode number (not rendered).
    pub ino: u64,
    /// Fixed 10-character type and permission string.
    pub mode: String,
    /// Hard link count.
    pub nlink: u64,
    pub owner: String,
    pub group: String,
    pub size: u64,
    pub mtime: ModTime,
    /// Entry name, including the `.` and `..` rows.
    pub name: String,
}

/// Sort records by name, byte-wise ascending. Stable, so duplicate names
/// (which only a scanner bug could produce) keep their scan order.
pub fn sort_by_name(records: &mut [FileRecord]) {
    records.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
