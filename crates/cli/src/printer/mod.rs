use std::io::{self, Write};

use lsl_fs::FileRecord;

/// Widths of the variable-width columns, measured over a whole batch so
/// every row aligns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Decimal digits of the largest link count.
    pub nlink: usize,
    /// Byte length of the longest owner name.
    pub owner: usize,
    /// Byte length of the longest group name.
    pub group: usize,
    /// Decimal digits of the largest size.
    pub size: usize,
}

impl ColumnWidths {
    /// Single pass over the batch; every width has a floor of 1, so an
    /// empty batch measures as all-ones.
    pub fn measure(records: &[FileRecord]) -> Self {
        let mut widths = ColumnWidths {
            nlink: 1,
            owner: 1,
            group: 1,
            size: 1,
        };

        for record in records {
            widths.nlink = widths.nlink.max(decimal_width(record.nlink));
            widths.owner = widths.owner.max(record.owner.len());
            widths.group = widths.group.max(record.group.len());
            widths.size = widths.size.max(decimal_width(record.size));
        }

        widths
    }
}

fn decimal_width(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Renders aligned `ls -l` style rows against precomputed column widths.
///
/// Generic over the writer so tests can render into a buffer; production
/// use hands it a locked stdout.
pub struct TablePrinter<W: Write> {
    out: W,
    widths: ColumnWidths,
}

impl<W: Write> TablePrinter<W> {
    pub fn new(out: W, widths: ColumnWidths) -> Self {
        Self { out, widths }
    }

    /// One line per record: mode, link count, owner and group left-aligned,
    /// size right-aligned, then `Mon dd hh:mm name`. Day-of-month is
    /// space-padded to two columns, hour and minute zero-padded.
    pub fn print_row(&mut self, record: &FileRecord) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {:<nw$} {:<ow$} {:<gw$} {:>sw$} {} {:>2} {:02}:{:02} {}",
            record.mode,
            record.nlink,
            record.owner,
            record.group,
            record.size,
            record.mtime.month,
            record.mtime.day,
            record.mtime.hour,
            record.mtime.minute,
            record.name,
            nw = self.widths.nlink,
            ow = self.widths.owner,
            gw = self.widths.group,
            sw = self.widths.size,
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
