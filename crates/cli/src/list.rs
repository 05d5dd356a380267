use std::io;
use std::process::ExitCode;

use anyhow::Context;
use log::debug;

use lsl_fs::{scan_dir, sort_by_name};
use lsl_runtime::PROGRAM_NAME;

use crate::printer::{ColumnWidths, TablePrinter};

pub fn run() -> ExitCode {
    match list_cwd() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{PROGRAM_NAME}: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Scan → sort → measure → render, all over the process working directory.
fn list_cwd() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    debug!("[list] cwd = {:?}", cwd);

    let mut records = scan_dir(&cwd).context("listing failed")?;
    sort_by_name(&mut records);

    let widths = ColumnWidths::measure(&records);

    let stdout = io::stdout();
    let mut printer = TablePrinter::new(stdout.lock(), widths);
    for record in &records {
        printer.print_row(record)?;
    }
    printer.flush()?;

    Ok(())
}
