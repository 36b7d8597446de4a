//! Log command implementation.

use crate::utils::oplog::OpLog;
use crate::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Print the tail of the operation log.
pub fn show_log(path: PathBuf, lines: usize) -> Result<()> {
    let log = OpLog::new(path);

    if !log.path().exists() {
        println!("{}", "No log entries yet.".yellow());
        return Ok(());
    }

    for line in log.tail(lines)? {
        println!("{}", line);
    }

    Ok(())
}
