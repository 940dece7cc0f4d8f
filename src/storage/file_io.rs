//! Line-oriented file I/O
//!
//! The data file is read line by line and rewritten in full on every save.
//! Writes truncate the existing file in place; a crash mid-write can leave it
//! truncated. Only one process may use a data file at a time.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};

/// Read every line of a file, returning an empty list if it doesn't exist
///
/// Lines are split on `\n` only and decoded lossily. A read error part way
/// through keeps the lines read so far.
pub fn read_lines<P: AsRef<Path>>(path: P) -> ExpenseResult<Vec<String>> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(ExpenseError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut lines = Vec::new();
    for chunk in BufReader::new(file).split(b'\n') {
        match chunk {
            Ok(bytes) => lines.push(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "stopped reading early");
                break;
            }
        }
    }

    Ok(lines)
}

/// Overwrite a file with the given lines, each terminated by `\n`
///
/// The file is truncated first, so the result is the given lines and nothing
/// else.
pub fn write_lines<P, I, S>(path: P, lines: I) -> ExpenseResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    let file = File::create(path).map_err(|e| {
        ExpenseError::Storage(format!("Failed to open {} for writing: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| ExpenseError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(())
}
