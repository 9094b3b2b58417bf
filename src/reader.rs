// src/reader.rs
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{CoverageError, Result};

/// Open a plain or gzip compressed text file for line based reading.
/// Files ending in `.gz` are decompressed on the fly.
pub fn open_text(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|e| CoverageError::io(path, e))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };
    Ok(BufReader::new(file))
}

/// Walk every line of `reader`, handing the 1-based line number and the line
/// without its line ending to `f`. Blank lines are passed on as well, so the
/// field count check rejects them.
/// Stops at the first error returned by `f`.
pub fn for_each_line<R, F>(reader: R, path: &Path, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<()>,
{
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => CoverageError::format(
                &path.display().to_string(),
                idx + 1,
                "line is not valid UTF-8",
            ),
            _ => CoverageError::io(path, e),
        })?;
        let line = line.trim_end_matches(['\r', '\n']);
        f(idx + 1, line)?;
    }
    Ok(())
}

/// Split a tab separated line and insist on exactly `expected` fields.
pub fn split_fields<'a>(
    line: &'a str,
    expected: usize,
    source_name: &str,
    line_no: usize,
) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != expected {
        return Err(CoverageError::format(
            source_name,
            line_no,
            format!(
                "expected {expected} tab separated fields, found {}",
                fields.len()
            ),
        ));
    }
    Ok(fields)
}

/// Parse a non-negative integer column.
pub fn parse_u64(value: &str, column: &str, source_name: &str, line_no: usize) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|_| {
        CoverageError::format(
            source_name,
            line_no,
            format!("{column} '{value}' is not a non-negative integer"),
        )
    })
}
