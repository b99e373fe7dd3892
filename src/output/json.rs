//! JSON output formatting

use std::io::Write;

use crate::error::{Result, SubsetError};

/// Write the lines as a pretty-printed JSON array of strings.
///
/// Bytes that are not valid UTF-8 become U+FFFD.
pub fn write_json<'a, I, W>(lines: I, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = &'a [u8]>,
    W: Write,
{
    let lines: Vec<_> = lines.into_iter().map(String::from_utf8_lossy).collect();
    serde_json::to_writer_pretty(&mut *out, &lines)
        .map_err(|e| SubsetError::Output(e.to_string()))?;
    writeln!(out)?;
    Ok(lines.len())
}
