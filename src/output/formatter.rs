//! Output formatting

use std::io::Write;

use crate::error::Result;
use crate::output::human::write_human;
use crate::output::json::write_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Write `lines` to `out` in the given format, returning how many were written
pub fn write_output<'a, I, W>(lines: I, format: OutputFormat, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = &'a [u8]>,
    W: Write,
{
    match format {
        OutputFormat::Human => write_human(lines, out),
        OutputFormat::Json => write_json(lines, out),
    }
}
