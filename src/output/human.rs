//! Plain output, one line per element

use std::io::Write;

use crate::error::Result;

/// Write each line followed by `\n`, bytes passed through untouched
pub fn write_human<'a, I, W>(lines: I, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = &'a [u8]>,
    W: Write,
{
    let mut written = 0;
    for line in lines {
        out.write_all(line)?;
        out.write_all(b"\n")?;
        written += 1;
    }
    Ok(written)
}
