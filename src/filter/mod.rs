//! Random line filter
//!
//! Reads every line of an input stream into a [`RandomContainer`] and writes
//! the first `count` elements of one randomized traversal. Lines are raw
//! bytes split on `\n`: any encoding and any `\r` before the newline pass
//! through unchanged.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, trace};

use crate::container::RandomContainer;
use crate::error::Result;
use crate::output::{write_output, OutputFormat};
use crate::random::{RandomSource, ThreadRandom};

/// Options controlling a filter run
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions {
    /// How many lines to emit at most
    pub count: usize,
    pub format: OutputFormat,
}

/// Summary of a filter run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub lines_read: usize,
    pub lines_written: usize,
}

/// Write `min(count, lines)` random lines of `input` to `output`, one per line.
///
/// # Example
/// ```
/// let input = "x\ny\nz\n".as_bytes();
/// let mut output: Vec<u8> = Vec::new();
/// let report = subset::subset(2, input, &mut output).unwrap();
/// assert_eq!(report.lines_written, 2);
/// ```
pub fn subset<I, O>(count: usize, input: I, output: O) -> Result<FilterReport>
where
    I: BufRead,
    O: Write,
{
    let options = FilterOptions {
        count,
        format: OutputFormat::Human,
    };
    subset_with(&options, ThreadRandom, input, output)
}

/// [`subset`] with an explicit output format and randomness source
pub fn subset_with<R, I, O>(
    options: &FilterOptions,
    source: R,
    input: I,
    mut output: O,
) -> Result<FilterReport>
where
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    let container = read_lines(source, input)?;
    debug!(lines = container.len(), count = options.count, "read input");

    let selected = container
        .traverse()
        .take(options.count)
        .map(Vec::as_slice);
    let lines_written = write_output(selected, options.format, &mut output)?;
    output.flush()?;

    let report = FilterReport {
        lines_read: container.len(),
        lines_written,
    };
    debug!(?report, "filter finished");
    Ok(report)
}

/// Collect every line of `input` into a container drawing from `source`
pub fn read_lines<R, I>(source: R, input: I) -> Result<RandomContainer<Vec<u8>, R>>
where
    R: RandomSource,
    I: BufRead,
{
    let mut container = RandomContainer::with_source(source);
    for line in input.split(b'\n') {
        let line = line?;
        trace!(len = line.len(), "line");
        container.insert(line);
    }
    Ok(container)
}
