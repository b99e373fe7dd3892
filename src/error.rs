//! Error types for Subset

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubsetError {
    /// Raised by `sample` and `remove_random` when there is nothing to draw from.
    /// The container is left untouched and stays usable.
    #[error("Container is empty")]
    EmptyContainer,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(String),
}

pub type Result<T> = std::result::Result<T, SubsetError>;

impl SubsetError {
    /// The reader of our output went away, e.g. `subset 5 | head -1`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, SubsetError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, ErrorKind, Write};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_broken_pipe_detected() {
        let err = crate::subset(2, "a\nb\nc\n".as_bytes(), ClosedPipe).unwrap_err();
        assert!(err.is_broken_pipe());
    }

    #[test]
    fn test_other_errors_are_not_broken_pipe() {
        assert!(!SubsetError::EmptyContainer.is_broken_pipe());
        assert!(!SubsetError::Io(io::Error::from(ErrorKind::NotFound)).is_broken_pipe());
        assert!(!SubsetError::Output("bad".to_string()).is_broken_pipe());
    }
}
