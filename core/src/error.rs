//! Core error types for chanbuf.
//!
//! Only two operations on a [`BufferedTokenStream`](crate::BufferedTokenStream)
//! can fail; everything else clamps or returns `None`. Parsers that wrap the
//! stream should implement `From<chanbuf::StreamError>` for their own error
//! type.
//!
//! # Example
//!
//! ```ignore
//! use thiserror::Error;
//!
//! #[derive(Error, Debug)]
//! pub enum MyParseError {
//!     #[error("unexpected end of input")]
//!     UnexpectedEof,
//!
//!     #[error(transparent)]
//!     Stream(#[from] chanbuf::StreamError),
//! }
//! ```

use thiserror::Error;

/// Errors raised by the buffered token stream.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// The cursor already sits on the end-of-stream token.
    ///
    /// Returned by `consume()`. The end marker is never stepped over, so a
    /// parser that sees this has a bug in its termination logic.
    #[error("cannot consume EOF")]
    ConsumeEof,

    /// A hidden-token query named a token that is not buffered.
    #[error("token index {index} out of range 0..{len}")]
    IndexOutOfRange {
        /// The requested raw token index.
        index: usize,
        /// Number of tokens buffered when the query was made.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_consume_eof() {
        assert_eq!(StreamError::ConsumeEof.to_string(), "cannot consume EOF");
    }

    #[test]
    fn test_display_index_out_of_range() {
        let err = StreamError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "token index 7 out of range 0..3");
    }
}
