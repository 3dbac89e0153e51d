//! Core traits for the chanbuf token stream.
//!
//! This module defines the seams between a token producer, the buffered
//! stream, and the parser that consumes it.
//!
//! # Trait Hierarchy
//!
//! ```text
//! TokenSource (producer, pulled lazily)
//!     └── type Token: Token
//!
//! IntStream (generic positional contract)
//!     └── TokenStream (token lookahead + text reconstruction)
//!
//! SourceInterval (anything naming an inclusive token range)
//! ```
//!
//! # Usage Patterns
//!
//! ## Writing a parser against the stream
//!
//! ```ignore
//! use chanbuf::{IntStream, TokenStream, TokenType};
//!
//! fn parse_assignment(stream: &mut impl TokenStream) -> Result<(), MyError> {
//!     if stream.la(1) == Some(IDENT) && stream.la(2) == Some(EQ) {
//!         stream.consume()?;
//!         stream.consume()?;
//!         parse_expr(stream)
//!     } else {
//!         Err(MyError::expected("assignment"))
//!     }
//! }
//! ```
//!
//! ## Plugging in a token producer
//!
//! ```ignore
//! use chanbuf::{CommonToken, TokenSource};
//!
//! impl TokenSource for MyLexer<'_> {
//!     type Token = CommonToken;
//!
//!     fn next_token(&mut self) -> CommonToken {
//!         self.scan().unwrap_or_else(CommonToken::eof)
//!     }
//!
//!     fn source_name(&self) -> &str {
//!         &self.path
//!     }
//! }
//! ```

mod interval;
mod source;
mod stream;
mod token;

pub use interval::SourceInterval;
pub use source::TokenSource;
pub use stream::{IntStream, Marker, TokenStream};
pub use token::Token;
