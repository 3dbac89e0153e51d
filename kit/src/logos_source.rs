//! [`TokenSource`] adapter for `logos` lexers.
//!
//! Derive [`logos::Logos`] on a token enum, implement [`ChannelKind`] to map
//! each variant onto a [`TokenType`] and [`Channel`], and wrap the lexer in a
//! [`LogosSource`]. Whitespace and comments should be *kept* by the lexer and
//! routed to a hidden channel rather than skipped, so that the stream can
//! hand them back through the hidden-token queries and text reconstruction.
//!
//! # Example
//!
//! ```ignore
//! use chanbuf::{BufferedTokenStream, Channel, ChannelKind, LogosSource, TokenType};
//! use logos::Logos;
//!
//! #[derive(Logos, Debug, Clone, Copy, PartialEq)]
//! enum Kind {
//!     #[regex(r"[ \t\r\n]+")]
//!     Ws,
//!     #[regex(r"[a-z]+")]
//!     Word,
//! }
//!
//! impl ChannelKind for Kind {
//!     fn token_type(&self) -> TokenType {
//!         TokenType(*self as i32 + 1)
//!     }
//!
//!     fn channel(&self) -> Channel {
//!         match self {
//!             Kind::Ws => Channel::HIDDEN,
//!             Kind::Word => Channel::DEFAULT,
//!         }
//!     }
//! }
//!
//! let mut stream = BufferedTokenStream::new(LogosSource::<Kind>::new("hello world"));
//! ```

use core::fmt::Debug;

use logos::{Lexer, Logos};
use tracing::debug;

use crate::{Channel, CommonToken, Span, Token, TokenSource, TokenType};

/// Maps a lexer's token enum onto stream token types and channels.
pub trait ChannelKind {
    /// Stream token type for this variant. Must not be [`TokenType::EOF`].
    fn token_type(&self) -> TokenType;

    /// Channel this variant is emitted on.
    #[inline]
    fn channel(&self) -> Channel {
        Channel::DEFAULT
    }
}

/// A [`TokenSource`] producing [`CommonToken`]s from a `logos` lexer.
///
/// Text the lexer rejects becomes a [`TokenType::INVALID`] token on the
/// default channel, so reconstructed text still covers the whole input.
/// After the last token an end-of-stream token spanning the end of the input
/// is returned on every call.
pub struct LogosSource<'s, K: Logos<'s>> {
    lexer: Lexer<'s, K>,
    name: String,
    eof: Option<CommonToken>,
}

impl<'s, K> LogosSource<'s, K>
where
    K: Logos<'s, Source = str>,
{
    pub const DEFAULT_NAME: &'static str = "<input>";

    /// Lexes `source` with default lexer extras.
    pub fn new(source: &'s str) -> Self
    where
        K::Extras: Default,
    {
        Self::from_lexer(K::lexer(source))
    }

    /// Wraps an already configured lexer, e.g. one built with custom extras.
    pub fn from_lexer(lexer: Lexer<'s, K>) -> Self {
        Self {
            lexer,
            name: Self::DEFAULT_NAME.to_owned(),
            eof: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The full input being lexed.
    #[inline]
    pub fn input(&self) -> &'s str {
        self.lexer.source()
    }
}

impl<'s, K> TokenSource for LogosSource<'s, K>
where
    K: Logos<'s, Source = str> + ChannelKind,
    K::Error: Debug,
{
    type Token = CommonToken;

    fn next_token(&mut self) -> CommonToken {
        if let Some(eof) = &self.eof {
            return eof.clone();
        }

        let Some(result) = self.lexer.next() else {
            let end = self.lexer.source().len();
            let eof = CommonToken::eof().with_span(Span::new(end, end));
            self.eof = Some(eof.clone());
            return eof;
        };

        let range = self.lexer.span();
        let span = Span::new(range.start, range.end);
        let text: &str = self.lexer.slice();
        match result {
            Ok(kind) => CommonToken::new(kind.token_type(), text)
                .with_channel(kind.channel())
                .with_span(span),
            Err(error) => {
                debug!(?error, start = span.start, end = span.end, "unrecognised input");
                CommonToken::new(TokenType::INVALID, text).with_span(span)
            }
        }
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
