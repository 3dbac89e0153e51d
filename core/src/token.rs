//! Token value types.
//!
//! [`TokenType`] and [`Channel`] are plain integer newtypes so that token
//! enums from any lexer can be mapped onto them. [`RequestedChannel`] is the
//! query-side counterpart used by the hidden-token lookups, and
//! [`CommonToken`] is the concrete token produced by the bundled sources.

use core::fmt;

use crate::traits::Token;

/// Numeric token kind.
///
/// Positive values are lexer-defined; [`TokenType::EOF`] and
/// [`TokenType::INVALID`] are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct TokenType(pub i32);

impl TokenType {
    /// The end-of-stream marker.
    pub const EOF: Self = Self(-1);

    /// Text the lexer could not match.
    pub const INVALID: Self = Self(0);

    #[inline]
    pub const fn is_eof(self) -> bool {
        self.0 == Self::EOF.0
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            f.write_str("EOF")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A logical partition of the token stream.
///
/// Tokens on [`Channel::DEFAULT`] carry grammar structure; every other
/// channel carries auxiliary tokens such as whitespace or comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct Channel(pub u32);

impl Channel {
    pub const DEFAULT: Self = Self(0);
    pub const HIDDEN: Self = Self(1);

    #[inline]
    pub const fn is_default(self) -> bool {
        self.0 == Self::DEFAULT.0
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which off-channel tokens a hidden-token query should collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum RequestedChannel {
    /// Exactly this channel.
    Specific(Channel),
    /// Any channel other than [`Channel::DEFAULT`].
    AnyHidden,
}

impl RequestedChannel {
    /// Returns `true` if a token on `channel` satisfies this request.
    #[inline]
    pub fn matches(self, channel: Channel) -> bool {
        match self {
            Self::Specific(wanted) => channel == wanted,
            Self::AnyHidden => !channel.is_default(),
        }
    }
}

impl From<Channel> for RequestedChannel {
    #[inline]
    fn from(channel: Channel) -> Self {
        Self::Specific(channel)
    }
}

/// Byte offsets of a token within its source text.
///
/// `end` is exclusive. Synthesised tokens use an empty span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Uses saturating subtraction, so an inverted span has length `0`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    pub fn join(&self, other: &Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// The token type produced by [`VecSource`](crate::VecSource) and the
/// `logos` adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct CommonToken {
    kind: TokenType,
    channel: Channel,
    text: String,
    index: Option<usize>,
    span: Span,
}

impl CommonToken {
    /// A default-channel token with an empty span and no buffer index.
    pub fn new(kind: TokenType, text: impl Into<String>) -> Self {
        Self {
            kind,
            channel: Channel::DEFAULT,
            text: text.into(),
            index: None,
            span: Span::default(),
        }
    }

    #[inline]
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    #[inline]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }
}

impl Token for CommonToken {
    #[inline]
    fn token_type(&self) -> TokenType {
        self.kind
    }

    #[inline]
    fn channel(&self) -> Channel {
        self.channel
    }

    #[inline]
    fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    fn token_index(&self) -> Option<usize> {
        self.index
    }

    #[inline]
    fn set_token_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    fn eof() -> Self {
        Self::new(TokenType::EOF, "")
    }
}

impl fmt::Display for CommonToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.kind.is_eof() {
            "<EOF>".into()
        } else {
            self.text.escape_debug().to_string()
        };
        match self.index {
            Some(index) => write!(f, "[@{index}")?,
            None => f.write_str("[@-")?,
        }
        write!(
            f,
            ",{}:{}='{}',<{}>",
            self.span.start, self.span.end, text, self.kind
        )?;
        if !self.channel.is_default() {
            write!(f, ",channel={}", self.channel)?;
        }
        f.write_str("]")
    }
}
