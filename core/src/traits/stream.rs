use super::interval::SourceInterval;
use super::source::TokenSource;
use super::token::Token;
use crate::{Interval, StreamError, TokenType};

/// Opaque handle returned by [`IntStream::mark`].
///
/// Buffered streams keep every token they have fetched, so marking needs no
/// bookkeeping and every marker is the same constant. The pair is kept so
/// that speculative parsing code can be written once against any stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Marker(usize);

impl Marker {
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn id(self) -> usize {
        self.0
    }
}

/// A positional stream of symbols.
///
/// All indices in this trait are raw buffer positions. Lookahead offsets are
/// counted in visible symbols: `la(1)` is the current symbol, `la(-1)` the
/// previous one.
pub trait IntStream {
    /// Advances past the current symbol.
    ///
    /// Returns `Err(StreamError::ConsumeEof)` if the current symbol is the
    /// end-of-stream marker.
    fn consume(&mut self) -> Result<(), StreamError>;

    /// Returns the type of the `k`-th visible symbol relative to the cursor.
    ///
    /// `k == 0` is undefined and yields `None`.
    fn la(&mut self, k: isize) -> Option<TokenType>;

    /// Starts a speculative region.
    fn mark(&mut self) -> Marker;

    /// Ends a speculative region started by [`mark`](Self::mark).
    fn release(&mut self, marker: Marker);

    /// Current cursor position, or `None` before the first access.
    fn index(&self) -> Option<usize>;

    /// Moves the cursor to the first visible symbol at or after `index`.
    fn seek(&mut self, index: usize);

    /// Number of symbols buffered so far.
    fn size(&self) -> usize;

    fn source_name(&self) -> &str;
}

/// A stream of tokens with lookahead and text reconstruction.
pub trait TokenStream: IntStream {
    type Token: Token;

    type Source: TokenSource<Token = Self::Token>;

    /// Returns the `k`-th visible token relative to the cursor.
    ///
    /// `lt(1)` is the current token and negative `k` looks backwards. Once
    /// the input is exhausted every positive `k` yields the end-of-stream
    /// token.
    fn lt(&mut self, k: isize) -> Option<&Self::Token>;

    /// Raw, unfiltered access by buffer position.
    fn get(&mut self, index: usize) -> Option<&Self::Token>;

    fn token_source(&self) -> &Self::Source;

    /// Concatenated text of the tokens in `interval`, up to end-of-stream.
    fn text_from_interval(&mut self, interval: Interval) -> String;

    /// Text of the tokens between two buffered tokens, inclusive.
    ///
    /// Returns an empty string if either token was never buffered.
    fn text_from_tokens(&mut self, start: &Self::Token, stop: &Self::Token) -> String {
        match (start.token_index(), stop.token_index()) {
            (Some(start), Some(stop)) => self.text_from_interval(Interval::new(start, stop)),
            _ => String::new(),
        }
    }

    /// Text covered by a range provider such as a parse-tree node.
    fn text_for<R: SourceInterval + ?Sized>(&mut self, range: &R) -> String {
        match range.source_interval() {
            Some(interval) => self.text_from_interval(interval),
            None => String::new(),
        }
    }

    /// Text of the whole input.
    fn all_text(&mut self) -> String {
        self.text_from_interval(Interval::new(0, usize::MAX))
    }
}
