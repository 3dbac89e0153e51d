use super::BufferedTokenStream;
use crate::Interval;
use crate::traits::{SourceInterval, Token, TokenSource, TokenStream};

impl<S: TokenSource> BufferedTokenStream<S> {
    /// Concatenated text of the tokens in `interval`.
    ///
    /// Fills the buffer first, so the result always reflects the complete
    /// input. `stop` is clamped to the last token, text stops before the
    /// end-of-stream token, and an empty interval yields an empty string.
    pub fn text_from_interval(&mut self, interval: impl Into<Interval>) -> String {
        let interval = interval.into();
        self.fill();

        let Some(last) = self.tokens.len().checked_sub(1) else {
            return String::new();
        };
        let stop = interval.stop.min(last);
        if interval.start > stop {
            return String::new();
        }

        self.tokens[interval.start..=stop]
            .iter()
            .take_while(|t| !t.is_eof())
            .map(|t| t.text())
            .collect()
    }

    /// See [`TokenStream::text_from_tokens`].
    #[inline]
    pub fn text_from_tokens(&mut self, start: &S::Token, stop: &S::Token) -> String {
        TokenStream::text_from_tokens(self, start, stop)
    }

    /// See [`TokenStream::text_for`].
    #[inline]
    pub fn text_for<R: SourceInterval + ?Sized>(&mut self, range: &R) -> String {
        TokenStream::text_for(self, range)
    }

    /// See [`TokenStream::all_text`].
    #[inline]
    pub fn all_text(&mut self) -> String {
        TokenStream::all_text(self)
    }
}
