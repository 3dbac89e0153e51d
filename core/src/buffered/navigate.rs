use tracing::trace;

use super::BufferedTokenStream;
use crate::traits::{Token, TokenSource};
use crate::{Channel, StreamError, TokenType};

impl<S: TokenSource> BufferedTokenStream<S> {
    /// Raw index of the first token at or after raw index `i` that is on
    /// this stream's channel, fetching as needed.
    ///
    /// The scan always matches [`channel`](Self::channel); the `_channel`
    /// argument only mirrors [`previous_on_channel`](Self::previous_on_channel).
    /// The end-of-stream token ends the scan and is returned whatever its
    /// channel, so the result is `None` only when `i` lies past the end of
    /// the input.
    pub fn next_on_channel(&mut self, mut i: usize, _channel: Channel) -> Option<usize> {
        self.sync(i);
        loop {
            let token = self.tokens.get(i)?;
            if token.channel() == self.channel || token.is_eof() {
                return Some(i);
            }
            i += 1;
            self.sync(i);
        }
    }

    /// Raw index of the last buffered token at or before raw index `i` that
    /// is on `channel`. Never fetches.
    pub fn previous_on_channel(&self, i: usize, channel: Channel) -> Option<usize> {
        let last = self.tokens.len().checked_sub(1)?;
        self.tokens[..=i.min(last)]
            .iter()
            .rposition(|t| t.channel() == channel)
    }

    /// Snaps a raw index forward to the nearest visible token.
    #[inline]
    pub(crate) fn adjust_seek_index(&mut self, i: usize) -> Option<usize> {
        self.next_on_channel(i, self.channel)
    }

    /// Returns the `k`-th visible token relative to the cursor.
    ///
    /// `lt(1)` is the current token, `lt(2)` the next visible one, and so
    /// on; negative `k` delegates to [`lb`](Self::lb). Lookahead never runs
    /// past end-of-stream: once the input is exhausted every further `k`
    /// lands on the end-of-stream token. `lt(0)` is `None`.
    pub fn lt(&mut self, k: isize) -> Option<&S::Token> {
        self.lazy_init();
        if k == 0 {
            return None;
        }
        if k < 0 {
            return self.lb(k.unsigned_abs());
        }

        let mut i = self.cursor?;
        for _ in 1..k.unsigned_abs() {
            if !self.sync(i + 1) {
                break;
            }
            match self.next_on_channel(i + 1, self.channel) {
                Some(next) => i = next,
                None => break,
            }
        }
        self.tokens.get(i)
    }

    /// Returns the `k`-th visible token before the cursor.
    ///
    /// Only already-buffered tokens are examined. `None` if the stream is
    /// uninitialised, `k == 0`, or fewer than `k` visible tokens precede the
    /// cursor.
    pub fn lb(&self, k: usize) -> Option<&S::Token> {
        let cursor = self.cursor?;
        // k visible tokens cannot fit in fewer than k raw slots
        if k == 0 || cursor < k {
            return None;
        }

        let mut i = cursor;
        for _ in 0..k {
            i = self.previous_on_channel(i.checked_sub(1)?, self.channel)?;
        }
        self.tokens.get(i)
    }

    /// Type of [`lt(k)`](Self::lt).
    #[inline]
    pub fn la(&mut self, k: isize) -> Option<TokenType> {
        self.lt(k).map(Token::token_type)
    }

    /// Advances the cursor to the next visible token.
    ///
    /// Fails with [`StreamError::ConsumeEof`] when the cursor is on the
    /// end-of-stream token.
    pub fn consume(&mut self) -> Result<(), StreamError> {
        // The cursor can only be on EOF if it is the last buffered token.
        let skip_eof_check = match self.cursor {
            Some(cursor) if self.reached_end => cursor + 1 < self.tokens.len(),
            Some(cursor) => cursor < self.tokens.len(),
            None => false,
        };
        if !skip_eof_check && self.la(1) == Some(TokenType::EOF) {
            return Err(StreamError::ConsumeEof);
        }

        let Some(cursor) = self.cursor else {
            return Ok(());
        };
        if self.sync(cursor + 1) {
            if let Some(next) = self.adjust_seek_index(cursor + 1) {
                trace!(from = cursor, to = next, "consume");
                self.cursor = Some(next);
            }
        }
        Ok(())
    }

    /// Moves the cursor to the first visible token at or after raw index
    /// `index`. Seeking past the end of the input lands on end-of-stream.
    pub fn seek(&mut self, index: usize) {
        self.lazy_init();
        let target = self
            .adjust_seek_index(index)
            .or_else(|| self.tokens.len().checked_sub(1));
        trace!(index, cursor = ?target, "seek");
        self.cursor = target;
    }

    /// Equivalent to `seek(0)`.
    #[inline]
    pub fn reset(&mut self) {
        self.seek(0);
    }

    /// Raw, unfiltered access by buffer position. Never fetches beyond the
    /// first token.
    pub fn get(&mut self, index: usize) -> Option<&S::Token> {
        self.lazy_init();
        self.tokens.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;
    use crate::{CommonToken, VecSource};
    use test_case::test_case;

    fn text(token: Option<&CommonToken>) -> Option<&str> {
        token.map(|t| t.text())
    }

    #[test]
    fn test_lazy_init_positions_on_first_visible() {
        let mut s = stream(vec![
            tok(WS, " ", Channel::HIDDEN),
            tok(WS, " ", Channel::HIDDEN),
            tok(ID, "x", Channel::DEFAULT),
        ]);
        assert_eq!(text(s.lt(1)), Some("x"));
        assert_eq!(s.index(), Some(2));
    }

    #[test_case(1, Some("a"); "current")]
    #[test_case(2, Some("b"); "second")]
    #[test_case(3, Some("c"); "third")]
    #[test_case(4, Some(""); "eof")]
    #[test_case(50, Some(""); "far past eof")]
    #[test_case(0, None; "zero")]
    #[test_case(-1, None; "before start")]
    fn test_lt_from_start(k: isize, expected: Option<&str>) {
        let mut s = stream(sample());
        assert_eq!(text(s.lt(k)), expected);
    }

    #[test]
    fn test_lt_fetches_lazily() {
        let mut s = counting(sample());
        s.lt(2);
        // a, ws, comment, ws, b
        assert_eq!(s.size(), 5);
        assert_eq!(s.token_source().pulls, 5);
    }

    #[test]
    fn test_lt_past_end_is_eof() {
        let mut s = stream(sample());
        assert!(s.lt(4).is_some_and(|t| t.is_eof()));
        assert!(s.lt(9).is_some_and(|t| t.is_eof()));
        assert_eq!(s.size(), 8);
    }

    #[test]
    fn test_lb_mirrors_negative_lt() {
        let mut s = stream(sample());
        s.seek(6);
        assert_eq!(text(s.lb(1)), Some("b"));
        assert_eq!(text(s.lb(2)), Some("a"));
        assert_eq!(s.lb(3), None);
        assert_eq!(text(s.lt(-1)), Some("b"));
        assert_eq!(text(s.lt(-2)), Some("a"));
        assert_eq!(s.lt(-3), None);
    }

    #[test]
    fn test_lb_uninitialised_and_zero() {
        let mut s = stream(sample());
        assert_eq!(s.lb(1), None);
        s.seek(4);
        assert_eq!(s.lb(0), None);
        assert_eq!(text(s.lb(1)), Some("a"));
    }

    #[test]
    fn test_la() {
        let mut s = stream(sample());
        assert_eq!(s.la(1), Some(ID));
        assert_eq!(s.la(4), Some(TokenType::EOF));
        assert_eq!(s.la(0), None);
    }

    #[test]
    fn test_consume_walks_visible_tokens() {
        let mut s = stream(sample());
        let mut seen = Vec::new();
        while s.la(1) != Some(TokenType::EOF) {
            seen.push(s.lt(1).map(|t| t.text().to_owned()).unwrap_or_default());
            s.consume().unwrap();
        }
        assert_eq!(seen, ["a", "b", "c"]);
        assert_eq!(s.index(), Some(7));
    }

    #[test]
    fn test_consume_eof_fails() {
        let mut s = stream(vec![tok(ID, "a", Channel::DEFAULT)]);
        s.consume().unwrap();
        assert_eq!(s.consume(), Err(StreamError::ConsumeEof));
        assert_eq!(s.consume(), Err(StreamError::ConsumeEof));
        assert_eq!(s.index(), Some(1));
    }

    #[test]
    fn test_consume_on_empty_input_fails() {
        let mut s = stream(Vec::new());
        assert_eq!(s.consume(), Err(StreamError::ConsumeEof));
        assert_eq!(s.index(), Some(0));
    }

    #[test_case(0, Some(0); "on channel")]
    #[test_case(1, Some(4); "hidden snaps forward")]
    #[test_case(4, Some(4); "exact")]
    #[test_case(5, Some(6); "trailing ws")]
    #[test_case(7, Some(7); "eof")]
    #[test_case(100, Some(7); "past end clamps to eof")]
    fn test_seek(index: usize, expected: Option<usize>) {
        let mut s = stream(sample());
        s.seek(index);
        assert_eq!(s.index(), expected);
    }

    #[test]
    fn test_reset() {
        let mut s = stream(sample());
        s.seek(6);
        s.reset();
        assert_eq!(s.index(), Some(0));
        assert_eq!(text(s.lt(1)), Some("a"));
    }

    #[test]
    fn test_get_is_unfiltered() {
        let mut s = stream(sample());
        s.fill();
        assert_eq!(text(s.get(2)), Some("/*c*/"));
        assert_eq!(s.get(8), None);
    }

    #[test]
    fn test_other_channel_navigation() {
        let mut s = BufferedTokenStream::on_channel(VecSource::new(sample()), COMMENTS);
        assert_eq!(s.index(), None);
        assert_eq!(text(s.lt(1)), Some("/*c*/"));
        assert_eq!(s.index(), Some(2));
        assert!(s.lt(2).is_some_and(|t| t.is_eof()));
        s.consume().unwrap();
        assert_eq!(s.index(), Some(7));
        assert_eq!(text(s.lb(1)), Some("/*c*/"));
    }

    #[test]
    fn test_next_and_previous_on_channel() {
        let mut s = stream(sample());
        assert_eq!(s.next_on_channel(1, Channel::DEFAULT), Some(4));
        // the scan follows the stream's channel, not the argument
        assert_eq!(s.next_on_channel(1, COMMENTS), Some(4));
        assert_eq!(s.next_on_channel(5, COMMENTS), Some(6));
        assert_eq!(s.next_on_channel(8, COMMENTS), None);

        let mut comments = BufferedTokenStream::on_channel(VecSource::new(sample()), COMMENTS);
        assert_eq!(comments.next_on_channel(0, Channel::DEFAULT), Some(2));
        assert_eq!(comments.next_on_channel(3, Channel::DEFAULT), Some(7));

        assert_eq!(s.previous_on_channel(3, Channel::DEFAULT), Some(0));
        assert_eq!(s.previous_on_channel(100, Channel::HIDDEN), Some(5));
        assert_eq!(s.previous_on_channel(1, COMMENTS), None);
    }

    #[test]
    fn test_previous_on_channel_empty_buffer() {
        let s = stream(sample());
        assert_eq!(s.previous_on_channel(3, Channel::DEFAULT), None);
    }
}
