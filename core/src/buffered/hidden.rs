use super::BufferedTokenStream;
use crate::traits::{Token, TokenSource};
use crate::{Channel, RequestedChannel, StreamError};

impl<S: TokenSource> BufferedTokenStream<S> {
    /// Off-channel tokens between raw index `token_index` and the next token
    /// on this stream's channel (or the end of the buffer).
    ///
    /// May fetch further tokens to find the boundary. Fails with
    /// [`StreamError::IndexOutOfRange`] if `token_index` is not buffered.
    pub fn hidden_tokens_to_right(
        &mut self,
        token_index: usize,
        channel: RequestedChannel,
    ) -> Result<Vec<&S::Token>, StreamError> {
        self.lazy_init();
        self.check_buffered(token_index)?;

        let from = token_index + 1;
        let to = match self.next_on_channel(from, self.channel) {
            Some(next) => next,
            None => self.tokens.len() - 1,
        };
        Ok(self.filter_for_channel(from, to, channel))
    }

    /// Off-channel tokens between the previous default-channel token (or the
    /// start of the input) and raw index `token_index`.
    ///
    /// Never fetches. Fails with [`StreamError::IndexOutOfRange`] if
    /// `token_index` is not buffered.
    pub fn hidden_tokens_to_left(
        &mut self,
        token_index: usize,
        channel: RequestedChannel,
    ) -> Result<Vec<&S::Token>, StreamError> {
        self.lazy_init();
        self.check_buffered(token_index)?;

        let Some(to) = token_index.checked_sub(1) else {
            return Ok(Vec::new());
        };
        let prev = self.previous_on_channel(to, Channel::DEFAULT);
        if prev == Some(to) {
            return Ok(Vec::new());
        }
        let from = prev.map_or(0, |p| p + 1);
        Ok(self.filter_for_channel(from, to, channel))
    }

    fn check_buffered(&self, token_index: usize) -> Result<(), StreamError> {
        if token_index < self.tokens.len() {
            Ok(())
        } else {
            Err(StreamError::IndexOutOfRange {
                index: token_index,
                len: self.tokens.len(),
            })
        }
    }

    fn filter_for_channel(
        &self,
        from: usize,
        to: usize,
        channel: RequestedChannel,
    ) -> Vec<&S::Token> {
        self.tokens
            .get(from..=to)
            .unwrap_or_default()
            .iter()
            .filter(|t| channel.matches(t.channel()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;
    use crate::{CommonToken, TokenType, VecSource};

    fn texts(tokens: Vec<&CommonToken>) -> Vec<&str> {
        tokens.into_iter().map(|t| t.text()).collect()
    }

    fn indices(tokens: Vec<&CommonToken>) -> Vec<usize> {
        tokens.into_iter().filter_map(|t| t.token_index()).collect()
    }

    /// default, hidden, hidden, default, EOF
    fn gap() -> Vec<CommonToken> {
        vec![
            tok(ID, "x", Channel::DEFAULT),
            tok(WS, " ", Channel::HIDDEN),
            tok(WS, "\t", Channel::HIDDEN),
            tok(ID, "y", Channel::DEFAULT),
            CommonToken::new(TokenType::EOF, ""),
        ]
    }

    #[test]
    fn test_hidden_gap_both_directions() {
        let mut s = stream(gap());
        let right = s
            .hidden_tokens_to_right(0, RequestedChannel::AnyHidden)
            .unwrap();
        assert_eq!(indices(right), [1, 2]);

        let left = s
            .hidden_tokens_to_left(3, RequestedChannel::AnyHidden)
            .unwrap();
        assert_eq!(indices(left), [1, 2]);
    }

    #[test]
    fn test_hidden_left_without_gap_is_empty() {
        let mut s = stream(vec![
            tok(ID, "x", Channel::DEFAULT),
            tok(ID, "y", Channel::DEFAULT),
        ]);
        s.fill();
        assert!(
            s.hidden_tokens_to_left(1, RequestedChannel::AnyHidden)
                .unwrap()
                .is_empty()
        );
        assert!(
            s.hidden_tokens_to_left(0, RequestedChannel::AnyHidden)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_hidden_specific_channel() {
        let mut s = stream(sample());
        s.fill();

        let comments = s
            .hidden_tokens_to_right(0, RequestedChannel::Specific(COMMENTS))
            .unwrap();
        assert_eq!(texts(comments), ["/*c*/"]);

        let ws = s
            .hidden_tokens_to_left(4, Channel::HIDDEN.into())
            .unwrap();
        assert_eq!(indices(ws), [1, 3]);

        let all = s
            .hidden_tokens_to_left(4, RequestedChannel::AnyHidden)
            .unwrap();
        assert_eq!(texts(all), [" ", "/*c*/", " "]);
    }

    #[test]
    fn test_hidden_right_fetches_boundary() {
        let mut s = stream(sample());
        assert_eq!(s.size(), 0);
        let right = s
            .hidden_tokens_to_right(0, RequestedChannel::AnyHidden)
            .unwrap();
        assert_eq!(right.len(), 3);
        assert_eq!(s.size(), 5);
    }

    #[test]
    fn test_hidden_right_of_last_token() {
        let mut s = stream(sample());
        s.fill();
        let right = s
            .hidden_tokens_to_right(6, RequestedChannel::AnyHidden)
            .unwrap();
        assert!(right.is_empty());
        let right = s
            .hidden_tokens_to_right(7, RequestedChannel::AnyHidden)
            .unwrap();
        assert!(right.is_empty());
    }

    #[test]
    fn test_hidden_right_on_comment_stream() {
        let mut s = BufferedTokenStream::on_channel(VecSource::new(sample()), COMMENTS);
        // boundary is the comment at 2, the next token on the stream's channel
        let right = s
            .hidden_tokens_to_right(0, RequestedChannel::AnyHidden)
            .unwrap();
        assert_eq!(indices(right), [1, 2]);

        // after the comment the scan runs to end-of-stream
        let right = s
            .hidden_tokens_to_right(2, RequestedChannel::AnyHidden)
            .unwrap();
        assert_eq!(indices(right), [3, 5]);

        let left = s
            .hidden_tokens_to_left(4, RequestedChannel::AnyHidden)
            .unwrap();
        assert_eq!(indices(left), [1, 2, 3]);
    }

    #[test]
    fn test_hidden_leading_tokens() {
        let mut s = stream(vec![
            tok(WS, " ", Channel::HIDDEN),
            tok(COMMENT, "#!", COMMENTS),
            tok(ID, "x", Channel::DEFAULT),
        ]);
        s.fill();
        let left = s
            .hidden_tokens_to_left(2, RequestedChannel::AnyHidden)
            .unwrap();
        assert_eq!(indices(left), [0, 1]);
    }

    #[test]
    fn test_hidden_out_of_range() {
        let mut s = stream(sample());
        assert_eq!(
            s.hidden_tokens_to_right(3, RequestedChannel::AnyHidden),
            Err(StreamError::IndexOutOfRange { index: 3, len: 1 })
        );
        s.fill();
        assert_eq!(
            s.hidden_tokens_to_left(8, RequestedChannel::AnyHidden),
            Err(StreamError::IndexOutOfRange { index: 8, len: 8 })
        );
    }
}
