//! A token source over pre-lexed tokens.

use crate::traits::{Token, TokenSource};

/// Replays a list of tokens, then emits end-of-stream forever.
///
/// If the list carries its own end-of-stream token, everything after it is
/// ignored and that token is repeated; otherwise one is synthesised with
/// [`Token::eof`].
///
/// # Example
///
/// ```ignore
/// let tokens = vec![
///     CommonToken::new(IDENT, "x"),
///     CommonToken::new(WS, " ").with_channel(Channel::HIDDEN),
///     CommonToken::new(EQ, "="),
/// ];
/// let mut stream = BufferedTokenStream::new(VecSource::new(tokens));
/// assert_eq!(stream.la(2), Some(EQ));
/// ```
#[derive(Debug, Clone)]
pub struct VecSource<T> {
    tokens: std::vec::IntoIter<T>,
    eof: Option<T>,
    name: String,
}

impl<T: Token> VecSource<T> {
    pub const DEFAULT_NAME: &'static str = "<list>";

    pub fn new(tokens: impl IntoIterator<Item = T>) -> Self {
        Self {
            tokens: tokens.into_iter().collect::<Vec<_>>().into_iter(),
            eof: None,
            name: Self::DEFAULT_NAME.to_owned(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Tokens not yet handed out, excluding a synthesised end-of-stream.
    #[inline]
    pub fn remaining(&self) -> usize {
        if self.eof.is_some() {
            0
        } else {
            self.tokens.len()
        }
    }
}

impl<T: Token> TokenSource for VecSource<T> {
    type Token = T;

    fn next_token(&mut self) -> T {
        if let Some(eof) = &self.eof {
            return eof.clone();
        }
        let token = match self.tokens.next() {
            Some(token) if !token.is_eof() => return token,
            Some(token) => token,
            None => T::eof(),
        };
        self.eof = Some(token.clone());
        token
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
