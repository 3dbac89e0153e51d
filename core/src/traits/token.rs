use crate::token::{Channel, TokenType};

/// A lexical token as seen by the buffered stream.
///
/// The stream only reads the type, channel and text of a token, and writes
/// its buffer position exactly once when the token is fetched. Implementations
/// must be `Clone` so sources can hand out the end-of-stream marker repeatedly.
pub trait Token: Clone {
    /// Returns the token kind.
    fn token_type(&self) -> TokenType;

    /// Returns the channel the lexer placed this token on.
    fn channel(&self) -> Channel;

    /// Returns the source text of the token.
    fn text(&self) -> &str;

    /// Returns the raw buffer index, or `None` if the token was never buffered.
    fn token_index(&self) -> Option<usize>;

    /// Records the raw buffer index. Called once, by the stream, on fetch.
    fn set_token_index(&mut self, index: usize);

    /// Creates an end-of-stream marker.
    fn eof() -> Self;

    #[inline]
    fn is_eof(&self) -> bool {
        self.token_type().is_eof()
    }
}
