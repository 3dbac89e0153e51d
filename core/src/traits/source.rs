use super::token::Token;

/// A lazy token producer.
///
/// Sources are pulled one token at a time. Once the input is exhausted a
/// source must keep returning an end-of-stream token (see [`Token::is_eof`])
/// on every further call; the stream relies on this to terminate its scans.
pub trait TokenSource {
    /// The token type produced by this source.
    type Token: Token;

    /// Produces the next token.
    fn next_token(&mut self) -> Self::Token;

    /// Returns a human-readable name for the input, e.g. a file path.
    fn source_name(&self) -> &str;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    type Token = S::Token;

    #[inline]
    fn next_token(&mut self) -> Self::Token {
        (**self).next_token()
    }

    #[inline]
    fn source_name(&self) -> &str {
        (**self).source_name()
    }
}

impl<S: TokenSource + ?Sized> TokenSource for Box<S> {
    type Token = S::Token;

    #[inline]
    fn next_token(&mut self) -> Self::Token {
        (**self).next_token()
    }

    #[inline]
    fn source_name(&self) -> &str {
        (**self).source_name()
    }
}
