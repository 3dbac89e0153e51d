#![no_main]

use chanbuf::{BufferedTokenStream, Channel, ChannelKind, LogosSource, Token, TokenType};
use libfuzzer_sys::fuzz_target;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Kind {
    #[regex(r"[ \t\r\n]+")]
    Space,
    #[regex(r"//[^\n]*", allow_greedy = true)]
    Comment,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semi,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"-?[0-9]+")]
    Number,
}

impl ChannelKind for Kind {
    fn token_type(&self) -> TokenType {
        TokenType(*self as i32 + 1)
    }

    fn channel(&self) -> Channel {
        match self {
            Kind::Space => Channel::HIDDEN,
            Kind::Comment => Channel(2),
            _ => Channel::DEFAULT,
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let mut stream = BufferedTokenStream::new(LogosSource::<Kind>::new(input));
    let mut steps = 0usize;
    while stream.consume().is_ok() {
        steps += 1;
        assert!(steps <= input.len() + 1);
    }
    assert!(stream.lt(1).is_some_and(|t| t.is_eof()));

    assert_eq!(stream.all_text(), input);

    let mut end = 0;
    for (i, token) in stream.all_tokens().iter().enumerate() {
        let span = token.span();
        assert_eq!(span.start, end);
        assert_eq!(token.token_index(), Some(i));
        end = span.end;
    }
    assert_eq!(end, input.len());
});
