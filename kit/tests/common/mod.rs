#![allow(dead_code)]

use chanbuf::{BufferedTokenStream, Channel, ChannelKind, LogosSource, TokenType};
use logos::Logos;

pub const COMMENTS: Channel = Channel(2);

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    #[regex(r"[ \t\r\n]+")]
    Ws,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[token("let")]
    Let,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Number,

    #[token("=")]
    Eq,

    #[token(";")]
    Semi,
}

impl ChannelKind for Kind {
    fn token_type(&self) -> TokenType {
        TokenType(*self as i32 + 1)
    }

    fn channel(&self) -> Channel {
        match self {
            Kind::Ws => Channel::HIDDEN,
            Kind::LineComment => COMMENTS,
            _ => Channel::DEFAULT,
        }
    }
}

pub fn ty(kind: Kind) -> TokenType {
    kind.token_type()
}

pub fn lex(source: &str) -> BufferedTokenStream<LogosSource<'_, Kind>> {
    BufferedTokenStream::new(LogosSource::new(source).with_name("test.src"))
}

pub const PROGRAM: &str = "let x = 42; // answer\nlet y = x;";
