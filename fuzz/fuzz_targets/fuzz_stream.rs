#![no_main]

use arbitrary::Arbitrary;
use chanbuf::{
    BufferedTokenStream, Channel, CommonToken, RequestedChannel, StreamConfig, Token, VecSource,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Consume,
    Lt(i8),
    Seek(u8),
    Reset,
    Fill,
    HiddenRight(u8, RequestedChannel),
    HiddenLeft(u8, RequestedChannel),
    Text(u8, u8),
    Tokens(u8, u8),
}

#[derive(Arbitrary, Debug)]
struct Input {
    tokens: Vec<CommonToken>,
    channel: Channel,
    config: StreamConfig,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let capacity = input.config.initial_capacity.min(1024);
    let mut stream = BufferedTokenStream::with_config(
        VecSource::new(input.tokens),
        input.channel,
        input.config.with_initial_capacity(capacity),
    );

    for op in input.ops {
        match op {
            Op::Consume => {
                let _ = stream.consume();
            }
            Op::Lt(k) => {
                let _ = stream.lt(isize::from(k));
            }
            Op::Seek(i) => stream.seek(usize::from(i)),
            Op::Reset => stream.reset(),
            Op::Fill => stream.fill(),
            Op::HiddenRight(i, channel) => {
                let _ = stream.hidden_tokens_to_right(usize::from(i), channel);
            }
            Op::HiddenLeft(i, channel) => {
                let _ = stream.hidden_tokens_to_left(usize::from(i), channel);
            }
            Op::Text(a, b) => {
                let _ = stream.text_from_interval((usize::from(a), usize::from(b)));
            }
            Op::Tokens(a, b) => {
                let _ = stream.tokens((usize::from(a), usize::from(b)), None);
            }
        }

        let tokens = stream.all_tokens();
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.token_index(), Some(i));
            assert!(!token.is_eof() || i + 1 == tokens.len());
        }
        if let Some(cursor) = stream.index() {
            assert!(cursor < tokens.len());
        }
    }
});
