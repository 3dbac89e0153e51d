//! Lazily buffered, channel-filtered token stream.
//!
//! [`BufferedTokenStream`] pulls tokens from a [`TokenSource`] only as far as
//! the consumer looks ahead, keeps every fetched token in an append-only
//! buffer, and presents a view filtered to a single [`Channel`]. Tokens on
//! other channels stay in the buffer and can be retrieved with the
//! hidden-token queries.
//!
#![cfg_attr(feature = "docs", doc = simple_mermaid::mermaid!("../../docs/diagrams/buffered_stream.mmd"))]
//!
//! # Addressing
//!
//! Two index spaces are in play:
//!
//! - **raw** indices are buffer positions. [`get`](BufferedTokenStream::get),
//!   [`seek`](BufferedTokenStream::seek), [`index`](BufferedTokenStream::index),
//!   the hidden-token queries and text reconstruction all use raw indices.
//! - **on-channel** offsets count only visible tokens.
//!   [`lt`](BufferedTokenStream::lt) and [`lb`](BufferedTokenStream::lb) take
//!   on-channel offsets relative to the cursor.
//!
//! # Example
//!
//! ```ignore
//! use chanbuf::{BufferedTokenStream, Channel, RequestedChannel, TokenStream};
//!
//! let mut stream = BufferedTokenStream::new(lexer);
//! while !stream.lt(1).is_some_and(|t| t.is_eof()) {
//!     let tok = stream.lt(1).cloned().unwrap();
//!     let comments = stream.hidden_tokens_to_left(
//!         tok.token_index().unwrap(),
//!         RequestedChannel::AnyHidden,
//!     )?;
//!     stream.consume()?;
//! }
//! ```

mod hidden;
mod navigate;
mod text;

use tracing::{debug, trace};

use crate::config::StreamConfig;
use crate::traits::{IntStream, Marker, Token, TokenSource, TokenStream};
use crate::{Channel, Interval, StreamError, TokenType};

/// A token stream that buffers everything it fetches.
///
/// Buffered tokens never move: once a token is appended at raw index `i`,
/// its [`Token::token_index`] is `Some(i)` for the lifetime of the buffer.
/// The end-of-stream token is appended exactly once, as the last element.
pub struct BufferedTokenStream<S: TokenSource> {
    source: S,
    tokens: Vec<S::Token>,
    /// Raw index of the current token; `None` until first access.
    cursor: Option<usize>,
    /// Set once the end-of-stream token is in `tokens`.
    reached_end: bool,
    channel: Channel,
    config: StreamConfig,
}

impl<S: TokenSource> BufferedTokenStream<S> {
    /// Creates a stream filtered to [`Channel::DEFAULT`].
    pub fn new(source: S) -> Self {
        Self::with_config(source, Channel::DEFAULT, StreamConfig::DEFAULT)
    }

    /// Creates a stream filtered to `channel`.
    pub fn on_channel(source: S, channel: Channel) -> Self {
        Self::with_config(source, channel, StreamConfig::DEFAULT)
    }

    pub fn with_config(source: S, channel: Channel, config: StreamConfig) -> Self {
        Self {
            source,
            tokens: Vec::with_capacity(config.initial_capacity),
            cursor: None,
            reached_end: false,
            channel,
            config,
        }
    }

    /// The channel this stream navigates on.
    #[inline]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    #[inline]
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    #[inline]
    pub fn token_source(&self) -> &S {
        &self.source
    }

    /// Consumes the stream, returning its source.
    pub fn into_token_source(self) -> S {
        self.source
    }

    /// Rebinds the stream to a new source and returns the previous one.
    ///
    /// The buffer is cleared and the cursor returns to its uninitialised
    /// state; the channel and configuration are kept.
    pub fn set_token_source(&mut self, source: S) -> S {
        trace!(
            from = self.source.source_name(),
            to = source.source_name(),
            "rebinding token source"
        );
        self.tokens.clear();
        self.cursor = None;
        self.reached_end = false;
        std::mem::replace(&mut self.source, source)
    }

    #[inline]
    pub fn source_name(&self) -> &str {
        self.source.source_name()
    }

    /// Raw index of the current token, or `None` before the first access.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of tokens buffered so far.
    ///
    /// This is only the length of the input once [`fill`](Self::fill) has
    /// run or the end-of-stream token has otherwise been fetched.
    #[inline]
    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` once the end-of-stream token has been buffered.
    #[inline]
    pub fn reached_end(&self) -> bool {
        self.reached_end
    }

    /// Every buffered token, unfiltered.
    #[inline]
    pub fn all_tokens(&self) -> &[S::Token] {
        &self.tokens
    }

    #[inline]
    pub fn mark(&mut self) -> Marker {
        Marker::default()
    }

    #[inline]
    pub fn release(&mut self, _marker: Marker) {}

    /// Appends up to `n` tokens from the source.
    ///
    /// Returns the number actually appended, which is less than `n` only if
    /// the end-of-stream token was among them. Once that token is buffered,
    /// further calls append nothing and return `0`.
    pub fn fetch(&mut self, n: usize) -> usize {
        if self.reached_end {
            return 0;
        }

        trace!(n, buffered = self.tokens.len(), "fetch");
        for i in 0..n {
            let mut token = self.source.next_token();
            let index = self.tokens.len();
            token.set_token_index(index);
            let eof = token.is_eof();
            self.tokens.push(token);
            if eof {
                debug!(index, source = self.source.source_name(), "fetched EOF");
                self.reached_end = true;
                return i + 1;
            }
        }

        n
    }

    /// Makes sure raw index `i` is buffered.
    ///
    /// Returns `false` if the input ends before `i`.
    pub fn sync(&mut self, i: usize) -> bool {
        let n = i.saturating_add(1).saturating_sub(self.tokens.len());
        if n > 0 {
            trace!(index = i, shortfall = n, "sync");
            return self.fetch(n) >= n;
        }
        true
    }

    /// Buffers the whole input, up to and including end-of-stream.
    ///
    /// Calling this more than once leaves the buffer unchanged.
    pub fn fill(&mut self) {
        self.lazy_init();
        let batch = self.config.effective_fill_batch();
        while self.fetch(batch) == batch {}
        debug!(len = self.tokens.len(), "buffer filled");
    }

    /// Fills the buffer and counts the tokens on this stream's channel.
    ///
    /// The end-of-stream token counts once, and only if it is on this
    /// stream's channel, even though navigation treats it as visible
    /// everywhere.
    pub fn number_of_on_channel_tokens(&mut self) -> usize {
        self.fill();
        let mut n = 0;
        for token in &self.tokens {
            if token.channel() == self.channel {
                n += 1;
            }
            if token.is_eof() {
                break;
            }
        }
        n
    }

    /// Buffered tokens in `interval`, optionally restricted to `types`.
    ///
    /// Does not fetch: `stop` is clamped to the last buffered token, and
    /// collection stops before the end-of-stream token.
    pub fn tokens(
        &mut self,
        interval: impl Into<Interval>,
        types: Option<&[TokenType]>,
    ) -> Vec<&S::Token> {
        let interval = interval.into();
        self.lazy_init();
        let Some(last) = self.tokens.len().checked_sub(1) else {
            return Vec::new();
        };
        let stop = interval.stop.min(last);
        if interval.start > stop {
            return Vec::new();
        }
        self.tokens[interval.start..=stop]
            .iter()
            .take_while(|t| !t.is_eof())
            .filter(|t| types.is_none_or(|types| types.contains(&t.token_type())))
            .collect()
    }

    fn lazy_init(&mut self) {
        if self.cursor.is_none() {
            self.setup();
        }
    }

    fn setup(&mut self) {
        self.sync(0);
        self.cursor = self.adjust_seek_index(0);
        trace!(cursor = ?self.cursor, channel = %self.channel, "stream initialised");
    }
}

impl<S: TokenSource> IntStream for BufferedTokenStream<S> {
    #[inline]
    fn consume(&mut self) -> Result<(), StreamError> {
        Self::consume(self)
    }

    #[inline]
    fn la(&mut self, k: isize) -> Option<TokenType> {
        Self::la(self, k)
    }

    #[inline]
    fn mark(&mut self) -> Marker {
        Self::mark(self)
    }

    #[inline]
    fn release(&mut self, marker: Marker) {
        Self::release(self, marker)
    }

    #[inline]
    fn index(&self) -> Option<usize> {
        Self::index(self)
    }

    #[inline]
    fn seek(&mut self, index: usize) {
        Self::seek(self, index)
    }

    #[inline]
    fn size(&self) -> usize {
        Self::size(self)
    }

    #[inline]
    fn source_name(&self) -> &str {
        Self::source_name(self)
    }
}

impl<S: TokenSource> TokenStream for BufferedTokenStream<S> {
    type Token = S::Token;
    type Source = S;

    #[inline]
    fn lt(&mut self, k: isize) -> Option<&S::Token> {
        Self::lt(self, k)
    }

    #[inline]
    fn get(&mut self, index: usize) -> Option<&S::Token> {
        Self::get(self, index)
    }

    #[inline]
    fn token_source(&self) -> &S {
        Self::token_source(self)
    }

    #[inline]
    fn text_from_interval(&mut self, interval: Interval) -> String {
        Self::text_from_interval(self, interval)
    }
}

// Compile-time assertions for BufferedTokenStream
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<BufferedTokenStream<crate::VecSource<crate::CommonToken>>>();
    assert_sync::<BufferedTokenStream<crate::VecSource<crate::CommonToken>>>();
};
