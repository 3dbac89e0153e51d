#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
pub use chanbuf_core::*;

#[cfg(feature = "logos")]
pub mod logos_source;

#[cfg(feature = "logos")]
pub use logos_source::{ChannelKind, LogosSource};
