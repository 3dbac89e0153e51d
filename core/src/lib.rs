pub mod config;
mod buffered;
mod error;
mod interval;
mod token;
pub mod traits;
mod vec_source;

pub use buffered::BufferedTokenStream;
pub use config::StreamConfig;
pub use error::StreamError;
pub use interval::Interval;
pub use token::{Channel, CommonToken, RequestedChannel, Span, TokenType};
pub use traits::{IntStream, Marker, SourceInterval, Token, TokenSource, TokenStream};
pub use vec_source::VecSource;
