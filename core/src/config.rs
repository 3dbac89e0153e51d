//! Stream configuration for buffer growth.
//!
//! This module provides [`StreamConfig`] for tuning how a
//! [`BufferedTokenStream`](crate::BufferedTokenStream) pulls tokens out of its
//! source. None of the settings change which tokens the consumer sees; they
//! only trade memory against the number of calls into the source.
//!
//! # Example
//!
//! ```ignore
//! use chanbuf_core::config::StreamConfig;
//!
//! // Use default settings (fill batch: 1000)
//! let config = StreamConfig::default();
//!
//! // Large generated inputs: fewer, bigger batches and a pre-sized buffer
//! let config = StreamConfig::new()
//!     .with_fill_batch(16 * 1024)
//!     .with_initial_capacity(64 * 1024);
//! ```

/// Configuration for buffer growth.
///
/// # Default Values
///
/// | Setting | Default | Rationale |
/// |---------|---------|-----------|
/// | `fill_batch` | 1000 | Amortises source calls when materialising the whole input |
/// | `initial_capacity` | 0 | Buffer grows on demand |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct StreamConfig {
    /// Number of tokens requested per fetch while filling the buffer.
    ///
    /// Filling stops as soon as a batch comes back short, which only happens
    /// once the end-of-stream token has been appended.
    ///
    /// Default: 1000
    pub fill_batch: usize,

    /// Capacity reserved for the token buffer up front.
    ///
    /// Default: 0
    pub initial_capacity: usize,
}

impl Default for StreamConfig {
    /// Returns the default configuration.
    ///
    /// - `fill_batch`: 1000
    /// - `initial_capacity`: 0
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl StreamConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        fill_batch: 1000,
        initial_capacity: 0,
    };

    /// Creates a new configuration with default values.
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the fill batch size.
    ///
    /// A batch of zero would never make progress, so it is raised to one.
    #[inline]
    pub const fn with_fill_batch(mut self, batch: usize) -> Self {
        self.fill_batch = if batch == 0 { 1 } else { batch };
        self
    }

    /// Sets the initial buffer capacity.
    #[inline]
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Batch size actually used by `fill`.
    ///
    /// Configs built through struct literals can still carry a zero batch.
    #[inline]
    pub(crate) const fn effective_fill_batch(&self) -> usize {
        if self.fill_batch == 0 {
            1
        } else {
            self.fill_batch
        }
    }
}
