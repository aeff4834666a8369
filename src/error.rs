//! Driver errors
//!
//! Two layers: [`BuilderError`] rejects a configuration before any hardware
//! is touched, [`Error`] is returned by [`Display`](crate::Display) methods
//! and wraps the transport's [`InterfaceError`](crate::interface::InterfaceError).
//!
//! Out-of-bounds rectangles are never an error: fills and blits clamp them
//! onto the panel instead.
//!
//! ## Example
//!
//! ```
//! use st7789::{Builder, BuilderError, Dimensions};
//!
//! // Larger than the controller's 240x320 RAM
//! let result = Dimensions::new(480, 480);
//! assert!(result.is_err());
//!
//! // A zero-pixel transfer chunk
//! let result = Builder::new().chunk_capacity(0).build();
//! assert!(matches!(result, Err(BuilderError::InvalidChunkCapacity(0))));
//! ```

use crate::interface::DisplayInterface;

/// Source outputs (columns) driven by the ST7789 controller
///
/// The frame memory is 240 columns wide in the native orientation.
pub const MAX_SOURCE_OUTPUTS: u16 = 240;

/// Gate outputs (rows) driven by the ST7789 controller
///
/// The frame memory is 320 rows tall in the native orientation.
///
/// Square 240x240 modules use only the first 240 rows.
pub const MAX_GATE_OUTPUTS: u16 = 320;

/// Errors that can occur when interacting with the display
///
/// Keeps the interface's own error type so callers can inspect the bus or pin
/// failure that caused it.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// A failed transfer aborts the operation; the addressing window must be
    /// set again before the next pixel write.
    Interface(I::Error),
    /// Transfer buffer is too small for the configured chunk capacity
    ///
    /// The buffer must hold at least `2 * chunk_capacity` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Transfer buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Rejected configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
    /// Chunk capacity must be at least one pixel
    InvalidChunkCapacity(usize),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (controller RAM is {MAX_SOURCE_OUTPUTS}x{MAX_GATE_OUTPUTS}, rotate for landscape)"
            ),
            Self::InvalidChunkCapacity(capacity) => {
                write!(f, "Invalid chunk capacity {capacity} (must be at least 1 pixel)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
