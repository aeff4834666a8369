//! ST7789 TFT Display Driver
//!
//! A driver for the ST7789 TFT LCD controller over 4-wire SPI, for panels up to
//! 240x320 pixels in 16-bit RGB565.
//!
//! ## Features
//!
//! - `no_std` compatible, no frame buffer required
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Chunked pixel streaming through a caller-provided transfer buffer
//! - Monochrome blitting through a two-entry color map
//! - Replaceable panel tuning tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use st7789::{Builder, Color, DEFAULT_BUFFER_SIZE, Display, Interface, MonoBitmap};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let cs = MockPin;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, cs, dc, rst);
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config, [0u8; DEFAULT_BUFFER_SIZE]);
//! let _ = display.reset(&mut delay);
//! let _ = display.clear(Color::BLUE);
//! let _ = display.fill_rectangle(10, 10, 40, 20, Some(Color::YELLOW));
//!
//! // 8x8 glyph, one bit per pixel
//! let glyph = [0x18, 0x3C, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x00];
//! if let Some(bitmap) = MonoBitmap::new(&glyph, 8, 8) {
//!     let _ = display.blit(&bitmap, 100, 100, 8, 8);
//! }
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// RGB565 colors and the monochrome color map
pub mod color;
/// ST7789 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Panel initialization tables
pub mod init;
/// Hardware interface abstraction
pub mod interface;
/// Pixel sources for blitting
pub mod source;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::{Color, ColorMap};
pub use config::{
    Builder, ColorOrder, Config, DEFAULT_BUFFER_SIZE, DEFAULT_CHUNK_CAPACITY, Dimensions,
    MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS, Rotation,
};
pub use display::{Display, Rect};
pub use error::{BuilderError, Error};
pub use init::{DEFAULT_TUNING, InitStep};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface, NoResetPin, RESET_SETTLE_MS};
pub use source::{MonoBitmap, PixelSource};
