//! ST7789 command definitions
//!
//! This module defines the command bytes used to drive the ST7789 TFT LCD
//! controller. Commands are sent over SPI with the D/C pin low; their
//! parameters follow as a separate payload with the D/C pin high.
//!
//! ## Command Structure
//!
//! Every register write follows the pattern:
//! 1. Set D/C low (command mode)
//! 2. Assert CS, send the command byte, release CS
//! 3. Set D/C high (data mode)
//! 4. Assert CS, send the parameter bytes (if any), release CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7789::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::SpiBus;
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! // Pixel format: 16 bits per pixel
//! let _ = interface.send_command_with_data(command::COLMOD, Some(&[0x55]));
//!
//! // Arm a memory write, then stream pixels
//! let _ = interface.send_command(command::RAMWR);
//! let _ = interface.send_data(&[0xF8, 0x00]);
//! ```

// System control commands

/// Software reset (0x01)
///
/// Resets registers to their default values. Wait at least 5ms (120ms if the
/// controller was in sleep-out mode) before the next command.
pub const SWRESET: u8 = 0x01;

/// Sleep in (0x10)
///
/// Enters the minimum power consumption mode. Wait 120ms before sleep-out.
pub const SLPIN: u8 = 0x10;

/// Sleep out (0x11)
///
/// Leaves sleep mode. The panel needs 120ms before it accepts further
/// commands reliably.
pub const SLPOUT: u8 = 0x11;

/// Normal display mode on (0x13)
pub const NORON: u8 = 0x13;

/// Display inversion off (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on (0x21)
///
/// Most IPS ST7789 panels need inversion on to show true colors.
pub const INVON: u8 = 0x21;

/// Display off (0x28)
pub const DISPOFF: u8 = 0x28;

/// Display on (0x29)
pub const DISPON: u8 = 0x29;

// Addressing and memory commands

/// Column address set (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const CASET: u8 = 0x2A;

/// Row address set (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const RASET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Arms the controller for pixel data. Every following data payload lands
/// at the write cursor, which auto-increments through the addressing window
/// in row-major order.
pub const RAMWR: u8 = 0x2C;

/// Memory data access control (0x36)
///
/// Controls scan direction and RGB/BGR order. Requires 1 byte, see the
/// `MADCTL_*` bits below.
pub const MADCTL: u8 = 0x36;

/// Interface pixel format (0x3A)
///
/// Requires 1 byte. `0x55` selects 65K colors, 16 bits per pixel (RGB565).
pub const COLMOD: u8 = 0x3A;

// Panel tuning commands

/// Porch setting (0xB2)
///
/// Requires 5 bytes: back porch, front porch, separate porch enable,
/// idle-mode porch, partial-mode porch.
pub const PORCTRL: u8 = 0xB2;

/// Display function control (0xB6)
///
/// Requires 2 bytes. Panel specific.
pub const DFUNCTR: u8 = 0xB6;

/// Gate control (0xB7)
///
/// Sets the VGH/VGL gate voltages. Requires 1 byte.
pub const GCTRL: u8 = 0xB7;

/// VCOM setting (0xBB)
///
/// Requires 1 byte.
pub const VCOMS: u8 = 0xBB;

/// LCM control (0xC0)
///
/// Requires 1 byte.
pub const LCMCTRL: u8 = 0xC0;

/// VDV and VRH command enable (0xC2)
///
/// Requires 2 bytes: [enable, 0xFF]
pub const VDVVRHEN: u8 = 0xC2;

/// VRH set (0xC3)
///
/// Requires 1 byte.
pub const VRHS: u8 = 0xC3;

/// VDV set (0xC4)
///
/// Requires 1 byte.
pub const VDVSET: u8 = 0xC4;

/// Frame rate control in normal mode (0xC6)
///
/// Requires 1 byte. `0x0F` is 60Hz.
pub const FRCTR2: u8 = 0xC6;

/// Power control 1 (0xD0)
///
/// Requires 2 bytes: [0xA4, AVDD/AVCL/VDS]
pub const PWCTRL1: u8 = 0xD0;

/// Positive voltage gamma control (0xE0)
///
/// Requires 14 bytes.
pub const PVGAMCTRL: u8 = 0xE0;

/// Negative voltage gamma control (0xE1)
///
/// Requires 14 bytes.
pub const NVGAMCTRL: u8 = 0xE1;

// MADCTL bits

/// Page address order, bottom to top (MY)
pub const MADCTL_MY: u8 = 0x80;

/// Column address order, right to left (MX)
pub const MADCTL_MX: u8 = 0x40;

/// Page/column order exchange (MV)
pub const MADCTL_MV: u8 = 0x20;

/// BGR color order (0 = RGB)
pub const MADCTL_BGR: u8 = 0x08;

/// Pixel format parameter for 16-bit RGB565 on both interfaces
pub const COLMOD_RGB565: u8 = 0x55;
