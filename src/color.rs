//! RGB565 colors and the monochrome color map
//!
//! The ST7789 is configured for 16 bits per pixel. Each pixel travels over the
//! wire as two bytes, most significant byte first:
//!
//! | Bits  | 15..11 | 10..5 | 4..0 |
//! |-------|--------|-------|------|
//! | Field | Red    | Green | Blue |
//!
//! [`ColorMap`] translates the 1-bit pixels of a monochrome
//! [`PixelSource`](crate::source::PixelSource) into two of these colors.
//!
//! ## Example
//!
//! ```
//! use st7789::{Color, ColorMap};
//!
//! assert_eq!(Color::from_rgb(255, 0, 0), Color::RED);
//! assert_eq!(Color::RED.to_be_bytes(), [0xF8, 0x00]);
//!
//! let map = ColorMap::default();
//! assert_eq!(map.to_bytes(), [0x00, 0x00, 0xFF, 0xFF]);
//! ```

/// A packed RGB565 color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color(pub u16);

impl Color {
    /// Black (0x0000)
    pub const BLACK: Self = Self(0x0000);
    /// White (0xFFFF)
    pub const WHITE: Self = Self(0xFFFF);
    /// Red (0xF800)
    pub const RED: Self = Self(0xF800);
    /// Green (0x07E0)
    pub const GREEN: Self = Self(0x07E0);
    /// Blue (0x001F)
    pub const BLUE: Self = Self(0x001F);
    /// Yellow (0xFFE0)
    pub const YELLOW: Self = Self(0xFFE0);
    /// Cyan (0x07FF)
    pub const CYAN: Self = Self(0x07FF);
    /// Magenta (0xF81F)
    pub const MAGENTA: Self = Self(0xF81F);

    /// Pack 8-bit channels into RGB565, dropping the low bits
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    /// Raw 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Wire representation, most significant byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::IntoStorage;
        Self(color.into_storage())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::Rgb565 {
    fn from(color: Color) -> Self {
        use embedded_graphics_core::pixelcolor::raw::RawU16;
        Self::from(RawU16::new(color.0))
    }
}

/// Two-entry lookup from a monochrome pixel value to wire bytes
///
/// Entry 0 is the background, entry 1 the foreground. The map is stored in
/// wire order, so a lookup is a plain copy of two bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorMap {
    entries: [[u8; 2]; 2],
}

impl Default for ColorMap {
    /// Black background, white foreground (`00 00 FF FF`)
    fn default() -> Self {
        Self::new(Color::BLACK, Color::WHITE)
    }
}

impl ColorMap {
    /// Create a map from a background and a foreground color
    pub const fn new(background: Color, foreground: Color) -> Self {
        Self {
            entries: [background.to_be_bytes(), foreground.to_be_bytes()],
        }
    }

    /// Create a map from its 4-byte wire layout
    ///
    /// Bytes 0..2 are the background, bytes 2..4 the foreground, each
    /// most significant byte first.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            entries: [[bytes[0], bytes[1]], [bytes[2], bytes[3]]],
        }
    }

    /// The 4-byte wire layout of the map
    pub const fn to_bytes(&self) -> [u8; 4] {
        let [bg, fg] = self.entries;
        [bg[0], bg[1], fg[0], fg[1]]
    }

    /// Background color (entry 0)
    pub const fn background(&self) -> Color {
        Color(u16::from_be_bytes(self.entries[0]))
    }

    /// Foreground color (entry 1)
    pub const fn foreground(&self) -> Color {
        Color(u16::from_be_bytes(self.entries[1]))
    }

    /// Replace the background color
    pub fn set_background(&mut self, color: Color) {
        self.entries[0] = color.to_be_bytes();
    }

    /// Replace the foreground color
    pub fn set_foreground(&mut self, color: Color) {
        self.entries[1] = color.to_be_bytes();
    }

    /// Wire bytes for a source pixel value
    ///
    /// `0` selects the background; any other value selects the foreground.
    #[inline]
    pub const fn lookup(&self, value: u8) -> [u8; 2] {
        self.entries[(value != 0) as usize]
    }
}
