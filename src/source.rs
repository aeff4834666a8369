//! Pixel sources for blitting
//!
//! [`Display::blit`](crate::Display::blit) reads its input through the
//! [`PixelSource`] trait: one small integer per pixel, mapped to a color by the
//! display's [`ColorMap`](crate::ColorMap). `0` is background, anything else
//! is foreground.
//!
//! Two sources come ready-made:
//! - any closure `Fn(u16, u16) -> u8`
//! - [`MonoBitmap`], a packed 1-bit-per-pixel bitmap
//!
//! ## Example
//!
//! ```
//! use st7789::{MonoBitmap, PixelSource};
//!
//! // 8x2 bitmap: a bar on the first row only
//! let data = [0b1111_0000, 0b0000_0000];
//! let bitmap = match MonoBitmap::new(&data, 8, 2) {
//!     Some(bitmap) => bitmap,
//!     None => return,
//! };
//! assert_eq!(bitmap.pixel(0, 0), 1);
//! assert_eq!(bitmap.pixel(4, 0), 0);
//! assert_eq!(bitmap.pixel(0, 1), 0);
//!
//! // Checkerboard from a closure
//! let checker = |col: u16, row: u16| ((col ^ row) & 1) as u8;
//! assert_eq!(checker.pixel(1, 0), 1);
//! ```

/// Capability to read a color map index at a position
///
/// Coordinates are relative to the blit rectangle's top-left corner.
/// Implementations must answer for every `col < w` and `row < h` of the
/// rectangle being blitted.
pub trait PixelSource {
    /// Color map index of the pixel at (`col`, `row`)
    fn pixel(&self, col: u16, row: u16) -> u8;
}

impl<F> PixelSource for F
where
    F: Fn(u16, u16) -> u8,
{
    fn pixel(&self, col: u16, row: u16) -> u8 {
        self(col, row)
    }
}

/// Packed monochrome bitmap
///
/// Rows are stored top to bottom, each padded to a whole byte, with the
/// leftmost pixel in the most significant bit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonoBitmap<'a> {
    data: &'a [u8],
    width: u16,
    height: u16,
}

impl<'a> MonoBitmap<'a> {
    /// Wrap packed bitmap data
    ///
    /// Returns `None` if `data` is shorter than `ceil(width / 8) * height` bytes.
    pub fn new(data: &'a [u8], width: u16, height: u16) -> Option<Self> {
        if data.len() < Self::stride_for(width) * height as usize {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    fn stride_for(width: u16) -> usize {
        (width as usize).div_ceil(8)
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }
}

impl PixelSource for MonoBitmap<'_> {
    /// Pixels outside the bitmap read as background
    fn pixel(&self, col: u16, row: u16) -> u8 {
        if col >= self.width || row >= self.height {
            return 0;
        }
        let index = row as usize * Self::stride_for(self.width) + col as usize / 8;
        (self.data[index] >> (7 - col % 8)) & 0x01
    }
}
