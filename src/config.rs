//! Display configuration types and builder

use crate::color::ColorMap;
use crate::command::{MADCTL_BGR, MADCTL_MV, MADCTL_MX, MADCTL_MY};
pub use crate::error::{BuilderError, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS};
use crate::init::{DEFAULT_TUNING, InitStep};

/// Default number of pixels staged per data payload
pub const DEFAULT_CHUNK_CAPACITY: usize = 1024;

/// Transfer buffer size in bytes for [`DEFAULT_CHUNK_CAPACITY`]
///
/// Handy for declaring a static buffer: `[0u8; DEFAULT_BUFFER_SIZE]`.
pub const DEFAULT_BUFFER_SIZE: usize = DEFAULT_CHUNK_CAPACITY * 2;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Default for Dimensions {
    /// 240x240, the common square ST7789 module
    fn default() -> Self {
        Self {
            width: 240,
            height: 240,
        }
    }
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero or the
    /// area does not fit the controller RAM (240x320, or 320x240 when the
    /// panel is mounted in landscape). Landscape sizes also need a
    /// [`Rotation`] that exchanges rows and columns.
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        let portrait = width <= MAX_SOURCE_OUTPUTS && height <= MAX_GATE_OUTPUTS;
        let landscape = width <= MAX_GATE_OUTPUTS && height <= MAX_SOURCE_OUTPUTS;
        if width == 0 || height == 0 || !(portrait || landscape) {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Whether these dimensions fit the controller RAM under `rotation`
    pub fn fits(&self, rotation: Rotation) -> bool {
        let (columns, rows) = if rotation.swaps_axes() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        };
        columns <= MAX_SOURCE_OUTPUTS && rows <= MAX_GATE_OUTPUTS
    }
}

/// Display rotation relative to native orientation
///
/// The controller performs the rotation itself through MADCTL, so
/// [`Dimensions`] are always given as seen after rotating.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// MADCTL address order bits for this rotation
    pub fn madctl(self) -> u8 {
        match self {
            Self::Rotate0 => 0x00,
            Self::Rotate90 => MADCTL_MX | MADCTL_MV,
            Self::Rotate180 => MADCTL_MX | MADCTL_MY,
            Self::Rotate270 => MADCTL_MY | MADCTL_MV,
        }
    }

    /// Whether rows and columns are exchanged (landscape)
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }
}

/// Subpixel order of the panel
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ColorOrder {
    /// Red in the high bits
    Rgb,
    /// Blue in the high bits (common on ST7789 modules)
    #[default]
    Bgr,
}

impl ColorOrder {
    /// MADCTL bits for this order
    pub fn madctl(self) -> u8 {
        match self {
            Self::Rgb => 0x00,
            Self::Bgr => MADCTL_BGR,
        }
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the ST7789 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Pixels staged per data payload
    pub chunk_capacity: usize,
    /// Subpixel order written to MADCTL
    pub color_order: ColorOrder,
    /// Address order written to MADCTL
    pub rotation: Rotation,
    /// Whether display inversion is switched on during init
    pub inverted: bool,
    /// Initial monochrome color map
    pub color_map: ColorMap,
    /// Panel tuning registers written during init
    pub tuning: &'static [InitStep],
}

impl Config {
    /// Transfer buffer size in bytes needed for the chunk capacity
    pub fn buffer_size(&self) -> usize {
        self.chunk_capacity * 2
    }

    /// Full MADCTL parameter: rotation plus subpixel order
    pub fn madctl(&self) -> u8 {
        self.rotation.madctl() | self.color_order.madctl()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
            color_order: ColorOrder::Bgr,
            rotation: Rotation::Rotate0,
            inverted: true,
            color_map: ColorMap::default(),
            tuning: DEFAULT_TUNING,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7789::{Builder, ColorOrder, Dimensions};
///
/// let dims = match Dimensions::new(240, 320) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .chunk_capacity(512)
///     .color_order(ColorOrder::Rgb)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.buffer_size(), 1024);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (default 240x240)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.config.dimensions = dims;
        self
    }

    /// Set the number of pixels staged per data payload (default 1024)
    pub fn chunk_capacity(mut self, pixels: usize) -> Self {
        self.config.chunk_capacity = pixels;
        self
    }

    /// Set the panel subpixel order (default BGR)
    pub fn color_order(mut self, order: ColorOrder) -> Self {
        self.config.color_order = order;
        self
    }

    /// Set display rotation (default none)
    ///
    /// Landscape sizes such as 320x240 need [`Rotation::Rotate90`] or
    /// [`Rotation::Rotate270`].
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Set whether display inversion is on after init (default on)
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.config.inverted = inverted;
        self
    }

    /// Set the initial monochrome color map
    pub fn color_map(mut self, map: ColorMap) -> Self {
        self.config.color_map = map;
        self
    }

    /// Replace the panel tuning table written during init
    ///
    /// Use this for panels whose porch, voltage or gamma settings differ from
    /// the defaults in [`DEFAULT_TUNING`].
    pub fn tuning(mut self, steps: &'static [InitStep]) -> Self {
        self.config.tuning = steps;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidChunkCapacity` if the chunk capacity is zero,
    /// or `BuilderError::InvalidDimensions` if the dimensions do not fit the
    /// controller RAM under the chosen rotation.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.config.chunk_capacity == 0 {
            return Err(BuilderError::InvalidChunkCapacity(0));
        }
        let dims = self.config.dimensions;
        if !dims.fits(self.config.rotation) {
            return Err(BuilderError::InvalidDimensions {
                width: dims.width,
                height: dims.height,
            });
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config.dimensions, Dimensions { width: 240, height: 240 });
        assert_eq!(config.chunk_capacity, DEFAULT_CHUNK_CAPACITY);
        assert_eq!(config.buffer_size(), DEFAULT_BUFFER_SIZE);
        assert_eq!(config.color_order, ColorOrder::Bgr);
        assert_eq!(config.rotation, Rotation::Rotate0);
        assert_eq!(config.madctl(), 0x08);
        assert!(config.inverted);
        assert_eq!(config.color_map, ColorMap::default());
    }

    #[test]
    fn test_dimensions_accept_both_orientations() {
        assert!(Dimensions::new(240, 320).is_ok());
        assert!(Dimensions::new(320, 240).is_ok());
        assert!(Dimensions::new(135, 240).is_ok());
    }

    #[test]
    fn test_dimensions_reject_oversize_and_zero() {
        assert_eq!(
            Dimensions::new(320, 320),
            Err(BuilderError::InvalidDimensions {
                width: 320,
                height: 320
            })
        );
        assert!(Dimensions::new(0, 240).is_err());
        assert!(Dimensions::new(240, 0).is_err());
    }

    #[test]
    fn test_zero_chunk_capacity_rejected() {
        let result = Builder::new().chunk_capacity(0).build();
        assert_eq!(result.unwrap_err(), BuilderError::InvalidChunkCapacity(0));
    }

    #[test]
    fn test_color_order_madctl_bits() {
        assert_eq!(ColorOrder::Rgb.madctl(), 0x00);
        assert_eq!(ColorOrder::Bgr.madctl(), 0x08);
    }

    #[test]
    fn test_landscape_requires_rotation() {
        let dims = Dimensions::new(320, 240).unwrap();
        assert_eq!(
            Builder::new().dimensions(dims).build().unwrap_err(),
            BuilderError::InvalidDimensions {
                width: 320,
                height: 240
            }
        );

        let config = Builder::new()
            .dimensions(dims)
            .rotation(Rotation::Rotate90)
            .build()
            .unwrap();
        assert_eq!(config.madctl(), 0x68);
    }

    #[test]
    fn test_portrait_rejected_when_rotated() {
        let dims = Dimensions::new(240, 320).unwrap();
        assert!(Builder::new().dimensions(dims).build().is_ok());
        assert!(
            Builder::new()
                .dimensions(dims)
                .rotation(Rotation::Rotate270)
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_rotation_madctl_bits() {
        assert_eq!(Rotation::Rotate0.madctl(), 0x00);
        assert_eq!(Rotation::Rotate90.madctl(), 0x60);
        assert_eq!(Rotation::Rotate180.madctl(), 0xC0);
        assert_eq!(Rotation::Rotate270.madctl(), 0xA0);
    }
}
