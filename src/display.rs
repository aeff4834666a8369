//! Core display operations
//!
//! [`Display`] owns the interface, the configuration and one transfer buffer.
//! Every pixel write goes through the same steps:
//!
//! 1. the requested rectangle is clamped onto the panel ([`Rect::clamped`])
//! 2. the addressing window is set to it (CASET + RASET)
//! 3. RAMWR arms the controller
//! 4. pixels are staged in the transfer buffer and flushed one chunk at a time
//!
//! The controller advances its write cursor through the window in row-major
//! order, so pixels are always produced left to right, top to bottom.

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::color::{Color, ColorMap};
use crate::command::{
    CASET, DISPOFF, DISPON, INVOFF, INVON, MADCTL, NORON, RAMWR, RASET, SLPIN, SLPOUT, SWRESET,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::init::{InitStep, SLEEP_OUT_DELAY_MS};
use crate::interface::{DisplayInterface, RESET_SETTLE_MS};
use crate::source::PixelSource;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Settle time after sleep-in before the next command
const SLEEP_IN_DELAY_MS: u32 = 5;

/// A rectangle on the panel, in pixels
///
/// Always non-empty once produced by [`Rect::clamped`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left column
    pub x: u16,
    /// Top row
    pub y: u16,
    /// Width in pixels
    pub w: u16,
    /// Height in pixels
    pub h: u16,
}

impl Rect {
    /// Create a new rectangle
    #[allow(clippy::many_single_char_names)]
    pub fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Clamp a requested rectangle onto a panel
    ///
    /// The origin is pulled inside the panel, then width and height are
    /// limited to what fits from there. Each side is at least one pixel, so a
    /// zero or negative size becomes 1.
    ///
    /// ```
    /// use st7789::{Dimensions, Rect};
    ///
    /// let rect = Rect::clamped(-5, 0, 300, 1, Dimensions::default());
    /// assert_eq!(rect, Rect::new(0, 0, 240, 1));
    /// ```
    #[allow(clippy::many_single_char_names)]
    pub fn clamped(x: i32, y: i32, w: i32, h: i32, dims: Dimensions) -> Self {
        let width = i32::from(dims.width);
        let height = i32::from(dims.height);
        let x = x.clamp(0, width - 1);
        let y = y.clamp(0, height - 1);
        let w = w.max(1).min(width - x);
        let h = h.max(1).min(height - y);
        Self::new(x as u16, y as u16, w as u16, h as u16)
    }

    /// Clamp this rectangle onto a panel, see [`Rect::clamped`]
    pub fn clamp_to(self, dims: Dimensions) -> Self {
        Self::clamped(
            i32::from(self.x),
            i32::from(self.y),
            i32::from(self.w),
            i32::from(self.h),
            dims,
        )
    }

    /// Number of pixels covered
    pub fn pixel_count(&self) -> usize {
        self.w as usize * self.h as usize
    }

    /// Right column (inclusive)
    pub fn x1(&self) -> u16 {
        (self.x + self.w).saturating_sub(1)
    }

    /// Bottom row (inclusive)
    pub fn y1(&self) -> u16 {
        (self.y + self.h).saturating_sub(1)
    }
}

/// Core display driver for ST7789
///
/// This struct provides the panel operations for the ST7789 controller.
/// It takes ownership of the interface and of a transfer buffer of at least
/// [`Config::buffer_size`] bytes, which is reused by every write.
///
/// For embedded-graphics support, see the `graphics` feature.
///
/// ## Example
///
/// ```rust,no_run
/// use st7789::{Builder, Color, Display, Interface, DEFAULT_BUFFER_SIZE};
/// # use core::convert::Infallible;
/// # use embedded_hal::delay::DelayNs;
/// # use embedded_hal::digital::OutputPin;
/// # use embedded_hal::spi::SpiBus;
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiBus for MockSpi {
/// #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
/// #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
/// #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
/// #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
/// #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// # let mut delay = MockDelay;
/// let interface = Interface::without_reset(MockSpi, MockPin, MockPin);
/// let config = match Builder::new().build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let mut display = match Display::try_new(interface, config, [0u8; DEFAULT_BUFFER_SIZE]) {
///     Ok(display) => display,
///     Err(_) => return,
/// };
/// let _ = display.reset(&mut delay);
/// let _ = display.fill_rectangle(0, 0, 240, 240, Some(Color::RED));
/// ```
pub struct Display<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Transfer buffer, `2 * chunk_capacity` bytes used
    buffer: B,
    /// Monochrome color map used by blits and default fills
    color_map: ColorMap,
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    /// Create a new Display instance
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is smaller than [`Config::buffer_size`].
    pub fn new(interface: I, config: Config, mut buffer: B) -> Self {
        let required = config.buffer_size();
        assert!(
            buffer.as_mut().len() >= required,
            "transfer buffer too small: required {} bytes, got {}",
            required,
            buffer.as_mut().len()
        );
        Self {
            interface,
            color_map: config.color_map,
            config,
            buffer,
        }
    }

    /// Try to create a new Display, returning an error if the buffer is too small
    ///
    /// This is the fallible version of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `buffer` is smaller than
    /// [`Config::buffer_size`].
    pub fn try_new(interface: I, config: Config, mut buffer: B) -> Result<Self, Error<I>> {
        let required = config.buffer_size();
        let provided = buffer.as_mut().len();
        if provided < required {
            return Err(Error::BufferTooSmall { required, provided });
        }
        Ok(Self {
            interface,
            color_map: config.color_map,
            config,
            buffer,
        })
    }

    /// Reset the controller and run the initialization sequence
    ///
    /// Pulses the reset line when one is wired, otherwise sends the software
    /// reset command and waits for it to settle.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if self.interface.has_reset_line() {
            debug!("st7789: hardware reset");
            self.interface.hard_reset(delay).map_err(Error::Interface)?;
        } else {
            debug!("st7789: software reset");
            self.send_command(SWRESET)?;
            delay.delay_ms(RESET_SETTLE_MS);
        }
        self.init(delay)
    }

    /// Program the controller into a display-ready state
    ///
    /// Sleep-out, normal mode, MADCTL, the configured tuning table,
    /// inversion, a full-panel window and display-on, with the settle delays
    /// the controller requires.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SLPOUT)?;
        delay.delay_ms(SLEEP_OUT_DELAY_MS);

        self.send_command(NORON)?;
        self.send_command_with_data(MADCTL, &[self.config.madctl()])?;

        let tuning = self.config.tuning;
        self.run_steps(tuning, delay)?;

        self.send_command(if self.config.inverted { INVON } else { INVOFF })?;

        let dims = self.config.dimensions;
        self.set_window(0, 0, dims.width - 1, dims.height - 1)?;
        delay.delay_ms(SLEEP_OUT_DELAY_MS);

        self.send_command(DISPON)?;
        delay.delay_ms(SLEEP_OUT_DELAY_MS);

        debug!(
            "st7789: initialized {}x{}, {} tuning steps",
            dims.width,
            dims.height,
            tuning.len()
        );
        Ok(())
    }

    /// Execute an initialization table
    fn run_steps<D: DelayNs>(&mut self, steps: &[InitStep], delay: &mut D) -> DisplayResult<I> {
        for step in steps {
            match *step {
                InitStep::Command(command, data) if data.is_empty() => {
                    self.send_command(command)?;
                }
                InitStep::Command(command, data) => self.send_command_with_data(command, data)?,
                InitStep::DelayMs(ms) => delay.delay_ms(ms),
            }
        }
        Ok(())
    }

    /// Set the addressing window for the next pixel writes
    ///
    /// Coordinates are inclusive. Sends CASET with `[x0, x1]` and RASET with
    /// `[y0, y1]`, each as big-endian 16-bit values.
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> DisplayResult<I> {
        let [x0_hi, x0_lo] = x0.to_be_bytes();
        let [x1_hi, x1_lo] = x1.to_be_bytes();
        self.send_command_with_data(CASET, &[x0_hi, x0_lo, x1_hi, x1_lo])?;

        let [y0_hi, y0_lo] = y0.to_be_bytes();
        let [y1_hi, y1_lo] = y1.to_be_bytes();
        self.send_command_with_data(RASET, &[y0_hi, y0_lo, y1_hi, y1_lo])?;
        Ok(())
    }

    /// Fill a rectangle with a single color
    ///
    /// The rectangle is clamped onto the panel (see [`Rect::clamped`]).
    /// `None` fills with the color map background.
    ///
    /// The transfer buffer is filled once; the rectangle is then sent as
    /// `pixels / chunk_capacity` full buffers plus one shorter payload for
    /// the remainder, if any.
    #[allow(clippy::many_single_char_names)]
    pub fn fill_rectangle(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Option<Color>,
    ) -> DisplayResult<I> {
        let rect = Rect::clamped(x, y, w, h, self.config.dimensions);
        let pixel = color.map_or(self.color_map.lookup(0), Color::to_be_bytes);
        let capacity = self.config.chunk_capacity;

        for slot in self.buffer.as_mut()[..capacity * 2].chunks_exact_mut(2) {
            slot.copy_from_slice(&pixel);
        }

        self.begin_write(rect)?;

        let total = rect.pixel_count();
        let (full_chunks, remainder) = (total / capacity, total % capacity);
        trace!(
            "st7789: fill {:?} = {} px, {} full chunks + {} px",
            rect, total, full_chunks, remainder
        );

        let buffer = &self.buffer.as_mut()[..capacity * 2];
        for _ in 0..full_chunks {
            self.interface.send_data(buffer).map_err(Error::Interface)?;
        }
        if remainder > 0 {
            self.interface
                .send_data(&buffer[..remainder * 2])
                .map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Fill the whole panel with a single color
    pub fn clear(&mut self, color: Color) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        self.fill_rectangle(
            0,
            0,
            i32::from(dims.width),
            i32::from(dims.height),
            Some(color),
        )
    }

    /// Copy a monochrome source into a rectangle through the color map
    ///
    /// The rectangle is clamped onto the panel (see [`Rect::clamped`]).
    /// `source` is read at (`col`, `row`) relative to the clamped rectangle,
    /// row by row, each value mapped by the current [`ColorMap`].
    #[allow(clippy::many_single_char_names)]
    pub fn blit<S>(&mut self, source: &S, x: i32, y: i32, w: i32, h: i32) -> DisplayResult<I>
    where
        S: PixelSource + ?Sized,
    {
        let rect = Rect::clamped(x, y, w, h, self.config.dimensions);
        let map = self.color_map;

        self.begin_write(rect)?;

        let pixels = (0..rect.h)
            .flat_map(|row| (0..rect.w).map(move |col| map.lookup(source.pixel(col, row))));
        let written = self.stream(pixels)?;
        trace!("st7789: blit {:?} = {} px", rect, written);
        Ok(())
    }

    /// Stream caller-supplied colors into a rectangle
    ///
    /// The rectangle is clamped onto the panel first. Colors are consumed in
    /// row-major order; at most `rect.pixel_count()` of them are sent. If the
    /// iterator ends early, the rest of the window keeps its previous content.
    pub fn write_pixels<P>(&mut self, rect: Rect, pixels: P) -> DisplayResult<I>
    where
        P: IntoIterator<Item = Color>,
    {
        let rect = rect.clamp_to(self.config.dimensions);
        self.begin_write(rect)?;

        let pixels = pixels
            .into_iter()
            .take(rect.pixel_count())
            .map(Color::to_be_bytes);
        let written = self.stream(pixels)?;
        trace!("st7789: write {:?} = {} px", rect, written);
        Ok(())
    }

    /// Set the window to `rect` and arm a memory write
    fn begin_write(&mut self, rect: Rect) -> DisplayResult<I> {
        self.set_window(rect.x, rect.y, rect.x1(), rect.y1())?;
        self.send_command(RAMWR)
    }

    /// Stage pixels in the transfer buffer, flushing every full chunk
    ///
    /// A full buffer is only sent once the next pixel arrives or the input
    /// ends, so the last payload is never empty. Returns the pixel count.
    fn stream<P>(&mut self, pixels: P) -> Result<usize, Error<I>>
    where
        P: IntoIterator<Item = [u8; 2]>,
    {
        let capacity = self.config.chunk_capacity;
        let buffer = &mut self.buffer.as_mut()[..capacity * 2];
        let mut staged = 0;
        let mut written = 0;

        for pixel in pixels {
            if staged == capacity {
                self.interface.send_data(buffer).map_err(Error::Interface)?;
                written += staged;
                staged = 0;
            }
            buffer[staged * 2..staged * 2 + 2].copy_from_slice(&pixel);
            staged += 1;
        }

        if staged > 0 {
            self.interface
                .send_data(&buffer[..staged * 2])
                .map_err(Error::Interface)?;
            written += staged;
        }
        Ok(written)
    }

    /// Switch display inversion on or off
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.send_command(if inverted { INVON } else { INVOFF })
    }

    /// Switch the panel output on or off; frame memory is kept
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(if on { DISPON } else { DISPOFF })
    }

    /// Enter sleep mode
    pub fn sleep<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SLPIN)?;
        delay.delay_ms(SLEEP_IN_DELAY_MS);
        Ok(())
    }

    /// Leave sleep mode
    pub fn wake<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SLPOUT)?;
        delay.delay_ms(SLEEP_OUT_DELAY_MS);
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send a command and its parameters to the display controller
    fn send_command_with_data(&mut self, cmd: u8, data: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_command_with_data(cmd, Some(data))
            .map_err(Error::Interface)
    }

    /// Current color map
    pub fn color_map(&self) -> &ColorMap {
        &self.color_map
    }

    /// Mutable access to the color map
    pub fn color_map_mut(&mut self) -> &mut ColorMap {
        &mut self.color_map
    }

    /// Replace the color map
    pub fn set_color_map(&mut self, map: ColorMap) {
        self.color_map = map;
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the underlying interface
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Release the interface and the transfer buffer
    pub fn release(self) -> (I, B) {
        (self.interface, self.buffer)
    }
}
