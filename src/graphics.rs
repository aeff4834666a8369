//! Graphics support via embedded-graphics
//!
//! This module implements the [`DrawTarget`] trait from the embedded-graphics
//! ecosystem directly on [`Display`], in [`Rgb565`].
//!
//! There is no frame buffer: every draw call is streamed to the controller
//! through the transfer buffer.
//!
//! - `fill_solid` becomes one [`Display::fill_rectangle`]
//! - `fill_contiguous` (images, filled shapes) becomes one [`Display::write_pixels`]
//! - single pixels each get a 1x1 window, which is slow; prefer filled areas
//!
//! Pixels outside the panel are dropped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use st7789::{Builder, Display, Interface, DEFAULT_BUFFER_SIZE};
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
//! # let interface = Interface::without_reset(MockSpi, MockPin, MockPin);
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = Display::new(interface, config, [0u8; DEFAULT_BUFFER_SIZE]);
//!
//! let _ = DrawTarget::clear(&mut display, Rgb565::BLACK);
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    prelude::PointsIter,
    primitives::Rectangle,
    Pixel,
};

use crate::color::Color;
use crate::display::{Display, Rect};
use crate::error::Error;
use crate::interface::DisplayInterface;

type GraphicsResult<I> = core::result::Result<(), Error<I>>;

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    /// Part of `area` that lies on the panel, if any
    fn visible(&self, area: &Rectangle) -> Option<Rect> {
        let clipped = area.intersection(&self.bounding_box());
        if clipped.is_zero_sized() {
            return None;
        }
        Some(Rect::new(
            clipped.top_left.x as u16,
            clipped.top_left.y as u16,
            clipped.size.width as u16,
            clipped.size.height as u16,
        ))
    }
}

impl<I, B> DrawTarget for Display<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> GraphicsResult<I>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let size = self.size();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x as u32 >= size.width || y as u32 >= size.height {
                continue;
            }
            self.fill_rectangle(x, y, 1, 1, Some(color.into()))?;
        }

        Ok(())
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> GraphicsResult<I>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        let Some(visible) = self.visible(area) else {
            return Ok(());
        };

        if visible.pixel_count() as u64 == u64::from(area.size.width) * u64::from(area.size.height)
        {
            return self.write_pixels(visible, colors.into_iter().map(Color::from));
        }

        // Partly off-panel: only per-pixel writes keep the source order
        self.draw_iter(
            area.points()
                .zip(colors)
                .map(|(point, color)| Pixel(point, color)),
        )
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> GraphicsResult<I> {
        let Some(visible) = self.visible(area) else {
            return Ok(());
        };
        self.fill_rectangle(
            i32::from(visible.x),
            i32::from(visible.y),
            i32::from(visible.w),
            i32::from(visible.h),
            Some(color.into()),
        )
    }

    fn clear(&mut self, color: Self::Color) -> GraphicsResult<I> {
        Display::clear(self, color.into())
    }
}

impl<I, B> OriginDimensions for Display<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CASET, RAMWR, RASET};
    use crate::config::Builder;
    use alloc::vec::Vec;
    use embedded_graphics::primitives::{Primitive, PrimitiveStyle};
    use embedded_graphics::Drawable;
    use embedded_graphics_core::pixelcolor::RgbColor;
    use embedded_hal::delay::DelayNs;

    #[derive(Debug, Default)]
    struct MockInterface {
        commands: Vec<u8>,
        command_data: Vec<(u8, Vec<u8>)>,
        last_command: Option<u8>,
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.commands.push(command);
            self.last_command = Some(command);
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if let Some(cmd) = self.last_command {
                self.command_data.push((cmd, data.to_vec()));
            }
            Ok(())
        }

        fn has_reset_line(&self) -> bool {
            false
        }

        fn hard_reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl MockInterface {
        fn pixel_bytes(&self) -> Vec<u8> {
            self.command_data
                .iter()
                .filter(|(cmd, _)| *cmd == RAMWR)
                .flat_map(|(_, data)| data.iter().copied())
                .collect()
        }

        fn last_params(&self, command: u8) -> Option<&Vec<u8>> {
            self.command_data
                .iter()
                .rev()
                .find(|(cmd, _)| *cmd == command)
                .map(|(_, data)| data)
        }
    }

    fn test_display() -> Display<MockInterface, Vec<u8>> {
        let config = Builder::new().chunk_capacity(16).build().unwrap();
        Display::new(MockInterface::default(), config, alloc::vec![0u8; 32])
    }

    #[test]
    fn test_size_matches_dimensions() {
        let display = test_display();
        assert_eq!(display.size(), Size::new(240, 240));
    }

    #[test]
    fn test_fill_solid_uses_single_window() {
        let mut display = test_display();
        Rectangle::new(Point::new(10, 20), Size::new(5, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
            .draw(&mut display)
            .unwrap();

        assert_eq!(display.interface_mut().commands.iter().filter(|c| **c == RAMWR).count(), 1);
        let interface = display.interface_mut();
        assert_eq!(interface.last_params(CASET), Some(&alloc::vec![0, 10, 0, 14]));
        assert_eq!(interface.last_params(RASET), Some(&alloc::vec![0, 20, 0, 23]));
        let bytes = interface.pixel_bytes();
        assert_eq!(bytes.len(), 40);
        assert!(bytes.chunks(2).all(|px| px == [0xF8, 0x00]));
    }

    #[test]
    fn test_fill_solid_clips_to_panel() {
        let mut display = test_display();
        display
            .fill_solid(
                &Rectangle::new(Point::new(-10, 235), Size::new(20, 20)),
                Rgb565::BLUE,
            )
            .unwrap();

        let interface = display.interface_mut();
        assert_eq!(interface.last_params(CASET), Some(&alloc::vec![0, 0, 0, 9]));
        assert_eq!(interface.last_params(RASET), Some(&alloc::vec![0, 235, 0, 239]));
        assert_eq!(interface.pixel_bytes().len(), 10 * 5 * 2);
    }

    #[test]
    fn test_fill_solid_off_panel_is_noop() {
        let mut display = test_display();
        display
            .fill_solid(
                &Rectangle::new(Point::new(300, 300), Size::new(5, 5)),
                Rgb565::GREEN,
            )
            .unwrap();
        assert!(display.interface_mut().commands.is_empty());
    }

    #[test]
    fn test_fill_contiguous_streams_in_order() {
        let mut display = test_display();
        let colors = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::WHITE];
        display
            .fill_contiguous(&Rectangle::new(Point::new(0, 0), Size::new(2, 2)), colors)
            .unwrap();

        assert_eq!(
            display.interface_mut().pixel_bytes(),
            alloc::vec![0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_fill_contiguous_partly_off_panel_keeps_visible_pixels() {
        let mut display = test_display();
        let colors = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::WHITE];
        display
            .fill_contiguous(&Rectangle::new(Point::new(238, 0), Size::new(4, 1)), colors)
            .unwrap();

        let interface = display.interface_mut();
        assert_eq!(interface.commands.iter().filter(|c| **c == RAMWR).count(), 2);
        assert_eq!(interface.last_params(CASET), Some(&alloc::vec![0, 239, 0, 239]));
        assert_eq!(
            interface.pixel_bytes(),
            alloc::vec![0xF8, 0x00, 0x07, 0xE0]
        );
    }

    #[test]
    fn test_draw_iter_skips_off_panel_pixels() {
        let mut display = test_display();
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), Rgb565::RED),
                Pixel(Point::new(3, 4), Rgb565::RED),
                Pixel(Point::new(240, 0), Rgb565::RED),
            ])
            .unwrap();

        let interface = display.interface_mut();
        assert_eq!(interface.last_params(CASET), Some(&alloc::vec![0, 3, 0, 3]));
        assert_eq!(interface.pixel_bytes(), alloc::vec![0xF8, 0x00]);
    }

    #[test]
    fn test_clear_fills_panel() {
        let mut display = test_display();
        DrawTarget::clear(&mut display, Rgb565::WHITE).unwrap();

        assert_eq!(display.interface_mut().pixel_bytes().len(), 240 * 240 * 2);
    }

    #[test]
    fn test_color_conversion_roundtrip() {
        assert_eq!(Color::from(Rgb565::RED), Color::RED);
        assert_eq!(Rgb565::from(Color::BLUE), Rgb565::BLUE);
    }
}
