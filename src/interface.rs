//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for framing commands and data to the ST7789 controller over a 4-wire SPI bus.
//!
//! ## Hardware Requirements
//!
//! The ST7789 4-wire serial interface requires:
//! - SPI bus (MOSI + SCK), driven as a raw [`SpiBus`]
//! - 2 or 3 GPIO outputs:
//!   - **CS**: Chip select (active low)
//!   - **DC**: Data/Command select (low=command, high=data)
//!   - **RST**: Reset (active low, optional)
//!
//! Chip select is toggled by the interface itself around every command and
//! every data payload, so the bus must not be wrapped in a `SpiDevice` that
//! also drives CS.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use st7789::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! // Board with a reset line
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! let _ = interface.send_command(0x11); // Sleep out
//! let _ = interface.send_data(&[0x55]);
//!
//! // Board without a reset line (soft reset only)
//! let interface = Interface::without_reset(MockSpi, MockPin, MockPin);
//! assert!(!interface.has_reset_line());
//! ```

use core::fmt::Debug;
use core::marker::PhantomData;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::SpiBus;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Settle time in milliseconds for each half of the hardware reset pulse,
/// and after a software reset
pub const RESET_SETTLE_MS: u32 = 500;

/// Trait for the command/data framer in front of the ST7789 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// bus + GPIO implementation that satisfies the framing contract.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g. a parallel bus, or a DMA transport), implement this
/// trait on your own type. Implementations retain no state between calls and
/// propagate every transport failure unchanged.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC low (command mode)
    /// 2. Assert CS (low)
    /// 3. Send the command byte
    /// 4. Release CS (high)
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send a data payload to the controller
    ///
    /// The implementation must:
    /// 1. Set DC high (data mode)
    /// 2. Assert CS (low)
    /// 3. Send every byte of `data`; the controller must see one contiguous payload
    /// 4. Release CS (high)
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send a command followed by its parameter payload, if any
    ///
    /// This is the framing primitive behind every register write.
    fn send_command_with_data(
        &mut self,
        command: u8,
        data: Option<&[u8]>,
    ) -> InterfaceResult<(), Self::Error> {
        self.send_command(command)?;
        if let Some(data) = data {
            self.send_data(data)?;
        }
        Ok(())
    }

    /// Whether a hardware reset line is wired
    ///
    /// When this returns `false`, [`Display::reset`](crate::Display::reset)
    /// falls back to a software reset command.
    fn has_reset_line(&self) -> bool;

    /// Pulse the hardware reset line
    ///
    /// The implementation must:
    /// 1. Set RST low
    /// 2. Wait [`RESET_SETTLE_MS`]
    /// 3. Set RST high
    /// 4. Wait [`RESET_SETTLE_MS`]
    ///
    /// Does nothing when no reset line is wired.
    fn hard_reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Placeholder reset pin for boards without a wired reset line
///
/// Carries the error type of the other pins so that [`Interface`] keeps a
/// single pin error type. Never driven.
#[derive(Debug)]
pub struct NoResetPin<E>(PhantomData<E>);

impl<E: digital::Error> digital::ErrorType for NoResetPin<E> {
    type Error = E;
}

impl<E: digital::Error> OutputPin for NoResetPin<E> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Hardware interface implementation for ST7789
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI bus and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `CS` - Chip select pin implementing [`OutputPin`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`], or [`NoResetPin`]
pub struct Interface<SPI, CS, DC, RST> {
    /// SPI bus for communication
    spi: SPI,
    /// Chip select pin (active low)
    cs: CS,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low), if wired
    rst: Option<RST>,
}

impl<SPI, CS, DC, RST> Interface<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface with a hardware reset line
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `cs` - Chip select pin (output, active low)
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst: Some(rst),
        }
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, CS, DC, Option<RST>) {
        (self.spi, self.cs, self.dc, self.rst)
    }
}

impl<SPI, CS, DC> Interface<SPI, CS, DC, NoResetPin<DC::Error>>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
{
    /// Create a new Interface for a board without a reset line
    ///
    /// The display will be reset with the software reset command instead.
    pub fn without_reset(spi: SPI, cs: CS, dc: DC) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst: None,
        }
    }
}

impl<SPI, CS, DC, RST> Interface<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Run one chip-select framed transfer
    fn transfer(&mut self, bytes: &[u8]) -> InterfaceResult<(), InterfaceError<SPI::Error, CS::Error>> {
        self.cs.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(bytes).map_err(InterfaceError::Spi)?;
        self.spi.flush().map_err(InterfaceError::Spi)?;
        self.cs.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }
}

impl<SPI, CS, DC, RST, PinErr> DisplayInterface for Interface<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.transfer(&[command])
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.transfer(data)
    }

    fn has_reset_line(&self) -> bool {
        self.rst.is_some()
    }

    fn hard_reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(());
        };
        // LOW -> settle -> HIGH -> settle
        rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use core::convert::Infallible;

    #[derive(Clone, Debug, PartialEq)]
    enum Event {
        Cs(bool),
        Dc(bool),
        Rst(bool),
        Write(Vec<u8>),
        Flush,
        Delay(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockSpiError;

    impl embedded_hal::spi::Error for MockSpiError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::ErrorType for MockSpi {
        type Error = MockSpiError;
    }

    impl SpiBus for MockSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockSpiError);
            }
            self.log.borrow_mut().push(Event::Write(words.to_vec()));
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Flush);
            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    enum Line {
        Cs,
        Dc,
        Rst,
    }

    struct MockPin {
        log: Log,
        line: Line,
    }

    impl MockPin {
        fn record(&self, level: bool) {
            let event = match self.line {
                Line::Cs => Event::Cs(level),
                Line::Dc => Event::Dc(level),
                Line::Rst => Event::Rst(level),
            };
            self.log.borrow_mut().push(event);
        }
    }

    impl digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.record(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.record(true);
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::Delay(ms));
        }
    }

    fn pin(log: &Log, line: Line) -> MockPin {
        MockPin {
            log: log.clone(),
            line,
        }
    }

    fn test_interface(log: &Log) -> Interface<MockSpi, MockPin, MockPin, MockPin> {
        let spi = MockSpi {
            log: log.clone(),
            fail: false,
        };
        Interface::new(spi, pin(log, Line::Cs), pin(log, Line::Dc), pin(log, Line::Rst))
    }

    #[test]
    fn test_send_command_frames_with_dc_low() {
        let log = Log::default();
        let mut interface = test_interface(&log);
        interface.send_command(0x2A).unwrap();

        assert_eq!(
            *log.borrow(),
            alloc::vec![
                Event::Dc(false),
                Event::Cs(false),
                Event::Write(alloc::vec![0x2A]),
                Event::Flush,
                Event::Cs(true),
            ]
        );
    }

    #[test]
    fn test_send_data_frames_with_dc_high() {
        let log = Log::default();
        let mut interface = test_interface(&log);
        interface.send_data(&[0x00, 0x00, 0x00, 0xEF]).unwrap();

        assert_eq!(
            *log.borrow(),
            alloc::vec![
                Event::Dc(true),
                Event::Cs(false),
                Event::Write(alloc::vec![0x00, 0x00, 0x00, 0xEF]),
                Event::Flush,
                Event::Cs(true),
            ]
        );
    }

    #[test]
    fn test_send_command_with_data_none_sends_command_only() {
        let log = Log::default();
        let mut interface = test_interface(&log);
        interface.send_command_with_data(0x2C, None).unwrap();

        let writes: Vec<Event> = log
            .borrow()
            .iter()
            .filter(|event| matches!(event, Event::Write(_)))
            .cloned()
            .collect();
        assert_eq!(writes, alloc::vec![Event::Write(alloc::vec![0x2C])]);
    }

    #[test]
    fn test_send_command_with_data_sends_both_transactions() {
        let log = Log::default();
        let mut interface = test_interface(&log);
        interface.send_command_with_data(0x3A, Some(&[0x55])).unwrap();

        let events = log.borrow();
        let cs_low = events.iter().filter(|e| **e == Event::Cs(false)).count();
        let cs_high = events.iter().filter(|e| **e == Event::Cs(true)).count();
        assert_eq!(cs_low, 2);
        assert_eq!(cs_high, 2);
        assert_eq!(events[0], Event::Dc(false));
        assert_eq!(events[5], Event::Dc(true));
        assert_eq!(events[7], Event::Write(alloc::vec![0x55]));
    }

    #[test]
    fn test_spi_failure_propagates() {
        let log = Log::default();
        let spi = MockSpi {
            log: log.clone(),
            fail: true,
        };
        let mut interface =
            Interface::new(spi, pin(&log, Line::Cs), pin(&log, Line::Dc), pin(&log, Line::Rst));

        let result = interface.send_data(&[0xFF]);
        assert!(matches!(result, Err(InterfaceError::Spi(MockSpiError))));
    }

    #[test]
    fn test_hard_reset_pulses_line() {
        let log = Log::default();
        let mut interface = test_interface(&log);
        let mut delay = MockDelay { log: log.clone() };
        assert!(interface.has_reset_line());
        interface.hard_reset(&mut delay).unwrap();

        assert_eq!(
            *log.borrow(),
            alloc::vec![
                Event::Rst(false),
                Event::Delay(RESET_SETTLE_MS),
                Event::Rst(true),
                Event::Delay(RESET_SETTLE_MS),
            ]
        );
    }

    #[test]
    fn test_without_reset_has_no_reset_line() {
        let log = Log::default();
        let spi = MockSpi {
            log: log.clone(),
            fail: false,
        };
        let mut interface = Interface::without_reset(spi, pin(&log, Line::Cs), pin(&log, Line::Dc));
        let mut delay = MockDelay { log: log.clone() };

        assert!(!interface.has_reset_line());
        interface.hard_reset(&mut delay).unwrap();
        assert!(log.borrow().is_empty());
    }
}
