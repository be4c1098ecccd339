#![no_std]

pub mod clock;
mod constants;

use core::fmt;

pub use clock::{clock_digits, display_time, run, TimeSource, WallTime, REFRESH_INTERVAL_MS};
pub use constants::*;
use embedded_hal::i2c::I2c;
use log::{debug, trace};
use num_traits::ToPrimitive;

/// Segment pattern for a hexadecimal digit, ready to be written to the chip.
///
/// # Panics
///
/// Panics if `value` is greater than 15. Callers derive digits with `/` and `%`,
/// so an out-of-range value is a bug in the caller.
pub const fn encode(value: u8) -> u8 {
    HEX_TO_SEGMENTS[value as usize]
}

/// CH423 driving up to 16 seven-segment digits through its OC lines.
///
/// A value of this type only exists once the configuration word has been
/// written, so every digit write runs against a configured chip.
pub struct CH423<I2C, const NUM_DIGITS: u8> {
    i2c: I2C,
    config: u8,
    oc_outputs: u16,
}

impl<I2C, E, const NUM_DIGITS: u8> CH423<I2C, NUM_DIGITS>
where
    I2C: I2c<Error = E>,
{
    const DIGITS_IN_RANGE: () = assert!(NUM_DIGITS > 0 && NUM_DIGITS <= MAX_DIGITS);

    /// Configures the chip on an already opened bus.
    pub fn new(i2c: I2C) -> Result<Self, CH423Error<E>> {
        #[allow(clippy::let_unit_value)]
        let () = Self::DIGITS_IN_RANGE;

        let mut display = Self {
            i2c,
            config: DEFAULT_CONFIG,
            oc_outputs: OC_POWER_ON,
        };
        display.write_command(command::CONFIG, DEFAULT_CONFIG)?;
        debug!("ch423 configured: {:#04x}", DEFAULT_CONFIG);
        Ok(display)
    }

    /// Opens the bus with `open` and configures the chip.
    ///
    /// When `open` fails no transaction is attempted and the error is
    /// returned as [`CH423Error::BusOpen`].
    pub fn open<F>(open: F) -> Result<Self, CH423Error<E>>
    where
        F: FnOnce() -> Result<I2C, E>,
    {
        let i2c = open().map_err(CH423Error::BusOpen)?;
        Self::new(i2c)
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    pub fn config(&self) -> u8 {
        self.config
    }

    /// Writes a new configuration word. Nothing goes on the bus if the chip
    /// already holds `config`.
    ///
    /// Digit writes assume [`DEFAULT_CONFIG`]; clearing `IO_OE` or `DEC_L`, or
    /// setting `SLEEP`, leaves them without visible effect.
    pub fn set_config(&mut self, config: u8) -> Result<(), CH423Error<E>> {
        if self.config == config {
            return Ok(());
        }
        self.write_command(command::CONFIG, config)?;
        self.config = config;
        debug!("ch423 configured: {:#04x}", config);
        Ok(())
    }

    pub fn oc_outputs(&self) -> u16 {
        self.oc_outputs
    }

    /// Sets the levels of OC0 - OC15, bit n driving OCn. Each half is only
    /// written when it differs from the last level sent.
    ///
    /// With `DEC_L` set OC0 - OC7 select the digits, so only the high byte is
    /// free for general output.
    pub fn set_oc_outputs(&mut self, levels: u16) -> Result<(), CH423Error<E>> {
        let [low, high] = levels.to_le_bytes();
        let [last_low, last_high] = self.oc_outputs.to_le_bytes();

        if low != last_low {
            self.write_command(command::SET_OC_L, low)?;
            self.oc_outputs = u16::from_le_bytes([low, last_high]);
        }
        if high != last_high {
            self.write_command(command::SET_OC_H, high)?;
            self.oc_outputs = levels;
        }
        Ok(())
    }

    /// Shows the hexadecimal digit `value` at `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 15, see [`encode`].
    pub fn write_digit(&mut self, digit: u8, value: u8) -> Result<(), CH423Error<E>> {
        self.set_digit_data(digit, encode(value))
    }

    /// Turns off every segment of `digit`, decimal point included.
    pub fn blank_digit(&mut self, digit: u8) -> Result<(), CH423Error<E>> {
        self.set_digit_data(digit, BLANK)
    }

    pub fn clear(&mut self) -> Result<(), CH423Error<E>> {
        for i in 0..NUM_DIGITS {
            self.blank_digit(i)?;
        }
        Ok(())
    }

    /// Shows `number` in hexadecimal, most significant digit at position 0.
    /// Leading zeros are shown.
    pub fn display_hex_value<T>(&mut self, number: T) -> Result<(), CH423Error<E>>
    where
        T: ToPrimitive,
    {
        let mut num = number.to_u32().ok_or(CH423Error::InvalidValue)?;
        let capacity_bits = 4 * NUM_DIGITS as u32;
        if capacity_bits < u32::BITS && num >> capacity_bits != 0 {
            return Err(CH423Error::InvalidValue);
        }
        for i in 0..NUM_DIGITS {
            self.write_digit(NUM_DIGITS - 1 - i, (num % 16) as u8)?;
            num /= 16;
        }
        Ok(())
    }

    /// Writes a raw segment pattern to `digit`.
    pub fn set_digit_data(&mut self, digit: u8, value: u8) -> Result<(), CH423Error<E>> {
        if digit >= NUM_DIGITS {
            return Err(CH423Error::InvalidLocation(digit));
        }
        self.write_command(command::SET_IO_BASE | digit, value)
    }

    /// Input levels of IO0 - IO7. Only meaningful while `IO_OE` is cleared.
    pub fn read_inputs(&mut self) -> Result<u8, CH423Error<E>> {
        let mut buffer = [0; 1];
        self.i2c.read(command::READ_IO, &mut buffer)?;
        trace!("ch423 read {:#04x}: {:#04x}", command::READ_IO, buffer[0]);
        Ok(buffer[0])
    }

    fn write_command(&mut self, command: u8, value: u8) -> Result<(), CH423Error<E>> {
        trace!("ch423 write {:#04x}: {:#04x}", command, value);
        self.i2c.write(command, &[value])?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CH423Error<E> {
    BusOpen(E),
    Bus(E),
    InvalidValue,
    InvalidLocation(u8),
}

impl<E> From<E> for CH423Error<E> {
    fn from(error: E) -> Self {
        CH423Error::Bus(error)
    }
}

impl<E: fmt::Debug> fmt::Display for CH423Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CH423Error::BusOpen(e) => write!(f, "cannot open i2c bus: {:?}", e),
            CH423Error::Bus(e) => write!(f, "i2c transaction failed: {:?}", e),
            CH423Error::InvalidValue => f.write_str("value does not fit on the display"),
            CH423Error::InvalidLocation(digit) => write!(f, "no digit at position {}", digit),
        }
    }
}
