//! Hours and minutes on the first four digits.

use core::fmt::Debug;
use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::warn;

use crate::{CH423Error, CLOCK_DIGITS, CH423};

pub const REFRESH_INTERVAL_MS: u32 = 1000;

/// Local wall-clock time, `hour` in 0-23 and `minute` in 0-59.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallTime {
    pub hour: u8,
    pub minute: u8,
}

impl WallTime {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }
}

pub trait TimeSource {
    fn now(&mut self) -> WallTime;
}

impl<F> TimeSource for F
where
    F: FnMut() -> WallTime,
{
    fn now(&mut self) -> WallTime {
        self()
    }
}

/// Digit values for positions 0-3, `None` for a blank digit.
///
/// The tens of hours are only shown after 10:59, so 10:00 shows as " 0:00".
pub fn clock_digits(time: WallTime) -> [Option<u8>; CLOCK_DIGITS as usize] {
    let tens_of_hours = if time.hour > 10 {
        Some(time.hour / 10)
    } else {
        None
    };
    [
        tens_of_hours,
        Some(time.hour % 10),
        Some(time.minute / 10),
        Some(time.minute % 10),
    ]
}

/// Writes `time` to positions 0-3, in order.
pub fn display_time<I2C, E, const NUM_DIGITS: u8>(
    display: &mut CH423<I2C, NUM_DIGITS>,
    time: WallTime,
) -> Result<(), CH423Error<E>>
where
    I2C: I2c<Error = E>,
{
    for (position, digit) in (0..CLOCK_DIGITS).zip(clock_digits(time)) {
        match digit {
            Some(value) => display.write_digit(position, value)?,
            None => display.blank_digit(position)?,
        }
    }
    Ok(())
}

/// Refreshes the display from `time` every [`REFRESH_INTERVAL_MS`] until
/// `stop` is set. The flag is checked before each refresh; the digits are
/// left as they are on return.
pub fn run<I2C, E, T, D, const NUM_DIGITS: u8>(
    display: &mut CH423<I2C, NUM_DIGITS>,
    time: &mut T,
    delay: &mut D,
    stop: &AtomicBool,
) -> Result<(), CH423Error<E>>
where
    I2C: I2c<Error = E>,
    E: Debug,
    T: TimeSource,
    D: DelayNs,
{
    while !stop.load(Ordering::Relaxed) {
        let now = time.now();
        if let Err(error) = display_time(display, now) {
            warn!(
                "display refresh at {:02}:{:02} failed: {:?}",
                now.hour, now.minute, error
            );
            return Err(error);
        }
        delay.delay_ms(REFRESH_INTERVAL_MS);
    }
    Ok(())
}
