use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use ch423::{WallTime, CH423, CLOCK_DIGITS};
use chrono::{Local, Timelike};
use clap::Parser;
use linux_embedded_hal::{Delay, I2CError, I2cdev};
use log::info;

/// Shows the local time on a 4-digit 7-segment display driven by a CH423.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// I2C bus number, as listed by `i2cdetect -l`
    #[arg(short, long, env = "CH423_BUS", default_value_t = 11)]
    bus: u32,

    /// I2C device node, overrides --bus
    #[arg(short, long)]
    device: Option<PathBuf>,
}

impl Args {
    fn device_path(&self) -> PathBuf {
        self.device
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("/dev/i2c-{}", self.bus)))
    }
}

fn local_time() -> WallTime {
    let now = Local::now();
    WallTime::new(now.hour() as u8, now.minute() as u8)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let path = args.device_path();
    info!("opening {}", path.display());
    let mut display: CH423<_, CLOCK_DIGITS> =
        CH423::open(|| I2cdev::new(&path).map_err(I2CError::from))
            .map_err(|e| anyhow!("{}: {e}", path.display()))?;

    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = stop.clone();
    ctrlc::set_handler(move || handler_stop.store(true, Ordering::Relaxed))?;

    ch423::run(&mut display, &mut local_time, &mut Delay, &stop).map_err(|e| anyhow!("{e}"))?;

    info!("stopped");
    Ok(())
}
