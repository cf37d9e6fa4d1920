//! # Peripheral traits for device-control commands
//!
//! The built-in command sets never call vendor driver APIs directly; they
//! reach hardware through the traits in this module. The dispatch context
//! object implements whichever traits the registered commands require, so a
//! board definition stays in application code while the command logic lives
//! here.
//!
//! Splitting the traits per peripheral keeps the bounds honest: a command
//! set that only toggles pins asks for [`GpioControl`] and nothing else.
//!
//! # Usage Examples
//!
//! ```rust
//! use coreshell::error::Error;
//! use coreshell::hardware::{GpioControl, PinMode};
//!
//! struct Board {
//!     levels: [bool; 31],
//! }
//!
//! impl GpioControl for Board {
//!     fn pin_mode(&mut self, _pin: u8, _mode: PinMode) -> Result<(), Error> {
//!         Ok(())
//!     }
//!
//!     fn write(&mut self, pin: u8, level: bool) -> Result<(), Error> {
//!         self.levels[pin as usize] = level;
//!         Ok(())
//!     }
//!
//!     fn read(&mut self, pin: u8) -> Result<bool, Error> {
//!         Ok(self.levels[pin as usize])
//!     }
//! }
//! ```

use crate::config::{ConfigMode, Settings};
use crate::error::Error;

/// GPIO pin direction and pull configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// Push-pull output
    Output,
    /// Floating input
    Input,
    /// Input with internal pull-up
    InputPullup,
    /// Input with internal pull-down
    InputPulldown,
}

impl PinMode {
    /// Parse a pin mode from its command-line name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "output" => Some(PinMode::Output),
            "input" => Some(PinMode::Input),
            "input_pullup" => Some(PinMode::InputPullup),
            "input_pulldown" => Some(PinMode::InputPulldown),
            _ => None,
        }
    }

    /// Command-line name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            PinMode::Output => "output",
            PinMode::Input => "input",
            PinMode::InputPullup => "input_pullup",
            PinMode::InputPulldown => "input_pulldown",
        }
    }

    /// Whether this mode drives the pin.
    pub fn is_output(&self) -> bool {
        matches!(self, PinMode::Output)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinMode {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_str());
    }
}

/// Digital pin control.
pub trait GpioControl {
    /// Configure a pin's direction and pulls.
    fn pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Error>;

    /// Drive an output pin high or low.
    fn write(&mut self, pin: u8, level: bool) -> Result<(), Error>;

    /// Sample a pin's current level.
    fn read(&mut self, pin: u8) -> Result<bool, Error>;
}

/// One-shot analog conversion.
pub trait AdcReader {
    /// Read a raw 12-bit sample (0-4095) from `channel`.
    fn read(&mut self, channel: u8) -> Result<u16, Error>;

    /// Convert a raw sample to millivolts.
    ///
    /// The default assumes a 3.3 V full-scale range on a 12-bit converter;
    /// calibrated platforms override this.
    fn to_millivolts(&self, raw: u16) -> u32 {
        (raw as u32 * 3300) / 4095
    }
}

/// PWM duty-cycle and frequency programming.
pub trait PwmControl {
    /// Route `channel` to `pin` and set its duty cycle in percent (0-100).
    fn set_duty(&mut self, pin: u8, channel: u8, percent: u8) -> Result<(), Error>;

    /// Set the carrier frequency for `channel` in Hz.
    fn set_frequency(&mut self, channel: u8, hz: u32) -> Result<(), Error>;

    /// Stop output on `channel`, leaving the pin low.
    fn stop(&mut self, channel: u8) -> Result<(), Error>;
}

/// I2C master bus access.
pub trait I2cBus {
    /// Probe for a device at the 7-bit address `addr`.
    fn probe(&mut self, addr: u8) -> bool;

    /// Read `buf.len()` bytes from the device at `addr`.
    fn read(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), Error>;
}

/// System-level queries and control.
pub trait SystemControl {
    /// Firmware version string reported by the `version` command.
    fn firmware_version(&self) -> &str;

    /// Bytes of heap currently free.
    fn free_heap(&self) -> usize;

    /// Low-water mark of free heap since boot.
    fn min_free_heap(&self) -> usize;

    /// Restart the system. Implementations typically do not return; the
    /// trait does not require divergence so hosted test doubles can observe
    /// the call.
    fn restart(&mut self);
}

/// Configure peripherals from the settings record's auto-init tables.
///
/// Called once at startup when [`Settings::config_mode`] is
/// [`ConfigMode::AutoInit`]. Each listed pin is configured and, for outputs,
/// driven to its initial level. SPI and I2C setups are carried in the record
/// but not applied here; buses are brought up lazily by their command sets.
///
/// # Returns
///
/// * `Ok(count)` - Number of pins configured (0 when auto-init is disabled
///   or the mode is minimal)
/// * `Err(error)` - A pin configuration failed; earlier pins stay configured
pub fn apply_auto_init<P: GpioControl>(gpio: &mut P, settings: &Settings) -> Result<usize, Error> {
    if settings.config_mode != ConfigMode::AutoInit || !settings.auto_init.enabled {
        return Ok(0);
    }

    let mut configured = 0;
    for pin in &settings.auto_init.gpio {
        gpio.pin_mode(pin.pin, pin.mode)?;
        if pin.mode.is_output() {
            gpio.write(pin.pin, pin.initial)?;
        }
        configured += 1;
    }

    Ok(configured)
}
