//! PWM duty-cycle and frequency commands.

use core::fmt::Write;

use crate::error::Error;
use crate::hardware::PwmControl;
use crate::shell::dispatch::Args;
use crate::shell::{CommandHandler, CommandSpec};

/// Highest carrier frequency accepted, in Hz.
pub const MAX_FREQUENCY_HZ: u32 = 40_000_000;

/// `pwm:GPIO:CH:ACTION` command set.
///
/// Actions: `duty` (percent), `freq` (Hz), `stop` and `info`.
#[derive(Debug, Default)]
pub struct PwmCommands;

impl PwmCommands {
    /// Registry metadata for this command set.
    pub const fn spec() -> CommandSpec {
        CommandSpec::new(
            "pwm",
            "PWM control (pwm:GPIO:CHANNEL:ACTION)",
            "pwm:8:0:duty:50 | pwm:8:0:freq:1000",
        )
    }

    fn usage(out: &mut dyn Write) -> Result<(), Error> {
        write!(out, "\r\n")?;
        write!(out, "Usage:\r\n")?;
        write!(out, "  pwm:GPIO:CH:duty:PERCENT   - Set duty cycle (0-100%)\r\n")?;
        write!(out, "  pwm:GPIO:CH:freq:HZ        - Set frequency\r\n")?;
        write!(out, "  pwm:GPIO:CH:stop           - Stop PWM\r\n")?;
        write!(out, "  pwm:GPIO:CH:info           - Show info\r\n")?;
        write!(out, "\r\n")?;
        write!(out, "Example: pwm:8:0:duty:50\r\n")?;
        write!(out, "\r\n")?;
        Ok(())
    }
}

impl<C: PwmControl> CommandHandler<C> for PwmCommands {
    fn execute(
        &mut self,
        ctx: &mut C,
        args: &Args<'_>,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        if args.argc() < 4 {
            Self::usage(out)?;
            return Err(Error::InvalidArgument);
        }

        let pin = match args.get(1).unwrap_or("").parse::<u8>() {
            Ok(pin) => pin,
            Err(_) => {
                write!(out, "Invalid GPIO: {}\r\n", args.get(1).unwrap_or(""))?;
                return Err(Error::InvalidArgument);
            }
        };
        let channel = match args.get(2).unwrap_or("").parse::<u8>() {
            Ok(channel) => channel,
            Err(_) => {
                write!(out, "Invalid channel: {}\r\n", args.get(2).unwrap_or(""))?;
                return Err(Error::InvalidArgument);
            }
        };

        match (args.get(3).unwrap_or(""), args.get(4)) {
            ("duty", Some(duty_arg)) => {
                let percent = match duty_arg.parse::<u8>() {
                    Ok(percent) if percent <= 100 => percent,
                    _ => {
                        write!(out, "Invalid duty cycle: {}% (use 0-100)\r\n", duty_arg)?;
                        return Err(Error::InvalidArgument);
                    }
                };
                ctx.set_duty(pin, channel, percent)?;
                write!(out, "PWM GPIO{} CH{} = {}% duty\r\n", pin, channel, percent)?;
                Ok(())
            }
            ("freq", Some(freq_arg)) => {
                let hz = match freq_arg.parse::<u32>() {
                    Ok(hz) if (1..=MAX_FREQUENCY_HZ).contains(&hz) => hz,
                    _ => {
                        write!(
                            out,
                            "Invalid frequency: {} Hz (use 1-{})\r\n",
                            freq_arg, MAX_FREQUENCY_HZ
                        )?;
                        return Err(Error::InvalidArgument);
                    }
                };
                ctx.set_frequency(channel, hz)?;
                write!(out, "PWM frequency set to {} Hz\r\n", hz)?;
                Ok(())
            }
            ("duty", None) | ("freq", None) => {
                write!(out, "Missing value argument\r\n")?;
                Err(Error::InvalidArgument)
            }
            ("stop", _) => {
                ctx.stop(channel)?;
                write!(out, "PWM GPIO{} CH{} stopped\r\n", pin, channel)?;
                Ok(())
            }
            ("info", _) => {
                write!(out, "\r\n")?;
                write!(out, "PWM Channel {} Information:\r\n", channel)?;
                write!(out, "  GPIO: {}\r\n", pin)?;
                write!(out, "  Resolution: 13-bit (0-8191)\r\n")?;
                write!(out, "  Frequency: Variable (1 Hz - 40 MHz)\r\n")?;
                write!(out, "\r\n")?;
                Ok(())
            }
            (action, _) => {
                write!(out, "Unknown action: {}\r\n", action)?;
                Err(Error::InvalidArgument)
            }
        }
    }
}
