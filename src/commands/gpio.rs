//! GPIO pin control commands.

use core::fmt::Write;

use crate::error::Error;
use crate::hardware::{GpioControl, PinMode};
use crate::shell::dispatch::Args;
use crate::shell::{CommandHandler, CommandSpec};

/// Highest pin number accepted by the command surface.
pub const MAX_PIN: u8 = 30;

/// `gpio:PIN:ACTION` command set.
///
/// Actions: `mode`, `write`, `toggle`, `read`, `info`. Output levels are
/// tracked locally so `toggle` works without a readback path; the table
/// starts all-low, matching pin state after reset.
#[derive(Debug)]
pub struct GpioCommands {
    states: [bool; MAX_PIN as usize + 1],
}

impl GpioCommands {
    /// Create the command set with all tracked levels low.
    pub fn new() -> Self {
        Self {
            states: [false; MAX_PIN as usize + 1],
        }
    }

    /// Registry metadata for this command set.
    pub const fn spec() -> CommandSpec {
        CommandSpec::new(
            "gpio",
            "GPIO control (gpio:PIN:ACTION)",
            "gpio:PIN:mode output | gpio:PIN:write 1 | gpio:PIN:read",
        )
    }

    fn usage(out: &mut dyn Write) -> Result<(), Error> {
        write!(out, "\r\n")?;
        write!(out, "Usage:\r\n")?;
        write!(out, "  gpio:PIN:mode MODE       - Set pin mode\r\n")?;
        write!(out, "  gpio:PIN:write VALUE     - Write pin (0/1)\r\n")?;
        write!(out, "  gpio:PIN:toggle          - Toggle pin\r\n")?;
        write!(out, "  gpio:PIN:read            - Read pin\r\n")?;
        write!(out, "  gpio:PIN:info            - Pin information\r\n")?;
        write!(out, "\r\n")?;
        write!(
            out,
            "Modes: output, input, input_pullup, input_pulldown\r\n"
        )?;
        write!(out, "Example: gpio:8:mode output\r\n")?;
        write!(out, "\r\n")?;
        Ok(())
    }
}

impl Default for GpioCommands {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: GpioControl> CommandHandler<C> for GpioCommands {
    fn execute(
        &mut self,
        ctx: &mut C,
        args: &Args<'_>,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        if args.argc() < 3 {
            Self::usage(out)?;
            return Err(Error::InvalidArgument);
        }

        let pin_arg = args.get(1).unwrap_or("");
        let pin = match pin_arg.parse::<u8>() {
            Ok(pin) if pin <= MAX_PIN => pin,
            _ => {
                write!(out, "Invalid pin: {} (use 0-{})\r\n", pin_arg, MAX_PIN)?;
                return Err(Error::InvalidArgument);
            }
        };

        match args.get(2).unwrap_or("") {
            "mode" => {
                let Some(mode_arg) = args.get(3) else {
                    write!(out, "Missing mode argument\r\n")?;
                    return Err(Error::InvalidArgument);
                };
                let Some(mode) = PinMode::parse(mode_arg) else {
                    write!(out, "Invalid mode: {}\r\n", mode_arg)?;
                    write!(
                        out,
                        "Valid modes: output, input, input_pullup, input_pulldown\r\n"
                    )?;
                    return Err(Error::InvalidArgument);
                };
                ctx.pin_mode(pin, mode)?;
                write!(out, "GPIO{} mode set to: {}\r\n", pin, mode.as_str())?;
                Ok(())
            }
            "write" => {
                let level = match args.get(3) {
                    Some("0") => false,
                    Some("1") => true,
                    Some(other) => {
                        write!(out, "Invalid value: {} (use 0 or 1)\r\n", other)?;
                        return Err(Error::InvalidArgument);
                    }
                    None => {
                        write!(out, "Missing value argument\r\n")?;
                        return Err(Error::InvalidArgument);
                    }
                };
                ctx.write(pin, level)?;
                self.states[pin as usize] = level;
                write!(out, "GPIO{} = {}\r\n", pin, level as u8)?;
                Ok(())
            }
            "toggle" => {
                let level = !self.states[pin as usize];
                ctx.write(pin, level)?;
                self.states[pin as usize] = level;
                write!(out, "GPIO{} toggled to {}\r\n", pin, level as u8)?;
                Ok(())
            }
            "read" => {
                let level = ctx.read(pin)?;
                write!(out, "GPIO{} = {}\r\n", pin, level as u8)?;
                Ok(())
            }
            "info" => {
                let level = ctx.read(pin)?;
                write!(out, "\r\n")?;
                write!(out, "GPIO{} Information:\r\n", pin)?;
                write!(out, "  Pin:       {}\r\n", pin)?;
                write!(out, "  Level:     {}\r\n", level as u8)?;
                write!(out, "  Tracked:   {}\r\n", self.states[pin as usize] as u8)?;
                write!(out, "\r\n")?;
                Ok(())
            }
            action => {
                write!(out, "Unknown action: {}\r\n", action)?;
                Err(Error::InvalidArgument)
            }
        }
    }
}
