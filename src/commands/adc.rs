//! ADC read commands.

use core::fmt::Write;

use crate::error::Error;
use crate::hardware::AdcReader;
use crate::shell::dispatch::Args;
use crate::shell::{CommandHandler, CommandSpec};

/// Highest ADC channel accepted by the command surface.
pub const MAX_CHANNEL: u8 = 6;

/// `adc:CHANNEL:ACTION` command set.
///
/// Actions: `read` (raw 12-bit sample), `voltage` (millivolts) and `info`.
#[derive(Debug, Default)]
pub struct AdcCommands;

impl AdcCommands {
    /// Registry metadata for this command set.
    pub const fn spec() -> CommandSpec {
        CommandSpec::new(
            "adc",
            "ADC control (adc:CHANNEL:ACTION)",
            "adc:0:voltage | adc:0:read | adc:0:info",
        )
    }

    fn usage(out: &mut dyn Write) -> Result<(), Error> {
        write!(out, "\r\n")?;
        write!(out, "Usage:\r\n")?;
        write!(out, "  adc:CHANNEL:read    - Read raw ADC value (0-4095)\r\n")?;
        write!(out, "  adc:CHANNEL:voltage - Read voltage in mV\r\n")?;
        write!(out, "  adc:CHANNEL:info    - Channel information\r\n")?;
        write!(out, "\r\n")?;
        write!(out, "Example: adc:0:voltage\r\n")?;
        write!(out, "\r\n")?;
        Ok(())
    }
}

impl<C: AdcReader> CommandHandler<C> for AdcCommands {
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

        let channel_arg = args.get(1).unwrap_or("");
        let channel = match channel_arg.parse::<u8>() {
            Ok(channel) if channel <= MAX_CHANNEL => channel,
            _ => {
                write!(
                    out,
                    "Invalid ADC channel: {} (use 0-{})\r\n",
                    channel_arg, MAX_CHANNEL
                )?;
                return Err(Error::InvalidArgument);
            }
        };

        match args.get(2).unwrap_or("") {
            "read" => {
                let raw = ctx.read(channel)?;
                write!(out, "ADC{} raw = {} (0-4095)\r\n", channel, raw)?;
                Ok(())
            }
            "voltage" => {
                let raw = ctx.read(channel)?;
                let mv = ctx.to_millivolts(raw);
                write!(
                    out,
                    "ADC{} = {} mV ({}.{:03} V)\r\n",
                    channel,
                    mv,
                    mv / 1000,
                    mv % 1000
                )?;
                Ok(())
            }
            "info" => {
                write!(out, "\r\n")?;
                write!(out, "ADC Channel {} Information:\r\n", channel)?;
                write!(out, "  Unit: ADC1\r\n")?;
                write!(out, "  Bitwidth: 12-bit (0-4095)\r\n")?;
                write!(out, "  Range: 0-3.3V\r\n")?;
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
