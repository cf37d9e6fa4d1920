//! I2C bus scan and read commands.

use core::fmt::Write;

use crate::error::Error;
use crate::hardware::I2cBus;
use crate::shell::dispatch::Args;
use crate::shell::{CommandHandler, CommandSpec};

/// Largest read the `i2c:read` command performs.
pub const MAX_READ: usize = 32;

/// `i2c:ACTION` command set.
///
/// `i2c:scan` walks the 7-bit address space and prints the classic 16x8
/// grid; `i2c:read ADDR COUNT` reads up to [`MAX_READ`] bytes from one
/// device. Addresses are given in hex, with or without a `0x` prefix.
#[derive(Debug, Default)]
pub struct I2cCommands;

impl I2cCommands {
    /// Registry metadata for this command set.
    pub const fn spec() -> CommandSpec {
        CommandSpec::new(
            "i2c",
            "I2C bus control (i2c:ACTION)",
            "i2c:scan | i2c:read 0x3C 1",
        )
    }

    fn usage(out: &mut dyn Write) -> Result<(), Error> {
        write!(out, "\r\n")?;
        write!(out, "Usage:\r\n")?;
        write!(out, "  i2c:scan              - Scan I2C bus for devices\r\n")?;
        write!(out, "  i2c:read ADDR COUNT   - Read bytes from device\r\n")?;
        write!(out, "\r\n")?;
        write!(out, "Example: i2c:scan\r\n")?;
        write!(out, "         i2c:read 0x3C 1\r\n")?;
        write!(out, "\r\n")?;
        Ok(())
    }

    fn scan<C: I2cBus>(ctx: &mut C, out: &mut dyn Write) -> Result<(), Error> {
        write!(out, "\r\n")?;
        write!(out, "Scanning I2C bus...\r\n")?;
        write!(
            out,
            "     0  1  2  3  4  5  6  7  8  9  A  B  C  D  E  F\r\n"
        )?;

        let mut found = 0;
        for addr in 0u8..128 {
            if addr % 16 == 0 {
                write!(out, "{:02X}: ", addr)?;
            }

            if ctx.probe(addr) {
                write!(out, "{:02X} ", addr)?;
                found += 1;
            } else {
                write!(out, "-- ")?;
            }

            if (addr + 1) % 16 == 0 {
                write!(out, "\r\n")?;
            }
        }

        write!(out, "\r\n")?;
        write!(out, "Found {} device(s)\r\n", found)?;
        write!(out, "\r\n")?;
        Ok(())
    }
}

impl<C: I2cBus> CommandHandler<C> for I2cCommands {
    fn execute(
        &mut self,
        ctx: &mut C,
        args: &Args<'_>,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        match args.get(1) {
            None => {
                Self::usage(out)?;
                Err(Error::InvalidArgument)
            }
            Some("scan") => Self::scan(ctx, out),
            Some("read") => {
                let (Some(addr_arg), Some(count_arg)) = (args.get(2), args.get(3)) else {
                    write!(out, "Missing address or count\r\n")?;
                    return Err(Error::InvalidArgument);
                };

                let addr_digits = addr_arg.trim_start_matches("0x").trim_start_matches("0X");
                let Ok(addr) = u8::from_str_radix(addr_digits, 16) else {
                    write!(out, "Invalid address: {}\r\n", addr_arg)?;
                    return Err(Error::InvalidArgument);
                };

                let count = match count_arg.parse::<usize>() {
                    Ok(count) if (1..=MAX_READ).contains(&count) => count,
                    _ => {
                        write!(
                            out,
                            "Invalid count: {} (use 1-{})\r\n",
                            count_arg, MAX_READ
                        )?;
                        return Err(Error::InvalidArgument);
                    }
                };

                let mut data = [0u8; MAX_READ];
                match ctx.read(addr, &mut data[..count]) {
                    Ok(()) => {
                        write!(out, "Read from 0x{:02X}: ", addr)?;
                        for byte in &data[..count] {
                            write!(out, "{:02X} ", byte)?;
                        }
                        write!(out, "\r\n")?;
                        Ok(())
                    }
                    Err(err) => {
                        write!(out, "Read failed from 0x{:02X}\r\n", addr)?;
                        Err(err)
                    }
                }
            }
            Some(action) => {
                write!(out, "Unknown action: {}\r\n", action)?;
                Err(Error::InvalidArgument)
            }
        }
    }
}
