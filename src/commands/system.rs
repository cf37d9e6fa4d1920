//! System status and restart commands.

use core::fmt::Write;

use crate::error::Error;
use crate::hardware::SystemControl;
use crate::shell::dispatch::Args;
use crate::shell::{CommandHandler, CommandSpec};

/// `heap` command: show memory status.
#[derive(Debug, Default)]
pub struct HeapCommand;

impl HeapCommand {
    /// Registry metadata for this command.
    pub const fn spec() -> CommandSpec {
        CommandSpec::new("heap", "Show memory status", "heap")
    }
}

impl<C: SystemControl> CommandHandler<C> for HeapCommand {
    fn execute(
        &mut self,
        ctx: &mut C,
        _args: &Args<'_>,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        write!(out, "\r\n")?;
        write!(out, "Memory Status:\r\n")?;
        write!(out, "---------------\r\n")?;
        write!(out, "Free Heap:     {} bytes\r\n", ctx.free_heap())?;
        write!(out, "Min Free Heap: {} bytes\r\n", ctx.min_free_heap())?;
        write!(out, "\r\n")?;
        Ok(())
    }
}

/// `restart` command: restart the system.
#[derive(Debug, Default)]
pub struct RestartCommand;

impl RestartCommand {
    /// Registry metadata for this command.
    pub const fn spec() -> CommandSpec {
        CommandSpec::new("restart", "Restart system", "restart")
    }
}

impl<C: SystemControl> CommandHandler<C> for RestartCommand {
    fn execute(
        &mut self,
        ctx: &mut C,
        _args: &Args<'_>,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        write!(out, "Restarting system...\r\n")?;
        ctx.restart();
        Ok(())
    }
}

/// `version` command: show the firmware version.
#[derive(Debug, Default)]
pub struct VersionCommand;

impl VersionCommand {
    /// Registry metadata for this command.
    pub const fn spec() -> CommandSpec {
        CommandSpec::new("version", "Show system version", "version")
    }
}

impl<C: SystemControl> CommandHandler<C> for VersionCommand {
    fn execute(
        &mut self,
        ctx: &mut C,
        _args: &Args<'_>,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        write!(out, "\r\n")?;
        write!(out, "{}\r\n", ctx.firmware_version())?;
        write!(out, "\r\n")?;
        Ok(())
    }
}
