//! File storage commands.

use core::fmt::Write;

use crate::error::Error;
use crate::shell::dispatch::Args;
use crate::shell::{CommandHandler, CommandSpec};
use crate::storage::FileStore;

/// `ls` command: list stored files.
///
/// With an argument, only files whose paths start with it are listed.
#[derive(Debug, Default)]
pub struct LsCommand;

impl LsCommand {
    /// Registry metadata for this command.
    pub const fn spec() -> CommandSpec {
        CommandSpec::new("ls", "List stored files", "ls [prefix]")
    }
}

impl<C: FileStore> CommandHandler<C> for LsCommand {
    fn execute(
        &mut self,
        ctx: &mut C,
        args: &Args<'_>,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        let prefix = args.get(1).unwrap_or("");

        write!(out, "\r\n")?;
        write!(out, "Files:\r\n")?;
        write!(out, "----------------------------\r\n")?;

        let mut count = 0usize;
        ctx.for_each_entry(&mut |path, size| {
            if path.starts_with(prefix) {
                let _ = write!(out, "  [FILE] {} ({} bytes)\r\n", path, size);
                count += 1;
            }
        })?;

        write!(out, "----------------------------\r\n")?;
        write!(out, "Total: {} files\r\n", count)?;
        write!(out, "\r\n")?;
        Ok(())
    }
}

/// `cat` command: display a file's contents.
///
/// Reads through an owned bounded buffer; larger files are shown truncated
/// with a note.
pub struct CatCommand {
    buf: [u8; 1024],
}

impl CatCommand {
    /// Create the command with an empty read buffer.
    pub fn new() -> Self {
        Self { buf: [0; 1024] }
    }

    /// Registry metadata for this command.
    pub const fn spec() -> CommandSpec {
        CommandSpec::new("cat", "Display file contents", "cat <file>")
    }
}

impl Default for CatCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for CatCommand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CatCommand").finish_non_exhaustive()
    }
}

impl<C: FileStore> CommandHandler<C> for CatCommand {
    fn execute(
        &mut self,
        ctx: &mut C,
        args: &Args<'_>,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        let Some(path) = args.get(1) else {
            write!(out, "Usage: cat <file>\r\n")?;
            return Err(Error::InvalidArgument);
        };

        let size = match ctx.size(path) {
            Ok(size) => size,
            Err(err) => {
                write!(out, "Failed to open file: {}\r\n", path)?;
                return Err(err.into());
            }
        };

        let len = ctx.load(path, &mut self.buf)?;

        write!(out, "\r\n")?;
        write!(out, "--- {} ---\r\n", path)?;
        match core::str::from_utf8(&self.buf[..len]) {
            Ok(text) => write!(out, "{}", text)?,
            Err(_) => write!(out, "(binary data, {} bytes)\r\n", size)?,
        }
        if size > len {
            write!(out, "... ({} more bytes)\r\n", size - len)?;
        }
        write!(out, "\r\n--- End of file ---\r\n")?;
        write!(out, "\r\n")?;
        Ok(())
    }
}

/// `write` command: store one token of text as a file.
///
/// The shell's separator rules apply, so the text cannot contain spaces or
/// colons; the stored file ends with a newline.
#[derive(Debug, Default)]
pub struct WriteCommand;

impl WriteCommand {
    /// Registry metadata for this command.
    pub const fn spec() -> CommandSpec {
        CommandSpec::new("write", "Write text to file", "write <text> <file>")
    }
}

impl<C: FileStore> CommandHandler<C> for WriteCommand {
    fn execute(
        &mut self,
        ctx: &mut C,
        args: &Args<'_>,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        let (Some(text), Some(path)) = (args.get(1), args.get(2)) else {
            write!(out, "Usage: write <text> <file>\r\n")?;
            return Err(Error::InvalidArgument);
        };

        let mut contents: heapless::Vec<u8, 256> = heapless::Vec::new();
        contents
            .extend_from_slice(text.as_bytes())
            .map_err(|_| Error::OutOfMemory)?;
        contents.push(b'\n').map_err(|_| Error::OutOfMemory)?;

        match ctx.store(path, &contents) {
            Ok(()) => {
                write!(out, "Written to: {}\r\n", path)?;
                Ok(())
            }
            Err(err) => {
                write!(out, "Failed to open file: {}\r\n", path)?;
                Err(err.into())
            }
        }
    }
}

/// `rm` command: delete a file.
#[derive(Debug, Default)]
pub struct RmCommand;

impl RmCommand {
    /// Registry metadata for this command.
    pub const fn spec() -> CommandSpec {
        CommandSpec::new("rm", "Remove file", "rm <file>")
    }
}

impl<C: FileStore> CommandHandler<C> for RmCommand {
    fn execute(
        &mut self,
        ctx: &mut C,
        args: &Args<'_>,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        let Some(path) = args.get(1) else {
            write!(out, "Usage: rm <file>\r\n")?;
            return Err(Error::InvalidArgument);
        };

        match ctx.remove(path) {
            Ok(()) => {
                write!(out, "Deleted: {}\r\n", path)?;
                Ok(())
            }
            Err(err) => {
                write!(out, "Failed to delete: {}\r\n", path)?;
                Err(err.into())
            }
        }
    }
}

/// `df` command: show storage usage.
#[derive(Debug, Default)]
pub struct DfCommand;

impl DfCommand {
    /// Registry metadata for this command.
    pub const fn spec() -> CommandSpec {
        CommandSpec::new("df", "Show storage usage", "df")
    }
}

impl<C: FileStore> CommandHandler<C> for DfCommand {
    fn execute(
        &mut self,
        ctx: &mut C,
        _args: &Args<'_>,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        let usage = ctx.usage()?;
        let free = usage.total.saturating_sub(usage.used);
        let percent = if usage.total > 0 {
            usage.used * 100 / usage.total
        } else {
            0
        };

        write!(out, "\r\n")?;
        write!(out, "Storage Information:\r\n")?;
        write!(out, "  Total:     {} KB\r\n", usage.total / 1024)?;
        write!(out, "  Used:      {} KB\r\n", usage.used / 1024)?;
        write!(out, "  Free:      {} KB\r\n", free / 1024)?;
        write!(out, "  Usage:     {}%\r\n", percent)?;
        write!(out, "\r\n")?;
        Ok(())
    }
}
