//! Command dispatcher: line parsing and handler invocation.
//!
//! One raw input line is split into a command name and an argument vector,
//! the name is resolved through the registry, and the matching handler is
//! invoked with a conventional `(argc, argv)` shape where `argv[0]` is the
//! command name. Spaces and colons are interchangeable separators.

use core::fmt;

use heapless::Vec;

use super::registry::Registry;
use super::{MAX_ARGS, MAX_COMMAND_NAME};
use crate::error::Error;

/// Parsed argument vector for one command line.
///
/// Holds at most [`MAX_ARGS`] tokens including the command name at index 0.
/// When the input carries more tokens than fit, the excess is dropped and
/// [`truncated`](Self::truncated) reports the loss.
///
/// # Examples
///
/// ```rust
/// use coreshell::shell::dispatch::Args;
///
/// let args = Args::parse("gpio:8:mode:output");
/// assert_eq!(args.argc(), 4);
/// assert_eq!(&args[..], ["gpio", "8", "mode", "output"]);
/// assert!(!args.truncated());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Args<'a> {
    argv: Vec<&'a str, MAX_ARGS>,
    truncated: bool,
}

impl<'a> Args<'a> {
    /// Parse a command line into an argument vector.
    ///
    /// The command name is everything before the first space or colon,
    /// truncated to [`MAX_COMMAND_NAME`] bytes if overlong. The remainder is
    /// tokenized on spaces and colons with empty tokens skipped, so
    /// consecutive separators collapse. A line without separators is a bare
    /// command name.
    pub fn parse(line: &'a str) -> Self {
        let (name, remainder) = split_name(line);

        let mut argv: Vec<&'a str, MAX_ARGS> = Vec::new();
        let mut truncated = false;

        // argv[0] is always the command name, even when empty.
        let _ = argv.push(name);

        for token in remainder.split([' ', ':']).filter(|t| !t.is_empty()) {
            if argv.push(token).is_err() {
                truncated = true;
                break;
            }
        }

        Self { argv, truncated }
    }

    /// Number of tokens, including the command name.
    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    /// The command name (`argv[0]`).
    pub fn name(&self) -> &'a str {
        self.argv.first().copied().unwrap_or("")
    }

    /// Token at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.argv.get(index).copied()
    }

    /// Whether tokens beyond [`MAX_ARGS`] were dropped.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

impl<'a> core::ops::Deref for Args<'a> {
    type Target = [&'a str];

    fn deref(&self) -> &Self::Target {
        &self.argv
    }
}

/// Split a line into the command name and the unparsed remainder.
///
/// The name ends at the first space or colon; without a separator the whole
/// line is the name and the remainder is empty. Overlong names are truncated
/// to [`MAX_COMMAND_NAME`] bytes on a character boundary.
fn split_name(line: &str) -> (&str, &str) {
    let (name, remainder) = match line.find([' ', ':']) {
        Some(pos) => (&line[..pos], &line[pos + 1..]),
        None => (line, ""),
    };
    (truncate_to_boundary(name, MAX_COMMAND_NAME), remainder)
}

fn truncate_to_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Dispatch one command line.
///
/// Parses `line`, resolves the command name through `registry` and invokes
/// the handler with `ctx` and `out`. The handler's result is returned
/// unchanged. An unknown name prints a diagnostic on `out` and returns
/// [`Error::NotFound`] without invoking anything.
///
/// `help` is served by the dispatcher itself when no registered command
/// claims the name: bare `help` lists every registered command in
/// registration order, `help <command>` shows one command's description and
/// usage.
///
/// # Examples
///
/// ```rust
/// use core::fmt::Write;
/// use coreshell::error::Error;
/// use coreshell::shell::CommandSpec;
/// use coreshell::shell::dispatch::{Args, dispatch};
/// use coreshell::shell::registry::Registry;
///
/// let mut echo = |_: &mut (), args: &Args<'_>, out: &mut dyn Write|
///  -> Result<(), Error> {
///     writeln!(out, "{}", args.get(1).unwrap_or(""))?;
///     Ok(())
/// };
///
/// let mut registry: Registry<'_, ()> = Registry::new();
/// registry
///     .register(CommandSpec::new("echo", "Echo one argument", "echo <text>"), &mut echo)
///     .unwrap();
///
/// let mut out = String::new();
/// dispatch(&mut registry, &mut (), "echo hello", &mut out).unwrap();
/// assert_eq!(out, "hello\n");
///
/// let err = dispatch(&mut registry, &mut (), "missing", &mut out);
/// assert_eq!(err, Err(Error::NotFound));
/// ```
pub fn dispatch<C>(
    registry: &mut Registry<'_, C>,
    ctx: &mut C,
    line: &str,
    out: &mut dyn fmt::Write,
) -> Result<(), Error> {
    let args = Args::parse(line);
    let name = args.name();

    if let Some(entry) = registry.entry_mut(name) {
        return entry.handler.execute(ctx, &args, out);
    }

    if name == "help" {
        return run_help(registry, &args, out);
    }

    write!(out, "Command not found: {}\r\n", name)?;
    write!(out, "Type 'help' for available commands.\r\n")?;
    Err(Error::NotFound)
}

fn run_help<C>(
    registry: &Registry<'_, C>,
    args: &Args<'_>,
    out: &mut dyn fmt::Write,
) -> Result<(), Error> {
    if let Some(name) = args.get(1) {
        let Some(spec) = registry.find(name) else {
            write!(out, "Command not found: {}\r\n", name)?;
            return Err(Error::NotFound);
        };

        write!(out, "\r\n")?;
        write!(out, "Command: {}\r\n", spec.name)?;
        write!(out, "Description: {}\r\n", spec.description)?;
        write!(out, "Usage: {}\r\n", spec.usage)?;
        write!(out, "\r\n")?;
        return Ok(());
    }

    write!(out, "\r\n")?;
    write!(out, "Available Commands ({}):\r\n", registry.len())?;
    write!(out, "------------------------\r\n")?;
    for spec in registry.iter() {
        write!(out, "  {:<15} - {}\r\n", spec.name, spec.description)?;
    }
    write!(out, "\r\n")?;
    write!(out, "Type 'help <command>' for detailed help.\r\n")?;
    write!(out, "\r\n")?;
    Ok(())
}
