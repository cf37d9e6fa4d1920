//! # Command shell for embedded systems
//!
//! This module provides a command-line interface built from three parts:
//! a fixed-capacity command registry, a dispatcher that parses one raw input
//! line into a conventional `argv` vector and routes it to a handler, and a
//! byte-fed console line editor that drives the dispatcher from terminal
//! input.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Console      │───▶│   Dispatcher    │───▶│    Registry     │
//! │  (line editing, │    │  (name split,   │    │  (fixed table,  │
//! │   echo, prompt) │    │   argv build)   │    │   linear find)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │    Handler      │
//!                        │ (trait object,  │
//!                        │  context-bound) │
//!                        └─────────────────┘
//! ```
//!
//! Command lines use spaces and colons interchangeably as separators, so
//! `gpio:8:mode:output` and `gpio 8 mode output` dispatch identically. The
//! flip side is deliberate: argument values cannot contain either separator.
//!
//! There is no process-wide state. The registry is owned by the caller and
//! handlers receive an explicit context object on every invocation, so the
//! same command set can run against different boards in one process.
//!
//! # Usage Examples
//!
//! ```rust
//! use core::fmt::Write;
//! use coreshell::error::Error;
//! use coreshell::shell::CommandSpec;
//! use coreshell::shell::dispatch::{Args, dispatch};
//! use coreshell::shell::registry::Registry;
//!
//! struct Ctx {
//!     pings: u32,
//! }
//!
//! let mut ping = |ctx: &mut Ctx, _args: &Args<'_>, out: &mut dyn Write| -> Result<(), Error> {
//!     ctx.pings += 1;
//!     writeln!(out, "pong")?;
//!     Ok(())
//! };
//!
//! let mut registry: Registry<'_, Ctx> = Registry::new();
//! registry
//!     .register(CommandSpec::new("ping", "Reply with pong", "ping"), &mut ping)
//!     .unwrap();
//!
//! let mut ctx = Ctx { pings: 0 };
//! let mut out = String::new();
//! dispatch(&mut registry, &mut ctx, "ping", &mut out).unwrap();
//! assert_eq!(ctx.pings, 1);
//! ```

use core::fmt;

use crate::error::Error;

/// Command dispatcher: line parsing and handler invocation.
pub mod dispatch;

/// Fixed-capacity command registry.
pub mod registry;

/// Byte-fed console line editor.
pub mod console;

/// Maximum number of registered commands.
pub const MAX_COMMANDS: usize = 32;

/// Maximum number of argument tokens per command line, including the
/// command name itself at index 0. Tokens beyond the limit are dropped and
/// flagged on [`dispatch::Args`].
pub const MAX_ARGS: usize = 16;

/// Maximum command name length in bytes. Longer names are truncated before
/// lookup.
pub const MAX_COMMAND_NAME: usize = 64;

/// Maximum console input line length in bytes.
pub const MAX_LINE: usize = 256;

/// Command metadata: name, description and usage text.
///
/// The registry copies the spec by value on registration, so the caller's
/// storage need not outlive the call. All three strings are shown by the
/// built-in `help` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Command name as typed by the user. Case-sensitive, matched exactly.
    pub name: &'static str,
    /// One-line description shown in the command listing.
    pub description: &'static str,
    /// Usage text shown by `help <command>`.
    pub usage: &'static str,
}

impl CommandSpec {
    /// Create a command spec.
    pub const fn new(name: &'static str, description: &'static str, usage: &'static str) -> Self {
        Self {
            name,
            description,
            usage,
        }
    }
}

/// Behavior of one command.
///
/// Handlers receive the explicitly-owned context object `C`, the parsed
/// argument vector (with `argv[0]` being the command name) and an output
/// sink for user-visible text. The dispatcher passes the returned result
/// through unchanged.
///
/// The trait is implemented for any `FnMut` with the same shape, so ad-hoc
/// commands can be registered as closures; stateful commands implement the
/// trait on their own types.
pub trait CommandHandler<C> {
    /// Execute the command.
    fn execute(
        &mut self,
        ctx: &mut C,
        args: &dispatch::Args<'_>,
        out: &mut dyn fmt::Write,
    ) -> Result<(), Error>;
}

impl<C, F> CommandHandler<C> for F
where
    F: FnMut(&mut C, &dispatch::Args<'_>, &mut dyn fmt::Write) -> Result<(), Error>,
{
    fn execute(
        &mut self,
        ctx: &mut C,
        args: &dispatch::Args<'_>,
        out: &mut dyn fmt::Write,
    ) -> Result<(), Error> {
        self(ctx, args, out)
    }
}

/// Register several commands at once.
///
/// # Examples
///
/// ```rust,ignore
/// register_commands!(
///     registry,
///     (CommandSpec::new("gpio", "GPIO control (gpio:PIN:ACTION)", GPIO_USAGE), &mut gpio),
///     (CommandSpec::new("heap", "Show memory status", "heap"), &mut heap),
/// );
/// ```
#[macro_export]
macro_rules! register_commands {
    ($registry:expr, $(($spec:expr, $handler:expr)),+ $(,)?) => {
        $(
            $registry.register($spec, $handler).expect("Failed to register command");
        )+
    };
}
