//! # coreshell - Embedded Device-Control Shell
//!
//! A lightweight command shell and JSON-backed configuration layer for
//! microcontroller firmware. This library is designed for embedded systems
//! and supports `no_std` environments.
//!
//! ## Features
//!
//! ### Command Shell
//! - **Command Registry**: Fixed-capacity command table with duplicate
//!   detection and insertion-order listing
//! - **Dispatcher**: Colon/space-delimited command lines parsed into a
//!   conventional `argv` vector and routed to trait-based handlers
//! - **Console**: Byte-fed line editor with echo, backspace handling and
//!   prompt management
//!
//! ### Configuration
//! - Minimal single-pass JSON tokenizer producing a flat token stream with
//!   no tree allocation
//! - Defaults-then-override settings assembly that never leaves the system
//!   without a usable configuration record
//! - Fixed-template persistence of the settings record
//!
//! ### Device Control
//! - Peripheral traits (GPIO, ADC, PWM, I2C, system) decoupling command
//!   handlers from vendor driver APIs
//! - Built-in command sets for pin control, analog reads, duty-cycle
//!   programming, bus scanning, storage and configuration management
//! - Auto-init mode driving peripheral setup from the settings record
//!
//! ## Usage
//!
//! ```rust
//! use core::fmt::Write;
//! use coreshell::shell::CommandSpec;
//! use coreshell::shell::dispatch::{Args, dispatch};
//! use coreshell::shell::registry::Registry;
//!
//! // The context type carries whatever your handlers need. Commands that
//! // touch hardware bound it by the traits in `coreshell::hardware`.
//! struct Board;
//!
//! let mut blink = |_ctx: &mut Board, args: &Args<'_>, out: &mut dyn core::fmt::Write|
//!  -> Result<(), coreshell::error::Error> {
//!     writeln!(out, "blinking {} times", args.argc() - 1)?;
//!     Ok(())
//! };
//!
//! let mut registry: Registry<'_, Board> = Registry::new();
//! registry
//!     .register(
//!         CommandSpec::new("blink", "Blink the status LED", "blink <count>"),
//!         &mut blink,
//!     )
//!     .unwrap();
//!
//! let mut board = Board;
//! let mut out = String::new();
//! dispatch(&mut registry, &mut board, "blink:3", &mut out).unwrap();
//! assert_eq!(out, "blinking 1 times\n");
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices and host-side test harnesses
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support, including the host-directory
//!   file store (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "std")]
extern crate std;

/// Crate-wide error type shared by the shell and configuration layers.
pub mod error;

/// Command shell: registry, dispatcher and console line editor.
///
/// Contains the command table, the line parser that turns raw input into an
/// argument vector, and the byte-fed console that drives both.
pub mod shell;

/// Configuration layer: JSON tokenizer, settings record and assembler.
///
/// Parses a small JSON document into a flat token stream and projects
/// recognized fields onto a fixed-layout settings record with
/// defaults-then-override semantics.
pub mod config;

/// Storage abstraction used by the configuration assembler and file commands.
///
/// Provides a path-oriented `FileStore` trait together with an in-memory
/// backend and, with the `std` feature, a host-directory backend.
pub mod storage;

/// Peripheral traits decoupling command handlers from vendor drivers.
pub mod hardware;

/// Built-in command sets for device control and system management.
pub mod commands;
