//! # Built-in command sets
//!
//! Handler implementations for the stock device-control commands. Each set
//! mirrors one peripheral or subsystem and reaches hardware and storage
//! exclusively through the trait bounds it places on the dispatch context,
//! so the same command logic runs against any board definition.
//!
//! Handlers own only their local state (the GPIO set tracks levels for
//! `toggle`, the config set owns the live settings record); everything else
//! arrives through the context on each invocation.
//!
//! # Usage Examples
//!
//! ```rust,ignore
//! use coreshell::commands::{GpioCommands, HeapCommand, VersionCommand};
//! use coreshell::register_commands;
//! use coreshell::shell::CommandSpec;
//! use coreshell::shell::registry::Registry;
//!
//! let mut gpio = GpioCommands::new();
//! let mut heap = HeapCommand;
//! let mut version = VersionCommand;
//!
//! let mut registry: Registry<'_, Board> = Registry::new();
//! register_commands!(
//!     registry,
//!     (GpioCommands::spec(), &mut gpio),
//!     (HeapCommand::spec(), &mut heap),
//!     (VersionCommand::spec(), &mut version),
//! );
//! ```

/// GPIO pin control commands.
pub mod gpio;

/// ADC read commands.
pub mod adc;

/// PWM duty-cycle and frequency commands.
pub mod pwm;

/// I2C bus scan and read commands.
pub mod i2c;

/// System status and restart commands.
pub mod system;

/// Configuration management commands.
pub mod config;

/// File storage commands.
pub mod fs;

pub use adc::AdcCommands;
pub use config::ConfigCommands;
pub use fs::{CatCommand, DfCommand, LsCommand, RmCommand, WriteCommand};
pub use gpio::GpioCommands;
pub use i2c::I2cCommands;
pub use pwm::PwmCommands;
pub use system::{HeapCommand, RestartCommand, VersionCommand};
