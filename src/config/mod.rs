//! # Device configuration
//!
//! This module holds the fixed-layout settings record the rest of the
//! firmware consumes, the minimal JSON tokenizer that scans configuration
//! files, and the assembler that projects recognized fields onto the record.
//!
//! The guiding rule is that configuration can never leave the system
//! unusable: every field of [`Settings`] has a valid hard-coded default,
//! and every failure while loading (missing file, oversized file, malformed
//! JSON) falls back to the default record rather than propagating.
//!
//! # Usage Examples
//!
//! ```rust
//! use coreshell::config::{ConfigMode, Settings};
//! use coreshell::config::loader::ConfigLoader;
//! use coreshell::storage::{FileStore, RamFileStore};
//!
//! let mut store: RamFileStore = RamFileStore::new();
//! store
//!     .store(
//!         "config/system.json",
//!         b"{\"device_name\":\"Probe1\",\"config_mode\":\"auto_init\"}",
//!     )
//!     .unwrap();
//!
//! let mut loader = ConfigLoader::new();
//! let settings = loader.load(&mut store, "config/system.json");
//!
//! assert_eq!(settings.device_name.as_str(), "Probe1");
//! assert_eq!(settings.config_mode, ConfigMode::AutoInit);
//! // Unrecognized and absent fields keep their defaults.
//! assert!(settings.features.shell);
//! ```

use heapless::{String, Vec};

use crate::hardware::PinMode;

/// Minimal single-pass JSON tokenizer.
pub mod json;

/// Configuration assembler: load, save and defaults.
pub mod loader;

/// Maximum pins in the auto-init GPIO table.
pub const MAX_AUTO_INIT_PINS: usize = 4;

/// How much hardware setup the firmware performs at boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigMode {
    /// Peripherals are brought up interactively through commands only.
    Minimal,
    /// Peripheral setup is driven by the settings record at boot.
    AutoInit,
}

impl ConfigMode {
    /// Name used in configuration files and status output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigMode::Minimal => "minimal",
            ConfigMode::AutoInit => "auto_init",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigMode {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_str());
    }
}

/// Console UART parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSettings {
    /// UART peripheral number.
    pub num: u8,
    /// Baud rate in bits per second.
    pub baudrate: u32,
}

/// Feature switches for optional firmware services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Whether the interactive shell runs.
    pub shell: bool,
    /// Whether log output is emitted.
    pub logging: bool,
}

/// One GPIO pin configured during auto-init.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpioPinSetup {
    /// Pin number.
    pub pin: u8,
    /// Direction and pull configuration.
    pub mode: PinMode,
    /// Initial level driven when the mode is an output.
    pub initial: bool,
    /// Human-readable pin label.
    pub name: String<32>,
}

/// SPI bus parameters for auto-init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiSetup {
    /// Whether the bus is brought up at boot.
    pub enabled: bool,
    /// Clock pin.
    pub clk_pin: u8,
    /// MOSI pin.
    pub mosi_pin: u8,
    /// MISO pin.
    pub miso_pin: u8,
    /// Chip-select pin.
    pub cs_pin: u8,
    /// Bus speed in Hz.
    pub speed_hz: u32,
}

/// I2C bus parameters for auto-init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cSetup {
    /// Whether the bus is brought up at boot.
    pub enabled: bool,
    /// Clock pin.
    pub scl_pin: u8,
    /// Data pin.
    pub sda_pin: u8,
    /// Bus frequency in Hz.
    pub freq_hz: u32,
}

/// Peripheral setup tables applied when the mode is
/// [`ConfigMode::AutoInit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoInitSettings {
    /// Master switch for the tables below.
    pub enabled: bool,
    /// Pins configured at boot.
    pub gpio: Vec<GpioPinSetup, MAX_AUTO_INIT_PINS>,
    /// SPI bus setup.
    pub spi: SpiSetup,
    /// I2C bus setup.
    pub i2c: I2cSetup,
}

/// The fixed-layout settings record.
///
/// Exactly one instance is live at a time, owned by the caller of the
/// configuration assembler; installing a freshly loaded record drops the
/// previous one. Every field holds a valid default before any override is
/// applied, so the record is fully populated even under partial or
/// malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Configuration schema version.
    pub version: String<16>,
    /// Device name shown in prompts and status output.
    pub device_name: String<64>,
    /// Boot-time hardware setup mode.
    pub config_mode: ConfigMode,
    /// Console UART parameters.
    pub console: ConsoleSettings,
    /// Auto-init peripheral tables.
    pub auto_init: AutoInitSettings,
    /// Optional service switches.
    pub features: FeatureFlags,
    /// Whether a load operation produced this record.
    pub loaded: bool,
}

impl Default for Settings {
    /// The hard-coded default record.
    fn default() -> Self {
        Self {
            version: String::try_from("7.0").unwrap_or_default(),
            device_name: String::try_from("CorESP32").unwrap_or_default(),
            config_mode: ConfigMode::Minimal,
            console: ConsoleSettings {
                num: 0,
                baudrate: 115_200,
            },
            auto_init: AutoInitSettings {
                enabled: false,
                gpio: Vec::new(),
                spi: SpiSetup {
                    enabled: false,
                    clk_pin: 0,
                    mosi_pin: 0,
                    miso_pin: 0,
                    cs_pin: 0,
                    speed_hz: 0,
                },
                i2c: I2cSetup {
                    enabled: false,
                    scl_pin: 0,
                    sda_pin: 0,
                    freq_hz: 0,
                },
            },
            features: FeatureFlags {
                shell: true,
                logging: true,
            },
            loaded: true,
        }
    }
}
