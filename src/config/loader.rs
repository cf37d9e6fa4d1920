//! Configuration assembler: load, save and defaults.
//!
//! Loading is defaults-then-override: the record starts as the hard-coded
//! default and recognized keys from the file overwrite individual fields.
//! Any failure along the way (missing file, bad size, malformed JSON) falls
//! back to the defaults, so a caller always receives a usable record.
//!
//! Saving is the inverse projection as a fixed textual template rather than
//! a generic serializer; keys the assembler does not recognize on load are
//! never persisted, so round-trips are only guaranteed for recognized keys.

use core::fmt::Write;

use heapless::String;

use super::json::{self, TokenKind};
use super::{ConfigMode, Settings};
use crate::error::Error;
use crate::storage::FileStore;

/// Largest configuration file the assembler will read, in bytes.
pub const CONFIG_FILE_MAX: usize = 8192;

/// Token ceiling for one configuration document.
pub const CONFIG_TOKEN_CAPACITY: usize = 128;

/// Default configuration file path.
pub const CONFIG_FILE_PATH: &str = "config/system.json";

// Projection looks at the leading tokens only; a valid config document puts
// its recognized keys well within this window.
const PROJECTION_SCAN_LIMIT: usize = 50;

/// Loads settings records from a file store.
///
/// The loader owns the fixed read buffer, so callers decide where the 8 KiB
/// lives (stack, static, or inside a command handler).
///
/// # Examples
///
/// ```rust
/// use coreshell::config::loader::ConfigLoader;
/// use coreshell::storage::RamFileStore;
///
/// let mut store: RamFileStore = RamFileStore::new();
/// let mut loader = ConfigLoader::new();
///
/// // No file stored: the hard-coded defaults come back.
/// let settings = loader.load(&mut store, "config/system.json");
/// assert_eq!(settings.device_name.as_str(), "CorESP32");
/// ```
pub struct ConfigLoader {
    buf: [u8; CONFIG_FILE_MAX],
}

impl ConfigLoader {
    /// Create a loader with an empty read buffer.
    pub fn new() -> Self {
        Self {
            buf: [0; CONFIG_FILE_MAX],
        }
    }

    /// Load a settings record from `path`.
    ///
    /// Never fails: a missing or unreadable file, a size of zero or above
    /// [`CONFIG_FILE_MAX`], non-UTF-8 content, malformed JSON or a token
    /// count above [`CONFIG_TOKEN_CAPACITY`] all yield the default record.
    /// On success the defaults are populated first and recognized top-level
    /// keys override them:
    ///
    /// * `device_name` - copied, truncated to the field's capacity
    /// * `config_mode` - `"auto_init"` selects auto-init, anything else
    ///   leaves the minimal mode
    ///
    /// Unrecognized keys are silently ignored.
    pub fn load<S: FileStore>(&mut self, store: &mut S, path: &str) -> Settings {
        let Ok(size) = store.size(path) else {
            return Settings::default();
        };
        if size == 0 || size > CONFIG_FILE_MAX {
            return Settings::default();
        }

        let Ok(len) = store.load(path, &mut self.buf) else {
            return Settings::default();
        };
        let Ok(text) = core::str::from_utf8(&self.buf[..len]) else {
            return Settings::default();
        };

        let Ok(tokens) = json::tokenize::<CONFIG_TOKEN_CAPACITY>(text) else {
            return Settings::default();
        };

        let mut settings = Settings::default();

        let limit = tokens.len().min(PROJECTION_SCAN_LIMIT);
        for i in 1..limit {
            let key = &tokens[i];
            if key.kind != TokenKind::String || key.parent != Some(0) {
                continue;
            }
            let Some(value) = tokens.get(i + 1) else {
                break;
            };

            match key.text(text) {
                "device_name" => {
                    settings.device_name = copy_truncated(value.text(text));
                }
                "config_mode" => {
                    if value.text(text) == "auto_init" {
                        settings.config_mode = ConfigMode::AutoInit;
                    }
                }
                _ => {}
            }
        }

        settings
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConfigLoader").finish_non_exhaustive()
    }
}

/// Persist a settings record to `path`.
///
/// Emits the fixed document layout: `version`, `device_name`,
/// `config_mode`, a nested `uart.console` object with `num` and `baudrate`,
/// and a `features` object with `shell` and `logging`. Auto-init tables are
/// not persisted.
///
/// # Returns
///
/// * `Ok(())` - Document written
/// * `Err(error)` - The store rejected the write
pub fn save<S: FileStore>(store: &mut S, path: &str, settings: &Settings) -> Result<(), Error> {
    let mut doc: String<512> = String::new();

    writeln!(doc, "{{")?;
    writeln!(doc, "  \"version\": \"{}\",", settings.version)?;
    writeln!(doc, "  \"device_name\": \"{}\",", settings.device_name)?;
    writeln!(doc, "  \"config_mode\": \"{}\",", settings.config_mode.as_str())?;
    writeln!(doc, "  \"uart\": {{")?;
    writeln!(doc, "    \"console\": {{")?;
    writeln!(doc, "      \"num\": {},", settings.console.num)?;
    writeln!(doc, "      \"baudrate\": {}", settings.console.baudrate)?;
    writeln!(doc, "    }}")?;
    writeln!(doc, "  }},")?;
    writeln!(doc, "  \"features\": {{")?;
    writeln!(doc, "    \"shell\": {},", settings.features.shell)?;
    writeln!(doc, "    \"logging\": {}", settings.features.logging)?;
    writeln!(doc, "  }}")?;
    writeln!(doc, "}}")?;

    store.store(path, doc.as_bytes())?;
    Ok(())
}

fn copy_truncated<const N: usize>(src: &str) -> String<N> {
    let mut out = String::new();
    for c in src.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
