//! Configuration management commands.

use core::fmt::Write;

use crate::config::loader::{self, ConfigLoader, CONFIG_FILE_PATH};
use crate::config::{ConfigMode, Settings};
use crate::error::Error;
use crate::shell::dispatch::Args;
use crate::shell::{CommandHandler, CommandSpec};
use crate::storage::FileStore;

/// `config:ACTION` command set.
///
/// Actions: `show`, `load <file>`, `save <file>`, `reset` and
/// `create-default`. The set owns the live settings record and the loader's
/// read buffer; loading installs a fresh record in place of the previous
/// one.
#[derive(Debug)]
pub struct ConfigCommands {
    settings: Settings,
    loader: ConfigLoader,
}

impl ConfigCommands {
    /// Create the command set around an already-assembled record.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            loader: ConfigLoader::new(),
        }
    }

    /// Registry metadata for this command set.
    pub const fn spec() -> CommandSpec {
        CommandSpec::new(
            "config",
            "Configuration management (config:ACTION)",
            "config:show | config:load <file> | config:save <file>",
        )
    }

    /// The live settings record.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn usage(out: &mut dyn Write) -> Result<(), Error> {
        write!(out, "\r\n")?;
        write!(out, "Usage:\r\n")?;
        write!(out, "  config:show                   - Show current config\r\n")?;
        write!(out, "  config:load <file>            - Load config from file\r\n")?;
        write!(out, "  config:save <file>            - Save config to file\r\n")?;
        write!(out, "  config:reset                  - Reset to defaults\r\n")?;
        write!(
            out,
            "  config:create-default         - Create default config file\r\n"
        )?;
        write!(out, "\r\n")?;
        Ok(())
    }

    fn show(&self, out: &mut dyn Write) -> Result<(), Error> {
        let settings = &self.settings;

        write!(out, "\r\n")?;
        write!(out, "Current Configuration:\r\n")?;
        write!(out, "=====================\r\n")?;
        write!(out, "  Version:     {}\r\n", settings.version)?;
        write!(out, "  Device:      {}\r\n", settings.device_name)?;
        write!(
            out,
            "  Mode:        {}\r\n",
            match settings.config_mode {
                ConfigMode::AutoInit => "AUTO_INIT",
                ConfigMode::Minimal => "MINIMAL",
            }
        )?;
        write!(
            out,
            "  Console:     UART{} @ {} baud\r\n",
            settings.console.num, settings.console.baudrate
        )?;
        write!(out, "\r\n")?;
        write!(out, "Features:\r\n")?;
        write!(
            out,
            "  Shell:       {}\r\n",
            if settings.features.shell { "ON" } else { "OFF" }
        )?;
        write!(
            out,
            "  Logging:     {}\r\n",
            if settings.features.logging { "ON" } else { "OFF" }
        )?;
        write!(out, "\r\n")?;

        if settings.auto_init.enabled {
            write!(out, "Auto-Init:\r\n")?;
            write!(out, "  Enabled:     YES\r\n")?;
            write!(
                out,
                "  GPIO Pins:   {} configured\r\n",
                settings.auto_init.gpio.len()
            )?;
            for pin in &settings.auto_init.gpio {
                write!(
                    out,
                    "    - GPIO{}: {} ({})\r\n",
                    pin.pin,
                    pin.name,
                    pin.mode.as_str()
                )?;
            }
        } else {
            write!(out, "Auto-Init:   DISABLED\r\n")?;
        }

        write!(out, "\r\n")?;
        Ok(())
    }
}

impl<C: FileStore> CommandHandler<C> for ConfigCommands {
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
            Some("show") => self.show(out),
            Some("load") => {
                let Some(path) = args.get(2) else {
                    write!(out, "Missing filename\r\n")?;
                    return Err(Error::InvalidArgument);
                };
                write!(out, "Loading config from: {}\r\n", path)?;
                self.settings = self.loader.load(ctx, path);
                write!(out, "Config loaded successfully\r\n")?;
                self.show(out)
            }
            Some("save") => {
                let Some(path) = args.get(2) else {
                    write!(out, "Missing filename\r\n")?;
                    return Err(Error::InvalidArgument);
                };
                write!(out, "Saving config to: {}\r\n", path)?;
                match loader::save(ctx, path, &self.settings) {
                    Ok(()) => {
                        write!(out, "Config saved successfully\r\n")?;
                        Ok(())
                    }
                    Err(err) => {
                        write!(out, "Failed to save config\r\n")?;
                        Err(err)
                    }
                }
            }
            Some("reset") => {
                write!(out, "Resetting to default configuration...\r\n")?;
                self.settings = Settings::default();
                write!(out, "Config reset to defaults\r\n")?;
                self.show(out)
            }
            Some("create-default") => {
                write!(out, "Creating default config file...\r\n")?;
                self.settings = Settings::default();
                match loader::save(ctx, CONFIG_FILE_PATH, &self.settings) {
                    Ok(()) => {
                        write!(out, "Default config created at {}\r\n", CONFIG_FILE_PATH)?;
                        Ok(())
                    }
                    Err(err) => {
                        write!(out, "Failed to create config file\r\n")?;
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
