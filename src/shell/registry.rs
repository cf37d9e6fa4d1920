//! Fixed-capacity command registry.
//!
//! The registry maps command names to handlers through a linear table of at
//! most [`MAX_COMMANDS`] entries. Entries are only ever appended; commands
//! live for the registry's entire lifetime and are listed in registration
//! order.

use heapless::Vec;

use super::{CommandHandler, CommandSpec, MAX_COMMANDS};
use crate::error::Error;

pub(crate) struct Entry<'a, C> {
    pub(crate) spec: CommandSpec,
    pub(crate) handler: &'a mut dyn CommandHandler<C>,
}

/// Command table with capacity-checked registration and linear lookup.
///
/// `'a` bounds the handler borrows; `C` is the context type passed to every
/// handler on dispatch. Registration is expected to happen once at startup,
/// after which the table is read-mostly.
///
/// # Examples
///
/// ```rust
/// use coreshell::error::Error;
/// use coreshell::shell::CommandSpec;
/// use coreshell::shell::dispatch::Args;
/// use coreshell::shell::registry::Registry;
///
/// let mut noop = |_: &mut (), _: &Args<'_>, _: &mut dyn core::fmt::Write|
///  -> Result<(), Error> { Ok(()) };
///
/// let mut registry: Registry<'_, ()> = Registry::new();
/// let spec = CommandSpec::new("noop", "Do nothing", "noop");
/// registry.register(spec, &mut noop).unwrap();
///
/// assert!(registry.find("noop").is_some());
/// assert_eq!(registry.len(), 1);
/// ```
pub struct Registry<'a, C> {
    entries: Vec<Entry<'a, C>, MAX_COMMANDS>,
}

impl<'a, C> Registry<'a, C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a command.
    ///
    /// The spec is copied into the table; the handler is borrowed for the
    /// registry's lifetime.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Command registered
    /// * `Err(Error::Full)` - Table already holds [`MAX_COMMANDS`] entries
    /// * `Err(Error::Duplicate)` - A command with the same name exists
    pub fn register(
        &mut self,
        spec: CommandSpec,
        handler: &'a mut dyn CommandHandler<C>,
    ) -> Result<(), Error> {
        if self.entries.is_full() {
            return Err(Error::Full);
        }

        if self.find(spec.name).is_some() {
            return Err(Error::Duplicate);
        }

        // Capacity was checked above, so the push cannot fail.
        let _ = self.entries.push(Entry { spec, handler });
        Ok(())
    }

    /// Find a command's metadata by exact name.
    pub fn find(&self, name: &str) -> Option<&CommandSpec> {
        self.entries
            .iter()
            .find(|entry| entry.spec.name == name)
            .map(|entry| &entry.spec)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no commands.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over command metadata in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.entries.iter().map(|entry| &entry.spec)
    }

    pub(crate) fn entry_mut(&mut self, name: &str) -> Option<&mut Entry<'a, C>> {
        self.entries
            .iter_mut()
            .find(|entry| entry.spec.name == name)
    }
}

impl<'a, C> Default for Registry<'a, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C> core::fmt::Debug for Registry<'a, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("commands", &self.entries.len())
            .finish()
    }
}
