//! Byte-fed console line editor.
//!
//! The console accumulates terminal input one byte at a time, handles echo
//! and backspace editing, and hands each completed line to the dispatcher.
//! It never reads from hardware itself: the surrounding firmware owns the
//! blocking UART/stdin loop and feeds whatever bytes arrive.

use core::fmt;

use heapless::String;

use super::dispatch::dispatch;
use super::registry::Registry;
use super::MAX_LINE;
use crate::error::Error;

// ASCII control bytes handled by the editor.
const ASCII_BACKSPACE: u8 = 0x08;
const ASCII_LF: u8 = 0x0A;
const ASCII_CR: u8 = 0x0D;
const ASCII_DEL: u8 = 0x7F;

/// Terminal line editor writing echo and command output to `W`.
///
/// The output sink is any `core::fmt::Write` implementation: a UART writer
/// on hardware, a `String` in tests.
///
/// # Examples
///
/// ```rust
/// use coreshell::shell::console::Console;
/// use coreshell::shell::registry::Registry;
///
/// let mut registry: Registry<'_, ()> = Registry::new();
/// let mut console = Console::new(String::new(), "CorESP32 > ");
///
/// console.start();
/// console.feed(b"help\r", &mut registry, &mut ()).unwrap();
///
/// let output = console.output();
/// assert!(output.contains("Available Commands"));
/// ```
pub struct Console<W: fmt::Write> {
    out: W,
    line: String<MAX_LINE>,
    prompt: String<32>,
    echo: bool,
}

impl<W: fmt::Write> Console<W> {
    /// Create a console writing to `out` with the given prompt.
    ///
    /// Prompts longer than 32 bytes are truncated. Echo starts enabled.
    pub fn new(out: W, prompt: &str) -> Self {
        let mut stored = String::new();
        for c in prompt.chars() {
            if stored.push(c).is_err() {
                break;
            }
        }
        Self {
            out,
            line: String::new(),
            prompt: stored,
            echo: true,
        }
    }

    /// Enable or disable input echo.
    ///
    /// Echo is for interactive terminals; automated feeds usually disable it.
    pub fn set_echo(&mut self, enabled: bool) {
        self.echo = enabled;
    }

    /// Print the initial prompt.
    ///
    /// Call once after registration is done and the terminal is ready; each
    /// dispatched line re-prompts automatically.
    pub fn start(&mut self) {
        let _ = write!(self.out, "\r\n{}", self.prompt);
    }

    /// Process a chunk of input bytes.
    ///
    /// Carriage return or line feed completes the current line: the line is
    /// dispatched if it contains anything but whitespace, a failed dispatch
    /// prints `Error: <message>`, and the prompt is printed again. Backspace
    /// and DEL erase the last byte. Printable ASCII is appended to the line
    /// buffer; other control bytes are ignored.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - All bytes processed
    /// * `Err(Error::BufferOverflow)` - The line buffer filled up; the
    ///   overflowing byte and the rest of the chunk are dropped
    pub fn feed<C>(
        &mut self,
        data: &[u8],
        registry: &mut Registry<'_, C>,
        ctx: &mut C,
    ) -> Result<(), Error> {
        for &byte in data {
            match byte {
                ASCII_CR | ASCII_LF => {
                    if self.echo {
                        let _ = write!(self.out, "\r\n");
                    }

                    if !self.line.trim().is_empty() {
                        let result = dispatch(registry, ctx, self.line.as_str(), &mut self.out);
                        if let Err(err) = result {
                            let _ = write!(self.out, "Error: {}\r\n", err);
                        }
                    }

                    self.line.clear();
                    let _ = write!(self.out, "{}", self.prompt);
                }
                ASCII_BACKSPACE | ASCII_DEL => {
                    if self.line.pop().is_some() && self.echo {
                        let _ = write!(self.out, "\x08 \x08");
                    }
                }
                0x20..=0x7E => {
                    let c = byte as char;
                    if self.line.push(c).is_err() {
                        return Err(Error::BufferOverflow);
                    }
                    if self.echo {
                        let _ = write!(self.out, "{}", c);
                    }
                }
                // Remaining control bytes carry no editing meaning here.
                _ => {}
            }
        }

        Ok(())
    }

    /// Borrow the output sink.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Mutably borrow the output sink (e.g. to drain a captured buffer).
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consume the console and return the output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W: fmt::Write> fmt::Debug for Console<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("pending", &self.line.len())
            .field("echo", &self.echo)
            .finish()
    }
}
