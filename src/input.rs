//! Keyboard input and input-mode adapters.

use crate::error::{IntoResult, Result};
use crate::native::Native;
use crate::output::reject_nul;
use crate::types::Coord;
use crate::Curses;

impl<N: Native> Curses<N> {
    /// Read a keystroke from the root screen.
    ///
    /// Blocks according to the current delay mode. The raw key code is
    /// returned unchanged, including `ERR` (-1) when no input is
    /// pending in non-blocking mode, so callers can distinguish "no
    /// input yet" from real keys.
    pub fn getch(&mut self) -> Result<i32> {
        self.ensure_initialized()?;
        Ok(self.native_mut().getch())
    }

    /// Move the cursor, then read a keystroke.
    pub fn mvgetch(&mut self, y: Coord, x: Coord) -> Result<i32> {
        self.ensure_initialized()?;
        Ok(self.native_mut().mvgetch(y, x))
    }

    /// Push a key code back onto the input queue.
    pub fn ungetch(&mut self, ch: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().ungetch(ch).into_result()
    }

    /// Enter character-at-a-time input mode.
    pub fn cbreak(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().cbreak().into_result()
    }

    /// Leave character-at-a-time input mode.
    pub fn nocbreak(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().nocbreak().into_result()
    }

    /// Echo typed characters to the screen.
    pub fn echo(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().echo().into_result()
    }

    /// Stop echoing typed characters.
    pub fn noecho(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().noecho().into_result()
    }

    /// Enter raw input mode (no signal or flow-control processing).
    pub fn raw(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().raw().into_result()
    }

    /// Leave raw input mode.
    pub fn noraw(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().noraw().into_result()
    }

    /// Translate return into newline on input.
    pub fn nl(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().nl().into_result()
    }

    /// Stop translating return into newline.
    pub fn nonl(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().nonl().into_result()
    }

    /// Put the terminal in half-delay mode (`tenths` tenths of a
    /// second).
    pub fn halfdelay(&mut self, tenths: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().halfdelay(tenths).into_result()
    }

    /// Set the blocking behaviour of reads, in milliseconds.
    ///
    /// Negative means block indefinitely, zero means non-blocking.
    pub fn timeout(&mut self, delay: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().timeout(delay);
        Ok(())
    }

    /// Select the file descriptor used for typeahead checking.
    pub fn typeahead(&mut self, fd: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().typeahead(fd).into_result()
    }

    /// Discard any pending typeahead.
    pub fn flushinp(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().flushinp().into_result()
    }

    /// Flush input and output queues on interrupt keys.
    pub fn qiflush(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().qiflush();
        Ok(())
    }

    /// Do not flush queues on interrupt keys.
    pub fn noqiflush(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().noqiflush();
        Ok(())
    }

    /// Whether the terminal recognizes the given key code.
    pub fn has_key(&mut self, ch: i32) -> Result<bool> {
        self.ensure_initialized()?;
        Ok(self.native().has_key(ch))
    }

    /// Bind an escape sequence to a key code.
    pub fn define_key(&mut self, definition: &str, keycode: i32) -> Result<()> {
        reject_nul(definition)?;
        self.ensure_initialized()?;
        self.native_mut()
            .define_key(definition, keycode)
            .into_result()
    }

    /// Enable or disable recognition of a key code.
    pub fn keyok(&mut self, keycode: i32, enable: bool) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().keyok(keycode, enable).into_result()
    }

    /// Whether the terminal can insert and delete characters.
    pub fn has_ic(&mut self) -> Result<bool> {
        self.ensure_initialized()?;
        Ok(self.native().has_ic())
    }

    /// Whether the terminal can insert and delete lines.
    pub fn has_il(&mut self) -> Result<bool> {
        self.ensure_initialized()?;
        Ok(self.native().has_il())
    }

    /// Sleep for the given number of milliseconds.
    pub fn napms(&mut self, ms: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().napms(ms).into_result()
    }

    /// Pad output with a delay of the given number of milliseconds.
    pub fn delay_output(&mut self, ms: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().delay_output(ms).into_result()
    }
}
