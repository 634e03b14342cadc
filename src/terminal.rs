//! Terminal capability and terminal-mode adapters.

use crate::error::{IntoResult, Result};
use crate::native::Native;
use crate::output::reject_nul;
use crate::types::{ChType, Coord};
use crate::Curses;

impl<N: Native> Curses<N> {
    /// Whether the screen has been shut down by [`end`](Self::end)
    /// without a subsequent refresh.
    pub fn isendwin(&mut self) -> Result<bool> {
        self.ensure_initialized()?;
        Ok(self.native().isendwin())
    }

    /// Terminal baud rate.
    pub fn baudrate(&mut self) -> Result<i32> {
        self.ensure_initialized()?;
        Ok(self.native().baudrate())
    }

    /// Set cursor visibility (0 invisible, 1 normal, 2 very visible).
    ///
    /// Returns the previous visibility.
    pub fn curs_set(&mut self, visibility: i32) -> Result<i32> {
        self.ensure_initialized()?;
        let prev = self.native_mut().curs_set(visibility);
        prev.into_result()?;
        Ok(prev)
    }

    /// Move the terminal cursor directly, bypassing window cursors.
    pub fn mvcur(&mut self, oldy: Coord, oldx: Coord, newy: Coord, newx: Coord) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().mvcur(oldy, oldx, newy, newx).into_result()
    }

    /// Short terminal type name (at most 14 characters).
    pub fn termname(&mut self) -> Result<String> {
        self.ensure_initialized()?;
        Ok(self.native().termname())
    }

    /// Verbose terminal description (at most 128 characters).
    pub fn longname(&mut self) -> Result<String> {
        self.ensure_initialized()?;
        Ok(self.native().longname())
    }

    /// The terminal's erase character.
    pub fn erasechar(&mut self) -> Result<char> {
        self.ensure_initialized()?;
        Ok(self.native().erasechar() as char)
    }

    /// The terminal's line-kill character.
    pub fn killchar(&mut self) -> Result<char> {
        self.ensure_initialized()?;
        Ok(self.native().killchar() as char)
    }

    /// Video attributes the terminal supports.
    pub fn termattrs(&mut self) -> Result<ChType> {
        self.ensure_initialized()?;
        Ok(self.native().termattrs())
    }

    /// Write a terminfo capability string to the terminal.
    pub fn putp(&mut self, s: &str) -> Result<()> {
        reject_nul(s)?;
        self.ensure_initialized()?;
        self.native_mut().putp(s).into_result()
    }

    /// Display the given video attributes on the terminal.
    pub fn vidattr(&mut self, attrs: ChType) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().vidattr(attrs).into_result()
    }

    /// Honor or ignore `LINES`/`COLUMNS` environment overrides.
    ///
    /// Takes effect for the next screen setup.
    pub fn use_env(&mut self, flag: bool) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().use_env(flag);
        Ok(())
    }

    /// Enable or disable user-defined terminfo capability names.
    pub fn use_extended_names(&mut self, flag: bool) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().use_extended_names(flag).into_result()
    }

    /// Restrict the screen to a single line.
    pub fn filter(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().filter();
        Ok(())
    }

    /// Save the current terminal modes as the in-curses state.
    pub fn def_prog_mode(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().def_prog_mode().into_result()
    }

    /// Save the current terminal modes as the shell state.
    pub fn def_shell_mode(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().def_shell_mode().into_result()
    }

    /// Restore the saved in-curses terminal modes.
    pub fn reset_prog_mode(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().reset_prog_mode().into_result()
    }

    /// Restore the saved shell terminal modes.
    pub fn reset_shell_mode(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().reset_shell_mode().into_result()
    }

    /// Save the terminal state.
    pub fn savetty(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().savetty().into_result()
    }

    /// Restore the terminal state saved by [`savetty`](Self::savetty).
    pub fn resetty(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().resetty().into_result()
    }

    /// Dump the screen contents to a file.
    pub fn scr_dump(&mut self, filename: &str) -> Result<()> {
        reject_nul(filename)?;
        self.ensure_initialized()?;
        self.native_mut().scr_dump(filename).into_result()
    }

    /// Use a screen dump file to initialize the screen.
    pub fn scr_init(&mut self, filename: &str) -> Result<()> {
        reject_nul(filename)?;
        self.ensure_initialized()?;
        self.native_mut().scr_init(filename).into_result()
    }

    /// Restore the screen from a dump file.
    pub fn scr_restore(&mut self, filename: &str) -> Result<()> {
        reject_nul(filename)?;
        self.ensure_initialized()?;
        self.native_mut().scr_restore(filename).into_result()
    }

    /// Treat a dump file as the current screen.
    pub fn scr_set(&mut self, filename: &str) -> Result<()> {
        reject_nul(filename)?;
        self.ensure_initialized()?;
        self.native_mut().scr_set(filename).into_result()
    }

    /// Current screen height in rows.
    pub fn lines(&mut self) -> Result<i32> {
        self.ensure_initialized()?;
        Ok(self.native().lines())
    }

    /// Current screen width in columns.
    pub fn cols(&mut self) -> Result<i32> {
        self.ensure_initialized()?;
        Ok(self.native().cols())
    }
}
