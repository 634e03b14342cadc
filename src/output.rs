//! Output adapters targeting the root screen.
//!
//! Every method validates, checks the initialization gate, performs
//! exactly one native call, and maps the raw status back. The
//! window-handle counterparts live in [`crate::window`].

use crate::error::{Error, IntoResult, Result};
use crate::native::Native;
use crate::types::{ChType, Coord};
use crate::Curses;

/// Border/line glyph set for [`Curses::border`], in the native
/// argument order: left, right, top, bottom and the four corners.
/// Zero selects the native default glyph for that edge.
pub type BorderChars = [ChType; 8];

impl<N: Native> Curses<N> {
    /// Add a character at the current position and advance the cursor.
    pub fn addch(&mut self, ch: ChType) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().addch(ch).into_result()
    }

    /// Move the cursor, then add a character.
    pub fn mvaddch(&mut self, y: Coord, x: Coord, ch: ChType) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().mvaddch(y, x, ch).into_result()
    }

    /// Add a character and immediately refresh the screen.
    pub fn echochar(&mut self, ch: ChType) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().echochar(ch).into_result()
    }

    /// Output text at the current position.
    pub fn addstr(&mut self, s: &str) -> Result<()> {
        reject_nul(s)?;
        self.ensure_initialized()?;
        self.native_mut().addstr(s).into_result()
    }

    /// Output at most `n` characters of text at the current position.
    pub fn addnstr(&mut self, s: &str, n: i32) -> Result<()> {
        reject_nul(s)?;
        self.ensure_initialized()?;
        self.native_mut().addnstr(s, n).into_result()
    }

    /// Move the cursor, then output text.
    pub fn mvaddstr(&mut self, y: Coord, x: Coord, s: &str) -> Result<()> {
        reject_nul(s)?;
        self.ensure_initialized()?;
        self.native_mut().mvaddstr(y, x, s).into_result()
    }

    /// Move the cursor, then output at most `n` characters of text.
    pub fn mvaddnstr(&mut self, y: Coord, x: Coord, s: &str, n: i32) -> Result<()> {
        reject_nul(s)?;
        self.ensure_initialized()?;
        self.native_mut().mvaddnstr(y, x, s, n).into_result()
    }

    /// Output an attributed character string at the current position.
    pub fn addchstr(&mut self, chstr: &[ChType]) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().addchstr(chstr).into_result()
    }

    /// Output at most `n` attributed characters at the current position.
    pub fn addchnstr(&mut self, chstr: &[ChType], n: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().addchnstr(chstr, n).into_result()
    }

    /// Move the cursor, then output an attributed character string.
    pub fn mvaddchstr(&mut self, y: Coord, x: Coord, chstr: &[ChType]) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().mvaddchstr(y, x, chstr).into_result()
    }

    /// Move the cursor, then output at most `n` attributed characters.
    pub fn mvaddchnstr(&mut self, y: Coord, x: Coord, chstr: &[ChType], n: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().mvaddchnstr(y, x, chstr, n).into_result()
    }

    /// Move the output position.
    pub fn mv(&mut self, y: Coord, x: Coord) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().mv(y, x).into_result()
    }

    /// Clear the screen (full repaint on next refresh).
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().clear().into_result()
    }

    /// Erase the screen contents.
    pub fn erase(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().erase().into_result()
    }

    /// Clear from the cursor to the bottom of the screen.
    pub fn clrtobot(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().clrtobot().into_result()
    }

    /// Clear from the cursor to the end of the line.
    pub fn clrtoeol(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().clrtoeol().into_result()
    }

    /// Delete the character under the cursor.
    pub fn delch(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().delch().into_result()
    }

    /// Move the cursor, then delete the character under it.
    pub fn mvdelch(&mut self, y: Coord, x: Coord) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().mvdelch(y, x).into_result()
    }

    /// Delete the line under the cursor.
    pub fn deleteln(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().deleteln().into_result()
    }

    /// Insert a blank line above the current one.
    pub fn insertln(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().insertln().into_result()
    }

    /// Insert a character at the current position, shifting the line.
    pub fn insch(&mut self, ch: ChType) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().insch(ch).into_result()
    }

    /// Insert text at the current position, shifting the line.
    pub fn insstr(&mut self, s: &str) -> Result<()> {
        reject_nul(s)?;
        self.ensure_initialized()?;
        self.native_mut().insstr(s).into_result()
    }

    /// Insert (`n > 0`) or delete (`n < 0`) lines at the cursor.
    pub fn insdelln(&mut self, n: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().insdelln(n).into_result()
    }

    /// Read the attributed character under the cursor.
    pub fn inch(&mut self) -> Result<ChType> {
        self.ensure_initialized()?;
        Ok(self.native_mut().inch())
    }

    /// Move the cursor, then read the attributed character under it.
    pub fn mvinch(&mut self, y: Coord, x: Coord) -> Result<ChType> {
        self.ensure_initialized()?;
        Ok(self.native_mut().mvinch(y, x))
    }

    /// Read the line of text under the cursor.
    ///
    /// The read buffer is sized to the *current* screen width on every
    /// call, so this stays correct across terminal resizes.
    pub fn instr(&mut self) -> Result<String> {
        self.ensure_initialized()?;
        let width = self.native().cols();
        let (rc, text) = self.native_mut().innstr(width);
        rc.into_result()?;
        Ok(text)
    }

    /// Scroll the screen by `n` lines.
    pub fn scrl(&mut self, n: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().scrl(n).into_result()
    }

    /// Refresh the screen.
    pub fn refresh(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().refresh().into_result()
    }

    /// Write pending virtual-screen updates to the terminal.
    pub fn doupdate(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().doupdate().into_result()
    }

    /// Start standout mode.
    pub fn standout(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().standout().into_result()
    }

    /// End standout mode.
    pub fn standend(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().standend().into_result()
    }

    /// Draw a border around the screen using attributed characters.
    pub fn border(&mut self, chars: BorderChars) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().border(chars).into_result()
    }

    /// Draw a horizontal line of at most `n` characters at the cursor.
    pub fn hline(&mut self, ch: ChType, n: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().hline(ch, n).into_result()
    }

    /// Draw a vertical line of at most `n` characters at the cursor.
    pub fn vline(&mut self, ch: ChType, n: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().vline(ch, n).into_result()
    }

    /// Move the cursor, then draw a horizontal line.
    pub fn mvhline(&mut self, y: Coord, x: Coord, ch: ChType, n: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().mvhline(y, x, ch, n).into_result()
    }

    /// Move the cursor, then draw a vertical line.
    pub fn mvvline(&mut self, y: Coord, x: Coord, ch: ChType, n: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().mvvline(y, x, ch, n).into_result()
    }

    /// Audible alert.
    pub fn beep(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().beep().into_result()
    }

    /// Visual alert (screen flash).
    pub fn flash(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().flash().into_result()
    }
}

/// Argument check shared by every text-taking adapter: native strings
/// are NUL-terminated, so interior NULs cannot be passed through.
pub(crate) fn reject_nul(s: &str) -> Result<()> {
    if s.contains('\0') {
        Err(Error::InvalidArgument("string contains NUL byte".into()))
    } else {
        Ok(())
    }
}
