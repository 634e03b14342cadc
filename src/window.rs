//! Window and pad adapters.
//!
//! Windows and pads are created by native constructors and tracked in
//! the resource registry; every adapter here takes a [`ResourceId`] and
//! resolves it (with kind checking) before the native call. Handle
//! release goes through [`Curses::release`](crate::Curses::release).

use crate::error::{IntoResult, Result};
use crate::native::Native;
use crate::output::{reject_nul, BorderChars};
use crate::registry::ResourceId;
use crate::types::{AttrT, ChType, Coord, PairT};
use crate::Curses;

/// Pad-to-screen copy region for [`Curses::prefresh`] and
/// [`Curses::pnoutrefresh`]: the pad origin (`pminrow`, `pmincol`)
/// followed by the screen rectangle (`sminrow`, `smincol`, `smaxrow`,
/// `smaxcol`).
pub type PadRegion = [i32; 6];

impl<N: Native> Curses<N> {
    /// Create a window of `nlines` by `ncols` at screen position
    /// (`begy`, `begx`) and register a handle for it.
    ///
    /// If registration fails the freshly built native window is
    /// destroyed before the error is returned, so no native memory
    /// leaks.
    pub fn newwin(
        &mut self,
        nlines: i32,
        ncols: i32,
        begy: Coord,
        begx: Coord,
    ) -> Result<ResourceId> {
        self.ensure_initialized()?;
        let ptr = self.native_mut().newwin(nlines, ncols, begy, begx);
        self.adopt_window(ptr, "window")
    }

    /// Create a pad of `nlines` by `ncols` and register a handle for it.
    ///
    /// Pads may be larger than the physical screen; they reach the
    /// terminal through [`prefresh`](Self::prefresh) or
    /// [`pnoutrefresh`](Self::pnoutrefresh) rather than
    /// [`wrefresh`](Self::wrefresh).
    pub fn newpad(&mut self, nlines: i32, ncols: i32) -> Result<ResourceId> {
        self.ensure_initialized()?;
        let ptr = self.native_mut().newpad(nlines, ncols);
        self.adopt_window(ptr, "pad")
    }

    /// Delete a window, dropping one reference to its handle.
    ///
    /// Alias for [`release`](Self::release), kept under the native
    /// name.
    pub fn delwin(&mut self, win: ResourceId) -> Result<()> {
        self.release(win)
    }

    /// Copy a pad region to the terminal and refresh it.
    pub fn prefresh(&mut self, pad: ResourceId, region: PadRegion) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(pad)?;
        self.native_mut().prefresh(ptr, region).into_result()
    }

    /// Copy a pad region to the virtual screen without refreshing.
    pub fn pnoutrefresh(&mut self, pad: ResourceId, region: PadRegion) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(pad)?;
        self.native_mut().pnoutrefresh(ptr, region).into_result()
    }

    /// Refresh a window.
    pub fn wrefresh(&mut self, win: ResourceId) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wrefresh(ptr).into_result()
    }

    /// Copy a window to the virtual screen without refreshing.
    pub fn wnoutrefresh(&mut self, win: ResourceId) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wnoutrefresh(ptr).into_result()
    }

    /// Erase a window's contents.
    pub fn werase(&mut self, win: ResourceId) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().werase(ptr).into_result()
    }

    /// Clear a window, forcing a full repaint on next refresh.
    pub fn wclear(&mut self, win: ResourceId) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wclear(ptr).into_result()
    }

    /// Add a character in a window and advance its cursor.
    pub fn waddch(&mut self, win: ResourceId, ch: ChType) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().waddch(ptr, ch).into_result()
    }

    /// Output text at a window's current position.
    pub fn waddstr(&mut self, win: ResourceId, s: &str) -> Result<()> {
        reject_nul(s)?;
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().waddstr(ptr, s).into_result()
    }

    /// Output at most `n` characters at a window's current position.
    pub fn waddnstr(&mut self, win: ResourceId, s: &str, n: i32) -> Result<()> {
        reject_nul(s)?;
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().waddnstr(ptr, s, n).into_result()
    }

    /// Move a window's cursor, then output text.
    pub fn mvwaddstr(&mut self, win: ResourceId, y: Coord, x: Coord, s: &str) -> Result<()> {
        reject_nul(s)?;
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().mvwaddstr(ptr, y, x, s).into_result()
    }

    /// Move a window's output position.
    pub fn wmove(&mut self, win: ResourceId, y: Coord, x: Coord) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wmove(ptr, y, x).into_result()
    }

    /// Read a keystroke through a window.
    ///
    /// Blocks according to the window's delay mode. The raw key code is
    /// returned unchanged, including `ERR` (-1) when no input is
    /// pending in non-blocking mode.
    pub fn wgetch(&mut self, win: ResourceId) -> Result<i32> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        Ok(self.native_mut().wgetch(ptr))
    }

    /// Scroll a window by `n` lines.
    pub fn wscrl(&mut self, win: ResourceId, n: i32) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wscrl(ptr, n).into_result()
    }

    /// Set a window's software scrolling region.
    pub fn wsetscrreg(&mut self, win: ResourceId, top: i32, bottom: i32) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wsetscrreg(ptr, top, bottom).into_result()
    }

    /// Enable or disable scrolling for a window.
    pub fn scrollok(&mut self, win: ResourceId, enable: bool) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().scrollok(ptr, enable).into_result()
    }

    /// Enable or disable function-key mapping for a window.
    pub fn keypad(&mut self, win: ResourceId, enable: bool) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().keypad(ptr, enable).into_result()
    }

    /// Enable or disable 8-bit input for a window.
    pub fn meta(&mut self, win: ResourceId, enable: bool) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().meta(ptr, enable).into_result()
    }

    /// Turn attributes on for a window.
    pub fn wattron(&mut self, win: ResourceId, attrs: AttrT) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wattron(ptr, attrs).into_result()
    }

    /// Turn attributes off for a window.
    pub fn wattroff(&mut self, win: ResourceId, attrs: AttrT) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wattroff(ptr, attrs).into_result()
    }

    /// Replace a window's attribute set.
    pub fn wattrset(&mut self, win: ResourceId, attrs: AttrT) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wattrset(ptr, attrs).into_result()
    }

    /// Start standout mode in a window.
    pub fn wstandout(&mut self, win: ResourceId) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wstandout(ptr).into_result()
    }

    /// End standout mode in a window.
    pub fn wstandend(&mut self, win: ResourceId) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wstandend(ptr).into_result()
    }

    /// Select a window's active color pair.
    pub fn wcolor_set(&mut self, win: ResourceId, pair: PairT) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wcolor_set(ptr, pair).into_result()
    }

    /// Set a window's background property and apply it to the whole
    /// window.
    pub fn wbkgd(&mut self, win: ResourceId, ch: ChType) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wbkgd(ptr, ch).into_result()
    }

    /// Set a window's background property for subsequently added text.
    pub fn wbkgdset(&mut self, win: ResourceId, ch: ChType) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wbkgdset(ptr, ch);
        Ok(())
    }

    /// Draw a border just inside a window's edges.
    pub fn wborder(&mut self, win: ResourceId, chars: BorderChars) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wborder(ptr, chars).into_result()
    }

    /// Draw a horizontal line in a window at its cursor.
    pub fn whline(&mut self, win: ResourceId, ch: ChType, n: i32) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().whline(ptr, ch, n).into_result()
    }

    /// Draw a vertical line in a window at its cursor.
    pub fn wvline(&mut self, win: ResourceId, ch: ChType, n: i32) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        self.native_mut().wvline(ptr, ch, n).into_result()
    }

    /// Current cursor position of a window, as `(y, x)`.
    pub fn getyx(&mut self, win: ResourceId) -> Result<(Coord, Coord)> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        Ok(self.native().getyx(ptr))
    }

    /// Size of a window, as `(rows, cols)`.
    pub fn getmaxyx(&mut self, win: ResourceId) -> Result<(Coord, Coord)> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        Ok(self.native().getmaxyx(ptr))
    }
}
