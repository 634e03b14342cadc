//! Panel (stacking order) adapters.
//!
//! Panels give windows a depth order with correct overlap refresh.
//! A panel handle holds its own registry entry; the window it covers
//! keeps its own. Stack queries ([`Curses::panel_above`],
//! [`Curses::panel_below`], [`Curses::panel_window`]) return handles by
//! *sharing* the existing registration for the native pointer they
//! find, bumping its reference count instead of minting a second
//! independent entry for the same object.

use crate::error::{IntoResult, Result};
use crate::native::Native;
use crate::registry::ResourceId;
use crate::types::Coord;
use crate::Curses;

impl<N: Native> Curses<N> {
    /// Put a window on top of the panel stack and register the panel.
    ///
    /// The window handle stays independently valid; release the panel
    /// before the window.
    pub fn new_panel(&mut self, win: ResourceId) -> Result<ResourceId> {
        self.ensure_initialized()?;
        let wptr = self.window(win)?;
        let ptr = self.native_mut().new_panel(wptr);
        self.adopt_panel(ptr)
    }

    /// Remove a panel from the stack, dropping one reference to its
    /// handle.
    ///
    /// Alias for [`release`](Self::release), kept under the native
    /// name. The underlying window is not touched.
    pub fn del_panel(&mut self, panel: ResourceId) -> Result<()> {
        self.release(panel)
    }

    /// Make a panel invisible without removing it from the stack.
    pub fn hide_panel(&mut self, panel: ResourceId) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.panel(panel)?;
        self.native_mut().hide_panel(ptr).into_result()
    }

    /// Make a hidden panel visible again.
    pub fn show_panel(&mut self, panel: ResourceId) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.panel(panel)?;
        self.native_mut().show_panel(ptr).into_result()
    }

    /// Raise a panel to the top of the stack.
    pub fn top_panel(&mut self, panel: ResourceId) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.panel(panel)?;
        self.native_mut().top_panel(ptr).into_result()
    }

    /// Lower a panel to the bottom of the stack.
    pub fn bottom_panel(&mut self, panel: ResourceId) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.panel(panel)?;
        self.native_mut().bottom_panel(ptr).into_result()
    }

    /// Move a panel's window to a new screen position.
    pub fn move_panel(&mut self, panel: ResourceId, starty: Coord, startx: Coord) -> Result<()> {
        self.ensure_initialized()?;
        let ptr = self.panel(panel)?;
        self.native_mut()
            .move_panel(ptr, starty, startx)
            .into_result()
    }

    /// Swap the window a panel displays.
    pub fn replace_panel(&mut self, panel: ResourceId, win: ResourceId) -> Result<()> {
        self.ensure_initialized()?;
        let pptr = self.panel(panel)?;
        let wptr = self.window(win)?;
        self.native_mut().replace_panel(pptr, wptr).into_result()
    }

    /// The panel directly above the given one, or above the whole stack
    /// when `None` is passed.
    ///
    /// `Ok(None)` means the top of the stack was reached. A returned
    /// handle shares the panel's existing registration (its reference
    /// count goes up by one), so release it like any other handle.
    pub fn panel_above(&mut self, panel: Option<ResourceId>) -> Result<Option<ResourceId>> {
        self.ensure_initialized()?;
        let ptr = match panel {
            Some(id) => Some(self.panel(id)?),
            None => None,
        };
        let found = self.native().panel_above(ptr);
        if found.is_null() {
            return Ok(None);
        }
        Ok(self.share_ptr(found.cast()))
    }

    /// The panel directly below the given one, or below the whole stack
    /// when `None` is passed. Sharing semantics match
    /// [`panel_above`](Self::panel_above).
    pub fn panel_below(&mut self, panel: Option<ResourceId>) -> Result<Option<ResourceId>> {
        self.ensure_initialized()?;
        let ptr = match panel {
            Some(id) => Some(self.panel(id)?),
            None => None,
        };
        let found = self.native().panel_below(ptr);
        if found.is_null() {
            return Ok(None);
        }
        Ok(self.share_ptr(found.cast()))
    }

    /// The window a panel displays.
    ///
    /// The returned handle shares the window's existing registration
    /// rather than wrapping the native pointer a second time; `Ok(None)`
    /// means the native pointer is not one this context registered.
    pub fn panel_window(&mut self, panel: ResourceId) -> Result<Option<ResourceId>> {
        self.ensure_initialized()?;
        let pptr = self.panel(panel)?;
        let wptr = self.native().panel_window(pptr);
        if wptr.is_null() {
            return Ok(None);
        }
        Ok(self.share_ptr(wptr.cast()))
    }

    /// Write pending panel-stack updates to the virtual screen.
    ///
    /// Follow with [`doupdate`](Self::doupdate) to reach the terminal.
    pub fn update_panels(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().update_panels();
        Ok(())
    }
}
