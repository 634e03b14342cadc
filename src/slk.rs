//! Soft label key adapters.
//!
//! Soft labels reserve the bottom screen line for up to twelve labeled
//! function keys.

use crate::error::{IntoResult, Result};
use crate::native::Native;
use crate::output::reject_nul;
use crate::types::{AttrT, PairT};
use crate::Curses;

impl<N: Native> Curses<N> {
    /// Reserve the label line, choosing the layout format.
    pub fn slk_init(&mut self, fmt: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().slk_init(fmt).into_result()
    }

    /// Set the text and justification of a label (1-based).
    pub fn slk_set(&mut self, labnum: i32, label: &str, fmt: i32) -> Result<()> {
        reject_nul(label)?;
        self.ensure_initialized()?;
        self.native_mut().slk_set(labnum, label, fmt).into_result()
    }

    /// Refresh the label line.
    pub fn slk_refresh(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().slk_refresh().into_result()
    }

    /// Copy the label line to the virtual screen without refreshing.
    pub fn slk_noutrefresh(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().slk_noutrefresh().into_result()
    }

    /// Clear the label line.
    pub fn slk_clear(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().slk_clear().into_result()
    }

    /// Restore the label line after [`slk_clear`](Self::slk_clear).
    pub fn slk_restore(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().slk_restore().into_result()
    }

    /// Force the label line to redraw on next refresh.
    pub fn slk_touch(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().slk_touch().into_result()
    }

    /// Turn attributes on for the labels.
    pub fn slk_attron(&mut self, attrs: AttrT) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().slk_attron(attrs).into_result()
    }

    /// Turn attributes off for the labels.
    pub fn slk_attroff(&mut self, attrs: AttrT) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().slk_attroff(attrs).into_result()
    }

    /// Replace the labels' attribute set.
    pub fn slk_attrset(&mut self, attrs: AttrT) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().slk_attrset(attrs).into_result()
    }

    /// Current label attribute set.
    pub fn slk_attr(&mut self) -> Result<AttrT> {
        self.ensure_initialized()?;
        Ok(self.native().slk_attr())
    }

    /// Select the labels' color pair.
    pub fn slk_color(&mut self, pair: PairT) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().slk_color(pair).into_result()
    }
}
