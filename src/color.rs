//! Color and root-screen attribute adapters.
//!
//! Queries that natively fill output parameters (`color_content`,
//! `pair_content`) come back as tuples instead.

use crate::error::{IntoResult, Result};
use crate::native::Native;
use crate::types::{AttrT, ChType, ColorT, PairT};
use crate::Curses;

/// Black, pair element 0.
pub const COLOR_BLACK: ColorT = 0;
/// Red.
pub const COLOR_RED: ColorT = 1;
/// Green.
pub const COLOR_GREEN: ColorT = 2;
/// Yellow.
pub const COLOR_YELLOW: ColorT = 3;
/// Blue.
pub const COLOR_BLUE: ColorT = 4;
/// Magenta.
pub const COLOR_MAGENTA: ColorT = 5;
/// Cyan.
pub const COLOR_CYAN: ColorT = 6;
/// White.
pub const COLOR_WHITE: ColorT = 7;

impl<N: Native> Curses<N> {
    /// Enable color support.
    pub fn start_color(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().start_color().into_result()
    }

    /// Whether the terminal supports color.
    pub fn has_colors(&mut self) -> Result<bool> {
        self.ensure_initialized()?;
        Ok(self.native().has_colors())
    }

    /// Whether color definitions can be changed.
    pub fn can_change_color(&mut self) -> Result<bool> {
        self.ensure_initialized()?;
        Ok(self.native().can_change_color())
    }

    /// Define a color pair.
    pub fn init_pair(&mut self, pair: PairT, fg: ColorT, bg: ColorT) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().init_pair(pair, fg, bg).into_result()
    }

    /// Redefine a color's RGB components (each 0..=1000).
    pub fn init_color(&mut self, color: ColorT, r: ColorT, g: ColorT, b: ColorT) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().init_color(color, r, g, b).into_result()
    }

    /// RGB components of a color, as `(r, g, b)`.
    pub fn color_content(&mut self, color: ColorT) -> Result<(ColorT, ColorT, ColorT)> {
        self.ensure_initialized()?;
        let (rc, r, g, b) = self.native_mut().color_content(color);
        rc.into_result()?;
        Ok((r, g, b))
    }

    /// Colors of a pair, as `(fg, bg)`.
    pub fn pair_content(&mut self, pair: PairT) -> Result<(ColorT, ColorT)> {
        self.ensure_initialized()?;
        let (rc, fg, bg) = self.native_mut().pair_content(pair);
        rc.into_result()?;
        Ok((fg, bg))
    }

    /// Map color -1 to the terminal's default colors.
    pub fn use_default_colors(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().use_default_colors().into_result()
    }

    /// Set the colors that pair 0 stands for.
    pub fn assume_default_colors(&mut self, fg: i32, bg: i32) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().assume_default_colors(fg, bg).into_result()
    }

    /// Turn attributes on for the root screen.
    pub fn attron(&mut self, attrs: AttrT) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().attron(attrs).into_result()
    }

    /// Turn attributes off for the root screen.
    pub fn attroff(&mut self, attrs: AttrT) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().attroff(attrs).into_result()
    }

    /// Replace the root screen's attribute set.
    pub fn attrset(&mut self, attrs: AttrT) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().attrset(attrs).into_result()
    }

    /// Set the root screen's background property and apply it
    /// everywhere.
    pub fn bkgd(&mut self, ch: ChType) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().bkgd(ch).into_result()
    }

    /// Set the root screen's background property for subsequently added
    /// text.
    pub fn bkgdset(&mut self, ch: ChType) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().bkgdset(ch);
        Ok(())
    }

    /// Select the root screen's active color pair.
    pub fn color_set(&mut self, pair: PairT) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().color_set(pair).into_result()
    }
}
