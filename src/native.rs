//! The seam between the binding layer and the native library.
//!
//! [`Native`] declares one method per native function the binding uses;
//! [`LibCurses`] is the production implementation forwarding to the real
//! C library through [`crate::ffi`]. Adapters never touch `ffi`
//! directly, so tests can substitute an instrumented backend and assert
//! exactly which native calls a given operation performs.

use crate::ffi;
use crate::types::{AttrT, ChType, ColorT, Coord, PairT, ERR};
use std::ffi::{CStr, CString};

#[cfg(feature = "mouse")]
use crate::mouse::MouseEvent;
#[cfg(feature = "mouse")]
use crate::types::MmaskT;

/// Raw native window pointer.
pub type WindowPtr = *mut ffi::WINDOW;

/// Raw native panel pointer.
#[cfg(feature = "panels")]
pub type PanelPtr = *mut ffi::PANEL;

/// The native curses call surface.
///
/// Each method corresponds to exactly one native library function and
/// keeps its semantics: integer status returns are the raw `OK`/`ERR`
/// codes, constructors return null on failure, and output parameters
/// are folded into tuple returns.
///
/// Implementations are not expected to validate anything; argument
/// checking, handle resolution and initialization gating all happen in
/// the adapter layer above.
#[allow(missing_docs)]
pub trait Native {
    // Lifecycle --------------------------------------------------------
    fn initscr(&mut self) -> WindowPtr;
    fn endwin(&mut self) -> i32;
    fn isendwin(&self) -> bool;
    fn lines(&self) -> i32;
    fn cols(&self) -> i32;
    fn acs_char(&self, vt100: u8) -> ChType;

    // Input modes ------------------------------------------------------
    fn cbreak(&mut self) -> i32;
    fn nocbreak(&mut self) -> i32;
    fn echo(&mut self) -> i32;
    fn noecho(&mut self) -> i32;
    fn raw(&mut self) -> i32;
    fn noraw(&mut self) -> i32;
    fn nl(&mut self) -> i32;
    fn nonl(&mut self) -> i32;
    fn halfdelay(&mut self, tenths: i32) -> i32;
    fn timeout(&mut self, delay: i32);
    fn typeahead(&mut self, fd: i32) -> i32;
    fn flushinp(&mut self) -> i32;
    fn qiflush(&mut self);
    fn noqiflush(&mut self);
    fn meta(&mut self, win: WindowPtr, enable: bool) -> i32;
    fn keypad(&mut self, win: WindowPtr, enable: bool) -> i32;
    fn napms(&mut self, ms: i32) -> i32;
    fn delay_output(&mut self, ms: i32) -> i32;
    fn use_env(&mut self, flag: bool);
    fn use_extended_names(&mut self, flag: bool) -> i32;
    fn filter(&mut self);

    // Input ------------------------------------------------------------
    fn getch(&mut self) -> i32;
    fn mvgetch(&mut self, y: Coord, x: Coord) -> i32;
    fn wgetch(&mut self, win: WindowPtr) -> i32;
    fn ungetch(&mut self, ch: i32) -> i32;
    fn has_key(&self, ch: i32) -> bool;
    fn has_ic(&self) -> bool;
    fn has_il(&self) -> bool;
    fn define_key(&mut self, definition: &str, keycode: i32) -> i32;
    fn keyok(&mut self, keycode: i32, enable: bool) -> i32;

    // Terminal ---------------------------------------------------------
    fn def_prog_mode(&mut self) -> i32;
    fn def_shell_mode(&mut self) -> i32;
    fn reset_prog_mode(&mut self) -> i32;
    fn reset_shell_mode(&mut self) -> i32;
    fn savetty(&mut self) -> i32;
    fn resetty(&mut self) -> i32;
    fn curs_set(&mut self, visibility: i32) -> i32;
    fn mvcur(&mut self, oldy: Coord, oldx: Coord, newy: Coord, newx: Coord) -> i32;
    fn baudrate(&self) -> i32;
    fn beep(&mut self) -> i32;
    fn flash(&mut self) -> i32;
    fn termattrs(&self) -> ChType;
    fn termname(&self) -> String;
    fn longname(&self) -> String;
    fn erasechar(&self) -> u8;
    fn killchar(&self) -> u8;
    fn putp(&mut self, s: &str) -> i32;
    fn vidattr(&mut self, attrs: ChType) -> i32;
    fn scr_dump(&mut self, filename: &str) -> i32;
    fn scr_init(&mut self, filename: &str) -> i32;
    fn scr_restore(&mut self, filename: &str) -> i32;
    fn scr_set(&mut self, filename: &str) -> i32;

    // Screen-global output ---------------------------------------------
    fn addch(&mut self, ch: ChType) -> i32;
    fn mvaddch(&mut self, y: Coord, x: Coord, ch: ChType) -> i32;
    fn echochar(&mut self, ch: ChType) -> i32;
    fn addstr(&mut self, s: &str) -> i32;
    fn addnstr(&mut self, s: &str, n: i32) -> i32;
    fn mvaddstr(&mut self, y: Coord, x: Coord, s: &str) -> i32;
    fn mvaddnstr(&mut self, y: Coord, x: Coord, s: &str, n: i32) -> i32;
    fn addchstr(&mut self, chstr: &[ChType]) -> i32;
    fn addchnstr(&mut self, chstr: &[ChType], n: i32) -> i32;
    fn mvaddchstr(&mut self, y: Coord, x: Coord, chstr: &[ChType]) -> i32;
    fn mvaddchnstr(&mut self, y: Coord, x: Coord, chstr: &[ChType], n: i32) -> i32;
    fn mv(&mut self, y: Coord, x: Coord) -> i32;
    fn clear(&mut self) -> i32;
    fn erase(&mut self) -> i32;
    fn clrtobot(&mut self) -> i32;
    fn clrtoeol(&mut self) -> i32;
    fn delch(&mut self) -> i32;
    fn mvdelch(&mut self, y: Coord, x: Coord) -> i32;
    fn deleteln(&mut self) -> i32;
    fn insertln(&mut self) -> i32;
    fn insch(&mut self, ch: ChType) -> i32;
    fn insstr(&mut self, s: &str) -> i32;
    fn insdelln(&mut self, n: i32) -> i32;
    fn inch(&mut self) -> ChType;
    fn mvinch(&mut self, y: Coord, x: Coord) -> ChType;
    fn innstr(&mut self, n: i32) -> (i32, String);
    fn scrl(&mut self, n: i32) -> i32;
    fn refresh(&mut self) -> i32;
    fn doupdate(&mut self) -> i32;
    fn standout(&mut self) -> i32;
    fn standend(&mut self) -> i32;
    #[allow(clippy::too_many_arguments)]
    fn border(&mut self, sides: [ChType; 8]) -> i32;
    fn hline(&mut self, ch: ChType, n: i32) -> i32;
    fn vline(&mut self, ch: ChType, n: i32) -> i32;
    fn mvhline(&mut self, y: Coord, x: Coord, ch: ChType, n: i32) -> i32;
    fn mvvline(&mut self, y: Coord, x: Coord, ch: ChType, n: i32) -> i32;

    // Attributes and color ---------------------------------------------
    fn attron(&mut self, attrs: AttrT) -> i32;
    fn attroff(&mut self, attrs: AttrT) -> i32;
    fn attrset(&mut self, attrs: AttrT) -> i32;
    fn bkgd(&mut self, ch: ChType) -> i32;
    fn bkgdset(&mut self, ch: ChType);
    fn color_set(&mut self, pair: PairT) -> i32;
    fn start_color(&mut self) -> i32;
    fn has_colors(&self) -> bool;
    fn can_change_color(&self) -> bool;
    fn init_pair(&mut self, pair: PairT, fg: ColorT, bg: ColorT) -> i32;
    fn init_color(&mut self, color: ColorT, r: ColorT, g: ColorT, b: ColorT) -> i32;
    fn color_content(&mut self, color: ColorT) -> (i32, ColorT, ColorT, ColorT);
    fn pair_content(&mut self, pair: PairT) -> (i32, ColorT, ColorT);
    fn use_default_colors(&mut self) -> i32;
    fn assume_default_colors(&mut self, fg: i32, bg: i32) -> i32;

    // Windows and pads -------------------------------------------------
    fn newwin(&mut self, nlines: i32, ncols: i32, begy: Coord, begx: Coord) -> WindowPtr;
    fn delwin(&mut self, win: WindowPtr) -> i32;
    fn newpad(&mut self, nlines: i32, ncols: i32) -> WindowPtr;
    #[allow(clippy::too_many_arguments)]
    fn prefresh(&mut self, pad: WindowPtr, region: [i32; 6]) -> i32;
    #[allow(clippy::too_many_arguments)]
    fn pnoutrefresh(&mut self, pad: WindowPtr, region: [i32; 6]) -> i32;
    fn wrefresh(&mut self, win: WindowPtr) -> i32;
    fn wnoutrefresh(&mut self, win: WindowPtr) -> i32;
    fn werase(&mut self, win: WindowPtr) -> i32;
    fn wclear(&mut self, win: WindowPtr) -> i32;
    fn waddch(&mut self, win: WindowPtr, ch: ChType) -> i32;
    fn waddstr(&mut self, win: WindowPtr, s: &str) -> i32;
    fn waddnstr(&mut self, win: WindowPtr, s: &str, n: i32) -> i32;
    fn mvwaddstr(&mut self, win: WindowPtr, y: Coord, x: Coord, s: &str) -> i32;
    fn wmove(&mut self, win: WindowPtr, y: Coord, x: Coord) -> i32;
    fn wscrl(&mut self, win: WindowPtr, n: i32) -> i32;
    fn wsetscrreg(&mut self, win: WindowPtr, top: i32, bottom: i32) -> i32;
    fn scrollok(&mut self, win: WindowPtr, enable: bool) -> i32;
    fn wattron(&mut self, win: WindowPtr, attrs: AttrT) -> i32;
    fn wattroff(&mut self, win: WindowPtr, attrs: AttrT) -> i32;
    fn wattrset(&mut self, win: WindowPtr, attrs: AttrT) -> i32;
    fn wstandout(&mut self, win: WindowPtr) -> i32;
    fn wstandend(&mut self, win: WindowPtr) -> i32;
    fn wcolor_set(&mut self, win: WindowPtr, pair: PairT) -> i32;
    fn wbkgd(&mut self, win: WindowPtr, ch: ChType) -> i32;
    fn wbkgdset(&mut self, win: WindowPtr, ch: ChType);
    fn wborder(&mut self, win: WindowPtr, sides: [ChType; 8]) -> i32;
    fn whline(&mut self, win: WindowPtr, ch: ChType, n: i32) -> i32;
    fn wvline(&mut self, win: WindowPtr, ch: ChType, n: i32) -> i32;
    fn getyx(&self, win: WindowPtr) -> (Coord, Coord);
    fn getmaxyx(&self, win: WindowPtr) -> (Coord, Coord);

    // Mouse ------------------------------------------------------------
    #[cfg(feature = "mouse")]
    fn mousemask(&mut self, newmask: MmaskT) -> (MmaskT, MmaskT);
    #[cfg(feature = "mouse")]
    fn getmouse(&mut self) -> Option<MouseEvent>;
    #[cfg(feature = "mouse")]
    fn ungetmouse(&mut self, event: MouseEvent) -> i32;
    #[cfg(feature = "mouse")]
    fn mouseinterval(&mut self, interval: i32) -> i32;
    #[cfg(feature = "mouse")]
    fn mouse_trafo(&mut self, y: Coord, x: Coord, to_screen: bool) -> Option<(Coord, Coord)>;
    #[cfg(feature = "mouse")]
    fn wmouse_trafo(
        &mut self,
        win: WindowPtr,
        y: Coord,
        x: Coord,
        to_screen: bool,
    ) -> Option<(Coord, Coord)>;

    // Soft label keys --------------------------------------------------
    #[cfg(feature = "slk")]
    fn slk_init(&mut self, fmt: i32) -> i32;
    #[cfg(feature = "slk")]
    fn slk_set(&mut self, labnum: i32, label: &str, fmt: i32) -> i32;
    #[cfg(feature = "slk")]
    fn slk_refresh(&mut self) -> i32;
    #[cfg(feature = "slk")]
    fn slk_noutrefresh(&mut self) -> i32;
    #[cfg(feature = "slk")]
    fn slk_clear(&mut self) -> i32;
    #[cfg(feature = "slk")]
    fn slk_restore(&mut self) -> i32;
    #[cfg(feature = "slk")]
    fn slk_touch(&mut self) -> i32;
    #[cfg(feature = "slk")]
    fn slk_attron(&mut self, attrs: AttrT) -> i32;
    #[cfg(feature = "slk")]
    fn slk_attroff(&mut self, attrs: AttrT) -> i32;
    #[cfg(feature = "slk")]
    fn slk_attrset(&mut self, attrs: AttrT) -> i32;
    #[cfg(feature = "slk")]
    fn slk_attr(&self) -> AttrT;
    #[cfg(feature = "slk")]
    fn slk_color(&mut self, pair: PairT) -> i32;

    // Panels -----------------------------------------------------------
    #[cfg(feature = "panels")]
    fn new_panel(&mut self, win: WindowPtr) -> PanelPtr;
    #[cfg(feature = "panels")]
    fn del_panel(&mut self, panel: PanelPtr) -> i32;
    #[cfg(feature = "panels")]
    fn hide_panel(&mut self, panel: PanelPtr) -> i32;
    #[cfg(feature = "panels")]
    fn show_panel(&mut self, panel: PanelPtr) -> i32;
    #[cfg(feature = "panels")]
    fn top_panel(&mut self, panel: PanelPtr) -> i32;
    #[cfg(feature = "panels")]
    fn bottom_panel(&mut self, panel: PanelPtr) -> i32;
    #[cfg(feature = "panels")]
    fn move_panel(&mut self, panel: PanelPtr, starty: Coord, startx: Coord) -> i32;
    #[cfg(feature = "panels")]
    fn replace_panel(&mut self, panel: PanelPtr, win: WindowPtr) -> i32;
    #[cfg(feature = "panels")]
    fn panel_above(&self, panel: Option<PanelPtr>) -> PanelPtr;
    #[cfg(feature = "panels")]
    fn panel_below(&self, panel: Option<PanelPtr>) -> PanelPtr;
    #[cfg(feature = "panels")]
    fn panel_window(&self, panel: PanelPtr) -> WindowPtr;
    #[cfg(feature = "panels")]
    fn update_panels(&mut self);
}

/// The production backend: forwards every call to the linked C library.
#[derive(Debug, Default)]
pub struct LibCurses {
    _private: (),
}

impl LibCurses {
    /// Create the FFI backend.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

/// Convert a borrowed Rust string for a native call.
///
/// Adapters reject interior NULs before calling into the backend, so
/// the fallback here is never reached through the public API.
fn to_c_string(s: &str) -> Option<CString> {
    CString::new(s).ok()
}

/// Copy a native NUL-terminated string, tolerating null pointers.
fn from_c_string(ptr: *const libc::c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

macro_rules! with_c_string {
    ($s:expr, $c:ident => $call:expr) => {
        match to_c_string($s) {
            Some($c) => $call,
            None => ERR,
        }
    };
}

impl Native for LibCurses {
    fn initscr(&mut self) -> WindowPtr {
        unsafe { ffi::initscr() }
    }
    fn endwin(&mut self) -> i32 {
        unsafe { ffi::endwin() }
    }
    fn isendwin(&self) -> bool {
        unsafe { ffi::isendwin() }
    }
    fn lines(&self) -> i32 {
        unsafe { ffi::LINES }
    }
    fn cols(&self) -> i32 {
        unsafe { ffi::COLS }
    }
    fn acs_char(&self, vt100: u8) -> ChType {
        unsafe { ffi::acs_map[vt100 as usize] }
    }

    fn cbreak(&mut self) -> i32 {
        unsafe { ffi::cbreak() }
    }
    fn nocbreak(&mut self) -> i32 {
        unsafe { ffi::nocbreak() }
    }
    fn echo(&mut self) -> i32 {
        unsafe { ffi::echo() }
    }
    fn noecho(&mut self) -> i32 {
        unsafe { ffi::noecho() }
    }
    fn raw(&mut self) -> i32 {
        unsafe { ffi::raw() }
    }
    fn noraw(&mut self) -> i32 {
        unsafe { ffi::noraw() }
    }
    fn nl(&mut self) -> i32 {
        unsafe { ffi::nl() }
    }
    fn nonl(&mut self) -> i32 {
        unsafe { ffi::nonl() }
    }
    fn halfdelay(&mut self, tenths: i32) -> i32 {
        unsafe { ffi::halfdelay(tenths) }
    }
    fn timeout(&mut self, delay: i32) {
        unsafe { ffi::timeout(delay) }
    }
    fn typeahead(&mut self, fd: i32) -> i32 {
        unsafe { ffi::typeahead(fd) }
    }
    fn flushinp(&mut self) -> i32 {
        unsafe { ffi::flushinp() }
    }
    fn qiflush(&mut self) {
        unsafe { ffi::qiflush() }
    }
    fn noqiflush(&mut self) {
        unsafe { ffi::noqiflush() }
    }
    fn meta(&mut self, win: WindowPtr, enable: bool) -> i32 {
        unsafe { ffi::meta(win, enable) }
    }
    fn keypad(&mut self, win: WindowPtr, enable: bool) -> i32 {
        unsafe { ffi::keypad(win, enable) }
    }
    fn napms(&mut self, ms: i32) -> i32 {
        unsafe { ffi::napms(ms) }
    }
    fn delay_output(&mut self, ms: i32) -> i32 {
        unsafe { ffi::delay_output(ms) }
    }
    fn use_env(&mut self, flag: bool) {
        unsafe { ffi::use_env(flag) }
    }
    fn use_extended_names(&mut self, flag: bool) -> i32 {
        unsafe { ffi::use_extended_names(flag) }
    }
    fn filter(&mut self) {
        unsafe { ffi::filter() }
    }

    fn getch(&mut self) -> i32 {
        unsafe { ffi::getch() }
    }
    fn mvgetch(&mut self, y: Coord, x: Coord) -> i32 {
        unsafe { ffi::mvgetch(y, x) }
    }
    fn wgetch(&mut self, win: WindowPtr) -> i32 {
        unsafe { ffi::wgetch(win) }
    }
    fn ungetch(&mut self, ch: i32) -> i32 {
        unsafe { ffi::ungetch(ch) }
    }
    fn has_key(&self, ch: i32) -> bool {
        unsafe { ffi::has_key(ch) }
    }
    fn has_ic(&self) -> bool {
        unsafe { ffi::has_ic() }
    }
    fn has_il(&self) -> bool {
        unsafe { ffi::has_il() }
    }
    fn define_key(&mut self, definition: &str, keycode: i32) -> i32 {
        with_c_string!(definition, c => unsafe { ffi::define_key(c.as_ptr(), keycode) })
    }
    fn keyok(&mut self, keycode: i32, enable: bool) -> i32 {
        unsafe { ffi::keyok(keycode, enable) }
    }

    fn def_prog_mode(&mut self) -> i32 {
        unsafe { ffi::def_prog_mode() }
    }
    fn def_shell_mode(&mut self) -> i32 {
        unsafe { ffi::def_shell_mode() }
    }
    fn reset_prog_mode(&mut self) -> i32 {
        unsafe { ffi::reset_prog_mode() }
    }
    fn reset_shell_mode(&mut self) -> i32 {
        unsafe { ffi::reset_shell_mode() }
    }
    fn savetty(&mut self) -> i32 {
        unsafe { ffi::savetty() }
    }
    fn resetty(&mut self) -> i32 {
        unsafe { ffi::resetty() }
    }
    fn curs_set(&mut self, visibility: i32) -> i32 {
        unsafe { ffi::curs_set(visibility) }
    }
    fn mvcur(&mut self, oldy: Coord, oldx: Coord, newy: Coord, newx: Coord) -> i32 {
        unsafe { ffi::mvcur(oldy, oldx, newy, newx) }
    }
    fn baudrate(&self) -> i32 {
        unsafe { ffi::baudrate() }
    }
    fn beep(&mut self) -> i32 {
        unsafe { ffi::beep() }
    }
    fn flash(&mut self) -> i32 {
        unsafe { ffi::flash() }
    }
    fn termattrs(&self) -> ChType {
        unsafe { ffi::termattrs() }
    }
    fn termname(&self) -> String {
        from_c_string(unsafe { ffi::termname() })
    }
    fn longname(&self) -> String {
        from_c_string(unsafe { ffi::longname() })
    }
    fn erasechar(&self) -> u8 {
        unsafe { ffi::erasechar() as u8 }
    }
    fn killchar(&self) -> u8 {
        unsafe { ffi::killchar() as u8 }
    }
    fn putp(&mut self, s: &str) -> i32 {
        with_c_string!(s, c => unsafe { ffi::putp(c.as_ptr()) })
    }
    fn vidattr(&mut self, attrs: ChType) -> i32 {
        unsafe { ffi::vidattr(attrs) }
    }
    fn scr_dump(&mut self, filename: &str) -> i32 {
        with_c_string!(filename, c => unsafe { ffi::scr_dump(c.as_ptr()) })
    }
    fn scr_init(&mut self, filename: &str) -> i32 {
        with_c_string!(filename, c => unsafe { ffi::scr_init(c.as_ptr()) })
    }
    fn scr_restore(&mut self, filename: &str) -> i32 {
        with_c_string!(filename, c => unsafe { ffi::scr_restore(c.as_ptr()) })
    }
    fn scr_set(&mut self, filename: &str) -> i32 {
        with_c_string!(filename, c => unsafe { ffi::scr_set(c.as_ptr()) })
    }

    fn addch(&mut self, ch: ChType) -> i32 {
        unsafe { ffi::addch(ch) }
    }
    fn mvaddch(&mut self, y: Coord, x: Coord, ch: ChType) -> i32 {
        unsafe { ffi::mvaddch(y, x, ch) }
    }
    fn echochar(&mut self, ch: ChType) -> i32 {
        unsafe { ffi::echochar(ch) }
    }
    fn addstr(&mut self, s: &str) -> i32 {
        with_c_string!(s, c => unsafe { ffi::addstr(c.as_ptr()) })
    }
    fn addnstr(&mut self, s: &str, n: i32) -> i32 {
        with_c_string!(s, c => unsafe { ffi::addnstr(c.as_ptr(), n) })
    }
    fn mvaddstr(&mut self, y: Coord, x: Coord, s: &str) -> i32 {
        with_c_string!(s, c => unsafe { ffi::mvaddstr(y, x, c.as_ptr()) })
    }
    fn mvaddnstr(&mut self, y: Coord, x: Coord, s: &str, n: i32) -> i32 {
        with_c_string!(s, c => unsafe { ffi::mvaddnstr(y, x, c.as_ptr(), n) })
    }
    fn addchstr(&mut self, chstr: &[ChType]) -> i32 {
        let terminated = chtype_buffer(chstr);
        unsafe { ffi::addchstr(terminated.as_ptr()) }
    }
    fn addchnstr(&mut self, chstr: &[ChType], n: i32) -> i32 {
        let terminated = chtype_buffer(chstr);
        unsafe { ffi::addchnstr(terminated.as_ptr(), n) }
    }
    fn mvaddchstr(&mut self, y: Coord, x: Coord, chstr: &[ChType]) -> i32 {
        let terminated = chtype_buffer(chstr);
        unsafe { ffi::mvaddchstr(y, x, terminated.as_ptr()) }
    }
    fn mvaddchnstr(&mut self, y: Coord, x: Coord, chstr: &[ChType], n: i32) -> i32 {
        let terminated = chtype_buffer(chstr);
        unsafe { ffi::mvaddchnstr(y, x, terminated.as_ptr(), n) }
    }
    fn mv(&mut self, y: Coord, x: Coord) -> i32 {
        unsafe { ffi::mv(y, x) }
    }
    fn clear(&mut self) -> i32 {
        unsafe { ffi::clear() }
    }
    fn erase(&mut self) -> i32 {
        unsafe { ffi::erase() }
    }
    fn clrtobot(&mut self) -> i32 {
        unsafe { ffi::clrtobot() }
    }
    fn clrtoeol(&mut self) -> i32 {
        unsafe { ffi::clrtoeol() }
    }
    fn delch(&mut self) -> i32 {
        unsafe { ffi::delch() }
    }
    fn mvdelch(&mut self, y: Coord, x: Coord) -> i32 {
        unsafe { ffi::mvdelch(y, x) }
    }
    fn deleteln(&mut self) -> i32 {
        unsafe { ffi::deleteln() }
    }
    fn insertln(&mut self) -> i32 {
        unsafe { ffi::insertln() }
    }
    fn insch(&mut self, ch: ChType) -> i32 {
        unsafe { ffi::insch(ch) }
    }
    fn insstr(&mut self, s: &str) -> i32 {
        with_c_string!(s, c => unsafe { ffi::insstr(c.as_ptr()) })
    }
    fn insdelln(&mut self, n: i32) -> i32 {
        unsafe { ffi::insdelln(n) }
    }
    fn inch(&mut self) -> ChType {
        unsafe { ffi::inch() }
    }
    fn mvinch(&mut self, y: Coord, x: Coord) -> ChType {
        unsafe { ffi::mvinch(y, x) }
    }
    fn innstr(&mut self, n: i32) -> (i32, String) {
        let cap = n.max(0) as usize;
        let mut buf = vec![0u8; cap + 1];
        let rc = unsafe { ffi::innstr(buf.as_mut_ptr().cast(), n) };
        let len = buf.iter().position(|&b| b == 0).unwrap_or(cap);
        buf.truncate(len);
        (rc, String::from_utf8_lossy(&buf).into_owned())
    }
    fn scrl(&mut self, n: i32) -> i32 {
        unsafe { ffi::scrl(n) }
    }
    fn refresh(&mut self) -> i32 {
        unsafe { ffi::refresh() }
    }
    fn doupdate(&mut self) -> i32 {
        unsafe { ffi::doupdate() }
    }
    fn standout(&mut self) -> i32 {
        unsafe { ffi::standout() }
    }
    fn standend(&mut self) -> i32 {
        unsafe { ffi::standend() }
    }
    fn border(&mut self, s: [ChType; 8]) -> i32 {
        unsafe { ffi::border(s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7]) }
    }
    fn hline(&mut self, ch: ChType, n: i32) -> i32 {
        unsafe { ffi::hline(ch, n) }
    }
    fn vline(&mut self, ch: ChType, n: i32) -> i32 {
        unsafe { ffi::vline(ch, n) }
    }
    fn mvhline(&mut self, y: Coord, x: Coord, ch: ChType, n: i32) -> i32 {
        unsafe { ffi::mvhline(y, x, ch, n) }
    }
    fn mvvline(&mut self, y: Coord, x: Coord, ch: ChType, n: i32) -> i32 {
        unsafe { ffi::mvvline(y, x, ch, n) }
    }

    fn attron(&mut self, attrs: AttrT) -> i32 {
        unsafe { ffi::attron(attrs) }
    }
    fn attroff(&mut self, attrs: AttrT) -> i32 {
        unsafe { ffi::attroff(attrs) }
    }
    fn attrset(&mut self, attrs: AttrT) -> i32 {
        unsafe { ffi::attrset(attrs) }
    }
    fn bkgd(&mut self, ch: ChType) -> i32 {
        unsafe { ffi::bkgd(ch) }
    }
    fn bkgdset(&mut self, ch: ChType) {
        unsafe { ffi::bkgdset(ch) }
    }
    fn color_set(&mut self, pair: PairT) -> i32 {
        unsafe { ffi::color_set(pair, std::ptr::null_mut()) }
    }
    fn start_color(&mut self) -> i32 {
        unsafe { ffi::start_color() }
    }
    fn has_colors(&self) -> bool {
        unsafe { ffi::has_colors() }
    }
    fn can_change_color(&self) -> bool {
        unsafe { ffi::can_change_color() }
    }
    fn init_pair(&mut self, pair: PairT, fg: ColorT, bg: ColorT) -> i32 {
        unsafe { ffi::init_pair(pair, fg, bg) }
    }
    fn init_color(&mut self, color: ColorT, r: ColorT, g: ColorT, b: ColorT) -> i32 {
        unsafe { ffi::init_color(color, r, g, b) }
    }
    fn color_content(&mut self, color: ColorT) -> (i32, ColorT, ColorT, ColorT) {
        let (mut r, mut g, mut b) = (0, 0, 0);
        let rc = unsafe { ffi::color_content(color, &mut r, &mut g, &mut b) };
        (rc, r, g, b)
    }
    fn pair_content(&mut self, pair: PairT) -> (i32, ColorT, ColorT) {
        let (mut fg, mut bg) = (0, 0);
        let rc = unsafe { ffi::pair_content(pair, &mut fg, &mut bg) };
        (rc, fg, bg)
    }
    fn use_default_colors(&mut self) -> i32 {
        unsafe { ffi::use_default_colors() }
    }
    fn assume_default_colors(&mut self, fg: i32, bg: i32) -> i32 {
        unsafe { ffi::assume_default_colors(fg, bg) }
    }

    fn newwin(&mut self, nlines: i32, ncols: i32, begy: Coord, begx: Coord) -> WindowPtr {
        unsafe { ffi::newwin(nlines, ncols, begy, begx) }
    }
    fn delwin(&mut self, win: WindowPtr) -> i32 {
        unsafe { ffi::delwin(win) }
    }
    fn newpad(&mut self, nlines: i32, ncols: i32) -> WindowPtr {
        unsafe { ffi::newpad(nlines, ncols) }
    }
    fn prefresh(&mut self, pad: WindowPtr, r: [i32; 6]) -> i32 {
        unsafe { ffi::prefresh(pad, r[0], r[1], r[2], r[3], r[4], r[5]) }
    }
    fn pnoutrefresh(&mut self, pad: WindowPtr, r: [i32; 6]) -> i32 {
        unsafe { ffi::pnoutrefresh(pad, r[0], r[1], r[2], r[3], r[4], r[5]) }
    }
    fn wrefresh(&mut self, win: WindowPtr) -> i32 {
        unsafe { ffi::wrefresh(win) }
    }
    fn wnoutrefresh(&mut self, win: WindowPtr) -> i32 {
        unsafe { ffi::wnoutrefresh(win) }
    }
    fn werase(&mut self, win: WindowPtr) -> i32 {
        unsafe { ffi::werase(win) }
    }
    fn wclear(&mut self, win: WindowPtr) -> i32 {
        unsafe { ffi::wclear(win) }
    }
    fn waddch(&mut self, win: WindowPtr, ch: ChType) -> i32 {
        unsafe { ffi::waddch(win, ch) }
    }
    fn waddstr(&mut self, win: WindowPtr, s: &str) -> i32 {
        with_c_string!(s, c => unsafe { ffi::waddstr(win, c.as_ptr()) })
    }
    fn waddnstr(&mut self, win: WindowPtr, s: &str, n: i32) -> i32 {
        with_c_string!(s, c => unsafe { ffi::waddnstr(win, c.as_ptr(), n) })
    }
    fn mvwaddstr(&mut self, win: WindowPtr, y: Coord, x: Coord, s: &str) -> i32 {
        with_c_string!(s, c => unsafe { ffi::mvwaddstr(win, y, x, c.as_ptr()) })
    }
    fn wmove(&mut self, win: WindowPtr, y: Coord, x: Coord) -> i32 {
        unsafe { ffi::wmove(win, y, x) }
    }
    fn wscrl(&mut self, win: WindowPtr, n: i32) -> i32 {
        unsafe { ffi::wscrl(win, n) }
    }
    fn wsetscrreg(&mut self, win: WindowPtr, top: i32, bottom: i32) -> i32 {
        unsafe { ffi::wsetscrreg(win, top, bottom) }
    }
    fn scrollok(&mut self, win: WindowPtr, enable: bool) -> i32 {
        unsafe { ffi::scrollok(win, enable) }
    }
    fn wattron(&mut self, win: WindowPtr, attrs: AttrT) -> i32 {
        unsafe { ffi::wattron(win, attrs) }
    }
    fn wattroff(&mut self, win: WindowPtr, attrs: AttrT) -> i32 {
        unsafe { ffi::wattroff(win, attrs) }
    }
    fn wattrset(&mut self, win: WindowPtr, attrs: AttrT) -> i32 {
        unsafe { ffi::wattrset(win, attrs) }
    }
    fn wstandout(&mut self, win: WindowPtr) -> i32 {
        unsafe { ffi::wstandout(win) }
    }
    fn wstandend(&mut self, win: WindowPtr) -> i32 {
        unsafe { ffi::wstandend(win) }
    }
    fn wcolor_set(&mut self, win: WindowPtr, pair: PairT) -> i32 {
        unsafe { ffi::wcolor_set(win, pair, std::ptr::null_mut()) }
    }
    fn wbkgd(&mut self, win: WindowPtr, ch: ChType) -> i32 {
        unsafe { ffi::wbkgd(win, ch) }
    }
    fn wbkgdset(&mut self, win: WindowPtr, ch: ChType) {
        unsafe { ffi::wbkgdset(win, ch) }
    }
    fn wborder(&mut self, win: WindowPtr, s: [ChType; 8]) -> i32 {
        unsafe { ffi::wborder(win, s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7]) }
    }
    fn whline(&mut self, win: WindowPtr, ch: ChType, n: i32) -> i32 {
        unsafe { ffi::whline(win, ch, n) }
    }
    fn wvline(&mut self, win: WindowPtr, ch: ChType, n: i32) -> i32 {
        unsafe { ffi::wvline(win, ch, n) }
    }
    fn getyx(&self, win: WindowPtr) -> (Coord, Coord) {
        unsafe { (ffi::getcury(win), ffi::getcurx(win)) }
    }
    fn getmaxyx(&self, win: WindowPtr) -> (Coord, Coord) {
        unsafe { (ffi::getmaxy(win), ffi::getmaxx(win)) }
    }

    #[cfg(feature = "mouse")]
    fn mousemask(&mut self, newmask: MmaskT) -> (MmaskT, MmaskT) {
        let mut oldmask: MmaskT = 0;
        let granted = unsafe { ffi::mousemask(newmask, &mut oldmask) };
        (granted, oldmask)
    }
    #[cfg(feature = "mouse")]
    fn getmouse(&mut self) -> Option<MouseEvent> {
        let mut raw = ffi::MEVENT::default();
        let rc = unsafe { ffi::getmouse(&mut raw) };
        (rc == crate::types::OK).then(|| MouseEvent {
            id: raw.id,
            x: raw.x,
            y: raw.y,
            z: raw.z,
            bstate: crate::mouse::MouseMask::from_bits_retain(raw.bstate),
        })
    }
    #[cfg(feature = "mouse")]
    fn ungetmouse(&mut self, event: MouseEvent) -> i32 {
        let raw = ffi::MEVENT {
            id: event.id,
            x: event.x,
            y: event.y,
            z: event.z,
            bstate: event.bstate.bits(),
        };
        unsafe { ffi::ungetmouse(&raw) }
    }
    #[cfg(feature = "mouse")]
    fn mouseinterval(&mut self, interval: i32) -> i32 {
        unsafe { ffi::mouseinterval(interval) }
    }
    #[cfg(feature = "mouse")]
    fn mouse_trafo(&mut self, y: Coord, x: Coord, to_screen: bool) -> Option<(Coord, Coord)> {
        let (mut ny, mut nx) = (y, x);
        let hit = unsafe { ffi::mouse_trafo(&mut ny, &mut nx, to_screen) };
        hit.then_some((ny, nx))
    }
    #[cfg(feature = "mouse")]
    fn wmouse_trafo(
        &mut self,
        win: WindowPtr,
        y: Coord,
        x: Coord,
        to_screen: bool,
    ) -> Option<(Coord, Coord)> {
        let (mut ny, mut nx) = (y, x);
        let hit = unsafe { ffi::wmouse_trafo(win, &mut ny, &mut nx, to_screen) };
        hit.then_some((ny, nx))
    }

    #[cfg(feature = "slk")]
    fn slk_init(&mut self, fmt: i32) -> i32 {
        unsafe { ffi::slk_init(fmt) }
    }
    #[cfg(feature = "slk")]
    fn slk_set(&mut self, labnum: i32, label: &str, fmt: i32) -> i32 {
        with_c_string!(label, c => unsafe { ffi::slk_set(labnum, c.as_ptr(), fmt) })
    }
    #[cfg(feature = "slk")]
    fn slk_refresh(&mut self) -> i32 {
        unsafe { ffi::slk_refresh() }
    }
    #[cfg(feature = "slk")]
    fn slk_noutrefresh(&mut self) -> i32 {
        unsafe { ffi::slk_noutrefresh() }
    }
    #[cfg(feature = "slk")]
    fn slk_clear(&mut self) -> i32 {
        unsafe { ffi::slk_clear() }
    }
    #[cfg(feature = "slk")]
    fn slk_restore(&mut self) -> i32 {
        unsafe { ffi::slk_restore() }
    }
    #[cfg(feature = "slk")]
    fn slk_touch(&mut self) -> i32 {
        unsafe { ffi::slk_touch() }
    }
    #[cfg(feature = "slk")]
    fn slk_attron(&mut self, attrs: AttrT) -> i32 {
        unsafe { ffi::slk_attron(attrs) }
    }
    #[cfg(feature = "slk")]
    fn slk_attroff(&mut self, attrs: AttrT) -> i32 {
        unsafe { ffi::slk_attroff(attrs) }
    }
    #[cfg(feature = "slk")]
    fn slk_attrset(&mut self, attrs: AttrT) -> i32 {
        unsafe { ffi::slk_attrset(attrs) }
    }
    #[cfg(feature = "slk")]
    fn slk_attr(&self) -> AttrT {
        unsafe { ffi::slk_attr() }
    }
    #[cfg(feature = "slk")]
    fn slk_color(&mut self, pair: PairT) -> i32 {
        unsafe { ffi::slk_color(pair) }
    }

    #[cfg(feature = "panels")]
    fn new_panel(&mut self, win: WindowPtr) -> PanelPtr {
        unsafe { ffi::new_panel(win) }
    }
    #[cfg(feature = "panels")]
    fn del_panel(&mut self, panel: PanelPtr) -> i32 {
        unsafe { ffi::del_panel(panel) }
    }
    #[cfg(feature = "panels")]
    fn hide_panel(&mut self, panel: PanelPtr) -> i32 {
        unsafe { ffi::hide_panel(panel) }
    }
    #[cfg(feature = "panels")]
    fn show_panel(&mut self, panel: PanelPtr) -> i32 {
        unsafe { ffi::show_panel(panel) }
    }
    #[cfg(feature = "panels")]
    fn top_panel(&mut self, panel: PanelPtr) -> i32 {
        unsafe { ffi::top_panel(panel) }
    }
    #[cfg(feature = "panels")]
    fn bottom_panel(&mut self, panel: PanelPtr) -> i32 {
        unsafe { ffi::bottom_panel(panel) }
    }
    #[cfg(feature = "panels")]
    fn move_panel(&mut self, panel: PanelPtr, starty: Coord, startx: Coord) -> i32 {
        unsafe { ffi::move_panel(panel, starty, startx) }
    }
    #[cfg(feature = "panels")]
    fn replace_panel(&mut self, panel: PanelPtr, win: WindowPtr) -> i32 {
        unsafe { ffi::replace_panel(panel, win) }
    }
    #[cfg(feature = "panels")]
    fn panel_above(&self, panel: Option<PanelPtr>) -> PanelPtr {
        unsafe { ffi::panel_above(panel.unwrap_or(std::ptr::null_mut())) }
    }
    #[cfg(feature = "panels")]
    fn panel_below(&self, panel: Option<PanelPtr>) -> PanelPtr {
        unsafe { ffi::panel_below(panel.unwrap_or(std::ptr::null_mut())) }
    }
    #[cfg(feature = "panels")]
    fn panel_window(&self, panel: PanelPtr) -> WindowPtr {
        unsafe { ffi::panel_window(panel) }
    }
    #[cfg(feature = "panels")]
    fn update_panels(&mut self) {
        unsafe { ffi::update_panels() }
    }
}

/// Append the `chtype` string terminator expected by the native API.
fn chtype_buffer(chstr: &[ChType]) -> Vec<ChType> {
    let mut buf = Vec::with_capacity(chstr.len() + 1);
    buf.extend_from_slice(chstr);
    buf.push(0);
    buf
}
