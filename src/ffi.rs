//! Raw FFI declarations for the native ncurses library.
//!
//! Nothing in this module is public outside the crate. The only consumer
//! is [`LibCurses`](crate::native::LibCurses), which wraps every call in
//! a safe method of the [`Native`](crate::native::Native) trait.
//!
//! # Safety
//!
//! All declarations follow the documented ncurses ABI: `chtype` and
//! `mmask_t` are 32-bit unsigned integers, coordinates are C ints, and
//! colors are C shorts. `WINDOW` and `PANEL` are opaque; the binding only
//! ever moves their pointers around.

#![allow(non_camel_case_types)]

use crate::types::{AttrT, ChType, MmaskT};
use libc::{c_char, c_int, c_short};

/// Opaque native window structure.
#[repr(C)]
pub struct WINDOW {
    _opaque: [u8; 0],
}

/// Opaque native panel structure.
#[cfg(feature = "panels")]
#[repr(C)]
pub struct PANEL {
    _opaque: [u8; 0],
}

/// Native mouse event record, field-for-field.
#[cfg(feature = "mouse")]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct MEVENT {
    pub id: c_short,
    pub x: c_int,
    pub y: c_int,
    pub z: c_int,
    pub bstate: MmaskT,
}

extern "C" {
    // ------------------------------------------------------------------
    // Globals
    // ------------------------------------------------------------------
    pub static LINES: c_int;
    pub static COLS: c_int;
    pub static acs_map: [ChType; 128];

    // ------------------------------------------------------------------
    // Lifecycle and modes
    // ------------------------------------------------------------------
    pub fn initscr() -> *mut WINDOW;
    pub fn endwin() -> c_int;
    pub fn isendwin() -> bool;
    pub fn cbreak() -> c_int;
    pub fn nocbreak() -> c_int;
    pub fn echo() -> c_int;
    pub fn noecho() -> c_int;
    pub fn raw() -> c_int;
    pub fn noraw() -> c_int;
    pub fn nl() -> c_int;
    pub fn nonl() -> c_int;
    pub fn halfdelay(tenths: c_int) -> c_int;
    pub fn timeout(delay: c_int);
    pub fn typeahead(fd: c_int) -> c_int;
    pub fn flushinp() -> c_int;
    pub fn qiflush();
    pub fn noqiflush();
    pub fn meta(win: *mut WINDOW, bf: bool) -> c_int;
    pub fn keypad(win: *mut WINDOW, bf: bool) -> c_int;
    pub fn napms(ms: c_int) -> c_int;
    pub fn delay_output(ms: c_int) -> c_int;
    pub fn use_env(bf: bool);
    pub fn use_extended_names(bf: bool) -> c_int;
    pub fn filter();
    pub fn def_prog_mode() -> c_int;
    pub fn def_shell_mode() -> c_int;
    pub fn reset_prog_mode() -> c_int;
    pub fn reset_shell_mode() -> c_int;
    pub fn savetty() -> c_int;
    pub fn resetty() -> c_int;
    pub fn curs_set(visibility: c_int) -> c_int;
    pub fn mvcur(oldy: c_int, oldx: c_int, newy: c_int, newx: c_int) -> c_int;
    pub fn baudrate() -> c_int;
    pub fn beep() -> c_int;
    pub fn flash() -> c_int;
    pub fn termattrs() -> ChType;
    pub fn termname() -> *const c_char;
    pub fn longname() -> *const c_char;
    pub fn erasechar() -> c_char;
    pub fn killchar() -> c_char;
    pub fn putp(s: *const c_char) -> c_int;
    pub fn vidattr(attrs: ChType) -> c_int;
    pub fn scr_dump(filename: *const c_char) -> c_int;
    pub fn scr_init(filename: *const c_char) -> c_int;
    pub fn scr_restore(filename: *const c_char) -> c_int;
    pub fn scr_set(filename: *const c_char) -> c_int;

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------
    pub fn getch() -> c_int;
    pub fn mvgetch(y: c_int, x: c_int) -> c_int;
    pub fn wgetch(win: *mut WINDOW) -> c_int;
    pub fn ungetch(ch: c_int) -> c_int;
    pub fn has_key(ch: c_int) -> bool;
    pub fn has_ic() -> bool;
    pub fn has_il() -> bool;
    pub fn define_key(definition: *const c_char, keycode: c_int) -> c_int;
    pub fn keyok(keycode: c_int, enable: bool) -> c_int;

    // ------------------------------------------------------------------
    // Screen-global output
    // ------------------------------------------------------------------
    pub fn addch(ch: ChType) -> c_int;
    pub fn mvaddch(y: c_int, x: c_int, ch: ChType) -> c_int;
    pub fn echochar(ch: ChType) -> c_int;
    pub fn addstr(s: *const c_char) -> c_int;
    pub fn addnstr(s: *const c_char, n: c_int) -> c_int;
    pub fn mvaddstr(y: c_int, x: c_int, s: *const c_char) -> c_int;
    pub fn mvaddnstr(y: c_int, x: c_int, s: *const c_char, n: c_int) -> c_int;
    pub fn addchstr(chstr: *const ChType) -> c_int;
    pub fn addchnstr(chstr: *const ChType, n: c_int) -> c_int;
    pub fn mvaddchstr(y: c_int, x: c_int, chstr: *const ChType) -> c_int;
    pub fn mvaddchnstr(y: c_int, x: c_int, chstr: *const ChType, n: c_int) -> c_int;
    #[link_name = "move"]
    pub fn mv(y: c_int, x: c_int) -> c_int;
    pub fn clear() -> c_int;
    pub fn erase() -> c_int;
    pub fn clrtobot() -> c_int;
    pub fn clrtoeol() -> c_int;
    pub fn delch() -> c_int;
    pub fn mvdelch(y: c_int, x: c_int) -> c_int;
    pub fn deleteln() -> c_int;
    pub fn insertln() -> c_int;
    pub fn insch(ch: ChType) -> c_int;
    pub fn insstr(s: *const c_char) -> c_int;
    pub fn insdelln(n: c_int) -> c_int;
    pub fn inch() -> ChType;
    pub fn mvinch(y: c_int, x: c_int) -> ChType;
    pub fn innstr(s: *mut c_char, n: c_int) -> c_int;
    pub fn scrl(n: c_int) -> c_int;
    pub fn refresh() -> c_int;
    pub fn doupdate() -> c_int;
    pub fn standout() -> c_int;
    pub fn standend() -> c_int;
    pub fn border(
        ls: ChType,
        rs: ChType,
        ts: ChType,
        bs: ChType,
        tl: ChType,
        tr: ChType,
        bl: ChType,
        br: ChType,
    ) -> c_int;
    pub fn hline(ch: ChType, n: c_int) -> c_int;
    pub fn vline(ch: ChType, n: c_int) -> c_int;
    pub fn mvhline(y: c_int, x: c_int, ch: ChType, n: c_int) -> c_int;
    pub fn mvvline(y: c_int, x: c_int, ch: ChType, n: c_int) -> c_int;

    // ------------------------------------------------------------------
    // Attributes and color
    // ------------------------------------------------------------------
    pub fn attron(attrs: AttrT) -> c_int;
    pub fn attroff(attrs: AttrT) -> c_int;
    pub fn attrset(attrs: AttrT) -> c_int;
    pub fn bkgd(ch: ChType) -> c_int;
    pub fn bkgdset(ch: ChType);
    pub fn color_set(pair: c_short, opts: *mut libc::c_void) -> c_int;
    pub fn start_color() -> c_int;
    pub fn has_colors() -> bool;
    pub fn can_change_color() -> bool;
    pub fn init_pair(pair: c_short, fg: c_short, bg: c_short) -> c_int;
    pub fn init_color(color: c_short, r: c_short, g: c_short, b: c_short) -> c_int;
    pub fn color_content(
        color: c_short,
        r: *mut c_short,
        g: *mut c_short,
        b: *mut c_short,
    ) -> c_int;
    pub fn pair_content(pair: c_short, fg: *mut c_short, bg: *mut c_short) -> c_int;
    pub fn use_default_colors() -> c_int;
    pub fn assume_default_colors(fg: c_int, bg: c_int) -> c_int;

    // ------------------------------------------------------------------
    // Windows and pads
    // ------------------------------------------------------------------
    pub fn newwin(nlines: c_int, ncols: c_int, begy: c_int, begx: c_int) -> *mut WINDOW;
    pub fn delwin(win: *mut WINDOW) -> c_int;
    pub fn newpad(nlines: c_int, ncols: c_int) -> *mut WINDOW;
    pub fn prefresh(
        pad: *mut WINDOW,
        pminrow: c_int,
        pmincol: c_int,
        sminrow: c_int,
        smincol: c_int,
        smaxrow: c_int,
        smaxcol: c_int,
    ) -> c_int;
    pub fn pnoutrefresh(
        pad: *mut WINDOW,
        pminrow: c_int,
        pmincol: c_int,
        sminrow: c_int,
        smincol: c_int,
        smaxrow: c_int,
        smaxcol: c_int,
    ) -> c_int;
    pub fn wrefresh(win: *mut WINDOW) -> c_int;
    pub fn wnoutrefresh(win: *mut WINDOW) -> c_int;
    pub fn werase(win: *mut WINDOW) -> c_int;
    pub fn wclear(win: *mut WINDOW) -> c_int;
    pub fn waddch(win: *mut WINDOW, ch: ChType) -> c_int;
    pub fn waddstr(win: *mut WINDOW, s: *const c_char) -> c_int;
    pub fn waddnstr(win: *mut WINDOW, s: *const c_char, n: c_int) -> c_int;
    pub fn mvwaddstr(win: *mut WINDOW, y: c_int, x: c_int, s: *const c_char) -> c_int;
    pub fn wmove(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;
    pub fn wscrl(win: *mut WINDOW, n: c_int) -> c_int;
    pub fn wsetscrreg(win: *mut WINDOW, top: c_int, bottom: c_int) -> c_int;
    pub fn scrollok(win: *mut WINDOW, bf: bool) -> c_int;
    pub fn wattron(win: *mut WINDOW, attrs: AttrT) -> c_int;
    pub fn wattroff(win: *mut WINDOW, attrs: AttrT) -> c_int;
    pub fn wattrset(win: *mut WINDOW, attrs: AttrT) -> c_int;
    pub fn wstandout(win: *mut WINDOW) -> c_int;
    pub fn wstandend(win: *mut WINDOW) -> c_int;
    pub fn wcolor_set(win: *mut WINDOW, pair: c_short, opts: *mut libc::c_void) -> c_int;
    pub fn wbkgd(win: *mut WINDOW, ch: ChType) -> c_int;
    pub fn wbkgdset(win: *mut WINDOW, ch: ChType);
    pub fn wborder(
        win: *mut WINDOW,
        ls: ChType,
        rs: ChType,
        ts: ChType,
        bs: ChType,
        tl: ChType,
        tr: ChType,
        bl: ChType,
        br: ChType,
    ) -> c_int;
    pub fn whline(win: *mut WINDOW, ch: ChType, n: c_int) -> c_int;
    pub fn wvline(win: *mut WINDOW, ch: ChType, n: c_int) -> c_int;
    pub fn getcury(win: *const WINDOW) -> c_int;
    pub fn getcurx(win: *const WINDOW) -> c_int;
    pub fn getmaxy(win: *const WINDOW) -> c_int;
    pub fn getmaxx(win: *const WINDOW) -> c_int;

    // ------------------------------------------------------------------
    // Mouse
    // ------------------------------------------------------------------
    #[cfg(feature = "mouse")]
    pub fn mousemask(newmask: MmaskT, oldmask: *mut MmaskT) -> MmaskT;
    #[cfg(feature = "mouse")]
    pub fn getmouse(event: *mut MEVENT) -> c_int;
    #[cfg(feature = "mouse")]
    pub fn ungetmouse(event: *const MEVENT) -> c_int;
    #[cfg(feature = "mouse")]
    pub fn mouseinterval(interval: c_int) -> c_int;
    #[cfg(feature = "mouse")]
    pub fn mouse_trafo(y: *mut c_int, x: *mut c_int, to_screen: bool) -> bool;
    #[cfg(feature = "mouse")]
    pub fn wmouse_trafo(win: *const WINDOW, y: *mut c_int, x: *mut c_int, to_screen: bool)
        -> bool;

    // ------------------------------------------------------------------
    // Soft label keys
    // ------------------------------------------------------------------
    #[cfg(feature = "slk")]
    pub fn slk_init(fmt: c_int) -> c_int;
    #[cfg(feature = "slk")]
    pub fn slk_set(labnum: c_int, label: *const c_char, fmt: c_int) -> c_int;
    #[cfg(feature = "slk")]
    pub fn slk_refresh() -> c_int;
    #[cfg(feature = "slk")]
    pub fn slk_noutrefresh() -> c_int;
    #[cfg(feature = "slk")]
    pub fn slk_clear() -> c_int;
    #[cfg(feature = "slk")]
    pub fn slk_restore() -> c_int;
    #[cfg(feature = "slk")]
    pub fn slk_touch() -> c_int;
    #[cfg(feature = "slk")]
    pub fn slk_attron(attrs: AttrT) -> c_int;
    #[cfg(feature = "slk")]
    pub fn slk_attroff(attrs: AttrT) -> c_int;
    #[cfg(feature = "slk")]
    pub fn slk_attrset(attrs: AttrT) -> c_int;
    #[cfg(feature = "slk")]
    pub fn slk_attr() -> AttrT;
    #[cfg(feature = "slk")]
    pub fn slk_color(pair: c_short) -> c_int;
}

#[cfg(feature = "panels")]
extern "C" {
    pub fn new_panel(win: *mut WINDOW) -> *mut PANEL;
    pub fn del_panel(panel: *mut PANEL) -> c_int;
    pub fn hide_panel(panel: *mut PANEL) -> c_int;
    pub fn show_panel(panel: *mut PANEL) -> c_int;
    pub fn top_panel(panel: *mut PANEL) -> c_int;
    pub fn bottom_panel(panel: *mut PANEL) -> c_int;
    pub fn move_panel(panel: *mut PANEL, starty: c_int, startx: c_int) -> c_int;
    pub fn replace_panel(panel: *mut PANEL, win: *mut WINDOW) -> c_int;
    pub fn panel_above(panel: *const PANEL) -> *mut PANEL;
    pub fn panel_below(panel: *const PANEL) -> *mut PANEL;
    pub fn panel_window(panel: *const PANEL) -> *mut WINDOW;
    pub fn update_panels();
}
