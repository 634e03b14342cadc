//! Integration tests for ncurses-bridge
//!
//! These tests run the full adapter stack over an instrumented backend
//! instead of the real native library, so they can assert exactly which
//! native calls each operation performs (and, just as important, which
//! calls it does *not* perform).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ncurses_bridge::native::{Native, WindowPtr};
use ncurses_bridge::{Curses, Error};

#[cfg(feature = "panels")]
use ncurses_bridge::native::PanelPtr;
#[cfg(feature = "panels")]
use ncurses_bridge::ResourceKind;

#[cfg(feature = "mouse")]
use ncurses_bridge::types::MmaskT;
#[cfg(feature = "mouse")]
use ncurses_bridge::{MouseEvent, MouseMask};

use ncurses_bridge::types::{AttrT, ChType, ColorT, Coord, PairT, OK};

type CallLog = Rc<RefCell<Vec<&'static str>>>;

/// Backend double that fabricates handles and records every call.
struct SpyNative {
    calls: CallLog,
    next_handle: Cell<usize>,
    fail_initscr: Cell<bool>,
    #[cfg(feature = "panels")]
    panels: RefCell<Vec<(usize, usize)>>, // (panel, window it displays)
}

impl SpyNative {
    fn new() -> (Self, CallLog) {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let spy = SpyNative {
            calls: Rc::clone(&calls),
            next_handle: Cell::new(0x1000),
            fail_initscr: Cell::new(false),
            #[cfg(feature = "panels")]
            panels: RefCell::new(Vec::new()),
        };
        (spy, calls)
    }

    fn record(&self, name: &'static str) {
        self.calls.borrow_mut().push(name);
    }

    fn fresh_handle(&self) -> usize {
        let addr = self.next_handle.get();
        self.next_handle.set(addr + 0x40);
        addr
    }
}

fn count(calls: &CallLog, name: &str) -> usize {
    calls.borrow().iter().filter(|c| **c == name).count()
}

/// Implements `&mut self` methods that return a plain OK status.
macro_rules! spy_status {
    ($($name:ident($($arg:ident: $ty:ty),*)),+ $(,)?) => {
        $(fn $name(&mut self, $($arg: $ty),*) -> i32 {
            let _ = ($($arg,)*);
            self.record(stringify!($name));
            OK
        })+
    };
}

/// Implements `&mut self` methods that return nothing.
macro_rules! spy_void {
    ($($name:ident($($arg:ident: $ty:ty),*)),+ $(,)?) => {
        $(fn $name(&mut self, $($arg: $ty),*) {
            let _ = ($($arg,)*);
            self.record(stringify!($name));
        })+
    };
}

impl Native for SpyNative {
    fn initscr(&mut self) -> WindowPtr {
        self.record("initscr");
        if self.fail_initscr.get() {
            return std::ptr::null_mut();
        }
        self.fresh_handle() as WindowPtr
    }
    fn isendwin(&self) -> bool {
        self.record("isendwin");
        false
    }
    fn lines(&self) -> i32 {
        24
    }
    fn cols(&self) -> i32 {
        80
    }
    fn acs_char(&self, vt100: u8) -> ChType {
        // Distinct per-glyph values so the constant table is checkable.
        0x0040_0000 | vt100 as ChType
    }

    spy_status! {
        endwin(), cbreak(), nocbreak(), echo(), noecho(), raw(), noraw(),
        nl(), nonl(), halfdelay(tenths: i32), typeahead(fd: i32),
        flushinp(), meta(win: WindowPtr, enable: bool),
        keypad(win: WindowPtr, enable: bool), napms(ms: i32),
        delay_output(ms: i32), use_extended_names(flag: bool),
        ungetch(ch: i32), define_key(definition: &str, keycode: i32),
        keyok(keycode: i32, enable: bool),
        def_prog_mode(), def_shell_mode(), reset_prog_mode(),
        reset_shell_mode(), savetty(), resetty(),
        mvcur(oldy: Coord, oldx: Coord, newy: Coord, newx: Coord),
        beep(), flash(), putp(s: &str), vidattr(attrs: ChType),
        scr_dump(filename: &str), scr_init(filename: &str),
        scr_restore(filename: &str), scr_set(filename: &str),
        addch(ch: ChType), mvaddch(y: Coord, x: Coord, ch: ChType),
        echochar(ch: ChType), addstr(s: &str), addnstr(s: &str, n: i32),
        mvaddstr(y: Coord, x: Coord, s: &str),
        mvaddnstr(y: Coord, x: Coord, s: &str, n: i32),
        addchstr(chstr: &[ChType]), addchnstr(chstr: &[ChType], n: i32),
        mvaddchstr(y: Coord, x: Coord, chstr: &[ChType]),
        mvaddchnstr(y: Coord, x: Coord, chstr: &[ChType], n: i32),
        mv(y: Coord, x: Coord), clear(), erase(), clrtobot(), clrtoeol(),
        delch(), mvdelch(y: Coord, x: Coord), deleteln(), insertln(),
        insch(ch: ChType), insstr(s: &str), insdelln(n: i32),
        scrl(n: i32), refresh(), doupdate(), standout(), standend(),
        border(sides: [ChType; 8]), hline(ch: ChType, n: i32),
        vline(ch: ChType, n: i32),
        mvhline(y: Coord, x: Coord, ch: ChType, n: i32),
        mvvline(y: Coord, x: Coord, ch: ChType, n: i32),
        attron(attrs: AttrT), attroff(attrs: AttrT), attrset(attrs: AttrT),
        bkgd(ch: ChType), color_set(pair: PairT), start_color(),
        init_pair(pair: PairT, fg: ColorT, bg: ColorT),
        init_color(color: ColorT, r: ColorT, g: ColorT, b: ColorT),
        use_default_colors(), assume_default_colors(fg: i32, bg: i32),
        delwin(win: WindowPtr),
        prefresh(pad: WindowPtr, region: [i32; 6]),
        pnoutrefresh(pad: WindowPtr, region: [i32; 6]),
        wrefresh(win: WindowPtr), wnoutrefresh(win: WindowPtr),
        werase(win: WindowPtr), wclear(win: WindowPtr),
        waddch(win: WindowPtr, ch: ChType), waddstr(win: WindowPtr, s: &str),
        waddnstr(win: WindowPtr, s: &str, n: i32),
        mvwaddstr(win: WindowPtr, y: Coord, x: Coord, s: &str),
        wmove(win: WindowPtr, y: Coord, x: Coord),
        wscrl(win: WindowPtr, n: i32),
        wsetscrreg(win: WindowPtr, top: i32, bottom: i32),
        scrollok(win: WindowPtr, enable: bool),
        wattron(win: WindowPtr, attrs: AttrT),
        wattroff(win: WindowPtr, attrs: AttrT),
        wattrset(win: WindowPtr, attrs: AttrT),
        wstandout(win: WindowPtr), wstandend(win: WindowPtr),
        wcolor_set(win: WindowPtr, pair: PairT),
        wbkgd(win: WindowPtr, ch: ChType),
        wborder(win: WindowPtr, sides: [ChType; 8]),
        whline(win: WindowPtr, ch: ChType, n: i32),
        wvline(win: WindowPtr, ch: ChType, n: i32),
    }

    spy_void! {
        timeout(delay: i32), qiflush(), noqiflush(), use_env(flag: bool),
        filter(), bkgdset(ch: ChType), wbkgdset(win: WindowPtr, ch: ChType),
    }

    fn getch(&mut self) -> i32 {
        self.record("getch");
        10
    }
    fn mvgetch(&mut self, _y: Coord, _x: Coord) -> i32 {
        self.record("mvgetch");
        10
    }
    fn wgetch(&mut self, _win: WindowPtr) -> i32 {
        self.record("wgetch");
        10
    }
    fn has_key(&self, _ch: i32) -> bool {
        self.record("has_key");
        true
    }
    fn has_ic(&self) -> bool {
        true
    }
    fn has_il(&self) -> bool {
        true
    }
    fn curs_set(&mut self, _visibility: i32) -> i32 {
        self.record("curs_set");
        1
    }
    fn baudrate(&self) -> i32 {
        38400
    }
    fn termattrs(&self) -> ChType {
        0
    }
    fn termname(&self) -> String {
        "spyterm".to_string()
    }
    fn longname(&self) -> String {
        "instrumented test terminal".to_string()
    }
    fn erasechar(&self) -> u8 {
        0x7f
    }
    fn killchar(&self) -> u8 {
        0x15
    }
    fn inch(&mut self) -> ChType {
        self.record("inch");
        'a' as ChType
    }
    fn mvinch(&mut self, _y: Coord, _x: Coord) -> ChType {
        self.record("mvinch");
        'a' as ChType
    }
    fn innstr(&mut self, n: i32) -> (i32, String) {
        self.record("innstr");
        // Echo the requested length back so tests can see the buffer size.
        (OK, format!("line:{n}"))
    }
    fn has_colors(&self) -> bool {
        true
    }
    fn can_change_color(&self) -> bool {
        false
    }
    fn color_content(&mut self, _color: ColorT) -> (i32, ColorT, ColorT, ColorT) {
        self.record("color_content");
        (OK, 1000, 0, 0)
    }
    fn pair_content(&mut self, _pair: PairT) -> (i32, ColorT, ColorT) {
        self.record("pair_content");
        (OK, 1, 0)
    }
    fn newwin(&mut self, _nlines: i32, _ncols: i32, _begy: Coord, _begx: Coord) -> WindowPtr {
        self.record("newwin");
        self.fresh_handle() as WindowPtr
    }
    fn newpad(&mut self, _nlines: i32, _ncols: i32) -> WindowPtr {
        self.record("newpad");
        self.fresh_handle() as WindowPtr
    }
    fn getyx(&self, _win: WindowPtr) -> (Coord, Coord) {
        (5, 10)
    }
    fn getmaxyx(&self, _win: WindowPtr) -> (Coord, Coord) {
        (24, 80)
    }

    #[cfg(feature = "mouse")]
    fn mousemask(&mut self, newmask: MmaskT) -> (MmaskT, MmaskT) {
        self.record("mousemask");
        (newmask & MouseMask::ALL_MOUSE_EVENTS.bits(), 0)
    }
    #[cfg(feature = "mouse")]
    fn getmouse(&mut self) -> Option<MouseEvent> {
        self.record("getmouse");
        Some(MouseEvent {
            id: 1,
            x: 3,
            y: 4,
            z: 0,
            bstate: MouseMask::BUTTON1_CLICKED,
        })
    }
    #[cfg(feature = "mouse")]
    fn ungetmouse(&mut self, _event: MouseEvent) -> i32 {
        self.record("ungetmouse");
        OK
    }
    #[cfg(feature = "mouse")]
    fn mouseinterval(&mut self, _interval: i32) -> i32 {
        self.record("mouseinterval");
        200
    }
    #[cfg(feature = "mouse")]
    fn mouse_trafo(&mut self, y: Coord, x: Coord, _to_screen: bool) -> Option<(Coord, Coord)> {
        self.record("mouse_trafo");
        Some((y, x))
    }
    #[cfg(feature = "mouse")]
    fn wmouse_trafo(
        &mut self,
        _win: WindowPtr,
        y: Coord,
        x: Coord,
        _to_screen: bool,
    ) -> Option<(Coord, Coord)> {
        self.record("wmouse_trafo");
        Some((y - 1, x - 1))
    }

    #[cfg(feature = "slk")]
    fn slk_init(&mut self, _fmt: i32) -> i32 {
        self.record("slk_init");
        OK
    }
    #[cfg(feature = "slk")]
    fn slk_set(&mut self, _labnum: i32, _label: &str, _fmt: i32) -> i32 {
        self.record("slk_set");
        OK
    }
    #[cfg(feature = "slk")]
    fn slk_refresh(&mut self) -> i32 {
        self.record("slk_refresh");
        OK
    }
    #[cfg(feature = "slk")]
    fn slk_noutrefresh(&mut self) -> i32 {
        self.record("slk_noutrefresh");
        OK
    }
    #[cfg(feature = "slk")]
    fn slk_clear(&mut self) -> i32 {
        self.record("slk_clear");
        OK
    }
    #[cfg(feature = "slk")]
    fn slk_restore(&mut self) -> i32 {
        self.record("slk_restore");
        OK
    }
    #[cfg(feature = "slk")]
    fn slk_touch(&mut self) -> i32 {
        self.record("slk_touch");
        OK
    }
    #[cfg(feature = "slk")]
    fn slk_attron(&mut self, _attrs: AttrT) -> i32 {
        self.record("slk_attron");
        OK
    }
    #[cfg(feature = "slk")]
    fn slk_attroff(&mut self, _attrs: AttrT) -> i32 {
        self.record("slk_attroff");
        OK
    }
    #[cfg(feature = "slk")]
    fn slk_attrset(&mut self, _attrs: AttrT) -> i32 {
        self.record("slk_attrset");
        OK
    }
    #[cfg(feature = "slk")]
    fn slk_attr(&self) -> AttrT {
        0
    }
    #[cfg(feature = "slk")]
    fn slk_color(&mut self, _pair: PairT) -> i32 {
        self.record("slk_color");
        OK
    }

    #[cfg(feature = "panels")]
    fn new_panel(&mut self, win: WindowPtr) -> PanelPtr {
        self.record("new_panel");
        let panel = self.fresh_handle();
        self.panels.borrow_mut().push((panel, win as usize));
        panel as PanelPtr
    }
    #[cfg(feature = "panels")]
    fn del_panel(&mut self, panel: PanelPtr) -> i32 {
        self.record("del_panel");
        self.panels.borrow_mut().retain(|(p, _)| *p != panel as usize);
        OK
    }
    #[cfg(feature = "panels")]
    fn hide_panel(&mut self, _panel: PanelPtr) -> i32 {
        self.record("hide_panel");
        OK
    }
    #[cfg(feature = "panels")]
    fn show_panel(&mut self, _panel: PanelPtr) -> i32 {
        self.record("show_panel");
        OK
    }
    #[cfg(feature = "panels")]
    fn top_panel(&mut self, _panel: PanelPtr) -> i32 {
        self.record("top_panel");
        OK
    }
    #[cfg(feature = "panels")]
    fn bottom_panel(&mut self, _panel: PanelPtr) -> i32 {
        self.record("bottom_panel");
        OK
    }
    #[cfg(feature = "panels")]
    fn move_panel(&mut self, _panel: PanelPtr, _starty: Coord, _startx: Coord) -> i32 {
        self.record("move_panel");
        OK
    }
    #[cfg(feature = "panels")]
    fn replace_panel(&mut self, panel: PanelPtr, win: WindowPtr) -> i32 {
        self.record("replace_panel");
        for entry in self.panels.borrow_mut().iter_mut() {
            if entry.0 == panel as usize {
                entry.1 = win as usize;
            }
        }
        OK
    }
    #[cfg(feature = "panels")]
    fn panel_above(&self, panel: Option<PanelPtr>) -> PanelPtr {
        self.record("panel_above");
        // Bottom of the spy stack is the first panel created.
        let panels = self.panels.borrow();
        let next = match panel {
            None => panels.first().map(|(p, _)| *p),
            Some(ptr) => {
                let pos = panels.iter().position(|(p, _)| *p == ptr as usize);
                pos.and_then(|i| panels.get(i + 1)).map(|(p, _)| *p)
            }
        };
        next.map_or(std::ptr::null_mut(), |p| p as PanelPtr)
    }
    #[cfg(feature = "panels")]
    fn panel_below(&self, panel: Option<PanelPtr>) -> PanelPtr {
        self.record("panel_below");
        let panels = self.panels.borrow();
        let next = match panel {
            None => panels.last().map(|(p, _)| *p),
            Some(ptr) => {
                let pos = panels.iter().position(|(p, _)| *p == ptr as usize);
                match pos {
                    Some(i) if i > 0 => panels.get(i - 1).map(|(p, _)| *p),
                    _ => None,
                }
            }
        };
        next.map_or(std::ptr::null_mut(), |p| p as PanelPtr)
    }
    #[cfg(feature = "panels")]
    fn panel_window(&self, panel: PanelPtr) -> WindowPtr {
        self.record("panel_window");
        self.panels
            .borrow()
            .iter()
            .find(|(p, _)| *p == panel as usize)
            .map_or(std::ptr::null_mut(), |(_, w)| *w as WindowPtr)
    }
    #[cfg(feature = "panels")]
    fn update_panels(&mut self) {
        self.record("update_panels");
    }
}

fn initialized() -> (Curses<SpyNative>, CallLog) {
    let (spy, calls) = SpyNative::new();
    let mut curses = Curses::with_native(spy);
    curses.init().unwrap();
    (curses, calls)
}

// ============================================================================
// Initialization gate
// ============================================================================

/// Every stateful operation fails before init, without touching the
/// native library.
#[test]
fn test_operations_rejected_before_init() {
    let (spy, calls) = SpyNative::new();
    let mut curses = Curses::with_native(spy);

    assert_eq!(curses.addstr("hi"), Err(Error::NotInitialized));
    assert_eq!(curses.refresh(), Err(Error::NotInitialized));
    assert_eq!(curses.getch(), Err(Error::NotInitialized));
    assert_eq!(curses.newwin(10, 20, 0, 0).unwrap_err(), Error::NotInitialized);
    assert_eq!(curses.start_color(), Err(Error::NotInitialized));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_init_sets_up_screen_modes() {
    let (curses, calls) = initialized();
    assert!(curses.is_initialized());
    assert_eq!(count(&calls, "initscr"), 1);
    assert_eq!(count(&calls, "keypad"), 1);
    assert_eq!(count(&calls, "nonl"), 1);
    assert_eq!(count(&calls, "cbreak"), 1);
}

#[test]
fn test_init_failure_reports_allocation() {
    let (spy, calls) = SpyNative::new();
    spy.fail_initscr.set(true);
    let mut curses = Curses::with_native(spy);
    assert_eq!(curses.init(), Err(Error::AllocationFailed("screen")));
    assert!(!curses.is_initialized());
    assert_eq!(count(&calls, "initscr"), 1);
}

/// The constant table and the root-screen handle are registered once
/// per context, no matter how many times init runs.
#[test]
fn test_constants_registered_once() {
    let (mut curses, _calls) = initialized();
    let table_len = curses.constants().unwrap().len();
    assert_eq!(table_len, 25);
    let stdscr = curses.stdscr().unwrap();
    assert_eq!(curses.resource_count(), 1);

    curses.end().unwrap();
    curses.init().unwrap();

    assert_eq!(curses.constants().unwrap().len(), table_len);
    assert_eq!(curses.stdscr().unwrap(), stdscr);
    assert_eq!(curses.resource_count(), 1);
}

#[test]
fn test_end_clears_gate() {
    let (mut curses, calls) = initialized();
    curses.end().unwrap();
    assert!(!curses.is_initialized());
    assert_eq!(curses.refresh(), Err(Error::NotInitialized));
    assert_eq!(count(&calls, "refresh"), 0);

    // A second end is also a gated operation.
    assert_eq!(curses.end(), Err(Error::NotInitialized));
    assert_eq!(count(&calls, "endwin"), 1);

    curses.init().unwrap();
    assert!(curses.refresh().is_ok());
}

#[test]
fn test_constant_table_values_come_from_native() {
    let (curses, _calls) = initialized();
    let table = curses.constants().unwrap();
    // The spy encodes the VT100 glyph byte in the low bits.
    assert_eq!(table.get("ACS_ULCORNER"), Some(0x0040_0000 | b'l' as ChType));
    assert_eq!(table.get("ACS_HLINE"), Some(0x0040_0000 | b'q' as ChType));
    assert_eq!(table.get("ACS_NOSUCH"), None);
}

// ============================================================================
// Resource registry
// ============================================================================

#[test]
fn test_window_lifecycle() {
    let (mut curses, calls) = initialized();
    let win = curses.newwin(10, 20, 0, 0).unwrap();

    curses.waddstr(win, "hello").unwrap();
    assert_eq!(curses.getmaxyx(win).unwrap(), (24, 80));
    assert_eq!(curses.resource_count(), 2); // stdscr + win

    curses.release(win).unwrap();
    assert_eq!(count(&calls, "delwin"), 1);
    assert_eq!(curses.resource_count(), 1);

    // The handle is dead: no further native call happens through it.
    assert_eq!(curses.release(win), Err(Error::NotFound(win)));
    assert_eq!(curses.waddstr(win, "again"), Err(Error::NotFound(win)));
    assert_eq!(count(&calls, "delwin"), 1);
    assert_eq!(count(&calls, "waddstr"), 1);
}

/// A recycled slot does not resurrect the old handle.
#[test]
fn test_stale_handle_stays_dead_after_slot_reuse() {
    let (mut curses, _calls) = initialized();
    let old = curses.newwin(5, 5, 0, 0).unwrap();
    curses.release(old).unwrap();

    let new = curses.newwin(5, 5, 0, 0).unwrap();
    assert_ne!(old, new);
    assert_eq!(curses.wrefresh(old), Err(Error::NotFound(old)));
    assert!(curses.wrefresh(new).is_ok());
}

#[test]
fn test_delwin_is_release() {
    let (mut curses, calls) = initialized();
    let win = curses.newwin(3, 3, 0, 0).unwrap();
    curses.delwin(win).unwrap();
    assert_eq!(count(&calls, "delwin"), 1);
    assert_eq!(curses.delwin(win), Err(Error::NotFound(win)));
}

#[test]
fn test_registry_capacity_destroys_fresh_handle() {
    let (spy, calls) = SpyNative::new();
    // Room for stdscr plus exactly one window.
    let mut curses = Curses::with_native_and_capacity(spy, 2);
    curses.init().unwrap();

    let first = curses.newwin(5, 5, 0, 0).unwrap();
    let err = curses.newwin(5, 5, 0, 0).unwrap_err();
    assert_eq!(err, Error::RegistryFull);
    // The unregisterable native window was destroyed, the first one kept.
    assert_eq!(count(&calls, "newwin"), 2);
    assert_eq!(count(&calls, "delwin"), 1);
    assert!(curses.wrefresh(first).is_ok());
}

#[test]
fn test_pad_lifecycle() {
    let (mut curses, calls) = initialized();
    let pad = curses.newpad(100, 200).unwrap();
    curses.prefresh(pad, [0, 0, 0, 0, 23, 79]).unwrap();
    assert_eq!(count(&calls, "prefresh"), 1);
    curses.release(pad).unwrap();
    assert_eq!(count(&calls, "delwin"), 1);
}

/// Dropping the context destroys whatever the host still holds, then
/// shuts the library down.
#[test]
fn test_drop_releases_leaked_handles() {
    let (spy, calls) = SpyNative::new();
    {
        let mut curses = Curses::with_native(spy);
        curses.init().unwrap();
        curses.newwin(5, 5, 0, 0).unwrap();
        curses.newwin(6, 6, 0, 0).unwrap();
        // Both handles leak.
    }
    assert_eq!(count(&calls, "delwin"), 2);
    assert_eq!(count(&calls, "endwin"), 1);
    // stdscr is owned by the native library and never delwin'd; two
    // delwin calls is exactly the two leaked windows.
}

// ============================================================================
// Argument validation
// ============================================================================

#[test]
fn test_embedded_nul_rejected_before_native_call() {
    let (mut curses, calls) = initialized();
    let win = curses.newwin(5, 5, 0, 0).unwrap();

    let err = curses.addstr("bad\0string").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    let err = curses.waddstr(win, "also\0bad").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    assert_eq!(count(&calls, "addstr"), 0);
    assert_eq!(count(&calls, "waddstr"), 0);
}

/// The line-read buffer is sized to the current screen width, never a
/// fixed guess.
#[test]
fn test_instr_buffer_tracks_screen_width() {
    let (mut curses, calls) = initialized();
    let text = curses.instr().unwrap();
    // The spy reports 80 columns and echoes the requested length back.
    assert_eq!(text, "line:80");
    assert_eq!(count(&calls, "innstr"), 1);
}

#[test]
fn test_getch_passes_raw_code_through() {
    let (mut curses, _calls) = initialized();
    assert_eq!(curses.getch().unwrap(), 10);
    let win = curses.newwin(5, 5, 0, 0).unwrap();
    assert_eq!(curses.wgetch(win).unwrap(), 10);
}

#[test]
fn test_curs_set_returns_previous_visibility() {
    let (mut curses, _calls) = initialized();
    assert_eq!(curses.curs_set(0).unwrap(), 1);
}

/// keyok drives the real key-enable switch, not some other native call.
#[test]
fn test_keyok_reaches_native_keyok() {
    let (mut curses, calls) = initialized();
    curses.keyok(ncurses_bridge::KEY_ENTER, false).unwrap();
    assert_eq!(count(&calls, "keyok"), 1);
    assert_eq!(count(&calls, "hline"), 0);
}

#[test]
fn test_color_queries_return_tuples() {
    let (mut curses, _calls) = initialized();
    curses.start_color().unwrap();
    assert_eq!(curses.color_content(1).unwrap(), (1000, 0, 0));
    assert_eq!(curses.pair_content(1).unwrap(), (1, 0));
}

// ============================================================================
// Panels
// ============================================================================

#[cfg(feature = "panels")]
mod panels {
    use super::*;

    #[test]
    fn test_panel_lifecycle() {
        let (mut curses, calls) = initialized();
        let win = curses.newwin(10, 20, 0, 0).unwrap();
        let panel = curses.new_panel(win).unwrap();

        curses.hide_panel(panel).unwrap();
        curses.show_panel(panel).unwrap();
        curses.top_panel(panel).unwrap();
        curses.move_panel(panel, 2, 2).unwrap();
        curses.update_panels().unwrap();
        curses.doupdate().unwrap();

        curses.del_panel(panel).unwrap();
        assert_eq!(count(&calls, "del_panel"), 1);
        // The window handle is independent and still live.
        assert!(curses.wrefresh(win).is_ok());
        curses.release(win).unwrap();
        assert_eq!(count(&calls, "delwin"), 1);
    }

    /// Window and panel handles are not interchangeable.
    #[test]
    fn test_kind_mismatch_is_rejected() {
        let (mut curses, calls) = initialized();
        let win = curses.newwin(5, 5, 0, 0).unwrap();
        let panel = curses.new_panel(win).unwrap();

        assert_eq!(
            curses.hide_panel(win),
            Err(Error::KindMismatch {
                id: win,
                expected: ResourceKind::Panel,
                actual: ResourceKind::Window,
            })
        );
        assert_eq!(
            curses.waddch(panel, 'x' as ChType),
            Err(Error::KindMismatch {
                id: panel,
                expected: ResourceKind::Window,
                actual: ResourceKind::Panel,
            })
        );
        assert_eq!(count(&calls, "hide_panel"), 0);
        assert_eq!(count(&calls, "waddch"), 0);
    }

    /// Stack queries share the existing registration instead of minting
    /// a second handle for the same native object.
    #[test]
    fn test_panel_above_shares_registration() {
        let (mut curses, _calls) = initialized();
        let win = curses.newwin(5, 5, 0, 0).unwrap();
        let panel = curses.new_panel(win).unwrap();
        assert_eq!(curses.ref_count(panel).unwrap(), 1);

        let found = curses.panel_above(None).unwrap().unwrap();
        assert_eq!(found, panel);
        assert_eq!(curses.ref_count(panel).unwrap(), 2);

        // Two references, two releases before the native delete runs.
        curses.release(found).unwrap();
        assert!(curses.hide_panel(panel).is_ok());
        curses.release(panel).unwrap();
        assert_eq!(curses.hide_panel(panel), Err(Error::NotFound(panel)));
    }

    #[test]
    fn test_panel_above_top_of_stack_is_none() {
        let (mut curses, _calls) = initialized();
        let win = curses.newwin(5, 5, 0, 0).unwrap();
        let panel = curses.new_panel(win).unwrap();
        assert_eq!(curses.panel_above(Some(panel)).unwrap(), None);
        assert_eq!(curses.panel_below(Some(panel)).unwrap(), None);
    }

    #[test]
    fn test_panel_window_returns_shared_window_handle() {
        let (mut curses, calls) = initialized();
        let win = curses.newwin(5, 5, 0, 0).unwrap();
        let panel = curses.new_panel(win).unwrap();

        let found = curses.panel_window(panel).unwrap().unwrap();
        assert_eq!(found, win);
        assert_eq!(curses.ref_count(win).unwrap(), 2);

        // Both references must go before the window is destroyed.
        curses.release(found).unwrap();
        assert_eq!(count(&calls, "delwin"), 0);
        curses.release(win).unwrap();
        assert_eq!(count(&calls, "delwin"), 1);
    }

    #[test]
    fn test_replace_panel_resolves_both_handles() {
        let (mut curses, calls) = initialized();
        let first = curses.newwin(5, 5, 0, 0).unwrap();
        let second = curses.newwin(6, 6, 0, 0).unwrap();
        let panel = curses.new_panel(first).unwrap();

        curses.replace_panel(panel, second).unwrap();
        assert_eq!(count(&calls, "replace_panel"), 1);
        let shown = curses.panel_window(panel).unwrap().unwrap();
        assert_eq!(shown, second);
    }

    /// Teardown destroys panels before the windows underneath them.
    #[test]
    fn test_drop_destroys_panels_before_windows() {
        let (spy, calls) = SpyNative::new();
        {
            let mut curses = Curses::with_native(spy);
            curses.init().unwrap();
            let win = curses.newwin(5, 5, 0, 0).unwrap();
            curses.new_panel(win).unwrap();
        }
        let log = calls.borrow();
        let del_panel_at = log.iter().position(|c| *c == "del_panel").unwrap();
        let delwin_at = log.iter().position(|c| *c == "delwin").unwrap();
        let endwin_at = log.iter().rposition(|c| *c == "endwin").unwrap();
        assert!(del_panel_at < delwin_at);
        assert!(delwin_at < endwin_at);
    }
}

// ============================================================================
// Mouse
// ============================================================================

#[cfg(feature = "mouse")]
mod mouse {
    use super::*;

    #[test]
    fn test_mousemask_reports_granted_and_previous() {
        let (mut curses, _calls) = initialized();
        let requested = MouseMask::ALL_MOUSE_EVENTS | MouseMask::REPORT_MOUSE_POSITION;
        let (granted, old) = curses.mousemask(requested).unwrap();
        // The spy grants button events only.
        assert_eq!(granted, MouseMask::ALL_MOUSE_EVENTS);
        assert_eq!(old, MouseMask::empty());
    }

    #[test]
    fn test_mouse_event_round_trip() {
        let (mut curses, calls) = initialized();
        let event = curses.getmouse().unwrap();
        assert_eq!(event.x, 3);
        assert_eq!(event.y, 4);
        assert_eq!(event.bstate, MouseMask::BUTTON1_CLICKED);

        curses.ungetmouse(event).unwrap();
        assert_eq!(count(&calls, "getmouse"), 1);
        assert_eq!(count(&calls, "ungetmouse"), 1);
    }

    #[test]
    fn test_wmouse_trafo_resolves_window_handle() {
        let (mut curses, _calls) = initialized();
        let win = curses.newwin(5, 5, 0, 0).unwrap();
        assert_eq!(curses.wmouse_trafo(win, 4, 4, false).unwrap(), Some((3, 3)));
        curses.release(win).unwrap();
        assert_eq!(
            curses.wmouse_trafo(win, 4, 4, false),
            Err(Error::NotFound(win))
        );
    }
}
