//! The curses context: initialization gate plus resource registry.
//!
//! A [`Curses`] value is the explicit replacement for the process-wide
//! state a curses binding traditionally keeps. It owns the native
//! backend, the handle registry, the one-shot symbolic-constant table
//! and the initialization flag; every adapter is a method on it.
//!
//! The context is single-threaded by construction (the registry stores
//! raw native pointers, which are `!Send`/`!Sync`). Embedders with a
//! multi-threaded host must confine the context to one thread.

use crate::acs::ConstantTable;
use crate::error::{Error, IntoResult, Result};
use crate::native::{LibCurses, Native, WindowPtr};
use crate::registry::{Registry, ResourceId, ResourceKind};
use log::{debug, warn};

#[cfg(feature = "panels")]
use crate::native::PanelPtr;

/// The curses binding context.
///
/// Construct one per process, call [`init`](Self::init), then use the
/// adapter methods. Dropping the context destroys every remaining
/// registered handle and shuts the native library down.
///
/// # Example
///
/// ```rust,no_run
/// use ncurses_bridge::Curses;
///
/// # fn main() -> ncurses_bridge::Result<()> {
/// let mut curses = Curses::new();
/// curses.init()?;
///
/// let win = curses.newwin(10, 20, 0, 0)?;
/// curses.waddstr(win, "Hello from a window")?;
/// curses.wrefresh(win)?;
/// curses.getch()?;
/// curses.release(win)?;
/// curses.end()?;
/// # Ok(())
/// # }
/// ```
pub struct Curses<N: Native = LibCurses> {
    native: N,
    registry: Registry,
    initialized: bool,
    constants: Option<ConstantTable>,
    stdscr: Option<ResourceId>,
}

impl Curses<LibCurses> {
    /// Create an uninitialized context over the real native library.
    pub fn new() -> Self {
        Self::with_native(LibCurses::new())
    }
}

impl Default for Curses<LibCurses> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Native> Curses<N> {
    /// Create an uninitialized context over a custom backend.
    ///
    /// This is the seam used by tests to substitute an instrumented
    /// backend for the real library.
    pub fn with_native(native: N) -> Self {
        Self {
            native,
            registry: Registry::new(),
            initialized: false,
            constants: None,
            stdscr: None,
        }
    }

    /// Like [`with_native`](Self::with_native), but capping the number
    /// of simultaneously registered handles.
    pub fn with_native_and_capacity(native: N, capacity: usize) -> Self {
        Self {
            native,
            registry: Registry::with_capacity(capacity),
            initialized: false,
            constants: None,
            stdscr: None,
        }
    }

    // ------------------------------------------------------------------
    // Initialization gate
    // ------------------------------------------------------------------

    /// Initialize the native library and this context.
    ///
    /// The native setup sequence (screen initialization, keyboard
    /// mapping, newline translation off, character-at-a-time input)
    /// runs on every call; the native library makes that idempotent.
    /// The symbolic-constant table and the root-screen resource are
    /// registered only on the first successful call per context.
    pub fn init(&mut self) -> Result<()> {
        let scr = self.native.initscr();
        if scr.is_null() {
            return Err(Error::AllocationFailed("screen"));
        }
        let _ = self.native.keypad(scr, true);
        let _ = self.native.nonl();
        let _ = self.native.cbreak();

        if self.constants.is_none() {
            self.constants = Some(ConstantTable::load(&self.native));
            // The root screen is owned by the native library; register
            // it unowned so teardown never runs delwin on it.
            let id = self
                .registry
                .register(scr.cast(), ResourceKind::Window, false)?;
            self.stdscr = Some(id);
            debug!("registered constant table and root screen {id}");
        }

        self.initialized = true;
        Ok(())
    }

    /// Shut the native library down.
    ///
    /// Clears the initialization gate, so a later [`init`](Self::init)
    /// starts a fresh screen. Registered handles survive an
    /// `end`/`init` cycle.
    pub fn end(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.native.endwin().into_result()?;
        self.initialized = false;
        debug!("curses shut down");
        Ok(())
    }

    /// Whether a stateful operation may currently run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The gate every stateful adapter checks before its native call.
    pub(crate) fn ensure_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            warn!("curses must be initialized via init() before calling any curses operation");
            Err(Error::NotInitialized)
        }
    }

    /// The symbolic-constant table, present once `init` has succeeded.
    pub fn constants(&self) -> Option<&ConstantTable> {
        self.constants.as_ref()
    }

    /// The root-screen window resource.
    pub fn stdscr(&self) -> Result<ResourceId> {
        self.stdscr.ok_or(Error::NotInitialized)
    }

    // ------------------------------------------------------------------
    // Resource lifecycle
    // ------------------------------------------------------------------

    /// Release one reference to a registered resource.
    ///
    /// When the last reference goes, the matching native destructor
    /// runs exactly once. Releasing an already-dead id fails with
    /// [`Error::NotFound`] and performs no native call.
    pub fn release(&mut self, id: ResourceId) -> Result<()> {
        self.ensure_initialized()?;
        if let Some(freed) = self.registry.release(id)? {
            if freed.owned {
                match freed.kind {
                    ResourceKind::Window => self.native.delwin(freed.ptr.cast()).into_result()?,
                    #[cfg(feature = "panels")]
                    ResourceKind::Panel => self.native.del_panel(freed.ptr.cast()).into_result()?,
                }
                debug!("destroyed {} {id}", freed.kind);
            }
        }
        Ok(())
    }

    /// Reference count of a live resource.
    pub fn ref_count(&self, id: ResourceId) -> Result<u32> {
        self.registry.ref_count(id)
    }

    /// Number of live registered resources.
    pub fn resource_count(&self) -> usize {
        self.registry.len()
    }

    /// Resolve a window-kind id to its native pointer.
    pub(crate) fn window(&self, id: ResourceId) -> Result<WindowPtr> {
        Ok(self.registry.resolve(id, ResourceKind::Window)?.cast())
    }

    /// Resolve a panel-kind id to its native pointer.
    #[cfg(feature = "panels")]
    pub(crate) fn panel(&self, id: ResourceId) -> Result<PanelPtr> {
        Ok(self.registry.resolve(id, ResourceKind::Panel)?.cast())
    }

    /// Wrap a freshly constructed native window, destroying it if the
    /// registry refuses the wrapper (the constructor leak discipline).
    pub(crate) fn adopt_window(
        &mut self,
        ptr: WindowPtr,
        what: &'static str,
    ) -> Result<ResourceId> {
        if ptr.is_null() {
            return Err(Error::AllocationFailed(what));
        }
        match self.registry.register(ptr.cast(), ResourceKind::Window, true) {
            Ok(id) => Ok(id),
            Err(err) => {
                let _ = self.native.delwin(ptr);
                Err(err)
            }
        }
    }

    /// Panel counterpart of [`adopt_window`](Self::adopt_window).
    #[cfg(feature = "panels")]
    pub(crate) fn adopt_panel(&mut self, ptr: PanelPtr) -> Result<ResourceId> {
        if ptr.is_null() {
            return Err(Error::AllocationFailed("panel"));
        }
        match self.registry.register(ptr.cast(), ResourceKind::Panel, true) {
            Ok(id) => Ok(id),
            Err(err) => {
                let _ = self.native.del_panel(ptr);
                Err(err)
            }
        }
    }

    /// Share the registration for a native pointer returned by a query.
    #[cfg(feature = "panels")]
    pub(crate) fn share_ptr(&mut self, ptr: *mut libc::c_void) -> Option<ResourceId> {
        self.registry.share(ptr)
    }

    /// Borrow the native backend.
    pub(crate) fn native(&self) -> &N {
        &self.native
    }

    /// Mutably borrow the native backend.
    pub(crate) fn native_mut(&mut self) -> &mut N {
        &mut self.native
    }
}

impl<N: Native> Drop for Curses<N> {
    fn drop(&mut self) {
        // Process teardown: destroy whatever the host still holds,
        // panels before the windows underneath them, then shut down.
        for freed in self.registry.drain_for_teardown() {
            if !freed.owned {
                continue;
            }
            match freed.kind {
                ResourceKind::Window => {
                    let _ = self.native.delwin(freed.ptr.cast());
                }
                #[cfg(feature = "panels")]
                ResourceKind::Panel => {
                    let _ = self.native.del_panel(freed.ptr.cast());
                }
            }
        }
        if self.initialized {
            let _ = self.native.endwin();
        }
    }
}
