//! # ncurses-bridge
//!
//! A safe, handle-based binding layer over the native ncurses library,
//! built for embedding in dynamically-typed scripting hosts.
//!
//! All state lives in an explicit [`Curses`] context: the native
//! backend, the initialization gate, the symbolic-constant table and
//! the resource registry that tracks every window, pad and panel the
//! host holds. Handles are generation-checked ids, so a stale or
//! mistyped handle fails cleanly instead of touching freed native
//! memory, and each native object is destroyed exactly once.
//!
//! ## Features
//!
//! - **mouse**: Mouse event handling
//! - **panels**: Panels library for window stacking
//! - **slk**: Soft function key labels
//!
//! ## Example
//!
//! ```rust,no_run
//! use ncurses_bridge::{Curses, Result};
//!
//! fn main() -> Result<()> {
//!     let mut curses = Curses::new();
//!     curses.init()?;
//!
//!     let win = curses.newwin(10, 40, 2, 4)?;
//!     curses.wborder(win, [0; 8])?;
//!     curses.mvwaddstr(win, 1, 1, "Hello, ncurses-bridge!")?;
//!     curses.wrefresh(win)?;
//!     curses.wgetch(win)?;
//!
//!     curses.release(win)?;
//!     curses.end()?;
//!     Ok(())
//! }
//! ```

#![allow(clippy::needless_doctest_main)]
#![warn(missing_docs)]

pub mod acs;
pub mod attr;
pub mod color;
pub mod context;
pub mod error;
mod ffi;
pub mod input;
pub mod key;
pub mod native;
pub mod output;
pub mod registry;
pub mod terminal;
pub mod types;
pub mod window;

#[cfg(feature = "mouse")]
pub mod mouse;

#[cfg(feature = "slk")]
pub mod slk;

#[cfg(feature = "panels")]
pub mod panels;

// Re-export commonly used items at crate root
pub use acs::ConstantTable;
pub use attr::*;
pub use color::*;
pub use context::Curses;
pub use error::{Error, IntoResult, Result};
pub use key::*;
pub use native::{LibCurses, Native};
pub use output::BorderChars;
pub use registry::{ResourceId, ResourceKind};
pub use types::*;
pub use window::PadRegion;

#[cfg(feature = "mouse")]
pub use mouse::{MouseEvent, MouseMask};

/// The binding version string
pub const VERSION: &str = "0.1.0";

/// Binding major version
pub const VERSION_MAJOR: u32 = 0;

/// Binding minor version
pub const VERSION_MINOR: u32 = 1;

/// Binding patch version
pub const VERSION_PATCH: u32 = 0;
