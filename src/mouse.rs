//! Mouse support.
//!
//! Mouse handling must be enabled with the `mouse` feature flag.
//! Events cross the host boundary as a keyed field map (`"id"`, `"x"`,
//! `"y"`, `"z"`, `"mmask"`), mirroring how dynamically-typed embedders
//! consume them; [`MouseEvent::to_fields`] and
//! [`MouseEvent::from_fields`] do the marshaling.

use std::collections::HashMap;

use crate::error::{Error, IntoResult, Result};
use crate::native::Native;
use crate::registry::ResourceId;
use crate::types::{Coord, MmaskT};
use crate::Curses;

bitflags::bitflags! {
    /// Mouse event mask, matching the native `mmask_t` bit layout.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseMask: MmaskT {
        /// Mouse button 1 released.
        const BUTTON1_RELEASED = 0x00000001;
        /// Mouse button 1 pressed.
        const BUTTON1_PRESSED = 0x00000002;
        /// Mouse button 1 clicked.
        const BUTTON1_CLICKED = 0x00000004;
        /// Mouse button 1 double-clicked.
        const BUTTON1_DOUBLE_CLICKED = 0x00000008;
        /// Mouse button 1 triple-clicked.
        const BUTTON1_TRIPLE_CLICKED = 0x00000010;
        /// Mouse button 2 released.
        const BUTTON2_RELEASED = 0x00000020;
        /// Mouse button 2 pressed.
        const BUTTON2_PRESSED = 0x00000040;
        /// Mouse button 2 clicked.
        const BUTTON2_CLICKED = 0x00000080;
        /// Mouse button 2 double-clicked.
        const BUTTON2_DOUBLE_CLICKED = 0x00000100;
        /// Mouse button 2 triple-clicked.
        const BUTTON2_TRIPLE_CLICKED = 0x00000200;
        /// Mouse button 3 released.
        const BUTTON3_RELEASED = 0x00000400;
        /// Mouse button 3 pressed.
        const BUTTON3_PRESSED = 0x00000800;
        /// Mouse button 3 clicked.
        const BUTTON3_CLICKED = 0x00001000;
        /// Mouse button 3 double-clicked.
        const BUTTON3_DOUBLE_CLICKED = 0x00002000;
        /// Mouse button 3 triple-clicked.
        const BUTTON3_TRIPLE_CLICKED = 0x00004000;
        /// Mouse button 4 released.
        const BUTTON4_RELEASED = 0x00008000;
        /// Mouse button 4 pressed (scroll up).
        const BUTTON4_PRESSED = 0x00010000;
        /// Mouse button 4 clicked.
        const BUTTON4_CLICKED = 0x00020000;
        /// Mouse button 4 double-clicked.
        const BUTTON4_DOUBLE_CLICKED = 0x00040000;
        /// Mouse button 4 triple-clicked.
        const BUTTON4_TRIPLE_CLICKED = 0x00080000;
        /// Mouse button 5 released.
        const BUTTON5_RELEASED = 0x00100000;
        /// Mouse button 5 pressed (scroll down).
        const BUTTON5_PRESSED = 0x00200000;
        /// Mouse button 5 clicked.
        const BUTTON5_CLICKED = 0x00400000;
        /// Mouse button 5 double-clicked.
        const BUTTON5_DOUBLE_CLICKED = 0x00800000;
        /// Mouse button 5 triple-clicked.
        const BUTTON5_TRIPLE_CLICKED = 0x01000000;
        /// Shift was held during the mouse event.
        const BUTTON_SHIFT = 0x04000000;
        /// Ctrl was held during the mouse event.
        const BUTTON_CTRL = 0x08000000;
        /// Alt was held during the mouse event.
        const BUTTON_ALT = 0x10000000;
        /// Report mouse position changes.
        const REPORT_MOUSE_POSITION = 0x20000000;
        /// All button events.
        const ALL_MOUSE_EVENTS = 0x1fffffff;
    }
}

/// A decoded mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// Device id, to distinguish multiple pointing devices.
    pub id: i16,
    /// Event column.
    pub x: Coord,
    /// Event row.
    pub y: Coord,
    /// Event depth (unused by terminals, carried through).
    pub z: Coord,
    /// Button state at the time of the event.
    pub bstate: MouseMask,
}

impl MouseEvent {
    /// Marshal the event into the keyed field map handed to the host.
    pub fn to_fields(&self) -> HashMap<String, i64> {
        let mut map = HashMap::with_capacity(5);
        map.insert("id".into(), self.id as i64);
        map.insert("x".into(), self.x as i64);
        map.insert("y".into(), self.y as i64);
        map.insert("z".into(), self.z as i64);
        map.insert("mmask".into(), self.bstate.bits() as i64);
        map
    }

    /// Build an event from a host field map.
    ///
    /// Missing keys default to zero; unknown keys are ignored. Mask
    /// bits outside [`MouseMask`] are preserved as-is.
    pub fn from_fields(fields: &HashMap<String, i64>) -> Self {
        let get = |key: &str| fields.get(key).copied().unwrap_or(0);
        MouseEvent {
            id: get("id") as i16,
            x: get("x") as Coord,
            y: get("y") as Coord,
            z: get("z") as Coord,
            bstate: MouseMask::from_bits_retain(get("mmask") as MmaskT),
        }
    }
}

impl<N: Native> Curses<N> {
    /// Select which mouse events to report.
    ///
    /// Returns `(granted, previous)`: the subset of the requested mask
    /// the terminal actually supports, and the mask that was active
    /// before the call.
    pub fn mousemask(&mut self, newmask: MouseMask) -> Result<(MouseMask, MouseMask)> {
        self.ensure_initialized()?;
        let (granted, old) = self.native_mut().mousemask(newmask.bits());
        Ok((
            MouseMask::from_bits_retain(granted),
            MouseMask::from_bits_retain(old),
        ))
    }

    /// Pop the next mouse event off the queue.
    ///
    /// Fails when no event is pending.
    pub fn getmouse(&mut self) -> Result<MouseEvent> {
        self.ensure_initialized()?;
        self.native_mut().getmouse().ok_or(Error::General)
    }

    /// Push a mouse event back onto the queue.
    pub fn ungetmouse(&mut self, event: MouseEvent) -> Result<()> {
        self.ensure_initialized()?;
        self.native_mut().ungetmouse(event).into_result()
    }

    /// Set the click resolution interval in milliseconds.
    ///
    /// Returns the previous interval.
    pub fn mouseinterval(&mut self, interval: i32) -> Result<i32> {
        self.ensure_initialized()?;
        let prev = self.native_mut().mouseinterval(interval);
        prev.into_result()?;
        Ok(prev)
    }

    /// Translate coordinates between the root screen and its frame.
    ///
    /// `Ok(None)` means the position falls outside the target area.
    pub fn mouse_trafo(
        &mut self,
        y: Coord,
        x: Coord,
        to_screen: bool,
    ) -> Result<Option<(Coord, Coord)>> {
        self.ensure_initialized()?;
        Ok(self.native_mut().mouse_trafo(y, x, to_screen))
    }

    /// Translate coordinates between a window and the screen.
    ///
    /// `Ok(None)` means the position falls outside the window.
    pub fn wmouse_trafo(
        &mut self,
        win: ResourceId,
        y: Coord,
        x: Coord,
        to_screen: bool,
    ) -> Result<Option<(Coord, Coord)>> {
        self.ensure_initialized()?;
        let ptr = self.window(win)?;
        Ok(self.native_mut().wmouse_trafo(ptr, y, x, to_screen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_field_round_trip() {
        let event = MouseEvent {
            id: 3,
            x: 12,
            y: 4,
            z: 0,
            bstate: MouseMask::BUTTON1_CLICKED | MouseMask::BUTTON_CTRL,
        };
        let fields = event.to_fields();
        assert_eq!(fields["x"], 12);
        assert_eq!(
            fields["mmask"],
            (MouseMask::BUTTON1_CLICKED | MouseMask::BUTTON_CTRL).bits() as i64
        );
        assert_eq!(MouseEvent::from_fields(&fields), event);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let mut fields = HashMap::new();
        fields.insert("y".to_string(), 7i64);
        fields.insert("bogus".to_string(), 99i64);
        let event = MouseEvent::from_fields(&fields);
        assert_eq!(event.y, 7);
        assert_eq!(event.x, 0);
        assert_eq!(event.id, 0);
        assert_eq!(event.bstate, MouseMask::empty());
    }

    #[test]
    fn test_button_masks_match_native_layout() {
        assert_eq!(MouseMask::BUTTON1_PRESSED.bits(), 0x2);
        assert_eq!(MouseMask::BUTTON5_TRIPLE_CLICKED.bits(), 0x01000000);
        assert!(MouseMask::ALL_MOUSE_EVENTS.contains(MouseMask::BUTTON3_DOUBLE_CLICKED));
        assert!(!MouseMask::ALL_MOUSE_EVENTS.contains(MouseMask::REPORT_MOUSE_POSITION));
    }
}
