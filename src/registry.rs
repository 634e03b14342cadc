//! The resource registry: host-visible ids for native handles.
//!
//! The native library hands out bare pointers for windows, pads and
//! panels; the host side needs stable, forgeable-proof identifiers with
//! reference-counted lifetimes. The registry maintains that mapping and
//! guarantees the central invariant of the whole binding: **at most one
//! native destructor call per registered handle**.
//!
//! Ids are generation-checked slot indices. When an entry is released,
//! its slot's generation is bumped before the slot is reused, so a
//! stale id held by the host can never alias a handle registered later
//! in the same slot. Pointer-identity lookup (`share`) lets queries
//! that return an already-known native object hand back the *existing*
//! id with its reference count bumped instead of wrapping the pointer a
//! second time.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// What kind of native object an entry wraps.
///
/// Window and panel pointers are structurally indistinguishable; this
/// tag is the only thing standing between a panel id and a window
/// destructor. Every resolve asserts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A window or pad (both are `WINDOW *` natively).
    Window,
    /// A panel from the stacking extension.
    #[cfg(feature = "panels")]
    Panel,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Window => f.write_str("window"),
            #[cfg(feature = "panels")]
            ResourceKind::Panel => f.write_str("panel"),
        }
    }
}

/// A host-visible resource identifier.
///
/// Copyable and cheap; holding one confers no ownership. The id stays
/// valid until its entry's reference count drops to zero, after which
/// every use fails with [`Error::NotFound`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId {
    index: u32,
    generation: u32,
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

/// A released handle, reported back so the caller can run the native
/// destructor. `owned` is false for the root screen, which the native
/// library tears down itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freed {
    /// The wrapped native pointer.
    pub ptr: *mut libc::c_void,
    /// The kind the handle was registered under.
    pub kind: ResourceKind,
    /// Whether the registry owned the handle (destructor required).
    pub owned: bool,
}

/// One live registry entry.
#[derive(Debug)]
struct Entry {
    ptr: *mut libc::c_void,
    kind: ResourceKind,
    refs: u32,
    owned: bool,
}

/// One arena slot. The generation survives entry removal.
#[derive(Debug)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// The arena of registered resources.
#[derive(Debug)]
pub struct Registry {
    slots: Vec<Slot>,
    free: Vec<u32>,
    by_ptr: HashMap<usize, ResourceId>,
    capacity: usize,
}

impl Registry {
    /// Create a registry without a practical entry limit.
    pub fn new() -> Self {
        Self::with_capacity(u32::MAX as usize)
    }

    /// Create a registry that refuses to grow past `capacity` live
    /// entries. Embedders use this to cap host resource usage.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            by_ptr: HashMap::new(),
            capacity,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.by_ptr.len()
    }

    /// Whether the registry has no live entries.
    pub fn is_empty(&self) -> bool {
        self.by_ptr.is_empty()
    }

    /// Wrap a freshly constructed native handle.
    ///
    /// The new entry starts with a reference count of one. Fails with
    /// [`Error::RegistryFull`] at capacity and [`Error::DuplicateHandle`]
    /// if the pointer is already registered; in both cases the caller
    /// still owns the native object and must destroy it.
    pub fn register(
        &mut self,
        ptr: *mut libc::c_void,
        kind: ResourceKind,
        owned: bool,
    ) -> Result<ResourceId> {
        if self.by_ptr.contains_key(&(ptr as usize)) {
            return Err(Error::DuplicateHandle);
        }
        if self.len() >= self.capacity {
            return Err(Error::RegistryFull);
        }

        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry: None,
                });
                (self.slots.len() - 1) as u32
            }
        };

        let slot = &mut self.slots[index as usize];
        slot.entry = Some(Entry {
            ptr,
            kind,
            refs: 1,
            owned,
        });

        let id = ResourceId {
            index,
            generation: slot.generation,
        };
        self.by_ptr.insert(ptr as usize, id);
        Ok(id)
    }

    /// Look up a live entry, asserting its kind tag.
    pub fn resolve(&self, id: ResourceId, kind: ResourceKind) -> Result<*mut libc::c_void> {
        let entry = self.entry(id)?;
        if entry.kind != kind {
            return Err(Error::KindMismatch {
                id,
                expected: kind,
                actual: entry.kind,
            });
        }
        Ok(entry.ptr)
    }

    /// Kind of a live entry, without resolving the pointer.
    pub fn kind_of(&self, id: ResourceId) -> Result<ResourceKind> {
        Ok(self.entry(id)?.kind)
    }

    /// Current reference count of a live entry.
    pub fn ref_count(&self, id: ResourceId) -> Result<u32> {
        Ok(self.entry(id)?.refs)
    }

    /// Drop one reference.
    ///
    /// Returns `Ok(None)` while references remain. When the count hits
    /// zero the entry is removed, the slot generation is bumped, and
    /// the freed handle is returned exactly once so the caller can run
    /// the native destructor. A second release of the same id fails
    /// with [`Error::NotFound`]; it can never reach the destructor
    /// again.
    pub fn release(&mut self, id: ResourceId) -> Result<Option<Freed>> {
        // Validate before touching anything.
        self.entry(id)?;

        let slot = &mut self.slots[id.index as usize];
        let entry = slot.entry.as_mut().ok_or(Error::NotFound(id))?;
        entry.refs -= 1;
        if entry.refs > 0 {
            return Ok(None);
        }

        let entry = slot.entry.take().ok_or(Error::NotFound(id))?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.by_ptr.remove(&(entry.ptr as usize));
        Ok(Some(Freed {
            ptr: entry.ptr,
            kind: entry.kind,
            owned: entry.owned,
        }))
    }

    /// Share an existing registration by native pointer identity.
    ///
    /// Used when a native query returns a pointer that may already be
    /// wrapped (panel stack walks, panel-to-window lookups). On a hit
    /// the entry's reference count is incremented and its id returned;
    /// unknown pointers yield `None` — the registry never invents an
    /// entry for an object it did not see constructed.
    pub fn share(&mut self, ptr: *mut libc::c_void) -> Option<ResourceId> {
        let id = *self.by_ptr.get(&(ptr as usize))?;
        if let Some(entry) = self.slots[id.index as usize].entry.as_mut() {
            entry.refs += 1;
        }
        Some(id)
    }

    /// Id registered for a native pointer, if any, without touching the
    /// reference count.
    pub fn find_by_ptr(&self, ptr: *mut libc::c_void) -> Option<ResourceId> {
        self.by_ptr.get(&(ptr as usize)).copied()
    }

    /// Drain every live entry for process/context teardown, panels
    /// first so they are gone before the windows beneath them.
    pub fn drain_for_teardown(&mut self) -> Vec<Freed> {
        let mut freed: Vec<Freed> = Vec::with_capacity(self.len());
        for slot in &mut self.slots {
            if let Some(entry) = slot.entry.take() {
                slot.generation = slot.generation.wrapping_add(1);
                freed.push(Freed {
                    ptr: entry.ptr,
                    kind: entry.kind,
                    owned: entry.owned,
                });
            }
        }
        self.by_ptr.clear();
        self.free.clear();
        self.free.extend(0..self.slots.len() as u32);
        #[cfg(feature = "panels")]
        freed.sort_by_key(|f| match f.kind {
            ResourceKind::Panel => 0,
            ResourceKind::Window => 1,
        });
        freed
    }

    fn entry(&self, id: ResourceId) -> Result<&Entry> {
        let slot = self
            .slots
            .get(id.index as usize)
            .ok_or(Error::NotFound(id))?;
        if slot.generation != id.generation {
            return Err(Error::NotFound(id));
        }
        slot.entry.as_ref().ok_or(Error::NotFound(id))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ptr(v: usize) -> *mut libc::c_void {
        v as *mut libc::c_void
    }

    #[test]
    fn test_register_and_resolve() {
        let mut reg = Registry::new();
        let id = reg.register(ptr(0x10), ResourceKind::Window, true).unwrap();
        assert_eq!(reg.resolve(id, ResourceKind::Window).unwrap(), ptr(0x10));
        assert_eq!(reg.ref_count(id).unwrap(), 1);
    }

    #[test]
    fn test_resolve_unknown_id_fails() {
        let mut reg = Registry::new();
        let id = reg.register(ptr(0x10), ResourceKind::Window, true).unwrap();
        reg.release(id).unwrap();
        assert_eq!(
            reg.resolve(id, ResourceKind::Window),
            Err(Error::NotFound(id))
        );
    }

    #[cfg(feature = "panels")]
    #[test]
    fn test_kind_mismatch_both_directions() {
        let mut reg = Registry::new();
        let w = reg.register(ptr(0x10), ResourceKind::Window, true).unwrap();
        let p = reg.register(ptr(0x20), ResourceKind::Panel, true).unwrap();

        assert!(matches!(
            reg.resolve(w, ResourceKind::Panel),
            Err(Error::KindMismatch {
                expected: ResourceKind::Panel,
                actual: ResourceKind::Window,
                ..
            })
        ));
        assert!(matches!(
            reg.resolve(p, ResourceKind::Window),
            Err(Error::KindMismatch {
                expected: ResourceKind::Window,
                actual: ResourceKind::Panel,
                ..
            })
        ));
    }

    #[test]
    fn test_release_reports_freed_exactly_once() {
        let mut reg = Registry::new();
        let id = reg.register(ptr(0x10), ResourceKind::Window, true).unwrap();
        let freed = reg.release(id).unwrap().unwrap();
        assert_eq!(freed.ptr, ptr(0x10));
        assert!(freed.owned);

        // Second release must fail, never free again.
        assert_eq!(reg.release(id), Err(Error::NotFound(id)));
    }

    #[test]
    fn test_release_with_shared_reference() {
        let mut reg = Registry::new();
        let id = reg.register(ptr(0x10), ResourceKind::Window, true).unwrap();
        let same = reg.share(ptr(0x10)).unwrap();
        assert_eq!(id, same);
        assert_eq!(reg.ref_count(id).unwrap(), 2);

        // First release only drops a reference.
        assert_eq!(reg.release(id).unwrap(), None);
        assert_eq!(reg.ref_count(id).unwrap(), 1);

        // Second one frees.
        assert!(reg.release(id).unwrap().is_some());
        assert_eq!(reg.release(id), Err(Error::NotFound(id)));
    }

    #[test]
    fn test_share_unknown_pointer_is_none() {
        let mut reg = Registry::new();
        assert_eq!(reg.share(ptr(0xdead)), None);
    }

    #[test]
    fn test_stale_id_does_not_alias_reused_slot() {
        let mut reg = Registry::new();
        let old = reg.register(ptr(0x10), ResourceKind::Window, true).unwrap();
        reg.release(old).unwrap();

        // The slot is reused, but the generation differs.
        let new = reg.register(ptr(0x20), ResourceKind::Window, true).unwrap();
        assert_ne!(old, new);
        assert_eq!(
            reg.resolve(old, ResourceKind::Window),
            Err(Error::NotFound(old))
        );
        assert_eq!(reg.resolve(new, ResourceKind::Window).unwrap(), ptr(0x20));
    }

    #[test]
    fn test_duplicate_pointer_rejected() {
        let mut reg = Registry::new();
        reg.register(ptr(0x10), ResourceKind::Window, true).unwrap();
        assert_eq!(
            reg.register(ptr(0x10), ResourceKind::Window, true),
            Err(Error::DuplicateHandle)
        );
    }

    #[test]
    fn test_capacity_limit() {
        let mut reg = Registry::with_capacity(1);
        reg.register(ptr(0x10), ResourceKind::Window, true).unwrap();
        assert_eq!(
            reg.register(ptr(0x20), ResourceKind::Window, true),
            Err(Error::RegistryFull)
        );
    }

    #[test]
    fn test_unowned_entry_reported_unowned() {
        let mut reg = Registry::new();
        let id = reg
            .register(ptr(0x10), ResourceKind::Window, false)
            .unwrap();
        let freed = reg.release(id).unwrap().unwrap();
        assert!(!freed.owned);
    }

    #[cfg(feature = "panels")]
    #[test]
    fn test_teardown_frees_panels_before_windows() {
        let mut reg = Registry::new();
        reg.register(ptr(0x10), ResourceKind::Window, true).unwrap();
        reg.register(ptr(0x20), ResourceKind::Panel, true).unwrap();
        reg.register(ptr(0x30), ResourceKind::Window, true).unwrap();

        let freed = reg.drain_for_teardown();
        assert_eq!(freed.len(), 3);
        assert_eq!(freed[0].kind, ResourceKind::Panel);
        assert!(reg.is_empty());
    }

    #[test]
    fn test_teardown_then_reuse() {
        let mut reg = Registry::new();
        let old = reg.register(ptr(0x10), ResourceKind::Window, true).unwrap();
        reg.drain_for_teardown();

        let new = reg.register(ptr(0x10), ResourceKind::Window, true).unwrap();
        assert_ne!(old, new);
        assert!(reg.resolve(old, ResourceKind::Window).is_err());
        assert!(reg.resolve(new, ResourceKind::Window).is_ok());
    }
}
