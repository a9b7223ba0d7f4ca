//! Grab registry
//!
//! A widget that wants to keep receiving move/up events for a touch it
//! started registers itself once in a [`ClaimantArena`] and grabs the event
//! with the returned handle. Handles are generational: once a claimant is
//! unregistered every handle to it is stale, and the registry treats stale
//! entries as absent instead of failing.
//!
//! ```rust
//! use tactile_core::UidSource;
//! use tactile_input::{ClaimantArena, EventKind, MotionEvent, RawArgs};
//!
//! let uids = UidSource::new();
//! let mut claimants = ClaimantArena::new();
//! let slider = claimants.register("slider");
//!
//! let mut touch = MotionEvent::new(&uids, EventKind::Touch, "tuio", "4", RawArgs::at(0.5, 0.5));
//! touch.grab(slider, false).unwrap();
//! assert_eq!(touch.live_grabs(&claimants).count(), 1);
//!
//! claimants.unregister(slider);
//! assert_eq!(touch.live_grabs(&claimants).count(), 0);
//! ```

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Stable handle of a grab claimant
    pub struct ClaimantId;
}

/// Bookkeeping for a registered claimant
#[derive(Clone, Debug)]
pub struct Claimant {
    pub name: String,
}

/// Owner of all claimants that may grab motion events
#[derive(Debug, Default)]
pub struct ClaimantArena {
    claimants: SlotMap<ClaimantId, Claimant>,
}

impl ClaimantArena {
    pub fn new() -> Self {
        Self {
            claimants: SlotMap::with_key(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>) -> ClaimantId {
        self.claimants.insert(Claimant { name: name.into() })
    }

    /// Remove a claimant; every outstanding handle to it becomes stale
    pub fn unregister(&mut self, id: ClaimantId) -> Option<Claimant> {
        self.claimants.remove(id)
    }

    pub fn is_alive(&self, id: ClaimantId) -> bool {
        self.claimants.contains_key(id)
    }

    pub fn get(&self, id: ClaimantId) -> Option<&Claimant> {
        self.claimants.get(id)
    }

    pub fn len(&self) -> usize {
        self.claimants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimants.is_empty()
    }
}

/// Per-event grab state
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct GrabState {
    /// Grab order is preserved and duplicates are kept
    pub(crate) list: SmallVec<[ClaimantId; 4]>,
    pub(crate) exclusive: Option<ClaimantId>,
    pub(crate) current: Option<ClaimantId>,
}

impl GrabState {
    pub(crate) fn add(&mut self, id: ClaimantId, exclusive: bool) {
        if exclusive {
            self.exclusive = Some(id);
        }
        self.list.push(id);
    }

    /// Remove the first entry for `id` and the exclusive claim if it is `id`
    pub(crate) fn remove_first(&mut self, id: ClaimantId) -> bool {
        if self.exclusive == Some(id) {
            self.exclusive = None;
        }
        match self.list.iter().position(|entry| *entry == id) {
            Some(index) => {
                self.list.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every reference to `id`
    pub(crate) fn remove_all(&mut self, id: ClaimantId) -> usize {
        let before = self.list.len();
        self.list.retain(|entry| *entry != id);
        if self.exclusive == Some(id) {
            self.exclusive = None;
        }
        if self.current == Some(id) {
            self.current = None;
        }
        before - self.list.len()
    }

    /// Drop every entry whose claimant is no longer registered
    pub(crate) fn retain_alive(&mut self, arena: &ClaimantArena) -> usize {
        let before = self.list.len();
        self.list.retain(|entry| arena.is_alive(*entry));
        if self.exclusive.is_some_and(|id| !arena.is_alive(id)) {
            self.exclusive = None;
        }
        if self.current.is_some_and(|id| !arena.is_alive(id)) {
            self.current = None;
        }
        before - self.list.len()
    }
}
