//! Snapshot stack
//!
//! Dispatch into a child widget usually rewrites screen coordinates into the
//! child's local frame. Instead of cloning the whole event, the dispatcher
//! pushes the attributes it is about to change and pops them afterwards.
//!
//! Pushes and pops must be balanced by the same caller. [`MotionEvent::scoped_push`]
//! returns a guard that pops on drop, which covers early returns.
//!
//! ```rust
//! use tactile_core::{Affine2D, UidSource};
//! use tactile_input::{EventKind, MotionEvent, RawArgs, Rotation};
//!
//! let uids = UidSource::new();
//! let mut touch = MotionEvent::new(&uids, EventKind::Touch, "mtdev", "0", RawArgs::at(0.5, 0.5));
//! touch.scale_for_screen(100.0, 100.0, None, Rotation::Deg0);
//!
//! {
//!     let mut local = touch.scoped_push_default();
//!     local.apply_transform_2d(&Affine2D::translation(-40.0, -40.0));
//!     assert_eq!(local.pos(), (10.0, 10.0));
//! }
//! assert_eq!(touch.pos(), (50.0, 50.0));
//! ```

use std::ops::{Deref, DerefMut};

use crate::attr::{Attr, AttrValue};
use crate::error::{MotionError, Result};
use crate::motion::MotionEvent;

/// Saved attribute values, restored in one piece
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Snapshot {
    attrs: Vec<Attr>,
    values: Vec<AttrValue>,
}

impl MotionEvent {
    /// Save the current values of `attrs`
    pub fn push(&mut self, attrs: &[Attr]) {
        let values = attrs.iter().map(|attr| self.attr(*attr)).collect();
        self.push_stack.push(Snapshot {
            attrs: attrs.to_vec(),
            values,
        });
        tracing::trace!(
            "Event {} pushed {} attribute(s), depth {}",
            self.uid,
            attrs.len(),
            self.push_stack.len()
        );
    }

    /// Save the event's push set (see [`push_attrs`])
    ///
    /// [`push_attrs`]: MotionEvent::push_attrs
    pub fn push_default(&mut self) {
        let attrs = self.push_attrs.clone();
        self.push(&attrs);
    }

    /// Restore the most recently pushed snapshot
    pub fn pop(&mut self) -> Result<()> {
        let snapshot = self.push_stack.pop().ok_or(MotionError::EmptyStack)?;
        for (attr, value) in snapshot.attrs.into_iter().zip(snapshot.values) {
            self.set_attr(attr, value);
        }
        tracing::trace!(
            "Event {} popped, depth {}",
            self.uid,
            self.push_stack.len()
        );
        Ok(())
    }

    /// Push `attrs` and pop them again when the returned guard is dropped
    pub fn scoped_push(&mut self, attrs: &[Attr]) -> Pushed<'_> {
        self.push(attrs);
        Pushed::new(self)
    }

    /// [`scoped_push`] with the event's push set
    ///
    /// [`scoped_push`]: MotionEvent::scoped_push
    pub fn scoped_push_default(&mut self) -> Pushed<'_> {
        self.push_default();
        Pushed::new(self)
    }

    /// Attributes saved by [`push_default`]
    ///
    /// [`push_default`]: MotionEvent::push_default
    pub fn push_attrs(&self) -> &[Attr] {
        &self.push_attrs
    }

    pub fn set_push_attrs(&mut self, attrs: impl Into<Vec<Attr>>) {
        self.push_attrs = attrs.into();
    }

    /// Number of snapshots waiting to be popped
    pub fn push_depth(&self) -> usize {
        self.push_stack.len()
    }
}

/// Guard returned by [`MotionEvent::scoped_push`]
///
/// Dropping the guard pops its own snapshot only. If the stack no longer has
/// the depth it had right after the push, the guard leaves it alone.
pub struct Pushed<'a> {
    event: &'a mut MotionEvent,
    depth: usize,
}

impl<'a> Pushed<'a> {
    fn new(event: &'a mut MotionEvent) -> Self {
        let depth = event.push_stack.len();
        Self { event, depth }
    }
}

impl Deref for Pushed<'_> {
    type Target = MotionEvent;

    fn deref(&self) -> &MotionEvent {
        self.event
    }
}

impl DerefMut for Pushed<'_> {
    fn deref_mut(&mut self) -> &mut MotionEvent {
        self.event
    }
}

impl Drop for Pushed<'_> {
    fn drop(&mut self) {
        let depth = self.event.push_stack.len();
        if depth != self.depth {
            tracing::warn!(
                "Unbalanced scoped push on event {}: expected depth {}, found {}",
                self.event.uid,
                self.depth,
                depth
            );
            return;
        }
        if let Err(err) = self.event.pop() {
            tracing::warn!("Unbalanced scoped push on event {}: {}", self.event.uid, err);
        }
    }
}
