// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A reference [`PointerTarget`] that turns raw cursor input into interactions.
//!
//! Hosts whose engine already reports hover/press/click per object can implement
//! [`PointerTarget`] directly. Hosts that only know "cursor `c` is over this object" and
//! "cursor `c` went down/up" can feed those facts into a [`PointerHub`], which emits:
//!
//! - `HoverEnter` when the first cursor enters, `HoverExit` when the last one leaves.
//! - `Press` when a cursor inside the region goes down.
//! - `Release` when a cursor that pressed here goes up, followed by `Click` if that cursor
//!   is still inside.
//!
//! A cursor leaving the region cancels its press, so no release or click follows.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use understory_toggle::capability::PointerTarget;
//! use understory_toggle::pointer::PointerHub;
//! use understory_toggle::types::{Cursor, InteractionKind, InteractionMask, PointerEvent};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut hub: PointerHub<u32> = PointerHub::new();
//! let log = Rc::clone(&seen);
//! hub.subscribe(InteractionMask::all(), Box::new(move |e: &PointerEvent<u32>| log.borrow_mut().push(e.kind)));
//!
//! let left = Cursor::ray(1);
//! hub.pointer_enter(left);
//! hub.pointer_down(left);
//! hub.pointer_up(left);
//! hub.pointer_leave(left);
//!
//! assert_eq!(*seen.borrow(), vec![
//!     InteractionKind::HoverEnter,
//!     InteractionKind::Press,
//!     InteractionKind::Release,
//!     InteractionKind::Click,
//!     InteractionKind::HoverExit,
//! ]);
//! ```

use alloc::collections::BTreeMap;
use core::fmt;

use smallvec::SmallVec;

use crate::capability::PointerTarget;
use crate::observer::{Handler, Observers, SubscriptionToken};
use crate::types::{Cursor, InteractionKind, InteractionMask, PointerEvent};

/// Per-region pointer state and subscribers.
///
/// Cursors are identified by their owner element, so `K` must be orderable.
pub struct PointerHub<K> {
    observers: Observers<PointerEvent<K>>,
    /// Cursors currently inside the region, in entry order.
    inside: SmallVec<[Cursor<K>; 2]>,
    /// Active presses per cursor owner.
    presses: BTreeMap<K, Cursor<K>>,
}

impl<K: fmt::Debug> fmt::Debug for PointerHub<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerHub")
            .field("observers", &self.observers)
            .field("inside", &self.inside)
            .field("presses", &self.presses)
            .finish()
    }
}

impl<K: Ord + Clone> Default for PointerHub<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone> PointerHub<K> {
    /// Create a hub with no cursors and no subscribers.
    pub fn new() -> Self {
        Self {
            observers: Observers::new(),
            inside: SmallVec::new(),
            presses: BTreeMap::new(),
        }
    }

    fn emit(&mut self, kind: InteractionKind, cursor: Cursor<K>) {
        let event = PointerEvent::new(kind, cursor);
        self.observers.emit(kind.mask(), &event);
    }

    fn position_of(&self, owner: &K) -> Option<usize> {
        self.inside.iter().position(|c| c.owner == *owner)
    }

    /// Record that `cursor` now intersects the region.
    ///
    /// Returns `true` if this produced a hover-enter.
    pub fn pointer_enter(&mut self, cursor: Cursor<K>) -> bool {
        if self.position_of(&cursor.owner).is_some() {
            return false;
        }
        let first = self.inside.is_empty();
        self.inside.push(cursor.clone());
        if first {
            self.emit(InteractionKind::HoverEnter, cursor);
        }
        first
    }

    /// Record that `cursor` no longer intersects the region. Cancels its press.
    ///
    /// Returns `true` if this produced a hover-exit.
    pub fn pointer_leave(&mut self, cursor: Cursor<K>) -> bool {
        let Some(idx) = self.position_of(&cursor.owner) else {
            return false;
        };
        self.inside.remove(idx);
        self.presses.remove(&cursor.owner);
        if self.inside.is_empty() {
            self.emit(InteractionKind::HoverExit, cursor);
            true
        } else {
            false
        }
    }

    /// Record a pointer down. Ignored unless `cursor` is inside the region.
    ///
    /// Returns `true` if a press was emitted.
    pub fn pointer_down(&mut self, cursor: Cursor<K>) -> bool {
        if self.position_of(&cursor.owner).is_none() {
            return false;
        }
        self.presses.insert(cursor.owner.clone(), cursor.clone());
        self.emit(InteractionKind::Press, cursor);
        true
    }

    /// Record a pointer up.
    ///
    /// Emits a release if `cursor` pressed here, then a click if it is still inside.
    /// Returns `true` if a click was emitted.
    pub fn pointer_up(&mut self, cursor: Cursor<K>) -> bool {
        if self.presses.remove(&cursor.owner).is_none() {
            return false;
        }
        let inside = self.position_of(&cursor.owner).is_some();
        self.emit(InteractionKind::Release, cursor.clone());
        if inside {
            self.emit(InteractionKind::Click, cursor);
        }
        inside
    }

    /// Cancel the press of the cursor owned by `owner` without emitting anything.
    ///
    /// Returns `true` if a press was canceled.
    pub fn cancel(&mut self, owner: &K) -> bool {
        self.presses.remove(owner).is_some()
    }

    /// Whether any cursor hovers the region.
    pub fn is_hovered(&self) -> bool {
        !self.inside.is_empty()
    }

    /// Whether the cursor owned by `owner` has an active press.
    pub fn is_pressed(&self, owner: &K) -> bool {
        self.presses.contains_key(owner)
    }

    /// Cursors currently inside the region, in entry order.
    pub fn hovering(&self) -> impl Iterator<Item = &Cursor<K>> {
        self.inside.iter()
    }

    /// Forget all cursors and presses without emitting anything. Subscribers are kept.
    pub fn reset(&mut self) {
        self.inside.clear();
        self.presses.clear();
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}

impl<K: Ord + Clone> PointerTarget<K> for PointerHub<K> {
    fn subscribe(
        &mut self,
        mask: InteractionMask,
        handler: Handler<PointerEvent<K>>,
    ) -> SubscriptionToken {
        self.observers.subscribe(mask, handler)
    }

    fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        self.observers.unsubscribe(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    type Log = Rc<RefCell<Vec<(InteractionKind, u32)>>>;

    fn hub_with_log(mask: InteractionMask) -> (PointerHub<u32>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut hub = PointerHub::new();
        let sink = Rc::clone(&log);
        hub.subscribe(
            mask,
            Box::new(move |e: &PointerEvent<u32>| sink.borrow_mut().push((e.kind, e.cursor.owner))),
        );
        (hub, log)
    }

    #[test]
    fn hover_counts_multiple_cursors() {
        let (mut hub, log) = hub_with_log(InteractionMask::HOVER);
        let left = Cursor::ray(1);
        let right = Cursor::ray(2);

        assert!(hub.pointer_enter(left));
        assert!(!hub.pointer_enter(right));
        assert!(!hub.pointer_enter(left));
        assert!(!hub.pointer_leave(left));
        assert!(hub.is_hovered());
        assert!(hub.pointer_leave(right));
        assert!(!hub.pointer_leave(right));

        assert_eq!(
            *log.borrow(),
            vec![(InteractionKind::HoverEnter, 1), (InteractionKind::HoverExit, 2)]
        );
    }

    #[test]
    fn down_outside_is_ignored() {
        let (mut hub, log) = hub_with_log(InteractionMask::all());
        assert!(!hub.pointer_down(Cursor::ray(1)));
        assert!(!hub.pointer_up(Cursor::ray(1)));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn leaving_cancels_press() {
        let (mut hub, log) = hub_with_log(InteractionMask::PRESS | InteractionMask::CLICK);
        let c = Cursor::touch(3);
        hub.pointer_enter(c);
        hub.pointer_down(c);
        assert!(hub.is_pressed(&3));
        hub.pointer_leave(c);
        assert!(!hub.is_pressed(&3));
        assert!(!hub.pointer_up(c));
        assert_eq!(*log.borrow(), vec![(InteractionKind::Press, 3)]);
    }

    #[test]
    fn presses_are_tracked_per_cursor() {
        let (mut hub, log) = hub_with_log(InteractionMask::CLICK);
        let a = Cursor::ray(1);
        let b = Cursor::touch(2);
        hub.pointer_enter(a);
        hub.pointer_enter(b);
        hub.pointer_down(a);
        hub.pointer_down(b);
        assert!(hub.pointer_up(b));
        assert!(hub.cancel(&1));
        assert!(!hub.pointer_up(a));
        assert_eq!(*log.borrow(), vec![(InteractionKind::Click, 2)]);
    }

    #[test]
    fn reset_forgets_state_but_keeps_subscribers() {
        let (mut hub, log) = hub_with_log(InteractionMask::HOVER_ENTER);
        hub.pointer_enter(Cursor::ray(1));
        hub.reset();
        assert!(!hub.is_hovered());
        assert_eq!(hub.subscriber_count(), 1);
        hub.pointer_enter(Cursor::ray(1));
        assert_eq!(log.borrow().len(), 2);
    }
}
