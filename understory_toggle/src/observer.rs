// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed observer list with generational subscription tokens.
//!
//! [`Observers`] stores handlers in slots. Each [`Observers::subscribe`] call returns a
//! [`SubscriptionToken`] naming the slot and its generation; [`Observers::unsubscribe`]
//! removes exactly that subscription. A token whose slot has since been reused by a newer
//! subscription is stale and unsubscribing it is a no-op, so double removal can never
//! detach someone else's handler.
//!
//! ```
//! use understory_toggle::observer::Observers;
//! use understory_toggle::types::InteractionMask;
//!
//! let mut observers: Observers<u32> = Observers::new();
//! let token = observers.subscribe(InteractionMask::CLICK, Box::new(|v: &u32| assert_eq!(*v, 7)));
//!
//! assert_eq!(observers.emit(InteractionMask::CLICK, &7), 1);
//! // Hover events do not reach a click-only subscriber.
//! assert_eq!(observers.emit(InteractionMask::HOVER_ENTER, &7), 0);
//!
//! assert!(observers.unsubscribe(token));
//! assert!(!observers.unsubscribe(token));
//! assert!(observers.is_empty());
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::types::InteractionMask;

/// Boxed event handler.
pub type Handler<E> = Box<dyn FnMut(&E)>;

/// Handle returned by a subscription (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionToken(u32, u32);

impl SubscriptionToken {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

struct Slot<E> {
    generation: u32,
    mask: InteractionMask,
    handler: Handler<E>,
}

/// A list of handlers for events of type `E`, filtered by [`InteractionMask`].
pub struct Observers<E> {
    slots: Vec<Option<Slot<E>>>,
    /// last generation per slot (persists across removals)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl<E> fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("live", &self.len())
            .field("slots", &self.slots.len())
            .field("free_list", &self.free_list.len())
            .finish()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Observers<E> {
    /// Create an empty observer list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Register `handler` for events matching `mask`.
    pub fn subscribe(&mut self, mask: InteractionMask, handler: Handler<E>) -> SubscriptionToken {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Slot {
                generation,
                mask,
                handler,
            });
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Slot {
                generation,
                mask,
                handler,
            }));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "SubscriptionToken uses 32-bit indices by design."
        )]
        let idx = idx as u32;
        SubscriptionToken::new(idx, generation)
    }

    /// Remove the subscription named by `token`.
    ///
    /// Returns `false` if the token is stale or was already removed.
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        if !self.is_live(token) {
            return false;
        }
        self.slots[token.idx()] = None;
        self.free_list.push(token.idx());
        true
    }

    /// Returns `true` if `token` names a current subscription.
    pub fn is_live(&self, token: SubscriptionToken) -> bool {
        matches!(
            self.slots.get(token.idx()),
            Some(Some(slot)) if slot.generation == token.1
        )
    }

    /// Deliver `event` to every handler whose mask intersects `kind`.
    ///
    /// Handlers run in subscription-slot order. Returns how many handlers ran.
    pub fn emit(&mut self, kind: InteractionMask, event: &E) -> usize {
        let mut delivered = 0;
        for slot in self.slots.iter_mut().flatten() {
            if slot.mask.intersects(kind) {
                (slot.handler)(event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if there are no live subscriptions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every subscription. Outstanding tokens become stale.
    pub fn clear(&mut self) {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.take().is_some() {
                self.free_list.push(idx);
            }
        }
    }
}
