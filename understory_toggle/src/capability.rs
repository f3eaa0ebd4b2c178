// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities a toggle control consumes from the host engine.
//!
//! The control never touches scene objects, meshes, audio, or XR devices directly. The host
//! implements these traits over its own primitives and hands them to
//! [`ToggleControl::start`](crate::control::ToggleControl::start).

use alloc::rc::Rc;
use core::cell::RefCell;
use glam::Vec3;

use crate::observer::{Handler, SubscriptionToken};
use crate::types::{Appearance, AppearanceSlot, Cue, HapticPulse, InteractionMask, PointerEvent};

/// Source of pointer interactions for one spatial region.
pub trait PointerTarget<K> {
    /// Register `handler` for events whose kind is in `mask`.
    fn subscribe(
        &mut self,
        mask: InteractionMask,
        handler: Handler<PointerEvent<K>>,
    ) -> SubscriptionToken;

    /// Remove a subscription. Returns `false` if `token` was not live.
    fn unsubscribe(&mut self, token: SubscriptionToken) -> bool;
}

/// Shared pointer target. The host keeps a clone to feed input into it.
pub type SharedPointerTarget<K> = Rc<RefCell<dyn PointerTarget<K>>>;

/// Visible appearance and transform of the control's surface.
pub trait Presenter {
    /// Display `appearance` as the `slot` appearance.
    fn set_appearance(&mut self, slot: AppearanceSlot, appearance: &Appearance);

    /// The appearance currently displayed.
    fn appearance(&self) -> Appearance;

    /// Move the visual element by `offset` relative to its current position.
    fn translate(&mut self, offset: Vec3);

    /// Place the visual element at an absolute position.
    fn set_position(&mut self, position: Vec3);

    /// Absolute position of the visual element.
    fn position(&self) -> Vec3;
}

/// Audio and haptic output.
pub trait FeedbackEmitter<K> {
    /// Play a short cue.
    fn play_sound(&mut self, cue: Cue);

    /// Pulse the haptic actuator of the input device owned by `target`.
    ///
    /// Implementations must silently ignore targets without a haptic-capable device.
    fn pulse_haptic(&mut self, target: &K, pulse: HapticPulse);
}

/// Secondary element mirroring the toggle state.
pub trait LinkedTarget {
    /// Show or hide the element.
    fn set_visible(&mut self, visible: bool);

    /// Replace the element's text content.
    fn set_content(&mut self, text: &str);

    /// The element's current appearance.
    ///
    /// Read once at start by controls using an appearance mirror. Targets that have no
    /// appearance of their own can keep the default.
    fn appearance(&self) -> Appearance {
        Appearance::default()
    }

    /// Replace the element's appearance. Ignored by default.
    fn set_appearance(&mut self, appearance: &Appearance) {
        let _ = appearance;
    }
}
