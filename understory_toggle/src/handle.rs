// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared handle binding a control to its pointer target.
//!
//! [`ControlHandle::activate`] subscribes the control to its pointer target and
//! [`ControlHandle::deactivate`] removes that subscription. Both are idempotent: activating
//! twice subscribes once, deactivating an inactive control does nothing.
//!
//! The subscription holds only a weak reference to the control. Dropping every handle
//! turns the subscription into a no-op; deactivate first to also free the slot.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use glam::Vec3;
//! use understory_toggle::capability::{FeedbackEmitter, Presenter};
//! use understory_toggle::config::ToggleConfig;
//! use understory_toggle::control::Collaborators;
//! use understory_toggle::handle::ControlHandle;
//! use understory_toggle::pointer::PointerHub;
//! use understory_toggle::types::{Appearance, AppearanceSlot, Cue, Cursor, HapticPulse};
//!
//! struct Surface(Vec3);
//! impl Presenter for Surface {
//!     fn set_appearance(&mut self, _: AppearanceSlot, _: &Appearance) {}
//!     fn appearance(&self) -> Appearance { Appearance::default() }
//!     fn translate(&mut self, offset: Vec3) { self.0 += offset; }
//!     fn set_position(&mut self, position: Vec3) { self.0 = position; }
//!     fn position(&self) -> Vec3 { self.0 }
//! }
//! struct Silent;
//! impl FeedbackEmitter<u32> for Silent {
//!     fn play_sound(&mut self, _: Cue) {}
//!     fn pulse_haptic(&mut self, _: &u32, _: HapticPulse) {}
//! }
//!
//! let hub = Rc::new(RefCell::new(PointerHub::<u32>::new()));
//! let handle = ControlHandle::start(
//!     "lamp_button",
//!     ToggleConfig::default(),
//!     Collaborators::new()
//!         .with_pointer(hub.clone())
//!         .with_presenter(Box::new(Surface(Vec3::ZERO)))
//!         .with_feedback(Box::new(Silent)),
//! )
//! .unwrap();
//!
//! assert!(handle.activate().unwrap());
//! assert!(!handle.activate().unwrap());
//! assert_eq!(hub.borrow().subscriber_count(), 1);
//!
//! let hand = Cursor::ray(1);
//! hub.borrow_mut().pointer_enter(hand);
//! hub.borrow_mut().pointer_down(hand);
//! hub.borrow_mut().pointer_up(hand);
//! assert!(handle.with(|c| c.is_toggled()));
//!
//! assert!(handle.deactivate());
//! assert_eq!(hub.borrow().subscriber_count(), 0);
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

use log::{debug, warn};

use crate::config::ToggleConfig;
use crate::control::{Collaborators, ToggleControl};
use crate::error::ToggleError;
use crate::types::{InteractionMask, PointerEvent};

/// Reference-counted handle to a [`ToggleControl`].
pub struct ControlHandle<K> {
    inner: Rc<RefCell<ToggleControl<K>>>,
}

impl<K> Clone for ControlHandle<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K> fmt::Debug for ControlHandle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(control) => f.debug_tuple("ControlHandle").field(&*control).finish(),
            Err(_) => f.write_str("ControlHandle(<borrowed>)"),
        }
    }
}

impl<K: 'static> ControlHandle<K> {
    /// Wrap an already started control.
    pub fn new(control: ToggleControl<K>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(control)),
        }
    }

    /// Start a control and wrap it. See [`ToggleControl::start`].
    pub fn start(
        name: impl Into<String>,
        config: ToggleConfig,
        collaborators: Collaborators<K>,
    ) -> Result<Self, ToggleError> {
        ToggleControl::start(name, config, collaborators).map(Self::new)
    }

    /// Subscribe the control to its pointer target.
    ///
    /// Returns `Ok(false)` if it was already subscribed.
    pub fn activate(&self) -> Result<bool, ToggleError> {
        let mut control = self.inner.borrow_mut();
        if control.subscription.is_some() {
            return Ok(false);
        }
        let weak = Rc::downgrade(&self.inner);
        let handler = Box::new(move |event: &PointerEvent<K>| {
            let Some(control) = weak.upgrade() else {
                return;
            };
            match control.try_borrow_mut() {
                Ok(mut control) => {
                    control.handle(event);
                }
                Err(_) => warn!("dropping reentrant {:?} delivered to a busy control", event.kind),
            }
        });
        let pointer = Rc::clone(control.pointer());
        let Ok(mut target) = pointer.try_borrow_mut() else {
            return Err(ToggleError::PointerTargetBusy {
                control: control.name().into(),
            });
        };
        control.subscription = Some(target.subscribe(InteractionMask::all(), handler));
        debug!("toggle control `{}` activated", control.name());
        Ok(true)
    }

    /// Remove the control's subscription.
    ///
    /// Returns `false` if it was not subscribed. If the pointer target is busy the
    /// subscription is kept and `false` is returned.
    pub fn deactivate(&self) -> bool {
        let mut control = self.inner.borrow_mut();
        let Some(token) = control.subscription else {
            return false;
        };
        let pointer = Rc::clone(control.pointer());
        let Ok(mut target) = pointer.try_borrow_mut() else {
            warn!(
                "toggle control `{}` cannot deactivate while its pointer target is busy",
                control.name()
            );
            return false;
        };
        target.unsubscribe(token);
        control.subscription = None;
        debug!("toggle control `{}` deactivated", control.name());
        true
    }

    /// Whether the control is subscribed to its pointer target.
    ///
    /// # Panics
    ///
    /// Panics if the control is borrowed mutably, see [`with`](Self::with).
    pub fn is_active(&self) -> bool {
        self.inner.borrow().is_subscribed()
    }

    /// Run `f` with shared access to the control.
    ///
    /// # Panics
    ///
    /// Panics if the control is borrowed mutably. That is the case while it handles an
    /// event, so collaborators must use [`try_with`](Self::try_with) instead.
    pub fn with<R>(&self, f: impl FnOnce(&ToggleControl<K>) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Run `f` with shared access to the control, or return `None` while it is busy.
    pub fn try_with<R>(&self, f: impl FnOnce(&ToggleControl<K>) -> R) -> Option<R> {
        self.inner.try_borrow().ok().map(|control| f(&control))
    }

    /// Run `f` with exclusive access to the control.
    ///
    /// # Panics
    ///
    /// Panics if the control is already borrowed, e.g. when called from one of its own
    /// collaborators.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut ToggleControl<K>) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}
