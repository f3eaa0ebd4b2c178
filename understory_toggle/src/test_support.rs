// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording collaborators shared by the unit tests.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use glam::Vec3;

use crate::capability::{FeedbackEmitter, LinkedTarget, Presenter};
use crate::config::ToggleConfig;
use crate::control::{Collaborators, ToggleControl};
use crate::error::ToggleError;
use crate::pointer::PointerHub;
use crate::types::{Appearance, AppearanceSlot, Cue, HapticPulse, Rgba};

/// One observable side effect.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Effect {
    Appearance(AppearanceSlot, Appearance),
    Translate(Vec3),
    SetPosition(Vec3),
    Sound(Cue),
    Haptic(u32, HapticPulse),
    Visible(bool),
    Content(String),
    LinkedAppearance(Appearance),
}

type Log = Rc<RefCell<Vec<Effect>>>;

struct Surface {
    log: Log,
    position: Rc<RefCell<Vec3>>,
    current: Appearance,
}

impl Presenter for Surface {
    fn set_appearance(&mut self, slot: AppearanceSlot, appearance: &Appearance) {
        self.current = *appearance;
        self.log
            .borrow_mut()
            .push(Effect::Appearance(slot, *appearance));
    }

    fn appearance(&self) -> Appearance {
        self.current
    }

    fn translate(&mut self, offset: Vec3) {
        *self.position.borrow_mut() += offset;
        self.log.borrow_mut().push(Effect::Translate(offset));
    }

    fn set_position(&mut self, position: Vec3) {
        *self.position.borrow_mut() = position;
        self.log.borrow_mut().push(Effect::SetPosition(position));
    }

    fn position(&self) -> Vec3 {
        *self.position.borrow()
    }
}

struct Speaker {
    log: Log,
}

impl FeedbackEmitter<u32> for Speaker {
    fn play_sound(&mut self, cue: Cue) {
        self.log.borrow_mut().push(Effect::Sound(cue));
    }

    fn pulse_haptic(&mut self, target: &u32, pulse: HapticPulse) {
        self.log.borrow_mut().push(Effect::Haptic(*target, pulse));
    }
}

struct Label {
    log: Log,
    visible: Rc<RefCell<Option<bool>>>,
    look: Appearance,
}

impl LinkedTarget for Label {
    fn set_visible(&mut self, visible: bool) {
        *self.visible.borrow_mut() = Some(visible);
        self.log.borrow_mut().push(Effect::Visible(visible));
    }

    fn set_content(&mut self, text: &str) {
        self.log.borrow_mut().push(Effect::Content(text.to_string()));
    }

    fn appearance(&self) -> Appearance {
        self.look
    }

    fn set_appearance(&mut self, appearance: &Appearance) {
        self.look = *appearance;
        self.log
            .borrow_mut()
            .push(Effect::LinkedAppearance(*appearance));
    }
}

/// A pointer hub plus recording presenter, feedback, and optional linked target.
pub(crate) struct Rig {
    pub(crate) hub: Rc<RefCell<PointerHub<u32>>>,
    log: Log,
    position: Rc<RefCell<Vec3>>,
    visible: Rc<RefCell<Option<bool>>>,
    linked: bool,
}

impl Rig {
    pub(crate) const DEFAULT_LOOK: Appearance = Appearance::new(1, Rgba::new(0.5, 0.5, 0.5, 1.0));
    pub(crate) const LINKED_LOOK: Appearance = Appearance::new(4, Rgba::new(0.1, 0.8, 0.1, 1.0));

    pub(crate) fn new(rest: Vec3) -> Self {
        Self {
            hub: Rc::new(RefCell::new(PointerHub::new())),
            log: Rc::new(RefCell::new(Vec::new())),
            position: Rc::new(RefCell::new(rest)),
            visible: Rc::new(RefCell::new(None)),
            linked: false,
        }
    }

    pub(crate) fn with_linked(rest: Vec3) -> Self {
        Self {
            linked: true,
            ..Self::new(rest)
        }
    }

    /// Fresh collaborators writing into this rig.
    pub(crate) fn collaborators(&self) -> Collaborators<u32> {
        let mut parts = Collaborators::new()
            .with_pointer(self.hub.clone())
            .with_presenter(Box::new(Surface {
                log: Rc::clone(&self.log),
                position: Rc::clone(&self.position),
                current: Self::DEFAULT_LOOK,
            }))
            .with_feedback(Box::new(Speaker {
                log: Rc::clone(&self.log),
            }));
        if self.linked {
            parts = parts.with_linked(Box::new(Label {
                log: Rc::clone(&self.log),
                visible: Rc::clone(&self.visible),
                look: Self::LINKED_LOOK,
            }));
        }
        parts
    }

    pub(crate) fn start(
        &self,
        name: &str,
        config: ToggleConfig,
    ) -> Result<ToggleControl<u32>, ToggleError> {
        ToggleControl::start(name, config, self.collaborators())
    }

    pub(crate) fn effects(&self) -> Vec<Effect> {
        self.log.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    pub(crate) fn position(&self) -> Vec3 {
        *self.position.borrow()
    }

    pub(crate) fn linked_visible(&self) -> Option<bool> {
        *self.visible.borrow()
    }

    pub(crate) fn last_appearance(&self) -> Option<(AppearanceSlot, Appearance)> {
        self.log.borrow().iter().rev().find_map(|e| match e {
            Effect::Appearance(slot, look) => Some((*slot, *look)),
            _ => None,
        })
    }
}
