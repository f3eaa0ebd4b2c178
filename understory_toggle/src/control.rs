// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive toggle control.
//!
//! [`ToggleControl`] owns its [`ToggleState`] and drives its collaborators from pointer
//! events. Every handled event recomputes the displayed appearance from the state, so the
//! surface never shows a stale slot.
//!
//! ## Transitions
//!
//! | event        | state change            | effects                                                        |
//! |--------------|-------------------------|----------------------------------------------------------------|
//! | hover-enter  | `hovered = true`        | appearance, haptic 0.5/50ms, label preview shown (untoggled)   |
//! | hover-exit   | `hovered = false`       | appearance, haptic 0.3/50ms, label preview hidden              |
//! | toggle → on  | `toggled = true`        | `click` cue, translate by offset, haptic 1.0/20ms, linked updated |
//! | toggle → off | `toggled = false`       | `unclick` cue, restore rest position, haptic 0.7/20ms, linked restored |
//!
//! On toggle a visibility mirror or label preview hides the linked target, and an
//! appearance mirror gives it the control's hover appearance. Untoggling shows the
//! visibility mirror again and hands the appearance mirror back the appearance it had at
//! start.
//!
//! Which of click, press, and release toggle is decided by [`InteractionHooks`]. The
//! default hooks toggle on click, and on press from touch cursors when
//! [`ToggleConfig::touch_activates_on_press`] is set.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use glam::Vec3;
//! use understory_toggle::capability::{FeedbackEmitter, Presenter, SharedPointerTarget};
//! use understory_toggle::config::ToggleConfig;
//! use understory_toggle::control::{Collaborators, ToggleControl};
//! use understory_toggle::pointer::PointerHub;
//! use understory_toggle::types::{Appearance, AppearanceSlot, Cue, Cursor, HapticPulse, PointerEvent};
//!
//! #[derive(Default)]
//! struct Surface { slot: Option<AppearanceSlot>, position: Vec3 }
//! impl Presenter for Surface {
//!     fn set_appearance(&mut self, slot: AppearanceSlot, _: &Appearance) { self.slot = Some(slot); }
//!     fn appearance(&self) -> Appearance { Appearance::default() }
//!     fn translate(&mut self, offset: Vec3) { self.position += offset; }
//!     fn set_position(&mut self, position: Vec3) { self.position = position; }
//!     fn position(&self) -> Vec3 { self.position }
//! }
//!
//! struct Silent;
//! impl FeedbackEmitter<u32> for Silent {
//!     fn play_sound(&mut self, _: Cue) {}
//!     fn pulse_haptic(&mut self, _: &u32, _: HapticPulse) {}
//! }
//!
//! let pointer: SharedPointerTarget<u32> = Rc::new(RefCell::new(PointerHub::<u32>::new()));
//! let mut control = ToggleControl::start(
//!     "lamp_button",
//!     ToggleConfig::default(),
//!     Collaborators::new()
//!         .with_pointer(pointer)
//!         .with_presenter(Box::new(Surface::default()))
//!         .with_feedback(Box::new(Silent)),
//! )
//! .unwrap();
//!
//! let hand = Cursor::ray(1_u32);
//! control.handle(&PointerEvent::hover_enter(hand));
//! control.handle(&PointerEvent::click(hand));
//! assert!(control.is_toggled());
//! assert_eq!(control.slot(), AppearanceSlot::ToggledHover);
//! ```

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use glam::Vec3;
use log::{debug, error, warn};

use crate::capability::{FeedbackEmitter, LinkedTarget, Presenter, SharedPointerTarget};
use crate::config::{LinkedBehavior, Palette, ToggleConfig};
use crate::error::{Collaborator, ToggleError};
use crate::observer::SubscriptionToken;
use crate::state::ToggleState;
use crate::types::{
    Appearance, AppearanceSlot, Cue, Cursor, HapticPulse, InteractionKind, PointerEvent,
};

/// What a hook wants done with an interaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HookAction {
    /// Leave the toggle state alone.
    Ignore,
    /// Flip the toggle state.
    Toggle,
}

/// Overridable reactions to press, release, and click.
///
/// Hover handling is fixed; these hooks only decide whether an interaction toggles.
pub trait InteractionHooks<K> {
    /// Called on press (pointer down). Ignored by default.
    fn on_press(&mut self, cursor: &Cursor<K>) -> HookAction {
        let _ = cursor;
        HookAction::Ignore
    }

    /// Called on release (pointer up). Ignored by default.
    fn on_release(&mut self, cursor: &Cursor<K>) -> HookAction {
        let _ = cursor;
        HookAction::Ignore
    }

    /// Called on click. Toggles by default.
    fn on_click(&mut self, cursor: &Cursor<K>) -> HookAction {
        let _ = cursor;
        HookAction::Toggle
    }
}

/// Hooks derived from a [`ToggleConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DefaultHooks {
    /// Mirrors [`ToggleConfig::toggle_on_click`].
    pub toggle_on_click: bool,
    /// Mirrors [`ToggleConfig::touch_activates_on_press`].
    pub touch_activates_on_press: bool,
}

impl DefaultHooks {
    /// Hooks implementing `config`.
    pub fn from_config(config: &ToggleConfig) -> Self {
        Self {
            toggle_on_click: config.toggle_on_click,
            touch_activates_on_press: config.touch_activates_on_press,
        }
    }

    fn press_toggles<K>(&self, cursor: &Cursor<K>) -> bool {
        self.toggle_on_click && self.touch_activates_on_press && cursor.is_touch()
    }
}

impl<K> InteractionHooks<K> for DefaultHooks {
    fn on_press(&mut self, cursor: &Cursor<K>) -> HookAction {
        if self.press_toggles(cursor) {
            HookAction::Toggle
        } else {
            HookAction::Ignore
        }
    }

    fn on_click(&mut self, cursor: &Cursor<K>) -> HookAction {
        // A touch cursor that already toggled on press must not toggle again on click.
        if self.toggle_on_click && !self.press_toggles(cursor) {
            HookAction::Toggle
        } else {
            HookAction::Ignore
        }
    }
}

/// The collaborators a control is started with.
///
/// Fields left `None` are reported as [`ToggleError::MissingCollaborator`] by
/// [`ToggleControl::start`].
pub struct Collaborators<K> {
    /// Source of pointer events.
    pub pointer: Option<SharedPointerTarget<K>>,
    /// Surface appearance and transform.
    pub presenter: Option<Box<dyn Presenter>>,
    /// Sound and haptics.
    pub feedback: Option<Box<dyn FeedbackEmitter<K>>>,
    /// Secondary element, required when the linked behavior is not `None`.
    pub linked: Option<Box<dyn LinkedTarget>>,
    /// Custom hooks. `None` uses [`DefaultHooks`].
    pub hooks: Option<Box<dyn InteractionHooks<K>>>,
}

impl<K> fmt::Debug for Collaborators<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators")
            .field("pointer", &self.pointer.is_some())
            .field("presenter", &self.presenter.is_some())
            .field("feedback", &self.feedback.is_some())
            .field("linked", &self.linked.is_some())
            .field("hooks", &self.hooks.is_some())
            .finish()
    }
}

impl<K> Default for Collaborators<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Collaborators<K> {
    /// No collaborators.
    pub fn new() -> Self {
        Self {
            pointer: None,
            presenter: None,
            feedback: None,
            linked: None,
            hooks: None,
        }
    }

    /// Set the pointer target.
    #[must_use]
    pub fn with_pointer(mut self, pointer: SharedPointerTarget<K>) -> Self {
        self.pointer = Some(pointer);
        self
    }

    /// Set the presenter.
    #[must_use]
    pub fn with_presenter(mut self, presenter: Box<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Set the feedback emitter.
    #[must_use]
    pub fn with_feedback(mut self, feedback: Box<dyn FeedbackEmitter<K>>) -> Self {
        self.feedback = Some(feedback);
        self
    }

    /// Set the linked target.
    #[must_use]
    pub fn with_linked(mut self, linked: Box<dyn LinkedTarget>) -> Self {
        self.linked = Some(linked);
        self
    }

    /// Replace the default hooks.
    #[must_use]
    pub fn with_hooks(mut self, hooks: Box<dyn InteractionHooks<K>>) -> Self {
        self.hooks = Some(hooks);
        self
    }
}

/// Report of one handled event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// The interaction that was handled.
    pub kind: InteractionKind,
    /// State before the event.
    pub from: ToggleState,
    /// State after the event.
    pub to: ToggleState,
}

impl Transition {
    /// Whether the toggle flag changed.
    pub const fn toggled_changed(&self) -> bool {
        self.from.is_toggled() != self.to.is_toggled()
    }
}

/// A toggleable interactive control bound to one scene element.
pub struct ToggleControl<K> {
    name: String,
    config: ToggleConfig,
    palette: Palette,
    state: ToggleState,
    rest_position: Vec3,
    label: Option<String>,
    warnings: Vec<ToggleError>,
    pointer: SharedPointerTarget<K>,
    presenter: Box<dyn Presenter>,
    feedback: Box<dyn FeedbackEmitter<K>>,
    linked: Option<Box<dyn LinkedTarget>>,
    /// Appearance an appearance-mirrored target is restored to.
    linked_default: Option<Appearance>,
    hooks: Box<dyn InteractionHooks<K>>,
    pub(crate) subscription: Option<SubscriptionToken>,
}

impl<K> fmt::Debug for ToggleControl<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleControl")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("rest_position", &self.rest_position)
            .field("label", &self.label)
            .field("warnings", &self.warnings.len())
            .field("subscribed", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}

impl<K> ToggleControl<K> {
    /// Start a control named `name`.
    ///
    /// Reads the presenter's current appearance as the default appearance and its
    /// position as the rest position, then displays the default appearance and puts the
    /// linked target in its untoggled state. An appearance-mirrored target's current
    /// appearance is kept for restoring on untoggle.
    ///
    /// Fails with [`ToggleError::MissingCollaborator`] when the pointer target, presenter,
    /// or feedback emitter is absent, or when `config.linked` needs a linked target and
    /// none was given. A label lookup without an entry for `name` is recorded as a
    /// [`ToggleError::InvalidConfiguration`] warning and does not prevent startup.
    pub fn start(
        name: impl Into<String>,
        config: ToggleConfig,
        collaborators: Collaborators<K>,
    ) -> Result<Self, ToggleError> {
        let name = name.into();
        let missing = |collaborator: Collaborator| {
            error!("toggle control `{name}` cannot start: missing {collaborator}");
            ToggleError::MissingCollaborator {
                control: name.clone(),
                collaborator,
            }
        };

        let Collaborators {
            pointer,
            presenter,
            feedback,
            linked,
            hooks,
        } = collaborators;
        let pointer = pointer.ok_or_else(|| missing(Collaborator::PointerTarget))?;
        let presenter = presenter.ok_or_else(|| missing(Collaborator::Presenter))?;
        let feedback = feedback.ok_or_else(|| missing(Collaborator::FeedbackEmitter))?;
        if config.linked.needs_target() && linked.is_none() {
            return Err(missing(Collaborator::LinkedTarget));
        }
        let linked = if config.linked.needs_target() {
            linked
        } else {
            if linked.is_some() {
                debug!("toggle control `{name}` ignores its linked target (no linked behavior)");
            }
            None
        };

        let mut warnings = Vec::new();
        let label = match &config.linked {
            LinkedBehavior::LabelPreview(lookup) => {
                let label = lookup.resolve(&name).map(ToOwned::to_owned);
                if label.is_none() {
                    let err = ToggleError::InvalidConfiguration {
                        control: name.clone(),
                        reason: format!("label lookup has no entry for the key of `{name}`"),
                    };
                    warn!("{err}; label previews keep their current content");
                    warnings.push(err);
                }
                label
            }
            _ => None,
        };

        let palette = Palette::from_config(presenter.appearance(), &config);
        let linked_default = match config.linked {
            LinkedBehavior::AppearanceMirror => linked.as_ref().map(|l| l.appearance()),
            _ => None,
        };
        let rest_position = presenter.position();
        let hooks = hooks.unwrap_or_else(|| Box::new(DefaultHooks::from_config(&config)));

        let mut control = Self {
            name,
            config,
            palette,
            state: ToggleState::Idle,
            rest_position,
            label,
            warnings,
            pointer,
            presenter,
            feedback,
            linked,
            linked_default,
            hooks,
            subscription: None,
        };
        control.show_appearance();
        match control.config.linked {
            LinkedBehavior::None | LinkedBehavior::AppearanceMirror => {}
            LinkedBehavior::VisibilityMirror => control.set_linked_visible(true),
            LinkedBehavior::LabelPreview(_) => control.set_linked_visible(false),
        }
        debug!(
            "toggle control `{}` started at rest position {}",
            control.name, control.rest_position
        );
        Ok(control)
    }

    /// Handle one pointer event.
    ///
    /// Returns the transition, or `None` when the hooks chose to ignore the interaction.
    pub fn handle(&mut self, event: &PointerEvent<K>) -> Option<Transition> {
        let from = self.state;
        let cursor = &event.cursor;
        match event.kind {
            InteractionKind::HoverEnter => self.hover_enter(cursor),
            InteractionKind::HoverExit => self.hover_exit(cursor),
            InteractionKind::Press => {
                if self.hooks.on_press(cursor) == HookAction::Ignore {
                    return None;
                }
                self.flip(cursor);
            }
            InteractionKind::Release => {
                if self.hooks.on_release(cursor) == HookAction::Ignore {
                    return None;
                }
                self.flip(cursor);
            }
            InteractionKind::Click => {
                if self.hooks.on_click(cursor) == HookAction::Ignore {
                    return None;
                }
                self.flip(cursor);
            }
        }
        let transition = Transition {
            kind: event.kind,
            from,
            to: self.state,
        };
        debug!(
            "toggle control `{}`: {:?} {:?} -> {:?}",
            self.name, transition.kind, transition.from, transition.to
        );
        Some(transition)
    }

    /// Flip the toggle as if clicked by `cursor`, bypassing the hooks.
    pub fn toggle(&mut self, cursor: &Cursor<K>) -> Transition {
        let from = self.state;
        self.flip(cursor);
        Transition {
            kind: InteractionKind::Click,
            from,
            to: self.state,
        }
    }

    fn hover_enter(&mut self, cursor: &Cursor<K>) {
        self.state = self.state.hover_entered();
        self.show_appearance();
        self.feedback
            .pulse_haptic(&cursor.owner, HapticPulse::HOVER_ENTER);
        if !self.state.is_toggled() {
            self.show_label_preview();
        }
    }

    fn hover_exit(&mut self, cursor: &Cursor<K>) {
        self.state = self.state.hover_exited();
        self.show_appearance();
        self.feedback
            .pulse_haptic(&cursor.owner, HapticPulse::HOVER_EXIT);
        if matches!(self.config.linked, LinkedBehavior::LabelPreview(_)) {
            self.set_linked_visible(false);
        }
    }

    fn flip(&mut self, cursor: &Cursor<K>) {
        self.state = self.state.flipped();
        if self.state.is_toggled() {
            self.feedback.play_sound(Cue::Click);
            self.presenter.translate(self.config.move_offset);
            self.feedback
                .pulse_haptic(&cursor.owner, HapticPulse::TOGGLE_ON);
            match self.config.linked {
                LinkedBehavior::None => {}
                LinkedBehavior::VisibilityMirror | LinkedBehavior::LabelPreview(_) => {
                    self.set_linked_visible(false);
                }
                LinkedBehavior::AppearanceMirror => {
                    let hover = *self.palette.get(AppearanceSlot::Hover);
                    self.set_linked_appearance(&hover);
                }
            }
        } else {
            self.feedback.play_sound(Cue::Unclick);
            self.presenter.set_position(self.rest_position);
            self.feedback
                .pulse_haptic(&cursor.owner, HapticPulse::TOGGLE_OFF);
            match self.config.linked {
                LinkedBehavior::None => {}
                LinkedBehavior::VisibilityMirror => self.set_linked_visible(true),
                LinkedBehavior::AppearanceMirror => {
                    if let Some(original) = self.linked_default {
                        self.set_linked_appearance(&original);
                    }
                }
                LinkedBehavior::LabelPreview(_) => {
                    if self.state.is_hovered() {
                        self.show_label_preview();
                    }
                }
            }
        }
        self.show_appearance();
    }

    fn show_appearance(&mut self) {
        let slot = self.state.slot();
        self.presenter.set_appearance(slot, self.palette.get(slot));
    }

    fn show_label_preview(&mut self) {
        if !matches!(self.config.linked, LinkedBehavior::LabelPreview(_)) {
            return;
        }
        if let Some(linked) = self.linked.as_mut() {
            linked.set_visible(true);
            if let Some(label) = self.label.as_deref() {
                linked.set_content(label);
            }
        }
    }

    fn set_linked_visible(&mut self, visible: bool) {
        if let Some(linked) = self.linked.as_mut() {
            linked.set_visible(visible);
        }
    }

    fn set_linked_appearance(&mut self, appearance: &Appearance) {
        if let Some(linked) = self.linked.as_mut() {
            linked.set_appearance(appearance);
        }
    }

    /// Name of the owning element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current state.
    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Whether the control is toggled on.
    pub fn is_toggled(&self) -> bool {
        self.state.is_toggled()
    }

    /// Whether a cursor hovers the control.
    pub fn is_hovered(&self) -> bool {
        self.state.is_hovered()
    }

    /// The appearance slot currently displayed.
    pub fn slot(&self) -> AppearanceSlot {
        self.state.slot()
    }

    /// The control's appearances.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The active configuration.
    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Position restored when the control toggles off.
    pub fn rest_position(&self) -> Vec3 {
        self.rest_position
    }

    /// Change the rest position, e.g. after the host moved the element.
    ///
    /// If the control is currently untoggled the visual element is moved there immediately.
    pub fn set_rest_position(&mut self, position: Vec3) {
        self.rest_position = position;
        if !self.state.is_toggled() {
            self.presenter.set_position(position);
        }
    }

    /// Label shown by the label preview, if one was resolved.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Recoverable configuration problems found at start.
    pub fn warnings(&self) -> &[ToggleError] {
        &self.warnings
    }

    /// The pointer target this control listens to.
    pub fn pointer(&self) -> &SharedPointerTarget<K> {
        &self.pointer
    }

    /// Whether the control is currently subscribed to its pointer target.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ButtonPreset, LabelLookup};
    use crate::test_support::{Effect, Rig};
    use crate::types::{Appearance, Rgba};
    use alloc::vec;

    const HAND: u32 = 7;

    fn ray() -> Cursor<u32> {
        Cursor::ray(HAND)
    }

    fn toggled_look() -> Appearance {
        Appearance::new(20, Rgba::new(0.2, 0.6, 1.0, 0.8))
    }

    fn hover_look() -> Appearance {
        Appearance::new(10, Rgba::new(0.9, 0.9, 0.9, 1.0))
    }

    fn config(preset: ButtonPreset) -> ToggleConfig {
        ToggleConfig::preset(preset)
            .with_hover_appearance(hover_look())
            .with_toggled_appearance(toggled_look())
    }

    /// Click toggling without a linked target.
    fn plain() -> ToggleConfig {
        ToggleConfig::default()
            .with_hover_appearance(hover_look())
            .with_toggled_appearance(toggled_look())
    }

    #[test]
    fn start_shows_default_and_captures_rest() {
        let rig = Rig::new(Vec3::new(1.0, 2.0, 3.0));
        let control = rig.start("lamp_button", plain()).unwrap();
        assert_eq!(control.state(), ToggleState::Idle);
        assert_eq!(control.rest_position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            rig.effects(),
            vec![Effect::Appearance(AppearanceSlot::Default, Rig::DEFAULT_LOOK)]
        );
    }

    #[test]
    fn full_hover_click_scenario() {
        let rest = Vec3::new(0.25, 1.5, -0.5);
        let rig = Rig::new(rest);
        let mut control = rig.start("lamp_button", plain()).unwrap();
        rig.clear();

        control.handle(&PointerEvent::hover_enter(ray()));
        assert_eq!(
            rig.effects(),
            vec![
                Effect::Appearance(AppearanceSlot::Hover, hover_look()),
                Effect::Haptic(HAND, HapticPulse::HOVER_ENTER),
            ]
        );
        rig.clear();

        let t = control.handle(&PointerEvent::click(ray())).unwrap();
        assert!(t.toggled_changed());
        assert!(control.is_toggled());
        assert_eq!(
            rig.effects(),
            vec![
                Effect::Sound(Cue::Click),
                Effect::Translate(Vec3::new(0.0, -0.01, 0.0)),
                Effect::Haptic(HAND, HapticPulse::TOGGLE_ON),
                Effect::Appearance(
                    AppearanceSlot::ToggledHover,
                    toggled_look().brightened(1.2)
                ),
            ]
        );
        assert_eq!(rig.position(), rest + Vec3::new(0.0, -0.01, 0.0));
        rig.clear();

        control.handle(&PointerEvent::hover_exit(ray()));
        assert_eq!(
            rig.effects(),
            vec![
                Effect::Appearance(AppearanceSlot::Toggled, toggled_look()),
                Effect::Haptic(HAND, HapticPulse::HOVER_EXIT),
            ]
        );
        rig.clear();

        control.handle(&PointerEvent::click(ray()));
        assert!(!control.is_toggled());
        assert_eq!(
            rig.effects(),
            vec![
                Effect::Sound(Cue::Unclick),
                Effect::SetPosition(rest),
                Effect::Haptic(HAND, HapticPulse::TOGGLE_OFF),
                Effect::Appearance(AppearanceSlot::Default, Rig::DEFAULT_LOOK),
            ]
        );
        assert_eq!(rig.position(), rest);
    }

    #[test]
    fn repeated_clicks_restore_rest_exactly() {
        let rest = Vec3::new(0.1, 0.2, 0.3);
        let rig = Rig::new(rest);
        let mut control = rig.start("lamp_button", plain()).unwrap();
        for n in 1..=101 {
            control.handle(&PointerEvent::click(ray()));
            assert_eq!(control.is_toggled(), n % 2 == 1);
            if n % 2 == 0 {
                assert_eq!(rig.position(), rest);
            }
        }
    }

    #[test]
    fn hover_while_toggled_uses_brightened_toggled_look() {
        let saturated = Appearance::new(5, Rgba::new(1.0, 1.0, 0.5, 0.3));
        let rig = Rig::new(Vec3::ZERO);
        let cfg = ToggleConfig::default().with_toggled_appearance(saturated);
        let mut control = rig.start("b", cfg).unwrap();
        control.handle(&PointerEvent::click(ray()));
        control.handle(&PointerEvent::hover_enter(ray()));
        assert_eq!(control.slot(), AppearanceSlot::ToggledHover);
        let shown = rig.last_appearance().unwrap();
        assert_eq!(shown.1.color, Rgba::new(1.2, 1.2, 0.5 * 1.2, 0.3));
    }

    #[test]
    fn touch_press_toggles_and_suppresses_its_click() {
        let rig = Rig::with_linked(Vec3::ZERO);
        let mut control = rig.start("b", config(ButtonPreset::TouchToggle)).unwrap();
        rig.clear();

        let finger = Cursor::touch(HAND);
        let t = control.handle(&PointerEvent::press(finger)).unwrap();
        assert_eq!(t.kind, InteractionKind::Press);
        assert!(control.is_toggled());
        assert!(rig.effects().contains(&Effect::Sound(Cue::Click)));
        assert!(rig.effects().contains(&Effect::Visible(false)));

        assert_eq!(control.handle(&PointerEvent::release(finger)), None);
        assert_eq!(control.handle(&PointerEvent::click(finger)), None);
        assert!(control.is_toggled());
    }

    #[test]
    fn ray_press_does_not_toggle() {
        let rig = Rig::with_linked(Vec3::ZERO);
        let mut control = rig.start("b", config(ButtonPreset::TouchToggle)).unwrap();
        rig.clear();
        assert_eq!(control.handle(&PointerEvent::press(ray())), None);
        assert!(!control.is_toggled());
        assert!(rig.effects().is_empty());
        // Ray clicks still toggle.
        control.handle(&PointerEvent::click(ray()));
        assert!(control.is_toggled());
    }

    #[test]
    fn press_is_ignored_without_touch_activation() {
        let rig = Rig::new(Vec3::ZERO);
        let mut control = rig.start("b", plain()).unwrap();
        assert_eq!(control.handle(&PointerEvent::press(Cursor::touch(HAND))), None);
        assert!(control.handle(&PointerEvent::click(Cursor::touch(HAND))).is_some());
        assert!(control.is_toggled());
    }

    #[test]
    fn hover_only_preset_ignores_clicks() {
        let rig = Rig::new(Vec3::ZERO);
        let mut control = rig.start("b", config(ButtonPreset::HoverOnly)).unwrap();
        control.handle(&PointerEvent::hover_enter(ray()));
        assert_eq!(control.handle(&PointerEvent::click(ray())), None);
        assert_eq!(control.slot(), AppearanceSlot::Hover);
    }

    #[test]
    fn visibility_mirror_follows_toggle() {
        let rig = Rig::with_linked(Vec3::ZERO);
        let mut control = rig.start("b", config(ButtonPreset::VisibilityToggle)).unwrap();
        assert_eq!(rig.linked_visible(), Some(true));
        control.handle(&PointerEvent::click(ray()));
        assert_eq!(rig.linked_visible(), Some(false));
        control.handle(&PointerEvent::click(ray()));
        assert_eq!(rig.linked_visible(), Some(true));
        // Hover does not touch a visibility mirror.
        rig.clear();
        control.handle(&PointerEvent::hover_enter(ray()));
        control.handle(&PointerEvent::hover_exit(ray()));
        assert!(
            !rig.effects()
                .iter()
                .any(|e| matches!(e, Effect::Visible(_) | Effect::Content(_)))
        );
    }

    #[test]
    fn appearance_mirror_lends_hover_look_while_toggled() {
        let rig = Rig::with_linked(Vec3::ZERO);
        let mut control = rig.start("lamp_button", config(ButtonPreset::Toggle)).unwrap();
        // Start leaves the target alone.
        assert!(
            !rig.effects()
                .iter()
                .any(|e| matches!(e, Effect::LinkedAppearance(_) | Effect::Visible(_)))
        );

        control.handle(&PointerEvent::hover_enter(ray()));
        rig.clear();
        control.handle(&PointerEvent::click(ray()));
        assert_eq!(
            rig.effects(),
            vec![
                Effect::Sound(Cue::Click),
                Effect::Translate(Vec3::new(0.0, -0.01, 0.0)),
                Effect::Haptic(HAND, HapticPulse::TOGGLE_ON),
                Effect::LinkedAppearance(hover_look()),
                Effect::Appearance(
                    AppearanceSlot::ToggledHover,
                    toggled_look().brightened(1.2)
                ),
            ]
        );

        // Hover changes do not touch the mirrored target.
        rig.clear();
        control.handle(&PointerEvent::hover_exit(ray()));
        control.handle(&PointerEvent::hover_enter(ray()));
        assert!(
            !rig.effects()
                .iter()
                .any(|e| matches!(e, Effect::LinkedAppearance(_)))
        );

        rig.clear();
        control.handle(&PointerEvent::click(ray()));
        assert!(!control.is_toggled());
        assert!(
            rig.effects()
                .contains(&Effect::LinkedAppearance(Rig::LINKED_LOOK))
        );
        assert!(!rig.effects().iter().any(|e| matches!(e, Effect::Visible(_))));
    }

    #[test]
    fn toggle_preset_requires_linked_target() {
        let rig = Rig::new(Vec3::ZERO);
        let err = rig
            .start("lamp_button", config(ButtonPreset::Toggle))
            .unwrap_err();
        assert!(matches!(
            err,
            ToggleError::MissingCollaborator {
                collaborator: Collaborator::LinkedTarget,
                ..
            }
        ));
    }

    #[test]
    fn label_preview_shows_on_hover_when_untoggled() {
        let rig = Rig::with_linked(Vec3::ZERO);
        let lookup = LabelLookup::new().with("kick", "Kick drum");
        let cfg = config(ButtonPreset::LabelToggle).with_label_lookup(lookup);
        let mut control = rig.start("kick_button", cfg).unwrap();
        assert_eq!(control.label(), Some("Kick drum"));
        assert_eq!(rig.linked_visible(), Some(false));
        rig.clear();

        control.handle(&PointerEvent::hover_enter(ray()));
        assert!(rig.effects().contains(&Effect::Visible(true)));
        assert!(rig.effects().contains(&Effect::Content("Kick drum".into())));

        control.handle(&PointerEvent::click(ray()));
        assert_eq!(rig.linked_visible(), Some(false));
        assert_eq!(rig.position(), Vec3::new(0.0, -0.007, 0.0));

        // Unclick while still hovered brings the preview back.
        control.handle(&PointerEvent::click(ray()));
        assert_eq!(rig.linked_visible(), Some(true));

        control.handle(&PointerEvent::hover_exit(ray()));
        assert_eq!(rig.linked_visible(), Some(false));
    }

    #[test]
    fn label_preview_stays_hidden_on_hover_while_toggled() {
        let rig = Rig::with_linked(Vec3::ZERO);
        let cfg = config(ButtonPreset::LabelToggle)
            .with_label_lookup(LabelLookup::new().with("kick", "Kick"));
        let mut control = rig.start("kick_button", cfg).unwrap();
        control.handle(&PointerEvent::click(ray()));
        rig.clear();
        control.handle(&PointerEvent::hover_enter(ray()));
        assert!(!rig.effects().contains(&Effect::Visible(true)));
    }

    #[test]
    fn missing_label_is_a_warning_not_a_failure() {
        let rig = Rig::with_linked(Vec3::ZERO);
        let cfg = config(ButtonPreset::LabelToggle)
            .with_label_lookup(LabelLookup::new().with("snare", "Snare"));
        let mut control = rig.start("kick_button", cfg).unwrap();
        assert_eq!(control.label(), None);
        assert!(matches!(
            control.warnings(),
            [ToggleError::InvalidConfiguration { .. }]
        ));
        rig.clear();
        control.handle(&PointerEvent::hover_enter(ray()));
        assert!(rig.effects().contains(&Effect::Visible(true)));
        assert!(
            !rig.effects()
                .iter()
                .any(|e| matches!(e, Effect::Content(_)))
        );
    }

    #[test]
    fn no_linked_target_means_no_linked_writes() {
        let rig = Rig::new(Vec3::ZERO);
        let mut control = rig.start("b", plain()).unwrap();
        for event in [
            PointerEvent::hover_enter(ray()),
            PointerEvent::press(ray()),
            PointerEvent::release(ray()),
            PointerEvent::click(ray()),
            PointerEvent::hover_exit(ray()),
            PointerEvent::click(ray()),
        ] {
            control.handle(&event);
        }
        assert!(
            !rig.effects()
                .iter()
                .any(|e| matches!(e, Effect::Visible(_) | Effect::Content(_)))
        );
    }

    #[test]
    fn missing_collaborators_fail_fast() {
        let rig = Rig::new(Vec3::ZERO);
        let mut parts = rig.collaborators();
        parts.presenter = None;
        let err = ToggleControl::start("b", ToggleConfig::default(), parts).unwrap_err();
        assert_eq!(
            err,
            ToggleError::MissingCollaborator {
                control: "b".into(),
                collaborator: Collaborator::Presenter,
            }
        );

        let mut parts = rig.collaborators();
        parts.pointer = None;
        let err = ToggleControl::start("b", ToggleConfig::default(), parts).unwrap_err();
        assert!(matches!(
            err,
            ToggleError::MissingCollaborator {
                collaborator: Collaborator::PointerTarget,
                ..
            }
        ));

        let err = ToggleControl::start(
            "b",
            ToggleConfig::preset(ButtonPreset::VisibilityToggle),
            rig.collaborators(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ToggleError::MissingCollaborator {
                collaborator: Collaborator::LinkedTarget,
                ..
            }
        ));
    }

    #[test]
    fn custom_hooks_can_toggle_on_release() {
        struct ReleaseToggles;
        impl InteractionHooks<u32> for ReleaseToggles {
            fn on_release(&mut self, _: &Cursor<u32>) -> HookAction {
                HookAction::Toggle
            }
            fn on_click(&mut self, _: &Cursor<u32>) -> HookAction {
                HookAction::Ignore
            }
        }

        let rig = Rig::new(Vec3::ZERO);
        let mut control = ToggleControl::start(
            "b",
            ToggleConfig::default(),
            rig.collaborators().with_hooks(Box::new(ReleaseToggles)),
        )
        .unwrap();
        assert_eq!(control.handle(&PointerEvent::press(ray())), None);
        assert!(control.handle(&PointerEvent::release(ray())).is_some());
        assert_eq!(control.handle(&PointerEvent::click(ray())), None);
        assert!(control.is_toggled());
    }

    #[test]
    fn set_rest_position_moves_untoggled_element() {
        let rig = Rig::new(Vec3::ZERO);
        let mut control = rig.start("b", ToggleConfig::default()).unwrap();
        control.set_rest_position(Vec3::X);
        assert_eq!(rig.position(), Vec3::X);
        control.handle(&PointerEvent::click(ray()));
        control.set_rest_position(Vec3::Y);
        assert_eq!(rig.position(), Vec3::X + Vec3::new(0.0, -0.01, 0.0));
        control.handle(&PointerEvent::click(ray()));
        assert_eq!(rig.position(), Vec3::Y);
    }
}
