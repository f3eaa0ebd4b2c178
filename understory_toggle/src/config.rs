// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for toggle controls.
//!
//! A [`ToggleConfig`] selects which optional behaviors a control has. The five classic
//! button variants are available as [`ButtonPreset`]s:
//!
//! ```
//! use understory_toggle::config::{ButtonPreset, LinkedBehavior, ToggleConfig};
//!
//! let config = ToggleConfig::preset(ButtonPreset::TouchToggle);
//! assert!(config.touch_activates_on_press);
//! assert!(matches!(config.linked, LinkedBehavior::VisibilityMirror));
//!
//! let hover_only = ToggleConfig::preset(ButtonPreset::HoverOnly);
//! assert!(!hover_only.toggle_on_click);
//! ```

use alloc::string::String;
use glam::Vec3;
use hashbrown::HashMap;

use crate::types::{Appearance, AppearanceSlot, TOGGLED_HOVER_SCALE};

/// Press depth used by the full-size button variants.
pub const DEFAULT_PRESS_DEPTH: f32 = 0.01;

/// Press depth used by the compact button variants.
pub const COMPACT_PRESS_DEPTH: f32 = 0.007;

/// Map from element-name key to label text.
///
/// The key of an element name is the part before its first `_`, so `kick_button` and
/// `kick_pad_left` both look up `kick`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelLookup {
    entries: HashMap<String, String>,
}

impl LabelLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the label for `key`.
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(key.into(), label.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.insert(key, label);
        self
    }

    /// Label for a control named `name`: the exact entry for the part of `name` before
    /// its first `_`.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let key = name.split('_').next()?;
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: Into<String>, L: Into<String>> FromIterator<(P, L)> for LabelLookup {
    fn from_iter<I: IntoIterator<Item = (P, L)>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for (key, label) in iter {
            lookup.insert(key, label);
        }
        lookup
    }
}

/// What the linked target does, if anything.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LinkedBehavior {
    /// No linked target.
    #[default]
    None,
    /// Linked target is shown while untoggled and hidden while toggled.
    VisibilityMirror,
    /// Linked target takes the control's hover appearance while toggled and gets its own
    /// appearance back when untoggled.
    AppearanceMirror,
    /// Linked target shows a label while the untoggled control is hovered.
    LabelPreview(LabelLookup),
}

impl LinkedBehavior {
    /// Whether this behavior needs a linked target.
    pub const fn needs_target(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Options recognized by a toggle control.
#[derive(Clone, Debug, PartialEq)]
pub struct ToggleConfig {
    /// Appearance while hovered. `None` keeps the surface's default appearance.
    pub hover_appearance: Option<Appearance>,
    /// Appearance while toggled. `None` keeps the surface's default appearance.
    ///
    /// The toggled-hover appearance is always derived from this one.
    pub toggled_appearance: Option<Appearance>,
    /// Linked target behavior.
    pub linked: LinkedBehavior,
    /// Whether a click flips the toggle.
    pub toggle_on_click: bool,
    /// Whether a press from a touch cursor flips the toggle immediately.
    ///
    /// When set, clicks from touch cursors are ignored so a single tap toggles once.
    pub touch_activates_on_press: bool,
    /// Relative move applied to the visual element when toggled on.
    ///
    /// The presets press along local `-Y`.
    pub move_offset: Vec3,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            hover_appearance: None,
            toggled_appearance: None,
            linked: LinkedBehavior::None,
            toggle_on_click: true,
            touch_activates_on_press: false,
            move_offset: Vec3::new(0.0, -DEFAULT_PRESS_DEPTH, 0.0),
        }
    }
}

impl ToggleConfig {
    /// Configuration matching one of the classic button variants.
    pub fn preset(preset: ButtonPreset) -> Self {
        let base = Self::default();
        match preset {
            ButtonPreset::HoverOnly => Self {
                toggle_on_click: false,
                ..base
            },
            ButtonPreset::Toggle => Self {
                linked: LinkedBehavior::AppearanceMirror,
                ..base
            },
            ButtonPreset::VisibilityToggle => Self {
                linked: LinkedBehavior::VisibilityMirror,
                ..base
            },
            ButtonPreset::LabelToggle => Self {
                linked: LinkedBehavior::LabelPreview(LabelLookup::new()),
                move_offset: Vec3::new(0.0, -COMPACT_PRESS_DEPTH, 0.0),
                ..base
            },
            ButtonPreset::TouchToggle => Self {
                linked: LinkedBehavior::VisibilityMirror,
                touch_activates_on_press: true,
                move_offset: Vec3::new(0.0, -COMPACT_PRESS_DEPTH, 0.0),
                ..base
            },
        }
    }

    /// Set the hover appearance.
    #[must_use]
    pub fn with_hover_appearance(mut self, appearance: Appearance) -> Self {
        self.hover_appearance = Some(appearance);
        self
    }

    /// Set the toggled appearance.
    #[must_use]
    pub fn with_toggled_appearance(mut self, appearance: Appearance) -> Self {
        self.toggled_appearance = Some(appearance);
        self
    }

    /// Set the linked behavior.
    #[must_use]
    pub fn with_linked(mut self, linked: LinkedBehavior) -> Self {
        self.linked = linked;
        self
    }

    /// Set the label lookup, switching the linked behavior to label preview.
    #[must_use]
    pub fn with_label_lookup(mut self, lookup: LabelLookup) -> Self {
        self.linked = LinkedBehavior::LabelPreview(lookup);
        self
    }

    /// Enable or disable touch activation on press.
    #[must_use]
    pub fn with_touch_activates_on_press(mut self, enabled: bool) -> Self {
        self.touch_activates_on_press = enabled;
        self
    }

    /// Set the move offset applied when toggled on.
    #[must_use]
    pub fn with_move_offset(mut self, offset: Vec3) -> Self {
        self.move_offset = offset;
        self
    }
}

/// The classic button variants, expressed as configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ButtonPreset {
    /// Hover feedback only; clicks do nothing.
    HoverOnly,
    /// Click to toggle, lending the hover appearance to a linked element while toggled.
    Toggle,
    /// Click to toggle, hiding a linked element while toggled.
    VisibilityToggle,
    /// Click to toggle, previewing a label on hover.
    LabelToggle,
    /// Like [`VisibilityToggle`](Self::VisibilityToggle) but touch cursors toggle on press.
    TouchToggle,
}

/// The four appearances of a control.
///
/// The toggled-hover appearance cannot be set; it is the toggled appearance brightened by
/// [`TOGGLED_HOVER_SCALE`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    default: Appearance,
    hover: Appearance,
    toggled: Appearance,
    toggled_hover: Appearance,
}

impl Palette {
    /// Build a palette, deriving the toggled-hover appearance.
    pub fn new(default: Appearance, hover: Appearance, toggled: Appearance) -> Self {
        Self {
            default,
            hover,
            toggled,
            toggled_hover: toggled.brightened(TOGGLED_HOVER_SCALE),
        }
    }

    /// Build a palette from a surface's current appearance and the configured overrides.
    pub fn from_config(default: Appearance, config: &ToggleConfig) -> Self {
        Self::new(
            default,
            config.hover_appearance.unwrap_or(default),
            config.toggled_appearance.unwrap_or(default),
        )
    }

    /// The appearance shown for `slot`.
    pub fn get(&self, slot: AppearanceSlot) -> &Appearance {
        match slot {
            AppearanceSlot::Default => &self.default,
            AppearanceSlot::Hover => &self.hover,
            AppearanceSlot::Toggled => &self.toggled,
            AppearanceSlot::ToggledHover => &self.toggled_hover,
        }
    }
}
