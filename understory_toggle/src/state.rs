// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four-state toggle machine, free of side effects.
//!
//! [`ToggleState`] is the product of two flags, `toggled` and `hovered`. Hover transitions
//! never change `toggled`, and toggling never changes `hovered`. The displayed
//! [`AppearanceSlot`] is derived from the state alone.
//!
//! ```
//! use understory_toggle::state::ToggleState;
//! use understory_toggle::types::AppearanceSlot;
//!
//! let state = ToggleState::default().hover_entered();
//! assert_eq!(state, ToggleState::Hovered);
//!
//! let state = state.flipped();
//! assert_eq!(state, ToggleState::ToggledHovered);
//! assert_eq!(state.slot(), AppearanceSlot::ToggledHover);
//!
//! let state = state.hover_exited();
//! assert_eq!(state, ToggleState::Toggled);
//! ```

use crate::types::AppearanceSlot;

/// State of a toggle control.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToggleState {
    /// Not toggled, not hovered.
    #[default]
    Idle,
    /// Hovered while not toggled.
    Hovered,
    /// Toggled, not hovered.
    Toggled,
    /// Hovered while toggled.
    ToggledHovered,
}

impl ToggleState {
    /// Build the state from its two flags.
    pub const fn from_flags(toggled: bool, hovered: bool) -> Self {
        match (toggled, hovered) {
            (false, false) => Self::Idle,
            (false, true) => Self::Hovered,
            (true, false) => Self::Toggled,
            (true, true) => Self::ToggledHovered,
        }
    }

    /// Whether the control is toggled on.
    pub const fn is_toggled(self) -> bool {
        matches!(self, Self::Toggled | Self::ToggledHovered)
    }

    /// Whether a cursor hovers the control.
    pub const fn is_hovered(self) -> bool {
        matches!(self, Self::Hovered | Self::ToggledHovered)
    }

    /// The appearance slot displayed in this state.
    pub const fn slot(self) -> AppearanceSlot {
        AppearanceSlot::select(self.is_toggled(), self.is_hovered())
    }

    /// State after a hover-enter.
    #[must_use]
    pub const fn hover_entered(self) -> Self {
        Self::from_flags(self.is_toggled(), true)
    }

    /// State after a hover-exit.
    #[must_use]
    pub const fn hover_exited(self) -> Self {
        Self::from_flags(self.is_toggled(), false)
    }

    /// State after the toggle flag is inverted.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self::from_flags(!self.is_toggled(), self.is_hovered())
    }
}
