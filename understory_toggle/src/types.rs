// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared by the toggle control: cursors, pointer events, appearances, and feedback values.

/// Brightening factor applied to the toggled appearance to derive the toggled-hover appearance.
pub const TOGGLED_HOVER_SCALE: f32 = 1.2;

/// How a cursor interacts with targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CursorKind {
    /// A ray cast from a controller or head pose.
    Ray,
    /// A direct-touch cursor attached to a fingertip or controller tip.
    Touch,
}

/// The cursor that originated a pointer event.
///
/// `K` is the host's element identifier. `owner` names the element that owns the
/// cursor (typically a controller or hand), which is also the haptic target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cursor<K> {
    /// Element owning the cursor.
    pub owner: K,
    /// Ray or touch.
    pub kind: CursorKind,
}

impl<K> Cursor<K> {
    /// Create a ray cursor owned by `owner`.
    pub const fn ray(owner: K) -> Self {
        Self {
            owner,
            kind: CursorKind::Ray,
        }
    }

    /// Create a touch cursor owned by `owner`.
    pub const fn touch(owner: K) -> Self {
        Self {
            owner,
            kind: CursorKind::Touch,
        }
    }

    /// Returns `true` for direct-touch cursors.
    pub const fn is_touch(&self) -> bool {
        matches!(self.kind, CursorKind::Touch)
    }
}

/// Kind of interaction reported by a pointer target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// A cursor started hovering the target.
    HoverEnter,
    /// The last cursor stopped hovering the target.
    HoverExit,
    /// A cursor pressed down on the target.
    Press,
    /// A cursor released a press that started on the target.
    Release,
    /// A press and release completed on the target.
    Click,
}

impl InteractionKind {
    /// The single-bit mask selecting this kind.
    pub const fn mask(self) -> InteractionMask {
        match self {
            Self::HoverEnter => InteractionMask::HOVER_ENTER,
            Self::HoverExit => InteractionMask::HOVER_EXIT,
            Self::Press => InteractionMask::PRESS,
            Self::Release => InteractionMask::RELEASE,
            Self::Click => InteractionMask::CLICK,
        }
    }
}

bitflags::bitflags! {
    /// Set of interaction kinds a subscriber wants to receive.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InteractionMask: u8 {
        /// Hover enter events.
        const HOVER_ENTER = 0b0000_0001;
        /// Hover exit events.
        const HOVER_EXIT  = 0b0000_0010;
        /// Press (down) events.
        const PRESS       = 0b0000_0100;
        /// Release (up) events.
        const RELEASE     = 0b0000_1000;
        /// Click events.
        const CLICK       = 0b0001_0000;
        /// Hover enter and exit.
        const HOVER = Self::HOVER_ENTER.bits() | Self::HOVER_EXIT.bits();
    }
}

impl Default for InteractionMask {
    fn default() -> Self {
        Self::all()
    }
}

/// A transient interaction delivered by a pointer target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointerEvent<K> {
    /// What happened.
    pub kind: InteractionKind,
    /// Which cursor caused it.
    pub cursor: Cursor<K>,
}

impl<K> PointerEvent<K> {
    /// Create an event of `kind` from `cursor`.
    pub const fn new(kind: InteractionKind, cursor: Cursor<K>) -> Self {
        Self { kind, cursor }
    }

    /// Shorthand for a hover-enter event.
    pub const fn hover_enter(cursor: Cursor<K>) -> Self {
        Self::new(InteractionKind::HoverEnter, cursor)
    }

    /// Shorthand for a hover-exit event.
    pub const fn hover_exit(cursor: Cursor<K>) -> Self {
        Self::new(InteractionKind::HoverExit, cursor)
    }

    /// Shorthand for a press event.
    pub const fn press(cursor: Cursor<K>) -> Self {
        Self::new(InteractionKind::Press, cursor)
    }

    /// Shorthand for a release event.
    pub const fn release(cursor: Cursor<K>) -> Self {
        Self::new(InteractionKind::Release, cursor)
    }

    /// Shorthand for a click event.
    pub const fn click(cursor: Cursor<K>) -> Self {
        Self::new(InteractionKind::Click, cursor)
    }
}

/// Linear RGBA color.
///
/// Channels are not clamped: brightening a saturated channel yields values above `1.0`,
/// and it is up to the renderer to tone-map or clamp them.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Rgba {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from its channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Multiply the color channels by `factor`, leaving alpha untouched.
    #[must_use]
    pub fn scale_rgb(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }
}

/// A displayable surface style: a host material handle tinted by a color.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Appearance {
    /// Host-defined material handle.
    pub material: u32,
    /// Tint applied to the material.
    pub color: Rgba,
}

impl Appearance {
    /// Create an appearance for `material` tinted with `color`.
    pub const fn new(material: u32, color: Rgba) -> Self {
        Self { material, color }
    }

    /// Same material with the color channels brightened by `factor`.
    #[must_use]
    pub fn brightened(self, factor: f32) -> Self {
        Self {
            material: self.material,
            color: self.color.scale_rgb(factor),
        }
    }
}

/// Which of the four appearances is displayed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AppearanceSlot {
    /// Not toggled, not hovered.
    Default,
    /// Hovered while not toggled.
    Hover,
    /// Toggled, not hovered.
    Toggled,
    /// Hovered while toggled.
    ToggledHover,
}

impl AppearanceSlot {
    /// Select the slot for a `(toggled, hovered)` pair.
    pub const fn select(toggled: bool, hovered: bool) -> Self {
        match (toggled, hovered) {
            (false, false) => Self::Default,
            (false, true) => Self::Hover,
            (true, false) => Self::Toggled,
            (true, true) => Self::ToggledHover,
        }
    }

    /// Returns `true` for the toggled variants.
    pub const fn is_toggled(self) -> bool {
        matches!(self, Self::Toggled | Self::ToggledHover)
    }
}

/// Audio cue played on toggle changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Toggled on.
    Click,
    /// Toggled off.
    Unclick,
}

/// A haptic pulse request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HapticPulse {
    /// Strength in `[0, 1]`.
    pub strength: f32,
    /// Duration in milliseconds.
    pub duration_ms: u32,
}

impl HapticPulse {
    /// Pulse sent when a cursor starts hovering.
    pub const HOVER_ENTER: Self = Self::new(0.5, 50);
    /// Pulse sent when hovering ends.
    pub const HOVER_EXIT: Self = Self::new(0.3, 50);
    /// Pulse sent when the control toggles on.
    pub const TOGGLE_ON: Self = Self::new(1.0, 20);
    /// Pulse sent when the control toggles off.
    pub const TOGGLE_OFF: Self = Self::new(0.7, 20);

    /// Create a pulse. `strength` is clamped to `[0, 1]`.
    pub const fn new(strength: f32, duration_ms: u32) -> Self {
        Self {
            strength: strength.clamp(0.0, 1.0),
            duration_ms,
        }
    }
}
