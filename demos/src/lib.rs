// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Console-backed collaborators for the Understory Toggle demos.
//!
//! Each collaborator prints what a real engine would do (swap a material, move a mesh,
//! play a sound, pulse a controller) prefixed with the element it belongs to.

use glam::Vec3;
use understory_toggle::capability::{FeedbackEmitter, LinkedTarget, Presenter};
use understory_toggle::types::{Appearance, AppearanceSlot, Cue, HapticPulse};

/// Presenter that tracks its position and prints every write.
#[derive(Debug)]
pub struct ConsolePresenter {
    name: &'static str,
    appearance: Appearance,
    position: Vec3,
}

impl ConsolePresenter {
    /// A surface named `name` showing `appearance` at `position`.
    pub fn new(name: &'static str, appearance: Appearance, position: Vec3) -> Self {
        Self {
            name,
            appearance,
            position,
        }
    }
}

impl Presenter for ConsolePresenter {
    fn set_appearance(&mut self, slot: AppearanceSlot, appearance: &Appearance) {
        self.appearance = *appearance;
        let c = appearance.color;
        println!(
            "  [{}] appearance {:?}: material {} rgba({:.2}, {:.2}, {:.2}, {:.2})",
            self.name, slot, appearance.material, c.r, c.g, c.b, c.a
        );
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn translate(&mut self, offset: Vec3) {
        self.position += offset;
        println!("  [{}] moved by {} to {}", self.name, offset, self.position);
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
        println!("  [{}] placed at {}", self.name, self.position);
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

/// Feedback emitter that prints cues and pulses. Controller `0` has no haptics.
#[derive(Debug)]
pub struct ConsoleFeedback {
    name: &'static str,
}

impl ConsoleFeedback {
    /// Feedback for the element named `name`.
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl FeedbackEmitter<u32> for ConsoleFeedback {
    fn play_sound(&mut self, cue: Cue) {
        println!("  [{}] sound {:?}", self.name, cue);
    }

    fn pulse_haptic(&mut self, target: &u32, pulse: HapticPulse) {
        if *target == 0 {
            return;
        }
        println!(
            "  [{}] haptic controller {} strength {:.1} for {}ms",
            self.name, target, pulse.strength, pulse.duration_ms
        );
    }
}

/// Linked element that prints visibility, content, and appearance changes.
#[derive(Debug)]
pub struct ConsoleLabel {
    name: &'static str,
}

impl ConsoleLabel {
    /// Label element named `name`.
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl LinkedTarget for ConsoleLabel {
    fn set_visible(&mut self, visible: bool) {
        println!(
            "  [{}] {}",
            self.name,
            if visible { "shown" } else { "hidden" }
        );
    }

    fn set_content(&mut self, text: &str) {
        println!("  [{}] text = {:?}", self.name, text);
    }

    fn set_appearance(&mut self, appearance: &Appearance) {
        println!(
            "  [{}] appearance: material {}",
            self.name, appearance.material
        );
    }
}
