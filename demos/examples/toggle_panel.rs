// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small XR drum-pad panel built from toggle controls.
//!
//! This example shows how to combine:
//! - `PointerHub` as the pointer target for each pad,
//! - `ButtonPreset`s for the classic button variants,
//! - `Panel` to start controls whose failures stay isolated.
//!
//! Run:
//! - `cargo run -p understory_demos --example toggle_panel`

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use understory_demos::{ConsoleFeedback, ConsoleLabel, ConsolePresenter};
use understory_toggle::config::{ButtonPreset, LabelLookup, ToggleConfig};
use understory_toggle::control::Collaborators;
use understory_toggle::panel::Panel;
use understory_toggle::pointer::PointerHub;
use understory_toggle::types::{Appearance, Cursor, Rgba};

type Hub = Rc<RefCell<PointerHub<u32>>>;

fn pad(name: &'static str, x: f32, hub: &Hub, linked: Option<&'static str>) -> Collaborators<u32> {
    let base = Appearance::new(1, Rgba::new(0.35, 0.35, 0.4, 1.0));
    let parts = Collaborators::new()
        .with_pointer(hub.clone())
        .with_presenter(Box::new(ConsolePresenter::new(
            name,
            base,
            Vec3::new(x, 1.2, -0.4),
        )))
        .with_feedback(Box::new(ConsoleFeedback::new(name)));
    match linked {
        Some(linked) => parts.with_linked(Box::new(ConsoleLabel::new(linked))),
        None => parts,
    }
}

fn main() {
    let hover = Appearance::new(2, Rgba::new(0.6, 0.6, 0.7, 1.0));
    let lit = Appearance::new(3, Rgba::new(1.0, 0.55, 0.1, 1.0));
    let labels: LabelLookup = [("kick", "Kick drum"), ("snare", "Snare"), ("hat", "Hi-hat")]
        .into_iter()
        .collect();

    let kick_hub: Hub = Rc::new(RefCell::new(PointerHub::new()));
    let snare_hub: Hub = Rc::new(RefCell::new(PointerHub::new()));
    let hat_hub: Hub = Rc::new(RefCell::new(PointerHub::new()));
    let info_hub: Hub = Rc::new(RefCell::new(PointerHub::new()));
    let lamp_hub: Hub = Rc::new(RefCell::new(PointerHub::new()));

    let mut panel = Panel::new();
    println!("== Starting pads ==");
    panel.start(
        "kick_pad",
        ToggleConfig::preset(ButtonPreset::LabelToggle)
            .with_label_lookup(labels)
            .with_hover_appearance(hover)
            .with_toggled_appearance(lit),
        pad("kick_pad", -0.1, &kick_hub, Some("label")),
    );
    panel.start(
        "snare_pad",
        ToggleConfig::preset(ButtonPreset::TouchToggle)
            .with_hover_appearance(hover)
            .with_toggled_appearance(lit),
        pad("snare_pad", 0.0, &snare_hub, Some("label")),
    );
    // Visibility mirror without a linked target: fails to start, siblings are unaffected.
    panel.start(
        "hat_pad",
        ToggleConfig::preset(ButtonPreset::VisibilityToggle),
        pad("hat_pad", 0.1, &hat_hub, None),
    );
    panel.start(
        "info_button",
        ToggleConfig::preset(ButtonPreset::HoverOnly).with_hover_appearance(hover),
        pad("info_button", 0.2, &info_hub, None),
    );
    panel.start(
        "lamp_switch",
        ToggleConfig::preset(ButtonPreset::Toggle)
            .with_hover_appearance(hover)
            .with_toggled_appearance(lit),
        pad("lamp_switch", 0.3, &lamp_hub, Some("lamp")),
    );
    for failure in panel.failures() {
        println!("  failed: {failure}");
    }

    let right_ray = Cursor::ray(2);
    let left_finger = Cursor::touch(1);

    println!("\n== Ray hovers and clicks the kick pad twice ==");
    kick_hub.borrow_mut().pointer_enter(right_ray);
    for _ in 0..2 {
        kick_hub.borrow_mut().pointer_down(right_ray);
        kick_hub.borrow_mut().pointer_up(right_ray);
    }
    kick_hub.borrow_mut().pointer_leave(right_ray);

    println!("\n== Finger taps the snare pad ==");
    snare_hub.borrow_mut().pointer_enter(left_finger);
    snare_hub.borrow_mut().pointer_down(left_finger);
    snare_hub.borrow_mut().pointer_up(left_finger);
    snare_hub.borrow_mut().pointer_leave(left_finger);

    println!("\n== Ray clicks the info button ==");
    info_hub.borrow_mut().pointer_enter(right_ray);
    info_hub.borrow_mut().pointer_down(right_ray);
    info_hub.borrow_mut().pointer_up(right_ray);
    info_hub.borrow_mut().pointer_leave(right_ray);

    println!("\n== Ray switches the lamp on ==");
    lamp_hub.borrow_mut().pointer_enter(right_ray);
    lamp_hub.borrow_mut().pointer_down(right_ray);
    lamp_hub.borrow_mut().pointer_up(right_ray);
    lamp_hub.borrow_mut().pointer_leave(right_ray);

    println!("\n== Toggled: {:?} ==", panel.toggled());
    let released = panel.deactivate_all();
    println!("Deactivated {released} controls");
}
