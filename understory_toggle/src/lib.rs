// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_toggle --heading-base-level=0

//! Understory Toggle: a headless, `no_std` toggle-button component for XR scene objects.
//!
//! ## Overview
//!
//! This crate implements one interactive control: a button that reacts to a pointer or
//! controller cursor with hover, press, release, click, and toggle behavior. It does not
//! render, hit test, mix audio, or talk to XR devices. Instead the host engine provides four
//! capabilities (see [`capability`]) and the control drives them:
//!
//! - a **pointer target** raising hover-enter, hover-exit, press, release, and click,
//! - a **presenter** showing one of four appearances and moving the visual element,
//! - a **feedback emitter** playing `click`/`unclick` cues and sending haptic pulses,
//! - an optional **linked target** whose visibility, label, or appearance mirrors the toggle.
//!
//! ## State
//!
//! [`ToggleState`](state::ToggleState) is the product of `toggled` and `hovered`. The
//! displayed [`AppearanceSlot`](types::AppearanceSlot) is a pure function of the state, and
//! the toggled-hover appearance is always derived from the toggled one (see
//! [`Palette`](config::Palette)).
//!
//! ```
//! use understory_toggle::state::ToggleState;
//! use understory_toggle::types::AppearanceSlot;
//!
//! let mut state = ToggleState::default();
//! for _ in 0..3 {
//!     state = state.hover_entered();
//!     assert_eq!(state.slot(), AppearanceSlot::Hover);
//!     state = state.hover_exited();
//!     assert_eq!(state.slot(), AppearanceSlot::Default);
//! }
//! ```
//!
//! ## Workflow
//!
//! 1) Describe the variant with a [`ToggleConfig`](config::ToggleConfig), usually from a
//!    [`ButtonPreset`](config::ButtonPreset).
//! 2) Gather [`Collaborators`](control::Collaborators) and call
//!    [`ToggleControl::start`](control::ToggleControl::start). Missing collaborators fail
//!    here with [`ToggleError::MissingCollaborator`](error::ToggleError::MissingCollaborator)
//!    instead of surfacing later as no-ops.
//! 3) Either pump events yourself with [`ToggleControl::handle`](control::ToggleControl::handle),
//!    or wrap the control in a [`ControlHandle`](handle::ControlHandle) and call
//!    [`activate`](handle::ControlHandle::activate) to subscribe it to its pointer target.
//! 4) Hosts without their own hover/click detection can use
//!    [`PointerHub`](pointer::PointerHub) as the pointer target and feed it raw cursor
//!    enter/leave/down/up.
//!
//! Use [`Panel`](panel::Panel) to manage several controls whose failures stay isolated.
//!
//! ## Logging
//!
//! State transitions and subscription changes are reported through the [`log`] facade at
//! `debug` level; configuration problems at `warn`; controls failing to start at `error`.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `glam` and `thiserror`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for `glam`'s math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod capability;
pub mod config;
pub mod control;
pub mod error;
pub mod handle;
pub mod observer;
pub mod panel;
pub mod pointer;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_support;
