// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while starting or binding a toggle control.

use alloc::string::String;
use core::fmt;

/// A collaborator a control needs to start.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Collaborator {
    /// The source of hover/press/click events.
    PointerTarget,
    /// The renderable surface whose appearance and position the control drives.
    Presenter,
    /// Sound and haptic output.
    FeedbackEmitter,
    /// The secondary element required by a linked behavior.
    LinkedTarget,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PointerTarget => "pointer target",
            Self::Presenter => "presenter",
            Self::FeedbackEmitter => "feedback emitter",
            Self::LinkedTarget => "linked target",
        })
    }
}

/// Errors produced by toggle controls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ToggleError {
    /// A required collaborator was absent when the control started.
    ///
    /// The control is not created; sibling controls are unaffected.
    #[error("control `{control}` is missing its {collaborator}")]
    MissingCollaborator {
        /// Name of the control that failed to start.
        control: String,
        /// What was missing.
        collaborator: Collaborator,
    },
    /// The configuration cannot be honored for this control.
    ///
    /// Recovered locally; the control keeps running without the affected behavior.
    #[error("control `{control}` has an invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Name of the affected control.
        control: String,
        /// Human readable description.
        reason: String,
    },
    /// The pointer target was already borrowed, e.g. when binding from inside one of its own handlers.
    #[error("pointer target of control `{control}` is busy")]
    PointerTargetBusy {
        /// Name of the affected control.
        control: String,
    },
}

impl ToggleError {
    /// Name of the control this error concerns.
    pub fn control(&self) -> &str {
        match self {
            Self::MissingCollaborator { control, .. }
            | Self::InvalidConfiguration { control, .. }
            | Self::PointerTargetBusy { control } => control,
        }
    }
}
