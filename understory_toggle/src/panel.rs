// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A group of independently failing controls.
//!
//! [`Panel::start`] starts and activates a control. A control that cannot start is recorded
//! in [`Panel::failures`] and skipped; the rest of the panel keeps working.

use alloc::string::String;
use alloc::vec::Vec;

use log::warn;

use crate::config::ToggleConfig;
use crate::control::{Collaborators, ToggleControl};
use crate::error::ToggleError;
use crate::handle::ControlHandle;

/// A set of toggle controls sharing a lifecycle.
///
/// Lookups never borrow a busy control, so a collaborator may query the panel while its
/// own control is handling an event.
#[derive(Debug)]
pub struct Panel<K> {
    controls: Vec<ControlHandle<K>>,
    /// Control names, parallel to `controls`.
    names: Vec<String>,
    failures: Vec<ToggleError>,
}

impl<K: 'static> Default for Panel<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: 'static> Panel<K> {
    /// Create an empty panel.
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            names: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Start and activate a control.
    ///
    /// On failure the error is recorded and `None` is returned.
    pub fn start(
        &mut self,
        name: impl Into<String>,
        config: ToggleConfig,
        collaborators: Collaborators<K>,
    ) -> Option<ControlHandle<K>> {
        let name = name.into();
        let handle = match ControlHandle::start(name.clone(), config, collaborators) {
            Ok(handle) => handle,
            Err(err) => {
                self.failures.push(err);
                return None;
            }
        };
        if let Err(err) = handle.activate() {
            warn!("{err}; control started but not activated");
            self.failures.push(err);
        }
        self.controls.push(handle.clone());
        self.names.push(name);
        Some(handle)
    }

    /// Subscribe every control. Returns how many were newly activated.
    pub fn activate_all(&self) -> usize {
        self.controls
            .iter()
            .filter(|c| match c.activate() {
                Ok(activated) => activated,
                Err(err) => {
                    warn!("{err}");
                    false
                }
            })
            .count()
    }

    /// Unsubscribe every control. Returns how many were deactivated.
    pub fn deactivate_all(&self) -> usize {
        self.controls.iter().filter(|c| c.deactivate()).count()
    }

    /// Control named `name`, if it started.
    pub fn get(&self, name: &str) -> Option<&ControlHandle<K>> {
        let idx = self.names.iter().position(|n| n == name)?;
        self.controls.get(idx)
    }

    /// Started controls, in start order.
    pub fn controls(&self) -> &[ControlHandle<K>] {
        &self.controls
    }

    /// Errors from controls that failed to start or activate.
    pub fn failures(&self) -> &[ToggleError] {
        &self.failures
    }

    /// Names of the controls currently toggled on.
    ///
    /// A control that is busy handling an event is left out.
    pub fn toggled(&self) -> Vec<String> {
        self.controls
            .iter()
            .zip(&self.names)
            .filter(|(c, _)| c.try_with(ToggleControl::is_toggled) == Some(true))
            .map(|(_, name)| name.clone())
            .collect()
    }
}
