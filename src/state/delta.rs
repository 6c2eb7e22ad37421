// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sparse desired-state deltas.

use serde::Deserialize;

use crate::types::{HdmiInput, PowerState};

/// Requested changes to the receiver's state.
///
/// Absent fields request no change. Presence of a field triggers its
/// setter even when the target equals the tracked value; converging on an
/// already-reached target legitimately results in zero pulses.
///
/// `volume` and `input_mode` are carried raw and validated by the
/// controller, so an out-of-range volume or an input name missing from the
/// rotary table fails only that attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiverDelta {
    /// Requested power mode.
    pub power_mode: Option<PowerState>,
    /// Requested volume level (validated against the 0-100 range).
    pub volume: Option<u16>,
    /// Requested input mode name (validated against the rotary table).
    pub input_mode: Option<String>,
    /// Requested auxiliary mode.
    pub aux_mode: Option<PowerState>,
}

impl ReceiverDelta {
    /// Returns `true` if no change is requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.power_mode.is_none()
            && self.volume.is_none()
            && self.input_mode.is_none()
            && self.aux_mode.is_none()
    }
}

/// Requested changes to the projector's state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectorDelta {
    /// Requested power mode.
    pub power_mode: Option<PowerState>,
    /// Requested HDMI input.
    pub hdmi_mode: Option<HdmiInput>,
}

impl ProjectorDelta {
    /// Returns `true` if no change is requested.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.power_mode.is_none() && self.hdmi_mode.is_none()
    }
}

/// A composite delta covering the whole media center.
///
/// Absent sub-objects leave the corresponding device untouched.
///
/// # Examples
///
/// ```
/// use remotr_lib::state::SystemDelta;
///
/// let delta: SystemDelta =
///     serde_json::from_str(r#"{ "receiver": { "volume": 7 } }"#).unwrap();
/// assert_eq!(delta.receiver.unwrap().volume, Some(7));
/// assert!(delta.projector.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemDelta {
    /// Requested receiver changes.
    pub receiver: Option<ReceiverDelta>,
    /// Requested projector changes.
    pub projector: Option<ProjectorDelta>,
}
