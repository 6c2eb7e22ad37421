// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Full-state snapshots.

use serde::{Deserialize, Serialize};

use crate::types::{HdmiInput, InputMode, PowerState, Volume};

/// Tracked state of the audio receiver.
///
/// A snapshot is a plain value: mutating one never affects the controller
/// it was read from.
///
/// # Examples
///
/// ```
/// use remotr_lib::state::ReceiverState;
/// use remotr_lib::types::{InputMode, PowerState, Volume};
///
/// let state = ReceiverState {
///     power_mode: PowerState::Off,
///     volume: Volume::new(4).unwrap(),
///     input_mode: InputMode::Jack35,
///     aux_mode: PowerState::Off,
/// };
/// let json = serde_json::to_string(&state).unwrap();
/// assert!(json.contains("\"inputMode\":\"3.5mm\""));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverState {
    /// Main power mode.
    pub power_mode: PowerState,
    /// Volume level.
    pub volume: Volume,
    /// Selected rotary input position.
    pub input_mode: InputMode,
    /// Auxiliary (Bluetooth pairing) mode.
    pub aux_mode: PowerState,
}

/// Tracked state of the projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectorState {
    /// Main power mode.
    pub power_mode: PowerState,
    /// Selected HDMI input.
    pub hdmi_mode: HdmiInput,
}

/// Aggregate state of the whole media center.
///
/// This is the shadow snapshot shape: the desired variant seeds
/// [`MediaCenter::from_state`](crate::device::MediaCenter::from_state) after
/// a process restart, and the reported variant is what
/// [`MediaCenter::state`](crate::device::MediaCenter::state) produces after
/// reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemState {
    /// Audio receiver state.
    pub receiver: ReceiverState,
    /// Projector state.
    pub projector: ProjectorState,
}
