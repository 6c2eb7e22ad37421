// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pure delta arithmetic for stepped attributes.
//!
//! Converging a tracked attribute on a target value means emitting a number
//! of discrete pulses. The two functions here compute that number: forward
//! distance under wrap-around for the rotary input selector, and a signed
//! step count for the linear volume range. Both are pure and deterministic;
//! getting them wrong produces silently incorrect hardware state, since
//! nothing downstream can observe the device.

use crate::types::{InputMode, Volume};

/// Pulses required per unit of volume change.
///
/// A single press of the volume key moves the level by half a unit on this
/// receiver (empirical hardware calibration).
pub const PULSES_PER_UNIT: u32 = 2;

/// Direction of a linear convergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move the value upward.
    Increase,
    /// Move the value downward.
    Decrease,
}

/// Result of [`linear_delta`]: how many pulses to send, and with which key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeDelta {
    /// Number of pulses required.
    pub pulses: u32,
    /// Which direction-specific key to pulse.
    pub direction: Direction,
}

/// Computes the forward step count between two rotary positions.
///
/// The remote only advances the selector forward one slot per pulse; there
/// is no reverse key. The required pulse count is therefore always the
/// forward distance over the full ring of
/// [`InputMode::SLOT_COUNT`] physical slots, even when the target sits one
/// slot "behind" the current position.
///
/// The result is the mathematically positive residue in `[0, SLOT_COUNT)`;
/// a signed `%` would go negative when the target sits behind the current
/// slot, so the subtraction is normalized by a full turn first.
///
/// # Examples
///
/// ```
/// use remotr_lib::delta::rotary_delta;
/// use remotr_lib::types::InputMode;
///
/// assert_eq!(rotary_delta(InputMode::Rca, InputMode::Coaxial), 1);
/// // Wrap-around: optical (slot 3) back to rca (slot 0) over 6 slots.
/// assert_eq!(rotary_delta(InputMode::Optical, InputMode::Rca), 3);
/// assert_eq!(rotary_delta(InputMode::Optical, InputMode::Optical), 0);
/// ```
#[must_use]
pub fn rotary_delta(current: InputMode, target: InputMode) -> u32 {
    let slots = u32::from(InputMode::SLOT_COUNT);
    // Slots are < SLOT_COUNT, so adding a full turn before subtracting
    // keeps the arithmetic unsigned while normalizing the residue.
    (u32::from(target.slot()) + slots - u32::from(current.slot())) % slots
}

/// Computes the pulse count and direction between two volume levels.
///
/// The count is `2 × |target − current|` ([`PULSES_PER_UNIT`] half-step
/// pulses per unit). When the values are equal the count is zero and the
/// direction defaults to [`Direction::Increase`]; callers that branch on
/// direction before checking the count still get deterministic behavior.
///
/// # Examples
///
/// ```
/// use remotr_lib::delta::{linear_delta, Direction};
/// use remotr_lib::types::Volume;
///
/// let d = linear_delta(Volume::new(4).unwrap(), Volume::new(7).unwrap());
/// assert_eq!(d.pulses, 6);
/// assert_eq!(d.direction, Direction::Increase);
/// ```
#[must_use]
pub fn linear_delta(current: Volume, target: Volume) -> VolumeDelta {
    let direction = if target >= current {
        Direction::Increase
    } else {
        Direction::Decrease
    };
    VolumeDelta {
        pulses: u32::from(current.value().abs_diff(target.value())) * PULSES_PER_UNIT,
        direction,
    }
}
