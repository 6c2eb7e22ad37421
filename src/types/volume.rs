// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume type for the receiver's linear volume attribute.
//!
//! This module provides a type-safe representation of volume values,
//! ensuring values are always within the valid range of 0-100.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Receiver volume level (0-100).
///
/// The constructor takes a `u16` so that out-of-range values arriving in a
/// shadow delta reach the validator and produce a
/// [`ValueError::VolumeOutOfRange`] instead of failing wire deserialization.
///
/// # Examples
///
/// ```
/// use remotr_lib::types::Volume;
///
/// let vol = Volume::new(42).unwrap();
/// assert_eq!(vol.value(), 42);
///
/// // Use predefined values
/// assert_eq!(Volume::MIN.value(), 0);
/// assert_eq!(Volume::MAX.value(), 100);
///
/// // Invalid values return error
/// assert!(Volume::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "u16", into = "u8")]
pub struct Volume(u8);

impl Volume {
    /// Minimum volume value (silent).
    pub const MIN: Self = Self(0);

    /// Maximum volume value.
    pub const MAX: Self = Self(100);

    /// Creates a new volume value.
    ///
    /// # Arguments
    ///
    /// * `value` - The volume level (0-100)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::VolumeOutOfRange` if value exceeds 100.
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if value > u16::from(Self::MAX.0) {
            return Err(ValueError::VolumeOutOfRange {
                min: u16::from(Self::MIN.0),
                max: u16::from(Self::MAX.0),
                actual: value,
            });
        }
        // Safe: value <= 100 after the range check
        #[allow(clippy::cast_possible_truncation)]
        let value = value as u8;
        Ok(Self(value))
    }

    /// Creates a volume value, clamping to the valid range.
    ///
    /// Values above 100 are clamped to 100.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Returns the volume level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Volume {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Volume> for u8 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}
