// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rotary input-mode positions for the receiver.
//!
//! The receiver selects its audio input with a single "mode" key that
//! advances a rotary selector one position per press, always forward. The
//! selector has six physical positions; four of them carry a named source
//! on this unit, the remaining two slots are unused.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A named position of the receiver's rotary input selector.
///
/// Each position maps to a fixed slot index in `[0, SLOT_COUNT)`. The slot
/// indices drive the forward-distance arithmetic in
/// [`rotary_delta`](crate::delta::rotary_delta).
///
/// # Examples
///
/// ```
/// use remotr_lib::types::InputMode;
///
/// assert_eq!(InputMode::Rca.slot(), 0);
/// assert_eq!(InputMode::Optical.slot(), 3);
/// assert_eq!("3.5mm".parse::<InputMode>().unwrap(), InputMode::Jack35);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputMode {
    /// RCA analog input (slot 0).
    #[serde(rename = "rca")]
    Rca,
    /// Coaxial digital input (slot 1).
    #[serde(rename = "coaxial")]
    Coaxial,
    /// 3.5mm headphone jack input (slot 2).
    #[serde(rename = "3.5mm")]
    Jack35,
    /// Optical (TOSLINK) digital input (slot 3).
    #[serde(rename = "optical")]
    Optical,
}

impl InputMode {
    /// Number of physical positions on the rotary selector.
    ///
    /// Two slots beyond the named positions exist on the remote; stepping
    /// through them is still required when wrapping around.
    pub const SLOT_COUNT: u8 = 6;

    /// Returns the fixed slot index of this position.
    #[must_use]
    pub const fn slot(&self) -> u8 {
        match self {
            Self::Rca => 0,
            Self::Coaxial => 1,
            Self::Jack35 => 2,
            Self::Optical => 3,
        }
    }

    /// Returns the shadow-document string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rca => "rca",
            Self::Coaxial => "coaxial",
            Self::Jack35 => "3.5mm",
            Self::Optical => "optical",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rca" => Ok(Self::Rca),
            "coaxial" => Ok(Self::Coaxial),
            "3.5mm" => Ok(Self::Jack35),
            "optical" => Ok(Self::Optical),
            _ => Err(ValueError::UnknownInputMode(s.to_string())),
        }
    }
}
