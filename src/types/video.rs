// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Video input selection for the projector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// One of the projector's two HDMI inputs.
///
/// Unlike the receiver's rotary selector, the projector remote has a
/// dedicated key per input, so selecting one is always a single pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HdmiInput {
    /// HDMI input 1.
    Hdmi1,
    /// HDMI input 2.
    Hdmi2,
}

impl HdmiInput {
    /// Returns the shadow-document string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hdmi1 => "hdmi1",
            Self::Hdmi2 => "hdmi2",
        }
    }
}

impl fmt::Display for HdmiInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HdmiInput {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hdmi1" => Ok(Self::Hdmi1),
            "hdmi2" => Ok(Self::Hdmi2),
            _ => Err(ValueError::UnknownHdmiInput(s.to_string())),
        }
    }
}
