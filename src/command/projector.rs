// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands understood by the projector's remote.

use crate::command::IrCommand;

/// A key press on the projector's remote.
///
/// The projector has dedicated keys for power on and power off (not a
/// toggle) and one key per HDMI input, so every state change is a single
/// pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectorCommand {
    /// Turn the projector on.
    PowerOn,
    /// Turn the projector off.
    PowerOff,
    /// Select HDMI input 1.
    SelectHdmi1,
    /// Select HDMI input 2.
    SelectHdmi2,
}

impl IrCommand for ProjectorCommand {
    fn key(&self) -> &'static str {
        match self {
            Self::PowerOn => "KEY_POWER",
            Self::PowerOff => "KEY_POWER2",
            Self::SelectHdmi1 => "KEY_MODE",
            Self::SelectHdmi2 => "KEY_SWITCHVIDEOMODE",
        }
    }
}
