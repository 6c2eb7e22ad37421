// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands understood by the audio receiver's remote.

use crate::command::IrCommand;

/// A key press on the receiver's remote.
///
/// Volume keys move the level by half a unit per press, so converging on a
/// target volume takes two pulses per unit of change. The input-mode key
/// advances the rotary selector one slot forward per press; there is no
/// reverse key. Power and auxiliary mode are single toggle keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiverCommand {
    /// Raise the volume by half a unit.
    VolumeUpHalf,
    /// Lower the volume by half a unit.
    VolumeDownHalf,
    /// Mute or unmute the output.
    Mute,
    /// Toggle the auxiliary (Bluetooth pairing) mode.
    ToggleAux,
    /// Advance the rotary input selector one slot forward.
    InputStep,
    /// Toggle main power.
    TogglePower,
}

impl IrCommand for ReceiverCommand {
    fn key(&self) -> &'static str {
        match self {
            Self::VolumeUpHalf => "KEY_VOLUMEUP",
            Self::VolumeDownHalf => "KEY_VOLUMEDOWN",
            Self::Mute => "KEY_MUTE",
            Self::ToggleAux => "KEY_BLUETOOTH",
            Self::InputStep => "KEY_MODE",
            Self::TogglePower => "KEY_POWER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receiver_command_keys() {
        assert_eq!(ReceiverCommand::VolumeUpHalf.key(), "KEY_VOLUMEUP");
        assert_eq!(ReceiverCommand::VolumeDownHalf.key(), "KEY_VOLUMEDOWN");
        assert_eq!(ReceiverCommand::Mute.key(), "KEY_MUTE");
        assert_eq!(ReceiverCommand::ToggleAux.key(), "KEY_BLUETOOTH");
        assert_eq!(ReceiverCommand::InputStep.key(), "KEY_MODE");
        assert_eq!(ReceiverCommand::TogglePower.key(), "KEY_POWER");
    }
}
