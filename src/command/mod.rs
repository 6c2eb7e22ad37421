// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Infrared command definitions.
//!
//! This module provides typed representations of the remote-control key
//! presses each device understands. A command is an opaque symbol; its
//! concrete encoding (carrier frequency, pulse train) lives in the LIRC
//! remote configuration and is the transmitter's concern.
//!
//! # Available Commands
//!
//! | Command Type | Device | Keys |
//! |-------------|--------|------|
//! | [`ReceiverCommand`] | audio receiver | volume half-steps, mute, input step, power/aux toggles |
//! | [`ProjectorCommand`] | video projector | power on/off, HDMI 1/2 select |
//!
//! # Examples
//!
//! ```
//! use remotr_lib::command::{IrCommand, ReceiverCommand};
//!
//! let cmd = ReceiverCommand::VolumeUpHalf;
//! assert_eq!(cmd.key(), "KEY_VOLUMEUP");
//! ```

mod projector;
mod receiver;

pub use projector::ProjectorCommand;
pub use receiver::ReceiverCommand;

/// A key press that can be transmitted to an infrared-controlled device.
///
/// Commands carry no state of their own; they resolve to the LIRC key
/// symbol configured for the device's remote.
pub trait IrCommand {
    /// Returns the LIRC key symbol for this command.
    ///
    /// For example, `"KEY_VOLUMEUP"` or `"KEY_POWER"`.
    fn key(&self) -> &'static str;
}
