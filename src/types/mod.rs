// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core value types for tracked device attributes.
//!
//! Each attribute of a reconciled device has a dedicated type that enforces
//! its domain: binary modes ([`PowerState`]), the bounded volume range
//! ([`Volume`]), the rotary input-mode table ([`InputMode`]), and the
//! projector's video inputs ([`HdmiInput`]).

mod input;
mod power;
mod video;
mod volume;

pub use input::InputMode;
pub use power::PowerState;
pub use video::HdmiInput;
pub use volume::Volume;
