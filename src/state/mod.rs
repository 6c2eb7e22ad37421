// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State snapshots and desired-state deltas.
//!
//! These are the shapes exchanged with the external device-shadow service:
//! a full [`SystemState`] snapshot travels in both directions (the last
//! known desired state seeds the controllers, the reported state is
//! published after reconciliation), while a sparse [`SystemDelta`] names
//! only the attributes whose desired value changed.
//!
//! Field names are camelCase on the wire. Unknown keys are ignored on
//! parse, since shadow payloads may carry extra metadata.
//!
//! Delta leaves for volume and input mode stay raw (`u16` / `String`) so
//! that an invalid value fails exactly one attribute's convergence inside
//! the controller instead of failing the whole composite parse.

mod delta;
mod snapshot;

pub use delta::{ProjectorDelta, ReceiverDelta, SystemDelta};
pub use snapshot::{ProjectorState, ReceiverState, SystemState};
