// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `RemotR` Lib - A Rust library to reconcile infrared remote-controlled
//! appliances.
//!
//! This library drives appliances that are controlled by stateless IR
//! pulses (via LIRC's `irsend`) toward a desired configuration delivered as
//! sparse deltas, for example from a cloud device-shadow service. The
//! hardware has no feedback channel, so each controller tracks its device's
//! state itself and assumes every dispatched pulse landed.
//!
//! # Supported Devices
//!
//! - **Audio receiver**: power and auxiliary-mode toggles, half-step volume
//!   pulses, forward-only rotary input selection
//! - **Video projector**: dedicated power on/off keys, HDMI input selection
//!
//! # How Reconciliation Works
//!
//! An inbound [`SystemDelta`](state::SystemDelta) is routed to the matching
//! device controllers. Each controller computes the minimal pulse sequence
//! from its tracked state via the pure arithmetic in [`delta`] — forward
//! distance under wrap-around for the rotary selector, two half-step pulses
//! per unit for volume — and dispatches it strictly sequentially
//! ([`sequence::repeat_sequential`]) with a 250 ms spacing to respect the
//! remote's debounce window. Tracked state is updated only after a sequence
//! completes; a failed sequence leaves it untouched so the next delta
//! retries from known ground.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use remotr_lib::device::MediaCenter;
//! use remotr_lib::state::{SystemDelta, SystemState};
//! use remotr_lib::transmit::LircClient;
//!
//! # async fn example(last_known: SystemState, raw_delta: &str) -> remotr_lib::Result<()> {
//! // Seed the controllers from the shadow's last known state.
//! let transmitter = Arc::new(LircClient::new());
//! let mut media_center = MediaCenter::from_state(&last_known, transmitter);
//!
//! // Apply a sparse desired-state delta.
//! let delta: SystemDelta = serde_json::from_str(raw_delta).unwrap();
//! media_center.update(&delta).await;
//!
//! // Report the new tracked state back to the shadow.
//! let reported = media_center.state();
//! # let _ = reported;
//! # Ok(())
//! # }
//! ```
//!
//! # Direct Setter Access
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use remotr_lib::device::Receiver;
//! use remotr_lib::state::ReceiverState;
//! use remotr_lib::transmit::LircClient;
//! use remotr_lib::types::{InputMode, Volume};
//!
//! # async fn example(initial: ReceiverState) -> remotr_lib::Result<()> {
//! let mut receiver = Receiver::new(Arc::new(LircClient::new()), initial);
//! receiver.set_volume(Volume::new(42)?).await?;
//! receiver.set_input_mode(InputMode::Optical).await?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod delta;
pub mod device;
pub mod error;
pub mod sequence;
pub mod state;
pub mod transmit;
pub mod types;

pub use command::{IrCommand, ProjectorCommand, ReceiverCommand};
pub use delta::{Direction, VolumeDelta, linear_delta, rotary_delta};
pub use device::{MediaCenter, Projector, Receiver};
pub use error::{Error, Result, TransmitError, ValueError};
pub use sequence::repeat_sequential;
pub use state::{
    ProjectorDelta, ProjectorState, ReceiverDelta, ReceiverState, SystemDelta, SystemState,
};
pub use transmit::{LircClient, PULSE_INTERVAL, Transmitter};
pub use types::{HdmiInput, InputMode, PowerState, Volume};
