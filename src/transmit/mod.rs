// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Infrared transmission.
//!
//! This module provides the [`Transmitter`] trait, the seam between the
//! reconciliation logic and the hardware, and [`LircClient`], the production
//! implementation that shells out to LIRC's `irsend`.
//!
//! Transmission is strictly best-effort: a successful result means the
//! command was handed to the IR blaster, not that the device received it.
//! The controlled appliances have no feedback channel, so the device
//! controllers track state themselves on the assumption that every
//! dispatched pulse landed.

mod lirc;

pub use lirc::LircClient;

use std::time::Duration;

use crate::error::TransmitError;

/// Minimum interval between pulses of a rapid repeated sequence.
///
/// The physical remotes drop presses that arrive faster than their debounce
/// window, silently and unverifiably, so volume and input-mode sequences
/// space their pulses by this much.
pub const PULSE_INTERVAL: Duration = Duration::from_millis(250);

/// Trait for transmitters that can send infrared commands to a device.
#[allow(async_fn_in_trait)]
pub trait Transmitter {
    /// Transmits a key press to the named remote immediately.
    ///
    /// Resolves once the transmission has been attempted; delivery is never
    /// confirmed.
    ///
    /// # Arguments
    ///
    /// * `remote` - The LIRC remote name (e.g. `"Vizio"`)
    /// * `key` - The key symbol to send (e.g. `"KEY_VOLUMEUP"`)
    ///
    /// # Errors
    ///
    /// Returns `TransmitError` if the transmission attempt itself fails.
    async fn transmit(&self, remote: &str, key: &str) -> Result<(), TransmitError>;

    /// Transmits a key press after waiting for the given delay.
    ///
    /// Used for pulses that are part of a rapid repeated sequence, to stay
    /// within the remote's accepted press rate.
    ///
    /// # Errors
    ///
    /// Returns `TransmitError` if the transmission attempt itself fails.
    async fn transmit_after(
        &self,
        remote: &str,
        key: &str,
        delay: Duration,
    ) -> Result<(), TransmitError> {
        tokio::time::sleep(delay).await;
        self.transmit(remote, key).await
    }
}
