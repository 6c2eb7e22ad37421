// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device controllers.
//!
//! A controller owns one appliance's tracked state and converges it on
//! requested target values by emitting infrared pulse sequences. The
//! hardware never reports back, so the tracked state is the controller's
//! best-effort belief: it is mutated only by the controller's own setters,
//! and for multi-pulse attributes only after the full pulse sequence has
//! been dispatched. A failed sequence leaves the tracked value at its
//! pre-attempt state so the next delta makes a corrective attempt from
//! known ground.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use remotr_lib::device::MediaCenter;
//! use remotr_lib::state::SystemState;
//! use remotr_lib::transmit::LircClient;
//!
//! # async fn example(last_reported: SystemState) {
//! let transmitter = Arc::new(LircClient::new());
//! let mut media_center = MediaCenter::from_state(&last_reported, transmitter);
//!
//! let delta = serde_json::from_str(r#"{ "receiver": { "volume": 7 } }"#).unwrap();
//! media_center.update(&delta).await;
//! # }
//! ```

mod media_center;
mod projector;
mod receiver;

pub use media_center::MediaCenter;
pub use projector::Projector;
pub use receiver::Receiver;

#[cfg(test)]
pub(crate) mod testing {
    use parking_lot::Mutex;

    use crate::error::TransmitError;
    use crate::transmit::Transmitter;

    /// Test transmitter that records every pulse instead of sending it.
    ///
    /// Optionally starts failing after a configured number of successful
    /// pulses, to exercise mid-sequence transmission failures.
    pub struct RecordingTransmitter {
        sent: Mutex<Vec<(String, String)>>,
        fail_after: Option<usize>,
    }

    impl RecordingTransmitter {
        pub fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_after: None,
            }
        }

        /// First `n` pulses succeed, every later one fails.
        pub fn failing_after(n: usize) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_after: Some(n),
            }
        }

        pub fn sent(&self) -> Vec<(String, String)> {
            self.sent.lock().clone()
        }

        pub fn keys_for(&self, remote: &str) -> Vec<String> {
            self.sent
                .lock()
                .iter()
                .filter(|(r, _)| r == remote)
                .map(|(_, key)| key.clone())
                .collect()
        }
    }

    impl Transmitter for RecordingTransmitter {
        async fn transmit(&self, remote: &str, key: &str) -> Result<(), TransmitError> {
            let mut sent = self.sent.lock();
            if let Some(limit) = self.fail_after
                && sent.len() >= limit
            {
                return Err(TransmitError::CommandFailed {
                    status: Some(1),
                    stderr: "injected failure".to_string(),
                });
            }
            sent.push((remote.to_string(), key.to_string()));
            Ok(())
        }
    }
}
