// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Composite controller for the whole media center.

use std::sync::Arc;

use tracing::info;

use crate::device::{Projector, Receiver};
use crate::state::{SystemDelta, SystemState};
use crate::transmit::Transmitter;

/// Owns one controller per appliance and routes composite deltas.
///
/// A `MediaCenter` is constructed explicitly (typically once at process
/// start, rehydrated from the shadow's last known state via
/// [`MediaCenter::from_state`]) and held by the transport-integration layer
/// for the process lifetime. Because it is exclusively owned and `update`
/// takes `&mut self`, at most one composite delta is reconciled at a time.
#[derive(Debug)]
pub struct MediaCenter<T: Transmitter> {
    receiver: Receiver<T>,
    projector: Projector<T>,
}

impl<T: Transmitter> MediaCenter<T> {
    /// Creates a media center from already-constructed controllers.
    #[must_use]
    pub const fn new(receiver: Receiver<T>, projector: Projector<T>) -> Self {
        Self {
            receiver,
            projector,
        }
    }

    /// Rehydrates a media center from a previously snapshotted state.
    ///
    /// Both controllers share the given transmitter. Used to resume
    /// tracking after a process restart, seeded from the shadow's last
    /// known desired state.
    #[must_use]
    pub fn from_state(state: &SystemState, transmitter: Arc<T>) -> Self {
        info!(
            receiver = ?state.receiver,
            projector = ?state.projector,
            "rehydrating media center from snapshot"
        );
        Self {
            receiver: Receiver::new(Arc::clone(&transmitter), state.receiver),
            projector: Projector::new(transmitter, state.projector),
        }
    }

    /// Returns the receiver controller.
    #[must_use]
    pub const fn receiver(&self) -> &Receiver<T> {
        &self.receiver
    }

    /// Returns the receiver controller mutably.
    pub const fn receiver_mut(&mut self) -> &mut Receiver<T> {
        &mut self.receiver
    }

    /// Returns the projector controller.
    #[must_use]
    pub const fn projector(&self) -> &Projector<T> {
        &self.projector
    }

    /// Returns the projector controller mutably.
    pub const fn projector_mut(&mut self) -> &mut Projector<T> {
        &mut self.projector
    }

    /// Routes a composite delta to the matching sub-controllers.
    ///
    /// Absent sub-objects leave the corresponding device untouched. Each
    /// device converges (or fails) independently.
    pub async fn update(&mut self, delta: &SystemDelta) {
        if let Some(receiver_delta) = &delta.receiver {
            self.receiver.update(receiver_delta).await;
        }
        if let Some(projector_delta) = &delta.projector {
            self.projector.update(projector_delta).await;
        }
    }

    /// Returns a snapshot of the aggregate tracked state.
    ///
    /// This is the value reported back to the shadow service after
    /// reconciliation.
    #[must_use]
    pub const fn state(&self) -> SystemState {
        SystemState {
            receiver: self.receiver.state(),
            projector: self.projector.state(),
        }
    }
}
