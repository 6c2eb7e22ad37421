// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller for the audio receiver.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::command::{IrCommand, ReceiverCommand};
use crate::delta::{Direction, linear_delta, rotary_delta};
use crate::error::{Error, Result};
use crate::sequence::repeat_sequential;
use crate::state::{ReceiverDelta, ReceiverState};
use crate::transmit::{PULSE_INTERVAL, Transmitter};
use crate::types::{InputMode, PowerState, Volume};

/// Default LIRC remote name for the receiver.
const DEFAULT_REMOTE: &str = "Vizio";

/// Reconciles the audio receiver's tracked state with requested targets.
///
/// Constructed once from a known starting state (the shadow's last known
/// state) and kept for the process lifetime. Power and auxiliary mode are
/// single toggle pulses sent immediately; volume and input mode are
/// multi-pulse sequences spaced by
/// [`PULSE_INTERVAL`](crate::transmit::PULSE_INTERVAL), with the tracked
/// value updated only after the whole sequence has been dispatched.
#[derive(Debug)]
pub struct Receiver<T: Transmitter> {
    transmitter: Arc<T>,
    remote: String,
    state: ReceiverState,
}

impl<T: Transmitter> Receiver<T> {
    /// Creates a controller tracking the given starting state.
    #[must_use]
    pub fn new(transmitter: Arc<T>, initial: ReceiverState) -> Self {
        Self {
            transmitter,
            remote: DEFAULT_REMOTE.to_string(),
            state: initial,
        }
    }

    /// Overrides the LIRC remote name.
    #[must_use]
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    /// Returns a snapshot of the tracked state.
    #[must_use]
    pub const fn state(&self) -> ReceiverState {
        self.state
    }

    /// Turns the receiver on if it is tracked as off.
    ///
    /// No-op (no pulse, no state change) when already on.
    ///
    /// # Errors
    ///
    /// Returns error if the toggle pulse fails to transmit; tracked state
    /// is left unchanged.
    pub async fn power_on(&mut self) -> Result<()> {
        self.set_power(PowerState::On).await
    }

    /// Turns the receiver off if it is tracked as on.
    ///
    /// # Errors
    ///
    /// Returns error if the toggle pulse fails to transmit.
    pub async fn power_off(&mut self) -> Result<()> {
        self.set_power(PowerState::Off).await
    }

    async fn set_power(&mut self, target: PowerState) -> Result<()> {
        if self.state.power_mode == target {
            return Ok(());
        }
        self.transmitter
            .transmit(&self.remote, ReceiverCommand::TogglePower.key())
            .await?;
        self.state.power_mode = target;
        Ok(())
    }

    /// Enables the auxiliary (Bluetooth pairing) mode if tracked as off.
    ///
    /// # Errors
    ///
    /// Returns error if the toggle pulse fails to transmit.
    pub async fn aux_on(&mut self) -> Result<()> {
        self.set_aux(PowerState::On).await
    }

    /// Disables the auxiliary mode if tracked as on.
    ///
    /// # Errors
    ///
    /// Returns error if the toggle pulse fails to transmit.
    pub async fn aux_off(&mut self) -> Result<()> {
        self.set_aux(PowerState::Off).await
    }

    async fn set_aux(&mut self, target: PowerState) -> Result<()> {
        if self.state.aux_mode == target {
            return Ok(());
        }
        self.transmitter
            .transmit(&self.remote, ReceiverCommand::ToggleAux.key())
            .await?;
        self.state.aux_mode = target;
        Ok(())
    }

    /// Mutes or unmutes the output.
    ///
    /// Mute is not part of the tracked state; this is a plain single pulse.
    ///
    /// # Errors
    ///
    /// Returns error if the pulse fails to transmit.
    pub async fn mute(&self) -> Result<()> {
        self.transmitter
            .transmit(&self.remote, ReceiverCommand::Mute.key())
            .await?;
        Ok(())
    }

    /// Drives the volume to `target` with a sequence of half-step pulses.
    ///
    /// The pulse count and direction come from
    /// [`linear_delta`](crate::delta::linear_delta); an already-reached
    /// target sends nothing. The tracked volume is set to `target` only
    /// after the full sequence has been dispatched.
    ///
    /// # Errors
    ///
    /// Returns error if any pulse fails; remaining pulses are not sent and
    /// the tracked volume keeps its pre-attempt value.
    pub async fn set_volume(&mut self, target: Volume) -> Result<()> {
        let delta = linear_delta(self.state.volume, target);
        if delta.pulses > 0 {
            let command = match delta.direction {
                Direction::Increase => ReceiverCommand::VolumeUpHalf,
                Direction::Decrease => ReceiverCommand::VolumeDownHalf,
            };
            debug!(
                current = self.state.volume.value(),
                target = target.value(),
                pulses = delta.pulses,
                key = command.key(),
                "stepping receiver volume"
            );
            let transmitter = &self.transmitter;
            let remote = self.remote.as_str();
            repeat_sequential(delta.pulses, || {
                transmitter.transmit_after(remote, command.key(), PULSE_INTERVAL)
            })
            .await?;
        }
        self.state.volume = target;
        Ok(())
    }

    /// Drives the rotary input selector to `target`.
    ///
    /// Emits the forward distance computed by
    /// [`rotary_delta`](crate::delta::rotary_delta) as single-step pulses,
    /// wrapping around the selector when the target sits behind the current
    /// position. The tracked input mode is updated post-hoc.
    ///
    /// # Errors
    ///
    /// Returns error if any pulse fails; the tracked input mode keeps its
    /// pre-attempt value.
    pub async fn set_input_mode(&mut self, target: InputMode) -> Result<()> {
        let steps = rotary_delta(self.state.input_mode, target);
        if steps > 0 {
            debug!(
                current = %self.state.input_mode,
                target = %target,
                steps,
                "stepping receiver input mode"
            );
            let transmitter = &self.transmitter;
            let remote = self.remote.as_str();
            repeat_sequential(steps, || {
                transmitter.transmit_after(remote, ReceiverCommand::InputStep.key(), PULSE_INTERVAL)
            })
            .await?;
        }
        self.state.input_mode = target;
        Ok(())
    }

    /// Applies a sparse delta, attribute by attribute.
    ///
    /// Attributes are handled independently: a value that fails validation
    /// or a pulse sequence that fails mid-flight is logged and does not
    /// stop the remaining attributes from converging. There is no
    /// atomicity across attributes.
    pub async fn update(&mut self, delta: &ReceiverDelta) {
        if let Some(power) = delta.power_mode {
            let result = match power {
                PowerState::On => self.power_on().await,
                PowerState::Off => self.power_off().await,
            };
            log_failure("powerMode", &result);
        }
        if let Some(volume) = delta.volume {
            let result = match Volume::new(volume) {
                Ok(target) => self.set_volume(target).await,
                Err(err) => Err(Error::Value(err)),
            };
            log_failure("volume", &result);
        }
        if let Some(name) = delta.input_mode.as_deref() {
            let result = match name.parse::<InputMode>() {
                Ok(target) => self.set_input_mode(target).await,
                Err(err) => Err(Error::Value(err)),
            };
            log_failure("inputMode", &result);
        }
        if let Some(aux) = delta.aux_mode {
            let result = match aux {
                PowerState::On => self.aux_on().await,
                PowerState::Off => self.aux_off().await,
            };
            log_failure("auxMode", &result);
        }
    }
}

fn log_failure(attribute: &str, result: &Result<()>) {
    if let Err(error) = result {
        warn!(attribute, %error, "receiver attribute failed to converge");
    }
}
