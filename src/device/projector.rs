// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller for the video projector.

use std::sync::Arc;

use tracing::warn;

use crate::command::{IrCommand, ProjectorCommand};
use crate::error::Result;
use crate::state::{ProjectorDelta, ProjectorState};
use crate::transmit::Transmitter;
use crate::types::{HdmiInput, PowerState};

/// Default LIRC remote name for the projector.
const DEFAULT_REMOTE: &str = "Optoma";

/// Reconciles the projector's tracked state with requested targets.
///
/// Every projector attribute has a dedicated direct key (separate power
/// on/off keys, one key per HDMI input), so each setter is a single
/// immediate pulse sent only when the tracked value differs from the
/// target.
#[derive(Debug)]
pub struct Projector<T: Transmitter> {
    transmitter: Arc<T>,
    remote: String,
    state: ProjectorState,
}

impl<T: Transmitter> Projector<T> {
    /// Creates a controller tracking the given starting state.
    #[must_use]
    pub fn new(transmitter: Arc<T>, initial: ProjectorState) -> Self {
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
    pub const fn state(&self) -> ProjectorState {
        self.state
    }

    /// Turns the projector on if it is tracked as off.
    ///
    /// No-op (no pulse, no state change) when already on.
    ///
    /// # Errors
    ///
    /// Returns error if the pulse fails to transmit; tracked state is left
    /// unchanged.
    pub async fn power_on(&mut self) -> Result<()> {
        self.set_power(PowerState::On, ProjectorCommand::PowerOn)
            .await
    }

    /// Turns the projector off if it is tracked as on.
    ///
    /// # Errors
    ///
    /// Returns error if the pulse fails to transmit.
    pub async fn power_off(&mut self) -> Result<()> {
        self.set_power(PowerState::Off, ProjectorCommand::PowerOff)
            .await
    }

    async fn set_power(&mut self, target: PowerState, command: ProjectorCommand) -> Result<()> {
        if self.state.power_mode == target {
            return Ok(());
        }
        self.transmitter
            .transmit(&self.remote, command.key())
            .await?;
        self.state.power_mode = target;
        Ok(())
    }

    /// Selects the given HDMI input if it is not already tracked as active.
    ///
    /// # Errors
    ///
    /// Returns error if the pulse fails to transmit; tracked state is left
    /// unchanged.
    pub async fn set_hdmi(&mut self, target: HdmiInput) -> Result<()> {
        if self.state.hdmi_mode == target {
            return Ok(());
        }
        let command = match target {
            HdmiInput::Hdmi1 => ProjectorCommand::SelectHdmi1,
            HdmiInput::Hdmi2 => ProjectorCommand::SelectHdmi2,
        };
        self.transmitter
            .transmit(&self.remote, command.key())
            .await?;
        self.state.hdmi_mode = target;
        Ok(())
    }

    /// Applies a sparse delta, attribute by attribute.
    ///
    /// Failures are logged per attribute; one attribute failing does not
    /// stop the other from converging.
    pub async fn update(&mut self, delta: &ProjectorDelta) {
        if let Some(power) = delta.power_mode {
            let result = match power {
                PowerState::On => self.power_on().await,
                PowerState::Off => self.power_off().await,
            };
            log_failure("powerMode", &result);
        }
        if let Some(hdmi) = delta.hdmi_mode {
            let result = self.set_hdmi(hdmi).await;
            log_failure("hdmiMode", &result);
        }
    }
}

fn log_failure(attribute: &str, result: &Result<()>) {
    if let Err(error) = result {
        warn!(attribute, %error, "projector attribute failed to converge");
    }
}
