// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `RemotR` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: value validation and infrared transmission.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur while
/// reconciling device state.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while transmitting an infrared command.
    #[error("transmit error: {0}")]
    Transmit(#[from] TransmitError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when a delta references a value outside the domain
/// of the target attribute. They are raised before any pulse is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A volume value is outside the allowed range.
    #[error("volume {actual} is out of range [{min}, {max}]")]
    VolumeOutOfRange {
        /// Minimum allowed volume.
        min: u16,
        /// Maximum allowed volume.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An input mode name is not present in the rotary position table.
    #[error("unknown input mode: {0}")]
    UnknownInputMode(String),

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An HDMI input name is not recognized.
    #[error("unknown HDMI input: {0}")]
    UnknownHdmiInput(String),
}

/// Errors related to infrared transmission.
///
/// The hardware has no feedback channel, so these only cover failures of
/// the transmission attempt itself. A pulse that was dispatched without
/// error is assumed to have landed.
#[derive(Debug, Error)]
pub enum TransmitError {
    /// The transmitter process could not be spawned or awaited.
    #[error("failed to run IR transmitter: {0}")]
    Io(#[from] std::io::Error),

    /// The transmitter process exited with a non-zero status.
    #[error("IR transmitter exited with status {status:?}: {stderr}")]
    CommandFailed {
        /// The process exit code, if one was produced.
        status: Option<i32>,
        /// Captured standard error output.
        stderr: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
