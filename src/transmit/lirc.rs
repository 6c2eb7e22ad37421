// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LIRC-backed transmitter.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::debug;

use crate::error::TransmitError;
use crate::transmit::Transmitter;

const DEFAULT_PROGRAM: &str = "irsend";
const DEFAULT_SOCKET: &str = "/run/lirc/lircd-lirc0";

/// Transmitter that sends key presses through LIRC's `irsend` tool.
///
/// Each transmission spawns `irsend -d <socket> SEND_ONCE <remote> <key>`
/// and waits for it to exit. A non-zero exit is reported as
/// [`TransmitError::CommandFailed`] with the captured stderr.
///
/// # Examples
///
/// ```no_run
/// use remotr_lib::transmit::{LircClient, Transmitter};
///
/// # async fn example() -> Result<(), remotr_lib::error::TransmitError> {
/// let client = LircClient::new();
/// client.transmit("Vizio", "KEY_MUTE").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LircClient {
    program: String,
    socket: PathBuf,
}

impl LircClient {
    /// Creates a client with the default `irsend` program and lircd socket.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            socket: PathBuf::from(DEFAULT_SOCKET),
        }
    }

    /// Overrides the `irsend` executable path.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Overrides the lircd socket path passed via `-d`.
    #[must_use]
    pub fn with_socket(mut self, socket: impl Into<PathBuf>) -> Self {
        self.socket = socket.into();
        self
    }

    /// Returns the configured executable path.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the configured lircd socket path.
    #[must_use]
    pub fn socket(&self) -> &Path {
        &self.socket
    }

    fn argv(&self, remote: &str, key: &str) -> Vec<OsString> {
        vec![
            OsString::from("-d"),
            self.socket.clone().into_os_string(),
            OsString::from("SEND_ONCE"),
            OsString::from(remote),
            OsString::from(key),
        ]
    }
}

impl Default for LircClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Transmitter for LircClient {
    async fn transmit(&self, remote: &str, key: &str) -> Result<(), TransmitError> {
        let output = Command::new(&self.program)
            .args(self.argv(remote, key))
            .output()
            .await?;

        if output.status.success() {
            debug!(remote, key, "transmitted IR command");
            Ok(())
        } else {
            Err(TransmitError::CommandFailed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lirc_client_defaults() {
        let client = LircClient::new();
        assert_eq!(client.program(), "irsend");
        assert_eq!(client.socket(), Path::new("/run/lirc/lircd-lirc0"));
    }

    #[test]
    fn lirc_client_overrides() {
        let client = LircClient::new()
            .with_program("/usr/local/bin/irsend")
            .with_socket("/tmp/lircd");
        assert_eq!(client.program(), "/usr/local/bin/irsend");
        assert_eq!(client.socket(), Path::new("/tmp/lircd"));
    }

    #[test]
    fn lirc_client_argv_shape() {
        let client = LircClient::new();
        let argv = client.argv("Vizio", "KEY_VOLUMEUP");
        assert_eq!(
            argv,
            vec![
                OsString::from("-d"),
                OsString::from("/run/lirc/lircd-lirc0"),
                OsString::from("SEND_ONCE"),
                OsString::from("Vizio"),
                OsString::from("KEY_VOLUMEUP"),
            ]
        );
    }

    #[tokio::test]
    async fn lirc_client_spawn_failure_is_io_error() {
        let client = LircClient::new().with_program("/nonexistent/irsend");
        let result = client.transmit("Vizio", "KEY_MUTE").await;
        assert!(matches!(result.unwrap_err(), TransmitError::Io(_)));
    }

    #[tokio::test]
    async fn lirc_client_nonzero_exit_is_command_failed() {
        // `false` exits 1 without reading its argv, standing in for a
        // transmitter whose hardware is absent.
        let client = LircClient::new().with_program("false");
        let result = client.transmit("Vizio", "KEY_MUTE").await;
        assert!(matches!(
            result.unwrap_err(),
            TransmitError::CommandFailed { .. }
        ));
    }
}
