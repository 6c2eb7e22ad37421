// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end reconciliation scenarios against a recording transmitter.

use std::sync::Arc;

use parking_lot::Mutex;

use remotr_lib::device::MediaCenter;
use remotr_lib::error::TransmitError;
use remotr_lib::state::{ProjectorState, ReceiverState, SystemDelta, SystemState};
use remotr_lib::transmit::Transmitter;
use remotr_lib::types::{HdmiInput, InputMode, PowerState, Volume};

/// Records every pulse; optionally fails from the nth pulse onward.
struct FakeBlaster {
    sent: Mutex<Vec<(String, String)>>,
    fail_after: Option<usize>,
}

impl FakeBlaster {
    fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_after: None,
        }
    }

    fn failing_after(n: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_after: Some(n),
        }
    }

    fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().clone()
    }

    fn keys_for(&self, remote: &str) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .filter(|(r, _)| r == remote)
            .map(|(_, key)| key.clone())
            .collect()
    }
}

impl Transmitter for FakeBlaster {
    async fn transmit(&self, remote: &str, key: &str) -> Result<(), TransmitError> {
        let mut sent = self.sent.lock();
        if let Some(limit) = self.fail_after
            && sent.len() >= limit
        {
            return Err(TransmitError::CommandFailed {
                status: Some(1),
                stderr: "transmission failed".to_string(),
            });
        }
        sent.push((remote.to_string(), key.to_string()));
        Ok(())
    }
}

fn initial_state() -> SystemState {
    SystemState {
        receiver: ReceiverState {
            power_mode: PowerState::Off,
            volume: Volume::new(4).unwrap(),
            input_mode: InputMode::Jack35,
            aux_mode: PowerState::Off,
        },
        projector: ProjectorState {
            power_mode: PowerState::On,
            hdmi_mode: HdmiInput::Hdmi2,
        },
    }
}

#[tokio::test(start_paused = true)]
async fn volume_delta_emits_six_increase_pulses() {
    let blaster = Arc::new(FakeBlaster::new());
    let mut media_center = MediaCenter::from_state(&initial_state(), Arc::clone(&blaster));

    let delta: SystemDelta =
        serde_json::from_str(r#"{ "receiver": { "volume": 7 } }"#).unwrap();
    media_center.update(&delta).await;

    let keys = blaster.keys_for("Vizio");
    assert_eq!(keys.len(), 6);
    assert!(keys.iter().all(|k| k == "KEY_VOLUMEUP"));

    let state = media_center.state();
    assert_eq!(state.receiver.volume.value(), 7);
    // Every other field is untouched.
    assert_eq!(state.receiver.power_mode, PowerState::Off);
    assert_eq!(state.receiver.input_mode, InputMode::Jack35);
    assert_eq!(state.receiver.aux_mode, PowerState::Off);
    assert_eq!(state.projector, initial_state().projector);
}

#[tokio::test]
async fn composite_delta_converges_both_devices_independently() {
    let blaster = Arc::new(FakeBlaster::new());
    let mut media_center = MediaCenter::from_state(&initial_state(), Arc::clone(&blaster));

    let delta: SystemDelta = serde_json::from_str(
        r#"{
            "receiver": { "powerMode": "on" },
            "projector": { "hdmiMode": "hdmi1" }
        }"#,
    )
    .unwrap();
    media_center.update(&delta).await;

    assert_eq!(blaster.keys_for("Vizio"), vec!["KEY_POWER".to_string()]);
    assert_eq!(blaster.keys_for("Optoma"), vec!["KEY_MODE".to_string()]);

    let state = media_center.state();
    assert_eq!(state.receiver.power_mode, PowerState::On);
    assert_eq!(state.projector.hdmi_mode, HdmiInput::Hdmi1);
}

#[tokio::test(start_paused = true)]
async fn input_mode_wraps_around_the_selector() {
    let blaster = Arc::new(FakeBlaster::new());
    let mut media_center = MediaCenter::from_state(&initial_state(), Arc::clone(&blaster));

    // 3.5mm (slot 2) -> coaxial (slot 1): five forward steps over six slots.
    let delta: SystemDelta =
        serde_json::from_str(r#"{ "receiver": { "inputMode": "coaxial" } }"#).unwrap();
    media_center.update(&delta).await;

    assert_eq!(blaster.keys_for("Vizio").len(), 5);
    assert_eq!(media_center.state().receiver.input_mode, InputMode::Coaxial);
}

#[tokio::test]
async fn idempotent_delta_sends_nothing_and_changes_nothing() {
    let blaster = Arc::new(FakeBlaster::new());
    let mut media_center = MediaCenter::from_state(&initial_state(), Arc::clone(&blaster));

    let delta: SystemDelta = serde_json::from_str(
        r#"{
            "receiver": {
                "powerMode": "off",
                "volume": 4,
                "inputMode": "3.5mm",
                "auxMode": "off"
            },
            "projector": { "powerMode": "on", "hdmiMode": "hdmi2" }
        }"#,
    )
    .unwrap();
    media_center.update(&delta).await;

    assert!(blaster.sent().is_empty());
    assert_eq!(media_center.state(), initial_state());
}

#[tokio::test]
async fn extra_shadow_metadata_is_ignored() {
    let blaster = Arc::new(FakeBlaster::new());
    let mut media_center = MediaCenter::from_state(&initial_state(), Arc::clone(&blaster));

    let delta: SystemDelta = serde_json::from_str(
        r#"{
            "receiver": { "powerMode": "on", "clientToken": "abc" },
            "timestamp": 1700000000,
            "version": 12
        }"#,
    )
    .unwrap();
    media_center.update(&delta).await;

    assert_eq!(blaster.keys_for("Vizio"), vec!["KEY_POWER".to_string()]);
    assert_eq!(media_center.state().receiver.power_mode, PowerState::On);
}

#[tokio::test(start_paused = true)]
async fn failed_sequence_is_corrected_by_the_next_delta() {
    // Pulse 4 of the 6-pulse volume run fails mid-sequence.
    let blaster = Arc::new(FakeBlaster::failing_after(3));
    let mut media_center = MediaCenter::from_state(&initial_state(), Arc::clone(&blaster));

    let delta: SystemDelta =
        serde_json::from_str(r#"{ "receiver": { "volume": 7 } }"#).unwrap();
    media_center.update(&delta).await;

    // Three pulses were dispatched, then the run was abandoned with the
    // tracked volume still at its pre-attempt value.
    assert_eq!(blaster.sent().len(), 3);
    assert_eq!(media_center.state().receiver.volume.value(), 4);

    // A fresh delta recomputes the difference from the stale-but-known
    // state and makes a corrective attempt.
    let healthy = Arc::new(FakeBlaster::new());
    let mut media_center =
        MediaCenter::from_state(&media_center.state(), Arc::clone(&healthy));
    media_center.update(&delta).await;

    assert_eq!(healthy.keys_for("Vizio").len(), 6);
    assert_eq!(media_center.state().receiver.volume.value(), 7);
}

#[tokio::test]
async fn invalid_attribute_does_not_block_sibling_attributes() {
    let blaster = Arc::new(FakeBlaster::new());
    let mut media_center = MediaCenter::from_state(&initial_state(), Arc::clone(&blaster));

    let delta: SystemDelta = serde_json::from_str(
        r#"{
            "receiver": { "volume": 300, "inputMode": "tape", "powerMode": "on" }
        }"#,
    )
    .unwrap();
    media_center.update(&delta).await;

    // Only the valid power toggle was pulsed.
    assert_eq!(blaster.keys_for("Vizio"), vec!["KEY_POWER".to_string()]);
    let state = media_center.state();
    assert_eq!(state.receiver.power_mode, PowerState::On);
    assert_eq!(state.receiver.volume.value(), 4);
    assert_eq!(state.receiver.input_mode, InputMode::Jack35);
}

#[tokio::test]
async fn reported_snapshot_matches_shadow_wire_shape() {
    let blaster = Arc::new(FakeBlaster::new());
    let media_center = MediaCenter::from_state(&initial_state(), blaster);

    let reported = serde_json::to_value(media_center.state()).unwrap();
    assert_eq!(
        reported,
        serde_json::json!({
            "receiver": {
                "powerMode": "off",
                "volume": 4,
                "inputMode": "3.5mm",
                "auxMode": "off"
            },
            "projector": { "powerMode": "on", "hdmiMode": "hdmi2" }
        })
    );

    // The desired variant of the same shape seeds a fresh media center.
    let desired: SystemState = serde_json::from_value(reported).unwrap();
    let rehydrated = MediaCenter::from_state(&desired, Arc::new(FakeBlaster::new()));
    assert_eq!(rehydrated.state(), media_center.state());
}
