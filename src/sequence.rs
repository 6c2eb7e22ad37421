// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sequential pulse execution.
//!
//! The physical remotes enforce a minimum interval between accepted
//! presses; pulses sent concurrently risk silent drops that nothing can
//! detect afterward. Convergence runs therefore dispatch their pulses
//! strictly one after another.

use std::future::Future;

/// Invokes `action` exactly `count` times, strictly sequentially.
///
/// Invocation `i + 1` does not begin until invocation `i` has completed.
/// For a count of zero the action is never invoked and the call resolves
/// immediately. On the first failure the remaining invocations are not
/// started and the error is returned (fail-fast), leaving the attribute's
/// convergence to be retried from the last known state.
///
/// # Errors
///
/// Returns the first error produced by `action`.
///
/// # Examples
///
/// ```
/// use remotr_lib::sequence::repeat_sequential;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut sent = 0;
/// repeat_sequential(3, || {
///     sent += 1;
///     async { Ok::<(), std::convert::Infallible>(()) }
/// })
/// .await
/// .unwrap();
/// assert_eq!(sent, 3);
/// # }
/// ```
pub async fn repeat_sequential<F, Fut, T, E>(count: u32, mut action: F) -> Result<(), E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    for _ in 0..count {
        action().await?;
    }
    Ok(())
}
