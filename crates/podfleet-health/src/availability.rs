//! Availability partitioner: splits daemon pods into available and not.
//!
//! The rollout controller uses the unavailable count to decide how many
//! more outdated pods it may replace without breaching `max_unavailable`.

use tracing::debug;

use podfleet_core::Pod;

use crate::clock::Clock;
use crate::readiness::is_pod_available;

/// Split `pods` by availability as of the clock's current instant.
///
/// Returns `(available, unavailable)`. Each side keeps the input order.
pub fn split_by_available_pods<'a, I, C>(
    min_ready_seconds: u32,
    pods: I,
    clock: &C,
) -> (Vec<&'a Pod>, Vec<&'a Pod>)
where
    I: IntoIterator<Item = &'a Pod>,
    C: Clock + ?Sized,
{
    split_by_available_pods_at(min_ready_seconds, pods, clock.now())
}

/// Split `pods` by availability as of `now` (unix seconds).
pub fn split_by_available_pods_at<'a, I>(
    min_ready_seconds: u32,
    pods: I,
    now: u64,
) -> (Vec<&'a Pod>, Vec<&'a Pod>)
where
    I: IntoIterator<Item = &'a Pod>,
{
    let (available, unavailable) =
        partition_pods(pods, |pod| is_pod_available(pod, min_ready_seconds, now));
    debug!(
        min_ready_seconds,
        available = available.len(),
        unavailable = unavailable.len(),
        "split pods by availability"
    );
    (available, unavailable)
}

/// Partition `pods` into those matching `predicate` and the rest.
///
/// Every pod lands in exactly one output, in input order.
pub fn partition_pods<'a, I, F>(pods: I, mut predicate: F) -> (Vec<&'a Pod>, Vec<&'a Pod>)
where
    I: IntoIterator<Item = &'a Pod>,
    F: FnMut(&Pod) -> bool,
{
    let mut matched = Vec::new();
    let mut rest = Vec::new();
    for pod in pods {
        if predicate(pod) {
            matched.push(pod);
        } else {
            rest.push(pod);
        }
    }
    (matched, rest)
}
