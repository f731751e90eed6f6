//! Daemon set level wrappers around stamping, generation and availability.
//!
//! A rollout controller reads a `RolloutSnapshot` each reconcile pass to
//! decide how many outdated pods it may delete without exceeding
//! `max_unavailable`.

use serde::Serialize;
use tracing::debug;

use podfleet_core::{DaemonSetSpec, Generation, Pod, PodTemplate};
use podfleet_health::{Clock, partition_pods, split_by_available_pods};

use crate::generation::is_pod_updated;
use crate::template::stamp_template;

/// The daemon set's template stamped with its current generation.
pub fn stamped_template(spec: &DaemonSetSpec) -> PodTemplate {
    stamp_template(&spec.template, spec.template_generation)
}

/// Split `pods` into `(updated, outdated)` relative to `generation`.
pub fn split_pods_by_generation<'a, I>(
    generation: Generation,
    pods: I,
) -> (Vec<&'a Pod>, Vec<&'a Pod>)
where
    I: IntoIterator<Item = &'a Pod>,
{
    partition_pods(pods, |pod| is_pod_updated(generation, pod))
}

/// Point-in-time rollout counters for one daemon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RolloutSnapshot {
    pub generation: Generation,
    pub total: usize,
    /// Pods created from the current template generation.
    pub updated: usize,
    pub available: usize,
    pub unavailable: usize,
    /// Further pods that may be taken down right now. Zero for `OnDelete`.
    pub headroom: usize,
}

impl RolloutSnapshot {
    /// Count `pods` against `spec` as of the clock's current instant.
    pub fn observe<C>(spec: &DaemonSetSpec, pods: &[Pod], clock: &C) -> Self
    where
        C: Clock + ?Sized,
    {
        let generation = spec.template_generation;
        let (updated, _) = split_pods_by_generation(generation, pods);
        let (available, unavailable) =
            split_by_available_pods(spec.min_ready_seconds, pods, clock);

        let headroom = spec
            .max_unavailable()
            .map(|max| (max as usize).saturating_sub(unavailable.len()))
            .unwrap_or(0);

        let snapshot = Self {
            generation,
            total: pods.len(),
            updated: updated.len(),
            available: available.len(),
            unavailable: unavailable.len(),
            headroom,
        };
        debug!(
            generation,
            total = snapshot.total,
            updated = snapshot.updated,
            unavailable = snapshot.unavailable,
            headroom = snapshot.headroom,
            "observed rollout"
        );
        snapshot
    }

    /// Whether every pod runs the current generation and is available.
    pub fn is_complete(&self) -> bool {
        self.updated == self.total && self.unavailable == 0
    }
}
