//! podfleet-health: pod readiness and availability for daemon rollouts.
//!
//! A pod is *ready* once its `Ready` condition is `True`. It becomes
//! *available* after staying ready for the daemon set's `min_ready_seconds`.
//! Rollouts throttle on the number of unavailable pods, so the partitioner
//! here splits a pod list into those two groups.
//!
//! ```text
//! split_by_available_pods(min_ready, pods, clock)
//!   ├── clock.now()            (sampled once per call)
//!   └── is_pod_available(pod, min_ready, now) per pod
//!         ├── pod_ready_condition()
//!         └── last_transition_time + min_ready < now
//! ```

pub mod availability;
pub mod clock;
pub mod readiness;

pub use availability::{partition_pods, split_by_available_pods, split_by_available_pods_at};
pub use clock::{Clock, FixedClock, SystemClock};
pub use readiness::{is_pod_available, is_pod_ready, pod_ready_condition};
