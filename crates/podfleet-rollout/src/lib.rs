//! podfleet rollout helpers: template stamping and generation tracking.
//!
//! Every daemon pod is created from a stamped copy of the daemon set's
//! template: the copy tolerates node fault taints and carries the template
//! generation as a label. A pod whose label matches the daemon set's current
//! generation is up to date; all others are candidates for replacement.
//!
//! # Components
//!
//! - **`template`**: Stamp a template with tolerations and generation label
//! - **`generation`**: Check whether a pod reflects a given generation
//! - **`daemonset`**: Per-daemon-set wrappers and rollout snapshots
//! - **`error`**: Stamping errors

pub mod daemonset;
pub mod error;
pub mod generation;
pub mod template;

pub use daemonset::{RolloutSnapshot, split_pods_by_generation, stamped_template};
pub use error::{StampError, StampResult};
pub use generation::is_pod_updated;
pub use template::{daemon_tolerations, stamp_raw_template, stamp_template};
