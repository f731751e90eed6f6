//! Generation comparison for running daemon pods.

use podfleet_core::{Generation, Pod};

/// Whether `pod` was created from the template at `generation`.
///
/// Compares the pod's generation label with the decimal rendering of
/// `generation`, the same rendering `stamp_template` writes. Pods without
/// the label are never up to date.
pub fn is_pod_updated(generation: Generation, pod: &Pod) -> bool {
    pod.template_generation()
        .is_some_and(|label| label == generation.to_string())
}
