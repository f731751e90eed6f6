//! Template stamping: prepares a daemon set's template for pod creation.
//!
//! Daemon pods must survive taint-based eviction when their node goes
//! not-ready or unreachable, so every stamped template tolerates both
//! `NoExecute` taints indefinitely. The stamped template also carries the
//! generation label that `generation::is_pod_updated` reads back.

use tracing::debug;

use podfleet_core::labels::clone_and_add_label;
use podfleet_core::{
    Generation, PodTemplate, TAINT_NODE_NOT_READY, TAINT_NODE_UNREACHABLE,
    TEMPLATE_GENERATION_LABEL, TaintEffect, Toleration,
};

use crate::error::StampResult;

/// Tolerations added to every daemon pod.
pub fn daemon_tolerations() -> [Toleration; 2] {
    [
        Toleration::exists(TAINT_NODE_NOT_READY, TaintEffect::NoExecute),
        Toleration::exists(TAINT_NODE_UNREACHABLE, TaintEffect::NoExecute),
    ]
}

/// Return a copy of `template` stamped for `generation`.
///
/// The copy tolerates the node fault taints and has the generation label set.
/// `template` itself is left untouched.
pub fn stamp_template(template: &PodTemplate, generation: Generation) -> PodTemplate {
    let mut stamped = template.clone();

    for toleration in daemon_tolerations() {
        stamped.spec.add_or_update_toleration(toleration);
    }

    stamped.metadata.labels = clone_and_add_label(
        &template.metadata.labels,
        TEMPLATE_GENERATION_LABEL,
        &generation.to_string(),
    );

    debug!(
        generation,
        tolerations = stamped.spec.tolerations.len(),
        "stamped pod template"
    );
    stamped
}

/// Stamp a template held as an untyped stored object.
///
/// Fails when the object cannot be decoded into a `PodTemplate`; no partial
/// template is returned in that case.
pub fn stamp_raw_template(
    raw: &serde_json::Value,
    generation: Generation,
) -> StampResult<PodTemplate> {
    let template = PodTemplate::from_value(raw)?;
    Ok(stamp_template(&template, generation))
}
