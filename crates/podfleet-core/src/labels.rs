//! Well-known keys and label mapping helpers.

use std::collections::HashMap;

/// Label recording which template generation a daemon pod was created from.
///
/// Written by the template stamper and read back by the generation
/// comparator; both sides must use this exact key.
pub const TEMPLATE_GENERATION_LABEL: &str = "pod-template-generation";

/// Taint placed on a node whose kubelet reports not ready.
pub const TAINT_NODE_NOT_READY: &str = "node.alpha.kubernetes.io/notReady";

/// Taint placed on a node the node controller cannot reach.
pub const TAINT_NODE_UNREACHABLE: &str = "node.alpha.kubernetes.io/unreachable";

/// Return a copy of `labels` with `key` set to `value`.
///
/// The input mapping is never modified. An empty key returns an
/// unmodified copy.
pub fn clone_and_add_label(
    labels: &HashMap<String, String>,
    key: &str,
    value: &str,
) -> HashMap<String, String> {
    let mut cloned = labels.clone();
    if key.is_empty() {
        return cloned;
    }
    cloned.insert(key.to_string(), value.to_string());
    cloned
}
