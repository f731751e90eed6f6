//! Domain types for daemon pods and their templates.
//!
//! These mirror the subset of the Kubernetes pod and daemon set objects the
//! controller reads. Missing maps and lists decode as empty.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::RolloutConfig;
use crate::error::{CoreError, CoreResult};
use crate::labels::TEMPLATE_GENERATION_LABEL;
use crate::toleration::Toleration;

/// Monotonically increasing revision number of a daemon set's template.
pub type Generation = i64;

// ── Metadata ──────────────────────────────────────────────────────

/// Object metadata common to pods and pod templates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

// ── Pod template ──────────────────────────────────────────────────

/// Blueprint every daemon pod is created from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PodTemplate {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: PodSpec,
}

/// Pod specification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSpec {
    #[serde(default)]
    pub containers: Vec<Container>,
    /// Node the pod is bound to. Empty until scheduled.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub node_name: String,
    #[serde(default)]
    pub node_selector: HashMap<String, String>,
    #[serde(default)]
    pub tolerations: Vec<Toleration>,
}

/// A container inside a pod.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub image: String,
}

impl PodTemplate {
    /// Decode a template from an untyped stored object.
    pub fn from_value(value: &serde_json::Value) -> CoreResult<Self> {
        serde_json::from_value(value.clone()).map_err(|e| CoreError::Deserialize(e.to_string()))
    }

    /// Encode the template as an untyped object.
    pub fn to_value(&self) -> CoreResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| CoreError::Serialize(e.to_string()))
    }
}

// ── Pod ───────────────────────────────────────────────────────────

/// A live pod as observed from the cluster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pod {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: PodSpec,
    #[serde(default)]
    pub status: PodStatus,
}

impl Pod {
    /// Value of the template generation label, if the pod carries one.
    pub fn template_generation(&self) -> Option<&str> {
        self.metadata
            .labels
            .get(TEMPLATE_GENERATION_LABEL)
            .map(String::as_str)
    }

    /// Decode a pod from its JSON representation.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::Deserialize(e.to_string()))
    }
}

/// Observed status of a pod.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PodStatus {
    #[serde(default)]
    pub phase: PodPhase,
    #[serde(default)]
    pub conditions: Vec<PodCondition>,
}

/// Lifecycle phase of a pod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PodPhase {
    #[default]
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

/// A single condition in a pod's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodCondition {
    #[serde(rename = "type")]
    pub condition_type: PodConditionType,
    pub status: ConditionStatus,
    /// Unix timestamp (seconds) of the last status flip. `None` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PodConditionType {
    PodScheduled,
    Initialized,
    ContainersReady,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

// ── Daemon set ────────────────────────────────────────────────────

/// Desired state of a daemon set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaemonSetSpec {
    pub template: PodTemplate,
    /// Bumped by the controller every time `template` changes.
    #[serde(default)]
    pub template_generation: Generation,
    /// Seconds a new pod must stay ready before it counts as available.
    #[serde(default)]
    pub min_ready_seconds: u32,
    #[serde(default)]
    pub update_strategy: UpdateStrategy,
}

/// How outdated daemon pods get replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UpdateStrategy {
    /// Replace pods while at most `max_unavailable` are unavailable.
    #[serde(rename_all = "camelCase")]
    RollingUpdate { max_unavailable: u32 },
    /// Replace pods only after they are deleted by hand.
    OnDelete,
}

impl Default for UpdateStrategy {
    fn default() -> Self {
        Self::RollingUpdate { max_unavailable: 1 }
    }
}

impl DaemonSetSpec {
    /// Build a spec for `template` using controller-wide rollout defaults.
    pub fn new(template: PodTemplate, template_generation: Generation, rollout: &RolloutConfig) -> Self {
        Self {
            template,
            template_generation,
            min_ready_seconds: rollout.min_ready_seconds,
            update_strategy: UpdateStrategy::RollingUpdate {
                max_unavailable: rollout.max_unavailable,
            },
        }
    }

    /// Unavailable pods tolerated during a rolling update, if rolling.
    pub fn max_unavailable(&self) -> Option<u32> {
        match self.update_strategy {
            UpdateStrategy::RollingUpdate { max_unavailable } => Some(max_unavailable),
            UpdateStrategy::OnDelete => None,
        }
    }
}
