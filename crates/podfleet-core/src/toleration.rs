//! Tolerations and node taints.

use serde::{Deserialize, Serialize};

use crate::types::PodSpec;

/// How a toleration's key relates to a taint's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TolerationOperator {
    /// Matches any value for the key.
    Exists,
    /// Matches only when the values are equal.
    #[default]
    Equal,
}

/// What happens to pods that do not tolerate a taint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaintEffect {
    NoSchedule,
    PreferNoSchedule,
    /// New pods are not scheduled and running pods are evicted.
    NoExecute,
}

/// A node taint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taint {
    pub key: String,
    #[serde(default)]
    pub value: String,
    pub effect: TaintEffect,
}

/// Lets a pod stay scheduled on a node carrying a matching taint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toleration {
    /// Taint key to match. `None` matches every key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub operator: TolerationOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Taint effect to match. `None` matches every effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<TaintEffect>,
    /// How long a `NoExecute` taint is tolerated. `None` tolerates forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toleration_seconds: Option<i64>,
}

impl Toleration {
    /// An `Exists` toleration for `key` with the given effect and no duration.
    pub fn exists(key: &str, effect: TaintEffect) -> Self {
        Self {
            key: Some(key.to_string()),
            operator: TolerationOperator::Exists,
            value: None,
            effect: Some(effect),
            toleration_seconds: None,
        }
    }

    /// Whether this toleration covers `taint`.
    pub fn tolerates(&self, taint: &Taint) -> bool {
        if let Some(effect) = self.effect {
            if effect != taint.effect {
                return false;
            }
        }
        match &self.key {
            Some(key) if key != &taint.key => return false,
            None if self.operator != TolerationOperator::Exists => return false,
            _ => {}
        }
        match self.operator {
            TolerationOperator::Exists => true,
            TolerationOperator::Equal => self.value.as_deref().unwrap_or("") == taint.value,
        }
    }
}

impl PodSpec {
    /// Insert `toleration`, replacing any existing toleration with the same key.
    ///
    /// The first entry with a matching key is overwritten in place and any
    /// later entries with that key are dropped, so the key appears exactly
    /// once afterwards. Returns whether the toleration list changed.
    pub fn add_or_update_toleration(&mut self, toleration: Toleration) -> bool {
        let existing = std::mem::take(&mut self.tolerations);
        let mut merged = Vec::with_capacity(existing.len() + 1);
        let mut placed = false;
        let mut changed = false;

        for current in existing {
            if current.key != toleration.key {
                merged.push(current);
                continue;
            }
            if placed {
                changed = true;
                continue;
            }
            if current != toleration {
                changed = true;
            }
            merged.push(toleration.clone());
            placed = true;
        }

        if !placed {
            merged.push(toleration);
            changed = true;
        }

        self.tolerations = merged;
        changed
    }
}
