//! podfleet-core: object model shared by the podfleet controller crates.
//!
//! Pod templates, pod instances and daemon set specs are plain serde
//! records using the Kubernetes camelCase wire names, so objects read from
//! the cluster's metadata store decode directly into these types.
//!
//! # Components
//!
//! - **`types`**: Pods, pod templates, conditions, daemon set specs
//! - **`toleration`**: Tolerations, taints, add-or-update by key
//! - **`labels`**: Well-known label/taint keys and clone-and-add
//! - **`config`**: `podfleet.toml` parser
//! - **`error`**: Object decode errors

pub mod config;
pub mod error;
pub mod labels;
pub mod toleration;
pub mod types;

pub use config::{FleetConfig, RolloutConfig};
pub use error::{CoreError, CoreResult};
pub use labels::{TAINT_NODE_NOT_READY, TAINT_NODE_UNREACHABLE, TEMPLATE_GENERATION_LABEL};
pub use toleration::{Taint, TaintEffect, Toleration, TolerationOperator};
pub use types::*;
