use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Lifecycle phase reported in the status of every Splunk resource
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq, JsonSchema)]
pub enum Phase {
    #[default]
    Pending,
    Ready,
    Updating,
    ScalingUp,
    ScalingDown,
    Terminating,
    Error,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SplunkStatus {
    pub phase: Phase,
    pub message: Option<String>,
    pub ready_replicas: Option<i32>,
}

/// Reference to another Splunk resource in the same namespace
#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    pub name: String,
    pub namespace: Option<String>,
}

/// Fields shared by every Splunk resource spec
#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommonSpec {
    pub image: Option<String>,
    pub image_pull_policy: Option<String>,
    pub license_manager_ref: Option<ResourceRef>,
    pub monitoring_console_ref: Option<ResourceRef>,
}
