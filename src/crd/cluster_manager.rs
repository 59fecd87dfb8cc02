use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{CommonSpec, SplunkStatus};

#[skip_serializing_none]
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    group = "enterprise.splunk.com",
    version = "v4",
    kind = "ClusterManager",
    derive = "Default",
    namespaced,
    shortname = "cmanager",
    doc = "ClusterManager coordinates the peers of an indexer cluster",
    printcolumn = r#"{"name":"Phase","jsonPath":".status.phase","type":"string"}"#,
    status = "SplunkStatus"
)]
pub struct ClusterManagerSpec {
    #[serde(flatten)]
    pub common: CommonSpec,
    pub replication_factor: Option<i32>,
    pub search_factor: Option<i32>,
}
