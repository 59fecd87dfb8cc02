use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{CommonSpec, ResourceRef, SplunkStatus};

#[skip_serializing_none]
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    group = "enterprise.splunk.com",
    version = "v4",
    kind = "IndexerCluster",
    derive = "Default",
    namespaced,
    shortname = "idc",
    doc = "IndexerCluster is a set of Splunk indexer peers",
    printcolumn = r#"{"name":"Phase","jsonPath":".status.phase","type":"string"}"#,
    status = "SplunkStatus"
)]
pub struct IndexerClusterSpec {
    #[serde(flatten)]
    pub common: CommonSpec,
    pub replicas: Option<i32>,
    pub cluster_manager_ref: Option<ResourceRef>,
}
