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
    kind = "Standalone",
    derive = "Default",
    namespaced,
    shortname = "stdaln",
    doc = "Standalone is a single Splunk Enterprise instance",
    printcolumn = r#"{"name":"Phase","jsonPath":".status.phase","type":"string"}"#,
    status = "SplunkStatus"
)]
pub struct StandaloneSpec {
    #[serde(flatten)]
    pub common: CommonSpec,
    pub replicas: Option<i32>,
}
