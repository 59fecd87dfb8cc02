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
    kind = "MonitoringConsole",
    derive = "Default",
    namespaced,
    shortname = "mc",
    doc = "MonitoringConsole watches the health of a Splunk deployment",
    printcolumn = r#"{"name":"Phase","jsonPath":".status.phase","type":"string"}"#,
    status = "SplunkStatus"
)]
pub struct MonitoringConsoleSpec {
    #[serde(flatten)]
    pub common: CommonSpec,
    pub replicas: Option<i32>,
}
