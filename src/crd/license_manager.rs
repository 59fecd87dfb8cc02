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
    kind = "LicenseManager",
    derive = "Default",
    namespaced,
    shortname = "lmanager",
    doc = "LicenseManager serves Splunk licenses to the other instances",
    printcolumn = r#"{"name":"Phase","jsonPath":".status.phase","type":"string"}"#,
    status = "SplunkStatus"
)]
pub struct LicenseManagerSpec {
    #[serde(flatten)]
    pub common: CommonSpec,
    pub license_url: Option<String>,
}
