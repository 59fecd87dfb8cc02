mod common;
mod cluster_manager;
mod indexer_cluster;
mod license_manager;
mod monitoring_console;
mod search_head_cluster;
mod standalone;

pub use common::*;
pub use cluster_manager::*;
pub use indexer_cluster::*;
pub use license_manager::*;
pub use monitoring_console::*;
pub use search_head_cluster::*;
pub use standalone::*;

pub static API_GROUP: &str = "enterprise.splunk.com";
pub static API_VERSION: &str = "v4";
