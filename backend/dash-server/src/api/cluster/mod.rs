#[allow(clippy::module_inception)]
pub mod cluster;
pub mod cluster_status_response;
pub mod monitoring_response;
