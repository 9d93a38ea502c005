pub mod app_list_response;
#[allow(clippy::module_inception)]
pub mod apps;
