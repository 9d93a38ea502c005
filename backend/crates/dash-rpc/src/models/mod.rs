pub mod node_status;
pub mod role_info;
