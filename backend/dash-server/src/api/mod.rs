pub mod apps;
pub mod cluster;
pub mod cookies;
pub mod error;
pub mod extractors;
pub mod message_response;
pub mod session;
pub mod users;
