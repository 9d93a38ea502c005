//! Parsers for the semi-structured text the directory returns.

pub mod app_record;
pub mod delimited;
pub mod user_record;
