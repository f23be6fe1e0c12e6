pub mod connection;
pub mod migrations;
pub mod record_repo;

pub use connection::*;
