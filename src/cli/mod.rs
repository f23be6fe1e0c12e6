pub mod commands;
pub mod export;
pub mod init;
pub mod list;
pub mod login;
pub mod review;
pub mod status;
pub mod submit;

pub use commands::*;
