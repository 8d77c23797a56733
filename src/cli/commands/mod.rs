pub mod config;
pub mod del;
pub mod employee;
pub mod export;
pub mod init;
pub mod leave;
pub mod list;
pub mod log;
pub mod lunch;
pub mod observe;
pub mod pairs;
pub mod punch;
pub mod status;
pub mod sweep;
