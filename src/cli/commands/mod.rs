pub mod chart;
pub mod config;
pub mod export;
pub mod init;
pub mod interval;
pub mod serve;
pub mod stats;
pub mod users;
