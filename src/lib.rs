pub mod config;
pub mod db;
pub mod gear;
pub mod http;
pub mod metrics;
pub mod roster;
