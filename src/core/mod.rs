pub mod activity;
pub mod admin;
pub mod auth;
pub mod backup;
pub mod config;
pub mod daily;
pub mod directory;
pub mod log;
