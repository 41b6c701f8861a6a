pub mod activity;
pub mod admin;
pub mod backup;
pub mod config;
pub mod daily;
pub mod db;
pub mod init;
pub mod log;
pub mod team;
