pub mod action;
pub mod activity;
pub mod category;
pub mod daily_update;
pub mod employee;
