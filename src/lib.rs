pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detail;
pub mod logging;
pub mod navigation;
pub mod notify;
pub mod record;
pub mod submit;
pub mod ui;
