pub mod command;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod submit;
pub mod ui;
