pub mod action;
pub mod app;
pub mod events;
pub mod footer;
pub mod generate;
pub mod header;
pub mod input;
pub mod layout;
pub mod logs;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod status_log;
pub mod terminal_guard;
pub mod theme;
