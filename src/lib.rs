pub mod action;
pub mod app;
pub mod client;
pub mod config;
pub mod connectivity;
pub mod domain;
pub mod event;
pub mod format;
pub mod opener;
pub mod render;
pub mod theme;
pub mod tui;
pub mod widgets;
pub mod worker;
