pub mod error_toast;
pub mod footer;
pub mod help_overlay;
pub mod quake_list;
pub mod status_bar;
pub mod title_bar;
