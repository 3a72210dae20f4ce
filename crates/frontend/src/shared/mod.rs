pub mod api_utils;
pub mod components;
pub mod format;
pub mod icons;
pub mod list_controller;
pub mod query_state;
pub mod theme;
