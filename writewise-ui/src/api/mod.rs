//! HTTP API handlers for writewise-ui

pub mod analyze;
pub mod buildinfo;
pub mod health;
pub mod status;
pub mod ui;

pub use analyze::analyze_text;
pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use status::get_status;
pub use ui::{serve_app_js, serve_index};
