pub mod api;
pub mod config;
pub mod core_types;
pub mod error;
pub mod optimizer;
pub mod presets;
pub mod render;
pub mod scorer;
// cmd and reports are binary modules (declared in main.rs).
