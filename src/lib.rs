// src/lib.rs
//! Area of Effect
//!
//! Wireframe visualization of invisible trigger volumes for level editors.

pub mod gfx;
pub mod prelude;
pub mod visualization;

/// Display name of the plugin
pub const PLUGIN_NAME: &str = "Area of Effect";
/// Unique plugin identifier
pub const PLUGIN_GUID: &str = "com.metalted.zeepkist.areaofeffect";
/// Plugin version, kept in step with the crate version
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export main types for convenience
pub use visualization::WireframeSession;
