//! # Visualization Module
//!
//! Editor-side wiring that turns the host's trigger colliders into wireframes.
//!
//! ## Architecture
//!
//! The host engine implements [`VisualizationHost`], giving the session access to
//! key state, the trigger collider list and line-strip drawables. A
//! [`WireframeSession`] is driven by editor enter/exit notifications and a
//! per-frame [`tick`](WireframeSession::tick).
//!
//! ## Key Components
//!
//! - [`WireframeSession`] - tracks the wireframes currently shown
//! - [`VisualizationHost`] - capabilities the host provides
//! - [`VariantTable`] - picks box or prism rendering per collider
//! - [`WireframeSettings`] - key bindings, stroke and auto-update
//!
//! ## Usage
//!
//! ```no_run
//! use area_of_effect::visualization::{
//!     SettingsError, VariantTable, VisualizationHost, WireframeSession, WireframeSettings,
//! };
//!
//! fn run<V: VisualizationHost>(host: &mut V, frames: usize) -> Result<(), SettingsError> {
//!     let mut session = WireframeSession::new(WireframeSettings::default(), VariantTable::new())?;
//!
//!     session.on_editor_entered();
//!     for _ in 0..frames {
//!         session.tick(host);
//!     }
//!     session.on_editor_exited(host);
//!     Ok(())
//! }
//! ```

pub mod manager;
pub mod settings;
pub mod traits;
pub mod variant;

// Re-export main types
pub use manager::{SessionState, TickOutcome, TrackedWireframe, WireframeSession};
pub use settings::{KeyBindings, SettingsError, WireframeSettings};
pub use traits::{KeyCode, TriggerCollider, VisualizationHost};
pub use variant::VariantTable;
