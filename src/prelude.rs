//! # Area of Effect Prelude
//!
//! Commonly used types in one import, for host integrations:
//!
//! ```rust
//! use area_of_effect::prelude::*;
//!
//! let settings = WireframeSettings::default().with_line_color(LineColor::Cyan);
//! let session: WireframeSession<u32> = WireframeSession::new(settings, VariantTable::new()).unwrap();
//! assert_eq!(session.state(), SessionState::Inactive);
//! ```

// Re-export geometry and color types
pub use crate::gfx::color::{resolve_color, LineColor, Rgba};
pub use crate::gfx::geometry::{
    compute_local_bounds, generate_wireframe, AxisAlignedBounds, CapsuleAxis, Polyline, RenderVariant,
    ShapeDescriptor, WireframeStyle,
};

// Re-export session types
pub use crate::visualization::{
    KeyBindings, KeyCode, SessionState, SettingsError, TickOutcome, TrackedWireframe, TriggerCollider,
    VariantTable, VisualizationHost, WireframeSession, WireframeSettings,
};

// Re-export common external dependencies
pub use cgmath::{Matrix4, SquareMatrix, Vector3};
