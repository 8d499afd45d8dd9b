//! # Graphics Module
//!
//! Engine-independent geometry and color handling for trigger wireframes.
//!
//! ## Architecture Overview
//!
//! - **Colors** ([`color`]) - The line color palette and name resolution
//! - **Geometry** ([`geometry`]) - Local bounds extraction and line-strip generation
//!
//! Nothing in here talks to a host engine. Inputs are plain shape descriptions and
//! `cgmath` transforms, outputs are [`Polyline`]s ready to hand to a line renderer.
//!
//! ## Usage
//!
//! ```rust
//! use area_of_effect::gfx::{compute_local_bounds, generate_box_wireframe, ShapeDescriptor, WireframeStyle};
//! use area_of_effect::gfx::color::LineColor;
//! use cgmath::{Matrix4, Vector3};
//!
//! let shape = ShapeDescriptor::Box { center: Vector3::new(0.0, 0.5, 0.0), size: Vector3::new(1.0, 1.0, 1.0) };
//! let transform = Matrix4::from_translation(Vector3::new(10.0, 0.0, 0.0));
//!
//! let strip = generate_box_wireframe(&compute_local_bounds(&shape), &transform, &WireframeStyle::new(0.1, LineColor::Green));
//! assert_eq!(strip.vertex_count(), 16);
//! ```

pub mod color;
pub mod geometry;

// Re-export commonly used types
pub use color::{resolve_color, LineColor, Rgba};
pub use geometry::{
    compute_local_bounds, generate_box_wireframe, generate_dodecagon_wireframe, generate_wireframe,
    AxisAlignedBounds, CapsuleAxis, Polyline, RenderVariant, ShapeDescriptor, WireframeStyle,
};
