//! # Wireframe Geometry
//!
//! This module turns collider shapes into renderable wireframes.
//!
//! ## Pipeline
//!
//! 1. [`compute_local_bounds`] reduces a [`ShapeDescriptor`] to an [`AxisAlignedBounds`]
//! 2. [`generate_wireframe`] maps the bounds through a local-to-world transform into a
//!    single line-strip [`Polyline`], either a box or a 12-sided prism
//!
//! ## Usage
//!
//! ```rust
//! use area_of_effect::gfx::geometry::{
//!     compute_local_bounds, generate_wireframe, RenderVariant, ShapeDescriptor, WireframeStyle,
//! };
//! use area_of_effect::gfx::color::LineColor;
//! use cgmath::{Matrix4, SquareMatrix, Vector3};
//!
//! let shape = ShapeDescriptor::Sphere { center: Vector3::new(0.0, 0.0, 0.0), radius: 1.0 };
//! let bounds = compute_local_bounds(&shape);
//! let style = WireframeStyle::new(0.2, LineColor::Red);
//!
//! let strip = generate_wireframe(RenderVariant::Box, &bounds, &Matrix4::identity(), &style);
//! assert_eq!(strip.vertex_count(), 16);
//! ```

pub mod bounds;
pub mod wireframe;

pub use bounds::*;
pub use wireframe::*;

use cgmath::Vector3;

use crate::gfx::color::{LineColor, Rgba};

/// Which wireframe shape to draw for a collider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderVariant {
    /// Rectangular box, 16-vertex strip
    #[default]
    Box,
    /// Dodecagonal prism, 49-vertex strip
    Prism,
}

/// Stroke parameters shared by every wireframe in a rebuild
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireframeStyle {
    /// Line width in world units
    pub stroke_width: f32,
    /// Palette color of the line
    pub color: LineColor,
}

impl WireframeStyle {
    pub fn new(stroke_width: f32, color: LineColor) -> Self {
        Self { stroke_width, color }
    }
}

/// One renderable wireframe: a world-space line strip with its stroke
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Strip vertices in world space, in draw order
    pub vertices: Vec<Vector3<f32>>,
    /// Line color
    pub color: Rgba,
    /// Line width
    pub stroke_width: f32,
}

impl Polyline {
    /// Create a polyline from vertices and a style
    pub fn new(vertices: Vec<Vector3<f32>>, style: &WireframeStyle) -> Self {
        Self {
            vertices,
            color: style.color.rgba(),
            stroke_width: style.stroke_width,
        }
    }

    /// Number of vertices in the strip
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the strip ends where it started
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => self.vertices.len() > 1 && first == last,
            _ => false,
        }
    }
}
