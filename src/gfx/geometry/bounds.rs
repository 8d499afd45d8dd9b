//! # Local Bounding Volumes
//!
//! Derives an axis-aligned box, in a collider's own local frame, from the minimal
//! description of its shape. The host turns whatever collider type it has into a
//! [`ShapeDescriptor`] once, and everything downstream works on the result of
//! [`compute_local_bounds`].

use cgmath::{Vector3, Zero};

/// Axis-aligned box described by its center and full size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignedBounds {
    /// Center of the box in local space
    pub center: Vector3<f32>,
    /// Full edge lengths along x, y and z (never negative)
    pub size: Vector3<f32>,
}

impl AxisAlignedBounds {
    /// Create bounds from a center and a full size
    pub fn new(center: Vector3<f32>, size: Vector3<f32>) -> Self {
        Self { center, size }
    }

    /// Zero-sized bounds at the origin
    pub fn empty() -> Self {
        Self::new(Vector3::zero(), Vector3::zero())
    }

    /// Check whether the box has no volume and sits at the origin
    pub fn is_empty(&self) -> bool {
        self.center == Vector3::zero() && self.size == Vector3::zero()
    }

    /// Half of the size along each axis
    pub fn extents(&self) -> Vector3<f32> {
        self.size / 2.0
    }

    /// Minimum corner
    pub fn min(&self) -> Vector3<f32> {
        self.center - self.extents()
    }

    /// Maximum corner
    pub fn max(&self) -> Vector3<f32> {
        self.center + self.extents()
    }

    /// The eight corners of the box.
    ///
    /// Indices 0..4 are the bottom face (-y) and 4..8 the top face (+y), with
    /// `corners[i + 4]` directly above `corners[i]`:
    ///
    /// ```text
    /// 0: (-,-,-)  1: (+,-,-)  2: (+,-,+)  3: (-,-,+)
    /// 4: (-,+,-)  5: (+,+,-)  6: (+,+,+)  7: (-,+,+)
    /// ```
    pub fn corners(&self) -> [Vector3<f32>; 8] {
        let Vector3 { x: hw, y: hh, z: hd } = self.extents();
        let c = self.center;

        [
            c + Vector3::new(-hw, -hh, -hd),
            c + Vector3::new(hw, -hh, -hd),
            c + Vector3::new(hw, -hh, hd),
            c + Vector3::new(-hw, -hh, hd),
            c + Vector3::new(-hw, hh, -hd),
            c + Vector3::new(hw, hh, -hd),
            c + Vector3::new(hw, hh, hd),
            c + Vector3::new(-hw, hh, hd),
        ]
    }
}

impl Default for AxisAlignedBounds {
    fn default() -> Self {
        Self::empty()
    }
}

/// The local axis a capsule is stretched along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapsuleAxis {
    X,
    Y,
    Z,
}

impl CapsuleAxis {
    /// Unit vector along this axis
    pub fn unit(self) -> Vector3<f32> {
        match self {
            CapsuleAxis::X => Vector3::unit_x(),
            CapsuleAxis::Y => Vector3::unit_y(),
            CapsuleAxis::Z => Vector3::unit_z(),
        }
    }
}

/// Shape information needed to derive local bounds for a collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeDescriptor {
    Box {
        center: Vector3<f32>,
        size: Vector3<f32>,
    },
    Sphere {
        center: Vector3<f32>,
        radius: f32,
    },
    Capsule {
        center: Vector3<f32>,
        radius: f32,
        height: f32,
        axis: CapsuleAxis,
    },
    /// Mesh collider; bounds come precomputed from the mesh asset
    Mesh { bounds: AxisAlignedBounds },
    /// A collider kind the host could not classify
    Unsupported,
}

impl ShapeDescriptor {
    /// Short name of the shape kind, for logging
    pub fn kind_name(&self) -> &'static str {
        match self {
            ShapeDescriptor::Box { .. } => "box",
            ShapeDescriptor::Sphere { .. } => "sphere",
            ShapeDescriptor::Capsule { .. } => "capsule",
            ShapeDescriptor::Mesh { .. } => "mesh",
            ShapeDescriptor::Unsupported => "unsupported",
        }
    }
}

/// Compute the local-space bounds of a shape.
///
/// Capsules are only enclosed tightly when their axis is aligned with the local
/// frame; the box is grown by `height` along the axis and shifted by half of it.
/// Unsupported shapes yield [`AxisAlignedBounds::empty`].
pub fn compute_local_bounds(shape: &ShapeDescriptor) -> AxisAlignedBounds {
    match *shape {
        ShapeDescriptor::Box { center, size } => AxisAlignedBounds::new(center, size),
        ShapeDescriptor::Sphere { center, radius } => {
            let diameter = radius * 2.0;
            AxisAlignedBounds::new(center, Vector3::new(diameter, diameter, diameter))
        }
        ShapeDescriptor::Capsule {
            center,
            radius,
            height,
            axis,
        } => {
            let diameter = radius * 2.0;
            let along = axis.unit() * height;
            AxisAlignedBounds::new(
                center + along / 2.0,
                Vector3::new(diameter, diameter, diameter) + along,
            )
        }
        ShapeDescriptor::Mesh { bounds } => bounds,
        ShapeDescriptor::Unsupported => {
            log::debug!("Unsupported collider shape, using empty bounds");
            AxisAlignedBounds::empty()
        }
    }
}
