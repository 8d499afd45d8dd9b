//! # Line-Strip Wireframes
//!
//! Both generators emit one continuous strip so that a host can draw every edge
//! of a shape with a single line renderer. Some edges are traced twice to keep
//! the strip connected.

use std::f32::consts::TAU;

use cgmath::{EuclideanSpace, Matrix4, Point3, Transform, Vector3};

use super::{AxisAlignedBounds, Polyline, RenderVariant, WireframeStyle};

/// Vertices in a box strip
pub const BOX_STRIP_VERTEX_COUNT: usize = 16;
/// Sides of the prism base
pub const DODECAGON_SIDES: usize = 12;
/// Vertices in a prism strip
pub const DODECAGON_STRIP_VERTEX_COUNT: usize = 49;

/// Corner indices (see [`AxisAlignedBounds::corners`]) in strip order.
///
/// Bottom face, up to the top face, then down each remaining vertical edge.
const BOX_STRIP: [usize; BOX_STRIP_VERTEX_COUNT] = [0, 1, 2, 3, 0, 4, 5, 1, 5, 6, 2, 6, 7, 3, 7, 4];

#[derive(Debug, Clone, Copy)]
enum Ring {
    Top,
    Bottom,
}

use self::Ring::{Bottom as B, Top as T};

/// Ring points in strip order.
///
/// The first pass zigzags around the prism two sides at a time and returns to
/// `top[0]`; the second pass fills in the alternate verticals and rims.
#[rustfmt::skip]
const DODECAGON_STRIP: [(Ring, usize); DODECAGON_STRIP_VERTEX_COUNT] = [
    (T, 0), (T, 1), (B, 1), (B, 2),
    (T, 2), (T, 3), (B, 3), (B, 4),
    (T, 4), (T, 5), (B, 5), (B, 6),
    (T, 6), (T, 7), (B, 7), (B, 8),
    (T, 8), (T, 9), (B, 9), (B, 10),
    (T, 10), (T, 11), (B, 11), (B, 0),
    (T, 0),
    (B, 0), (B, 1), (T, 1),
    (T, 2), (B, 2), (B, 3), (T, 3),
    (T, 4), (B, 4), (B, 5), (T, 5),
    (T, 6), (B, 6), (B, 7), (T, 7),
    (T, 8), (B, 8), (B, 9), (T, 9),
    (T, 10), (B, 10), (B, 11), (T, 11),
    (T, 0),
];

fn to_world(transform: &Matrix4<f32>, local: Vector3<f32>) -> Vector3<f32> {
    transform.transform_point(Point3::from_vec(local)).to_vec()
}

/// Generate the 16-vertex box strip for `bounds`, mapped through `transform`.
pub fn generate_box_wireframe(
    bounds: &AxisAlignedBounds,
    transform: &Matrix4<f32>,
    style: &WireframeStyle,
) -> Polyline {
    let corners = bounds.corners().map(|corner| to_world(transform, corner));
    let vertices = BOX_STRIP.iter().map(|&i| corners[i]).collect();

    Polyline::new(vertices, style)
}

/// Generate the 49-vertex dodecagonal prism strip for `bounds`.
///
/// The prism is inscribed in the bounds' XZ footprint using `size.x` as the
/// diameter; `size.z` is not consulted, so the base is always circular.
pub fn generate_dodecagon_wireframe(
    bounds: &AxisAlignedBounds,
    transform: &Matrix4<f32>,
    style: &WireframeStyle,
) -> Polyline {
    let radius = bounds.size.x / 2.0;
    let top_y = bounds.center.y + bounds.size.y / 2.0;
    let bottom_y = bounds.center.y - bounds.size.y / 2.0;

    let mut top = [Vector3::new(0.0, 0.0, 0.0); DODECAGON_SIDES];
    let mut bottom = [Vector3::new(0.0, 0.0, 0.0); DODECAGON_SIDES];

    for i in 0..DODECAGON_SIDES {
        let theta = TAU * i as f32 / DODECAGON_SIDES as f32;
        let x = bounds.center.x + radius * theta.cos();
        let z = bounds.center.z + radius * theta.sin();

        top[i] = to_world(transform, Vector3::new(x, top_y, z));
        bottom[i] = to_world(transform, Vector3::new(x, bottom_y, z));
    }

    let vertices = DODECAGON_STRIP
        .iter()
        .map(|&(ring, i)| match ring {
            Ring::Top => top[i],
            Ring::Bottom => bottom[i],
        })
        .collect();

    Polyline::new(vertices, style)
}

/// Generate the wireframe for `variant`.
pub fn generate_wireframe(
    variant: RenderVariant,
    bounds: &AxisAlignedBounds,
    transform: &Matrix4<f32>,
    style: &WireframeStyle,
) -> Polyline {
    match variant {
        RenderVariant::Box => generate_box_wireframe(bounds, transform, style),
        RenderVariant::Prism => generate_dodecagon_wireframe(bounds, transform, style),
    }
}
