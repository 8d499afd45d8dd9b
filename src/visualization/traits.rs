//! # Host Traits
//!
//! This module defines the capabilities a host engine must provide for a
//! [`WireframeSession`](super::WireframeSession) to visualize its trigger volumes.

use cgmath::Matrix4;

use crate::gfx::geometry::{Polyline, ShapeDescriptor};

/// Keys a session can be bound to.
///
/// Hosts with their own key enumeration map it into this type, using
/// [`KeyCode::Other`] for anything not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Keypad0,
    Keypad1,
    Keypad2,
    Keypad3,
    Keypad4,
    Keypad5,
    Keypad6,
    Keypad7,
    Keypad8,
    Keypad9,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    /// Host-specific key code
    Other(u32),
}

/// A collider flagged as a trigger volume, as seen through the host boundary
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerCollider {
    /// Shape of the collider in its own local frame
    pub shape: ShapeDescriptor,
    /// Local-to-world transform of the collider
    pub local_to_world: Matrix4<f32>,
    /// Host object type the collider belongs to, if any; used to pick the render variant
    pub identity_tag: Option<u32>,
}

impl TriggerCollider {
    /// Create an untagged trigger collider
    ///
    /// # Arguments
    ///
    /// * `shape` - Shape of the collider in its local frame
    /// * `local_to_world` - Transform placing the collider in the world
    pub fn new(shape: ShapeDescriptor, local_to_world: Matrix4<f32>) -> Self {
        Self {
            shape,
            local_to_world,
            identity_tag: None,
        }
    }

    /// Attach a host identity tag
    ///
    /// # Arguments
    ///
    /// * `tag` - Host object type, looked up in a [`VariantTable`](super::VariantTable)
    pub fn with_identity_tag(mut self, tag: u32) -> Self {
        self.identity_tag = Some(tag);
        self
    }
}

/// Capabilities supplied by the host engine.
///
/// All calls happen synchronously from within [`WireframeSession::tick`](super::WireframeSession::tick)
/// or the editor mode notifications.
///
/// ## Examples
///
/// ```no_run
/// use area_of_effect::gfx::geometry::Polyline;
/// use area_of_effect::visualization::{KeyCode, TriggerCollider, VisualizationHost};
///
/// struct LogHost;
///
/// impl VisualizationHost for LogHost {
///     type Handle = usize;
///
///     fn is_key_pressed(&self, _key: KeyCode) -> bool { false }
///     fn trigger_colliders(&self) -> Vec<TriggerCollider> { Vec::new() }
///     fn create_line_strip(&mut self, polyline: &Polyline) -> Option<usize> {
///         Some(polyline.vertex_count())
///     }
///     fn destroy_drawable(&mut self, _handle: usize) {}
///     fn show_message(&mut self, text: &str, _duration_secs: f32) { println!("{}", text); }
/// }
/// ```
pub trait VisualizationHost {
    /// Opaque handle to a drawable the host created
    type Handle;

    /// Whether `key` went down during the current frame.
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// All colliders currently flagged as trigger volumes.
    fn trigger_colliders(&self) -> Vec<TriggerCollider>;

    /// Create a line-strip drawable from `polyline`.
    ///
    /// Returns `None` if the host could not create one; the wireframe is still
    /// tracked but there is nothing to destroy later.
    fn create_line_strip(&mut self, polyline: &Polyline) -> Option<Self::Handle>;

    /// Destroy a drawable previously returned by [`create_line_strip`](Self::create_line_strip).
    fn destroy_drawable(&mut self, handle: Self::Handle);

    /// Show a short user-facing message for `duration_secs` seconds.
    fn show_message(&mut self, text: &str, duration_secs: f32);
}
