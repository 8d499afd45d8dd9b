//! Headless session demo
//!
//! Drives a wireframe session through a few scripted frames against an in-memory
//! host and prints what would be drawn. Run with `RUST_LOG=debug` for details.

use std::collections::HashMap;

use anyhow::Result;
use area_of_effect::prelude::*;
use cgmath::Deg;

/// Tag the demo scene uses for round trigger pads
const ROUND_PAD_TAG: u32 = 1;

struct ScriptedHost {
    frame: usize,
    script: HashMap<usize, Vec<KeyCode>>,
    colliders: Vec<TriggerCollider>,
    next_handle: u64,
}

impl ScriptedHost {
    fn new() -> Self {
        let mut script = HashMap::new();
        script.insert(1, vec![KeyCode::Keypad7]);
        script.insert(2, vec![KeyCode::Keypad9]);
        script.insert(4, vec![KeyCode::Keypad9]);
        script.insert(5, vec![KeyCode::Keypad8]);

        let colliders = vec![
            TriggerCollider::new(
                ShapeDescriptor::Box {
                    center: Vector3::new(0.0, 1.0, 0.0),
                    size: Vector3::new(4.0, 2.0, 4.0),
                },
                Matrix4::from_translation(Vector3::new(10.0f32, 0.0, 0.0)) * Matrix4::from_angle_y(Deg(45.0f32)),
            ),
            TriggerCollider::new(
                ShapeDescriptor::Capsule {
                    center: Vector3::new(0.0, 0.0, 0.0),
                    radius: 0.5,
                    height: 3.0,
                    axis: CapsuleAxis::Y,
                },
                Matrix4::from_translation(Vector3::new(-3.0, 0.0, 2.0)),
            ),
            TriggerCollider::new(
                ShapeDescriptor::Box {
                    center: Vector3::new(0.0, 0.0, 0.0),
                    size: Vector3::new(6.0, 0.5, 6.0),
                },
                Matrix4::identity(),
            )
            .with_identity_tag(ROUND_PAD_TAG),
        ];

        Self {
            frame: 0,
            script,
            colliders,
            next_handle: 0,
        }
    }
}

impl VisualizationHost for ScriptedHost {
    type Handle = u64;

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.script
            .get(&self.frame)
            .is_some_and(|keys| keys.contains(&key))
    }

    fn trigger_colliders(&self) -> Vec<TriggerCollider> {
        self.colliders.clone()
    }

    fn create_line_strip(&mut self, polyline: &Polyline) -> Option<u64> {
        self.next_handle += 1;
        println!(
            "  create #{}: {} vertices, color {:?}, width {}",
            self.next_handle,
            polyline.vertex_count(),
            polyline.color.to_array(),
            polyline.stroke_width
        );
        Some(self.next_handle)
    }

    fn destroy_drawable(&mut self, handle: u64) {
        println!("  destroy #{}", handle);
    }

    fn show_message(&mut self, text: &str, duration_secs: f32) {
        println!("  [message for {}s] {}", duration_secs, text);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let settings = WireframeSettings::default()
        .with_line_width(0.1)
        .with_line_color_name("Cyan")?;
    let variants = VariantTable::new().with_prism_tag(ROUND_PAD_TAG);

    let mut host = ScriptedHost::new();
    let mut session = WireframeSession::new(settings, variants)?;

    println!("{} {}", area_of_effect::PLUGIN_NAME, area_of_effect::PLUGIN_VERSION);
    session.on_editor_entered();

    for frame in 0..7 {
        host.frame = frame;
        println!("frame {}", frame);
        let outcome = session.tick(&mut host);
        if !outcome.is_idle() {
            println!("  -> {:?}, tracking {}", outcome, session.tracked_count());
        }
    }

    session.on_editor_exited(&mut host);
    println!("editor closed, tracking {}", session.tracked_count());

    Ok(())
}
