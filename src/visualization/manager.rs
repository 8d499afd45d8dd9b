//! Wireframe session for the level editor
//!
//! Owns the set of wireframes currently shown, and rebuilds or clears it in
//! response to key presses while the editor is open.

use super::settings::{SettingsError, WireframeSettings};
use super::traits::VisualizationHost;
use super::variant::VariantTable;
use crate::gfx::geometry::{compute_local_bounds, generate_wireframe, Polyline};

/// How long the auto-update notification stays on screen, in seconds
pub const TOGGLE_MESSAGE_DURATION: f32 = 1.0;

/// Whether the session is reacting to input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Editor closed, all input ignored
    #[default]
    Inactive,
    /// Editor open
    Active,
}

/// A wireframe the session created, with the host drawable backing it
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedWireframe<H> {
    /// Host drawable, `None` if the host declined to create one
    pub handle: Option<H>,
    /// The geometry handed to the host
    pub polyline: Polyline,
}

/// What a single [`WireframeSession::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Number of wireframes built, if a rebuild happened
    pub rebuilt: Option<usize>,
    /// Whether the wireframes were removed
    pub cleared: bool,
    /// New auto-update value, if it was toggled
    pub auto_update_toggled: Option<bool>,
}

impl TickOutcome {
    /// True when the tick changed nothing
    pub fn is_idle(&self) -> bool {
        self.rebuilt.is_none() && !self.cleared && self.auto_update_toggled.is_none()
    }
}

/// Draws wireframes around trigger colliders while the level editor is open.
///
/// The host forwards editor enter/exit notifications and calls [`tick`](Self::tick)
/// once per frame. Every rebuild destroys the previous wireframes before any
/// new one is created.
pub struct WireframeSession<H> {
    settings: WireframeSettings,
    variants: VariantTable,
    state: SessionState,
    tracked: Vec<TrackedWireframe<H>>,
}

impl<H> WireframeSession<H> {
    /// Create an inactive session
    pub fn new(settings: WireframeSettings, variants: VariantTable) -> Result<Self, SettingsError> {
        settings.validate()?;

        log::info!("Plugin {} is loaded!", crate::PLUGIN_GUID);

        Ok(Self {
            settings,
            variants,
            state: SessionState::Inactive,
            tracked: Vec::new(),
        })
    }

    /// The editor was opened
    pub fn on_editor_entered(&mut self) {
        if self.state != SessionState::Active {
            log::info!("Level editor entered, wireframes enabled");
        }
        self.state = SessionState::Active;
    }

    /// The editor was closed; removes every wireframe
    pub fn on_editor_exited<V>(&mut self, host: &mut V)
    where
        V: VisualizationHost<Handle = H>,
    {
        if self.state != SessionState::Inactive {
            log::info!("Level editor exited, wireframes disabled");
        }
        self.state = SessionState::Inactive;
        self.clear(host);
    }

    /// Process one frame of input.
    ///
    /// Refresh (or auto-update) is handled first, then remove, then the
    /// auto-update toggle, so a toggle takes effect on the following tick.
    ///
    /// # Arguments
    ///
    /// * `host` - Host engine queried for key state and colliders, and asked to
    ///   create and destroy drawables
    ///
    /// # Returns
    ///
    /// A [`TickOutcome`] describing what the tick did; idle while inactive
    pub fn tick<V>(&mut self, host: &mut V) -> TickOutcome
    where
        V: VisualizationHost<Handle = H>,
    {
        let mut outcome = TickOutcome::default();

        if self.state != SessionState::Active {
            log::trace!("Session inactive, ignoring tick");
            return outcome;
        }

        let keys = self.settings.key_bindings;

        if host.is_key_pressed(keys.refresh) || self.settings.auto_update {
            outcome.rebuilt = Some(self.rebuild(host));
        }

        if host.is_key_pressed(keys.remove) {
            self.clear(host);
            outcome.cleared = true;
        }

        if host.is_key_pressed(keys.toggle_auto_update) {
            let enabled = !self.settings.auto_update;
            self.settings.auto_update = enabled;

            let message = format!("AOE Auto Update: {}", if enabled { "On" } else { "Off" });
            log::info!("{}", message);
            host.show_message(&message, TOGGLE_MESSAGE_DURATION);

            outcome.auto_update_toggled = Some(enabled);
        }

        outcome
    }

    /// Replace all wireframes with fresh ones for the current trigger colliders.
    ///
    /// Does nothing while the editor is closed. If the settings were changed to
    /// an invalid line width, the old wireframes are removed and nothing is built.
    ///
    /// # Arguments
    ///
    /// * `host` - Host engine providing the trigger colliders and drawables
    ///
    /// # Returns
    ///
    /// The number of wireframes now tracked
    pub fn rebuild<V>(&mut self, host: &mut V) -> usize
    where
        V: VisualizationHost<Handle = H>,
    {
        if self.state != SessionState::Active {
            log::debug!("Session inactive, ignoring rebuild");
            return 0;
        }

        self.clear(host);

        if let Err(err) = self.settings.validate() {
            log::warn!("Skipping wireframe rebuild: {}", err);
            return 0;
        }

        let style = self.settings.style();
        let colliders = host.trigger_colliders();

        for collider in &colliders {
            let bounds = compute_local_bounds(&collider.shape);
            let variant = self.variants.classify(collider.identity_tag);

            log::debug!(
                "Building {:?} wireframe for {} collider (center {:?}, size {:?})",
                variant,
                collider.shape.kind_name(),
                bounds.center,
                bounds.size
            );

            let polyline = generate_wireframe(variant, &bounds, &collider.local_to_world, &style);
            let handle = host.create_line_strip(&polyline);
            if handle.is_none() {
                log::debug!("Host did not create a drawable for this wireframe");
            }

            self.tracked.push(TrackedWireframe { handle, polyline });
        }

        log::info!("Built {} trigger wireframes", self.tracked.len());
        self.tracked.len()
    }

    /// Destroy every tracked wireframe
    pub fn clear<V>(&mut self, host: &mut V)
    where
        V: VisualizationHost<Handle = H>,
    {
        if self.tracked.is_empty() {
            return;
        }

        let count = self.tracked.len();
        for wireframe in self.tracked.drain(..) {
            if let Some(handle) = wireframe.handle {
                host.destroy_drawable(handle);
            }
        }

        log::debug!("Removed {} trigger wireframes", count);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Wireframes currently shown
    pub fn tracked(&self) -> &[TrackedWireframe<H>] {
        &self.tracked
    }

    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    pub fn settings(&self) -> &WireframeSettings {
        &self.settings
    }

    /// Mutable settings; changes apply from the next rebuild, which checks them first
    pub fn settings_mut(&mut self) -> &mut WireframeSettings {
        &mut self.settings
    }

    pub fn variants(&self) -> &VariantTable {
        &self.variants
    }

    pub fn variants_mut(&mut self) -> &mut VariantTable {
        &mut self.variants
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{RenderVariant, ShapeDescriptor};
    use crate::visualization::traits::{KeyCode, TriggerCollider};
    use cgmath::{Matrix4, SquareMatrix, Vector3};
    use std::collections::HashSet;

    #[derive(Default)]
    struct TestHost {
        pressed: HashSet<KeyCode>,
        colliders: Vec<TriggerCollider>,
        next_handle: u32,
        live: HashSet<u32>,
        refuse_create: bool,
        messages: Vec<(String, f32)>,
    }

    impl VisualizationHost for TestHost {
        type Handle = u32;

        fn is_key_pressed(&self, key: KeyCode) -> bool {
            self.pressed.contains(&key)
        }

        fn trigger_colliders(&self) -> Vec<TriggerCollider> {
            self.colliders.clone()
        }

        fn create_line_strip(&mut self, _polyline: &Polyline) -> Option<u32> {
            if self.refuse_create {
                return None;
            }
            self.next_handle += 1;
            self.live.insert(self.next_handle);
            Some(self.next_handle)
        }

        fn destroy_drawable(&mut self, handle: u32) {
            assert!(self.live.remove(&handle), "double destroy of {}", handle);
        }

        fn show_message(&mut self, text: &str, duration_secs: f32) {
            self.messages.push((text.to_string(), duration_secs));
        }
    }

    fn unit_box() -> TriggerCollider {
        TriggerCollider::new(
            ShapeDescriptor::Box {
                center: Vector3::new(0.0, 0.0, 0.0),
                size: Vector3::new(1.0, 1.0, 1.0),
            },
            Matrix4::identity(),
        )
    }

    fn session() -> WireframeSession<u32> {
        WireframeSession::new(WireframeSettings::default(), VariantTable::new()).unwrap()
    }

    #[test]
    fn test_starts_inactive() {
        let session = session();
        assert_eq!(session.state(), SessionState::Inactive);
        assert_eq!(session.tracked_count(), 0);
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let result = WireframeSession::<u32>::new(
            WireframeSettings::default().with_line_width(-0.5),
            VariantTable::new(),
        );
        assert!(matches!(result, Err(SettingsError::InvalidLineWidth(_))));
    }

    #[test]
    fn test_inactive_ignores_input() {
        let mut host = TestHost::default();
        host.colliders.push(unit_box());
        host.pressed.insert(KeyCode::Keypad7);
        host.pressed.insert(KeyCode::Keypad9);

        let mut session = session();
        let outcome = session.tick(&mut host);

        assert!(outcome.is_idle());
        assert_eq!(session.tracked_count(), 0);
        assert!(host.messages.is_empty());
        assert!(!session.settings().auto_update);
    }

    #[test]
    fn test_refresh_builds_wireframes() {
        let mut host = TestHost::default();
        host.colliders.push(unit_box());
        host.colliders.push(unit_box());
        host.pressed.insert(KeyCode::Keypad7);

        let mut session = session();
        session.on_editor_entered();
        let outcome = session.tick(&mut host);

        assert_eq!(outcome.rebuilt, Some(2));
        assert_eq!(session.tracked_count(), 2);
        assert_eq!(host.live.len(), 2);
    }

    #[test]
    fn test_rebuild_releases_previous_drawables() {
        let mut host = TestHost::default();
        host.colliders.push(unit_box());

        let mut session = session();
        session.on_editor_entered();
        session.rebuild(&mut host);
        session.rebuild(&mut host);
        session.rebuild(&mut host);

        assert_eq!(session.tracked_count(), 1);
        assert_eq!(host.live.len(), 1);
        assert_eq!(host.next_handle, 3);
    }

    #[test]
    fn test_refresh_then_remove_in_same_tick() {
        let mut host = TestHost::default();
        host.colliders.push(unit_box());
        host.pressed.insert(KeyCode::Keypad7);
        host.pressed.insert(KeyCode::Keypad8);

        let mut session = session();
        session.on_editor_entered();
        let outcome = session.tick(&mut host);

        assert_eq!(outcome.rebuilt, Some(1));
        assert!(outcome.cleared);
        assert_eq!(session.tracked_count(), 0);
        assert!(host.live.is_empty());
    }

    #[test]
    fn test_toggle_auto_update() {
        let mut host = TestHost::default();
        host.colliders.push(unit_box());
        host.pressed.insert(KeyCode::Keypad9);

        let mut session = session();
        session.on_editor_entered();

        let outcome = session.tick(&mut host);
        assert_eq!(outcome.auto_update_toggled, Some(true));
        // Takes effect from the next tick
        assert_eq!(outcome.rebuilt, None);
        assert!(session.settings().auto_update);
        assert_eq!(host.messages, vec![("AOE Auto Update: On".to_string(), 1.0)]);

        host.pressed.clear();
        let outcome = session.tick(&mut host);
        assert_eq!(outcome.rebuilt, Some(1));

        host.pressed.insert(KeyCode::Keypad9);
        let outcome = session.tick(&mut host);
        assert_eq!(outcome.auto_update_toggled, Some(false));
        assert_eq!(host.messages.last().unwrap().0, "AOE Auto Update: Off");
    }

    #[test]
    fn test_exit_clears_and_deactivates() {
        let mut host = TestHost::default();
        host.colliders.push(unit_box());

        let mut session = session();
        session.on_editor_entered();
        session.rebuild(&mut host);
        assert_eq!(host.live.len(), 1);

        session.on_editor_exited(&mut host);
        assert!(!session.is_active());
        assert_eq!(session.tracked_count(), 0);
        assert!(host.live.is_empty());
    }

    #[test]
    fn test_missing_handles_are_skipped() {
        let mut host = TestHost {
            refuse_create: true,
            ..Default::default()
        };
        host.colliders.push(unit_box());

        let mut session = session();
        session.on_editor_entered();
        assert_eq!(session.rebuild(&mut host), 1);
        assert!(session.tracked()[0].handle.is_none());

        // Would panic in destroy_drawable if a handle were passed through
        session.clear(&mut host);
        assert_eq!(session.tracked_count(), 0);
    }

    #[test]
    fn test_rebuild_ignored_while_inactive() {
        let mut host = TestHost::default();
        host.colliders.push(unit_box());

        let mut session = session();
        assert_eq!(session.rebuild(&mut host), 0);
        assert_eq!(session.tracked_count(), 0);
        assert!(host.live.is_empty());
        assert_eq!(host.next_handle, 0);

        session.on_editor_entered();
        session.rebuild(&mut host);
        session.on_editor_exited(&mut host);
        assert_eq!(session.rebuild(&mut host), 0);
        assert!(host.live.is_empty());
    }

    #[test]
    fn test_invalid_width_never_reaches_host() {
        let mut host = TestHost::default();
        host.colliders.push(unit_box());

        let mut session = session();
        session.on_editor_entered();
        session.rebuild(&mut host);
        assert_eq!(host.live.len(), 1);

        session.settings_mut().line_width = f32::NAN;
        session.settings_mut().auto_update = true;
        let outcome = session.tick(&mut host);

        assert_eq!(outcome.rebuilt, Some(0));
        assert_eq!(session.tracked_count(), 0);
        assert!(host.live.is_empty());
        assert_eq!(host.next_handle, 1);

        session.settings_mut().line_width = -1.0;
        assert_eq!(session.rebuild(&mut host), 0);
        assert_eq!(host.next_handle, 1);

        session.settings_mut().line_width = 0.3;
        assert_eq!(session.rebuild(&mut host), 1);
        assert_eq!(session.tracked()[0].polyline.stroke_width, 0.3);
    }

    #[test]
    fn test_variant_table_changes_apply_on_rebuild() {
        let mut host = TestHost::default();
        host.colliders.push(unit_box().with_identity_tag(9));

        let mut session = session();
        session.on_editor_entered();
        session.rebuild(&mut host);
        assert_eq!(session.tracked()[0].polyline.vertex_count(), 16);

        session.variants_mut().insert(9, RenderVariant::Prism);
        session.rebuild(&mut host);
        assert_eq!(session.tracked()[0].polyline.vertex_count(), 49);
        assert_eq!(session.variants().len(), 1);
    }

    #[test]
    fn test_prism_variant_from_table() {
        let mut host = TestHost::default();
        host.colliders.push(unit_box().with_identity_tag(42));
        host.colliders.push(unit_box().with_identity_tag(7));

        let mut session =
            WireframeSession::new(WireframeSettings::default(), VariantTable::new().with_prism_tag(42))
                .unwrap();
        session.on_editor_entered();
        session.rebuild(&mut host);

        assert_eq!(session.tracked()[0].polyline.vertex_count(), 49);
        assert_eq!(session.tracked()[1].polyline.vertex_count(), 16);
    }
}
