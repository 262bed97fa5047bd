//! SDK entry points and builder for composing the star system explorer app.

use bevy::prelude::*;

use crate::camera::{
    apply_viewer_offset, immersive_enabled, mouse_look_plugin, CameraRig, ImmersiveMode,
    MouseLook, TrackedSpace,
};
use crate::config::ExplorerSettings;
use crate::data::Catalogue;
use crate::navigation::ExitRequested;
use crate::render::{render_plugin, BodyRenderer, RendererResource, SpheresRenderer};
use crate::scene::{orbit_path_plugin, setup_star_system, star_system_plugin, ExplorerSet};
use crate::ui::{hud_plugin, keys_plugin, labels_plugin, picking_plugin, selector_plugin};

const VIEW_DISTANCE: f32 = 10_000.0;

/// Builder for constructing an Orrery app with customizable plugins.
pub struct SystemExplorerBuilder {
    catalogue: Catalogue,
    settings: ExplorerSettings,
    immersive: bool,
    renderer: Option<RendererResource>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_mouse_look: bool,
    enable_hud: bool,
    enable_selector: bool,
    enable_keys: bool,
    enable_picking: bool,
    enable_labels: bool,
    enable_orbit_paths: bool,
}

impl Default for SystemExplorerBuilder {
    fn default() -> Self {
        Self {
            catalogue: Catalogue::default(),
            settings: ExplorerSettings::default(),
            immersive: false,
            renderer: None,
            window_title: "Orrery".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.0, 0.0, 0.02),
            enable_mouse_look: true,
            enable_hud: true,
            enable_selector: true,
            enable_keys: true,
            enable_picking: true,
            enable_labels: true,
            enable_orbit_paths: true,
        }
    }
}

impl SystemExplorerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bodies to explore, home body first.
    pub fn catalogue(mut self, catalogue: Catalogue) -> Self {
        self.catalogue = catalogue;
        self
    }

    pub fn settings(mut self, settings: ExplorerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Put the viewer camera inside a tracked space driven by the viewer offset.
    pub fn immersive(mut self, immersive: bool) -> Self {
        self.immersive = immersive;
        self
    }

    /// Provide a custom body renderer implementation.
    pub fn renderer(mut self, renderer: impl BodyRenderer) -> Self {
        self.renderer = Some(RendererResource::new(renderer));
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_mouse_look(mut self) -> Self {
        self.enable_mouse_look = false;
        self
    }

    pub fn disable_hud(mut self) -> Self {
        self.enable_hud = false;
        self
    }

    pub fn disable_selector(mut self) -> Self {
        self.enable_selector = false;
        self
    }

    pub fn disable_keys(mut self) -> Self {
        self.enable_keys = false;
        self
    }

    pub fn disable_picking(mut self) -> Self {
        self.enable_picking = false;
        self
    }

    pub fn disable_labels(mut self) -> Self {
        self.enable_labels = false;
        self
    }

    pub fn disable_orbit_paths(mut self) -> Self {
        self.enable_orbit_paths = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let renderer = self
            .renderer
            .unwrap_or_else(|| RendererResource::new(SpheresRenderer::default()));

        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 80.0,
        })
        .insert_resource(self.catalogue)
        .insert_resource(self.settings)
        .insert_resource(ImmersiveMode(self.immersive))
        .add_plugins(star_system_plugin)
        .add_systems(Startup, spawn_viewer.after(setup_star_system))
        .add_systems(
            Update,
            (
                apply_viewer_offset
                    .run_if(immersive_enabled)
                    .after(ExplorerSet::Sync),
                exit_on_request.after(ExplorerSet::Commands),
            ),
        );

        renderer.0.setup(&mut app);
        app.insert_resource(renderer).add_plugins(render_plugin);

        if self.enable_mouse_look {
            app.add_plugins(mouse_look_plugin);
        }
        if self.enable_hud {
            app.add_plugins(hud_plugin);
        }
        if self.enable_selector {
            app.add_plugins(selector_plugin);
        }
        if self.enable_keys {
            app.add_plugins(keys_plugin);
        }
        if self.enable_picking {
            app.add_plugins(picking_plugin);
        }
        if self.enable_labels {
            app.add_plugins(labels_plugin);
        }
        if self.enable_orbit_paths {
            app.add_plugins(orbit_path_plugin);
        }

        app
    }
}

/// Spawns the viewer camera: on the rig, or at the root of a tracked space when immersive.
fn spawn_viewer(
    mut commands: Commands,
    mode: Res<ImmersiveMode>,
    rigs: Query<Entity, With<CameraRig>>,
) {
    let look = MouseLook::default();
    let camera = commands
        .spawn((
            Name::new("viewer camera"),
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                far: VIEW_DISTANCE,
                ..default()
            }),
            Transform::from_rotation(look.rotation()),
            look,
        ))
        .id();

    let parent = if mode.0 {
        commands
            .spawn((
                Name::new("tracked space"),
                TrackedSpace,
                Transform::default(),
                Visibility::default(),
            ))
            .id()
    } else {
        match rigs.get_single() {
            Ok(rig) => rig,
            Err(err) => {
                warn!("viewer camera left at the origin: {err}");
                return;
            }
        }
    };
    commands.entity(camera).set_parent(parent);
}

fn exit_on_request(mut requests: EventReader<ExitRequested>, mut exit: EventWriter<AppExit>) {
    if let Some(request) = requests.read().last() {
        info!("exit requested at {}", request.from);
        exit.send(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::ControlKind;
    use crate::render::RenderAssets;

    struct Markers;

    impl BodyRenderer for Markers {
        fn spawn_body(
            &self,
            _commands: &mut Commands,
            _assets: &mut RenderAssets,
            _node: Entity,
            _record: &crate::data::BodyRecord,
            _is_home: bool,
        ) {
        }

        fn spawn_control(
            &self,
            _commands: &mut Commands,
            _assets: &mut RenderAssets,
            _widget: Entity,
            _kind: ControlKind,
        ) {
        }
    }

    #[test]
    fn renderer_is_only_set_when_provided() {
        assert!(SystemExplorerBuilder::new().renderer.is_none());
        let builder = SystemExplorerBuilder::new().renderer(Markers);
        assert!(builder.renderer.is_some());
    }

    #[test]
    fn feature_switches_default_on_and_turn_off() {
        let builder = SystemExplorerBuilder::new()
            .immersive(true)
            .disable_hud()
            .disable_picking();
        assert!(builder.immersive);
        assert!(!builder.enable_hud);
        assert!(!builder.enable_picking);
        assert!(builder.enable_selector && builder.enable_keys && builder.enable_labels);
    }
}
