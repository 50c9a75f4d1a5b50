pub mod camera;
pub mod lighting;

use bevy::prelude::*;

use terrain as terrain_crate;

pub struct GamePlugin {
    /// Landscape config path relative to the `assets/` folder.
    pub landscape_config: String,
}

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(camera::OrbitCameraSettings::default())
            .add_plugins(terrain_crate::LandscapePlugin {
                config_path: self.landscape_config.clone(),
            })
            .add_systems(
                Startup,
                (camera::setup_viewer, lighting::setup_sun_light).chain(),
            );
    }
}
