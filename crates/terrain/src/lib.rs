pub mod assets;
pub mod color;
pub mod diamond_square;
pub mod error;
pub mod heightmap;
pub mod landscape;
pub mod mesh;
pub mod random;
pub mod render;
pub mod types;

pub use color::ColorBands;
pub use diamond_square::generate;
pub use error::LandscapeError;
pub use heightmap::Heightmap;
pub use landscape::{Landscape, build_landscape};
pub use mesh::{LandscapeMesh, build_mesh};
pub use random::RandomSource;
pub use types::*;

use bevy::prelude::*;

pub struct LandscapePlugin {
    /// Path of the RON config relative to the asset root.
    pub config_path: String,
}

impl Default for LandscapePlugin {
    fn default() -> Self {
        Self {
            config_path: "landscape.ron".to_string(),
        }
    }
}

impl Plugin for LandscapePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(render::LandscapeConfigPath(self.config_path.clone()))
            .init_asset::<assets::LandscapeConfigAsset>()
            .init_asset_loader::<assets::LandscapeConfigAssetLoader>()
            .add_systems(Startup, render::request_landscape_config)
            .add_systems(Update, render::spawn_landscape_when_loaded);
    }
}
