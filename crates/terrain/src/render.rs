use bevy::asset::RenderAssetUsages;
use bevy::color::ColorToComponents;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::assets::LandscapeConfigAsset;
use crate::landscape::build_landscape;
use crate::mesh::LandscapeMesh;
use crate::types::GeneratedLandscape;

#[derive(Component)]
pub struct LandscapeSurface;

#[derive(Resource, Clone, Debug)]
pub struct LandscapeConfigPath(pub String);

#[derive(Resource, Clone)]
pub struct LandscapeConfigHandle(pub Handle<LandscapeConfigAsset>);

pub fn request_landscape_config(
    mut commands: Commands,
    path: Res<LandscapeConfigPath>,
    asset_server: Res<AssetServer>,
) {
    let handle: Handle<LandscapeConfigAsset> = asset_server.load(path.0.clone());
    commands.insert_resource(LandscapeConfigHandle(handle));
}

/// Builds the landscape once its config has loaded, then stops watching the handle.
pub fn spawn_landscape_when_loaded(
    mut commands: Commands,
    handle: Option<Res<LandscapeConfigHandle>>,
    assets: Res<Assets<LandscapeConfigAsset>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(handle) = handle else {
        return;
    };

    let Some(asset) = assets.get(&handle.0) else {
        return;
    };
    let config = asset.0.clone();

    commands.remove_resource::<LandscapeConfigHandle>();

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let landscape = match build_landscape(&config.params, &config.colors, &mut rng) {
        Ok(landscape) => landscape,
        Err(e) => {
            error!("failed to build landscape: {e}");
            return;
        }
    };

    let (lo, hi) = landscape.heightmap.min_max();
    info!(
        "landscape seed {seed}: {0}x{0} heightmap, {1} triangles, heights {lo:.1}..{hi:.1}",
        landscape.heightmap.side(),
        landscape.mesh.triangle_count(),
    );

    let mesh_handle = meshes.add(mesh_from_landscape_mesh(&landscape.mesh));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 1.0,
        ..default()
    });

    commands.spawn((
        LandscapeSurface,
        Mesh3d(mesh_handle),
        MeshMaterial3d(material),
        Transform::default(),
    ));

    commands.insert_resource(GeneratedLandscape {
        seed,
        params: landscape.params,
        heightmap: landscape.heightmap,
    });
}

/// Converts to a Bevy triangle list; vertex colours go to `ATTRIBUTE_COLOR` as linear RGBA.
pub fn mesh_from_landscape_mesh(data: &LandscapeMesh) -> Mesh {
    let positions: Vec<[f32; 3]> = data.positions.iter().map(|p| to_f32(*p)).collect();
    let normals: Vec<[f32; 3]> = data.normals.iter().map(|n| to_f32(*n)).collect();
    let colors: Vec<[f32; 4]> = data
        .colors
        .iter()
        .map(|&[r, g, b]| Color::srgb_u8(r, g, b).to_linear().to_f32_array())
        .collect();

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh.insert_indices(Indices::U32(data.indices.clone()));
    mesh
}

fn to_f32([x, y, z]: [f64; 3]) -> [f32; 3] {
    [x as f32, y as f32, z as f32]
}
