use crate::color::ColorBands;
use crate::diamond_square::generate;
use crate::error::LandscapeError;
use crate::heightmap::Heightmap;
use crate::mesh::{LandscapeMesh, build_mesh};
use crate::random::RandomSource;
use crate::types::GenerationParams;

/// A generated terrain: the params it was built with, its centred heightmap and its mesh.
#[derive(Clone, Debug)]
pub struct Landscape {
    pub params: GenerationParams,
    pub heightmap: Heightmap,
    pub mesh: LandscapeMesh,
}

/// Generates, centres and meshes a landscape in one call.
pub fn build_landscape(
    params: &GenerationParams,
    colors: &ColorBands,
    rng: &mut impl RandomSource,
) -> Result<Landscape, LandscapeError> {
    let params = params.sanitized();
    let heightmap = generate(&params, rng)?.normalized();
    let mesh = build_mesh(&heightmap, params.size, params.height_limit, colors);

    Ok(Landscape {
        params,
        heightmap,
        mesh,
    })
}
