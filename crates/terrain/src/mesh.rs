use glam::DVec3;

use crate::color::ColorBands;
use crate::heightmap::Heightmap;

/// Flat-shaded triangle list. Vertices are never shared, so `indices` is `0..len`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandscapeMesh {
    pub positions: Vec<[f64; 3]>,
    pub colors: Vec<[u8; 3]>,
    pub normals: Vec<[f64; 3]>,
    pub indices: Vec<u32>,
}

impl LandscapeMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Position and index buffers for a trimesh collider.
    pub fn collision_buffers(&self) -> (&[[f64; 3]], &[u32]) {
        (&self.positions, &self.indices)
    }
}

/// Two triangles per heightmap cell, six vertices each, centred on the origin.
pub fn build_mesh(
    heightmap: &Heightmap,
    size: f64,
    height_limit: f64,
    colors: &ColorBands,
) -> LandscapeMesh {
    let n = heightmap.side();
    let cells = n.saturating_sub(1);
    if cells == 0 {
        return LandscapeMesh::default();
    }

    let spacing = size / cells as f64;
    let half = size * 0.5;
    let vertex_count = cells * cells * 6;

    let mut positions: Vec<[f64; 3]> = Vec::with_capacity(vertex_count);
    let mut vertex_colors: Vec<[u8; 3]> = Vec::with_capacity(vertex_count);

    let mut push_vertex = |i: usize, j: usize| {
        let y = heightmap.get(i, j);
        positions.push([-half + i as f64 * spacing, y, -half + j as f64 * spacing]);
        vertex_colors.push(colors.color_for(y, height_limit));
    };

    for i in 0..cells {
        for j in 0..cells {
            // Winding keeps faces pointing up (+Y).
            for (vi, vj) in [
                (i + 1, j),
                (i, j),
                (i, j + 1),
                (i, j + 1),
                (i + 1, j + 1),
                (i + 1, j),
            ] {
                push_vertex(vi, vj);
            }
        }
    }

    let mut normals: Vec<[f64; 3]> = Vec::with_capacity(vertex_count);
    for tri in positions.chunks_exact(3) {
        let normal = face_normal(
            DVec3::from(tri[0]),
            DVec3::from(tri[1]),
            DVec3::from(tri[2]),
        )
        .to_array();
        normals.extend_from_slice(&[normal, normal, normal]);
    }

    let indices = (0..positions.len() as u32).collect();

    LandscapeMesh {
        positions,
        colors: vertex_colors,
        normals,
        indices,
    }
}

/// Unit normal of `v0 -> v1 -> v2`, or +Y for zero-area triangles.
pub fn face_normal(v0: DVec3, v1: DVec3, v2: DVec3) -> DVec3 {
    (v1 - v0).cross(v2 - v0).normalize_or(DVec3::Y)
}
