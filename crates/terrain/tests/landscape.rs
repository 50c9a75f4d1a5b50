use glam::DVec3;
use rand::SeedableRng;
use rand::rngs::StdRng;
use terrain::{
    ColorBands, GenerationParams, Heightmap, LandscapeConfig, LandscapeError, build_landscape,
    build_mesh, generate,
};

fn reference_params() -> GenerationParams {
    GenerationParams {
        size: 100.0,
        iterations: 2,
        height_limit: 80.0,
        smoothness: 0.6,
    }
}

#[test]
fn reference_landscape_has_expected_buffers() {
    let landscape = build_landscape(
        &reference_params(),
        &ColorBands::default(),
        &mut StdRng::seed_from_u64(12345),
    )
    .unwrap();

    assert_eq!(landscape.heightmap.side(), 5);
    assert_eq!(landscape.heightmap.heights().len(), 25);

    let mesh = &landscape.mesh;
    assert_eq!(mesh.positions.len(), 96);
    assert_eq!(mesh.colors.len(), 96);
    assert_eq!(mesh.normals.len(), 96);
    assert_eq!(mesh.indices, (0..96).collect::<Vec<u32>>());
}

#[test]
fn landscape_heights_are_centred() {
    for seed in [1, 2, 3, 99] {
        let landscape = build_landscape(
            &GenerationParams::default(),
            &ColorBands::default(),
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap();
        assert!(landscape.heightmap.mean().abs() < 1e-9);
    }
}

#[test]
fn landscape_mesh_matches_its_heightmap() {
    let landscape = build_landscape(
        &reference_params(),
        &ColorBands::default(),
        &mut StdRng::seed_from_u64(7),
    )
    .unwrap();

    let map = &landscape.heightmap;
    let mesh = &landscape.mesh;
    // First vertex is cell (1, 0) of the first quad.
    assert_eq!(mesh.positions[0], [-25.0, map.get(1, 0), -50.0]);
    // Last vertex is cell (4, 3) closing the last quad.
    assert_eq!(mesh.positions[95], [50.0, map.get(4, 3), 25.0]);
}

#[test]
fn every_normal_is_unit_length() {
    let landscape = build_landscape(
        &GenerationParams::default(),
        &ColorBands::default(),
        &mut StdRng::seed_from_u64(31),
    )
    .unwrap();
    for n in &landscape.mesh.normals {
        assert!((DVec3::from(*n).length() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn seeded_landscapes_are_reproducible() {
    let a = build_landscape(
        &GenerationParams::default(),
        &ColorBands::default(),
        &mut StdRng::seed_from_u64(404),
    )
    .unwrap();
    let b = build_landscape(
        &GenerationParams::default(),
        &ColorBands::default(),
        &mut StdRng::seed_from_u64(404),
    )
    .unwrap();
    assert_eq!(a.heightmap, b.heightmap);
    assert_eq!(a.mesh, b.mesh);
}

#[test]
fn invalid_smoothness_builds_with_default() {
    let params = GenerationParams {
        smoothness: 1.5,
        ..reference_params()
    };
    let landscape =
        build_landscape(&params, &ColorBands::default(), &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(landscape.params.smoothness, 0.6);

    let reference = build_landscape(
        &reference_params(),
        &ColorBands::default(),
        &mut StdRng::seed_from_u64(5),
    )
    .unwrap();
    assert_eq!(landscape.heightmap, reference.heightmap);
}

#[test]
fn zero_iterations_builds_single_quad() {
    let params = GenerationParams {
        iterations: 0,
        ..reference_params()
    };
    let landscape =
        build_landscape(&params, &ColorBands::default(), &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(landscape.heightmap.side(), 2);
    assert_eq!(landscape.mesh.triangle_count(), 2);
}

#[test]
fn single_sample_heightmap_meshes_to_nothing() {
    let map = Heightmap::flat(1).unwrap().normalized();
    let mesh = build_mesh(&map, 100.0, 80.0, &ColorBands::default());
    assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn zero_size_fails_fast() {
    let params = GenerationParams {
        size: 0.0,
        ..reference_params()
    };
    let result = build_landscape(&params, &ColorBands::default(), &mut StdRng::seed_from_u64(1));
    assert!(matches!(
        result,
        Err(LandscapeError::InvalidParameter { name: "size", .. })
    ));
}

#[test]
fn centring_is_a_separate_step() {
    let map = generate(&reference_params(), &mut StdRng::seed_from_u64(12345)).unwrap();
    let centred = map.clone().normalized();
    assert!(centred.mean().abs() < 1e-9);
    assert_eq!(map.side(), centred.side());
}

#[test]
fn bundled_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/landscape.ron");
    let config = LandscapeConfig::load_from_ron_file(path).unwrap();
    assert_eq!(config.params, GenerationParams::default());
    assert!(config.colors.validate().is_ok());
}

#[test]
fn missing_config_file_is_an_io_error() {
    assert!(matches!(
        LandscapeConfig::load_from_ron_file("/definitely/not/here/landscape.ron"),
        Err(LandscapeError::Io(_))
    ));
}
