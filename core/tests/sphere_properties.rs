//! Property tests for the UV-sphere generators.
//!
//! Every test runs over a spread of grids, from the smallest closed sphere
//! to the 36x18 grid the textured demo uses.

use rstest::rstest;

use orbmesh_core::math::Vec3;
use orbmesh_core::mesh::sphere::{
    LINE_STRIDE, TRIANGLE_STRIDE, sphere_edge_indices, sphere_positions, sphere_tex_coords,
    sphere_triangle_indices,
};
use orbmesh_core::mesh::{EdgeRings, SphereGeometry, SphereGrid, SphereParams};

const EPS: f32 = 1e-5;

fn params(radius: f32, sectors: u32, stacks: u32) -> SphereParams {
    SphereParams::new(radius, sectors, stacks).expect("valid sphere parameters")
}

fn vec3(p: [f32; 3]) -> Vec3 {
    Vec3::new(p[0], p[1], p[2])
}

#[rstest]
#[case::minimal(3, 1)]
#[case::small(4, 2)]
#[case::odd(7, 5)]
#[case::demo(36, 18)]
#[case::tall(5, 40)]
fn test_array_lengths_agree(#[case] sectors: u32, #[case] stacks: u32) {
    let p = params(1.0, sectors, stacks);
    let grid = p.grid();
    let expected = ((stacks + 1) * (sectors + 1)) as usize;

    assert_eq!(sphere_positions(&p).len(), expected);
    assert_eq!(sphere_tex_coords(&grid).len(), expected);
    assert_eq!(grid.vertex_count() as usize, expected);
}

#[rstest]
#[case(3, 1)]
#[case(4, 2)]
#[case(7, 5)]
#[case(36, 18)]
fn test_triangle_indices_in_bounds(#[case] sectors: u32, #[case] stacks: u32) {
    let grid = SphereGrid::new(sectors, stacks).unwrap();
    let indices = sphere_triangle_indices(&grid);

    assert_eq!(indices.len(), (6 * stacks * sectors) as usize);
    assert_eq!(indices.len() % TRIANGLE_STRIDE, 0);
    assert!(indices.iter().all(|&i| i < grid.vertex_count()));
}

#[rstest]
#[case(3, 1)]
#[case(4, 2)]
#[case(7, 5)]
#[case(36, 18)]
fn test_edge_indices_in_bounds(#[case] sectors: u32, #[case] stacks: u32) {
    let grid = SphereGrid::new(sectors, stacks).unwrap();

    for rings in [EdgeRings::OmitLastRing, EdgeRings::Closed] {
        let edges = sphere_edge_indices(&grid, rings);
        assert_eq!(edges.len() % LINE_STRIDE, 0);
        assert_eq!(edges.len(), grid.edge_index_count(rings));
        assert!(edges.iter().all(|&i| i < grid.vertex_count()));
    }

    assert_eq!(
        grid.horizontal_edge_count(EdgeRings::OmitLastRing),
        (stacks * sectors) as usize
    );
    assert_eq!(grid.vertical_edge_count(), ((sectors + 1) * stacks) as usize);
}

#[rstest]
#[case(4, 2)]
#[case(36, 18)]
fn test_horizontal_edges_stay_in_row(#[case] sectors: u32, #[case] stacks: u32) {
    let grid = SphereGrid::new(sectors, stacks).unwrap();
    let edges = sphere_edge_indices(&grid, EdgeRings::OmitLastRing);
    let horizontal = grid.horizontal_edge_count(EdgeRings::OmitLastRing);

    for segment in edges.chunks_exact(2).take(horizontal) {
        assert_eq!(segment[1], segment[0] + 1);
        assert_eq!(segment[0] / grid.columns(), segment[1] / grid.columns());
    }
    for segment in edges.chunks_exact(2).skip(horizontal) {
        assert_eq!(segment[1], segment[0] + grid.columns());
    }
}

#[rstest]
#[case(1.0, 4, 2)]
#[case(2.5, 36, 18)]
#[case(0.1, 9, 7)]
fn test_seam_positions_match_and_texcoords_differ(
    #[case] radius: f32,
    #[case] sectors: u32,
    #[case] stacks: u32,
) {
    let p = params(radius, sectors, stacks);
    let grid = p.grid();
    let positions = sphere_positions(&p);
    let tex_coords = sphere_tex_coords(&grid);

    for row in 0..grid.rows() {
        let first = grid.vertex_index(row, 0) as usize;
        let last = grid.vertex_index(row, sectors) as usize;
        assert!((vec3(positions[first]) - vec3(positions[last])).norm() <= EPS * radius);
        assert_eq!(tex_coords[first][0], 0.0);
        assert_eq!(tex_coords[last][0], 1.0);
        assert_eq!(tex_coords[first][1], tex_coords[last][1]);
    }
}

#[rstest]
#[case(3, 1)]
#[case(4, 2)]
#[case(7, 5)]
#[case(36, 18)]
#[case(5, 40)]
fn test_tex_coords_follow_grid(#[case] sectors: u32, #[case] stacks: u32) {
    let grid = SphereGrid::new(sectors, stacks).unwrap();
    let tex_coords = sphere_tex_coords(&grid);

    for i in 0..grid.rows() {
        for j in 0..grid.columns() {
            assert_eq!(
                tex_coords[grid.vertex_index(i, j) as usize],
                [j as f32 / sectors as f32, i as f32 / stacks as f32],
                "row {i}, column {j}"
            );
        }
    }
}

#[rstest]
#[case(1.0, 4, 2)]
#[case(3.0, 36, 18)]
#[case(0.5, 5, 3)]
fn test_poles(#[case] radius: f32, #[case] sectors: u32, #[case] stacks: u32) {
    let p = params(radius, sectors, stacks);
    let grid = p.grid();
    let positions = sphere_positions(&p);

    for col in 0..grid.columns() {
        let north = positions[grid.vertex_index(0, col) as usize];
        let south = positions[grid.vertex_index(stacks, col) as usize];

        assert!(north[0].abs() <= EPS * radius && north[1].abs() <= EPS * radius);
        assert!(south[0].abs() <= EPS * radius && south[1].abs() <= EPS * radius);
        assert!((north[2] - radius).abs() <= EPS * radius);
        assert!((south[2] + radius).abs() <= EPS * radius);
    }
}

#[rstest]
#[case(1.0, 4, 2)]
#[case(2.0, 36, 18)]
fn test_every_vertex_lies_on_sphere(#[case] radius: f32, #[case] sectors: u32, #[case] stacks: u32) {
    let positions = sphere_positions(&params(radius, sectors, stacks));
    for p in positions {
        assert!((vec3(p).norm() - radius).abs() <= EPS * radius);
    }
}

#[rstest]
#[case(3, 2)]
#[case(4, 2)]
#[case(8, 4)]
#[case(36, 18)]
fn test_winding_is_outward(#[case] sectors: u32, #[case] stacks: u32) {
    let p = params(1.0, sectors, stacks);
    let positions = sphere_positions(&p);
    let indices = sphere_triangle_indices(&p.grid());
    let mut checked = 0;

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| vec3(positions[i as usize]));
        let normal = (b - a).cross(&(c - a));
        // Pole quads carry one zero-area triangle
        if normal.norm() < 1e-6 {
            continue;
        }
        let centroid = (a + b + c) / 3.0;
        assert!(
            normal.dot(&centroid) > 0.0,
            "triangle {tri:?} faces inward"
        );
        checked += 1;
    }

    // One degenerate triangle per quad in the first and last rows
    assert_eq!(checked, (2 * stacks * sectors - 2 * sectors) as usize);
}

#[test]
fn test_concrete_four_by_two_grid() {
    let geometry = SphereGeometry::from_raw(1.0, 4, 2).unwrap();
    let grid = geometry.grid();

    assert_eq!(geometry.vertex_count(), 15);
    assert_eq!(geometry.indices.len(), 48);
    assert_eq!(grid.horizontal_edge_count(EdgeRings::OmitLastRing), 8);
    assert_eq!(grid.vertical_edge_count(), 10);
    assert_eq!(geometry.edge_indices.len(), 36);
}

#[test]
fn test_generation_is_bit_identical() {
    let p = params(1.25, 36, 18);
    let first = SphereGeometry::generate(&p, EdgeRings::Closed);
    let second = SphereGeometry::generate(&p, EdgeRings::Closed);

    let bits = |g: &SphereGeometry| -> Vec<u32> {
        g.position_floats()
            .iter()
            .chain(g.tex_coord_floats())
            .map(|f| f.to_bits())
            .collect()
    };
    assert_eq!(bits(&first), bits(&second));
    assert_eq!(first.indices, second.indices);
    assert_eq!(first.edge_indices, second.edge_indices);
}

#[rstest]
#[case::too_few_sectors(1.0, 2, 4)]
#[case::no_stacks(1.0, 8, 0)]
#[case::zero_radius(0.0, 8, 4)]
#[case::negative_radius(-2.0, 8, 4)]
#[case::nan_radius(f32::NAN, 8, 4)]
fn test_invalid_parameters_are_rejected(
    #[case] radius: f32,
    #[case] sectors: u32,
    #[case] stacks: u32,
) {
    let err = SphereGeometry::from_raw(radius, sectors, stacks).unwrap_err();
    assert!(err.to_string().starts_with("invalid parameter"), "{err}");
}
