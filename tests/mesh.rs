use approx::assert_relative_eq;

use voroplex::config::Config;
use voroplex::container::BoxContainer;
use voroplex::mesh::stitch_global;
use voroplex::neighbor::plan_neighbors_box;
use voroplex::tessellate::tessellate_pairs_box;
use voroplex::vec::Vec3;

#[test]
fn single_cell_mesh_has_six_wall_faces_and_eight_vertices() {
    let cfg = Config::default();
    let mut box_ = BoxContainer::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)).unwrap();
    box_.add_atoms([Vec3::new(0.5, 0.5, 0.5)]);
    let table = plan_neighbors_box(&box_, &cfg);
    let cells = tessellate_pairs_box(&box_, &table, &[], &cfg).unwrap();

    let mesh = stitch_global(&table, &cells, &cfg);
    assert_eq!(mesh.vertices.len(), 8);
    assert_eq!(mesh.faces.len(), 6);
    assert_eq!(mesh.edges.len(), 12);
    assert_eq!(mesh.cells.len(), 1);
    assert_relative_eq!(mesh.cells[0].volume, 1.0, epsilon = 1e-8);
    for face in &mesh.faces {
        assert_eq!(face.j, -1);
        assert_eq!(face.img, [0, 0, 0]);
    }
}

#[test]
fn shared_face_between_two_cells_is_stored_once_and_oriented() {
    let cfg = Config::default();
    let mut box_ = BoxContainer::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)).unwrap();
    box_.add_atoms([Vec3::new(0.25, 0.5, 0.5), Vec3::new(0.75, 0.5, 0.5)]);
    let table = plan_neighbors_box(&box_, &cfg);
    let m = vec![0.5; table.len()];
    let cells = tessellate_pairs_box(&box_, &table, &m, &cfg).unwrap();
    let mesh = stitch_global(&table, &cells, &cfg);

    let internal: Vec<_> = mesh.faces.iter().filter(|f| f.j >= 0).collect();
    assert_eq!(internal.len(), 1, "exactly one separating face between the two cells");
    let face = internal[0];
    assert_eq!(face.i, 0);
    assert_eq!(face.j, 1);

    // Both cells reference the same face id.
    let face_id = mesh
        .faces
        .iter()
        .position(|f| f.j >= 0)
        .unwrap();
    assert!(mesh.cells[0].face_ids.contains(&face_id));
    assert!(mesh.cells[1].face_ids.contains(&face_id));

    // normal_ij points from i toward j: atom 0 is at x=0.25, atom 1 at
    // x=0.75, so the stored normal should have a positive x component.
    assert!(face.normal.x > 0.0);
}

#[test]
fn canonical_cycle_is_rotation_and_reflection_invariant() {
    // Indirectly exercised via stitching: build two cells whose adjoining
    // face loops are discovered in opposite traversal order and check that
    // only one face id results (dedup relies on the same canonical key).
    let cfg = Config::default();
    let mut box_ = BoxContainer::new(Vec3::zeros(), Vec3::new(2.0, 2.0, 2.0)).unwrap();
    box_.add_atoms([Vec3::new(0.5, 1.0, 1.0), Vec3::new(1.5, 1.0, 1.0)]);
    let table = plan_neighbors_box(&box_, &cfg);
    let m = vec![0.5; table.len()];
    let cells = tessellate_pairs_box(&box_, &table, &m, &cfg).unwrap();
    let mesh = stitch_global(&table, &cells, &cfg);

    let internal_count = mesh.faces.iter().filter(|f| f.j >= 0).count();
    assert_eq!(internal_count, 1);
}

#[test]
fn edges_are_deduplicated() {
    let cfg = Config::default();
    let mut box_ = BoxContainer::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)).unwrap();
    box_.add_atoms([Vec3::new(0.5, 0.5, 0.5)]);
    let table = plan_neighbors_box(&box_, &cfg);
    let cells = tessellate_pairs_box(&box_, &table, &[], &cfg).unwrap();
    let mesh = stitch_global(&table, &cells, &cfg);

    let mut seen = std::collections::HashSet::new();
    for &(a, b) in &mesh.edges {
        let key = if a < b { (a, b) } else { (b, a) };
        assert!(seen.insert(key), "duplicate edge {:?}", key);
    }
}
