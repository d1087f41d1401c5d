use approx::assert_relative_eq;

use voroplex::config::{CapOptions, Config};
use voroplex::container::{BoxContainer, TriclinicPBC};
use voroplex::lattice::Lattice;
use voroplex::mesh::stitch_global;
use voroplex::neighbor::{plan_neighbors_box, plan_neighbors_pbc};
use voroplex::tessellate::{tessellate_pairs_box, tessellate_pairs_pbc, tessellate_pairs_with_caps};
use voroplex::vec::Vec3;

/// Scenario 1: unit cube, single atom at the center, no neighbors.
#[test]
fn scenario_1_single_atom_unit_cube() {
    let cfg = Config::default();
    let mut box_ = BoxContainer::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)).unwrap();
    box_.add_atoms([Vec3::new(0.5, 0.5, 0.5)]);
    let table = plan_neighbors_box(&box_, &cfg);
    assert!(table.is_empty());

    let cells = tessellate_pairs_box(&box_, &table, &[], &cfg).unwrap();
    assert_eq!(cells.len(), 1);
    let cell = &cells[0];
    assert_relative_eq!(cell.volume, 1.0, epsilon = 1e-8);
    assert_eq!(cell.poly.faces.len(), 6);
    for &area in &cell.poly.face_area {
        assert_relative_eq!(area, 1.0, epsilon = 1e-8);
    }
    assert_relative_eq!(cell.centroid, Vec3::new(0.5, 0.5, 0.5), epsilon = 1e-8);
}

/// Scenario 2: two atoms on the x-axis, M=0.5 splits the box evenly.
#[test]
fn scenario_2_two_atoms_m_half() {
    let cfg = Config::default();
    let mut box_ = BoxContainer::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)).unwrap();
    box_.add_atoms([Vec3::new(0.25, 0.5, 0.5), Vec3::new(0.75, 0.5, 0.5)]);
    let table = plan_neighbors_box(&box_, &cfg);
    let m = vec![0.5; table.len()];
    let cells = tessellate_pairs_box(&box_, &table, &m, &cfg).unwrap();
    assert_eq!(cells.len(), 2);
    for cell in &cells {
        assert_relative_eq!(cell.volume, 0.5, epsilon = 1e-6);
    }
}

/// Scenario 3: same positions, asymmetric M (0.25 / 0.75).
#[test]
fn scenario_3_two_atoms_m_quarter() {
    let cfg = Config::default();
    let mut box_ = BoxContainer::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)).unwrap();
    box_.add_atoms([Vec3::new(0.25, 0.5, 0.5), Vec3::new(0.75, 0.5, 0.5)]);
    let table = plan_neighbors_box(&box_, &cfg);

    let m: Vec<f64> = (0..table.len())
        .map(|row| if table.i[row] == 0 { 0.25 } else { 0.75 })
        .collect();
    let cells = tessellate_pairs_box(&box_, &table, &m, &cfg).unwrap();
    assert_eq!(cells.len(), 2);
    assert_relative_eq!(cells[0].volume, 0.125, epsilon = 1e-6);
    assert_relative_eq!(cells[1].volume, 0.875, epsilon = 1e-6);
    assert_relative_eq!(cells[0].volume + cells[1].volume, 1.0, epsilon = 1e-6);
}

/// Scenario 4: triclinic PBC, single atom, orthorhombic 2x3x4 cell.
#[test]
fn scenario_4_pbc_single_atom_orthorhombic() {
    let cfg = Config::default();
    let lat = Lattice::from_params(2.0, 3.0, 4.0, 90.0, 90.0, 90.0);
    let mut pbc = TriclinicPBC::new(lat, [true, true, true]);
    pbc.add_atoms([Vec3::zeros()]);
    let table = plan_neighbors_pbc(&pbc, &cfg);
    let m = vec![0.5; table.len()];
    let cells = tessellate_pairs_pbc(&pbc, &table, &m, &cfg).unwrap();
    assert_eq!(cells.len(), 1);
    assert_relative_eq!(cells[0].volume, 24.0, epsilon = 1e-6);
    assert_eq!(cells[0].poly.faces.len(), 6);
}

/// Scenario 5: BCC-style pair, M=0.5 everywhere, congruent cells of volume
/// 0.5 each, sharing faces through all eight corner-image directions once
/// stitched into a global mesh.
#[test]
fn scenario_5_bcc_pair_m_half() {
    let cfg = Config::default();
    let lat = Lattice::from_params(1.0, 1.0, 1.0, 90.0, 90.0, 90.0);
    let mut pbc = TriclinicPBC::new(lat, [true, true, true]);
    pbc.add_atoms([Vec3::zeros(), Vec3::new(0.5, 0.5, 0.5)]);
    let table = plan_neighbors_pbc(&pbc, &cfg);
    let m = vec![0.5; table.len()];
    let cells = tessellate_pairs_pbc(&pbc, &table, &m, &cfg).unwrap();
    assert_eq!(cells.len(), 2);
    for cell in &cells {
        assert_relative_eq!(cell.volume, 0.5, epsilon = 1e-6);
    }

    let mesh = stitch_global(&table, &cells, &cfg);
    let shared_faces = mesh
        .faces
        .iter()
        .filter(|f| f.j >= 0)
        .count();
    assert!(shared_faces >= 8, "expected >=8 shared faces, got {}", shared_faces);
    for cell in &mesh.cells {
        assert_relative_eq!(cell.volume, 0.5, epsilon = 1e-6);
    }
}

/// Scenario 6: single surface atom bounded by a 26-direction spherical cap.
#[test]
fn scenario_6_cap_surface_atom() {
    let cfg = Config::default();
    let mut box_ = BoxContainer::new(Vec3::zeros(), Vec3::new(10.0, 10.0, 10.0)).unwrap();
    box_.add_atoms([Vec3::new(0.1, 5.0, 5.0)]);
    let table = plan_neighbors_box(&box_, &cfg);
    let opt = CapOptions {
        enabled: true,
        radius: 0.8,
        lebedev_order: 26,
        surface_atom_ids: Vec::new(),
        auto_surface_margin: 0.2,
    };
    let cells = tessellate_pairs_with_caps(&box_, &table, &[], &opt, &cfg).unwrap();
    assert_eq!(cells.len(), 1);
    let cell = &cells[0];
    assert!(cell.volume > 1.8 && cell.volume < 4.0 * std::f64::consts::PI * 0.8_f64.powi(3) / 3.0);
    assert!(cell.centroid.x > 0.1 - 0.8 && cell.centroid.x < 0.1 + 0.8);
}

#[test]
fn m_length_mismatch_is_rejected() {
    let cfg = Config::default();
    let mut box_ = BoxContainer::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)).unwrap();
    box_.add_atoms([Vec3::new(0.25, 0.5, 0.5), Vec3::new(0.75, 0.5, 0.5)]);
    let table = plan_neighbors_box(&box_, &cfg);
    let err = tessellate_pairs_box(&box_, &table, &[0.5], &cfg).unwrap_err();
    assert!(matches!(err, voroplex::error::Error::MLengthMismatch { .. }));
}
