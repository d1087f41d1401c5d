use voroplex::config::Config;
use voroplex::container::{BoxContainer, TriclinicPBC};
use voroplex::lattice::Lattice;
use voroplex::neighbor::{plan_neighbors_box, plan_neighbors_pbc};
use voroplex::vec::Vec3;

#[test]
fn box_two_atoms_see_each_other() {
    let mut box_ = BoxContainer::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)).unwrap();
    box_.add_atoms([Vec3::new(0.25, 0.5, 0.5), Vec3::new(0.75, 0.5, 0.5)]);
    let cfg = Config::default();
    let table = plan_neighbors_box(&box_, &cfg);
    assert!(table.len() >= 2);
    assert!(table.i.iter().zip(&table.j).all(|(&i, &j)| i != j));
    for &r2 in &table.r2 {
        assert!(r2 > 0.0);
    }
}

#[test]
fn box_empty_container_yields_empty_table() {
    let box_ = BoxContainer::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)).unwrap();
    let cfg = Config::default();
    let table = plan_neighbors_box(&box_, &cfg);
    assert!(table.is_empty());
}

#[test]
fn box_invalid_bounds_rejected() {
    let err = BoxContainer::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0)).unwrap_err();
    assert!(matches!(err, voroplex::error::Error::InvalidBounds { .. }));
}

#[test]
fn pbc_single_atom_self_images() {
    let lat = Lattice::from_params(2.0, 3.0, 4.0, 90.0, 90.0, 90.0);
    let mut pbc = TriclinicPBC::new(lat, [true, true, true]);
    pbc.add_atoms([Vec3::new(0.0, 0.0, 0.0)]);
    let cfg = Config::default();
    let table = plan_neighbors_pbc(&pbc, &cfg);
    // A single atom still sees its own periodic images (i == j, image != 0),
    // but never the zero image of itself.
    assert!(!table.is_empty());
    for row in 0..table.len() {
        assert!(!(table.i[row] == table.j[row] && table.img[row] == [0, 0, 0]));
    }
}

#[test]
fn pbc_rows_distinct_by_i_j_image() {
    let lat = Lattice::from_params(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
    let mut pbc = TriclinicPBC::new(lat, [true, true, true]);
    pbc.add_atoms([Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.5, 2.5, 2.5)]);
    let cfg = Config::default();
    let table = plan_neighbors_pbc(&pbc, &cfg);
    let mut seen = std::collections::HashSet::new();
    for row in 0..table.len() {
        let key = (table.i[row], table.j[row], table.img[row]);
        assert!(seen.insert(key), "duplicate row {:?}", key);
    }
}
