// direction set (cap normals)
//
// Near-uniform unit vectors on S^2 for bounding surface-atom cells with
// spherical caps (component G). Four tiers, exactly as in the original
// prototype's `lebedev_dirs`: octahedron (<=6), + cube corners (<=14), +
// edge midpoints (<=26), else a Fibonacci sphere with that many points.

use crate::vec::Vec3;

/// Direction set for cap planes, keyed by `order` (spec §4.4).
pub fn direction_set(order: i32) -> Vec<Vec3> {
    if order <= 6 {
        return octahedron();
    }
    if order <= 14 {
        let mut dirs = octahedron();
        dirs.extend(cube_corners());
        return dirs;
    }
    if order <= 26 {
        let mut dirs = octahedron();
        dirs.extend(edge_midpoints());
        dirs.extend(cube_corners());
        return dirs;
    }
    fibonacci_sphere(order.max(0) as usize)
}

fn octahedron() -> Vec<Vec3> {
    vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, -1.0),
    ]
}

fn cube_corners() -> Vec<Vec3> {
    let s = 1.0 / 3.0_f64.sqrt();
    let sgn = [-1.0, 1.0];
    let mut dirs = Vec::with_capacity(8);
    for &a in &sgn {
        for &b in &sgn {
            for &c in &sgn {
                dirs.push(Vec3::new(s * a, s * b, s * c));
            }
        }
    }
    dirs
}

fn edge_midpoints() -> Vec<Vec3> {
    let s2 = 1.0 / 2.0_f64.sqrt();
    let sgn = [-1.0, 1.0];
    let mut dirs = Vec::with_capacity(12);
    for &a in &sgn {
        for &b in &sgn {
            dirs.push(Vec3::new(s2 * a, s2 * b, 0.0));
            dirs.push(Vec3::new(s2 * a, 0.0, s2 * b));
            dirs.push(Vec3::new(0.0, s2 * a, s2 * b));
        }
    }
    dirs
}

/// Golden-angle Fibonacci sphere with `n` points.
fn fibonacci_sphere(n: usize) -> Vec<Vec3> {
    let mut dirs = Vec::with_capacity(n);
    if n == 0 {
        return dirs;
    }
    let phi = (1.0 + 5.0_f64.sqrt()) * 0.5;
    let golden_angle = 2.0 * std::f64::consts::PI * (1.0 - 1.0 / phi);
    for k in 0..n {
        let z = 1.0 - 2.0 * ((k as f64 + 0.5) / n as f64);
        let r = (1.0 - z * z).max(0.0).sqrt();
        let theta = golden_angle * k as f64;
        dirs.push(Vec3::new(r * theta.cos(), r * theta.sin(), z));
    }
    dirs
}
