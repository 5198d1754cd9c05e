// Host-side tests for the turntable model and cylinder mesh generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod scene {
    include!("../src/scene.rs");
}

use glam::{Vec3, Vec4Swizzles};
use scene::{turntable_model, unit_cylinder};

#[test]
fn cylinder_vertex_and_index_counts() {
    let segments = 32u32;
    let mesh = unit_cylinder(segments);
    // side wall: two rows of segments+1; caps: center + segments+1 ring each
    let expected_vertices = 2 * (segments + 1) + 2 * (segments + 2);
    assert_eq!(mesh.positions.len(), expected_vertices as usize);
    assert_eq!(mesh.normals.len(), mesh.positions.len());
    // side: two triangles per segment; caps: one triangle per segment each
    let expected_indices = 6 * segments + 2 * 3 * segments;
    assert_eq!(mesh.indices.len(), expected_indices as usize);
}

#[test]
fn cylinder_indices_stay_in_bounds() {
    let mesh = unit_cylinder(32);
    let count = mesh.positions.len() as u32;
    assert!(mesh.indices.iter().all(|i| *i < count));
}

#[test]
fn cylinder_normals_are_unit_length() {
    let mesh = unit_cylinder(16);
    for n in &mesh.normals {
        let len = Vec3::from_array(*n).length();
        assert!((len - 1.0).abs() < 1e-5, "normal {n:?} has length {len}");
    }
}

#[test]
fn degenerate_segment_counts_are_clamped() {
    let mesh = unit_cylinder(1);
    assert!(!mesh.indices.is_empty());
    assert!(mesh.indices.len() >= 3 * 3);
}

#[test]
fn model_has_one_fixed_part_and_five_spinning() {
    let model = turntable_model();
    assert_eq!(model.fixed.len(), 1);
    assert_eq!(model.assembly.parts.len(), 5);
    assert_eq!(model.part_count(), 6);
    assert_eq!(model.instances(0.0).len(), 6);
}

#[test]
fn fixed_parts_ignore_the_assembly_angle() {
    let model = turntable_model();
    let a = model.instances(0.0);
    let b = model.instances(1.3);
    assert_eq!(a[0].0, b[0].0, "the plinth must not spin");
}

#[test]
fn spinning_parts_rotate_with_the_angle() {
    let model = turntable_model();
    let zero = model.instances(0.0);
    let quarter = model.instances(std::f32::consts::FRAC_PI_2);
    for i in model.fixed.len()..model.part_count() {
        assert_ne!(zero[i].0, quarter[i].0, "part {i} did not rotate");
    }
}

#[test]
fn all_spinning_parts_share_one_rotation() {
    let model = turntable_model();
    let angle = 0.7f32;
    let transforms = model.assembly.world_transforms(angle);
    // The rotated local X axis direction must agree across every child.
    let reference = transforms[0].x_axis.xyz().normalize();
    for m in &transforms[1..] {
        let axis = m.x_axis.xyz().normalize();
        assert!(
            axis.dot(reference) > 0.9999,
            "assembly children drifted apart"
        );
    }
}

#[test]
fn disc_sits_above_the_platter() {
    let model = turntable_model();
    let ys: Vec<f32> = model.assembly.parts.iter().map(|p| p.y).collect();
    // platter, disc, grooves stack upward in declaration order
    assert!(ys[0] < ys[1] && ys[1] < ys[2]);
}
