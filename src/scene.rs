// Static turntable model: a fixed plinth plus one rotating assembly.
//
// Every part is a scaled unit cylinder, so the whole scene draws as one
// instanced mesh. Spinning parts are children of the assembly transform
// and inherit its angle; nothing applies a rotation per part, which keeps
// the platter, disc, grooves, and label from ever drifting apart.

use glam::{Mat4, Vec3};

use crate::constants::{
    BASE_COLOR, BASE_HEIGHT, BASE_RADIUS, DISC_COLOR, DISC_HEIGHT, DISC_RADIUS,
    DISC_Y, GROOVES_COLOR, GROOVES_HEIGHT, GROOVES_RADIUS, GROOVES_Y, LABEL_COLOR, LABEL_HEIGHT,
    LABEL_RADIUS, LABEL_Y, PLATTER_COLOR, PLATTER_HEIGHT, PLATTER_RADIUS, PLATTER_Y,
    SPINDLE_COLOR, SPINDLE_HEIGHT, SPINDLE_RADIUS, SPINDLE_Y,
};

pub struct CylinderMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Unit cylinder (radius 1, height 1, centered at the origin) with smooth
/// side normals and capped ends. Parts reach their shape through the
/// instance transform's non-uniform scale.
pub fn unit_cylinder(segments: u32) -> CylinderMesh {
    let segments = segments.max(3);
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // Side wall: a duplicated seam vertex keeps the normal wrap simple.
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
        let (sin, cos) = theta.sin_cos();
        positions.push([cos, 0.5, sin]);
        normals.push([cos, 0.0, sin]);
        positions.push([cos, -0.5, sin]);
        normals.push([cos, 0.0, sin]);
    }
    for i in 0..segments {
        let a = 2 * i;
        indices.extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
    }

    // Caps: fan around a center vertex, normals straight up/down.
    for (y, ny) in [(0.5, 1.0), (-0.5, -1.0)] {
        let center = positions.len() as u32;
        positions.push([0.0, y, 0.0]);
        normals.push([0.0, ny, 0.0]);
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
            let (sin, cos) = theta.sin_cos();
            positions.push([cos, y, sin]);
            normals.push([0.0, ny, 0.0]);
        }
        for i in 0..segments {
            indices.extend_from_slice(&[center, center + 1 + i, center + 2 + i]);
        }
    }

    CylinderMesh {
        positions,
        normals,
        indices,
    }
}

/// One cylinder-shaped part of the model, placed on the spin axis.
#[derive(Clone, Copy, Debug)]
pub struct Part {
    pub radius: f32,
    pub height: f32,
    pub y: f32,
    pub color: [f32; 4],
}

impl Part {
    pub fn local_transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.y, 0.0))
            * Mat4::from_scale(Vec3::new(self.radius, self.height, self.radius))
    }
}

/// The spinning portion of the model. One angle, applied once to the parent
/// transform; every child part inherits it.
pub struct RotatingAssembly {
    pub parts: Vec<Part>,
}

impl RotatingAssembly {
    pub fn world_transforms(&self, angle: f32) -> Vec<Mat4> {
        let parent = Mat4::from_rotation_y(angle);
        self.parts
            .iter()
            .map(|p| parent * p.local_transform())
            .collect()
    }
}

pub struct SceneModel {
    pub fixed: Vec<Part>,
    pub assembly: RotatingAssembly,
}

impl SceneModel {
    pub fn part_count(&self) -> usize {
        self.fixed.len() + self.assembly.parts.len()
    }

    /// Flatten to (transform, color) pairs for instanced drawing.
    pub fn instances(&self, angle: f32) -> Vec<(Mat4, [f32; 4])> {
        let mut out = Vec::with_capacity(self.part_count());
        for p in &self.fixed {
            out.push((p.local_transform(), p.color));
        }
        for (m, p) in self
            .assembly
            .world_transforms(angle)
            .into_iter()
            .zip(&self.assembly.parts)
        {
            out.push((m, p.color));
        }
        out
    }
}

/// Record player: plinth, platter, vinyl disc, grooves overlay, centre
/// label, and spindle. Only the plinth stays fixed.
pub fn turntable_model() -> SceneModel {
    SceneModel {
        fixed: vec![Part {
            radius: BASE_RADIUS,
            height: BASE_HEIGHT,
            y: 0.0,
            color: BASE_COLOR,
        }],
        assembly: RotatingAssembly {
            parts: vec![
                Part {
                    radius: PLATTER_RADIUS,
                    height: PLATTER_HEIGHT,
                    y: PLATTER_Y,
                    color: PLATTER_COLOR,
                },
                Part {
                    radius: DISC_RADIUS,
                    height: DISC_HEIGHT,
                    y: DISC_Y,
                    color: DISC_COLOR,
                },
                Part {
                    radius: GROOVES_RADIUS,
                    height: GROOVES_HEIGHT,
                    y: GROOVES_Y,
                    color: GROOVES_COLOR,
                },
                Part {
                    radius: LABEL_RADIUS,
                    height: LABEL_HEIGHT,
                    y: LABEL_Y,
                    color: LABEL_COLOR,
                },
                Part {
                    radius: SPINDLE_RADIUS,
                    height: SPINDLE_HEIGHT,
                    y: SPINDLE_Y,
                    color: SPINDLE_COLOR,
                },
            ],
        },
    }
}
