use glam::{Mat4, Vec3};

use crate::constants::{
    CAMERA_FOVY_RAD, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_DAMPING_TAU_SEC, ORBIT_DISTANCE_INITIAL,
    ORBIT_DISTANCE_MAX, ORBIT_DISTANCE_MIN, ORBIT_PITCH_MAX, ORBIT_PITCH_MIN,
    ORBIT_RADIANS_PER_PIXEL, ORBIT_ZOOM_PER_WHEEL_LINE,
};

/// User-driven orbit camera around a fixed target.
///
/// Pointer input moves goal values; the rendered yaw/pitch/distance ease
/// toward the goals with an exponential time constant, so motion keeps a
/// short glide after the pointer stops.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
    pub aspect: f32,
    goal_yaw: f32,
    goal_pitch: f32,
    goal_distance: f32,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: ORBIT_DISTANCE_INITIAL,
            target: Vec3::ZERO,
            aspect,
            goal_yaw: 0.0,
            goal_pitch: 0.0,
            goal_distance: ORBIT_DISTANCE_INITIAL,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(1e-3);
    }

    /// Apply a pointer drag, in canvas pixels.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32) {
        self.goal_yaw -= dx_px * ORBIT_RADIANS_PER_PIXEL;
        self.goal_pitch = (self.goal_pitch + dy_px * ORBIT_RADIANS_PER_PIXEL)
            .clamp(ORBIT_PITCH_MIN, ORBIT_PITCH_MAX);
    }

    /// Apply wheel zoom in scroll steps; positive steps move the eye away.
    pub fn zoom(&mut self, steps: f32) {
        self.goal_distance = (self.goal_distance + steps * ORBIT_ZOOM_PER_WHEEL_LINE)
            .clamp(ORBIT_DISTANCE_MIN, ORBIT_DISTANCE_MAX);
    }

    /// Ease the rendered values toward the goals.
    pub fn update(&mut self, dt_sec: f32) {
        let alpha = 1.0 - (-dt_sec / ORBIT_DAMPING_TAU_SEC).exp();
        self.yaw += (self.goal_yaw - self.yaw) * alpha;
        self.pitch += (self.goal_pitch - self.pitch) * alpha;
        self.distance += (self.goal_distance - self.distance) * alpha;
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(
                self.distance * cos_pitch * sin_yaw,
                self.distance * sin_pitch,
                self.distance * cos_pitch * cos_yaw,
            )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOVY_RAD, self.aspect, CAMERA_ZNEAR, CAMERA_ZFAR)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
