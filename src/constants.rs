use glam::Vec3;

/// Playback, camera, and turntable-model tuning constants.
// Platter speed: long-play records turn at 33 rpm (nominally 33 1/3).
pub const PLATTER_RPM: f32 = 33.0;
pub const PLATTER_RAD_PER_SEC: f32 = PLATTER_RPM * std::f32::consts::TAU / 60.0;

// Orbit camera limits
pub const CAMERA_FOVY_RAD: f32 = 1.308_997; // 75 degrees
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const ORBIT_DISTANCE_INITIAL: f32 = 5.0;
pub const ORBIT_DISTANCE_MIN: f32 = 2.5;
pub const ORBIT_DISTANCE_MAX: f32 = 20.0;
pub const ORBIT_PITCH_MIN: f32 = -1.45;
pub const ORBIT_PITCH_MAX: f32 = 1.45;

// Pointer-to-orbit mapping
pub const ORBIT_RADIANS_PER_PIXEL: f32 = 0.008;
pub const ORBIT_ZOOM_PER_WHEEL_LINE: f32 = 0.25;

// Orbit smoothing time constant (seconds); goal values are approached
// exponentially so drags glide instead of snapping.
pub const ORBIT_DAMPING_TAU_SEC: f32 = 0.3;

// Turntable model dimensions (radius, height, vertical center)
pub const BASE_RADIUS: f32 = 2.0;
pub const BASE_HEIGHT: f32 = 0.2;
pub const PLATTER_RADIUS: f32 = 1.85;
pub const PLATTER_HEIGHT: f32 = 0.05;
pub const PLATTER_Y: f32 = 0.125;
pub const DISC_RADIUS: f32 = 1.8;
pub const DISC_HEIGHT: f32 = 0.02;
pub const DISC_Y: f32 = 0.16;
pub const GROOVES_RADIUS: f32 = 1.7;
pub const GROOVES_HEIGHT: f32 = 0.005;
pub const GROOVES_Y: f32 = 0.175;
pub const LABEL_RADIUS: f32 = 0.55;
pub const LABEL_HEIGHT: f32 = 0.03;
pub const LABEL_Y: f32 = 0.175;
pub const SPINDLE_RADIUS: f32 = 0.04;
pub const SPINDLE_HEIGHT: f32 = 0.12;
pub const SPINDLE_Y: f32 = 0.22;

pub const CYLINDER_SEGMENTS: u32 = 32;

// Part colors (linear RGBA)
pub const BASE_COLOR: [f32; 4] = [0.18, 0.18, 0.18, 1.0];
pub const PLATTER_COLOR: [f32; 4] = [0.32, 0.32, 0.34, 1.0];
pub const DISC_COLOR: [f32; 4] = [0.06, 0.06, 0.07, 1.0];
pub const GROOVES_COLOR: [f32; 4] = [0.11, 0.11, 0.12, 1.0];
pub const LABEL_COLOR: [f32; 4] = [0.72, 0.18, 0.12, 1.0];
pub const SPINDLE_COLOR: [f32; 4] = [0.65, 0.65, 0.68, 1.0];

// Lighting: one ambient term plus one directional light from straight above
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_INTENSITY: f32 = 0.5;
pub const LIGHT_DIR: Vec3 = Vec3::new(0.0, -1.0, 0.0);

// Clear color behind the scene
pub const CLEAR_COLOR: [f64; 3] = [0.03, 0.04, 0.08];
