/// Rotation state for the spinning part of the turntable.
///
/// One angle, one angular velocity, one playing flag. The render loop calls
/// [`Turntable::advance`] once per frame with the measured wall-clock delta,
/// so rotation speed is independent of frame rate. The playback controller
/// flips the flag and velocity on play/stop; nothing else mutates this.
#[derive(Clone, Copy, Debug, Default)]
pub struct Turntable {
    pub current_angle: f32,
    pub angular_velocity: f32,
    pub is_playing: bool,
}

impl Turntable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the angle by `angular_velocity * dt_sec` while playing.
    /// The angle is unbounded; rendering wraps it implicitly.
    pub fn advance(&mut self, dt_sec: f32) {
        if self.is_playing {
            self.current_angle += self.angular_velocity * dt_sec;
        }
    }

    /// Any value is accepted, including zero or negative (reverse spin).
    pub fn set_velocity(&mut self, rad_per_sec: f32) {
        self.angular_velocity = rad_per_sec;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    pub fn angle(&self) -> f32 {
        self.current_angle
    }
}
