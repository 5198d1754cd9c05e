// Host-side tests for the rotation driver.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod rotation {
    include!("../src/core/rotation.rs");
}

use constants::PLATTER_RAD_PER_SEC;
use rotation::Turntable;

#[test]
fn starts_stopped_at_angle_zero() {
    let t = Turntable::new();
    assert!(!t.is_playing);
    assert_eq!(t.angular_velocity, 0.0);
    assert_eq!(t.angle(), 0.0);
}

#[test]
fn advance_is_a_noop_while_stopped() {
    let mut t = Turntable::new();
    t.set_velocity(PLATTER_RAD_PER_SEC);
    for _ in 0..100 {
        t.advance(1.0 / 60.0);
    }
    assert_eq!(t.angle(), 0.0, "angle must not move while stopped");
}

#[test]
fn advance_adds_velocity_times_dt() {
    let mut t = Turntable::new();
    t.set_velocity(2.0);
    t.set_playing(true);
    t.advance(0.5);
    assert!((t.angle() - 1.0).abs() < 1e-6);
    t.advance(0.25);
    assert!((t.angle() - 1.5).abs() < 1e-6);
}

#[test]
fn angle_accumulates_without_wrapping() {
    let mut t = Turntable::new();
    t.set_velocity(PLATTER_RAD_PER_SEC);
    t.set_playing(true);
    for _ in 0..10 {
        t.advance(1.0);
    }
    let expected = 10.0 * PLATTER_RAD_PER_SEC;
    assert!(
        (t.angle() - expected).abs() < 1e-3,
        "expected {expected}, got {}",
        t.angle()
    );
    // well past a full revolution; the driver never wraps
    assert!(t.angle() > std::f32::consts::TAU);
}

#[test]
fn pausing_freezes_the_angle() {
    let mut t = Turntable::new();
    t.set_velocity(1.0);
    t.set_playing(true);
    t.advance(1.0);
    let frozen = t.angle();
    t.set_playing(false);
    for _ in 0..50 {
        t.advance(1.0);
    }
    assert_eq!(t.angle(), frozen);
}

#[test]
fn negative_velocity_spins_backwards() {
    let mut t = Turntable::new();
    t.set_velocity(-1.5);
    t.set_playing(true);
    t.advance(2.0);
    assert!((t.angle() + 3.0).abs() < 1e-6);
}

#[test]
fn platter_constant_matches_lp_speed() {
    // 33 rpm in radians per second
    let expected = 33.0 * std::f32::consts::TAU / 60.0;
    assert!((PLATTER_RAD_PER_SEC - expected).abs() < 1e-6);
    assert!((PLATTER_RAD_PER_SEC - 3.4558).abs() < 1e-3);
}
