use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zerog_core::DragSession;

#[test]
fn single_sample_halves_instant_velocity() {
    let mut s = DragSession::begin(1000.0);
    assert!(s.sample(Vec2::new(20.0, 0.0), 1010.0));
    let v = s.velocity();
    assert!((v.x - 1.0).abs() < 1e-6);
    assert_eq!(v.y, 0.0);
}

#[test]
fn duplicate_timestamp_skips_update_but_keeps_delta() {
    let mut s = DragSession::begin(0.0);
    s.sample(Vec2::new(10.0, 0.0), 10.0);
    let before = s.velocity();
    assert!(!s.sample(Vec2::new(5.0, 3.0), 10.0));
    assert_eq!(s.velocity(), before);
    assert_eq!(s.last_delta(), Vec2::new(5.0, 3.0));
    assert_eq!(s.travelled(), Vec2::new(15.0, 3.0));
}

#[test]
fn out_of_order_sample_is_ignored_for_velocity() {
    let mut s = DragSession::begin(100.0);
    s.sample(Vec2::new(4.0, 0.0), 104.0);
    let before = s.velocity();
    assert!(!s.sample(Vec2::new(100.0, 0.0), 90.0));
    assert_eq!(s.velocity(), before);
}

#[test]
fn converges_towards_constant_speed() {
    let mut s = DragSession::begin(0.0);
    let mut t = 0.0;
    for _ in 0..30 {
        t += 16.0;
        s.sample(Vec2::new(32.0, -16.0), t);
    }
    let v = s.finish();
    assert!((v.x - 2.0).abs() < 1e-4, "vx={}", v.x);
    assert!((v.y + 1.0).abs() < 1e-4, "vy={}", v.y);
}

// Property: the estimate never leaves the range spanned by zero and the
// observed instantaneous velocities.
#[test]
fn smoothed_velocity_stays_within_observed_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let mut s = DragSession::begin(0.0);
        let mut t = 0.0;
        let (mut lo, mut hi) = (Vec2::ZERO, Vec2::ZERO);
        let n = rng.gen_range(1..40);
        for _ in 0..n {
            let dt = rng.gen_range(1.0..40.0);
            t += dt;
            let d = Vec2::new(rng.gen_range(-80.0..80.0), rng.gen_range(-80.0..80.0));
            let inst = d / dt as f32;
            lo = lo.min(inst);
            hi = hi.max(inst);
            s.sample(d, t);
            let v = s.velocity();
            assert!(v.x >= lo.x - 1e-4 && v.x <= hi.x + 1e-4, "vx {} not in [{}, {}]", v.x, lo.x, hi.x);
            assert!(v.y >= lo.y - 1e-4 && v.y <= hi.y + 1e-4, "vy {} not in [{}, {}]", v.y, lo.y, hi.y);
        }
    }
}

#[test]
fn zero_alpha_tracks_last_instant_velocity() {
    let mut s = DragSession::with_alpha(0.0, 0.0);
    s.sample(Vec2::new(10.0, 0.0), 10.0);
    s.sample(Vec2::new(-30.0, 0.0), 20.0);
    assert!((s.velocity().x + 3.0).abs() < 1e-6);
}
