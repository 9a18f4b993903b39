use std::cell::RefCell;
use std::rc::Rc;

use sim_core::{
    AnimationSequencer, ComputationResult, Ease, Phase, TargetHandle, TargetId, Timeline,
};

#[derive(Default)]
struct Recorded {
    offsets: Vec<f64>,
    radius: Option<f64>,
}

struct RecordingHandle(Rc<RefCell<Recorded>>);

impl TargetHandle for RecordingHandle {
    fn set_offset_y(&mut self, y: f64) {
        self.0.borrow_mut().offsets.push(y);
    }

    fn set_radius(&mut self, radius: f64) {
        self.0.borrow_mut().radius = Some(radius);
    }
}

fn result(submerged: f64) -> ComputationResult {
    ComputationResult {
        submerged_volume: submerged,
    }
}

#[test]
fn timeline_has_two_keyframes_with_fixed_schedule() {
    let timeline = Timeline::build(28.0, 40.0);
    assert!((timeline.sphere_radius - 40.0).abs() < 1e-12);
    assert_eq!(timeline.keyframes.len(), 2);

    let drop = &timeline.keyframes[0];
    assert_eq!(drop.target, TargetId::Sphere);
    assert_eq!(drop.ease, Ease::SineIn);
    assert!((drop.to_y - 273.0).abs() < 1e-12);
    assert!((drop.start - 0.0).abs() < 1e-12);
    assert!((drop.duration - 2.0).abs() < 1e-12);

    let rise = &timeline.keyframes[1];
    assert_eq!(rise.target, TargetId::BeakerLiquid);
    assert_eq!(rise.ease, Ease::SlowIn);
    assert!((rise.to_y - -28.0).abs() < 1e-12);
    assert!((rise.start - 1.5).abs() < 1e-12, "rise overlaps the drop tail");
    assert!((rise.duration - 2.0).abs() < 1e-12);

    assert!((timeline.duration() - 3.5).abs() < 1e-12);
}

#[test]
fn liquid_rise_is_capped_at_100() {
    // Below the cap: the rise tracks the submerged volume exactly
    let below = Timeline::build(80.0, 40.0);
    assert!((below.keyframes[1].to_y - -80.0).abs() < 1e-12);

    // Above the cap: clamped so the beaker graphic cannot overflow
    let above = Timeline::build(280.0, 40.0);
    assert!((above.keyframes[1].to_y - -100.0).abs() < 1e-12);

    let infinite = Timeline::build(f64::INFINITY, 40.0);
    assert!((infinite.keyframes[1].to_y - -100.0).abs() < 1e-12);
}

#[test]
fn nan_submersion_propagates_into_both_keyframes() {
    let timeline = Timeline::build(f64::NAN, 40.0);
    assert!(timeline.keyframes[0].to_y.is_nan());
    assert!(timeline.keyframes[1].to_y.is_nan(), "the cap must not swallow NaN");
}

#[test]
fn ease_curves_pin_endpoints_and_are_monotonic() {
    for ease in [Ease::SineIn, Ease::SlowIn] {
        assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?} must start at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} must end at 1");
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.apply(i as f64 / 100.0);
            assert!(v >= prev, "{ease:?} not monotonic at step {i}");
            prev = v;
        }
        // Out-of-range progress clamps instead of extrapolating
        assert!(ease.apply(-0.5).abs() < 1e-9);
        assert!((ease.apply(1.5) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn pose_sampling_respects_the_start_offset() {
    let timeline = Timeline::build(28.0, 40.0);

    let at_start = timeline.pose_at(0.0);
    assert!(at_start.sphere_y.abs() < 1e-9);
    assert!(at_start.beaker_y.abs() < 1e-9);

    // Before 1.5 the liquid has not started rising
    let mid_drop = timeline.pose_at(1.0);
    assert!(mid_drop.sphere_y > 0.0 && mid_drop.sphere_y < 273.0);
    assert!(mid_drop.beaker_y.abs() < 1e-9);

    let at_end = timeline.pose_at(3.5);
    assert!((at_end.sphere_y - 273.0).abs() < 1e-6);
    assert!((at_end.beaker_y - -28.0).abs() < 1e-6);
}

#[test]
fn restart_before_any_build_is_a_noop() {
    let mut seq = AnimationSequencer::new();
    assert_eq!(seq.phase(), Phase::Idle);
    seq.restart();
    assert_eq!(seq.phase(), Phase::Idle);
    assert!(seq.sample(0.0).is_none());
}

#[test]
fn phase_machine_built_playing_settled() {
    let mut seq = AnimationSequencer::new();
    seq.rebuild(result(28.0), 40.0);
    assert_eq!(seq.phase(), Phase::Built);

    seq.play();
    assert_eq!(seq.phase(), Phase::Playing);

    seq.advance(1.0);
    assert_eq!(seq.phase(), Phase::Playing);
    seq.advance(3.0);
    assert_eq!(seq.phase(), Phase::Settled);

    // Settled is not terminal: restart replays the same timeline
    seq.restart();
    assert_eq!(seq.phase(), Phase::Playing);
}

#[test]
fn rebuild_discards_in_flight_playback() {
    let mut seq = AnimationSequencer::new();
    seq.rebuild(result(28.0), 40.0);
    seq.play();
    seq.advance(1.0);

    seq.rebuild(result(80.0), 40.0);
    assert_eq!(seq.phase(), Phase::Built, "mid-flight timeline replaced, not resumed");
    let timeline = seq.timeline().expect("timeline exists");
    assert!((timeline.keyframes[0].to_y - 532.0).abs() < 1e-12);
}

#[test]
fn play_is_idempotent_and_supersedes() {
    let mut seq = AnimationSequencer::new();
    seq.rebuild(result(28.0), 40.0);
    seq.play();
    seq.advance(2.0);
    let mid = seq.sample(2.0).expect("built");

    // A second play starts over from the timeline beginning
    seq.play();
    assert_eq!(seq.phase(), Phase::Playing);
    seq.advance(2.0);
    let replayed = seq.sample(2.0).expect("built");
    assert_eq!(mid, replayed, "same timeline, same poses");
}

#[test]
fn sequencer_pushes_values_to_bound_handles() {
    let sphere = Rc::new(RefCell::new(Recorded::default()));
    let beaker = Rc::new(RefCell::new(Recorded::default()));

    let mut seq = AnimationSequencer::new();
    seq.bind_sphere(Box::new(RecordingHandle(sphere.clone())));
    seq.bind_beaker_liquid(Box::new(RecordingHandle(beaker.clone())));

    seq.rebuild(result(28.0), 40.0);
    assert_eq!(sphere.borrow().radius, Some(40.0), "radius applied at build time");

    seq.play();
    for _ in 0..10 {
        seq.advance(0.5);
    }
    assert_eq!(seq.phase(), Phase::Settled);

    let sphere_final = *sphere.borrow().offsets.last().expect("sphere moved");
    let beaker_final = *beaker.borrow().offsets.last().expect("liquid moved");
    assert!((sphere_final - 273.0).abs() < 1e-6);
    assert!((beaker_final - -28.0).abs() < 1e-6);

    // The sphere descends monotonically under the ease-in curve
    let offsets = sphere.borrow().offsets.clone();
    for pair in offsets.windows(2) {
        assert!(pair[1] >= pair[0] - 1e-9, "drop reversed direction: {pair:?}");
    }
}
