//! Two-stage drop-and-rise animation timeline.
//!
//! A [`Timeline`] is derived from one computation result and never mutated:
//! every recompute replaces it wholesale, discarding any in-flight playback.
//! The sequencer drives two abstract [`TargetHandle`]s — the sphere and the
//! beaker liquid — that the presentation layer binds to its actual
//! drawables; the core never reaches into rendering internals.

use smallvec::SmallVec;

use crate::constants::{DROP_DURATION, LIQUID_RISE_CAP, RISE_DURATION, RISE_START};
use crate::physics::{drop_height, ComputationResult};

/// The two drawables the timeline addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetId {
    Sphere,
    BeakerLiquid,
}

/// Unit-interval easing curves for the two keyframes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// Gentle start, full speed at the end; used for the sphere drop.
    SineIn,
    /// Smooth start and slow settle; used for the liquid rise.
    SlowIn,
}

impl Ease {
    /// Map linear progress in `[0, 1]` to eased progress. Both curves pin
    /// 0 to 0 and 1 to 1 and are monotonic in between.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::SineIn => 1.0 - (t * std::f64::consts::FRAC_PI_2).cos(),
            Ease::SlowIn => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// One tween: translate `target` from rest to `to_y` over `duration`
/// seconds, starting `start` seconds into the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub target: TargetId,
    pub to_y: f64,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Keyframe {
    /// Vertical offset of this keyframe's target at absolute timeline time
    /// `t`. Rest position before `start`, eased interpolation during, the
    /// final offset after.
    pub fn offset_at(&self, t: f64) -> f64 {
        if t <= self.start {
            return 0.0;
        }
        let progress = ((t - self.start) / self.duration).min(1.0);
        self.to_y * self.ease.apply(progress)
    }
}

/// Sphere and beaker-liquid offsets at one timeline instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FramePose {
    pub sphere_y: f64,
    pub beaker_y: f64,
}

/// An immutable two-keyframe timeline plus the sphere radius that goes with
/// it.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    pub sphere_radius: f64,
    pub keyframes: SmallVec<[Keyframe; 2]>,
}

impl Timeline {
    /// Derive the timeline for one computed submerged volume.
    ///
    /// The sphere radius reuses the volume's numeric value — not literal
    /// geometry, a deliberate simplification of the physical model. The
    /// liquid rise is capped at [`LIQUID_RISE_CAP`] so the beaker graphic
    /// cannot overflow; the cap is written as a plain comparison so a NaN
    /// submerged volume still propagates instead of being swallowed by
    /// `f64::min`.
    pub fn build(submerged: f64, sphere_volume: f64) -> Self {
        let rise_target = if submerged > LIQUID_RISE_CAP {
            -LIQUID_RISE_CAP
        } else {
            -submerged
        };
        let mut keyframes: SmallVec<[Keyframe; 2]> = SmallVec::new();
        keyframes.push(Keyframe {
            target: TargetId::Sphere,
            to_y: drop_height(submerged, sphere_volume),
            start: 0.0,
            duration: DROP_DURATION,
            ease: Ease::SineIn,
        });
        keyframes.push(Keyframe {
            target: TargetId::BeakerLiquid,
            to_y: rise_target,
            start: RISE_START,
            duration: RISE_DURATION,
            ease: Ease::SlowIn,
        });
        Self {
            sphere_radius: sphere_volume,
            keyframes,
        }
    }

    /// Total playback length.
    pub fn duration(&self) -> f64 {
        self.keyframes
            .iter()
            .map(|k| k.start + k.duration)
            .fold(0.0, f64::max)
    }

    /// Sample both targets at absolute timeline time `t`.
    pub fn pose_at(&self, t: f64) -> FramePose {
        let mut pose = FramePose::default();
        for keyframe in &self.keyframes {
            match keyframe.target {
                TargetId::Sphere => pose.sphere_y = keyframe.offset_at(t),
                TargetId::BeakerLiquid => pose.beaker_y = keyframe.offset_at(t),
            }
        }
        pose
    }
}

/// Capability the presentation layer hands the sequencer for each drawable.
/// Methods default to no-ops so a handle only implements what its drawable
/// supports.
pub trait TargetHandle {
    /// Apply a vertical translation from the drawable's rest position.
    fn set_offset_y(&mut self, _y: f64) {}

    /// Resize the drawable; only the sphere handle cares.
    fn set_radius(&mut self, _radius: f64) {}
}

/// Handle that ignores everything. Used until the presentation layer binds
/// real drawables, and by host-side tests that only inspect poses.
pub struct NoOpHandle;

impl TargetHandle for NoOpHandle {}

/// Playback phase. A rebuild re-enters `Built` from any phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No timeline has ever been built.
    Idle,
    /// A timeline exists but is not running.
    Built,
    /// The timeline is advancing.
    Playing,
    /// Playback ran to completion; end values are held.
    Settled,
}

/// Owns the last-built timeline and plays it against the bound handles.
pub struct AnimationSequencer {
    timeline: Option<Timeline>,
    phase: Phase,
    elapsed: f64,
    sphere: Box<dyn TargetHandle>,
    beaker_liquid: Box<dyn TargetHandle>,
}

impl Default for AnimationSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationSequencer {
    pub fn new() -> Self {
        Self {
            timeline: None,
            phase: Phase::Idle,
            elapsed: 0.0,
            sphere: Box::new(NoOpHandle),
            beaker_liquid: Box::new(NoOpHandle),
        }
    }

    /// Bind the drawable the sphere keyframe addresses.
    pub fn bind_sphere(&mut self, handle: Box<dyn TargetHandle>) {
        self.sphere = handle;
    }

    /// Bind the drawable the liquid-rise keyframe addresses.
    pub fn bind_beaker_liquid(&mut self, handle: Box<dyn TargetHandle>) {
        self.beaker_liquid = handle;
    }

    /// Replace the timeline with one derived from a fresh result. Any
    /// in-flight playback is discarded, not wound down. The sphere radius
    /// is pushed to its handle immediately, before playback starts.
    pub fn rebuild(&mut self, result: ComputationResult, sphere_volume: f64) {
        let timeline = Timeline::build(result.submerged_volume, sphere_volume);
        log::debug!(
            "timeline rebuilt: submerged={:.3} drop={:.1} rise={:.1}",
            result.submerged_volume,
            timeline.keyframes[0].to_y,
            timeline.keyframes[1].to_y,
        );
        self.sphere.set_radius(timeline.sphere_radius);
        self.timeline = Some(timeline);
        self.phase = Phase::Built;
        self.elapsed = 0.0;
    }

    /// Start (or re-start) playback from the timeline's beginning. Each call
    /// supersedes any in-flight playback; calling without a built timeline
    /// does nothing. No completion callback exists — the embedder observes
    /// settling through [`phase`](Self::phase).
    pub fn play(&mut self) {
        if self.timeline.is_none() {
            return;
        }
        self.phase = Phase::Playing;
        self.elapsed = 0.0;
        self.apply_current_pose();
    }

    /// Replay the most recently built timeline from its start. No-op if no
    /// timeline has ever been built.
    pub fn restart(&mut self) {
        self.play();
    }

    /// Advance playback by `dt` seconds and push the sampled offsets to the
    /// bound handles. Settles once every keyframe has completed.
    pub fn advance(&mut self, dt: f64) {
        if self.phase != Phase::Playing {
            return;
        }
        self.elapsed += dt;
        let done = matches!(&self.timeline, Some(t) if self.elapsed >= t.duration());
        self.apply_current_pose();
        if done {
            self.phase = Phase::Settled;
        }
    }

    /// Sample the current timeline at time `t` without touching playback
    /// state. Returns `None` before the first build.
    pub fn sample(&self, t: f64) -> Option<FramePose> {
        self.timeline.as_ref().map(|timeline| timeline.pose_at(t))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timeline(&self) -> Option<&Timeline> {
        self.timeline.as_ref()
    }

    fn apply_current_pose(&mut self) {
        if let Some(timeline) = &self.timeline {
            let pose = timeline.pose_at(self.elapsed);
            self.sphere.set_offset_y(pose.sphere_y);
            self.beaker_liquid.set_offset_y(pose.beaker_y);
        }
    }
}
