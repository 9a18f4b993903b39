//! Core logic for the float-or-sink density simulation widget.
//!
//! Holds the user-editable state (density selections, custom overrides,
//! sphere volume), the submerged-volume computation, and the two-keyframe
//! animation sequencer that drives the ball-drop visual. Platform-neutral:
//! the web front-end binds drawables through the [`TargetHandle`] trait and
//! feeds input events into [`DensitySim`].

pub mod catalog;
pub mod constants;
pub mod error;
pub mod physics;
pub mod sequencer;
pub mod state;
pub mod widget;

pub use catalog::{DensityCatalog, DensityOption};
pub use constants::CUSTOM_SENTINEL;
pub use error::{SelectionError, SubstanceKind};
pub use physics::{displaced_mass, drop_height, submerged_volume, ComputationResult};
pub use sequencer::{
    AnimationSequencer, Ease, FramePose, Keyframe, NoOpHandle, Phase, TargetHandle, TargetId,
    Timeline,
};
pub use state::SimulationState;
pub use widget::{DensitySim, WidgetConfig};
