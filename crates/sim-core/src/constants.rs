// Shared layout and timing constants used by the physics and the sequencer.

/// Selection identifier signalling a user-supplied density rather than a
/// catalog entry.
pub const CUSTOM_SENTINEL: &str = "-1";

// Scene layout (SVG user units)
pub const FLOOR_BASELINE: f64 = 472.0; // sphere resting on the container floor
pub const SURFACE_BASELINE: f64 = 157.0; // buoyant rest height before submersion offset
pub const VOLUME_REFERENCE: f64 = 100.0; // volume at which the baselines were authored
pub const LIQUID_RISE_CAP: f64 = 100.0; // max beaker liquid rise, keeps the graphic inside its frame

// Timeline (seconds)
pub const DROP_DURATION: f64 = 2.0;
pub const RISE_DURATION: f64 = 2.0;
pub const RISE_START: f64 = 1.5; // liquid starts rising during the tail of the drop

// Input surface bounds for the sphere volume field. Enforced by the
// presentation layer only; the state stores whatever it is given.
pub const VOLUME_MIN: f64 = 40.0;
pub const VOLUME_MAX: f64 = 100.0;

// Default field values
pub const DEFAULT_LIQUID_DENSITY: &str = "1.0";
pub const DEFAULT_SOLID_DENSITY: &str = "0.7";
pub const DEFAULT_SPHERE_VOLUME: &str = "40";
