//! The density/volume relationship and its derived display quantities.
//!
//! All functions are pure and deliberately permissive: non-numeric input has
//! already been parsed to NaN upstream and is allowed to flow through to the
//! displayed output, and a zero liquid density yields Infinity. Nothing here
//! clamps or rejects.

use crate::constants::{FLOOR_BASELINE, SURFACE_BASELINE, VOLUME_REFERENCE};

/// The most recently computed submerged volume. Zero before the first
/// computation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComputationResult {
    pub submerged_volume: f64,
}

/// Volume of liquid displaced by the sphere:
/// `(solid density * sphere volume) / liquid density`.
///
/// Not clamped to `[0, sphere volume]` — a result above the sphere's own
/// volume means the would-be submersion exceeds the sphere entirely (it
/// sinks), below means partial submersion (it floats).
pub fn submerged_volume(solid_density: f64, sphere_volume: f64, liquid_density: f64) -> f64 {
    (solid_density * sphere_volume) / liquid_density
}

/// Vertical animation target for the sphere.
///
/// A submerged volume at or above the sphere's own volume (including the
/// Infinity produced by a zero liquid density) drops it to the container
/// floor; anything else rests it at a height proportional to submersion. NaN
/// fails the floor comparison and propagates through the buoyant branch.
pub fn drop_height(submerged: f64, sphere_volume: f64) -> f64 {
    if submerged >= sphere_volume {
        FLOOR_BASELINE - (sphere_volume - VOLUME_REFERENCE)
    } else {
        (SURFACE_BASELINE - (sphere_volume - VOLUME_REFERENCE)) + submerged * 2.0
    }
}

/// Cosmetic water-displaced readout: sphere volume times the raw solid
/// selection value. Computed from the raw field strings, never from the
/// submerged-volume result, and the two routinely disagree (a custom solid
/// selection makes this `volume * -1`). The divergence is deliberate and
/// kept.
pub fn displaced_mass(sphere_volume_raw: &str, solid_selection_raw: &str) -> f64 {
    parse_density(sphere_volume_raw) * parse_density(solid_selection_raw)
}

/// Permissive numeric-field parsing: anything that is not a number becomes
/// NaN and keeps flowing.
pub fn parse_density(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Two-decimal display formatting shared by the submerged-volume and
/// displaced-mass readouts.
pub fn format_readout(value: f64) -> String {
    format!("{value:.2}")
}
