//! The widget facade: one state + one sequencer per widget instance.
//!
//! Every mutator runs the same recompute hook once it has applied its edit:
//! derive the submerged volume from the effective densities, store it,
//! rebuild the timeline, play. One explicit call site instead of implicit
//! per-field watchers.

use crate::catalog::DensityCatalog;
use crate::constants::CUSTOM_SENTINEL;
use crate::error::SelectionError;
use crate::physics::{displaced_mass, format_readout, submerged_volume, ComputationResult};
use crate::sequencer::{AnimationSequencer, TargetHandle};
use crate::state::SimulationState;

/// Externally supplied widget configuration, owned by the embedding page.
#[derive(Clone, Debug)]
pub struct WidgetConfig {
    /// Serialized JSON array of liquid options.
    pub liquid_options_json: String,
    /// Serialized JSON array of solid options.
    pub solid_options_json: String,
    /// Selection restored for the liquid side on reset. May be the custom
    /// sentinel.
    pub default_liquid: String,
    /// Selection restored for the solid side on reset.
    pub default_solid: String,
    /// Display color used while the liquid selection is custom.
    pub custom_liquid_color: String,
    /// Display color used while the solid selection is custom.
    pub custom_solid_color: String,
}

/// One interactive float-or-sink simulation instance.
///
/// Single-threaded and exclusively owned: all mutations happen synchronously
/// on the input event that caused them, and nothing is shared across widget
/// instances.
pub struct DensitySim {
    liquid_catalog: DensityCatalog,
    solid_catalog: DensityCatalog,
    config: WidgetConfig,
    state: SimulationState,
    sequencer: AnimationSequencer,
}

impl DensitySim {
    /// Build a widget from its configuration. Malformed option JSON is the
    /// caller's problem and surfaces as the deserialization error.
    pub fn new(config: WidgetConfig) -> Result<Self, serde_json::Error> {
        let liquid_catalog = DensityCatalog::from_json(&config.liquid_options_json)?;
        let solid_catalog = DensityCatalog::from_json(&config.solid_options_json)?;
        Ok(Self {
            liquid_catalog,
            solid_catalog,
            config,
            state: SimulationState::new(),
            sequencer: AnimationSequencer::new(),
        })
    }

    pub fn bind_sphere(&mut self, handle: Box<dyn TargetHandle>) {
        self.sequencer.bind_sphere(handle);
    }

    pub fn bind_beaker_liquid(&mut self, handle: Box<dyn TargetHandle>) {
        self.sequencer.bind_beaker_liquid(handle);
    }

    pub fn select_liquid(&mut self, value: &str) -> Result<(), SelectionError> {
        self.state.select_liquid(&self.liquid_catalog, value)?;
        self.on_any_input_changed();
        Ok(())
    }

    pub fn select_solid(&mut self, value: &str) -> Result<(), SelectionError> {
        self.state.select_solid(&self.solid_catalog, value)?;
        self.on_any_input_changed();
        Ok(())
    }

    pub fn set_custom_liquid_density(&mut self, value: &str) {
        self.state.set_custom_liquid_density(value);
        self.on_any_input_changed();
    }

    pub fn set_custom_solid_density(&mut self, value: &str) {
        self.state.set_custom_solid_density(value);
        self.on_any_input_changed();
    }

    pub fn set_sphere_volume(&mut self, value: &str) {
        self.state.set_sphere_volume(value);
        self.on_any_input_changed();
    }

    /// The submit button: recompute and replay without editing anything.
    pub fn submit(&mut self) {
        self.on_any_input_changed();
    }

    /// Restore the configured default selections and replay the last-built
    /// timeline from its start. Does not recompute and leaves the last
    /// result untouched.
    pub fn reset(&mut self) -> Result<(), SelectionError> {
        self.state.reset(
            &self.liquid_catalog,
            &self.solid_catalog,
            &self.config.default_liquid,
            &self.config.default_solid,
        )?;
        self.sequencer.restart();
        Ok(())
    }

    /// Advance animation playback; the presentation layer calls this once
    /// per frame with the elapsed seconds.
    pub fn advance_animation(&mut self, dt: f64) {
        self.sequencer.advance(dt);
    }

    // Read model -----------------------------------------------------------

    pub fn effective_liquid_density(&self) -> f64 {
        self.state.effective_liquid_density()
    }

    pub fn effective_solid_density(&self) -> f64 {
        self.state.effective_solid_density()
    }

    pub fn sphere_volume(&self) -> &str {
        self.state.sphere_volume()
    }

    pub fn last_result(&self) -> ComputationResult {
        self.state.last_result()
    }

    /// Submerged-volume readout, two decimals.
    pub fn submerged_volume_display(&self) -> String {
        format_readout(self.state.last_result().submerged_volume)
    }

    /// Water-displaced readout, two decimals. Derived from the raw field
    /// values each time, never from the stored result.
    pub fn displaced_mass_display(&self) -> String {
        format_readout(self.displaced_mass())
    }

    pub fn displaced_mass(&self) -> f64 {
        displaced_mass(self.state.sphere_volume(), self.state.solid_selection())
    }

    pub fn liquid_color(&self) -> &str {
        self.liquid_catalog
            .color_for(self.state.liquid_selection(), &self.config.custom_liquid_color)
    }

    pub fn solid_color(&self) -> &str {
        self.solid_catalog
            .color_for(self.state.solid_selection(), &self.config.custom_solid_color)
    }

    pub fn is_custom_liquid(&self) -> bool {
        self.state.liquid_selection() == CUSTOM_SENTINEL
    }

    pub fn is_custom_solid(&self) -> bool {
        self.state.solid_selection() == CUSTOM_SENTINEL
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn sequencer(&self) -> &AnimationSequencer {
        &self.sequencer
    }

    pub fn liquid_catalog(&self) -> &DensityCatalog {
        &self.liquid_catalog
    }

    pub fn solid_catalog(&self) -> &DensityCatalog {
        &self.solid_catalog
    }

    /// The single recompute hook every mutator ends in.
    fn on_any_input_changed(&mut self) {
        let solid = self.state.effective_solid_density();
        let liquid = self.state.effective_liquid_density();
        let volume = self.state.sphere_volume_value();
        let result = ComputationResult {
            submerged_volume: submerged_volume(solid, volume, liquid),
        };
        log::debug!(
            "recompute: ds={solid} vs={volume} dl={liquid} -> submerged={}",
            result.submerged_volume
        );
        self.state.store_result(result);
        self.sequencer.rebuild(result, volume);
        self.sequencer.play();
    }
}
