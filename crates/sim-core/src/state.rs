//! User-editable simulation state.
//!
//! All fields hold the raw strings the input surface produced; numeric
//! interpretation happens only at the effective-density accessors, where
//! non-numeric input parses to NaN and propagates. The state performs no
//! clamping and no bounds checks of its own.

use crate::catalog::DensityCatalog;
use crate::constants::{
    CUSTOM_SENTINEL, DEFAULT_LIQUID_DENSITY, DEFAULT_SOLID_DENSITY, DEFAULT_SPHERE_VOLUME,
};
use crate::error::{SelectionError, SubstanceKind};
use crate::physics::{parse_density, ComputationResult};

/// Current selections, custom overrides, sphere volume, and the last
/// computed result.
#[derive(Clone, Debug)]
pub struct SimulationState {
    liquid_selection: String,
    solid_selection: String,
    custom_liquid_density: String,
    custom_solid_density: String,
    sphere_volume: String,
    last_result: ComputationResult,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            liquid_selection: DEFAULT_LIQUID_DENSITY.to_owned(),
            solid_selection: DEFAULT_SOLID_DENSITY.to_owned(),
            custom_liquid_density: DEFAULT_LIQUID_DENSITY.to_owned(),
            custom_solid_density: DEFAULT_SOLID_DENSITY.to_owned(),
            sphere_volume: DEFAULT_SPHERE_VOLUME.to_owned(),
            last_result: ComputationResult::default(),
        }
    }
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the liquid selection. A non-sentinel selection copies the
    /// option's nominal density into the custom field; selecting the
    /// sentinel leaves the custom field alone so the last custom entry
    /// survives round trips through the catalog.
    ///
    /// An identifier that resolves against neither the catalog nor the
    /// sentinel is a contract violation by the caller; state is left
    /// unchanged and the error is returned.
    pub fn select_liquid(
        &mut self,
        catalog: &DensityCatalog,
        value: &str,
    ) -> Result<(), SelectionError> {
        if !catalog.resolves(value) {
            return Err(SelectionError::UnknownSelection {
                kind: SubstanceKind::Liquid,
                value: value.to_owned(),
            });
        }
        self.liquid_selection = value.to_owned();
        if value != CUSTOM_SENTINEL {
            self.custom_liquid_density = value.to_owned();
        }
        Ok(())
    }

    /// Symmetric to [`select_liquid`](Self::select_liquid) for the solid side.
    pub fn select_solid(
        &mut self,
        catalog: &DensityCatalog,
        value: &str,
    ) -> Result<(), SelectionError> {
        if !catalog.resolves(value) {
            return Err(SelectionError::UnknownSelection {
                kind: SubstanceKind::Solid,
                value: value.to_owned(),
            });
        }
        self.solid_selection = value.to_owned();
        if value != CUSTOM_SENTINEL {
            self.custom_solid_density = value.to_owned();
        }
        Ok(())
    }

    /// Free-text custom liquid density. Stored unconditionally; only read by
    /// the computation while the liquid selection is the sentinel (the
    /// presentation layer disables the field otherwise).
    pub fn set_custom_liquid_density(&mut self, value: &str) {
        self.custom_liquid_density = value.to_owned();
    }

    pub fn set_custom_solid_density(&mut self, value: &str) {
        self.custom_solid_density = value.to_owned();
    }

    /// Raw sphere volume string. The `[40, 100]` range lives on the input
    /// element, not here.
    pub fn set_sphere_volume(&mut self, value: &str) {
        self.sphere_volume = value.to_owned();
    }

    /// Restore the caller-supplied default selections. Custom density fields
    /// and the last result are deliberately untouched, and no recompute
    /// happens; the owning widget replays the existing timeline instead.
    pub fn reset(
        &mut self,
        liquid_catalog: &DensityCatalog,
        solid_catalog: &DensityCatalog,
        default_liquid: &str,
        default_solid: &str,
    ) -> Result<(), SelectionError> {
        if !liquid_catalog.resolves(default_liquid) {
            return Err(SelectionError::UnknownSelection {
                kind: SubstanceKind::Liquid,
                value: default_liquid.to_owned(),
            });
        }
        if !solid_catalog.resolves(default_solid) {
            return Err(SelectionError::UnknownSelection {
                kind: SubstanceKind::Solid,
                value: default_solid.to_owned(),
            });
        }
        self.liquid_selection = default_liquid.to_owned();
        self.solid_selection = default_solid.to_owned();
        Ok(())
    }

    /// Liquid density the computation should use: the custom field while the
    /// sentinel is selected, otherwise the selection identifier itself (the
    /// option's value doubles as its density).
    pub fn effective_liquid_density(&self) -> f64 {
        if self.liquid_selection == CUSTOM_SENTINEL {
            parse_density(&self.custom_liquid_density)
        } else {
            parse_density(&self.liquid_selection)
        }
    }

    pub fn effective_solid_density(&self) -> f64 {
        if self.solid_selection == CUSTOM_SENTINEL {
            parse_density(&self.custom_solid_density)
        } else {
            parse_density(&self.solid_selection)
        }
    }

    pub fn sphere_volume_value(&self) -> f64 {
        parse_density(&self.sphere_volume)
    }

    pub fn liquid_selection(&self) -> &str {
        &self.liquid_selection
    }

    pub fn solid_selection(&self) -> &str {
        &self.solid_selection
    }

    pub fn custom_liquid_density(&self) -> &str {
        &self.custom_liquid_density
    }

    pub fn custom_solid_density(&self) -> &str {
        &self.custom_solid_density
    }

    pub fn sphere_volume(&self) -> &str {
        &self.sphere_volume
    }

    pub fn last_result(&self) -> ComputationResult {
        self.last_result
    }

    pub(crate) fn store_result(&mut self, result: ComputationResult) {
        self.last_result = result;
    }
}
