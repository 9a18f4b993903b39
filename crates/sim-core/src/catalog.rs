//! Density option catalogs supplied by the embedding page.
//!
//! Each catalog arrives as a JSON array of `{value, label, color}` objects.
//! The `value` string doubles as the option's nominal density, so it is both
//! the selection identifier and the number fed into the computation.

use fnv::FnvHashMap;
use serde::Deserialize;

use crate::constants::CUSTOM_SENTINEL;

/// One predefined substance the user can pick from a select list.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DensityOption {
    /// Selection identifier; also the nominal density as a numeric string.
    pub value: String,
    /// Display name.
    pub label: String,
    /// Display color for the matching drawable.
    pub color: String,
}

/// Parsed option list with a value lookup index.
#[derive(Clone, Debug, Default)]
pub struct DensityCatalog {
    options: Vec<DensityOption>,
    by_value: FnvHashMap<String, usize>,
}

impl DensityCatalog {
    /// Parse a catalog from its serialized form. Malformed input surfaces as
    /// the deserialization error; the core does not repair it.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let options: Vec<DensityOption> = serde_json::from_str(json)?;
        Ok(Self::new(options))
    }

    pub fn new(options: Vec<DensityOption>) -> Self {
        let by_value = options
            .iter()
            .enumerate()
            .map(|(i, o)| (o.value.clone(), i))
            .collect();
        Self { options, by_value }
    }

    pub fn get(&self, value: &str) -> Option<&DensityOption> {
        self.by_value.get(value).map(|&i| &self.options[i])
    }

    /// True when `value` names a catalog option or the custom sentinel, i.e.
    /// every identifier a selection is allowed to hold.
    pub fn resolves(&self, value: &str) -> bool {
        value == CUSTOM_SENTINEL || self.by_value.contains_key(value)
    }

    /// Display color for a selection: the matched option's color, or the
    /// supplied fallback when the selection is the custom sentinel.
    pub fn color_for<'a>(&'a self, selection: &str, custom_fallback: &'a str) -> &'a str {
        if selection == CUSTOM_SENTINEL {
            custom_fallback
        } else {
            self.get(selection).map(|o| o.color.as_str()).unwrap_or(custom_fallback)
        }
    }

    pub fn options(&self) -> &[DensityOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
