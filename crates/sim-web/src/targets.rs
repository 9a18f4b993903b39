//! Target handles over live SVG elements.

use sim_core::TargetHandle;
use web_sys as web;

/// Binds a sequencer target to one SVG element by writing its `transform`
/// and (for the sphere) `r` attributes.
pub struct SvgHandle {
    element: web::Element,
}

impl SvgHandle {
    pub fn new(element: web::Element) -> Self {
        Self { element }
    }
}

impl TargetHandle for SvgHandle {
    fn set_offset_y(&mut self, y: f64) {
        let _ = self
            .element
            .set_attribute("transform", &format!("translate(0, {y})"));
    }

    fn set_radius(&mut self, radius: f64) {
        let _ = self.element.set_attribute("r", &radius.to_string());
    }
}
