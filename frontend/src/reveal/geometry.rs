/// Section bounds relative to the viewport top, as reported by
/// `getBoundingClientRect`, plus the viewport height. All in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub bottom: f64,
    pub viewport_height: f64,
}

impl SectionGeometry {
    pub fn new(top: f64, bottom: f64, viewport_height: f64) -> Self {
        Self {
            top,
            bottom,
            viewport_height,
        }
    }

    /// How far the section has travelled past the viewport top, in [0, 1].
    ///
    /// The traversal distance is `traversal_factor` viewport heights,
    /// independent of the section's own height.
    pub fn progress(&self, traversal_factor: f64) -> f64 {
        if self.top <= 0.0 && self.bottom > 0.0 {
            let distance = self.viewport_height * traversal_factor;
            if distance <= 0.0 {
                return 1.0;
            }
            (self.top.abs() / distance).clamp(0.0, 1.0)
        } else if self.bottom <= 0.0 {
            1.0
        } else {
            0.0
        }
    }
}
