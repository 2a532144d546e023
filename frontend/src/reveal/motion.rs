/// The first caller in a burst requests the animation frame, the rest ride on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameThrottle {
    scheduled: bool,
}

impl FrameThrottle {
    /// Returns true when the caller should request a frame.
    pub fn try_schedule(&mut self) -> bool {
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Schedules through `request` when no frame is pending. A failed request
    /// releases the slot so the next burst tries again.
    pub fn request_with<E>(
        &mut self,
        request: impl FnOnce() -> Result<(), E>,
    ) -> Result<bool, E> {
        if !self.try_schedule() {
            return Ok(false);
        }
        request().map(|()| true).map_err(|e| {
            self.complete();
            e
        })
    }

    pub fn complete(&mut self) {
        self.scheduled = false;
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

/// Delay before the `index`-th staggered element fades in, in ms.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

/// CSS `animation-delay` for the `index`-th feature card.
pub fn animation_delay(index: usize, step_ms: u32) -> String {
    format!("{}s", stagger_delay_ms(index, step_ms) as f64 / 1000.0)
}

pub fn is_mobile(viewport_width: f64, breakpoint_px: f64) -> bool {
    viewport_width < breakpoint_px
}

/// Vertical parallax shift for an element moving at `speed` relative to the page.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    0.0 - scroll_y * speed
}

pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, speed))
}

const TILT_DEGREES: f64 = 2.5;

/// Perspective tilt for a pointer at (`x`, `y`) inside a box at
/// (`left`, `top`) of size `width` × `height`.
pub fn tilt_transform(x: f64, y: f64, left: f64, top: f64, width: f64, height: f64) -> String {
    if width <= 0.0 || height <= 0.0 {
        return resting_tilt().to_string();
    }
    let rel_x = (x - left) / width - 0.5;
    let rel_y = (y - top) / height - 0.5;
    format!(
        "perspective(1000px) rotateY({}deg) rotateX({}deg) scale3d(1.02, 1.02, 1.02)",
        rel_x * TILT_DEGREES,
        0.0 - rel_y * TILT_DEGREES
    )
}

pub fn resting_tilt() -> &'static str {
    "perspective(1000px) rotateY(0deg) rotateX(0deg) scale3d(1, 1, 1)"
}
