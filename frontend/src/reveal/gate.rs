#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateMode {
    OneShot,
    Continuous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateSignal {
    /// One-shot gate fired; it is now detached.
    Revealed,
    Entered,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionGate {
    mode: GateMode,
    threshold: f64,
    visible: bool,
    fired: bool,
    attached: bool,
}

impl IntersectionGate {
    pub fn new(mode: GateMode, threshold: f64) -> Self {
        Self {
            mode,
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
            fired: false,
            attached: true,
        }
    }

    pub fn one_shot(threshold: f64) -> Self {
        Self::new(GateMode::OneShot, threshold)
    }

    pub fn continuous(threshold: f64) -> Self {
        Self::new(GateMode::Continuous, threshold)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Feeds one intersection report, `ratio` being the visible fraction of
    /// the target. Returns the transition it caused, if any.
    pub fn observe(&mut self, ratio: f64) -> Option<GateSignal> {
        if !self.attached {
            return None;
        }
        let visible = ratio > 0.0 && ratio >= self.threshold;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;

        match self.mode {
            GateMode::OneShot => {
                if !visible {
                    return None;
                }
                self.fired = true;
                self.attached = false;
                Some(GateSignal::Revealed)
            }
            GateMode::Continuous => Some(if visible {
                GateSignal::Entered
            } else {
                GateSignal::Left
            }),
        }
    }

    /// Stops reporting. No-op when already detached.
    pub fn detach(&mut self) {
        self.attached = false;
    }
}
