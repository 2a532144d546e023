use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::RevealError;

/// JSON override baked in at build time, e.g.
/// `REVEAL_CONFIG='{"traversal_factor":2.0}' trunk build`.
const CONFIG_OVERRIDE: Option<&str> = option_env!("REVEAL_CONFIG");

/// Tunables for the landing page reveals.
///
/// Defaults reproduce the shipped landing page. Anything missing from a JSON
/// override falls back to its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Traversal distance of the stacked-card section, in viewport heights.
    pub traversal_factor: f64,
    /// Progress values at which stages 0, 1 and 2 become active.
    pub stage_breakpoints: [f64; 3],
    /// Fraction of the section area that must be visible to count as in view.
    pub gate_threshold: f64,
    pub transition_secs: f64,
    pub easing: String,
    /// Downward offset of a hidden card, in px.
    pub hidden_offset_px: f64,
    /// Delay between staggered fade-in elements, in ms.
    pub stagger_step_ms: u32,
    pub parallax_default_speed: f64,
    /// Viewport widths below this are treated as mobile.
    pub mobile_breakpoint_px: f64,
    pub hero_animation_path: String,
    /// Most verbose browser console level, e.g. "info" or "debug".
    pub log_level: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            traversal_factor: 1.5,
            stage_breakpoints: [0.05, 0.35, 0.6],
            gate_threshold: 0.1,
            transition_secs: 0.5,
            easing: "cubic-bezier(0.19, 1, 0.22, 1)".to_string(),
            hidden_offset_px: 200.0,
            stagger_step_ms: 100,
            parallax_default_speed: 0.1,
            mobile_breakpoint_px: 768.0,
            hero_animation_path: "/loop-header.lottie".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl RevealConfig {
    pub fn from_json(raw: &str) -> Result<Self, RevealError> {
        let config: RevealConfig =
            serde_json::from_str(raw).map_err(|e| RevealError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn log_level(&self) -> Result<log::Level, RevealError> {
        self.log_level.parse().map_err(|_| {
            RevealError::InvalidConfig(format!("unknown log_level {:?}", self.log_level))
        })
    }

    pub fn validate(&self) -> Result<(), RevealError> {
        if !(self.traversal_factor.is_finite() && self.traversal_factor > 0.0) {
            return Err(RevealError::InvalidConfig(format!(
                "traversal_factor must be positive, got {}",
                self.traversal_factor
            )));
        }
        let [a, b, c] = self.stage_breakpoints;
        if !(0.0 <= a && a < b && b < c && c <= 1.0) {
            return Err(RevealError::InvalidConfig(format!(
                "stage_breakpoints must be strictly increasing within [0, 1], got {:?}",
                self.stage_breakpoints
            )));
        }
        if !(self.gate_threshold > 0.0 && self.gate_threshold <= 1.0) {
            return Err(RevealError::InvalidConfig(format!(
                "gate_threshold must be in (0, 1], got {}",
                self.gate_threshold
            )));
        }
        if self.transition_secs < 0.0 {
            return Err(RevealError::InvalidConfig(
                "transition_secs must not be negative".to_string(),
            ));
        }
        self.log_level()?;
        Ok(())
    }
}

/// The override is parsed before a logger exists, so a rejected override is
/// kept here and reported once logging is up.
static REVEAL_CONFIG: Lazy<(RevealConfig, Option<RevealError>)> =
    Lazy::new(|| match CONFIG_OVERRIDE.map(RevealConfig::from_json) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (RevealConfig::default(), Some(e)),
        None => (RevealConfig::default(), None),
    });

/// Active configuration: the build-time override when it parses, defaults otherwise.
pub fn get_reveal_config() -> &'static RevealConfig {
    &REVEAL_CONFIG.0
}

/// Why the build-time override was ignored, if it was.
pub fn rejected_override() -> Option<&'static RevealError> {
    REVEAL_CONFIG.1.as_ref()
}
