use crate::config::RevealConfig;

use super::policy::{CardSlot, CardVisibility};

/// Resting placement of a card once revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Resting {
    translate_y_px: f64,
    scale: f64,
    z_index: i32,
    /// Hidden cards stop taking pointer events unless this is set.
    always_interactive: bool,
}

fn resting(card: CardSlot) -> Resting {
    match card {
        CardSlot::First => Resting {
            translate_y_px: 10.0,
            scale: 0.9,
            z_index: 10,
            always_interactive: true,
        },
        CardSlot::Second => Resting {
            translate_y_px: -20.0,
            scale: 0.95,
            z_index: 20,
            always_interactive: false,
        },
        CardSlot::Third => Resting {
            translate_y_px: -50.0,
            scale: 1.0,
            z_index: 30,
            always_interactive: false,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPresentation {
    pub card: CardSlot,
    pub visible: bool,
    pub translate_y_px: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
    pub interactive: bool,
}

impl CardPresentation {
    pub fn transform(&self) -> String {
        format!("translateY({}px) scale({})", self.translate_y_px, self.scale)
    }
}

/// Shared transition and sizing for the stacked cards.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    hidden_offset_px: f64,
    transition: String,
}

impl CardStyle {
    pub fn new(config: &RevealConfig) -> Self {
        let timing = format!("{}s {}", config.transition_secs, config.easing);
        Self {
            hidden_offset_px: config.hidden_offset_px,
            transition: format!("transform {timing}, opacity {timing}"),
        }
    }

    pub fn transition(&self) -> &str {
        &self.transition
    }

    pub fn present(&self, card: CardSlot, visible: bool) -> CardPresentation {
        let rest = resting(card);
        CardPresentation {
            card,
            visible,
            translate_y_px: if visible { rest.translate_y_px } else { self.hidden_offset_px },
            scale: rest.scale,
            opacity: if visible { 1.0 } else { 0.0 },
            z_index: rest.z_index,
            interactive: visible || rest.always_interactive,
        }
    }

    pub fn present_all(&self, cards: &CardVisibility) -> [CardPresentation; 3] {
        CardSlot::ALL.map(|card| self.present(card, cards.get(card)))
    }

    /// Inline style attribute for one card.
    pub fn inline(&self, presentation: &CardPresentation) -> String {
        format!(
            "height: calc(80vh - 120px); max-height: 800px; border-radius: 20px; \
             transition: {}; will-change: transform, opacity; z-index: {}; \
             transform: {}; opacity: {}; pointer-events: {};",
            self.transition,
            presentation.z_index,
            presentation.transform(),
            presentation.opacity,
            if presentation.interactive { "auto" } else { "none" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> CardStyle {
        CardStyle::new(&RevealConfig::default())
    }

    #[test]
    fn hidden_cards_sit_below_with_zero_opacity() {
        for card in CardSlot::ALL {
            let p = style().present(card, false);
            assert_eq!(p.translate_y_px, 200.0);
            assert_eq!(p.opacity, 0.0);
        }
    }

    #[test]
    fn visible_cards_stack_in_z_order() {
        let all = style().present_all(&CardVisibility { first: true, second: true, third: true });
        assert_eq!(all.map(|p| p.z_index), [10, 20, 30]);
        assert_eq!(all.map(|p| p.translate_y_px), [10.0, -20.0, -50.0]);
        assert_eq!(all[1].transform(), "translateY(-20px) scale(0.95)");
        assert!(all.iter().all(|p| p.opacity == 1.0));
    }

    #[test]
    fn only_first_card_stays_interactive_when_hidden() {
        let all = style().present_all(&CardVisibility::default());
        assert_eq!(all.map(|p| p.interactive), [true, false, false]);
    }

    #[test]
    fn transition_uses_shared_timing() {
        assert_eq!(
            style().transition(),
            concat!(
                "transform 0.5s cubic-bezier(0.19, 1, 0.22, 1), ",
                "opacity 0.5s cubic-bezier(0.19, 1, 0.22, 1)"
            )
        );
        let inline = style().inline(&style().present(CardSlot::Third, false));
        assert!(inline.contains("pointer-events: none;"));
        assert!(inline.contains("transform: translateY(200px) scale(1);"));
    }
}
