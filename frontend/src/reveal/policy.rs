//! Direction-dependent show/hide policy for the stacked cards.
//!
//! Scrolling forward only ever reveals cards, scrolling backward only ever
//! dismisses them. Each (card, direction) pair has exactly one rule in
//! [`RULES`], so the asymmetry can be read off a single table.

use super::stage::{Direction, StageIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardSlot {
    First,
    Second,
    Third,
}

impl CardSlot {
    pub const ALL: [CardSlot; 3] = [CardSlot::First, CardSlot::Second, CardSlot::Third];

    /// Stage at which this card is due.
    pub fn ordinal(self) -> i8 {
        match self {
            CardSlot::First => 0,
            CardSlot::Second => 1,
            CardSlot::Third => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardVisibility {
    pub first: bool,
    pub second: bool,
    pub third: bool,
}

impl CardVisibility {
    pub fn get(&self, card: CardSlot) -> bool {
        match card {
            CardSlot::First => self.first,
            CardSlot::Second => self.second,
            CardSlot::Third => self.third,
        }
    }

    pub fn set(&mut self, card: CardSlot, visible: bool) {
        match card {
            CardSlot::First => self.first = visible,
            CardSlot::Second => self.second = visible,
            CardSlot::Third => self.third = visible,
        }
    }

    pub fn visible_count(&self) -> usize {
        CardSlot::ALL.iter().filter(|&&c| self.get(c)).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Show,
    Hide,
}

#[derive(Clone, Copy)]
pub struct Rule {
    pub card: CardSlot,
    pub direction: Direction,
    pub action: Action,
    pub applies: fn(StageIndex, CardSlot) -> bool,
}

impl Rule {
    const fn show(card: CardSlot) -> Rule {
        Rule {
            card,
            direction: Direction::Forward,
            action: Action::Show,
            applies: reached,
        }
    }

    const fn hide(card: CardSlot) -> Rule {
        Rule {
            card,
            direction: Direction::Backward,
            action: Action::Hide,
            applies: receded,
        }
    }
}

fn reached(stage: StageIndex, card: CardSlot) -> bool {
    stage.get() >= card.ordinal()
}

fn receded(stage: StageIndex, card: CardSlot) -> bool {
    stage.get() < card.ordinal()
}

/// Evaluated in order. Backward rules run third, second, first.
pub const RULES: [Rule; 6] = [
    Rule::show(CardSlot::First),
    Rule::show(CardSlot::Second),
    Rule::show(CardSlot::Third),
    Rule::hide(CardSlot::Third),
    Rule::hide(CardSlot::Second),
    Rule::hide(CardSlot::First),
];

/// Looks up the rule for one card and direction.
pub fn rule_for(card: CardSlot, direction: Direction) -> Option<&'static Rule> {
    RULES
        .iter()
        .find(|rule| rule.card == card && rule.direction == direction)
}

/// Applies every rule for `direction` to `current` and returns the new flags.
pub fn reconcile(
    current: CardVisibility,
    stage: StageIndex,
    direction: Direction,
) -> CardVisibility {
    let mut next = current;
    for rule in RULES.iter().filter(|rule| rule.direction == direction) {
        if (rule.applies)(stage, rule.card) {
            next.set(rule.card, rule.action == Action::Show);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(i: i8) -> StageIndex {
        StageIndex::new(i).unwrap()
    }

    fn all_visible() -> CardVisibility {
        CardVisibility { first: true, second: true, third: true }
    }

    #[test]
    fn one_rule_per_card_and_direction() {
        for card in CardSlot::ALL {
            for direction in [Direction::Forward, Direction::Backward] {
                let matching = RULES
                    .iter()
                    .filter(|r| r.card == card && r.direction == direction)
                    .count();
                assert_eq!(matching, 1, "{:?} {:?}", card, direction);
            }
        }
    }

    #[test]
    fn forward_never_hides() {
        for card in CardSlot::ALL {
            assert_eq!(rule_for(card, Direction::Forward).unwrap().action, Action::Show);
        }
        let after = reconcile(all_visible(), StageIndex::NONE, Direction::Forward);
        assert_eq!(after, all_visible());
    }

    #[test]
    fn backward_never_shows() {
        let after = reconcile(CardVisibility::default(), stage(2), Direction::Backward);
        assert_eq!(after, CardVisibility::default());
    }

    #[test]
    fn forward_reveals_up_to_stage() {
        let after = reconcile(CardVisibility::default(), stage(1), Direction::Forward);
        assert_eq!(after, CardVisibility { first: true, second: true, third: false });
    }

    #[test]
    fn backward_hides_above_stage() {
        let after = reconcile(all_visible(), stage(0), Direction::Backward);
        assert_eq!(after, CardVisibility { first: true, second: false, third: false });
        let after = reconcile(after, StageIndex::NONE, Direction::Backward);
        assert_eq!(after, CardVisibility::default());
    }

    #[test]
    fn backward_rules_run_in_reverse_order() {
        let order: Vec<CardSlot> = RULES
            .iter()
            .filter(|r| r.direction == Direction::Backward)
            .map(|r| r.card)
            .collect();
        assert_eq!(order, vec![CardSlot::Third, CardSlot::Second, CardSlot::First]);
    }

    #[test]
    fn hiding_does_not_wait_for_higher_cards() {
        // Third was never shown; second still hides on its own threshold.
        let current = CardVisibility { first: true, second: true, third: false };
        let after = reconcile(current, stage(0), Direction::Backward);
        assert!(!after.second);
        assert!(after.first);
    }
}
