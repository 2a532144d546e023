//! Scroll progress & stage engine for the stacked-card section.
//!
//! The engine is host independent: the component feeds it scroll offsets via
//! [`ScrollEngine::sample`], runs [`ScrollEngine::run_frame`] from the
//! animation-frame callback and forwards intersection changes. At most one
//! frame is outstanding at a time and only the newest offset is used when it
//! runs.

use crate::config::RevealConfig;

use super::geometry::SectionGeometry;
use super::motion::FrameThrottle;
use super::policy::{reconcile, CardVisibility};
use super::presentation::{CardPresentation, CardStyle};
use super::stage::{Direction, StageIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// No frame was pending; the caller must request one.
    RequestFrame,
    /// A frame is already pending and will pick up this offset.
    Coalesced,
    /// The engine has been torn down.
    Ignored,
}

/// Read-only copy of the engine state handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineSnapshot {
    pub direction: Direction,
    pub stage: StageIndex,
    pub progress: f64,
    pub cards: CardVisibility,
    pub intersecting: bool,
}

impl EngineSnapshot {
    /// Static fallback used when the stack cannot animate: every card shown.
    pub fn all_visible() -> Self {
        Self {
            cards: CardVisibility {
                first: true,
                second: true,
                third: true,
            },
            ..Self::default()
        }
    }

    pub fn presentation(&self, style: &CardStyle) -> [CardPresentation; 3] {
        style.present_all(&self.cards)
    }
}

#[derive(Debug, Clone)]
pub struct ScrollEngine {
    traversal_factor: f64,
    breakpoints: [f64; 3],
    direction: Direction,
    stage: StageIndex,
    progress: f64,
    cards: CardVisibility,
    intersecting: bool,
    last_offset: f64,
    pending_offset: Option<f64>,
    frame: FrameThrottle,
    torn_down: bool,
}

impl ScrollEngine {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            traversal_factor: config.traversal_factor,
            breakpoints: config.stage_breakpoints,
            direction: Direction::Forward,
            stage: StageIndex::NONE,
            progress: 0.0,
            cards: CardVisibility::default(),
            intersecting: false,
            last_offset: 0.0,
            pending_offset: None,
            frame: FrameThrottle::default(),
            torn_down: false,
        }
    }

    /// Records the latest scroll offset.
    pub fn sample(&mut self, offset: f64) -> SampleOutcome {
        if self.torn_down {
            return SampleOutcome::Ignored;
        }
        self.pending_offset = Some(offset.max(0.0));
        if self.frame.try_schedule() {
            SampleOutcome::RequestFrame
        } else {
            SampleOutcome::Coalesced
        }
    }

    /// Runs the pending recomputation. `geometry` is `None` when the section
    /// is not mounted, in which case this frame is skipped.
    ///
    /// Returns the new snapshot when the frame was processed.
    pub fn run_frame(&mut self, geometry: Option<SectionGeometry>) -> Option<EngineSnapshot> {
        if self.torn_down {
            return None;
        }
        self.frame.complete();

        if let Some(offset) = self.pending_offset.take() {
            self.direction = Direction::between(self.last_offset, offset, self.direction);
            self.last_offset = offset;
        }

        let Some(geometry) = geometry else {
            log::trace!("section not mounted, skipping frame");
            return None;
        };

        self.progress = geometry.progress(self.traversal_factor);
        let stage = StageIndex::from_progress(self.progress, &self.breakpoints);
        if stage != self.stage {
            log::debug!(
                "stage {} -> {} (progress {:.3}, {:?})",
                self.stage,
                stage,
                self.progress,
                self.direction
            );
            self.stage = stage;
        }

        if self.intersecting {
            self.cards = reconcile(self.cards, self.stage, self.direction);
        }

        Some(self.snapshot())
    }

    /// Updates the intersection flag. Entering view reconciles right away
    /// against the current stage; leaving view freezes the cards.
    pub fn set_intersecting(&mut self, intersecting: bool) -> EngineSnapshot {
        if !self.torn_down {
            self.intersecting = intersecting;
            if intersecting {
                self.cards = reconcile(self.cards, self.stage, self.direction);
            }
        }
        self.snapshot()
    }

    /// Drops the scheduled frame after the host failed to request it, so the
    /// next sample can schedule again.
    pub fn cancel_frame(&mut self) {
        self.frame.complete();
        self.pending_offset = None;
    }

    /// Stops reacting to samples, frames and intersection changes.
    pub fn tear_down(&mut self) {
        self.torn_down = true;
        self.frame.complete();
        self.pending_offset = None;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn frame_scheduled(&self) -> bool {
        self.frame.is_scheduled()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            direction: self.direction,
            stage: self.stage,
            progress: self.progress,
            cards: self.cards,
            intersecting: self.intersecting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::policy::CardSlot;

    const VH: f64 = 1000.0;
    const SECTION_HEIGHT: f64 = 2500.0;
    const SECTION_START: f64 = 1000.0;

    /// Geometry of a 250vh section that starts one viewport below the page top.
    fn geometry_at(offset: f64) -> SectionGeometry {
        let top = SECTION_START - offset;
        SectionGeometry::new(top, top + SECTION_HEIGHT, VH)
    }

    fn scroll(engine: &mut ScrollEngine, offset: f64) -> EngineSnapshot {
        engine.sample(offset);
        engine.run_frame(Some(geometry_at(offset))).unwrap()
    }

    fn engine_in_view() -> ScrollEngine {
        let mut engine = ScrollEngine::new(&RevealConfig::default());
        engine.set_intersecting(true);
        engine
    }

    #[test]
    fn starts_with_defaults() {
        let engine = ScrollEngine::new(&RevealConfig::default());
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.direction, Direction::Forward);
        assert!(snapshot.stage.is_none());
        assert_eq!(snapshot.cards, CardVisibility::default());
        assert!(!engine.frame_scheduled());
    }

    #[test]
    fn coalesces_samples_into_one_frame() {
        let mut engine = engine_in_view();
        assert_eq!(engine.sample(100.0), SampleOutcome::RequestFrame);
        assert_eq!(engine.sample(900.0), SampleOutcome::Coalesced);
        assert_eq!(engine.sample(1500.0), SampleOutcome::Coalesced);
        assert!(engine.frame_scheduled());

        let snapshot = engine.run_frame(Some(geometry_at(1500.0))).unwrap();
        assert!(!engine.frame_scheduled());
        assert_eq!(snapshot.stage.get(), 0);

        // The next burst schedules again.
        assert_eq!(engine.sample(1600.0), SampleOutcome::RequestFrame);
    }

    #[test]
    fn latest_sample_decides_direction() {
        let mut engine = engine_in_view();
        scroll(&mut engine, 1500.0);
        engine.sample(1700.0);
        engine.sample(1200.0);
        let snapshot = engine.run_frame(Some(geometry_at(1200.0))).unwrap();
        assert_eq!(snapshot.direction, Direction::Backward);
    }

    #[test]
    fn missing_geometry_skips_frame() {
        let mut engine = engine_in_view();
        scroll(&mut engine, 1500.0);
        let before = engine.snapshot();

        engine.sample(2000.0);
        assert!(engine.run_frame(None).is_none());
        assert!(!engine.frame_scheduled());
        assert_eq!(engine.snapshot().stage, before.stage);
        assert_eq!(engine.snapshot().cards, before.cards);

        // Picked up again on the next sample.
        let snapshot = scroll(&mut engine, 2000.0);
        assert_eq!(snapshot.stage.get(), 2);
    }

    #[test]
    fn forward_visibility_is_monotonic() {
        let mut engine = engine_in_view();
        let mut seen = CardVisibility::default();
        let mut offset = 0.0;
        while offset <= 3500.0 {
            let cards = scroll(&mut engine, offset).cards;
            assert!(cards.visible_count() >= seen.visible_count());
            for card in CardSlot::ALL {
                if seen.get(card) {
                    assert!(cards.get(card));
                }
            }
            seen = cards;
            offset += 37.0;
        }
        assert_eq!(seen.visible_count(), 3);
    }

    #[test]
    fn full_traversal_reverses_cleanly() {
        let mut engine = engine_in_view();
        let mut offset = 0.0;
        while offset <= 4000.0 {
            scroll(&mut engine, offset);
            offset += 50.0;
        }
        assert_eq!(engine.snapshot().progress, 1.0);
        assert_eq!(engine.snapshot().cards.visible_count(), 3);

        while offset >= 0.0 {
            scroll(&mut engine, offset);
            offset -= 50.0;
        }
        let snapshot = engine.snapshot();
        assert!(snapshot.stage.is_none());
        assert_eq!(snapshot.cards, CardVisibility::default());
        assert_eq!(snapshot.direction, Direction::Backward);
    }

    #[test]
    fn unchanged_offset_is_idempotent() {
        let mut engine = engine_in_view();
        scroll(&mut engine, 1000.0);
        scroll(&mut engine, 2000.0);
        let first = scroll(&mut engine, 1600.0);
        let again = scroll(&mut engine, 1600.0);
        assert_eq!(first, again);
    }

    #[test]
    fn frozen_while_out_of_view() {
        let mut engine = engine_in_view();
        scroll(&mut engine, 1500.0);
        assert!(engine.snapshot().cards.first);

        engine.set_intersecting(false);
        let snapshot = scroll(&mut engine, 2500.0);
        assert_eq!(snapshot.stage.get(), 2);
        assert_eq!(
            snapshot.cards,
            CardVisibility { first: true, second: false, third: false }
        );

        // Re-entering resumes from the current stage.
        let snapshot = engine.set_intersecting(true);
        assert_eq!(snapshot.cards.visible_count(), 3);
    }

    #[test]
    fn torn_down_engine_ignores_everything() {
        let mut engine = engine_in_view();
        scroll(&mut engine, 1500.0);
        engine.sample(2500.0);
        engine.tear_down();

        assert!(engine.is_torn_down());
        assert!(!engine.frame_scheduled());
        assert!(engine.run_frame(Some(geometry_at(2500.0))).is_none());
        assert_eq!(engine.sample(3000.0), SampleOutcome::Ignored);
        let snapshot = engine.set_intersecting(false);
        assert!(snapshot.intersecting);
        assert_eq!(snapshot.stage.get(), 0);
    }

    #[test]
    fn cancelled_frame_lets_next_sample_schedule() {
        let mut engine = engine_in_view();
        assert_eq!(engine.sample(1500.0), SampleOutcome::RequestFrame);
        engine.cancel_frame();
        assert!(!engine.frame_scheduled());

        assert_eq!(engine.sample(1600.0), SampleOutcome::RequestFrame);
        let snapshot = engine.run_frame(Some(geometry_at(1600.0))).unwrap();
        assert_eq!(snapshot.stage.get(), 1);
        assert!(snapshot.cards.second);
    }

    #[test]
    fn cancelled_frame_drops_its_offset() {
        let mut engine = engine_in_view();
        scroll(&mut engine, 1500.0);
        engine.sample(500.0);
        engine.cancel_frame();

        // The discarded offset must not turn the direction around.
        let snapshot = engine.run_frame(Some(geometry_at(1500.0))).unwrap();
        assert_eq!(snapshot.direction, Direction::Forward);
    }

    #[test]
    fn all_visible_fallback_shows_every_card() {
        let snapshot = EngineSnapshot::all_visible();
        assert_eq!(snapshot.cards.visible_count(), 3);
        assert!(snapshot.stage.is_none());
        let style = CardStyle::new(&RevealConfig::default());
        assert!(snapshot.presentation(&style).iter().all(|card| card.visible));
    }

    #[test]
    fn negative_offsets_are_clamped() {
        let mut engine = engine_in_view();
        scroll(&mut engine, 300.0);
        engine.sample(-40.0);
        let snapshot = engine.run_frame(Some(geometry_at(0.0))).unwrap();
        assert_eq!(snapshot.direction, Direction::Backward);
        assert_eq!(snapshot.progress, 0.0);
    }
}
