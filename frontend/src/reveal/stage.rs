use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Direction implied by moving from `previous` to `current`.
    /// An unchanged offset keeps `last`.
    pub fn between(previous: f64, current: f64, last: Direction) -> Direction {
        match current.partial_cmp(&previous) {
            Some(Ordering::Greater) => Direction::Forward,
            Some(Ordering::Less) => Direction::Backward,
            _ => last,
        }
    }
}

/// Active stage of the card stack: -1 (nothing yet), 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StageIndex(i8);

impl StageIndex {
    pub const NONE: StageIndex = StageIndex(-1);

    pub fn new(index: i8) -> Option<StageIndex> {
        (-1..=2).contains(&index).then_some(StageIndex(index))
    }

    /// Stage for `progress` given the progress values that open stages 0, 1, 2.
    /// Breakpoints are inclusive lower bounds with no hysteresis.
    pub fn from_progress(progress: f64, breakpoints: &[f64; 3]) -> StageIndex {
        let reached = breakpoints.iter().filter(|&&b| progress >= b).count() as i8;
        StageIndex(reached - 1)
    }

    pub fn get(self) -> i8 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self == StageIndex::NONE
    }
}

impl Default for StageIndex {
    fn default() -> Self {
        StageIndex::NONE
    }
}

impl fmt::Display for StageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BREAKPOINTS: [f64; 3] = [0.05, 0.35, 0.6];

    fn stage(p: f64) -> i8 {
        StageIndex::from_progress(p, &BREAKPOINTS).get()
    }

    #[test]
    fn breakpoint_bands() {
        for p in [0.0, 0.01, 0.049] {
            assert_eq!(stage(p), -1, "p = {}", p);
        }
        for p in [0.05, 0.2, 0.349] {
            assert_eq!(stage(p), 0, "p = {}", p);
        }
        for p in [0.35, 0.5, 0.599] {
            assert_eq!(stage(p), 1, "p = {}", p);
        }
        for p in [0.6, 0.8, 1.0] {
            assert_eq!(stage(p), 2, "p = {}", p);
        }
    }

    #[test]
    fn direction_from_offsets() {
        assert_eq!(
            Direction::between(10.0, 20.0, Direction::Backward),
            Direction::Forward
        );
        assert_eq!(
            Direction::between(20.0, 10.0, Direction::Forward),
            Direction::Backward
        );
        assert_eq!(
            Direction::between(20.0, 20.0, Direction::Backward),
            Direction::Backward
        );
    }

    #[test]
    fn stage_index_range() {
        assert!(StageIndex::new(-2).is_none());
        assert!(StageIndex::new(3).is_none());
        assert_eq!(StageIndex::new(1).map(StageIndex::get), Some(1));
        assert!(StageIndex::default().is_none());
    }
}
