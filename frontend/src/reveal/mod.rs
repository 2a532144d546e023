pub mod engine;
pub mod gate;
pub mod geometry;
pub mod motion;
pub mod policy;
pub mod presentation;
pub mod stage;

pub use engine::{EngineSnapshot, SampleOutcome, ScrollEngine};
pub use gate::{GateMode, GateSignal, IntersectionGate};
pub use geometry::SectionGeometry;
pub use policy::{CardSlot, CardVisibility};
pub use presentation::{CardPresentation, CardStyle};
pub use stage::{Direction, StageIndex};
