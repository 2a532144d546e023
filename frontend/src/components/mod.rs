pub mod fade_in;
pub mod features;
pub mod hero;
pub mod stacked_cards;
