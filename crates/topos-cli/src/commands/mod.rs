pub mod cast;
pub mod classify;
pub mod compose;
pub mod spells;
pub mod truth;
