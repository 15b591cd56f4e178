//! Growable containers for the Kiln engine.
//!
//! Currently a single container: [`GrowArray`], the index-stable growable
//! array the engine uses wherever gameplay code appends elements over time
//! and refers back to them by index.

pub mod grow_array;

pub use grow_array::{ArrayError, GrowArray};
