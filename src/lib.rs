//! Sparse-set Conway's Game of Life engine (B3/S23) on a bounded grid.

pub mod sparselife;
pub use sparselife::{Cell, Generation, LifeWorld, next_generation};
