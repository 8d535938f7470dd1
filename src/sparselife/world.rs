//! Stateful wrapper owning the current generation on behalf of a driver.

use super::cell::{Cell, Generation};
use super::engine::next_generation;

/// A bounded Life world: the current live set plus a tick counter.
///
/// The transition itself stays in [`next_generation`]; this type only
/// holds the one mutable current-generation value that an animation
/// driver would otherwise carry around, and filters out-of-bounds
/// coordinates at its edges so the engine's invariant holds by
/// construction.
#[derive(Default)]
pub struct LifeWorld {
    cells: Generation,
    generation: u64,
}

impl LifeWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a world from an initial pattern. Out-of-bounds cells are
    /// dropped.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        Self {
            cells: cells.into_iter().filter(|cell| cell.in_bounds()).collect(),
            generation: 0,
        }
    }

    /// Set one cell. Out-of-bounds coordinates are ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        let cell = Cell::new(x, y);
        if !cell.in_bounds() {
            return;
        }
        if alive {
            self.cells.insert(cell);
        } else {
            self.cells.remove(&cell);
        }
    }

    pub fn get_cell(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&Cell::new(x, y))
    }

    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        let alive = self.get_cell(x, y);
        self.set_cell(x, y, !alive);
    }

    /// Advance one tick, replacing the live set wholesale.
    pub fn step(&mut self) {
        self.cells = next_generation(&self.cells);
        self.generation += 1;
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reset to an empty world at generation 0.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
    }

    pub fn cells(&self) -> &Generation {
        &self.cells
    }

    pub fn for_each_live<F: FnMut(i32, i32)>(&self, mut f: F) {
        for cell in &self.cells {
            f(cell.x, cell.y);
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
