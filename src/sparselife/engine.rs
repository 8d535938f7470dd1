//! Generation transition for the bounded sparse world.
//!
//! One pass over the live set both decides survival and tallies neighbor
//! pressure; a second pass over the tally decides births. Only neighbors
//! of live cells ever enter the tally, so cells with zero live neighbors
//! are never candidates.

use rustc_hash::{FxBuildHasher, FxHashMap};

use super::cell::{Cell, Generation};

/// Compute the next generation from `current`.
///
/// B3/S23 on the bounded grid: a live cell with 2 or 3 live neighbors
/// survives, any other live cell dies, and a dead cell with exactly 3
/// live neighbors is born. Neighbor counting sees only in-bounds
/// positions, so rim cells evaluate against a smaller neighborhood.
///
/// Pure and total: no side effects, no panics for any in-bounds input,
/// and the result is a fresh set that is itself a subset of the grid.
/// `current` must respect the bounds invariant; that is asserted in debug
/// builds and trusted in release builds.
pub fn next_generation(current: &Generation) -> Generation {
    let mut next = Generation::with_capacity_and_hasher(current.len(), FxBuildHasher::default());
    // Every live cell touches at most 8 positions; pre-size for the
    // common interior case to keep the tally from rehashing mid-step.
    let mut neighbor_counts: FxHashMap<Cell, u8> =
        FxHashMap::with_capacity_and_hasher(current.len() * 8, FxBuildHasher::default());

    for &cell in current {
        debug_assert!(cell.in_bounds(), "out-of-bounds live cell {cell:?}");

        let mut live_neighbors = 0u8;
        for neighbor in cell.neighbors() {
            if current.contains(&neighbor) {
                live_neighbors += 1;
            }
            *neighbor_counts.entry(neighbor).or_insert(0) += 1;
        }

        if live_neighbors == 2 || live_neighbors == 3 {
            next.insert(cell);
        }
    }

    for (cell, count) in neighbor_counts {
        // Exactly 3 is a birth; for an already-surviving cell the insert
        // is a no-op on the set.
        if count == 3 {
            next.insert(cell);
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::next_generation;
    use crate::sparselife::cell::{Cell, Generation};

    fn generation_of(cells: &[(i32, i32)]) -> Generation {
        cells.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(next_generation(&Generation::default()).is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let current = generation_of(&[(5, 5)]);
        let _ = next_generation(&current);
        assert_eq!(current, generation_of(&[(5, 5)]));
    }

    #[test]
    fn birth_requires_exactly_three() {
        // Three live cells share (1, 1) as a common neighbor.
        let current = generation_of(&[(0, 0), (2, 0), (1, 2)]);
        let next = next_generation(&current);
        assert!(next.contains(&Cell::new(1, 1)));
        // None of the three originals has 2 or 3 live neighbors.
        assert_eq!(next, generation_of(&[(1, 1)]));
    }

    #[test]
    fn overcrowded_center_dies() {
        let mut cells = vec![(50, 50)];
        cells.extend(
            Cell::new(50, 50)
                .neighbors()
                .map(|cell| (cell.x, cell.y)),
        );
        let next = next_generation(&generation_of(&cells));
        assert!(!next.contains(&Cell::new(50, 50)));
    }
}
