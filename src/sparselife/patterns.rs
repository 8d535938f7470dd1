//! Starting patterns and random world seeding.

use rand::RngCore;
use rand::SeedableRng;

use super::cell::{Cell, Generation, WORLD_HEIGHT, WORLD_WIDTH};

/// A named starting pattern as a literal coordinate list.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// The pattern's live set. Coordinates outside the grid are dropped.
    pub fn generation(&self) -> Generation {
        self.cells
            .iter()
            .map(|&(x, y)| Cell::new(x, y))
            .filter(|cell| cell.in_bounds())
            .collect()
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (1, 5), (2, 5), (1, 6), (2, 6),
            (11, 5), (11, 6), (11, 7), (12, 4), (12, 8), (13, 3), (13, 9),
            (14, 3), (14, 9), (15, 6), (16, 4), (16, 8), (17, 5), (17, 6),
            (17, 7), (18, 6), (21, 3), (21, 4), (21, 5), (22, 3), (22, 4),
            (22, 5), (23, 2), (23, 6), (25, 1), (25, 2), (25, 6), (25, 7),
            (35, 3), (35, 4), (36, 3), (36, 4),
        ],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(49, 50), (50, 50), (51, 50)],
    },
    Pattern {
        name: "Toad",
        cells: &[(50, 49), (51, 49), (52, 49), (49, 50), (50, 50), (51, 50)],
    },
    Pattern {
        name: "Beacon",
        cells: &[
            (30, 30), (31, 30), (30, 31), (31, 31),
            (32, 32), (33, 32), (32, 33), (33, 33),
        ],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            (42, 38), (43, 38), (44, 38), (48, 38), (49, 38), (50, 38),
            (40, 40), (45, 40), (47, 40), (52, 40),
            (40, 41), (45, 41), (47, 41), (52, 41),
            (40, 42), (45, 42), (47, 42), (52, 42),
            (42, 43), (43, 43), (44, 43), (48, 43), (49, 43), (50, 43),
            (42, 45), (43, 45), (44, 45), (48, 45), (49, 45), (50, 45),
            (40, 46), (45, 46), (47, 46), (52, 46),
            (40, 47), (45, 47), (47, 47), (52, 47),
            (40, 48), (45, 48), (47, 48), (52, 48),
            (42, 50), (43, 50), (44, 50), (48, 50), (49, 50), (50, 50),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(50, 49), (51, 49), (49, 50), (50, 50), (50, 51)],
    },
];

/// Seed a reproducible random world with roughly `density` of the grid
/// alive.
pub fn random_generation(seed: u64, density: f64) -> Generation {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let threshold = (u64::MAX as f64 * density) as u64;

    let mut cells = Generation::default();
    for y in 0..WORLD_HEIGHT {
        for x in 0..WORLD_WIDTH {
            if rng.next_u64() <= threshold {
                cells.insert(Cell::new(x, y));
            }
        }
    }
    cells
}
