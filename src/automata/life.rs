//! Conway's Game of Life on a frozen-border board

use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};

// Smallest board with at least one evolving cell inside the border
const MIN_BOARD_DIMENSION: usize = 3;

/// A dead/alive cell board advanced by the standard life rules
///
/// The outermost ring of cells never changes: `tick` evolves the interior
/// only, and `randomize` leaves the border dead. Generations are
/// double-buffered so every neighbor count reads the previous board.
#[derive(Clone, Debug)]
pub struct LifeBoard {
    cells: Array2<u8>,
    scratch: Array2<u8>,
}

impl LifeBoard {
    /// Build an all-dead board
    ///
    /// # Errors
    ///
    /// Returns an error when either dimension is below three cells, which
    /// would leave no interior to evolve.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < MIN_BOARD_DIMENSION {
            return Err(invalid_parameter("rows", &rows, &"must be at least 3"));
        }
        if cols < MIN_BOARD_DIMENSION {
            return Err(invalid_parameter("cols", &cols, &"must be at least 3"));
        }
        Ok(Self {
            cells: Array2::zeros((rows, cols)),
            scratch: Array2::zeros((rows, cols)),
        })
    }

    /// Seed every interior cell alive with the given probability
    ///
    /// # Errors
    ///
    /// Returns an error when `alive_probability` falls outside `[0, 1]`.
    pub fn randomize(&mut self, seed: u64, alive_probability: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&alive_probability) {
            return Err(invalid_parameter(
                "alive_probability",
                &alive_probability,
                &"must lie in [0, 1]",
            ));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let (rows, cols) = self.cells.dim();
        for ((row, col), cell) in self.cells.indexed_iter_mut() {
            let border = row == 0 || col == 0 || row == rows - 1 || col == cols - 1;
            *cell = if border {
                0
            } else {
                u8::from(rng.random::<f64>() < alive_probability)
            };
        }
        Ok(())
    }

    /// Advance one generation
    pub fn tick(&mut self) {
        self.scratch.clone_from(&self.cells);
        let (rows, cols) = self.cells.dim();
        for row in 1..rows - 1 {
            for col in 1..cols - 1 {
                let mut neighbors = 0u8;
                for neighbor_row in row - 1..=row + 1 {
                    for neighbor_col in col - 1..=col + 1 {
                        if neighbor_row == row && neighbor_col == col {
                            continue;
                        }
                        neighbors += self
                            .cells
                            .get((neighbor_row, neighbor_col))
                            .copied()
                            .unwrap_or(0);
                    }
                }

                let alive = self.cells.get((row, col)).copied().unwrap_or(0) == 1;
                let next = match (alive, neighbors) {
                    (true, 2 | 3) | (false, 3) => 1,
                    _ => 0,
                };
                if let Some(cell) = self.scratch.get_mut((row, col)) {
                    *cell = next;
                }
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Force one cell dead or alive, ignoring positions off the board
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if let Some(cell) = self.cells.get_mut((row, col)) {
            *cell = u8::from(alive);
        }
    }

    /// Whether the cell at the given position is alive
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)).copied().unwrap_or(0) == 1
    }

    /// Number of live cells on the whole board
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == 1).count()
    }

    /// Number of board rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of board columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }
}
