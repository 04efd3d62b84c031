//! The collapse/propagate state machine
//!
//! One `step` call performs exactly one collapse attempt: select the
//! lowest-entropy open cell, commit it to a random remaining option, then
//! rebuild every open cell's options from the post-collapse grid. The grid
//! is replaced wholesale each step so propagation always reads a consistent
//! snapshot. A contradiction discards the grid and starts over; there is no
//! backtracking.

use crate::io::configuration::MAX_WAVE_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::wfc::catalog::TileCatalog;
use crate::wfc::cell::Cell;
use crate::wfc::options::OptionSet;
use crate::wfc::tile::Direction;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// What a single `step` call did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// One cell was committed to a tile
    Collapsed {
        /// Row of the collapsed cell
        row: usize,
        /// Column of the collapsed cell
        col: usize,
        /// The chosen tile index
        tile: usize,
    },
    /// A contradiction was hit and the grid was reinitialized
    Restarted,
    /// Every cell was already collapsed; nothing to do
    Resolved,
}

/// A row-major grid of cells collapsing against a tile catalog
///
/// Owns its randomness: the generator is seeded at construction so runs are
/// reproducible. The grid holds `rows * cols` cells indexed `row * cols +
/// col`.
#[derive(Clone, Debug)]
pub struct WaveGrid {
    catalog: TileCatalog,
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    rng: StdRng,
    restarts: usize,
}

impl WaveGrid {
    /// Create a grid of full-entropy cells over the given catalog
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_WAVE_DIMENSION`], or if the catalog holds no tiles.
    pub fn new(catalog: TileCatalog, rows: usize, cols: usize, seed: u64) -> Result<Self> {
        if rows == 0 || rows > MAX_WAVE_DIMENSION {
            return Err(invalid_parameter(
                "rows",
                &rows,
                &format!("must be between 1 and {MAX_WAVE_DIMENSION}"),
            ));
        }
        if cols == 0 || cols > MAX_WAVE_DIMENSION {
            return Err(invalid_parameter(
                "cols",
                &cols,
                &format!("must be between 1 and {MAX_WAVE_DIMENSION}"),
            ));
        }
        if catalog.is_empty() {
            return Err(invalid_parameter(
                "catalog",
                &"empty",
                &"at least one tile is required",
            ));
        }

        let cells = vec![Cell::full(catalog.len()); rows * cols];
        Ok(Self {
            catalog,
            cells,
            rows,
            cols,
            rng: StdRng::seed_from_u64(seed),
            restarts: 0,
        })
    }

    /// Perform one collapse-and-propagate iteration
    pub fn step(&mut self) -> StepOutcome {
        // Lowest-entropy candidates among open cells; a contradictory cell
        // has entropy zero and is always selected first
        let mut min_entropy = usize::MAX;
        let mut candidates: Vec<usize> = Vec::new();
        for (index, cell) in self.cells.iter().enumerate() {
            if cell.is_collapsed() {
                continue;
            }
            let entropy = cell.entropy();
            if entropy < min_entropy {
                min_entropy = entropy;
                candidates.clear();
            }
            if entropy == min_entropy {
                candidates.push(index);
            }
        }
        if candidates.is_empty() {
            return StepOutcome::Resolved;
        }

        let slot = self.rng.random_range(0..candidates.len());
        let Some(&index) = candidates.get(slot) else {
            self.restart();
            return StepOutcome::Restarted;
        };

        let choices = self
            .cells
            .get(index)
            .map(|cell| cell.options().to_vec())
            .unwrap_or_default();
        if choices.is_empty() {
            self.restart();
            return StepOutcome::Restarted;
        }
        let pick = self.rng.random_range(0..choices.len());
        let Some(&tile) = choices.get(pick) else {
            self.restart();
            return StepOutcome::Restarted;
        };

        // Commit before propagating so neighbors read the collapsed state
        if let Some(cell) = self.cells.get_mut(index) {
            cell.collapse(tile);
        }
        self.propagate();

        StepOutcome::Collapsed {
            row: index / self.cols,
            col: index % self.cols,
            tile,
        }
    }

    // Rebuilds the grid from the current snapshot. Collapsed cells carry
    // over unchanged; every open cell's options are recomputed from the
    // full tile range intersected with each present neighbor's allowance.
    fn propagate(&mut self) {
        let mut next = Vec::with_capacity(self.cells.len());
        for (index, cell) in self.cells.iter().enumerate() {
            if cell.is_collapsed() {
                next.push(cell.clone());
                continue;
            }
            let row = index / self.cols;
            let col = index % self.cols;
            let mut allowed = OptionSet::full(self.catalog.len());
            if let Some(above) = row.checked_sub(1).and_then(|r| self.cell_at(r, col)) {
                allowed.intersect_with(
                    &self
                        .catalog
                        .allowed_neighbors(above.options(), Direction::Down),
                );
            }
            if let Some(right) = self.cell_at(row, col + 1) {
                allowed.intersect_with(
                    &self
                        .catalog
                        .allowed_neighbors(right.options(), Direction::Left),
                );
            }
            if let Some(below) = self.cell_at(row + 1, col) {
                allowed.intersect_with(
                    &self
                        .catalog
                        .allowed_neighbors(below.options(), Direction::Up),
                );
            }
            if let Some(left) = col.checked_sub(1).and_then(|c| self.cell_at(row, c)) {
                allowed.intersect_with(
                    &self
                        .catalog
                        .allowed_neighbors(left.options(), Direction::Right),
                );
            }
            next.push(Cell::from_options(allowed));
        }
        self.cells = next;
    }

    /// Discard the grid and refill every cell at full entropy
    ///
    /// The random stream continues; use [`Self::restart_with_seed`] to begin
    /// a reproducible fresh run.
    pub fn restart(&mut self) {
        self.fill_fresh();
        self.restarts += 1;
    }

    /// Reseed the generator and start a fresh run
    pub fn restart_with_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.fill_fresh();
        self.restarts = 0;
    }

    fn fill_fresh(&mut self) {
        let tile_count = self.catalog.len();
        for cell in &mut self.cells {
            *cell = Cell::full(tile_count);
        }
    }

    /// Whether every cell has collapsed
    pub fn is_resolved(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }

    /// Number of collapsed cells
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_collapsed()).count()
    }

    /// Access a cell by row and column
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Mutable access to a cell, for hosts that seed or perturb the grid
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Grid height in cells
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width in cells
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// The catalog this grid collapses against
    pub const fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// Times the grid has been discarded, by contradiction or by hand
    pub const fn restarts(&self) -> usize {
        self.restarts
    }
}
