use crate::wfc::options::OptionSet;

/// Mutable per-position solver state
///
/// Holds the set of tiles still possible at one grid position and whether
/// the position has been committed to exactly one of them. A cell is built
/// at full entropy, narrows as neighbors collapse, and is immutable once
/// collapsed. An empty option set is a contradiction and triggers a grid
/// restart on the step that selects it.
#[derive(Clone, Debug)]
pub struct Cell {
    options: OptionSet,
    collapsed: bool,
}

impl Cell {
    /// Create an uncollapsed cell holding every tile index below `tile_count`
    pub fn full(tile_count: usize) -> Self {
        Self {
            options: OptionSet::full(tile_count),
            collapsed: false,
        }
    }

    /// Create an uncollapsed cell from a precomputed option set
    pub const fn from_options(options: OptionSet) -> Self {
        Self {
            options,
            collapsed: false,
        }
    }

    /// Commit this cell to a single tile
    pub fn collapse(&mut self, tile: usize) {
        self.options.clear();
        self.options.insert(tile);
        self.collapsed = true;
    }

    /// Remove every remaining option, leaving the cell contradictory
    pub fn clear_options(&mut self) {
        self.options.clear();
    }

    /// Whether the cell has been committed to one tile
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// The tiles still possible at this position
    pub const fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Count of remaining options
    pub fn entropy(&self) -> usize {
        self.options.count()
    }

    /// The committed tile, if the cell holds exactly one option
    pub fn sole_option(&self) -> Option<usize> {
        self.options.sole()
    }
}
