use glam::Vec2;

/// Uniform-bin partition of the unit square
///
/// Divides the square into `side × side` bins and supports gathering the
/// 3×3 block of bins around a point. The gather is complete for query radii
/// up to one bin side (`1 / side`); callers over-approximate and filter by
/// exact distance themselves.
#[derive(Clone, Debug)]
pub struct SpatialHash {
    bins: Vec<Vec<usize>>,
    side: usize,
    wrap: bool,
}

impl SpatialHash {
    /// Create an empty hash with `side × side` bins
    ///
    /// `wrap` makes edge queries reach across the opposite border, matching
    /// toroidal worlds. A zero side is promoted to one bin.
    pub fn new(side: usize, wrap: bool) -> Self {
        let side = side.max(1);
        Self {
            bins: vec![Vec::new(); side * side],
            side,
            wrap,
        }
    }

    /// Bins per axis
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Rebin every point, clearing previous contents
    ///
    /// Positions outside the unit square land in the border bins.
    pub fn rebuild(&mut self, positions: &[Vec2]) {
        for bin in &mut self.bins {
            bin.clear();
        }
        for (index, &position) in positions.iter().enumerate() {
            let bin = self.bin_of(position);
            if let Some(slot) = self.bins.get_mut(bin) {
                slot.push(index);
            }
        }
    }

    /// Collect candidate indices from the bins surrounding `position`
    ///
    /// Clears `out` first. The result is a superset of the true in-radius
    /// neighbor set and includes the query point's own index if binned.
    pub fn candidates_into(&self, position: Vec2, out: &mut Vec<usize>) {
        out.clear();

        // With fewer than three bins per axis a wrapped 3x3 block would
        // visit bins twice, so gather everything instead
        if self.wrap && self.side < 3 {
            for bin in &self.bins {
                out.extend_from_slice(bin);
            }
            return;
        }

        let (row, col) = self.coords_of(position);
        for row_offset in -1_i32..=1 {
            for col_offset in -1_i32..=1 {
                let Some(bin) = self.neighbor_bin(row, col, row_offset, col_offset) else {
                    continue;
                };
                if let Some(slot) = self.bins.get(bin) {
                    out.extend_from_slice(slot);
                }
            }
        }
    }

    fn neighbor_bin(
        &self,
        row: usize,
        col: usize,
        row_offset: i32,
        col_offset: i32,
    ) -> Option<usize> {
        let side = self.side as i32;
        let mut bin_row = row as i32 + row_offset;
        let mut bin_col = col as i32 + col_offset;
        if self.wrap {
            bin_row = bin_row.rem_euclid(side);
            bin_col = bin_col.rem_euclid(side);
        } else if bin_row < 0 || bin_row >= side || bin_col < 0 || bin_col >= side {
            return None;
        }
        Some(bin_row as usize * self.side + bin_col as usize)
    }

    fn coords_of(&self, position: Vec2) -> (usize, usize) {
        let limit = self.side as i32 - 1;
        let row = ((position.y * self.side as f32) as i32).clamp(0, limit) as usize;
        let col = ((position.x * self.side as f32) as i32).clamp(0, limit) as usize;
        (row, col)
    }

    fn bin_of(&self, position: Vec2) -> usize {
        let (row, col) = self.coords_of(position);
        row * self.side + col
    }
}
