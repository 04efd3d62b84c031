use crate::wfc::options::OptionSet;

/// The four grid directions, in edge-signature order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the previous row
    Up,
    /// Toward the next column
    Right,
    /// Toward the next row
    Down,
    /// Toward the previous column
    Left,
}

impl Direction {
    /// All directions in edge-signature order: up, right, down, left
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The facing direction: up pairs with down, right with left
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Position of this direction in per-tile edge signature arrays
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }
}

/// Immutable catalog entry with four edge signatures and derived adjacency
///
/// The per-direction adjacency sets are empty until the owning catalog runs
/// its analysis pass over the complete tile list.
#[derive(Clone, Debug)]
pub struct Tile {
    name: String,
    edges: [String; 4],
    up: OptionSet,
    right: OptionSet,
    down: OptionSet,
    left: OptionSet,
}

impl Tile {
    pub(crate) fn new(name: String, edges: [String; 4], tile_count: usize) -> Self {
        Self {
            name,
            edges,
            up: OptionSet::new(tile_count),
            right: OptionSet::new(tile_count),
            down: OptionSet::new(tile_count),
            left: OptionSet::new(tile_count),
        }
    }

    /// The tile's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The edge signature facing the given direction
    pub fn edge(&self, direction: Direction) -> &str {
        self.edges
            .get(direction.index())
            .map_or("", String::as_str)
    }

    /// Tiles that may sit adjacent in the given direction
    pub const fn allowed(&self, direction: Direction) -> &OptionSet {
        match direction {
            Direction::Up => &self.up,
            Direction::Right => &self.right,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
        }
    }

    pub(crate) fn permit(&mut self, direction: Direction, tile: usize) {
        let set = match direction {
            Direction::Up => &mut self.up,
            Direction::Right => &mut self.right,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
        };
        set.insert(tile);
    }

    /// Whether `candidate` may sit adjacent to this tile in `direction`
    ///
    /// The candidate's opposite-facing edge, read in reverse, must equal this
    /// tile's edge in the queried direction. The reversal accounts for the
    /// two tiles viewing their shared border from opposite sides.
    pub fn accepts(&self, candidate: &Self, direction: Direction) -> bool {
        candidate.edge(direction.opposite()) == reversed(self.edge(direction))
    }
}

/// An edge signature read back to front
pub fn reversed(edge: &str) -> String {
    edge.chars().rev().collect()
}
