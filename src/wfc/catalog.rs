use crate::wfc::options::OptionSet;
use crate::wfc::tile::{Direction, Tile};

/// One tile definition prior to adjacency analysis
///
/// Edge signatures are listed clockwise from the top: up, right, down, left.
#[derive(Clone, Debug)]
pub struct TileDef {
    /// Display name for the tile
    pub name: String,
    /// Edge signatures in up, right, down, left order
    pub edges: [String; 4],
}

impl TileDef {
    /// Create a definition from a name and four edge signatures
    pub fn new(name: impl Into<String>, edges: [&str; 4]) -> Self {
        Self {
            name: name.into(),
            edges: edges.map(String::from),
        }
    }
}

/// An ordered, immutable tile set with precomputed adjacency
///
/// Building the catalog runs the full O(n²) analysis pass: for every tile
/// and direction, every candidate whose opposing edge matches under the
/// reversal rule is recorded in the tile's adjacency set. Signatures that
/// match nothing simply yield empty sets; the catalog never fails to build.
#[derive(Clone, Debug)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
}

impl TileCatalog {
    /// Build a catalog and derive every tile's adjacency sets
    pub fn build(defs: Vec<TileDef>) -> Self {
        let tile_count = defs.len();
        let mut tiles: Vec<Tile> = defs
            .into_iter()
            .map(|def| Tile::new(def.name, def.edges, tile_count))
            .collect();

        // Candidates are matched against a snapshot so the pass can mutate
        // adjacency sets while reading edges
        let edges_view = tiles.clone();
        for tile in &mut tiles {
            for direction in Direction::ALL {
                for (candidate_index, candidate) in edges_view.iter().enumerate() {
                    if tile.accepts(candidate, direction) {
                        tile.permit(direction, candidate_index);
                    }
                }
            }
        }

        Self { tiles }
    }

    /// Number of tiles in the catalog
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test whether the catalog holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Access a tile by index
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// All tiles in definition order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tiles permitted next to any of `options`, in the given direction
    ///
    /// The union over each option's adjacency set for `direction`. This is
    /// the constraint a neighbor imposes on the cell sitting in `direction`
    /// from it.
    pub fn allowed_neighbors(&self, options: &OptionSet, direction: Direction) -> OptionSet {
        let mut allowed = OptionSet::new(self.len());
        for index in options.to_vec() {
            if let Some(tile) = self.tiles.get(index) {
                allowed.union_with(tile.allowed(direction));
            }
        }
        allowed
    }
}

/// The five-tile train-track catalog
///
/// A blank tile plus four three-armed track pieces, each named for the
/// direction its missing arm faces away from. Edge signature `ABA` marks a
/// crossing arm; `AAA` marks a plain border.
pub fn train_track() -> TileCatalog {
    TileCatalog::build(vec![
        TileDef::new("blank", ["AAA", "AAA", "AAA", "AAA"]),
        TileDef::new("up", ["ABA", "ABA", "AAA", "ABA"]),
        TileDef::new("right", ["ABA", "ABA", "ABA", "AAA"]),
        TileDef::new("down", ["AAA", "ABA", "ABA", "ABA"]),
        TileDef::new("left", ["ABA", "AAA", "ABA", "ABA"]),
    ])
}
