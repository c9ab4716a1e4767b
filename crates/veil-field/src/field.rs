//! The [`EffectField`] cell map and its wholesale rebuild.

use indexmap::IndexMap;
use veil_core::{InfluenceMask, Vec2};

use crate::emitter::Emitter;

/// Integer cell coordinates: world position floored by cell size.
pub type CellCoord = (i32, i32);

/// A sparse mapping from discretized 2D cells to aggregated influence.
///
/// Each cell holds the bitwise OR of every active emitter whose circular
/// footprint reaches the cell's sample point (the cell origin). The map
/// is cleared and rebuilt wholesale on any change to the emitter set or
/// positions: OR aggregation is commutative and order-independent, so a
/// full rebuild is deterministic, and it stays correct under overlap and
/// removal where incremental subtraction would not.
///
/// Cells are stored in an [`IndexMap`] so iteration order is the
/// deterministic insertion order of the last rebuild.
#[derive(Clone, Debug)]
pub struct EffectField {
    cells: IndexMap<CellCoord, InfluenceMask>,
    cell_size: f32,
}

impl EffectField {
    /// Create an empty field with the given cell size in world units.
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is not strictly positive; the coordinator
    /// validates its configuration before constructing a field.
    pub fn new(cell_size: f32) -> Self {
        assert!(
            cell_size.is_finite() && cell_size > 0.0,
            "cell_size must be positive, got {cell_size}"
        );
        Self {
            cells: IndexMap::new(),
            cell_size,
        }
    }

    /// The configured cell size in world units.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// The cell containing `position`.
    pub fn cell_of(&self, position: Vec2) -> CellCoord {
        (
            (position.x / self.cell_size).floor() as i32,
            (position.y / self.cell_size).floor() as i32,
        )
    }

    /// The world-space sample point of a cell (its origin corner).
    fn sample_point(&self, cell: CellCoord) -> Vec2 {
        Vec2::new(cell.0 as f32 * self.cell_size, cell.1 as f32 * self.cell_size)
    }

    /// Clear the map and re-aggregate every active emitter.
    ///
    /// For each active emitter, every cell inside its bounding square
    /// whose sample point lies within `radius` of the emitter position
    /// (inclusive Euclidean test — the footprint is circular, not
    /// square) receives the emitter's influence bits via OR.
    pub fn rebuild<'a>(&mut self, emitters: impl IntoIterator<Item = &'a Emitter>) {
        self.cells.clear();
        for emitter in emitters {
            if emitter.is_active() {
                self.accumulate(emitter);
            }
        }
    }

    /// OR one emitter's footprint into the map.
    fn accumulate(&mut self, emitter: &Emitter) {
        let pos = emitter.position();
        let radius = emitter.radius();
        let radius_sq = radius * radius;

        let min_x = ((pos.x - radius) / self.cell_size).ceil() as i32;
        let max_x = ((pos.x + radius) / self.cell_size).floor() as i32;
        let min_y = ((pos.y - radius) / self.cell_size).ceil() as i32;
        let max_y = ((pos.y + radius) / self.cell_size).floor() as i32;

        for cy in min_y..=max_y {
            for cx in min_x..=max_x {
                let sample = self.sample_point((cx, cy));
                if sample.distance_squared(pos) <= radius_sq {
                    let entry = self
                        .cells
                        .entry((cx, cy))
                        .or_insert(InfluenceMask::EMPTY);
                    *entry |= emitter.influence();
                }
            }
        }
    }

    /// The aggregated influence at a world position.
    ///
    /// Floors the position to a cell; positions outside every footprint
    /// return [`InfluenceMask::EMPTY`] rather than erroring.
    pub fn sample(&self, position: Vec2) -> InfluenceMask {
        let cell = self.cell_of(position);
        self.cells
            .get(&cell)
            .copied()
            .unwrap_or(InfluenceMask::EMPTY)
    }

    /// Number of cells with non-empty influence.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell carries influence.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Drop every cell without rebuilding.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate over `(cell, mask)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, InfluenceMask)> + '_ {
        self.cells.iter().map(|(&cell, &mask)| (cell, mask))
    }
}
