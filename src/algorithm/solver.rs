//! Sequential scan-order solver
//!
//! Cells are visited layer by layer, row by row, column by column. Each cell
//! only looks at neighbours already decided: the cell to its left, the cell in
//! the previous row and the cell in the layer below. The candidate set is the
//! intersection of what those neighbours allow, and one candidate is drawn
//! uniformly. Decisions are never revisited, so a cell with no candidate ends
//! the run with `UnsatisfiableCell`.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::adjacency::AdjacencyIndex;
use crate::algorithm::bitset::CandidateSet;
use crate::io::error::{GenerationError, Result};
use crate::spatial::grid::{Dimensions, Grid};
use crate::spatial::tiles::{Direction, TileCatalog, VariantId};

/// Seeded random selector for reproducible uniform draws
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly pick one member of `candidates`, in ascending id order
    ///
    /// Returns `None` for an empty set.
    pub fn choose(&mut self, candidates: &CandidateSet) -> Option<VariantId> {
        let count = candidates.count();
        if count == 0 {
            return None;
        }
        candidates.nth(self.rng.random_range(0..count))
    }
}

/// Already decided neighbour of a cell, as a grid offset and the direction from
/// that neighbour towards the cell
struct DecidedNeighbour {
    offset: [usize; 3],
    towards_cell: Direction,
}

// Column x-1 touches through its right face, row y-1 through its back face,
// layer z-1 through its top face.
const DECIDED_NEIGHBOURS: [DecidedNeighbour; 3] = [
    DecidedNeighbour {
        offset: [1, 0, 0],
        towards_cell: Direction::PosY,
    },
    DecidedNeighbour {
        offset: [0, 1, 0],
        towards_cell: Direction::NegX,
    },
    DecidedNeighbour {
        offset: [0, 0, 1],
        towards_cell: Direction::PosZ,
    },
];

/// Fills a grid in scan order using a catalog and its adjacency index
pub struct GridSolver<'a> {
    catalog: &'a TileCatalog,
    index: &'a AdjacencyIndex,
    random_selector: RandomSelector,
}

impl<'a> GridSolver<'a> {
    /// Create a solver drawing from a generator seeded with `seed`
    pub fn new(catalog: &'a TileCatalog, index: &'a AdjacencyIndex, seed: u64) -> Self {
        Self {
            catalog,
            index,
            random_selector: RandomSelector::new(seed),
        }
    }

    /// Assign one variant to every cell
    ///
    /// # Errors
    ///
    /// Returns `UnsatisfiableCell` with the first cell whose decided neighbours
    /// admit no variant
    pub fn solve(&mut self, dimensions: Dimensions) -> Result<Grid> {
        self.solve_observed(dimensions, |_| {})
    }

    /// Assign one variant to every cell, reporting progress after each row
    ///
    /// `observer` receives the number of cells assigned so far.
    ///
    /// # Errors
    ///
    /// Returns `UnsatisfiableCell` with the first cell whose decided neighbours
    /// admit no variant
    pub fn solve_observed<F>(&mut self, dimensions: Dimensions, mut observer: F) -> Result<Grid>
    where
        F: FnMut(usize),
    {
        let mut grid = Grid::new(dimensions);
        let mut assigned = 0;

        for z in 0..dimensions.z {
            for y in 0..dimensions.y {
                for x in 0..dimensions.x {
                    let candidates = self.candidates_at(&grid, [x, y, z]);
                    let id = self
                        .random_selector
                        .choose(&candidates)
                        .ok_or(GenerationError::UnsatisfiableCell {
                            position: [x, y, z],
                        })?;
                    grid.set(x, y, z, id);
                }
                assigned += dimensions.x;
                observer(assigned);
            }
        }

        Ok(grid)
    }

    /// Variants consistent with every decided neighbour of `position`
    ///
    /// A cell without decided neighbours accepts the whole catalog. A decided
    /// neighbour holding an id unknown to the catalog leaves no candidates.
    pub fn candidates_at(&self, grid: &Grid, position: [usize; 3]) -> CandidateSet {
        let mut candidates = CandidateSet::all(self.catalog.len());

        for neighbour in &DECIDED_NEIGHBOURS {
            let Some(neighbour_id) = Self::decided_neighbour(grid, position, neighbour.offset)
            else {
                continue;
            };
            // A neighbour outside the catalog admits nothing
            let Some(variant) = self.catalog.get(neighbour_id) else {
                return CandidateSet::new(self.catalog.len());
            };

            let face = variant.faces.get(neighbour.towards_cell);
            candidates.retain_listed(self.index.neighbours(neighbour.towards_cell, face));

            if candidates.is_empty() {
                break;
            }
        }

        candidates
    }

    fn decided_neighbour(grid: &Grid, position: [usize; 3], offset: [usize; 3]) -> Option<VariantId> {
        let x = position[0].checked_sub(offset[0])?;
        let y = position[1].checked_sub(offset[1])?;
        let z = position[2].checked_sub(offset[2])?;
        grid.get(x, y, z)
    }
}
