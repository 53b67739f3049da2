//! The puzzle-board state machine: one board instance owns the tile
//! partition (tray vs. placed), validates drop attempts and detects
//! completion.

use crate::grid::Difficulty;
use crate::shuffle::fisher_yates;

/// One piece of the subdivided image. Identity never changes after
/// construction; only the placed flag mutates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub id: u32,
    /// Slot this tile occupies in the solved image, row-major.
    pub correct_index: usize,
    pub placed: bool,
}

/// Result of a drop attempt. `Completed` is the accepted drop that
/// filled the last open slot; it is reported at most once per board
/// instance so the celebration can never fire twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Placed,
    Completed,
    Rejected,
}

impl DropOutcome {
    pub fn accepted(self) -> bool {
        !matches!(self, DropOutcome::Rejected)
    }
}

/// State of a single puzzle at a fixed grid size.
///
/// Tiles live in exactly one of two places: the tray (in the shuffled
/// display order produced at construction) or their correct slot.
/// Drops on a wrong or occupied slot are rejected without any state
/// change, so an incorrectly placed tile cannot exist.
#[derive(Clone, Debug)]
pub struct PuzzleBoard {
    grid_size: usize,
    /// Indexed by tile id; correct indices form the set `0..n*n`.
    tiles: Vec<Tile>,
    /// Unplaced tile ids in shuffled display order.
    tray: Vec<u32>,
    /// Slot occupancy; `slots[i]` holds the id of the tile placed there.
    slots: Vec<Option<u32>>,
    solved_reported: bool,
}

impl PuzzleBoard {
    /// Builds a fresh board: `n*n` tiles with correct indices `0..n*n`,
    /// a seeded shuffle of the tray order and every slot empty.
    /// Subject or difficulty changes are a full reset through here.
    pub fn new(difficulty: Difficulty, seed: u32) -> PuzzleBoard {
        let grid_size = difficulty.grid_size();
        let count = grid_size * grid_size;
        let tiles = (0..count)
            .map(|i| Tile {
                id: i as u32,
                correct_index: i,
                placed: false,
            })
            .collect();
        let mut tray: Vec<u32> = (0..count as u32).collect();
        fisher_yates(seed, &mut tray);
        PuzzleBoard {
            grid_size,
            tiles,
            tray,
            slots: vec![None; count],
            solved_reported: false,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tile(&self, id: u32) -> Option<&Tile> {
        self.tiles.get(id as usize)
    }

    /// Unplaced tiles in the shuffled order produced at construction.
    pub fn tray(&self) -> impl Iterator<Item = &Tile> {
        self.tray.iter().map(|id| &self.tiles[*id as usize])
    }

    pub fn tray_len(&self) -> usize {
        self.tray.len()
    }

    /// Tile currently occupying `index`, if any.
    pub fn slot(&self, index: usize) -> Option<&Tile> {
        self.slots
            .get(index)
            .copied()
            .flatten()
            .map(|id| &self.tiles[id as usize])
    }

    /// Validates a drop. Accepted iff the tile exists, is still in the
    /// tray, the target is its correct slot and that slot is empty.
    /// Anything else (unknown id, wrong slot, occupied slot, repeated
    /// placement) is `Rejected` and mutates nothing.
    pub fn attempt_place(&mut self, tile_id: u32, slot: usize) -> DropOutcome {
        let Some(tile) = self.tiles.get(tile_id as usize) else {
            return DropOutcome::Rejected;
        };
        // correct_index == slot also guarantees the slot is in range.
        if tile.placed || tile.correct_index != slot || self.slots[slot].is_some() {
            return DropOutcome::Rejected;
        }
        self.tiles[tile_id as usize].placed = true;
        self.slots[slot] = Some(tile_id);
        self.tray.retain(|id| *id != tile_id);
        if self.is_complete() && !self.solved_reported {
            self.solved_reported = true;
            return DropOutcome::Completed;
        }
        DropOutcome::Placed
    }

    /// True iff every slot is occupied (equivalently the tray is empty).
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }
}
