use crate::lang::{Language, strings};

/// Difficulty levels offered by the level selector. Each level maps to
/// the dimension of the square board, so the tile count is the square
/// of the grid size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn grid_size(self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    pub fn tile_count(self) -> usize {
        let n = self.grid_size();
        n * n
    }

    pub fn from_grid_size(n: usize) -> Option<Difficulty> {
        match n {
            2 => Some(Difficulty::Easy),
            3 => Some(Difficulty::Medium),
            4 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        let t = strings(lang);
        match self {
            Difficulty::Easy => t.easy,
            Difficulty::Medium => t.medium,
            Difficulty::Hard => t.hard,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

/// Row-major position of a slot on a `grid_size` x `grid_size` board.
pub fn slot_row_col(index: usize, grid_size: usize) -> (usize, usize) {
    (index / grid_size, index % grid_size)
}

/// Inverse of [`slot_row_col`].
pub fn slot_index(row: usize, col: usize, grid_size: usize) -> usize {
    row * grid_size + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_col_round_trips_for_every_grid() {
        for d in Difficulty::ALL {
            let n = d.grid_size();
            for index in 0..d.tile_count() {
                let (row, col) = slot_row_col(index, n);
                assert!(row < n && col < n);
                assert_eq!(slot_index(row, col, n), index);
            }
        }
    }

    #[test]
    fn grid_sizes_match_levels() {
        assert_eq!(Difficulty::Easy.grid_size(), 2);
        assert_eq!(Difficulty::Medium.grid_size(), 3);
        assert_eq!(Difficulty::Hard.grid_size(), 4);
        assert_eq!(Difficulty::from_grid_size(5), None);
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_grid_size(d.grid_size()), Some(d));
        }
    }
}
