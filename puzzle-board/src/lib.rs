pub mod board;
pub mod catalog;
pub mod grid;
pub mod lang;
pub mod screen;
pub mod shuffle;

pub use board::{DropOutcome, PuzzleBoard, Tile};
pub use catalog::{Animal, Catalog, Category};
pub use grid::{Difficulty, slot_index, slot_row_col};
pub use lang::{Language, UiStrings, strings};
pub use screen::{NavEvent, Screen, transition};
