use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Window};

use puzzle_board::{Catalog, Difficulty, Language, PuzzleBoard, Screen};

/// Global application state stored behind an `Rc<RefCell<_>>` so it can
/// be shared across the WASM callbacks.
#[derive(Clone)]
pub struct State {
    pub window: Window,
    pub document: Document,
    pub catalog: Catalog,
    pub screen: Screen,
    pub language: Language,
    pub difficulty: Difficulty,
    /// Subject of the puzzle currently on the game screen.
    pub current_animal: Option<u32>,
    pub board: Option<PuzzleBoard>,
    /// Mixed into the shuffle seed so successive puzzles differ.
    pub seed_nonce: u32,
    pub modal_open: bool,
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}

pub fn current() -> Option<Rc<RefCell<State>>> {
    STATE.with(|st| st.borrow().clone())
}
