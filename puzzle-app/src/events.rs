//! Event handlers. Each handler pulls the shared state from the
//! thread-local slot, mutates it, drops the borrow, then re-renders.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, HtmlElement, HtmlSelectElement};

use puzzle_board::shuffle::splitmix32;
use puzzle_board::{
    Catalog, Difficulty, DropOutcome, NavEvent, PuzzleBoard, Screen, strings, transition,
};

use crate::constants::{COMPLETION_DELAY_MS, SHAKE_DURATION_MS};
use crate::render;
use crate::state::{self, State};
use crate::utils::log;

/// Handles a navigation request and any side effects of entering or
/// leaving the game screen.
pub fn nav(event: NavEvent) {
    let Some(rc) = state::current() else { return };
    {
        let mut s = rc.borrow_mut();
        let next = transition(s.screen, event);
        if let NavEvent::SelectAnimal(id) = event
            && next == Screen::Game
        {
            s.current_animal = Some(id);
            rebuild_board(&mut s);
        }
        if next != Screen::Game {
            s.board = None;
            s.modal_open = false;
            if next == Screen::Menu {
                s.current_animal = None;
            }
        }
        s.screen = next;
    }
    render::render(&rc.borrow());
}

pub fn toggle_language() {
    let Some(rc) = state::current() else { return };
    {
        let mut s = rc.borrow_mut();
        s.language = s.language.toggle();
    }
    render::render(&rc.borrow());
}

/// Reads the difficulty selector and applies it. A change while a
/// puzzle is on screen is a full reset of that puzzle.
pub fn difficulty_changed() {
    let Some(rc) = state::current() else { return };
    {
        let mut s = rc.borrow_mut();
        let picked = s
            .document
            .get_element_by_id("difficultySel")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
            .and_then(|sel| sel.value().parse::<usize>().ok())
            .and_then(Difficulty::from_grid_size);
        let Some(picked) = picked else { return };
        if picked == s.difficulty {
            return;
        }
        s.difficulty = picked;
        if s.screen == Screen::Game {
            rebuild_board(&mut s);
        }
    }
    render::render(&rc.borrow());
}

/// Menu entries that only exist as teasers.
pub fn placeholder_clicked() {
    let Some(rc) = state::current() else { return };
    let s = rc.borrow();
    let _ = s.window.alert_with_message(strings(s.language).coming_soon);
}

/// A tile starts being dragged: stash its id on the drag payload.
pub fn handle_drag_start(e: DragEvent, tile_id: u32) {
    if let Some(dt) = e.data_transfer() {
        let _ = dt.set_data("tileId", &tile_id.to_string());
    }
}

/// A tile was released over a slot. Rejections shake the target and
/// change nothing; the accepted drop that completes the board arms the
/// one-shot celebration timer.
pub fn handle_drop(e: DragEvent, slot: usize) {
    e.prevent_default();
    let Some(rc) = state::current() else { return };
    let outcome = {
        let mut s = rc.borrow_mut();
        let tile_id = e
            .data_transfer()
            .and_then(|dt| dt.get_data("tileId").ok())
            .and_then(|v| v.parse::<u32>().ok());
        let (Some(board), Some(tile_id)) = (s.board.as_mut(), tile_id) else {
            return;
        };
        board.attempt_place(tile_id, slot)
    };
    match outcome {
        DropOutcome::Rejected => {
            if let Some(target) = e
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            {
                shake(&rc.borrow(), target);
            }
        }
        DropOutcome::Placed => render::render(&rc.borrow()),
        DropOutcome::Completed => {
            render::render(&rc.borrow());
            schedule_completion(&rc.borrow());
        }
    }
}

/// Replaces the catalog with one fetched at start-up (`?animals=` URL).
pub async fn load_catalog(url: &str) {
    let Some(rc) = state::current() else { return };
    let window = rc.borrow().window.clone();
    let Some(text) = crate::utils::fetch_text(&window, url).await else {
        log(&format!("failed to fetch catalog '{url}'"));
        return;
    };
    match serde_json::from_str::<Catalog>(&text) {
        Ok(catalog) => {
            {
                let mut s = rc.borrow_mut();
                s.catalog = catalog;
            }
            render::render(&rc.borrow());
        }
        Err(err) => log(&format!("invalid catalog '{url}': {err}")),
    }
}

fn rebuild_board(s: &mut State) {
    if s.current_animal.is_some() {
        let seed = fresh_seed(s);
        s.board = Some(PuzzleBoard::new(s.difficulty, seed));
        s.modal_open = false;
    }
}

/// Wall clock mixed with a counter so back-to-back puzzles still get
/// distinct shuffles.
fn fresh_seed(s: &mut State) -> u32 {
    s.seed_nonce = s.seed_nonce.wrapping_add(1);
    splitmix32((js_sys::Date::now() as u32) ^ s.seed_nonce.wrapping_mul(0x9E37_79B9))
}

fn shake(s: &State, target: HtmlElement) {
    let _ = target.class_list().add_1("shake");
    let cb = Closure::once_into_js(move || {
        let _ = target.class_list().remove_1("shake");
    });
    let _ = s
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            SHAKE_DURATION_MS,
        );
}

/// Short pause between the last tile landing and the modal. The core
/// reports `Completed` once per board, so this cannot double-fire.
fn schedule_completion(s: &State) {
    let cb = Closure::once_into_js(move || {
        let Some(rc) = state::current() else { return };
        {
            let mut s = rc.borrow_mut();
            if s.screen != Screen::Game {
                return;
            }
            s.modal_open = true;
            if let Some(id) = s.current_animal
                && let Some(animal) = s.catalog.animal(id)
            {
                // Stand-in for real audio playback.
                log(&format!("playing sound: {}", animal.sound));
            }
        }
        render::render(&rc.borrow());
    });
    let _ = s
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            COMPLETION_DELAY_MS,
        );
}
