use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use puzzle_board::{Catalog, Difficulty, Language, Screen};

mod constants;
mod events;
mod render;
mod state;
mod utils;

use state::{STATE, State};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let search = window.location().search().unwrap_or_default();
    let language = utils::get_query_param(&search, "lang")
        .map(|tag| Language::from_tag(&tag))
        .unwrap_or_default();

    let state = Rc::new(RefCell::new(State {
        window,
        document,
        catalog: Catalog::bundled(),
        screen: Screen::Menu,
        language,
        difficulty: Difficulty::Easy,
        current_animal: None,
        board: None,
        seed_nonce: 0,
        modal_open: false,
    }));
    STATE.with(|st| st.replace(Some(state.clone())));

    // Optional roster override, e.g. ?animals=data/more_animals.json.
    // Fire-and-forget; the bundled catalog is already on screen.
    if let Some(url) = utils::get_query_param(&search, "animals") {
        wasm_bindgen_futures::spawn_local(async move {
            events::load_catalog(&url).await;
        });
    }

    render::render(&state.borrow());
    Ok(())
}
