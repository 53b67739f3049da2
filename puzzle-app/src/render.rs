//! DOM rendering. Each screen is rebuilt as markup inside `#app`, then
//! the interactive elements are wired up with closures.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, HtmlElement};

use puzzle_board::{Animal, Category, Difficulty, Language, NavEvent, Screen, slot_row_col, strings};

use crate::constants::BOARD_SIZE_PX;
use crate::events;
use crate::state::State;

pub fn render(s: &State) {
    let Some(root) = element(s, "app") else { return };
    let mut html = top_bar_html(s);
    match s.screen {
        Screen::Menu => html.push_str(&menu_html(s)),
        Screen::LevelSelect => html.push_str(&level_select_html(s)),
        Screen::Game => html.push_str(&game_html(s)),
    }
    if s.modal_open {
        html.push_str(&modal_html(s));
    }
    root.set_inner_html(&html);
    wire(s);
}

fn element(s: &State, id: &str) -> Option<HtmlElement> {
    s.document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn on_click(s: &State, id: &str, handler: impl FnMut() + 'static) {
    if let Some(el) = element(s, id) {
        let cb = Closure::<dyn FnMut()>::wrap(Box::new(handler));
        el.set_onclick(Some(cb.as_ref().unchecked_ref()));
        cb.forget();
    }
}

fn wire(s: &State) {
    on_click(s, "langBtn", events::toggle_language);
    if let Some(sel) = element(s, "difficultySel") {
        let cb = Closure::<dyn FnMut()>::wrap(Box::new(events::difficulty_changed));
        sel.set_onchange(Some(cb.as_ref().unchecked_ref()));
        cb.forget();
    }
    match s.screen {
        Screen::Menu => {
            on_click(s, "playBtn", || events::nav(NavEvent::Play));
            for id in ["learnBtn", "soundsBtn", "settingsBtn"] {
                on_click(s, id, events::placeholder_clicked);
            }
        }
        Screen::LevelSelect => {
            on_click(s, "backBtn", || events::nav(NavEvent::Back));
            for animal in &s.catalog.animals {
                let id = animal.id;
                on_click(s, &format!("animal-{id}"), move || {
                    events::nav(NavEvent::SelectAnimal(id))
                });
            }
        }
        Screen::Game => {
            on_click(s, "backBtn", || events::nav(NavEvent::Back));
            wire_board(s);
            wire_tray(s);
        }
    }
    if s.modal_open {
        on_click(s, "playAgainBtn", || events::nav(NavEvent::Back));
        on_click(s, "menuBtn", || events::nav(NavEvent::Menu));
    }
}

fn wire_board(s: &State) {
    let Some(board) = s.board.as_ref() else { return };
    for slot in 0..board.tile_count() {
        let Some(el) = element(s, &format!("slot-{slot}")) else {
            continue;
        };
        let ondrop = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
            events::handle_drop(e, slot)
        }));
        el.set_ondrop(Some(ondrop.as_ref().unchecked_ref()));
        ondrop.forget();
        // Drop targets must cancel dragover or the browser refuses drops.
        let onover = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(|e: DragEvent| {
            e.prevent_default();
        }));
        el.set_ondragover(Some(onover.as_ref().unchecked_ref()));
        onover.forget();
    }
}

fn wire_tray(s: &State) {
    let Some(board) = s.board.as_ref() else { return };
    for tile in board.tray() {
        let Some(el) = element(s, &format!("tile-{}", tile.id)) else {
            continue;
        };
        let id = tile.id;
        let onstart = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
            events::handle_drag_start(e, id)
        }));
        el.set_ondragstart(Some(onstart.as_ref().unchecked_ref()));
        onstart.forget();
    }
}

fn top_bar_html(s: &State) -> String {
    let t = strings(s.language);
    let mut options = String::new();
    for d in Difficulty::ALL {
        let selected = if d == s.difficulty { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>",
            d.grid_size(),
            d.label(s.language)
        ));
    }
    let lang_label = match s.language {
        Language::En => "Español",
        Language::Es => "English",
    };
    format!(
        "<div class=\"top-bar\">\
         <label class=\"level-label\">{}: <select id=\"difficultySel\">{options}</select></label>\
         <button id=\"langBtn\" class=\"lang-btn\">{lang_label}</button>\
         </div>",
        t.level
    )
}

fn menu_html(s: &State) -> String {
    let t = strings(s.language);
    format!(
        "<div class=\"screen menu\">\
         <h1 class=\"title\">Animales Puzzle Kids</h1>\
         <p class=\"subtitle\">Lite</p>\
         <button id=\"playBtn\" class=\"menu-btn\">🧩 {}</button>\
         <button id=\"learnBtn\" class=\"menu-btn\">💡 {}</button>\
         <button id=\"soundsBtn\" class=\"menu-btn\">🔊 {}</button>\
         <button id=\"settingsBtn\" class=\"menu-btn\">⚙️ {}</button>\
         </div>",
        t.play, t.learn, t.sounds, t.settings
    )
}

fn level_select_html(s: &State) -> String {
    let t = strings(s.language);
    let mut html = format!(
        "<div class=\"screen level-select\">\
         <button id=\"backBtn\" class=\"back-btn\">← {}</button>\
         <h1>{}</h1>",
        t.back_to_menu, t.select_a_puzzle
    );
    for category in Category::ALL {
        let animals: Vec<&Animal> = s.catalog.by_category(category).collect();
        if animals.is_empty() {
            continue;
        }
        html.push_str(&format!(
            "<section class=\"category\"><h2>{}</h2><div class=\"animal-grid\">",
            category.label(s.language)
        ));
        for animal in animals {
            let name = animal.name(s.language);
            html.push_str(&format!(
                "<button id=\"animal-{}\" class=\"animal-card\">\
                 <img src=\"{}\" alt=\"{name}\"><span>{name}</span>\
                 </button>",
                animal.id, animal.image
            ));
        }
        html.push_str("</div></section>");
    }
    html.push_str("</div>");
    html
}

fn game_html(s: &State) -> String {
    let t = strings(s.language);
    let Some(board) = s.board.as_ref() else {
        return String::new();
    };
    let animal = s.current_animal.and_then(|id| s.catalog.animal(id));
    let (name, image) = match animal {
        Some(a) => (a.name(s.language), a.image.as_str()),
        None => ("", ""),
    };
    let n = board.grid_size();
    let tile_px = BOARD_SIZE_PX / n as f64;

    let mut html = format!(
        "<div class=\"screen game\">\
         <div class=\"game-header\">\
         <button id=\"backBtn\" class=\"back-btn\">← {}</button>\
         <h1>{name}</h1>\
         </div>\
         <div class=\"game-body\">",
        t.select_a_puzzle
    );

    // The target grid: one drop slot per cell, filled cells show the
    // already placed tile.
    html.push_str(&format!(
        "<div id=\"board\" class=\"board\" style=\"display:grid;\
         grid-template-columns:repeat({n},1fr);gap:4px;\
         width:{BOARD_SIZE_PX}px;height:{BOARD_SIZE_PX}px;\">"
    ));
    for slot in 0..board.tile_count() {
        let inner = match board.slot(slot) {
            Some(tile) => format!(
                "<div class=\"tile placed\" style=\"{}\"></div>",
                tile_style(image, tile.correct_index, n, tile_px)
            ),
            None => String::new(),
        };
        html.push_str(&format!(
            "<div id=\"slot-{slot}\" class=\"slot\">{inner}</div>"
        ));
    }
    html.push_str("</div>");

    // The tray keeps the shuffled order from construction.
    html.push_str(&format!(
        "<div class=\"tray\"><h2>{}</h2><div id=\"tray\" class=\"tray-grid\">",
        t.pieces
    ));
    for tile in board.tray() {
        html.push_str(&format!(
            "<div id=\"tile-{}\" class=\"tile\" draggable=\"true\" style=\"{}\"></div>",
            tile.id,
            tile_style(image, tile.correct_index, n, tile_px)
        ));
    }
    html.push_str("</div></div></div></div>");
    html
}

/// Crops the subject image to the tile's sub-region: the tile at
/// row-major index i shows the cell (i / n, i % n) of the full image.
fn tile_style(image: &str, correct_index: usize, grid_size: usize, tile_px: f64) -> String {
    let (row, col) = slot_row_col(correct_index, grid_size);
    let full_px = tile_px * grid_size as f64;
    format!(
        "width:{tile_px}px;height:{tile_px}px;\
         background-image:url('{image}');\
         background-size:{full_px}px {full_px}px;\
         background-position:{}px {}px;",
        -(col as f64) * tile_px,
        -(row as f64) * tile_px
    )
}

fn modal_html(s: &State) -> String {
    let t = strings(s.language);
    let Some(animal) = s.current_animal.and_then(|id| s.catalog.animal(id)) else {
        return String::new();
    };
    let name = animal.name(s.language);
    format!(
        "<div id=\"modal\" class=\"modal-overlay\"><div class=\"modal\">\
         <h1>{}</h1>\
         <h2>{}</h2>\
         <img src=\"{}\" alt=\"{name}\">\
         <h3>{name}</h3>\
         <p>{}</p>\
         <button id=\"playAgainBtn\" class=\"modal-btn\">{}</button>\
         <button id=\"menuBtn\" class=\"modal-btn\">{}</button>\
         </div></div>",
        t.well_done,
        t.you_did_it,
        animal.image,
        animal.description(s.language),
        t.play_again,
        t.back_to_menu
    )
}
