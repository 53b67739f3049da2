/// Top-level screens of the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Menu,
    LevelSelect,
    Game,
}

/// Navigation requests raised by the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Play,
    SelectAnimal(u32),
    Back,
    Menu,
}

/// The single navigation transition function. Events that make no
/// sense on the current screen leave it unchanged.
pub fn transition(screen: Screen, event: NavEvent) -> Screen {
    match (screen, event) {
        (_, NavEvent::Menu) => Screen::Menu,
        (Screen::Menu, NavEvent::Play) => Screen::LevelSelect,
        (Screen::LevelSelect, NavEvent::SelectAnimal(_)) => Screen::Game,
        (Screen::LevelSelect, NavEvent::Back) => Screen::Menu,
        (Screen::Game, NavEvent::Back) => Screen::LevelSelect,
        (current, _) => current,
    }
}
