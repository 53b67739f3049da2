//! Bilingual UI strings. The active language is always passed
//! explicitly; it is never inferred from rendered text.

/// UI languages. Spanish is the startup default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    En,
    #[default]
    Es,
}

impl Language {
    /// Normalizes a BCP 47-ish tag ("en", "en-US", "es_MX", ...).
    /// Anything that is not English falls back to Spanish.
    pub fn from_tag(tag: &str) -> Language {
        if tag.to_ascii_lowercase().starts_with("en") {
            Language::En
        } else {
            Language::Es
        }
    }

    pub fn toggle(self) -> Language {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }
}

/// The full translation table for one language.
pub struct UiStrings {
    pub play: &'static str,
    pub learn: &'static str,
    pub sounds: &'static str,
    pub settings: &'static str,
    pub select_a_puzzle: &'static str,
    pub back_to_menu: &'static str,
    pub well_done: &'static str,
    pub you_did_it: &'static str,
    pub play_again: &'static str,
    pub easy: &'static str,
    pub medium: &'static str,
    pub hard: &'static str,
    pub level: &'static str,
    pub pieces: &'static str,
    pub coming_soon: &'static str,
    pub farm: &'static str,
    pub jungle: &'static str,
    pub pets: &'static str,
    pub aquatic: &'static str,
}

static EN: UiStrings = UiStrings {
    play: "Play",
    learn: "Learn",
    sounds: "Sounds",
    settings: "Settings",
    select_a_puzzle: "Select a Puzzle",
    back_to_menu: "Back to Menu",
    well_done: "Well Done!",
    you_did_it: "You did it!",
    play_again: "Play Again",
    easy: "Easy",
    medium: "Medium",
    hard: "Hard",
    level: "Level",
    pieces: "Pieces",
    coming_soon: "Coming soon!",
    farm: "Farm",
    jungle: "Jungle",
    pets: "Pets",
    aquatic: "Aquatic",
};

static ES: UiStrings = UiStrings {
    play: "Jugar",
    learn: "Aprender",
    sounds: "Sonidos",
    settings: "Ajustes",
    select_a_puzzle: "Elige un Puzzle",
    back_to_menu: "Volver al Menú",
    well_done: "¡Muy Bien!",
    you_did_it: "¡Lo lograste!",
    play_again: "Jugar de Nuevo",
    easy: "Fácil",
    medium: "Medio",
    hard: "Difícil",
    level: "Nivel",
    pieces: "Piezas",
    coming_soon: "¡Muy pronto!",
    farm: "Granja",
    jungle: "Selva",
    pets: "Mascotas",
    aquatic: "Acuáticos",
};

pub fn strings(lang: Language) -> &'static UiStrings {
    match lang {
        Language::En => &EN,
        Language::Es => &ES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_normalization() {
        assert_eq!(Language::from_tag("en"), Language::En);
        assert_eq!(Language::from_tag("EN-us"), Language::En);
        assert_eq!(Language::from_tag("es_MX"), Language::Es);
        assert_eq!(Language::from_tag("fr"), Language::Es);
    }

    #[test]
    fn toggle_flips_between_the_two() {
        assert_eq!(Language::En.toggle(), Language::Es);
        assert_eq!(Language::Es.toggle(), Language::En);
    }
}
