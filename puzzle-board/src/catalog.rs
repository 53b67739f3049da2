//! The animal roster shown on the level-select screen. Shipped as a
//! JSON file embedded at compile time; the front-end may fetch a
//! replacement catalog at startup.

use serde::{Deserialize, Serialize};

use crate::lang::{Language, strings};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Farm,
    Jungle,
    Pets,
    Aquatic,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Farm,
        Category::Jungle,
        Category::Pets,
        Category::Aquatic,
    ];

    pub fn label(self, lang: Language) -> &'static str {
        let t = strings(lang);
        match self {
            Category::Farm => t.farm,
            Category::Jungle => t.jungle,
            Category::Pets => t.pets,
            Category::Aquatic => t.aquatic,
        }
    }
}

/// One puzzle subject, with names and descriptions in both languages.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Animal {
    pub id: u32,
    pub name_en: String,
    pub name_es: String,
    pub category: Category,
    /// Image URL, also used for the per-tile background crops.
    pub image: String,
    /// Placeholder path for the celebration sound.
    pub sound: String,
    pub description_en: String,
    pub description_es: String,
}

impl Animal {
    pub fn name(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.name_en,
            Language::Es => &self.name_es,
        }
    }

    pub fn description(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.description_en,
            Language::Es => &self.description_es,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub animals: Vec<Animal>,
}

impl Catalog {
    pub fn from_json(text: &str) -> Result<Catalog, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// The catalog compiled into the binary. Falls back to an empty
    /// roster if the bundled file is malformed.
    pub fn bundled() -> Catalog {
        Catalog::from_json(include_str!("../../data/animals.json")).unwrap_or_default()
    }

    pub fn animal(&self, id: u32) -> Option<&Animal> {
        self.animals.iter().find(|a| a.id == id)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Animal> {
        self.animals.iter().filter(move |a| a.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = Catalog::bundled();
        assert!(!catalog.animals.is_empty());
        for category in Category::ALL {
            assert!(
                catalog.by_category(category).count() > 0,
                "empty category {category:?}"
            );
        }
    }

    #[test]
    fn bundled_ids_are_unique() {
        let catalog = Catalog::bundled();
        let mut ids: Vec<u32> = catalog.animals.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.animals.len());
    }

    #[test]
    fn lookup_and_language_selection() {
        let catalog = Catalog::bundled();
        let first = &catalog.animals[0];
        let found = catalog.animal(first.id).unwrap();
        assert_eq!(found.name(Language::En), first.name_en);
        assert_eq!(found.name(Language::Es), first.name_es);
        assert!(catalog.animal(u32::MAX).is_none());
    }
}
