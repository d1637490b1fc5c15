//! The restaurant's fixed menu.
//!
//! Sets are fixed-price bundles ordered as a single unit. The catalogue is
//! compiled in; the cart only ever accepts IDs found here, and name and price
//! always come from the catalogue rather than from the request.

use crate::types::{MenuItemId, Price};

/// A fixed-price bundle of food items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSet {
    pub id: MenuItemId,
    pub name: &'static str,
    /// Serving size label, e.g. `1 Pax`.
    pub portion: &'static str,
    price_ringgit: i64,
    pub includes: &'static [&'static str],
    pub sambal: &'static [&'static str],
}

impl MenuSet {
    /// Price of one set.
    #[must_use]
    pub fn price(&self) -> Price {
        Price::from_ringgit(self.price_ringgit)
    }
}

/// A titled group of sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSection {
    pub title: &'static str,
    pub tagline: &'static str,
    pub sets: &'static [MenuSet],
}

/// A sambal with its tasting note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sambal {
    pub name: &'static str,
    pub note: &'static str,
}

const SET_INCLUDES_BEBEK: &[&str] = &["Nasi", "Bebek", "Sup", "kicap", "jukut goreng"];
const SET_INCLUDES_AYAM: &[&str] = &["Nasi", "Ayam Kampung", "Sup", "kicap", "jukut goreng"];

const BEBEK_SETS: &[MenuSet] = &[
    MenuSet {
        id: MenuItemId::new(1),
        name: "Set Bebek A",
        portion: "1 Pax",
        price_ringgit: 17,
        includes: SET_INCLUDES_BEBEK,
        sambal: &["Sambal Korek"],
    },
    MenuSet {
        id: MenuItemId::new(2),
        name: "Set Bebek B",
        portion: "1 Pax",
        price_ringgit: 18,
        includes: SET_INCLUDES_BEBEK,
        sambal: &["Sambal Hitam", "Sambal Hijau"],
    },
    MenuSet {
        id: MenuItemId::new(3),
        name: "Set Bebek C",
        portion: "1 Pax",
        price_ringgit: 19,
        includes: SET_INCLUDES_BEBEK,
        sambal: &["Sambal uleg", "Sambal Hitam"],
    },
    MenuSet {
        id: MenuItemId::new(4),
        name: "Set Bebek D",
        portion: "1 Pax",
        price_ringgit: 20,
        includes: SET_INCLUDES_BEBEK,
        sambal: &["Sambal Ijo", "Sambal Korek", "Sambal Matah"],
    },
];

const AYAM_SETS: &[MenuSet] = &[
    MenuSet {
        id: MenuItemId::new(101),
        name: "Set Ayam Kampung A",
        portion: "1 Pax",
        price_ringgit: 69,
        includes: SET_INCLUDES_AYAM,
        sambal: &["Sambal Ijo"],
    },
    MenuSet {
        id: MenuItemId::new(102),
        name: "Set Ayam Kampung B",
        portion: "1 Pax",
        price_ringgit: 72,
        includes: SET_INCLUDES_AYAM,
        sambal: &["Sambal Matah"],
    },
    MenuSet {
        id: MenuItemId::new(103),
        name: "Set Ayam Kampung C",
        portion: "2 Pax",
        price_ringgit: 135,
        includes: SET_INCLUDES_AYAM,
        sambal: &["Sambal Hitam"],
    },
    MenuSet {
        id: MenuItemId::new(104),
        name: "Set Ayam Kampung D",
        portion: "2 Pax",
        price_ringgit: 145,
        includes: SET_INCLUDES_AYAM,
        sambal: &["Sambal Korek"],
    },
];

/// Menu sections in display order.
pub const SECTIONS: &[MenuSection] = &[
    MenuSection {
        title: "Set Bebek Top Global",
        tagline: "Signature Bebek packages curated for every group size. Each set comes with the full sambal quartet.",
        sets: BEBEK_SETS,
    },
    MenuSection {
        title: "Set Ayam Kampung Sambal Pilihan",
        tagline: "Free-range kampung chicken with your favorite sambal spotlight.",
        sets: AYAM_SETS,
    },
];

/// The house sambal quartet.
pub const SAMBALS: &[Sambal] = &[
    Sambal {
        name: "Sambal Ijo",
        note: "Fresh green chili, lime leaf & lemongrass",
    },
    Sambal {
        name: "Sambal Matah",
        note: "Bali style shallot relish with torch ginger",
    },
    Sambal {
        name: "Sambal Hitam",
        note: "Slow-cooked black sambal with belimbing wuluh",
    },
    Sambal {
        name: "Sambal Korek",
        note: "Fiery raw chili, garlic & hot oil",
    },
];

/// Iterate over every set on the menu.
pub fn all_sets() -> impl Iterator<Item = &'static MenuSet> {
    SECTIONS.iter().flat_map(|section| section.sets.iter())
}

/// Look up a set by ID.
#[must_use]
pub fn find(id: MenuItemId) -> Option<&'static MenuSet> {
    all_sets().find(|set| set.id == id)
}
