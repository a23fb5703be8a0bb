//! Collectible building elements for the roaming mini-game.
//!
//! A fixed catalog of traditional construction elements the visitor can
//! gather while walking around the destination dwelling. Items are created
//! once per session; only their `collected` flag ever changes.

use serde::{Deserialize, Serialize};

/// Qualitative 0–10 scores shown on an item's collection card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemAttributes {
    /// Privacy protection.
    pub privacy: u8,
    /// Feng shui function.
    pub fengshui: u8,
    /// Construction cost.
    pub cost: u8,
    /// Aesthetic value.
    pub aesthetic: u8,
}

/// One collectible element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub attributes: ItemAttributes,
    pub collected: bool,
    /// Opaque asset reference for the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_path: Option<String>,
}

fn item(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    attributes: ItemAttributes,
) -> CollectionItem {
    CollectionItem {
        id: id.to_owned(),
        name: name.to_owned(),
        category: category.to_owned(),
        description: description.to_owned(),
        attributes,
        collected: false,
        model_path: None,
    }
}

/// The builtin catalog of collectible elements, in display order.
pub fn builtin_catalog() -> Vec<CollectionItem> {
    vec![
        item(
            "yingbi",
            "Screen wall",
            "decorative",
            "A free-standing wall inside or outside the gate, shielding the \
             courtyard from view and, by tradition, deflecting ill fortune.",
            ItemAttributes { privacy: 9, fengshui: 8, cost: 6, aesthetic: 7 },
        ),
        item(
            "chuangling",
            "Window lattice",
            "structural",
            "The carved grille of a window, admitting light and air while \
             carrying the finest of the joiner's craft.",
            ItemAttributes { privacy: 5, fengshui: 4, cost: 7, aesthetic: 9 },
        ),
        item(
            "dougong",
            "Bracket set",
            "structural",
            "Interlocking tiers of brackets unique to Chinese timber framing, \
             carrying the weight of the eaves out past the columns.",
            ItemAttributes { privacy: 1, fengshui: 6, cost: 9, aesthetic: 10 },
        ),
        item(
            "matouqiang",
            "Horse-head wall",
            "decorative",
            "The stepped gable rising above the roofline of Huizhou houses, \
             a firebreak as much as a signature silhouette.",
            ItemAttributes { privacy: 3, fengshui: 5, cost: 5, aesthetic: 8 },
        ),
        item(
            "tianjing",
            "Sky well",
            "functional",
            "The open-air court at a dwelling's heart, gathering the rain of \
             all four roofs — wealth flowing inward, in the old reading.",
            ItemAttributes { privacy: 4, fengshui: 10, cost: 4, aesthetic: 6 },
        ),
    ]
}
