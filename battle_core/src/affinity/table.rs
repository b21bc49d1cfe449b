//! The 5×5 affinity relation table

use crate::types::Element;
use serde::{Deserialize, Serialize};

/// Affinity category: one of the four elements or "none"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Earth,
    Water,
    Fire,
    Wind,
    None,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Earth,
            Category::Water,
            Category::Fire,
            Category::Wind,
            Category::None,
        ]
    }

    /// Row/column of this category in [`RELATION_TABLE`]
    pub fn index(self) -> usize {
        match self {
            Category::Earth => 0,
            Category::Water => 1,
            Category::Fire => 2,
            Category::Wind => 3,
            Category::None => 4,
        }
    }
}

impl From<Element> for Category {
    fn from(element: Element) -> Self {
        match element {
            Element::Earth => Category::Earth,
            Element::Water => Category::Water,
            Element::Fire => Category::Fire,
            Element::Wind => Category::Wind,
        }
    }
}

/// How an attacking category fares against a defending one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Advantage,
    Disadvantage,
    Neutral,
}

use Relation::{Advantage as A, Disadvantage as D, Neutral as N};

/// Rows are the attacker, columns the defender: earth, water, fire, wind, none
pub const RELATION_TABLE: [[Relation; 5]; 5] = [
    // earth beats water, loses to wind
    [N, A, N, D, A],
    // water beats fire, loses to earth
    [D, N, A, N, A],
    // fire beats wind, loses to water
    [N, D, N, A, A],
    // wind beats earth, loses to fire
    [A, N, D, N, A],
    // none is weak to every element
    [D, D, D, D, N],
];

/// Look up the relation for an ordered (attacker, defender) pair
pub fn relation(attacker: Category, defender: Category) -> Relation {
    RELATION_TABLE[attacker.index()][defender.index()]
}
