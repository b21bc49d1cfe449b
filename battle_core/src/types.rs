//! Core value types shared by every model

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum points a composition may hold across all four elements
pub const MAX_ELEMENT_POINTS: u8 = 10;

/// One of the four concrete elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Earth,
    Water,
    Fire,
    Wind,
}

impl Element {
    /// All elements in tie-break order (earth first)
    pub fn all() -> &'static [Element] {
        &[Element::Earth, Element::Water, Element::Fire, Element::Wind]
    }

    /// The element this one dominates (earth → water → fire → wind → earth)
    pub fn beats(self) -> Element {
        match self {
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Wind,
            Element::Wind => Element::Earth,
        }
    }

    /// The element that dominates this one
    pub fn beaten_by(self) -> Element {
        match self {
            Element::Earth => Element::Wind,
            Element::Water => Element::Earth,
            Element::Fire => Element::Water,
            Element::Wind => Element::Fire,
        }
    }

    /// The mutually exclusive partner (earth ↔ fire, water ↔ wind)
    pub fn opposite(self) -> Element {
        match self {
            Element::Earth => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Water => Element::Wind,
            Element::Wind => Element::Water,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Earth => "Earth",
            Element::Water => "Water",
            Element::Fire => "Fire",
            Element::Wind => "Wind",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejected composition edits
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    #[error("{element} value {value} is outside 0..=10")]
    ValueOutOfRange { element: Element, value: u8 },
    #[error("composition total {total} exceeds 10")]
    TotalExceeded { total: u8 },
    #[error("{0} and {1} cannot both be positive")]
    OpposedElements(Element, Element),
}

/// Distribution of up to 10 points across the four elements
///
/// The remaining `10 - total` points form the implicit "none" category.
/// The formula layer trusts that a composition respects the total and
/// opposed-pair rules; use [`ElementalComposition::new`] or
/// [`ElementalComposition::with_element`] at the input boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementalComposition {
    #[serde(default)]
    pub earth: u8,
    #[serde(default)]
    pub water: u8,
    #[serde(default)]
    pub fire: u8,
    #[serde(default)]
    pub wind: u8,
}

impl ElementalComposition {
    /// Build a composition, checking range, total and opposed pairs
    pub fn new(earth: u8, water: u8, fire: u8, wind: u8) -> Result<Self, CompositionError> {
        let composition = ElementalComposition {
            earth,
            water,
            fire,
            wind,
        };
        composition.validate()?;
        Ok(composition)
    }

    /// No elemental points at all
    pub fn none() -> Self {
        Self::default()
    }

    /// All 10 points in a single element
    pub fn single(element: Element) -> Self {
        Self::none().with_raw(element, MAX_ELEMENT_POINTS)
    }

    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Earth => self.earth,
            Element::Water => self.water,
            Element::Fire => self.fire,
            Element::Wind => self.wind,
        }
    }

    fn with_raw(mut self, element: Element, value: u8) -> Self {
        match element {
            Element::Earth => self.earth = value,
            Element::Water => self.water = value,
            Element::Fire => self.fire = value,
            Element::Wind => self.wind = value,
        }
        self
    }

    /// Apply a stat-form edit to one element
    ///
    /// The value is clamped to 0..=10 and a positive value zeroes the
    /// opposed element. Edits that would push the total above 10 are
    /// rejected and leave the composition untouched.
    pub fn with_element(&self, element: Element, value: u8) -> Result<Self, CompositionError> {
        let value = value.min(MAX_ELEMENT_POINTS);
        let mut edited = self.with_raw(element, value);
        if value > 0 {
            edited = edited.with_raw(element.opposite(), 0);
        }

        let total = edited.total();
        if total > MAX_ELEMENT_POINTS {
            return Err(CompositionError::TotalExceeded { total });
        }
        Ok(edited)
    }

    /// Check the composition invariants
    pub fn validate(&self) -> Result<(), CompositionError> {
        for &element in Element::all() {
            let value = self.get(element);
            if value > MAX_ELEMENT_POINTS {
                return Err(CompositionError::ValueOutOfRange { element, value });
            }
        }
        if self.earth > 0 && self.fire > 0 {
            return Err(CompositionError::OpposedElements(Element::Earth, Element::Fire));
        }
        if self.water > 0 && self.wind > 0 {
            return Err(CompositionError::OpposedElements(Element::Water, Element::Wind));
        }
        let total = self.total();
        if total > MAX_ELEMENT_POINTS {
            return Err(CompositionError::TotalExceeded { total });
        }
        Ok(())
    }

    /// Sum of the four concrete elements
    pub fn total(&self) -> u8 {
        self.earth
            .saturating_add(self.water)
            .saturating_add(self.fire)
            .saturating_add(self.wind)
    }

    /// Points left over for the implicit "none" category
    pub fn none_points(&self) -> u8 {
        MAX_ELEMENT_POINTS.saturating_sub(self.total())
    }

    /// Largest element, ties broken earth > water > fire > wind
    pub fn dominant(&self) -> Option<Element> {
        let mut best: Option<Element> = None;
        for &element in Element::all() {
            let value = self.get(element);
            if value == 0 {
                continue;
            }
            match best {
                Some(current) if self.get(current) >= value => {}
                _ => best = Some(element),
            }
        }
        best
    }

    pub fn is_none(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for ElementalComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Element::all()
            .iter()
            .filter(|&&element| self.get(element) > 0)
            .map(|&element| format!("{} {}", element, self.get(element)))
            .collect();

        if parts.is_empty() {
            f.write_str("None")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}

/// Weapon class of the attacking side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponClass {
    #[default]
    Melee,
    Ranged,
}

impl WeaponClass {
    pub fn all() -> &'static [WeaponClass] {
        &[WeaponClass::Melee, WeaponClass::Ranged]
    }
}

impl fmt::Display for WeaponClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeaponClass::Melee => f.write_str("melee"),
            WeaponClass::Ranged => f.write_str("ranged"),
        }
    }
}

/// One side of an exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantProfile {
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub vitality: u32,
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub agility: u32,
    #[serde(default)]
    pub elemental: ElementalComposition,
}

fn default_level() -> u32 {
    1
}

impl Default for CombatantProfile {
    fn default() -> Self {
        CombatantProfile {
            level: default_level(),
            vitality: 0,
            attack: 0,
            defense: 0,
            agility: 0,
            elemental: ElementalComposition::none(),
        }
    }
}

impl CombatantProfile {
    pub fn new(level: u32, attack: u32, defense: u32, agility: u32) -> Self {
        CombatantProfile {
            level,
            attack,
            defense,
            agility,
            ..Self::default()
        }
    }

    pub fn with_vitality(mut self, vitality: u32) -> Self {
        self.vitality = vitality;
        self
    }

    pub fn with_elemental(mut self, elemental: ElementalComposition) -> Self {
        self.elemental = elemental;
        self
    }
}

/// Stats of a ridden mount
///
/// Mounts carry no elemental composition of their own; the rider's applies.
/// Unknown keys are rejected so a misspelled stat is not read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MountProfile {
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub agility: u32,
    #[serde(default)]
    pub vitality: u32,
}

impl MountProfile {
    pub fn new(attack: u32, defense: u32, agility: u32, vitality: u32) -> Self {
        MountProfile {
            attack,
            defense,
            agility,
            vitality,
        }
    }
}
