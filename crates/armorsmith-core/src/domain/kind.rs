//! Slot categories, sex restrictions and elemental resistances.

use std::fmt;

/// Placement category of an equipment item.
///
/// The first six variants are body-slot categories: a set holds at most
/// one item of each. Decorations form a separate pool and are slotted
/// into the decoration slots of the other pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EquipKind {
    Head,
    Body,
    Arm,
    Waist,
    Leg,
    Charm,
    Deco,
}

impl EquipKind {
    /// Every kind, in catalog order.
    pub const ALL: [EquipKind; 7] = [
        EquipKind::Head,
        EquipKind::Body,
        EquipKind::Arm,
        EquipKind::Waist,
        EquipKind::Leg,
        EquipKind::Charm,
        EquipKind::Deco,
    ];

    /// The six body-slot categories.
    pub const BODY_SLOTS: [EquipKind; 6] = [
        EquipKind::Head,
        EquipKind::Body,
        EquipKind::Arm,
        EquipKind::Waist,
        EquipKind::Leg,
        EquipKind::Charm,
    ];

    /// The five armor categories (body slots without the charm).
    pub const ARMOR: [EquipKind; 5] = [
        EquipKind::Head,
        EquipKind::Body,
        EquipKind::Arm,
        EquipKind::Waist,
        EquipKind::Leg,
    ];

    /// Position of this kind in [`EquipKind::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn is_deco(self) -> bool {
        matches!(self, EquipKind::Deco)
    }

    #[inline]
    pub const fn is_body_slot(self) -> bool {
        !self.is_deco()
    }

    pub const fn label(self) -> &'static str {
        match self {
            EquipKind::Head => "head",
            EquipKind::Body => "body",
            EquipKind::Arm => "arm",
            EquipKind::Waist => "waist",
            EquipKind::Leg => "leg",
            EquipKind::Charm => "charm",
            EquipKind::Deco => "deco",
        }
    }
}

impl fmt::Display for EquipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sex restriction of an item, or the sex of the wearer in a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Sex {
    #[default]
    Any,
    Male,
    Female,
}

impl Sex {
    /// Returns true if an item with this restriction cannot be worn by `wearer`.
    #[inline]
    pub fn conflicts_with(self, wearer: Sex) -> bool {
        self != Sex::Any && self != wearer
    }
}

/// Elemental resistance axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Element {
    Fire,
    Water,
    Thunder,
    Ice,
    Dragon,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Fire,
        Element::Water,
        Element::Thunder,
        Element::Ice,
        Element::Dragon,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Thunder => "thunder",
            Element::Ice => "ice",
            Element::Dragon => "dragon",
        }
    }
}

/// One resistance value per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resistances {
    values: [i32; 5],
}

impl Resistances {
    pub const ZERO: Resistances = Resistances { values: [0; 5] };

    /// Creates resistances in element order: fire, water, thunder, ice, dragon.
    pub const fn new(fire: i32, water: i32, thunder: i32, ice: i32, dragon: i32) -> Self {
        Self {
            values: [fire, water, thunder, ice, dragon],
        }
    }

    #[inline]
    pub fn get(&self, element: Element) -> i32 {
        self.values[element.index()]
    }

    pub fn set(&mut self, element: Element, value: i32) {
        self.values[element.index()] = value;
    }
}
