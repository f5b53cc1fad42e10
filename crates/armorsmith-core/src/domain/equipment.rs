//! Equipment items: armor pieces, charms and decorations.

use super::kind::{EquipKind, Resistances, Sex};
use super::skill::SkillLevel;

/// Decoration-only data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoInfo {
    /// How many of this decoration the player owns; a hard upper bound for the search.
    pub owned: u32,
    pub category: String,
}

/// One equipment item.
///
/// An item with a blank name is the empty sentinel returned by lookups
/// that find nothing and used for unfilled categories of an
/// [`EquipSet`](super::EquipSet).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub name: String,
    pub kind: EquipKind,
    pub sex: Sex,
    pub rarity: u32,
    /// Decoration slot sizes (0-4). A decoration stores its own size in `slots[0]`.
    pub slots: [u32; 3],
    pub min_defense: i32,
    pub max_defense: i32,
    pub resistances: Resistances,
    pub skills: Vec<SkillLevel>,
    /// Manual ordering hint used when listing items for toggling.
    pub sort_hint: i32,
    pub deco: Option<DecoInfo>,
}

impl Equipment {
    /// Creates an unrestricted item with no slots, defense or skills.
    pub fn new(name: impl Into<String>, kind: EquipKind) -> Self {
        Self {
            name: name.into(),
            kind,
            sex: Sex::Any,
            rarity: 0,
            slots: [0; 3],
            min_defense: 0,
            max_defense: 0,
            resistances: Resistances::ZERO,
            skills: Vec::new(),
            sort_hint: i32::MAX,
            deco: None,
        }
    }

    /// The empty sentinel for `kind`.
    pub fn empty(kind: EquipKind) -> Self {
        Self::new(String::new(), kind)
    }

    /// Creates a decoration of the given size with an owned-quantity cap.
    pub fn deco(name: impl Into<String>, size: u32, owned: u32, category: impl Into<String>) -> Self {
        Self {
            slots: [size, 0, 0],
            deco: Some(DecoInfo {
                owned,
                category: category.into(),
            }),
            ..Self::new(name, EquipKind::Deco)
        }
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_rarity(mut self, rarity: u32) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_slots(mut self, slots: [u32; 3]) -> Self {
        self.slots = slots;
        self
    }

    /// Sets both the base and the fully upgraded defense.
    pub fn with_defense(mut self, min: i32, max: i32) -> Self {
        self.min_defense = min;
        self.max_defense = max;
        self
    }

    pub fn with_resistances(mut self, resistances: Resistances) -> Self {
        self.resistances = resistances;
        self
    }

    pub fn with_skill(mut self, name: impl Into<String>, level: u32) -> Self {
        self.skills.push(SkillLevel::new(name, level));
        self
    }

    pub fn with_sort_hint(mut self, hint: i32) -> Self {
        self.sort_hint = hint;
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Upper bound of the item's search variable: owned count for decorations, else 1.
    pub fn max_count(&self) -> u32 {
        match (&self.deco, self.kind) {
            (Some(info), EquipKind::Deco) => info.owned,
            (None, EquipKind::Deco) => 0,
            _ => 1,
        }
    }

    /// Level this item contributes to `skill`.
    pub fn skill_level(&self, skill: &str) -> u32 {
        self.skills
            .iter()
            .filter(|s| s.name == skill)
            .map(|s| s.level)
            .sum()
    }

    /// Name plus slot layout for armor, e.g. `"Leather Cap,1-0-0"`.
    pub fn simple_description(&self) -> String {
        if self.is_empty() {
            return format!("{}:", self.kind);
        }
        match self.kind {
            EquipKind::Deco | EquipKind::Charm => format!("{}:{}", self.kind, self.name),
            _ => format!(
                "{}:{},{}-{}-{}",
                self.kind, self.name, self.slots[0], self.slots[1], self.slots[2]
            ),
        }
    }

    /// Multi-line description with defense, resistances and skills.
    pub fn description(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let mut lines = Vec::new();
        match self.kind {
            EquipKind::Deco | EquipKind::Charm => lines.push(self.name.clone()),
            _ => {
                lines.push(format!(
                    "{},{}-{}-{}",
                    self.name, self.slots[0], self.slots[1], self.slots[2]
                ));
                let r = &self.resistances;
                lines.push(format!(
                    "defense:{}->{},fire:{},water:{},thunder:{},ice:{},dragon:{}",
                    self.min_defense,
                    self.max_defense,
                    r.get(super::Element::Fire),
                    r.get(super::Element::Water),
                    r.get(super::Element::Thunder),
                    r.get(super::Element::Ice),
                    r.get(super::Element::Dragon),
                ));
            }
        }
        lines.extend(self.skills.iter().map(|s| format!("{} Lv{}", s.name, s.level)));
        lines.join("\n")
    }
}
