use serde::{Deserialize, Serialize};

/// What using an item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Reduces hunger by the item's magnitude.
    Food,
    /// Restores health by the item's magnitude, capped.
    Medical,
    /// Carried but has no effect when used.
    Other,
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Medical => "Medical",
            Self::Other => "Other",
        }
    }
}

/// Unrecognised kind names become [`ItemKind::Other`].
impl From<&str> for ItemKind {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "food" => Self::Food,
            "medical" => Self::Medical,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A consumable carried in the pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub magnitude: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: impl Into<ItemKind>, magnitude: i32) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            magnitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_str() {
        assert_eq!(ItemKind::from("Food"), ItemKind::Food);
        assert_eq!(ItemKind::from("medical"), ItemKind::Medical);
        assert_eq!(ItemKind::from(" MEDICAL "), ItemKind::Medical);
        assert_eq!(ItemKind::from("Trinket"), ItemKind::Other);
    }

    #[test]
    fn item_new_accepts_kind_or_name() {
        let a = Item::new("Herbs", "Medical", 30);
        let b = Item::new("Herbs", ItemKind::Medical, 30);
        assert_eq!(a, b);
        assert_eq!(a.kind.to_string(), "Medical");
    }
}
