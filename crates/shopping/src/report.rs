use serde::{Deserialize, Serialize};

/// Shopping list grouped per supermarket
///
/// Groups are ordered by supermarket name (case-sensitive), items inside a
/// group by ingredient name ignoring case.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShoppingListReport {
    pub groups: Vec<StoreGroup>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StoreGroup {
    #[serde(rename = "supermarket")]
    pub store_name: String,
    pub items: Vec<Item>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Item {
    #[serde(rename = "ingredient")]
    pub ingredient_name: String,
    pub display_quantity: String,
}

impl ShoppingListReport {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, store_name: &str) -> Option<&StoreGroup> {
        self.groups.iter().find(|g| g.store_name == store_name)
    }
}

impl StoreGroup {
    pub fn item(&self, ingredient_name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.ingredient_name == ingredient_name)
    }
}
