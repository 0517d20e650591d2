use serde::{Deserialize, Serialize};

/// Top-level category with its subcategories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub subcategories: Vec<String>,
}

impl CategoryGroup {
    pub fn new(category: impl Into<String>, subcategories: &[&str]) -> Self {
        Self {
            category: category.into(),
            subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Static list served when the name store cannot be queried.
pub fn fallback_categories() -> Vec<CategoryGroup> {
    vec![
        CategoryGroup::new(
            "Fantasy Races",
            &["Elf Names", "Dwarf Names", "Dragon Names", "Vampire Names"],
        ),
        CategoryGroup::new("Characters", &["Wizard Names", "Warrior Names"]),
        CategoryGroup::new("Modern", &["Robot Names"]),
    ]
}
