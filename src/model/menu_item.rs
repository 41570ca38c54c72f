use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MenuCategory {
    Snack,
    Main,
    Soup,
    Salad,
    Dessert,
    Drink,
}

impl MenuCategory {
    /// Human-readable label exposed by the public menu listing.
    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Snack => "Snacks",
            MenuCategory::Main => "Main courses",
            MenuCategory::Soup => "Soups",
            MenuCategory::Salad => "Salads",
            MenuCategory::Dessert => "Desserts",
            MenuCategory::Drink => "Drinks",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: MenuCategory,
    pub description: String,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(MenuCategory::Soup.label(), "Soups");
        assert_eq!(MenuCategory::Drink.label(), "Drinks");
    }
}
