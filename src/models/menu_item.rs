use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{labels, Categorized, Category};
use crate::backend::{Collection, Record};
use crate::editor::{Editable, FieldKind, FieldSpec, FormModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MenuCategory {
    #[default]
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    Desserts,
}

impl Category for MenuCategory {
    const ALL: &'static [Self] = &[Self::Vegetarian, Self::NonVegetarian, Self::Desserts];

    fn label(self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::NonVegetarian => "Non-Vegetarian",
            Self::Desserts => "Desserts",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub category: MenuCategory,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub category: MenuCategory,
    pub image_url: String,
}

impl Record for MenuItem {
    const COLLECTION: Collection = Collection::MenuItems;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Categorized for MenuItem {
    type Category = MenuCategory;

    fn category(&self) -> MenuCategory {
        self.category
    }
}

impl FormModel for MenuItemDraft {
    fn value(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            "category" => self.category.label().to_string(),
            "image_url" => self.image_url.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: &str) {
        match key {
            "name" => self.name = value.to_string(),
            "description" => self.description = value.to_string(),
            "category" => {
                if let Some(category) = MenuCategory::from_label(value) {
                    self.category = category;
                }
            }
            "image_url" => self.image_url = value.to_string(),
            _ => {}
        }
    }
}

impl Editable for MenuItem {
    type Draft = MenuItemDraft;

    const NOUN: &'static str = "menu item";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Name", FieldKind::Text),
        FieldSpec::new("category", "Category", FieldKind::Choice(labels::<MenuCategory>)),
        FieldSpec::new("description", "Description", FieldKind::TextArea(3)),
        FieldSpec::new("image_url", "Image URL", FieldKind::Url),
    ];

    fn draft(&self) -> MenuItemDraft {
        MenuItemDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            image_url: self.image_url.clone(),
        }
    }
}
