use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{labels, Categorized, Category};
use crate::backend::{Collection, Record};
use crate::editor::{Editable, FieldKind, FieldSpec, FormModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GalleryCategory {
    #[default]
    Wedding,
    Corporate,
    Private,
    Outdoor,
    Luxury,
}

impl Category for GalleryCategory {
    const ALL: &'static [Self] = &[
        Self::Wedding,
        Self::Corporate,
        Self::Private,
        Self::Outdoor,
        Self::Luxury,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Wedding => "Wedding",
            Self::Corporate => "Corporate",
            Self::Private => "Private",
            Self::Outdoor => "Outdoor",
            Self::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    pub alt_text: String,
    pub image_url: String,
    pub category: GalleryCategory,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct GalleryImageDraft {
    pub title: String,
    pub alt_text: String,
    pub image_url: String,
    pub category: GalleryCategory,
}

impl Record for GalleryImage {
    const COLLECTION: Collection = Collection::GalleryImages;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Categorized for GalleryImage {
    type Category = GalleryCategory;

    fn category(&self) -> GalleryCategory {
        self.category
    }
}

impl FormModel for GalleryImageDraft {
    fn value(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "alt_text" => self.alt_text.clone(),
            "image_url" => self.image_url.clone(),
            "category" => self.category.label().to_string(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: &str) {
        match key {
            "title" => self.title = value.to_string(),
            "alt_text" => self.alt_text = value.to_string(),
            "image_url" => self.image_url = value.to_string(),
            "category" => {
                if let Some(category) = GalleryCategory::from_label(value) {
                    self.category = category;
                }
            }
            _ => {}
        }
    }
}

impl Editable for GalleryImage {
    type Draft = GalleryImageDraft;

    const NOUN: &'static str = "image";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text),
        FieldSpec::new("alt_text", "Alt Text", FieldKind::Text),
        FieldSpec::new("image_url", "Image URL", FieldKind::Url),
        FieldSpec::new("category", "Category", FieldKind::Choice(labels::<GalleryCategory>)),
    ];

    fn draft(&self) -> GalleryImageDraft {
        GalleryImageDraft {
            title: self.title.clone(),
            alt_text: self.alt_text.clone(),
            image_url: self.image_url.clone(),
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_labels() {
        for category in GalleryCategory::ALL {
            assert_eq!(GalleryCategory::from_label(category.label()), Some(*category));
        }
        assert_eq!(GalleryCategory::from_label("All"), None);
    }

    #[test]
    fn category_field_offers_every_category() {
        let field = GalleryImage::FIELDS.iter().find(|f| f.key == "category").unwrap();
        let FieldKind::Choice(options) = field.kind else {
            panic!("category should be a choice");
        };
        assert_eq!(options(), ["Wedding", "Corporate", "Private", "Outdoor", "Luxury"]);
    }

    #[test]
    fn decodes_backend_row() {
        let row = serde_json::json!({
            "id": "7f0c",
            "title": "Gala",
            "alt_text": "Gala dinner",
            "image_url": "https://img/1.jpg",
            "category": "Luxury",
            "created_at": "2024-03-01T10:00:00+00:00"
        });
        let image: GalleryImage = serde_json::from_value(row).unwrap();
        assert_eq!(image.category, GalleryCategory::Luxury);
        assert_eq!(image.id(), "7f0c");
    }

    #[test]
    fn unknown_category_label_keeps_previous_value() {
        let mut draft = GalleryImageDraft::default();
        draft.set_value("category", "Outdoor");
        draft.set_value("category", "Space");
        assert_eq!(draft.category, GalleryCategory::Outdoor);
        assert_eq!(draft.value("category"), "Outdoor");
    }
}
