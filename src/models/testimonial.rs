use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::{Collection, Record};
use crate::editor::{Editable, FieldKind, FieldSpec, FormModel};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

fn default_rating() -> u8 {
    MAX_RATING
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub reviewer_name: String,
    pub content: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TestimonialDraft {
    pub reviewer_name: String,
    pub content: String,
    pub rating: u8,
    pub photo_url: String,
    pub video_url: Option<String>,
}

impl Default for TestimonialDraft {
    fn default() -> Self {
        Self {
            reviewer_name: String::new(),
            content: String::new(),
            rating: MAX_RATING,
            photo_url: String::new(),
            video_url: None,
        }
    }
}

/// Ratings come from a free-form input; anything unparseable keeps the
/// current value and anything out of range is pulled back into 1..=5.
pub fn clamp_rating(input: &str, current: u8) -> u8 {
    match input.trim().parse::<i64>() {
        Ok(n) => n.clamp(MIN_RATING as i64, MAX_RATING as i64) as u8,
        Err(_) => current,
    }
}

impl Record for Testimonial {
    const COLLECTION: Collection = Collection::Testimonials;

    fn id(&self) -> &str {
        &self.id
    }
}

impl FormModel for TestimonialDraft {
    fn value(&self, key: &str) -> String {
        match key {
            "reviewer_name" => self.reviewer_name.clone(),
            "content" => self.content.clone(),
            "rating" => self.rating.to_string(),
            "photo_url" => self.photo_url.clone(),
            "video_url" => self.video_url.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: &str) {
        match key {
            "reviewer_name" => self.reviewer_name = value.to_string(),
            "content" => self.content = value.to_string(),
            "rating" => self.rating = clamp_rating(value, self.rating),
            "photo_url" => self.photo_url = value.to_string(),
            "video_url" => {
                self.video_url = Some(value.trim())
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            }
            _ => {}
        }
    }
}

impl Editable for Testimonial {
    type Draft = TestimonialDraft;

    const NOUN: &'static str = "testimonial";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("reviewer_name", "Reviewer Name", FieldKind::Text),
        FieldSpec::new("content", "Testimonial", FieldKind::TextArea(4)),
        FieldSpec::new("rating", "Rating", FieldKind::Rating),
        FieldSpec::new("photo_url", "Photo URL", FieldKind::Url),
        FieldSpec::new("video_url", "Video URL (optional)", FieldKind::Url).optional(),
    ];

    fn draft(&self) -> TestimonialDraft {
        TestimonialDraft {
            reviewer_name: self.reviewer_name.clone(),
            content: self.content.clone(),
            rating: self.rating,
            photo_url: self.photo_url.clone(),
            video_url: self.video_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_clamped_into_range() {
        assert_eq!(clamp_rating("0", 3), 1);
        assert_eq!(clamp_rating("9", 3), 5);
        assert_eq!(clamp_rating("-4", 3), 1);
        assert_eq!(clamp_rating(" 4 ", 3), 4);
        assert_eq!(clamp_rating("four", 3), 3);
    }

    #[test]
    fn blank_video_url_is_absent() {
        let mut draft = TestimonialDraft::default();
        draft.set_value("video_url", "https://video/1");
        assert_eq!(draft.video_url.as_deref(), Some("https://video/1"));
        draft.set_value("video_url", "  ");
        assert_eq!(draft.video_url, None);
        assert_eq!(draft.value("video_url"), "");
    }

    #[test]
    fn legacy_rows_without_rating_default_to_five_stars() {
        let row = serde_json::json!({
            "id": "t1",
            "reviewer_name": "Anand Kumar",
            "content": "Outstanding",
            "created_at": "2024-01-01T00:00:00Z"
        });
        let testimonial: Testimonial = serde_json::from_value(row).unwrap();
        assert_eq!(testimonial.rating, 5);
        assert!(testimonial.photo_url.is_empty());
        assert!(testimonial.video_url.is_none());
    }
}
