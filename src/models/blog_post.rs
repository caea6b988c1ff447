use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::backend::{Collection, Order, Record};
use crate::editor::{Editable, FieldKind, FieldSpec, FormModel};
use crate::error::EditorError;
use crate::slug::{resolve_slug, slugify};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// Public lookup key for `/blog/:slug`.
    pub slug: String,
    pub thumbnail_url: String,
    pub excerpt: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Body text split on blank lines.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct BlogPostDraft {
    pub title: String,
    pub slug: String,
    pub thumbnail_url: String,
    pub excerpt: String,
    pub content: String,
}

impl BlogPostDraft {
    /// What the slug input shows when left blank.
    pub fn slug_hint(&self) -> String {
        slugify(&self.title)
    }
}

impl Record for BlogPost {
    const COLLECTION: Collection = Collection::BlogPosts;
    const ORDER: Order = Order::desc("published_at");

    fn id(&self) -> &str {
        &self.id
    }
}

impl FormModel for BlogPostDraft {
    fn value(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "slug" => self.slug.clone(),
            "thumbnail_url" => self.thumbnail_url.clone(),
            "excerpt" => self.excerpt.clone(),
            "content" => self.content.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: &str) {
        match key {
            "title" => self.title = value.to_string(),
            "slug" => self.slug = value.to_string(),
            "thumbnail_url" => self.thumbnail_url = value.to_string(),
            "excerpt" => self.excerpt = value.to_string(),
            "content" => self.content = value.to_string(),
            _ => {}
        }
    }
}

impl Editable for BlogPost {
    type Draft = BlogPostDraft;

    const NOUN: &'static str = "blog post";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text),
        FieldSpec::new("slug", "Slug (auto-generated if empty)", FieldKind::Text).optional(),
        FieldSpec::new("thumbnail_url", "Thumbnail URL", FieldKind::Url),
        FieldSpec::new("excerpt", "Excerpt", FieldKind::TextArea(2)),
        FieldSpec::new("content", "Content", FieldKind::TextArea(10)),
    ];

    fn draft(&self) -> BlogPostDraft {
        BlogPostDraft {
            title: self.title.clone(),
            slug: self.slug.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
        }
    }

    fn prepare(draft: &BlogPostDraft) -> BlogPostDraft {
        BlogPostDraft {
            slug: resolve_slug(&draft.slug, &draft.title),
            ..draft.clone()
        }
    }

    fn validate(draft: &BlogPostDraft) -> Result<(), EditorError> {
        if draft.slug.is_empty() {
            return Err(EditorError::Invalid(
                "title must contain a letter or digit, or supply a slug",
            ));
        }
        Ok(())
    }

    fn unique_key(draft: &BlogPostDraft) -> Option<(&'static str, String)> {
        Some(("slug", draft.slug.clone()))
    }

    fn stamp_insert(payload: &mut Map<String, Value>, now: DateTime<Utc>) {
        payload.insert("published_at".into(), Value::String(now.to_rfc3339()));
        payload.insert("updated_at".into(), Value::String(now.to_rfc3339()));
    }

    fn stamp_update(payload: &mut Map<String, Value>, now: DateTime<Utc>) {
        payload.insert("updated_at".into(), Value::String(now.to_rfc3339()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_fills_missing_slug() {
        let draft = BlogPostDraft {
            title: "Test Post!!".into(),
            ..Default::default()
        };
        assert_eq!(draft.slug_hint(), "test-post");
        assert_eq!(BlogPost::prepare(&draft).slug, "test-post");
    }

    #[test]
    fn update_stamp_touches_only_updated_at() {
        let mut payload = Map::new();
        let now = Utc::now();
        BlogPost::stamp_update(&mut payload, now);
        assert_eq!(payload.len(), 1);
        assert_eq!(payload["updated_at"], Value::String(now.to_rfc3339()));
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let post = BlogPost {
            id: "b1".into(),
            title: "T".into(),
            slug: "t".into(),
            thumbnail_url: String::new(),
            excerpt: String::new(),
            content: "First.\n\nSecond line\nstill second.\n\n\n\nThird.".into(),
            published_at: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(
            post.paragraphs(),
            vec!["First.", "Second line\nstill second.", "Third."]
        );
    }
}
