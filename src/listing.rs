//! Logic shared by the public list views: fetching with a placeholder
//! fallback, category filtering and the carousel cursor.
use leptos::logging::warn;

use crate::backend::{DataClient, Record};
use crate::models::{BlogPost, Categorized, Category};
use crate::placeholders;

/// A "list query" for one collection.
///
/// There is no cache: each [`ListQuery::fetch`] is a fresh round trip, so a
/// view that mounts twice fetches twice. Reads never fail from the caller's
/// point of view; an error or an empty result yields the placeholder set
/// (or nothing, for queries without placeholders).
pub struct ListQuery<T> {
    placeholders: Option<fn() -> Vec<T>>,
}

impl<T: Record> ListQuery<T> {
    pub fn new() -> Self {
        Self { placeholders: None }
    }

    pub fn with_placeholders(placeholders: fn() -> Vec<T>) -> Self {
        Self {
            placeholders: Some(placeholders),
        }
    }

    pub async fn fetch(&self, client: &DataClient) -> Vec<T> {
        let rows = match client.list::<T>().await {
            Ok(rows) => rows,
            Err(err) => {
                warn!("[LIST] Fetching {} failed: {}", T::COLLECTION, err);
                Vec::new()
            }
        };
        match (rows.is_empty(), self.placeholders) {
            (true, Some(placeholders)) => placeholders(),
            _ => rows,
        }
    }
}

impl<T: Record> Default for ListQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Looks a post up by slug. When the backend has no such post, or cannot be
/// reached, the built-in posts are searched so their links keep working.
pub async fn find_post(client: &DataClient, slug: &str) -> Option<BlogPost> {
    match client.find_by::<BlogPost>("slug", slug).await {
        Ok(Some(post)) => return Some(post),
        Ok(None) => {}
        Err(err) => warn!("[LIST] Looking up post {:?} failed: {}", slug, err),
    }
    placeholders::blog_posts().into_iter().find(|p| p.slug == slug)
}

pub const ALL_LABEL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: Category> CategoryFilter<C> {
    /// Filter buttons in display order: "All" followed by every category.
    pub fn options() -> Vec<CategoryFilter<C>> {
        std::iter::once(CategoryFilter::All)
            .chain(C::ALL.iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label == ALL_LABEL {
            return Some(CategoryFilter::All);
        }
        C::from_label(label).map(CategoryFilter::Only)
    }

    pub fn matches(self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn apply<T>(self, items: &[T]) -> Vec<T>
    where
        T: Categorized<Category = C> + Clone,
    {
        items
            .iter()
            .filter(|item| self.matches(item.category()))
            .cloned()
            .collect()
    }
}

/// Cursor over a sequence shown `window` items at a time, wrapping at both
/// ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    window: usize,
}

impl Carousel {
    pub fn new(len: usize, window: usize) -> Self {
        Self {
            len,
            index: 0,
            window: window.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Navigation controls only make sense with more than one item.
    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index % self.len;
        }
    }

    /// Adjusts to a new sequence length, keeping the cursor in range.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.index = if len == 0 { 0 } else { self.index % len };
    }

    /// Indices currently on screen, wrapping past the end. Never longer
    /// than the sequence itself.
    pub fn visible(&self) -> Vec<usize> {
        (0..self.window.min(self.len))
            .map(|offset| (self.index + offset) % self.len)
            .collect()
    }

    pub fn visible_items<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.visible()
            .into_iter()
            .filter_map(|i| items.get(i))
            .collect()
    }
}
