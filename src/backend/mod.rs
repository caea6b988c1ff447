//! Data client for the hosted content store.
//!
//! [`Backend`] is the untyped seam (one round trip per call, rows as JSON,
//! no retry); [`DataClient`] is the typed wrapper the views use. Nothing is
//! cached: every call goes to the backend.
pub mod memory;
pub mod rest;

use async_trait::async_trait;
use leptos::logging::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::BackendResult;

pub use memory::MemoryBackend;
pub use rest::RestBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    GalleryImages,
    Testimonials,
    BlogPosts,
    MenuItems,
    ContactInquiries,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::GalleryImages,
        Collection::Testimonials,
        Collection::BlogPosts,
        Collection::MenuItems,
        Collection::ContactInquiries,
    ];

    pub fn table(self) -> &'static str {
        match self {
            Collection::GalleryImages => "gallery_images",
            Collection::Testimonials => "testimonials",
            Collection::BlogPosts => "blog_posts",
            Collection::MenuItems => "menu_items",
            Collection::ContactInquiries => "contact_inquiries",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

impl Order {
    pub const fn desc(column: &'static str) -> Self {
        Self { column, ascending: false }
    }
}

/// A row type stored in one collection.
pub trait Record: Clone + DeserializeOwned + 'static {
    const COLLECTION: Collection;
    /// Newest first unless the entity says otherwise.
    const ORDER: Order = Order::desc("created_at");

    fn id(&self) -> &str;
}

#[async_trait(?Send)]
pub trait Backend {
    async fn list(&self, collection: Collection, order: Order) -> BackendResult<Vec<Value>>;

    async fn get_one(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> BackendResult<Option<Value>>;

    async fn insert(&self, collection: Collection, row: Value) -> BackendResult<()>;

    async fn update(&self, collection: Collection, id: &str, patch: Value) -> BackendResult<()>;

    async fn delete(&self, collection: Collection, id: &str) -> BackendResult<()>;

    async fn count(&self, collection: Collection) -> BackendResult<u64>;
}

/// Access token of the signed-in admin, shared between the session store
/// (writer) and the REST backend (reader).
#[derive(Clone, Default)]
pub struct BearerToken(Rc<RefCell<Option<String>>>);

impl BearerToken {
    pub fn set(&self, token: Option<String>) {
        *self.0.borrow_mut() = token;
    }

    pub fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

#[derive(Clone)]
pub struct DataClient {
    backend: Rc<dyn Backend>,
}

impl DataClient {
    pub fn new(backend: Rc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Rows that fail to decode are logged and skipped, so one malformed
    /// row never hides the rest of the collection.
    pub async fn list<T: Record>(&self) -> BackendResult<Vec<T>> {
        let rows = self.backend.list(T::COLLECTION, T::ORDER).await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.get("id").map(Value::to_string).unwrap_or_default();
                match serde_json::from_value::<T>(row) {
                    Ok(record) => Some(record),
                    Err(err) => {
                        warn!("[BACKEND] Skipping {} row {}: {}", T::COLLECTION, id, err);
                        None
                    }
                }
            })
            .collect())
    }

    pub async fn find_by<T: Record>(&self, field: &str, value: &str) -> BackendResult<Option<T>> {
        match self.backend.get_one(T::COLLECTION, field, value).await? {
            Some(row) => Ok(Some(serde_json::from_value(row)?)),
            None => Ok(None),
        }
    }

    pub async fn insert<T: Record, P: Serialize>(&self, payload: &P) -> BackendResult<()> {
        let row = serde_json::to_value(payload)?;
        self.backend.insert(T::COLLECTION, row).await
    }

    pub async fn update<T: Record, P: Serialize>(&self, id: &str, payload: &P) -> BackendResult<()> {
        let patch = serde_json::to_value(payload)?;
        self.backend.update(T::COLLECTION, id, patch).await
    }

    pub async fn delete<T: Record>(&self, id: &str) -> BackendResult<()> {
        self.backend.delete(T::COLLECTION, id).await
    }

    pub async fn count(&self, collection: Collection) -> BackendResult<u64> {
        self.backend.count(collection).await
    }
}
