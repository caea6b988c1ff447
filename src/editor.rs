//! Generic resource manager behind every admin editor.
//!
//! One [`Manager`] per collection replaces the per-entity editors: the
//! entity supplies its draft type and a static field schema, the manager
//! supplies the create/edit/delete state machine and the refetch-after-write
//! behaviour.
use chrono::{DateTime, Utc};
use leptos::logging::{error, log, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::backend::{DataClient, Record};
use crate::error::{BackendError, EditorError};

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    Url,
    /// Multi-line input with the given number of visible rows.
    TextArea(u32),
    /// Whole number of stars, 1 to 5.
    Rating,
    Choice(fn() -> Vec<&'static str>),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }
}

/// String view of a draft, addressed by [`FieldSpec::key`].
pub trait FormModel {
    fn value(&self, key: &str) -> String;
    fn set_value(&mut self, key: &str, value: &str);
}

pub trait Editable: Record {
    type Draft: FormModel + Serialize + Clone + Default + PartialEq + 'static;

    const FIELDS: &'static [FieldSpec];
    /// Used in prompts, e.g. "delete this testimonial?".
    const NOUN: &'static str;

    fn draft(&self) -> Self::Draft;

    /// Normalises a draft just before it is written.
    fn prepare(draft: &Self::Draft) -> Self::Draft {
        draft.clone()
    }

    /// Checks a prepared draft before anything is sent.
    fn validate(_draft: &Self::Draft) -> Result<(), EditorError> {
        Ok(())
    }

    /// Field whose value must not be shared with another record.
    fn unique_key(_draft: &Self::Draft) -> Option<(&'static str, String)> {
        None
    }

    fn stamp_insert(_payload: &mut Map<String, Value>, _now: DateTime<Utc>) {}

    fn stamp_update(_payload: &mut Map<String, Value>, _now: DateTime<Utc>) {}
}

fn payload<D: Serialize>(draft: &D) -> Result<Map<String, Value>, BackendError> {
    match serde_json::to_value(draft)? {
        Value::Object(map) => Ok(map),
        other => Err(BackendError::Unexpected(format!("draft encoded as {other}"))),
    }
}

/// Records of one collection with refetch and confirm-then-delete. This is
/// all the read-only inquiries viewer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordList<T> {
    pub records: Vec<T>,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> RecordList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refetches the collection. On a read error the previous list stays.
    pub async fn refresh(&mut self, client: &DataClient) -> Result<(), BackendError> {
        match client.list::<T>().await {
            Ok(records) => {
                self.records = records;
                Ok(())
            }
            Err(err) => {
                warn!("[EDITOR] Refreshing {} failed: {}", T::COLLECTION, err);
                Err(err)
            }
        }
    }

    /// Deletes a record once the user has confirmed. Returns whether a
    /// delete was sent; without confirmation the backend is not contacted.
    pub async fn delete(
        &mut self,
        client: &DataClient,
        id: &str,
        confirmed: bool,
    ) -> Result<bool, BackendError> {
        if !confirmed {
            return Ok(false);
        }
        client.delete::<T>(id).await.map_err(|err| {
            error!("[EDITOR] Deleting {} from {} failed: {}", id, T::COLLECTION, err);
            err
        })?;
        log!("[EDITOR] Deleted {} from {}", id, T::COLLECTION);
        // The delete went through; a failed refetch only leaves the list stale.
        let _ = self.refresh(client).await;
        Ok(true)
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Creating,
    Editing(String),
}

/// What a manager operation did, for [`Manager::settle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Refreshed,
    /// `from` is the mode the form was submitted in; `error` is `None` on
    /// success.
    Submitted { from: Mode, error: Option<String> },
    Deleted {
        id: String,
        sent: bool,
        error: Option<String>,
    },
}

pub struct Manager<T: Editable> {
    pub list: RecordList<T>,
    pub mode: Mode,
    pub form: T::Draft,
    /// Last write failure, shown inline until the next action.
    pub error: Option<String>,
}

impl<T: Editable> Clone for Manager<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            mode: self.mode.clone(),
            form: self.form.clone(),
            error: self.error.clone(),
        }
    }
}

impl<T: Editable> Default for Manager<T> {
    fn default() -> Self {
        Self {
            list: RecordList::new(),
            mode: Mode::Idle,
            form: T::Draft::default(),
            error: None,
        }
    }
}

impl<T: Editable> Manager<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[T] {
        &self.list.records
    }

    pub fn is_form_open(&self) -> bool {
        self.mode != Mode::Idle
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            Mode::Editing(id) => Some(id),
            _ => None,
        }
    }

    /// Opens an empty create form, abandoning any edit in progress.
    pub fn begin_create(&mut self) {
        self.form = T::Draft::default();
        self.error = None;
        self.mode = Mode::Creating;
    }

    /// The "New / Cancel" button.
    pub fn toggle_create(&mut self) {
        if self.mode == Mode::Creating {
            self.cancel();
        } else {
            self.begin_create();
        }
    }

    /// Loads a record into the form, abandoning any create in progress.
    pub fn begin_edit(&mut self, record: &T) {
        self.form = record.draft();
        self.error = None;
        self.mode = Mode::Editing(record.id().to_string());
    }

    pub fn cancel(&mut self) {
        self.form = T::Draft::default();
        self.error = None;
        self.mode = Mode::Idle;
    }

    pub fn set_field(&mut self, key: &str, value: &str) {
        self.form.set_value(key, value);
    }

    pub async fn refresh(&mut self, client: &DataClient) -> Result<(), BackendError> {
        self.list.refresh(client).await
    }

    pub async fn delete(
        &mut self,
        client: &DataClient,
        id: &str,
        confirmed: bool,
    ) -> Result<bool, EditorError> {
        match self.list.delete(client, id, confirmed).await {
            Ok(sent) => {
                if sent {
                    self.error = None;
                    if self.editing_id() == Some(id) {
                        self.cancel();
                    }
                }
                Ok(sent)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Writes the form. Returns to `Idle` only when the backend accepted the
    /// write; otherwise mode and form are kept and `error` is set.
    pub async fn submit(&mut self, client: &DataClient) -> Result<(), EditorError> {
        let editing = match &self.mode {
            Mode::Idle => return Ok(()),
            Mode::Creating => None,
            Mode::Editing(id) => Some(id.clone()),
        };

        match self.write(client, editing.as_deref()).await {
            Ok(()) => {
                let _ = self.list.refresh(client).await;
                self.cancel();
                Ok(())
            }
            Err(err) => {
                error!("[EDITOR] Saving to {} failed: {}", T::COLLECTION, err);
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Folds the result of an operation that ran on a detached copy back
    /// into this (live) manager. Only what the operation produced is taken
    /// over, so clicks and keystrokes made while it was in flight survive.
    pub fn settle(&mut self, list: RecordList<T>, outcome: Outcome) {
        self.list = list;
        match outcome {
            Outcome::Refreshed => {}
            Outcome::Submitted { from, error } => {
                // The admin moved on to another form meanwhile; leave it be.
                if self.mode != from {
                    return;
                }
                match error {
                    None => self.cancel(),
                    Some(err) => self.error = Some(err),
                }
            }
            Outcome::Deleted { id, sent, error } => {
                if let Some(err) = error {
                    self.error = Some(err);
                } else if sent {
                    self.error = None;
                    if self.editing_id() == Some(id.as_str()) {
                        self.cancel();
                    }
                }
            }
        }
    }

    async fn write(&mut self, client: &DataClient, editing: Option<&str>) -> Result<(), EditorError> {
        let draft = T::prepare(&self.form);
        T::validate(&draft)?;

        if let Some((field, value)) = T::unique_key(&draft) {
            if let Some(existing) = client.find_by::<T>(field, &value).await? {
                if Some(existing.id()) != editing {
                    return Err(EditorError::Duplicate { field, value });
                }
            }
        }

        let mut row = payload(&draft)?;
        let now = Utc::now();
        match editing {
            None => {
                T::stamp_insert(&mut row, now);
                client.insert::<T, _>(&row).await?;
                log!("[EDITOR] Created {} in {}", T::NOUN, T::COLLECTION);
            }
            Some(id) => {
                T::stamp_update(&mut row, now);
                client.update::<T, _>(id, &row).await?;
                log!("[EDITOR] Updated {} {}", T::NOUN, id);
            }
        }
        self.form = draft;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::Call;
    use crate::backend::{Collection, MemoryBackend};
    use crate::models::{BlogPost, GalleryCategory, GalleryImage, Testimonial};
    use serde_json::json;
    use std::rc::Rc;

    fn setup() -> (Rc<MemoryBackend>, DataClient) {
        let backend = Rc::new(MemoryBackend::new());
        (backend.clone(), DataClient::new(backend))
    }

    fn seed_testimonials(backend: &MemoryBackend) {
        backend.seed(
            Collection::Testimonials,
            vec![
                json!({"id": "t1", "reviewer_name": "Priya & Raj", "content": "Perfect", "rating": 5, "photo_url": "p1", "created_at": "2024-01-01T00:00:00Z"}),
                json!({"id": "t2", "reviewer_name": "Anand", "content": "Great", "rating": 4, "photo_url": "p2", "video_url": "v2", "created_at": "2024-02-01T00:00:00Z"}),
            ],
        );
    }

    #[test]
    fn edit_while_creating_replaces_the_create_form() {
        let mut manager = Manager::<GalleryImage>::new();
        manager.begin_create();
        manager.set_field("title", "half typed");
        manager.set_field("category", "Luxury");

        let record = GalleryImage {
            id: "g1".into(),
            title: "Stored".into(),
            alt_text: "Stored alt".into(),
            image_url: "https://img/s.jpg".into(),
            category: GalleryCategory::Corporate,
            created_at: Utc::now(),
        };
        manager.begin_edit(&record);

        assert_eq!(manager.mode, Mode::Editing("g1".into()));
        assert_eq!(manager.form, record.draft());
        assert_eq!(manager.form.value("title"), "Stored");
    }

    #[test]
    fn create_while_editing_clears_the_form() {
        let mut manager = Manager::<GalleryImage>::new();
        let record = GalleryImage {
            id: "g1".into(),
            title: "Stored".into(),
            alt_text: String::new(),
            image_url: String::new(),
            category: GalleryCategory::Outdoor,
            created_at: Utc::now(),
        };
        manager.begin_edit(&record);
        manager.toggle_create();
        assert_eq!(manager.mode, Mode::Creating);
        assert_eq!(manager.form, Default::default());

        manager.toggle_create();
        assert_eq!(manager.mode, Mode::Idle);
        assert!(!manager.is_form_open());
    }

    #[tokio::test]
    async fn submit_in_idle_does_nothing() {
        let (backend, client) = setup();
        let mut manager = Manager::<GalleryImage>::new();
        manager.submit(&client).await.unwrap();
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn successful_create_refetches_and_returns_to_idle() {
        let (backend, client) = setup();
        let mut manager = Manager::<GalleryImage>::new();
        manager.begin_create();
        manager.set_field("title", "Sangeet");
        manager.set_field("alt_text", "Sangeet night");
        manager.set_field("image_url", "https://img/s.jpg");
        manager.set_field("category", "Wedding");

        manager.submit(&client).await.unwrap();

        assert_eq!(manager.mode, Mode::Idle);
        assert_eq!(manager.form, Default::default());
        assert_eq!(manager.records().len(), 1);
        assert_eq!(manager.records()[0].title, "Sangeet");
        assert_eq!(
            backend.calls(),
            vec![Call::Insert(Collection::GalleryImages), Call::List(Collection::GalleryImages)]
        );
    }

    #[tokio::test]
    async fn failed_write_keeps_form_and_list() {
        let (backend, client) = setup();
        seed_testimonials(&backend);
        let mut manager = Manager::<Testimonial>::new();
        manager.refresh(&client).await.unwrap();
        let before = manager.records().to_vec();

        let target = manager.records()[0].clone();
        manager.begin_edit(&target);
        manager.set_field("content", "Edited");
        backend.fail_writes(true);
        backend.clear_calls();

        assert!(manager.submit(&client).await.is_err());
        assert_eq!(manager.mode, Mode::Editing(target.id.clone()));
        assert_eq!(manager.form.content, "Edited");
        assert!(manager.error.is_some());
        assert_eq!(manager.records(), before.as_slice());
        assert!(!backend.calls().contains(&Call::List(Collection::Testimonials)));
    }

    #[tokio::test]
    async fn update_overwrites_the_edited_record() {
        let (backend, client) = setup();
        seed_testimonials(&backend);
        let mut manager = Manager::<Testimonial>::new();
        manager.refresh(&client).await.unwrap();

        let target = manager.list.find("t2").unwrap().clone();
        manager.begin_edit(&target);
        manager.set_field("rating", "9");
        manager.set_field("video_url", "");
        manager.submit(&client).await.unwrap();

        let updated = manager.list.find("t2").unwrap();
        assert_eq!(updated.rating, 5);
        assert_eq!(updated.reviewer_name, "Anand");
        assert_eq!(manager.mode, Mode::Idle);
        assert!(backend.calls().contains(&Call::Update(Collection::Testimonials, "t2".into())));
    }

    #[tokio::test]
    async fn declined_delete_never_reaches_backend() {
        let (backend, client) = setup();
        seed_testimonials(&backend);
        let mut manager = Manager::<Testimonial>::new();
        manager.refresh(&client).await.unwrap();
        backend.clear_calls();

        assert!(!manager.delete(&client, "t1", false).await.unwrap());
        assert!(backend.calls().is_empty());
        assert_eq!(manager.records().len(), 2);
    }

    #[tokio::test]
    async fn confirmed_delete_refetches_without_the_record() {
        let (backend, client) = setup();
        seed_testimonials(&backend);
        let mut manager = Manager::<Testimonial>::new();
        manager.refresh(&client).await.unwrap();
        backend.clear_calls();

        assert!(manager.delete(&client, "t1", true).await.unwrap());
        assert!(manager.list.find("t1").is_none());
        assert_eq!(
            backend.calls(),
            vec![
                Call::Delete(Collection::Testimonials, "t1".into()),
                Call::List(Collection::Testimonials)
            ]
        );
    }

    #[tokio::test]
    async fn deleting_the_record_being_edited_closes_the_form() {
        let (backend, client) = setup();
        seed_testimonials(&backend);
        let mut manager = Manager::<Testimonial>::new();
        manager.refresh(&client).await.unwrap();
        let target = manager.list.find("t1").unwrap().clone();
        manager.begin_edit(&target);

        manager.delete(&client, "t1", true).await.unwrap();
        assert_eq!(manager.mode, Mode::Idle);
    }

    #[tokio::test]
    async fn duplicate_slug_is_rejected_without_writing() {
        let (backend, client) = setup();
        let mut manager = Manager::<BlogPost>::new();
        for _ in 0..2 {
            manager.begin_create();
            manager.set_field("title", "Wedding Menu Tips");
            manager.set_field("thumbnail_url", "https://img/t.jpg");
            manager.set_field("excerpt", "Short");
            manager.set_field("content", "Long");
            let _ = manager.submit(&client).await;
        }

        assert_eq!(backend.rows(Collection::BlogPosts).len(), 1);
        assert_eq!(manager.mode, Mode::Creating);
        assert!(manager.error.as_deref().unwrap().contains("wedding-menu-tips"));
    }

    #[tokio::test]
    async fn editing_a_post_may_keep_its_own_slug() {
        let (_backend, client) = setup();
        let mut manager = Manager::<BlogPost>::new();
        manager.begin_create();
        manager.set_field("title", "Seasonal Sweets");
        manager.set_field("thumbnail_url", "https://img/t.jpg");
        manager.set_field("excerpt", "Short");
        manager.set_field("content", "Long");
        manager.submit(&client).await.unwrap();

        let post = manager.records()[0].clone();
        manager.begin_edit(&post);
        manager.set_field("excerpt", "Shorter");
        manager.submit(&client).await.unwrap();

        let updated = &manager.records()[0];
        assert_eq!(updated.slug, "seasonal-sweets");
        assert_eq!(updated.excerpt, "Shorter");
        assert!(updated.updated_at >= post.updated_at);
    }

    #[tokio::test]
    async fn post_without_usable_slug_is_rejected() {
        let (backend, client) = setup();
        let mut manager = Manager::<BlogPost>::new();
        manager.begin_create();
        manager.set_field("title", "!!!");
        manager.set_field("thumbnail_url", "https://img/t.jpg");
        manager.set_field("excerpt", "Short");
        manager.set_field("content", "Long");

        let err = manager.submit(&client).await.unwrap_err();
        assert!(matches!(err, EditorError::Invalid(_)));
        assert_eq!(manager.mode, Mode::Creating);
        assert_eq!(manager.form.title, "!!!");
        assert!(manager.error.is_some());
        assert!(backend.rows(Collection::BlogPosts).is_empty());

        manager.set_field("slug", "festival-special");
        manager.submit(&client).await.unwrap();
        assert_eq!(backend.rows(Collection::BlogPosts)[0]["slug"], "festival-special");
    }

    #[tokio::test]
    async fn refresh_finishing_late_keeps_a_form_opened_meanwhile() {
        let (backend, client) = setup();
        seed_testimonials(&backend);
        let mut live = Manager::<Testimonial>::new();

        let mut working = live.clone();
        live.begin_create();
        live.set_field("reviewer_name", "Kavya");
        working.refresh(&client).await.unwrap();
        live.settle(working.list, Outcome::Refreshed);

        assert_eq!(live.mode, Mode::Creating);
        assert_eq!(live.form.reviewer_name, "Kavya");
        assert_eq!(live.records().len(), 2);
    }

    #[tokio::test]
    async fn submit_result_applies_only_to_the_form_it_came_from() {
        let (backend, client) = setup();
        seed_testimonials(&backend);
        let mut live = Manager::<Testimonial>::new();
        live.refresh(&client).await.unwrap();
        let t1 = live.list.find("t1").unwrap().clone();
        let t2 = live.list.find("t2").unwrap().clone();

        live.begin_edit(&t1);
        live.set_field("content", "Even better");
        let mut working = live.clone();
        let from = working.mode.clone();
        let error = working.submit(&client).await.err().map(|e| e.to_string());

        // Switched to another record before the save returned.
        live.begin_edit(&t2);
        live.settle(working.list, Outcome::Submitted { from, error });
        assert_eq!(live.mode, Mode::Editing("t2".into()));
        assert_eq!(live.list.find("t1").unwrap().content, "Even better");

        let mut working = live.clone();
        let from = working.mode.clone();
        let error = working.submit(&client).await.err().map(|e| e.to_string());
        live.settle(working.list, Outcome::Submitted { from, error });
        assert_eq!(live.mode, Mode::Idle);
    }

    #[tokio::test]
    async fn failed_delete_reports_without_touching_the_form() {
        let (backend, client) = setup();
        seed_testimonials(&backend);
        let mut live = Manager::<Testimonial>::new();
        live.refresh(&client).await.unwrap();
        backend.fail_writes(true);

        let mut working = live.clone();
        live.begin_create();
        live.set_field("content", "Draft");
        let result = working.delete(&client, "t1", true).await;
        live.settle(
            working.list,
            Outcome::Deleted {
                id: "t1".into(),
                sent: matches!(result, Ok(true)),
                error: result.err().map(|e| e.to_string()),
            },
        );

        assert!(live.error.is_some());
        assert_eq!(live.mode, Mode::Creating);
        assert_eq!(live.form.content, "Draft");
        assert_eq!(live.records().len(), 2);
    }
}
