//! In-process backend. Keeps rows as JSON per collection, assigns ids and
//! creation times the way the hosted store does, and records every call so
//! tests can assert on what reached the backend.
use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::HashMap;
use uuid::Uuid;

use super::{Backend, Collection, Order};
use crate::error::{BackendError, BackendResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(Collection),
    GetOne(Collection, String),
    Insert(Collection),
    Update(Collection, String),
    Delete(Collection, String),
    Count(Collection),
}

#[derive(Debug)]
pub struct MemoryBackend {
    tables: RefCell<HashMap<Collection, Vec<Value>>>,
    calls: RefCell<Vec<Call>>,
    clock: Cell<DateTime<Utc>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            tables: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
            clock: Cell::new(Utc::now()),
            fail_reads: Cell::new(false),
            fail_writes: Cell::new(false),
        }
    }

    /// Stores rows without recording a call. Missing ids and timestamps are
    /// filled in as for an insert.
    pub fn seed(&self, collection: Collection, rows: Vec<Value>) {
        for row in rows {
            let row = self.stamp(row);
            self.tables.borrow_mut().entry(collection).or_default().push(row);
        }
    }

    pub fn rows(&self, collection: Collection) -> Vec<Value> {
        self.tables.borrow().get(&collection).cloned().unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn check_read(&self, op: &'static str) -> BackendResult<()> {
        if self.fail_reads.get() {
            return Err(BackendError::Simulated(op));
        }
        Ok(())
    }

    fn check_write(&self, op: &'static str) -> BackendResult<()> {
        if self.fail_writes.get() {
            return Err(BackendError::Simulated(op));
        }
        Ok(())
    }

    // Each stamped row is one second newer than the previous one, so
    // creation order is always observable through `created_at`.
    fn tick(&self) -> String {
        let next = self.clock.get() + Duration::seconds(1);
        self.clock.set(next);
        next.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    fn stamp(&self, row: Value) -> Value {
        let mut object = match row {
            Value::Object(object) => object,
            other => return other,
        };
        if !object.contains_key("id") {
            object.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
        }
        if !object.contains_key("created_at") {
            object.insert("created_at".into(), Value::String(self.tick()));
        }
        Value::Object(object)
    }
}

fn field_matches(row: &Value, field: &str, value: &str) -> bool {
    match row.get(field) {
        Some(Value::String(s)) => s == value,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == value,
    }
}

fn compare_field(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => {
            match (DateTime::parse_from_rfc3339(a), DateTime::parse_from_rfc3339(b)) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                _ => a.cmp(b),
            }
        }
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            let (a, b) = (a.as_f64().unwrap_or(0.0), b.as_f64().unwrap_or(0.0));
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

fn merge(row: &mut Value, patch: Map<String, Value>) {
    if let Value::Object(object) = row {
        for (key, value) in patch {
            if key != "id" {
                object.insert(key, value);
            }
        }
    }
}

#[async_trait(?Send)]
impl Backend for MemoryBackend {
    async fn list(&self, collection: Collection, order: Order) -> BackendResult<Vec<Value>> {
        self.record(Call::List(collection));
        self.check_read("list")?;

        let mut rows = self.rows(collection);
        rows.sort_by(|a, b| {
            let ord = compare_field(a.get(order.column), b.get(order.column));
            if order.ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        Ok(rows)
    }

    async fn get_one(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> BackendResult<Option<Value>> {
        self.record(Call::GetOne(collection, value.to_string()));
        self.check_read("get_one")?;

        Ok(self
            .rows(collection)
            .into_iter()
            .find(|row| field_matches(row, field, value)))
    }

    async fn insert(&self, collection: Collection, row: Value) -> BackendResult<()> {
        self.record(Call::Insert(collection));
        self.check_write("insert")?;

        if !row.is_object() {
            return Err(BackendError::Unexpected("insert payload must be an object".into()));
        }
        let row = self.stamp(row);
        self.tables.borrow_mut().entry(collection).or_default().push(row);
        Ok(())
    }

    async fn update(&self, collection: Collection, id: &str, patch: Value) -> BackendResult<()> {
        self.record(Call::Update(collection, id.to_string()));
        self.check_write("update")?;

        let Value::Object(patch) = patch else {
            return Err(BackendError::Unexpected("update payload must be an object".into()));
        };
        // Like the hosted store, an update that matches nothing is not an error.
        if let Some(rows) = self.tables.borrow_mut().get_mut(&collection) {
            if let Some(row) = rows.iter_mut().find(|row| field_matches(row, "id", id)) {
                merge(row, patch);
            }
        }
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> BackendResult<()> {
        self.record(Call::Delete(collection, id.to_string()));
        self.check_write("delete")?;

        if let Some(rows) = self.tables.borrow_mut().get_mut(&collection) {
            rows.retain(|row| !field_matches(row, "id", id));
        }
        Ok(())
    }

    async fn count(&self, collection: Collection) -> BackendResult<u64> {
        self.record(Call::Count(collection));
        self.check_read("count")?;

        Ok(self.rows(collection).len() as u64)
    }
}
