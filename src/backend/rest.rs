//! PostgREST client for the hosted store.
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::{error, log};
use serde_json::Value;
use urlencoding::encode;

use super::{Backend, BearerToken, Collection, Order};
use crate::config::AppConfig;
use crate::error::{BackendError, BackendResult};

#[derive(Clone)]
pub struct RestBackend {
    base_url: String,
    anon_key: String,
    bearer: BearerToken,
}

impl RestBackend {
    pub fn new(config: &AppConfig, bearer: BearerToken) -> Self {
        Self {
            base_url: config.backend_url.clone(),
            anon_key: config.anon_key.clone(),
            bearer,
        }
    }

    fn table_url(&self, collection: Collection) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection.table())
    }

    // Signed-in admins act with their own token so row-level rules apply;
    // visitors fall back to the public key.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.bearer.get().unwrap_or_else(|| self.anon_key.clone());
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", token))
    }

    async fn check(collection: Collection, op: &str, response: Response) -> BackendResult<Response> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!("[BACKEND] {} {} failed with {}: {}", op, collection, status, body);
        Err(BackendError::Status { status, body })
    }
}

/// Parses the total out of a `Content-Range` header such as `0-0/42` or `*/0`.
pub fn parse_content_range_total(header: &str) -> Option<u64> {
    header.rsplit_once('/')?.1.trim().parse().ok()
}

#[async_trait(?Send)]
impl Backend for RestBackend {
    async fn list(&self, collection: Collection, order: Order) -> BackendResult<Vec<Value>> {
        let direction = if order.ascending { "asc" } else { "desc" };
        let url = format!(
            "{}?select=*&order={}.{}",
            self.table_url(collection),
            order.column,
            direction
        );
        let response = self.authorize(Request::get(&url)).send().await?;
        let response = Self::check(collection, "list", response).await?;
        let rows: Vec<Value> = response.json().await?;
        log!("[BACKEND] Fetched {} rows from {}", rows.len(), collection);
        Ok(rows)
    }

    async fn get_one(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> BackendResult<Option<Value>> {
        let url = format!(
            "{}?select=*&{}=eq.{}&limit=1",
            self.table_url(collection),
            encode(field),
            encode(value)
        );
        let response = self.authorize(Request::get(&url)).send().await?;
        let response = Self::check(collection, "get_one", response).await?;
        let rows: Vec<Value> = response.json().await?;
        Ok(rows.into_iter().next())
    }

    async fn insert(&self, collection: Collection, row: Value) -> BackendResult<()> {
        let response = self
            .authorize(Request::post(&self.table_url(collection)))
            .header("Prefer", "return=minimal")
            .json(&[row])?
            .send()
            .await?;
        Self::check(collection, "insert", response).await?;
        log!("[BACKEND] Inserted row into {}", collection);
        Ok(())
    }

    async fn update(&self, collection: Collection, id: &str, patch: Value) -> BackendResult<()> {
        let url = format!("{}?id=eq.{}", self.table_url(collection), encode(id));
        let response = self
            .authorize(Request::patch(&url))
            .header("Prefer", "return=minimal")
            .json(&patch)?
            .send()
            .await?;
        Self::check(collection, "update", response).await?;
        log!("[BACKEND] Updated {} in {}", id, collection);
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> BackendResult<()> {
        let url = format!("{}?id=eq.{}", self.table_url(collection), encode(id));
        let response = self.authorize(Request::delete(&url)).send().await?;
        Self::check(collection, "delete", response).await?;
        log!("[BACKEND] Deleted {} from {}", id, collection);
        Ok(())
    }

    async fn count(&self, collection: Collection) -> BackendResult<u64> {
        let url = format!("{}?select=id", self.table_url(collection));
        let response = self
            .authorize(Request::get(&url))
            .header("Prefer", "count=exact")
            .header("Range-Unit", "items")
            .header("Range", "0-0")
            .send()
            .await?;
        let response = Self::check(collection, "count", response).await?;
        let header = response
            .headers()
            .get("content-range")
            .ok_or_else(|| BackendError::Unexpected("missing Content-Range".into()))?;
        parse_content_range_total(&header)
            .ok_or_else(|| BackendError::Unexpected(format!("bad Content-Range {header:?}")))
    }
}
