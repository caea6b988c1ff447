//! Auth provider backed by the hosted GoTrue endpoint. Sessions are kept in
//! `localStorage` so a reload of the dashboard stays signed in.
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use leptos::logging::{log, warn};
use serde::Deserialize;
use serde_json::json;

use super::{AuthProvider, Credentials, Identity, Session};
use crate::config::AppConfig;
use crate::error::{AuthError, AuthResult};

const STORAGE_KEY: &str = "catering.admin.session";

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    user: Identity,
}

impl From<TokenResponse> for Session {
    fn from(token: TokenResponse) -> Self {
        Session {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            user: token.user,
        }
    }
}

pub struct GoTrueAuth {
    base_url: String,
    anon_key: String,
}

impl GoTrueAuth {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.backend_url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    async fn token_grant(&self, grant: &str, body: serde_json::Value) -> AuthResult<Response> {
        let response = Request::post(&self.url(&format!("token?grant_type={grant}")))
            .header("apikey", &self.anon_key)
            .json(&body)?
            .send()
            .await?;
        Ok(response)
    }

    async fn fetch_user(&self, access_token: &str) -> AuthResult<Option<Identity>> {
        let response = Request::get(&self.url("user"))
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await?;
        match response.status() {
            200 => Ok(Some(response.json().await?)),
            401 | 403 => Ok(None),
            status => Err(AuthError::Status {
                status,
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> AuthResult<Option<Session>> {
        let response = self
            .token_grant("refresh_token", json!({ "refresh_token": refresh_token }))
            .await?;
        if !response.ok() {
            return Ok(None);
        }
        let token: TokenResponse = response.json().await?;
        Ok(Some(token.into()))
    }
}

fn storage() -> AuthResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| AuthError::Storage("no window".into()))?
        .local_storage()
        .map_err(|_| AuthError::Storage("localStorage is not accessible".into()))?
        .ok_or_else(|| AuthError::Storage("localStorage is disabled".into()))
}

fn load_session() -> AuthResult<Option<Session>> {
    let raw = storage()?
        .get_item(STORAGE_KEY)
        .map_err(|_| AuthError::Storage("read failed".into()))?;
    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

fn store_session(session: &Session) -> AuthResult<()> {
    let raw = serde_json::to_string(session)?;
    storage()?
        .set_item(STORAGE_KEY, &raw)
        .map_err(|_| AuthError::Storage("write failed".into()))
}

fn clear_session() {
    if let Ok(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

#[async_trait(?Send)]
impl AuthProvider for GoTrueAuth {
    async fn current_session(&self) -> AuthResult<Option<Session>> {
        let Some(stored) = load_session()? else {
            return Ok(None);
        };

        if let Some(user) = self.fetch_user(&stored.access_token).await? {
            return Ok(Some(Session { user, ..stored }));
        }

        // Access token expired; try once with the refresh token.
        let refreshed = match stored.refresh_token.as_deref() {
            Some(refresh_token) => self.refresh(refresh_token).await?,
            None => None,
        };
        match refreshed {
            Some(session) => {
                log!("[SESSION] Refreshed expired access token");
                store_session(&session)?;
                Ok(Some(session))
            }
            None => {
                clear_session();
                Ok(None)
            }
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session> {
        let response = self
            .token_grant("password", serde_json::to_value(credentials)?)
            .await?;
        match response.status() {
            200 => {
                let session: Session = response.json::<TokenResponse>().await?.into();
                if let Err(err) = store_session(&session) {
                    warn!("[SESSION] Session will not survive a reload: {}", err);
                }
                Ok(session)
            }
            400 | 401 => Err(AuthError::InvalidCredentials),
            status => Err(AuthError::Status {
                status,
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }

    async fn sign_out(&self, session: &Session) -> AuthResult<()> {
        clear_session();
        let response = Request::post(&self.url("logout"))
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", session.access_token))
            .send()
            .await?;
        if !response.ok() {
            return Err(AuthError::Status {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}
