//! Admin authentication state.
//!
//! A single [`SessionStore`] is created when the app starts and handed to
//! the views through context. It asks the provider for a persisted session
//! on [`SessionStore::init`], keeps the data client's bearer token in step
//! with the signed-in user, and notifies subscribers on every change.
pub mod gotrue;

use async_trait::async_trait;
use leptos::logging::{log, warn};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::backend::BearerToken;
use crate::error::AuthResult;

pub use gotrue::GoTrueAuth;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: Identity,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[async_trait(?Send)]
pub trait AuthProvider {
    /// A previously established session, if one is still valid.
    async fn current_session(&self) -> AuthResult<Option<Session>>;
    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session>;
    async fn sign_out(&self, session: &Session) -> AuthResult<()>;
}

type Listener = Rc<dyn Fn(Option<&Identity>)>;

struct Inner {
    provider: Rc<dyn AuthProvider>,
    bearer: BearerToken,
    session: RefCell<Option<Session>>,
    ready: Cell<bool>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener: Cell<u64>,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<Inner>,
}

/// Keeps a listener registered; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    store: Weak<Inner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl SessionStore {
    pub fn new(provider: Rc<dyn AuthProvider>, bearer: BearerToken) -> Self {
        Self {
            inner: Rc::new(Inner {
                provider,
                bearer,
                session: RefCell::new(None),
                ready: Cell::new(false),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }),
        }
    }

    /// Restores any existing session. The store is ready afterwards even if
    /// the provider could not be reached.
    pub async fn init(&self) {
        match self.inner.provider.current_session().await {
            Ok(Some(session)) => {
                log!("[SESSION] Restored session for {}", session.user.id);
                self.replace(Some(session));
            }
            Ok(None) => self.replace(None),
            Err(err) => {
                warn!("[SESSION] Could not restore session: {}", err);
                self.replace(None);
            }
        }
        self.inner.ready.set(true);
        self.notify();
    }

    pub fn is_ready(&self) -> bool {
        self.inner.ready.get()
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.inner.session.borrow().as_ref().map(|s| s.user.clone())
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Identity> {
        let session = self.inner.provider.sign_in(credentials).await?;
        let user = session.user.clone();
        log!("[SESSION] Signed in {}", user.id);
        self.replace(Some(session));
        self.inner.ready.set(true);
        self.notify();
        Ok(user)
    }

    /// Always ends the local session; a provider failure is only logged.
    pub async fn sign_out(&self) {
        let session = self.inner.session.borrow().clone();
        if let Some(session) = session {
            if let Err(err) = self.inner.provider.sign_out(&session).await {
                warn!("[SESSION] Provider sign-out failed: {}", err);
            }
        }
        self.replace(None);
        self.notify();
        log!("[SESSION] Signed out");
    }

    pub fn subscribe(&self, listener: impl Fn(Option<&Identity>) + 'static) -> Subscription {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    /// Drops every listener and the local session. Used on shutdown.
    pub fn dispose(&self) {
        self.inner.listeners.borrow_mut().clear();
        self.replace(None);
    }

    fn replace(&self, session: Option<Session>) {
        self.inner
            .bearer
            .set(session.as_ref().map(|s| s.access_token.clone()));
        *self.inner.session.borrow_mut() = session;
    }

    fn notify(&self) {
        // Listeners may subscribe or read the store, so call them on a copy.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        let user = self.current_user();
        for listener in listeners {
            listener(user.as_ref());
        }
    }
}
