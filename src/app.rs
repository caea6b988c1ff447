/// Root component for the catering site.
/// Builds the data client and session store once, hands them to every view
/// through context, and lays out the public shell and the admin routes.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::rc::Rc;

use crate::backend::{BearerToken, DataClient, RestBackend};
use crate::components::{footer::Footer, header::Header};
use crate::config::AppConfig;
use crate::pages::{
    admin_dashboard::AdminDashboard, admin_login::AdminLogin, blog::BlogPage,
    blog_post::BlogPostPage, gallery::GalleryPage, home::HomePage, not_found::NotFound,
};
use crate::session::{GoTrueAuth, Identity, SessionStore};

/// Application-scoped services shared by every view.
#[derive(Clone)]
pub struct Services {
    pub config: AppConfig,
    pub client: DataClient,
    pub session: SessionStore,
}

/// Reactive mirror of the session store.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub user: RwSignal<Option<Identity>>,
    /// False until the persisted session has been checked.
    pub ready: RwSignal<bool>,
}

/// `Copy` handle to the services, usable from event handlers.
pub fn use_services() -> StoredValue<Services> {
    store_value(expect_context::<Services>())
}

pub fn use_auth() -> AuthState {
    expect_context::<AuthState>()
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let bearer = BearerToken::default();
    let client = DataClient::new(Rc::new(RestBackend::new(&config, bearer.clone())));
    let session = SessionStore::new(Rc::new(GoTrueAuth::new(&config)), bearer);

    let auth = AuthState {
        user: create_rw_signal(None),
        ready: create_rw_signal(false),
    };
    let subscription = session.subscribe(move |user| {
        let _ = auth.user.try_set(user.cloned());
        let _ = auth.ready.try_set(true);
    });

    // Effects only run in the browser, so the stored session is never
    // looked up while rendering on the server.
    let store = session.clone();
    create_effect(move |_| {
        let store = store.clone();
        spawn_local(async move { store.init().await });
    });

    let teardown = session.clone();
    on_cleanup(move || {
        drop(subscription);
        teardown.dispose();
    });

    provide_context(Services {
        config,
        client,
        session,
    });
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/catering-site.css"/>
        <Title text="shanvikcateringevents | Turning Moments into Memories"/>
        <Meta name="description" content="Wedding, corporate and private party catering in Chennai."/>
        <Router>
            <Routes>
                <Route path="/admin/login" view=AdminLogin/>
                <Route path="/admin/dashboard" view=AdminDashboard/>
                <Route path="/" view=PublicShell>
                    <Route path="" view=HomePage/>
                    <Route path="gallery" view=GalleryPage/>
                    <Route path="blog" view=BlogPage/>
                    <Route path="blog/:slug" view=BlogPostPage/>
                    <Route path="*any" view=NotFound/>
                </Route>
            </Routes>
        </Router>
    }
}

/// Header and footer around every public page.
#[component]
fn PublicShell() -> impl IntoView {
    view! {
        <div class="shell">
            <Header/>
            <main class="shell-main">
                <Outlet/>
            </main>
            <Footer/>
        </div>
    }
}
