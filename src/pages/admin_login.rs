use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, A};

use crate::app::{use_auth, use_services};
use crate::session::Credentials;

pub const DASHBOARD_PATH: &str = "/admin/dashboard";

#[component]
pub fn AdminLogin() -> impl IntoView {
    let services = use_services();
    let auth = use_auth();
    let navigate = use_navigate();

    let credentials = create_rw_signal(Credentials::default());
    let error = create_rw_signal(None::<String>);
    let pending = create_rw_signal(false);

    // Already signed in, possibly from a restored session.
    let to_dashboard = navigate.clone();
    create_effect(move |_| {
        if auth.user.with(Option::is_some) {
            to_dashboard(DASHBOARD_PATH, Default::default());
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let session = services.with_value(|s| s.session.clone());
        let creds = credentials.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            match session.sign_in(&creds).await {
                Ok(_) => navigate(DASHBOARD_PATH, Default::default()),
                Err(err) => {
                    let _ = error.try_set(Some(err.to_string()));
                }
            }
            let _ = pending.try_set(false);
        });
    };

    view! {
        <div class="admin-login">
            <form class="card login-card" on:submit=on_submit>
                <h1>{ "Admin Login" }</h1>
                <p class="muted">{ "Sign in to manage your website" }</p>
                {move || error.get().map(|err| view! { <div class="banner error">{err}</div> })}
                <div class="field">
                    <label for="email">{ "Email" }</label>
                    <input
                        type="email"
                        id="email"
                        required=true
                        autocomplete="username"
                        prop:value=move || credentials.with(|c| c.email.clone())
                        on:input=move |ev| credentials.update(|c| c.email = event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="password">{ "Password" }</label>
                    <input
                        type="password"
                        id="password"
                        required=true
                        autocomplete="current-password"
                        prop:value=move || credentials.with(|c| c.password.clone())
                        on:input=move |ev| credentials.update(|c| c.password = event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="button primary wide" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <A href="/" class="back-link">{ "← Back to website" }</A>
            </form>
        </div>
    }
}
