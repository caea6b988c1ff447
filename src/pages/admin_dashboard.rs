/// Admin dashboard: summary counts, one tab per collection, sign-out.
use leptos::*;
use leptos_router::use_navigate;

use crate::app::{use_auth, use_services};
use crate::components::inquiries_viewer::InquiriesViewer;
use crate::components::resource_manager::resource_manager;
use crate::dashboard::{access, fetch_stats, Access, DashboardStats, DashboardTab};
use crate::models::{BlogPost, GalleryImage, MenuItem, Testimonial};
use crate::utils::leptos_owner::load_into;

pub const LOGIN_PATH: &str = "/admin/login";

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let services = use_services();
    let auth = use_auth();
    let navigate = use_navigate();

    let tab = create_rw_signal(DashboardTab::default());
    let stats = create_rw_signal(DashboardStats::default());

    let access_state = create_memo(move |_| auth.user.with(|user| access(auth.ready.get(), user.as_ref())));

    let to_login = navigate.clone();
    create_effect(move |_| {
        if access_state.get() == Access::RedirectToLogin {
            to_login(LOGIN_PATH, Default::default());
        }
    });

    // Counts are refreshed whenever the admin switches tab, so badges catch
    // up with edits made in the previous tab.
    create_effect(move |_| {
        if access_state.get() != Access::Granted {
            return;
        }
        let _ = tab.get();
        let client = services.with_value(|s| s.client.clone());
        load_into("dashboard counts", stats, async move { fetch_stats(&client).await });
    });

    let sign_out = move |_| {
        let session = services.with_value(|s| s.session.clone());
        let navigate = navigate.clone();
        spawn_local(async move {
            session.sign_out().await;
            navigate(LOGIN_PATH, Default::default());
        });
    };

    let panel = move || match tab.get() {
        DashboardTab::Gallery => resource_manager::<GalleryImage>("Gallery Images").into_view(),
        DashboardTab::Menu => resource_manager::<MenuItem>("Menu Items").into_view(),
        DashboardTab::Testimonials => resource_manager::<Testimonial>("Testimonials").into_view(),
        DashboardTab::Blog => resource_manager::<BlogPost>("Blog Posts").into_view(),
        DashboardTab::Inquiries => view! { <InquiriesViewer/> }.into_view(),
    };

    view! {
        <Show
            when=move || access_state.get() == Access::Granted
            fallback=|| view! {
                <div class="spinner-wrap"><div class="spinner" aria-label="Loading"></div></div>
            }
        >
            <div class="dashboard">
                <header class="dashboard-header">
                    <div>
                        <h1>{ "Admin Dashboard" }</h1>
                        <p class="muted">
                            {move || auth.user.with(|u| {
                                u.as_ref()
                                    .and_then(|u| u.email.clone())
                                    .unwrap_or_else(|| "Manage your catering website".to_string())
                            })}
                        </p>
                    </div>
                    <button class="button" on:click=sign_out.clone()>{ "Sign Out" }</button>
                </header>
                <div class="stat-tabs">
                    {DashboardTab::ALL
                        .into_iter()
                        .map(|t| view! {
                            <button
                                class="stat-tab"
                                class:active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                <span class="stat-count">{move || stats.with(|s| s.for_tab(t))}</span>
                                <span class="stat-label">{t.label()}</span>
                            </button>
                        })
                        .collect_view()}
                </div>
                <section class="dashboard-panel">{panel}</section>
            </div>
        </Show>
    }
}
