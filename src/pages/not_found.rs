use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFound() -> impl IntoView {
    // Let the server answer with a real 404.
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(actix_web::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1 class="not-found-code">{ "404" }</h1>
            <h2>{ "Page Not Found" }</h2>
            <p>
                { "Oops! The page you're looking for seems to have wandered off. Let's get you back on track." }
            </p>
            <div class="hero-actions">
                <A href="/" class="button primary">{ "Go to Homepage" }</A>
                <button
                    class="button light"
                    on:click=move |_| {
                        if let Ok(history) = gloo_utils::window().history() {
                            let _ = history.back();
                        }
                    }
                >
                    { "Go Back" }
                </button>
            </div>
            <p class="muted">
                { "Need help? " }
                <a href="/#contact">{ "Contact us" }</a>
            </p>
        </div>
    }
}
