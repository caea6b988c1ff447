/// Site header: navigation split either side of the centred brand, collapsing
/// into a toggle menu on narrow screens.
use leptos::*;
use leptos_router::{use_location, A};

pub const BRAND: &str = "shanvikcateringevents";
pub const TAGLINE: &str = "Turning Moments into Memories";

const LEFT_LINKS: &[(&str, &str)] = &[
    ("Our Story", "/#story"),
    ("Catering Services", "/#services"),
    ("Our Menu", "/#menu"),
];

const RIGHT_LINKS: &[(&str, &str)] = &[
    ("Gallery", "/gallery"),
    ("Testimonials", "/#testimonials"),
    ("Blog", "/blog"),
    ("Contact Us", "/#contact"),
];

/// Past this many pixels the transparent header turns solid.
const SOLID_AFTER_SCROLL: f64 = 20.0;

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let (scrolled, set_scrolled) = create_signal(false);
    let location = use_location();

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = gloo_utils::window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(y > SOLID_AFTER_SCROLL);
    });
    on_cleanup(move || handle.remove());

    // Any navigation closes the mobile menu.
    create_effect(move |_| {
        let _ = location.pathname.get();
        let _ = location.hash.get();
        set_menu_open.set(false);
    });

    let solid = move || scrolled.get() || location.pathname.with(|p| p != "/");

    let links = move |links: &'static [(&'static str, &'static str)]| {
        links
            .iter()
            .map(|(label, href)| {
                view! {
                    <a href=*href class="nav-link" on:click=move |_| set_menu_open.set(false)>
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    let brand = move || {
        view! {
            <A href="/" class="brand">
                <span class="brand-mark">{ "S" }</span>
                <span class="brand-text">
                    <span class="brand-name">{BRAND}</span>
                    <span class="brand-tagline">{TAGLINE}</span>
                </span>
            </A>
        }
    };

    view! {
        <header class="site-header" class:solid=solid>
            <nav class="nav-desktop">
                <div class="nav-side nav-left">{links(LEFT_LINKS)}</div>
                {brand()}
                <div class="nav-side nav-right">{links(RIGHT_LINKS)}</div>
            </nav>
            <nav class="nav-mobile">
                {brand()}
                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    {links(LEFT_LINKS)}
                    {links(RIGHT_LINKS)}
                </div>
            </Show>
        </header>
    }
}
