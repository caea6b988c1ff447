/// "Our Menus" section: menu items three at a time, with arrows and dots.
use leptos::*;

use crate::app::use_services;
use crate::listing::{Carousel, ListQuery};
use crate::models::MenuItem;
use crate::placeholders;
use crate::utils::leptos_owner::load_into;

const WINDOW: usize = 3;

#[component]
pub fn MenuCarousel() -> impl IntoView {
    let services = use_services();
    let items = create_rw_signal(placeholders::menu_items());
    let carousel = create_rw_signal(Carousel::new(items.with_untracked(Vec::len), WINDOW));

    create_effect(move |_| {
        let client = services.with_value(|s| s.client.clone());
        load_into("menu items", items, async move {
            ListQuery::with_placeholders(placeholders::menu_items)
                .fetch(&client)
                .await
        });
    });

    create_effect(move |_| {
        let len = items.with(Vec::len);
        carousel.update(|c| c.resize(len));
    });

    let visible = move || {
        items.with(|items| {
            carousel.with(|c| {
                c.visible_items(items)
                    .into_iter()
                    .cloned()
                    .map(|item| view! { <MenuCard item/> })
                    .collect_view()
            })
        })
    };

    view! {
        <section id="menu" class="section menus">
            <div class="container">
                <h2 class="section-title">{ "Our Menus" }</h2>
                <div class="divider"></div>
                <p class="section-lead">
                    { "Explore our diverse menu offerings crafted to delight every palate" }
                </p>
                <div class="carousel">
                    <Show when=move || carousel.with(Carousel::can_navigate)>
                        <button
                            class="carousel-nav prev"
                            aria-label="Previous menu"
                            on:click=move |_| carousel.update(Carousel::prev)
                        >
                            { "‹" }
                        </button>
                    </Show>
                    <div class="menu-grid">{visible}</div>
                    <Show when=move || carousel.with(Carousel::can_navigate)>
                        <button
                            class="carousel-nav next"
                            aria-label="Next menu"
                            on:click=move |_| carousel.update(Carousel::next)
                        >
                            { "›" }
                        </button>
                    </Show>
                </div>
                <Show when=move || carousel.with(Carousel::can_navigate)>
                    <div class="carousel-dots">
                        {move || {
                            let active = carousel.with(Carousel::index);
                            (0..carousel.with(Carousel::len))
                                .map(|i| view! {
                                    <button
                                        class="dot"
                                        class:active={i == active}
                                        aria-label=format!("Go to menu {}", i + 1)
                                        on:click=move |_| carousel.update(|c| c.go_to(i))
                                    ></button>
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn MenuCard(item: MenuItem) -> impl IntoView {
    view! {
        <article class="menu-card">
            <img src=item.image_url alt=item.name.clone() loading="lazy"/>
            <div class="menu-card-body">
                <span class="badge">{item.category.to_string()}</span>
                <h3>{item.name}</h3>
                <p>{item.description}</p>
            </div>
        </article>
    }
}
