/// Gallery page: category filter buttons over an image grid, with a
/// lightbox for the clicked image.
use leptos::*;

use crate::app::use_services;
use crate::listing::{CategoryFilter, ListQuery};
use crate::models::{GalleryCategory, GalleryImage};
use crate::placeholders;
use crate::utils::leptos_owner::load_into;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let services = use_services();
    let images = create_rw_signal(Vec::<GalleryImage>::new());
    let filter = create_rw_signal(CategoryFilter::<GalleryCategory>::All);
    let lightbox = create_rw_signal(None::<GalleryImage>);

    create_effect(move |_| {
        let client = services.with_value(|s| s.client.clone());
        load_into("gallery", images, async move {
            ListQuery::with_placeholders(placeholders::gallery_images)
                .fetch(&client)
                .await
        });
    });

    let filtered = move || images.with(|all| filter.get().apply(all));

    view! {
        <div class="page">
            <div class="page-banner">
                <h1>{ "Our Gallery" }</h1>
                <p>{ "Explore our memorable events and celebrations" }</p>
            </div>
            <div class="container">
                <div class="filter-bar">
                    {CategoryFilter::<GalleryCategory>::options()
                        .into_iter()
                        .map(|option| view! {
                            <button
                                class="filter"
                                class:active=move || filter.get() == option
                                on:click=move |_| filter.set(option)
                            >
                                {option.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
                <div class="gallery-grid">
                    <For
                        each=filtered
                        key=|image| image.id.clone()
                        children=move |image| {
                            let opened = image.clone();
                            view! {
                                <figure class="gallery-item" on:click=move |_| lightbox.set(Some(opened.clone()))>
                                    <img src=image.image_url alt=image.alt_text loading="lazy"/>
                                    <figcaption>
                                        <h3>{image.title}</h3>
                                        <span>{image.category.to_string()}</span>
                                    </figcaption>
                                </figure>
                            }
                        }
                    />
                </div>
            </div>
            {move || lightbox.get().map(|image| view! {
                <div class="lightbox" on:click=move |_| lightbox.set(None)>
                    <button class="lightbox-close" aria-label="Close">{ "✕" }</button>
                    <img src=image.image_url alt=image.alt_text on:click=|ev| ev.stop_propagation()/>
                    <p class="lightbox-caption">{image.title}</p>
                </div>
            })}
        </div>
    }
}
