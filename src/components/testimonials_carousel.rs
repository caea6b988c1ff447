/// "What Our Clients Say": one testimonial at a time with arrows and dots.
use leptos::*;

use crate::app::use_services;
use crate::listing::{Carousel, ListQuery};
use crate::models::testimonial::MAX_RATING;
use crate::models::Testimonial;
use crate::placeholders;
use crate::utils::leptos_owner::load_into;

#[component]
pub fn TestimonialsCarousel() -> impl IntoView {
    let services = use_services();
    let testimonials = create_rw_signal(placeholders::testimonials());
    let carousel = create_rw_signal(Carousel::new(testimonials.with_untracked(Vec::len), 1));

    create_effect(move |_| {
        let client = services.with_value(|s| s.client.clone());
        load_into("testimonials", testimonials, async move {
            ListQuery::with_placeholders(placeholders::testimonials)
                .fetch(&client)
                .await
        });
    });

    create_effect(move |_| {
        let len = testimonials.with(Vec::len);
        carousel.update(|c| c.resize(len));
    });

    let current = move || {
        let index = carousel.with(Carousel::index);
        testimonials.with(|all| all.get(index).cloned())
    };
    let can_navigate = move || carousel.with(Carousel::can_navigate);

    view! {
        <section id="testimonials" class="section testimonials">
            <div class="container narrow">
                <h2 class="section-title">{ "What Our Clients Say" }</h2>
                <div class="divider"></div>
                <div class="carousel">
                    <Show when=can_navigate>
                        <button
                            class="carousel-nav prev"
                            aria-label="Previous testimonial"
                            on:click=move |_| carousel.update(Carousel::prev)
                        >
                            { "‹" }
                        </button>
                    </Show>
                    {move || current().map(|t| view! { <TestimonialCard testimonial=t/> })}
                    <Show when=can_navigate>
                        <button
                            class="carousel-nav next"
                            aria-label="Next testimonial"
                            on:click=move |_| carousel.update(Carousel::next)
                        >
                            { "›" }
                        </button>
                    </Show>
                </div>
                <Show when=can_navigate>
                    <div class="carousel-dots">
                        {move || {
                            let active = carousel.with(Carousel::index);
                            (0..carousel.with(Carousel::len))
                                .map(|i| view! {
                                    <button
                                        class="dot"
                                        class:active={i == active}
                                        aria-label=format!("Go to testimonial {}", i + 1)
                                        on:click=move |_| carousel.update(|c| c.go_to(i))
                                    ></button>
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
                <div class="instagram">
                    <h3>{ "Follow us on Instagram" }</h3>
                    <a href="https://instagram.com/shanvikcateringevents" target="_blank" rel="noopener noreferrer">
                        { "@shanvikcateringevents" }
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let video = testimonial.video_url.clone();
    let photo = Some(testimonial.photo_url.clone()).filter(|p| !p.is_empty());

    view! {
        <blockquote class="testimonial-card">
            <StarRating rating=testimonial.rating/>
            <p class="quote">{testimonial.content}</p>
            <footer class="testimonial-author">
                {photo.map(|src| view! { <img class="avatar" src=src alt=""/> })}
                <cite>{testimonial.reviewer_name}</cite>
                {video.map(|href| view! {
                    <a class="video-link" href=href target="_blank" rel="noopener noreferrer">
                        { "Watch video" }
                    </a>
                })}
            </footer>
        </blockquote>
    }
}

#[component]
pub fn StarRating(rating: u8) -> impl IntoView {
    view! {
        <span class="stars" aria-label=format!("{rating} out of {MAX_RATING} stars")>
            {(1..=MAX_RATING)
                .map(|star| view! { <span class="star" class:filled={star <= rating}>{ "★" }</span> })
                .collect_view()}
        </span>
    }
}
