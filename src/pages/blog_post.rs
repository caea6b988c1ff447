use leptos::*;
use leptos_router::{use_params_map, A};

use super::blog::DATE_FORMAT;
use crate::app::use_services;
use crate::listing::find_post;
use crate::models::BlogPost;
use crate::utils::browser::scroll_to_top;
use crate::utils::leptos_owner::load_into;

#[derive(Clone, PartialEq)]
enum PostState {
    Loading,
    Found(BlogPost),
    NotFound,
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let services = use_services();
    let params = use_params_map();
    let state = create_rw_signal(PostState::Loading);

    create_effect(move |_| {
        let slug = params.with(|p| p.get("slug").cloned().unwrap_or_default());
        let client = services.with_value(|s| s.client.clone());
        state.set(PostState::Loading);
        scroll_to_top();
        load_into("blog post", state, async move {
            match find_post(&client, &slug).await {
                Some(post) => PostState::Found(post),
                None => PostState::NotFound,
            }
        });
    });

    view! {
        <div class="page post-page">
            {move || match state.get() {
                PostState::Loading => view! {
                    <div class="spinner-wrap"><div class="spinner" aria-label="Loading"></div></div>
                }
                .into_view(),
                PostState::NotFound => view! {
                    <div class="container post-missing">
                        <h1>{ "Post not found" }</h1>
                        <p>{ "The article you are looking for does not exist or has been removed." }</p>
                        <A href="/blog" class="button primary">{ "Back to Blog" }</A>
                    </div>
                }
                .into_view(),
                PostState::Found(post) => view! { <PostBody post/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn PostBody(post: BlogPost) -> impl IntoView {
    let paragraphs = post
        .paragraphs()
        .into_iter()
        .map(|p| view! { <p>{p.to_string()}</p> })
        .collect_view();

    view! {
        <article class="post">
            <img class="post-hero" src=post.thumbnail_url alt=post.title.clone()/>
            <div class="container narrow">
                <A href="/blog" class="back-link">{ "← Back to Blog" }</A>
                <h1>{post.title}</h1>
                <time>{post.published_at.format(DATE_FORMAT).to_string()}</time>
                <div class="post-content">{paragraphs}</div>
            </div>
        </article>
    }
}
