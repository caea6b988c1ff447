use leptos::*;
use leptos_router::A;

use crate::app::use_services;
use crate::listing::ListQuery;
use crate::models::BlogPost;
use crate::placeholders;
use crate::utils::leptos_owner::load_into;

pub const DATE_FORMAT: &str = "%B %-d, %Y";

#[component]
pub fn BlogPage() -> impl IntoView {
    let services = use_services();
    let posts = create_rw_signal(Vec::<BlogPost>::new());

    create_effect(move |_| {
        let client = services.with_value(|s| s.client.clone());
        load_into("blog posts", posts, async move {
            ListQuery::with_placeholders(placeholders::blog_posts)
                .fetch(&client)
                .await
        });
    });

    view! {
        <div class="page">
            <div class="page-banner">
                <h1>{ "Our Blog" }</h1>
                <p>{ "Stories, tips and inspiration from our kitchen" }</p>
            </div>
            <div class="container blog-grid">
                <For
                    each=move || posts.get()
                    key=|post| post.id.clone()
                    children=|post| {
                        let href = format!("/blog/{}", post.slug);
                        let thumbnail = post.thumbnail_url;
                        let alt = post.title.clone();
                        let title = post.title;
                        view! {
                            <article class="card blog-card">
                                <A href=href.clone()>
                                    <img src=thumbnail alt=alt loading="lazy"/>
                                </A>
                                <div class="blog-card-body">
                                    <time>{post.published_at.format(DATE_FORMAT).to_string()}</time>
                                    <h2><A href=href.clone()>{title}</A></h2>
                                    <p>{post.excerpt}</p>
                                    <A href=href class="read-more">{ "Read More →" }</A>
                                </div>
                            </article>
                        }
                    }
                />
            </div>
        </div>
    }
}
