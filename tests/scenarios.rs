//! End-to-end flows over the in-memory backend.
#![cfg(not(target_arch = "wasm32"))]

use catering_site::backend::memory::Call;
use catering_site::backend::{Collection, DataClient, MemoryBackend};
use catering_site::config::ChatLink;
use catering_site::contact::{self, ContactForm, LinkOpener, SubmitStatus};
use catering_site::dashboard::fetch_stats;
use catering_site::editor::{Manager, Mode};
use catering_site::listing::{CategoryFilter, ListQuery};
use catering_site::models::{BlogPost, GalleryCategory, GalleryImage, MenuItem, Testimonial};
use catering_site::placeholders;
use leptos::logging::log;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn setup() -> (Rc<MemoryBackend>, DataClient) {
    let backend = Rc::new(MemoryBackend::new());
    (backend.clone(), DataClient::new(backend))
}

#[derive(Default)]
struct CapturedLinks(RefCell<Vec<String>>);

impl LinkOpener for CapturedLinks {
    fn open(&self, url: &str) {
        self.0.borrow_mut().push(url.to_string());
    }
}

#[tokio::test]
async fn contact_form_opens_chat_and_stores_inquiry() {
    log!("[TEST] Contact form submission");
    let (backend, client) = setup();
    let links = CapturedLinks::default();
    let mut form = ContactForm {
        name: "Priya".into(),
        email: "p@x.com".into(),
        phone: "9999999999".into(),
        message: "Need a quote".into(),
        ..ContactForm::default()
    };

    let result = contact::submit(&mut form, &ChatLink::default(), &client, &links).await;
    assert_eq!(contact::status_of(&result), SubmitStatus::Success);

    let links = links.0.borrow();
    assert_eq!(links.len(), 1);
    assert!(links[0].starts_with("https://wa.me/919840650939?text="));
    assert!(links[0].contains("Hello%21%20I%27m%20Priya."));
    assert!(links[0].contains("Need%20a%20quote"));

    let rows = backend.rows(Collection::ContactInquiries);
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["name"], "Priya");
    assert_eq!(row["email"], "p@x.com");
    assert_eq!(row["phone"], "9999999999");
    assert_eq!(row["message"], "Need a quote");
    assert_eq!(row["via_whatsapp"], true);
}

#[tokio::test]
async fn blog_post_without_slug_gets_one_from_its_title() {
    log!("[TEST] Blog post slug derivation");
    let (backend, client) = setup();
    let mut manager = Manager::<BlogPost>::new();
    manager.begin_create();
    manager.set_field("title", "Test Post!!");
    manager.set_field("thumbnail_url", "https://img/test.jpg");
    manager.set_field("excerpt", "Excerpt");
    manager.set_field("content", "First.\n\nSecond.");

    manager.submit(&client).await.unwrap();

    assert_eq!(manager.mode, Mode::Idle);
    let rows = backend.rows(Collection::BlogPosts);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["slug"], "test-post");

    let post = &manager.records()[0];
    assert_eq!(post.slug, "test-post");
    assert_eq!(post.paragraphs(), vec!["First.", "Second."]);
}

#[tokio::test]
async fn empty_gallery_shows_placeholders() {
    log!("[TEST] Empty gallery fallback");
    let (_backend, client) = setup();
    let images = ListQuery::with_placeholders(placeholders::gallery_images)
        .fetch(&client)
        .await;
    assert_eq!(images.len(), 10);
    assert_eq!(images[0].title, "Wedding Event");

    let weddings = CategoryFilter::Only(GalleryCategory::Wedding).apply(&images);
    assert_eq!(weddings.len(), 2);
    assert!(weddings.iter().all(|i| i.category == GalleryCategory::Wedding));
}

#[tokio::test]
async fn testimonial_delete_respects_confirmation() {
    log!("[TEST] Testimonial delete");
    let (backend, client) = setup();
    backend.seed(
        Collection::Testimonials,
        vec![
            json!({"id": "keep", "reviewer_name": "A", "content": "Good"}),
            json!({"id": "drop", "reviewer_name": "B", "content": "Great", "rating": 4}),
        ],
    );
    let mut manager = Manager::<Testimonial>::new();
    manager.refresh(&client).await.unwrap();
    assert_eq!(manager.records().len(), 2);
    backend.clear_calls();

    assert!(!manager.delete(&client, "drop", false).await.unwrap());
    assert!(backend.calls().is_empty());

    assert!(manager.delete(&client, "drop", true).await.unwrap());
    assert!(manager.records().iter().all(|t| t.id != "drop"));
    assert_eq!(manager.records().len(), 1);
    assert_eq!(manager.records()[0].rating, 5);
}

#[tokio::test]
async fn lists_are_newest_first_and_posts_by_publish_date() {
    let (backend, client) = setup();
    backend.seed(
        Collection::MenuItems,
        vec![
            json!({"name": "Old", "category": "Desserts", "description": "", "image_url": "", "created_at": "2023-01-01T00:00:00Z"}),
            json!({"name": "New", "category": "Non-Vegetarian", "description": "", "image_url": "", "created_at": "2024-01-01T00:00:00Z"}),
        ],
    );
    backend.seed(
        Collection::BlogPosts,
        vec![
            json!({"title": "Later", "slug": "later", "thumbnail_url": "", "excerpt": "", "content": "",
                   "published_at": "2024-05-01T00:00:00Z", "updated_at": "2024-05-01T00:00:00Z",
                   "created_at": "2024-01-01T00:00:00Z"}),
            json!({"title": "Earlier", "slug": "earlier", "thumbnail_url": "", "excerpt": "", "content": "",
                   "published_at": "2024-02-01T00:00:00Z", "updated_at": "2024-02-01T00:00:00Z",
                   "created_at": "2024-06-01T00:00:00Z"}),
        ],
    );

    let menu = client.list::<MenuItem>().await.unwrap();
    assert_eq!(menu[0].name, "New");

    let posts = client.list::<BlogPost>().await.unwrap();
    assert_eq!(posts[0].slug, "later");
    assert_eq!(posts[1].slug, "earlier");
}

#[tokio::test]
async fn editing_a_gallery_image_keeps_its_id() {
    let (backend, client) = setup();
    backend.seed(
        Collection::GalleryImages,
        vec![json!({"id": "g1", "title": "Before", "alt_text": "a", "image_url": "u", "category": "Outdoor"})],
    );
    let mut manager = Manager::<GalleryImage>::new();
    manager.refresh(&client).await.unwrap();
    let record = manager.records()[0].clone();

    manager.begin_create();
    manager.begin_edit(&record);
    manager.set_field("title", "After");
    manager.set_field("category", "Luxury");
    manager.submit(&client).await.unwrap();

    let updated = &manager.records()[0];
    assert_eq!(updated.id, "g1");
    assert_eq!(updated.title, "After");
    assert_eq!(updated.category, GalleryCategory::Luxury);
    assert!(backend.calls().contains(&Call::Update(Collection::GalleryImages, "g1".into())));
}

#[tokio::test]
async fn dashboard_counts_follow_writes() {
    let (backend, client) = setup();
    let mut manager = Manager::<MenuItem>::new();
    for name in ["Idli", "Vada"] {
        manager.begin_create();
        manager.set_field("name", name);
        manager.set_field("description", "South Indian");
        manager.set_field("image_url", "https://img/m.jpg");
        manager.submit(&client).await.unwrap();
    }

    let stats = fetch_stats(&client).await;
    assert_eq!(stats.menu, 2);
    assert_eq!(stats.gallery, 0);

    backend.fail_reads(true);
    assert_eq!(fetch_stats(&client).await.menu, 0);
}

#[tokio::test]
async fn one_malformed_row_does_not_hide_the_others() {
    log!("[TEST] Malformed testimonial row");
    let (backend, client) = setup();
    backend.seed(
        Collection::Testimonials,
        vec![
            json!({"id": "live", "reviewer_name": "Anand", "content": "Lovely food"}),
            json!({"id": "broken", "reviewer_name": "Meera", "content": "Great", "photo_url": null}),
        ],
    );

    let public = ListQuery::with_placeholders(placeholders::testimonials)
        .fetch(&client)
        .await;
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].id, "live");

    let mut manager = Manager::<Testimonial>::new();
    manager.refresh(&client).await.unwrap();
    assert_eq!(manager.records().len(), 1);
    assert_eq!(manager.records()[0].reviewer_name, "Anand");
}
