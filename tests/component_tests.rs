//! Browser tests: `wasm-pack test --headless --firefox --no-default-features --features wasm-test`
#![cfg(target_arch = "wasm32")]

use async_trait::async_trait;
use gloo_timers::future::sleep;
use leptos::*;
use leptos_router::Router;
use serde_json::json;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use catering_site::app::Services;
use catering_site::backend::{BearerToken, Collection, DataClient, MemoryBackend};
use catering_site::components::menu_carousel::MenuCarousel;
use catering_site::components::resource_manager::resource_manager;
use catering_site::components::testimonials_carousel::StarRating;
use catering_site::config::{AppConfig, ANON_KEY_VAR, BACKEND_URL_VAR};
use catering_site::error::AuthError;
use catering_site::models::Testimonial;
use catering_site::pages::blog::BlogPage;
use catering_site::pages::gallery::GalleryPage;
use catering_site::session::{AuthProvider, Credentials, Session, SessionStore};

wasm_bindgen_test_configure!(run_in_browser);

struct SignedOut;

#[async_trait(?Send)]
impl AuthProvider for SignedOut {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(None)
    }

    async fn sign_in(&self, _credentials: &Credentials) -> Result<Session, AuthError> {
        Err(AuthError::InvalidCredentials)
    }

    async fn sign_out(&self, _session: &Session) -> Result<(), AuthError> {
        Ok(())
    }
}

fn services(backend: Rc<MemoryBackend>) -> Services {
    let config = AppConfig::from_vars(|var| match var {
        BACKEND_URL_VAR => Some("https://test.supabase.co".to_string()),
        ANON_KEY_VAR => Some("anon".to_string()),
        _ => None,
    })
    .unwrap();
    Services {
        config,
        client: DataClient::new(backend),
        session: SessionStore::new(Rc::new(SignedOut), BearerToken::default()),
    }
}

fn mount_container(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn remove_container(container: &web_sys::Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().remove_child(container).unwrap();
}

fn count(container: &web_sys::Element, selector: &str) -> u32 {
    container.query_selector_all(selector).unwrap().length()
}

fn click_button(container: &web_sys::Element, label: &str) {
    let buttons = container.query_selector_all("button").unwrap();
    for i in 0..buttons.length() {
        let button: web_sys::HtmlElement = buttons.item(i).unwrap().unchecked_into();
        if button.text_content().as_deref() == Some(label) {
            button.click();
            return;
        }
    }
    panic!("no button labelled {label:?}");
}

async fn wait_for(mut ready: impl FnMut() -> bool) {
    for _ in 0..20 {
        if ready() {
            return;
        }
        sleep(Duration::from_millis(50)).await;
    }
}

#[wasm_bindgen_test]
async fn star_rating_fills_the_given_number_of_stars() {
    let container = mount_container("star-rating");
    mount_to(container.clone().unchecked_into(), || view! { <StarRating rating=3/> });

    assert_eq!(count(&container, ".star"), 5);
    assert_eq!(count(&container, ".star.filled"), 3);

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn empty_gallery_filters_placeholder_images() {
    let container = mount_container("gallery-page");
    let services = services(Rc::new(MemoryBackend::new()));
    mount_to(container.clone().unchecked_into(), move || {
        provide_context(services);
        view! { <GalleryPage/> }
    });

    wait_for(|| count(&container, ".gallery-item") > 0).await;
    assert_eq!(count(&container, ".gallery-item"), 10);

    click_button(&container, "Wedding");
    wait_for(|| count(&container, ".gallery-item") == 2).await;
    assert_eq!(count(&container, ".gallery-item"), 2);

    click_button(&container, "All");
    wait_for(|| count(&container, ".gallery-item") == 10).await;
    assert_eq!(count(&container, ".gallery-item"), 10);

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn testimonial_manager_lists_records_and_opens_the_form() {
    let container = mount_container("testimonial-manager");
    let backend = Rc::new(MemoryBackend::new());
    backend.seed(
        Collection::Testimonials,
        vec![
            json!({"reviewer_name": "Anand", "content": "Wonderful food", "rating": 4}),
            json!({"reviewer_name": "Meera", "content": "Great service"}),
        ],
    );
    let services = services(backend);
    mount_to(container.clone().unchecked_into(), move || {
        provide_context(services);
        resource_manager::<Testimonial>("Testimonials")
    });

    wait_for(|| count(&container, ".record") == 2).await;
    assert_eq!(count(&container, ".record"), 2);
    assert_eq!(count(&container, "form"), 0);

    click_button(&container, "New");
    wait_for(|| count(&container, "form") == 1).await;
    assert_eq!(count(&container, "form .field"), 5);

    click_button(&container, "Cancel");
    wait_for(|| count(&container, "form") == 0).await;
    assert_eq!(count(&container, "form"), 0);

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn menu_dots_jump_straight_to_an_item() {
    let container = mount_container("menu-carousel");
    let services = services(Rc::new(MemoryBackend::new()));
    mount_to(container.clone().unchecked_into(), move || {
        provide_context(services);
        view! { <MenuCarousel/> }
    });

    wait_for(|| count(&container, ".dot") == 5).await;
    assert_eq!(count(&container, ".dot"), 5);
    assert_eq!(count(&container, ".menu-card"), 3);

    let last: web_sys::HtmlElement = container
        .query_selector("[aria-label='Go to menu 5']")
        .unwrap()
        .unwrap()
        .unchecked_into();
    last.click();
    let selected = "[aria-label='Go to menu 5'].active";
    wait_for(|| count(&container, selected) == 1).await;
    assert_eq!(count(&container, selected), 1);
    assert_eq!(count(&container, ".dot.active"), 1);

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn blog_page_renders_a_card_per_post() {
    let container = mount_container("blog-page");
    let services = services(Rc::new(MemoryBackend::new()));
    mount_to(container.clone().unchecked_into(), move || {
        provide_context(services);
        view! { <Router><BlogPage/></Router> }
    });

    wait_for(|| count(&container, ".blog-card") == 3).await;
    assert_eq!(count(&container, ".blog-card"), 3);
    assert_eq!(count(&container, ".blog-card h2 a"), 3);

    remove_container(&container);
}
