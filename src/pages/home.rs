use leptos::*;

use crate::components::{
    catering_services::CateringServices, contact_form::ContactSection, hero::Hero,
    menu_carousel::MenuCarousel, our_story::OurStory,
    testimonials_carousel::TestimonialsCarousel,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <OurStory/>
        <CateringServices/>
        <MenuCarousel/>
        <TestimonialsCarousel/>
        <ContactSection/>
    }
}
