use leptos::*;

const POSTER: &str =
    "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg?auto=compress&cs=tinysrgb&w=1920";
const VIDEO: &str =
    "https://assets.mixkit.co/videos/preview/mixkit-professional-chef-cooking-in-a-restaurant-kitchen-50635-large.mp4";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <video class="hero-video" autoplay=true muted=true loop=true playsinline=true poster=POSTER>
                <source src=VIDEO type="video/mp4"/>
            </video>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1>{ "Turning Moments into Memories" }</h1>
                <h2 class="accent">{ "Made For You With Love" }</h2>
                <p class="hero-lead">
                    { "Hygienic, Quality Catering with Signature Flavours Celebrating our Culinary Heritage" }
                </p>
                <div class="hero-actions">
                    <a href="#contact" class="button primary">{ "Book a Tasting" }</a>
                    <a href="#menu" class="button light">{ "See Menu" }</a>
                </div>
            </div>
        </section>
    }
}
