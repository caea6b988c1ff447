use leptos::*;

const PHOTOS: [(&str, &str); 3] = [
    ("1126728", "Traditional cooking"),
    ("1640774", "Catering event"),
    ("1267320", "Food preparation"),
];

const STATS: [(&str, &str); 3] = [
    ("20+", "Years of Experience"),
    ("1000+", "Events Catered"),
    ("100%", "Client Satisfaction"),
];

#[component]
pub fn OurStory() -> impl IntoView {
    view! {
        <section id="story" class="section story">
            <div class="container">
                <h2 class="section-title">{ "A Culinary Legacy" }</h2>
                <div class="divider"></div>
                <div class="story-grid">
                    <div class="story-text">
                        <p>
                            { "Inspired by the culinary finesse of " }
                            <strong>{ "SMT. Chirla Pushpaveni Reddy" }</strong>
                            { ", Pushpa's Kitchen emerged as a venture of Hanu Reddy Odyssey. Our mission is to extend the love and flavours of her kitchen to every table, enriching lives through the art of cooking." }
                        </p>
                        <p>
                            { "With decades of experience in crafting memorable dining experiences, we bring together traditional recipes passed down through generations with modern culinary techniques." }
                        </p>
                        <p>
                            { "Our commitment to quality, hygiene, and personalized service has made us the preferred choice for celebrations across the region." }
                        </p>
                    </div>
                    <div class="story-photos">
                        {PHOTOS
                            .iter()
                            .map(|(id, alt)| {
                                let src = format!(
                                    "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w=800"
                                );
                                view! { <img src=src alt=*alt loading="lazy"/> }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="stats">
                    {STATS
                        .iter()
                        .map(|(value, label)| view! {
                            <div class="stat">
                                <div class="stat-value">{*value}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
