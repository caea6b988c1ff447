use leptos::*;

struct Service {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 5],
}

const SERVICES: [Service; 3] = [
    Service {
        title: "Wedding Catering",
        description: "Make your special day unforgettable with our bespoke wedding catering services.",
        features: [
            "Customized menu planning",
            "Traditional & contemporary cuisines",
            "Elegant presentation and service",
            "Complete event coordination",
            "Special dietary accommodations",
        ],
    },
    Service {
        title: "Corporate Events",
        description: "Professional catering solutions for business gatherings and corporate functions.",
        features: [
            "Business lunch packages",
            "Conference & seminar catering",
            "Office celebrations",
            "Networking event solutions",
            "Timely and efficient service",
        ],
    },
    Service {
        title: "Private Parties",
        description: "Celebrate life's moments with our personalized party catering services.",
        features: [
            "Birthday celebrations",
            "Anniversary parties",
            "Family reunions",
            "Intimate gatherings",
            "Themed menu options",
        ],
    },
];

const REASONS: [(&str, &str); 3] = [
    (
        "Individual & Personal Attention",
        "Every event receives our undivided attention and personalized service",
    ),
    (
        "Fresh, Local Ingredients",
        "We source the finest local ingredients to ensure quality and freshness",
    ),
    (
        "Hygiene First",
        "Our kitchens follow strict hygiene standards from preparation to plating",
    ),
];

#[component]
pub fn CateringServices() -> impl IntoView {
    view! {
        <section id="services" class="section services">
            <div class="container">
                <h2 class="section-title">{ "Catering Services" }</h2>
                <div class="divider"></div>
                <p class="section-lead">
                    { "From intimate gatherings to grand celebrations, we create memorable culinary experiences" }
                </p>
                <div class="card-grid">
                    {SERVICES
                        .iter()
                        .map(|service| view! {
                            <article class="service-card">
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul>
                                    {service.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                            </article>
                        })
                        .collect_view()}
                </div>
                <div class="reasons">
                    <h3>{ "Why Choose Us?" }</h3>
                    <div class="card-grid">
                        {REASONS
                            .iter()
                            .map(|(title, text)| view! {
                                <div class="reason">
                                    <h4>{*title}</h4>
                                    <p>{*text}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
