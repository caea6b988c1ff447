use chrono::{Datelike, Utc};
use leptos::*;

use super::header::{BRAND, TAGLINE};

const SOCIAL: [(&str, &str); 3] = [
    ("Instagram", "https://instagram.com/shanvikcateringevents"),
    ("Facebook", "https://facebook.com"),
    ("LinkedIn", "https://linkedin.com"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3 class="footer-brand">{BRAND}</h3>
                    <p class="muted">{TAGLINE}</p>
                </div>
                <div>
                    <h4>{ "Quick Links" }</h4>
                    <ul class="footer-links">
                        <li><a href="/#story">{ "Our Story" }</a></li>
                        <li><a href="/#services">{ "Services" }</a></li>
                        <li><a href="/gallery">{ "Gallery" }</a></li>
                        <li><a href="/blog">{ "Blog" }</a></li>
                    </ul>
                </div>
                <div>
                    <h4>{ "Follow Us" }</h4>
                    <div class="footer-social">
                        {SOCIAL
                            .iter()
                            .map(|(label, href)| view! {
                                <a href=*href target="_blank" rel="noopener noreferrer" aria-label=*label>
                                    {*label}
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {year} {BRAND}, All Rights Reserved")}</p>
            </div>
        </footer>
    }
}
