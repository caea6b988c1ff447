/// "Let's Plan Your Perfect Event": contact details next to the inquiry form.
use leptos::ev::SubmitEvent;
use leptos::*;

use crate::app::use_services;
use crate::contact::{self, ContactForm, SubmitStatus};
use crate::utils::browser::BrowserLinkOpener;
use crate::utils::leptos_owner::commit;

const PHONE: &str = "+91 98406 50939";
const EMAIL: &str = "info@shanvikcateringevents.com";
const LOCATION: &str = "Chennai, Tamil Nadu, India";

#[component]
pub fn ContactSection() -> impl IntoView {
    let services = use_services();
    let form = create_rw_signal(ContactForm::default());
    let status = create_rw_signal(SubmitStatus::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == SubmitStatus::Submitting
            || !form.with_untracked(ContactForm::is_complete)
        {
            return;
        }
        status.set(SubmitStatus::Submitting);

        let (chat, client) = services.with_value(|s| (s.config.chat.clone(), s.client.clone()));
        let mut draft = form.get_untracked();
        spawn_local(async move {
            let result = contact::submit(&mut draft, &chat, &client, &BrowserLinkOpener).await;
            if result.is_ok() {
                commit("contact form", form, draft);
            }
            commit("contact status", status, contact::status_of(&result));
        });
    };

    let text_input = move |id: &'static str, label: &'static str, kind: &'static str| {
        let read = move || {
            form.with(|f| match id {
                "name" => f.name.clone(),
                "email" => f.email.clone(),
                _ => f.phone.clone(),
            })
        };
        view! {
            <div class="field">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    required=true
                    prop:value=read
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| match id {
                            "name" => f.name = value,
                            "email" => f.email = value,
                            _ => f.phone = value,
                        })
                    }
                />
            </div>
        }
    };

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <h2 class="section-title">{ "Let's Plan Your Perfect Event" }</h2>
                <div class="divider"></div>
                <p class="section-lead">{ "Get in touch with us to discuss your catering needs" }</p>
                <div class="contact-grid">
                    <div class="contact-info">
                        <div class="contact-line">
                            <h4>{ "Phone" }</h4>
                            <a href=format!("tel:{}", PHONE.replace(' ', ""))>{PHONE}</a>
                        </div>
                        <div class="contact-line">
                            <h4>{ "Email" }</h4>
                            <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                        </div>
                        <div class="contact-line">
                            <h4>{ "Location" }</h4>
                            <p>{LOCATION}</p>
                        </div>
                    </div>
                    <form class="card contact-form" on:submit=on_submit>
                        {text_input("name", "Name *", "text")}
                        {text_input("email", "Email *", "email")}
                        {text_input("phone", "Phone Number *", "tel")}
                        <div class="field">
                            <label for="message">{ "Message *" }</label>
                            <textarea
                                id="message"
                                rows=4
                                required=true
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                            ></textarea>
                        </div>
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.via_whatsapp)
                                on:change=move |ev| form.update(|f| f.via_whatsapp = event_target_checked(&ev))
                            />
                            { "Connect via WhatsApp" }
                        </label>
                        {move || match status.get() {
                            SubmitStatus::Success => Some(view! {
                                <div class="banner success">{ "Thank you! We'll get back to you soon." }</div>
                            }),
                            SubmitStatus::Error => Some(view! {
                                <div class="banner error">{ "Something went wrong. Please try again." }</div>
                            }),
                            _ => None,
                        }}
                        <button
                            type="submit"
                            class="button primary wide"
                            disabled=move || status.get() == SubmitStatus::Submitting
                        >
                            {move || if status.get() == SubmitStatus::Submitting { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
