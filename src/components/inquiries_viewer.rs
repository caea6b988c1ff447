/// Read-only list of contact inquiries with reply links and delete.
use leptos::*;

use crate::app::use_services;
use crate::contact::reply_link;
use crate::editor::RecordList;
use crate::models::ContactInquiry;
use crate::utils::browser::confirm_delete;
use crate::utils::leptos_owner::commit;

const NOUN: &str = "inquiry";

#[component]
pub fn InquiriesViewer() -> impl IntoView {
    let services = use_services();
    let list = create_rw_signal(RecordList::<ContactInquiry>::new());
    let error = create_rw_signal(None::<String>);

    create_effect(move |_| {
        let client = services.with_value(|s| s.client.clone());
        let mut working = list.get_untracked();
        spawn_local(async move {
            let _ = working.refresh(&client).await;
            commit("inquiries", list, working);
        });
    });

    let delete = move |id: String| {
        let confirmed = confirm_delete(NOUN);
        let client = services.with_value(|s| s.client.clone());
        let mut working = list.get_untracked();
        spawn_local(async move {
            match working.delete(&client, &id, confirmed).await {
                Ok(_) => {
                    let _ = error.try_set(None);
                    commit("inquiries", list, working);
                }
                Err(err) => {
                    let _ = error.try_set(Some(err.to_string()));
                }
            }
        });
    };

    let chat = services.with_value(|s| s.config.chat.clone());
    let rows = move || {
        list.with(|list| {
            list.records
                .iter()
                .map(|inquiry| {
                    let id = inquiry.id.clone();
                    let received = inquiry.created_at.format("%b %-d, %Y, %I:%M %p").to_string();
                    view! {
                        <li class="card inquiry">
                            <div class="inquiry-head">
                                <div>
                                    <h3>{inquiry.name.clone()}</h3>
                                    <div class="inquiry-meta">
                                        <a href=format!("mailto:{}", inquiry.email)>{inquiry.email.clone()}</a>
                                        <a href=format!("tel:{}", inquiry.phone)>{inquiry.phone.clone()}</a>
                                        <span>{received}</span>
                                    </div>
                                </div>
                                <button
                                    class="button small danger"
                                    title="Delete inquiry"
                                    on:click=move |_| delete(id.clone())
                                >
                                    { "Delete" }
                                </button>
                            </div>
                            <p class="inquiry-message">{inquiry.message.clone()}</p>
                            <div class="inquiry-actions">
                                {inquiry.via_whatsapp.then(|| view! {
                                    <span class="badge success">{ "WhatsApp Requested" }</span>
                                })}
                                <a
                                    class="button small whatsapp"
                                    href=reply_link(&chat, &inquiry.phone, &inquiry.name)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    { "Contact via WhatsApp" }
                                </a>
                                <a class="button small" href=format!("mailto:{}", inquiry.email)>
                                    { "Reply via Email" }
                                </a>
                            </div>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="resource-manager">
            <div class="manager-header">
                <h2>{ "Contact Inquiries" }</h2>
                <span class="badge">
                    {move || format!("{} Total", list.with(|l| l.records.len()))}
                </span>
            </div>
            {move || error.get().map(|err| view! { <div class="banner error">{err}</div> })}
            <ul class="record-list">{rows}</ul>
            <Show when=move || list.with(|l| l.records.is_empty())>
                <p class="muted">{ "No inquiries yet." }</p>
            </Show>
        </div>
    }
}
