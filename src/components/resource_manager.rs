/// Admin editor for any [`Editable`] collection.
///
/// The form is generated from the entity's field schema; the record list
/// uses [`AdminCard`] for the per-entity summary. Every backend call works
/// on a copy of the [`Manager`] and settles its result into the live state,
/// so edits made meanwhile are kept and a closed tab simply drops it.
use leptos::ev::SubmitEvent;
use leptos::*;

use crate::app::use_services;
use crate::components::testimonials_carousel::StarRating;
use crate::editor::{Editable, FieldKind, FieldSpec, FormModel, Manager, Mode, Outcome};
use crate::models::testimonial::{MAX_RATING, MIN_RATING};
use crate::models::{BlogPost, GalleryImage, MenuItem, Testimonial};
use crate::utils::browser::confirm_delete;
use crate::utils::leptos_owner::apply;

/// Summary of one record in the admin list.
pub trait AdminCard: Editable {
    fn card(&self) -> View;
}

impl AdminCard for GalleryImage {
    fn card(&self) -> View {
        view! {
            <img class="thumb" src=self.image_url.clone() alt=self.alt_text.clone()/>
            <div class="record-body">
                <h4>{self.title.clone()}</h4>
                <span class="badge">{self.category.to_string()}</span>
            </div>
        }
        .into_view()
    }
}

impl AdminCard for MenuItem {
    fn card(&self) -> View {
        view! {
            <img class="thumb" src=self.image_url.clone() alt=self.name.clone()/>
            <div class="record-body">
                <h4>{self.name.clone()}</h4>
                <span class="badge">{self.category.to_string()}</span>
                <p class="muted">{self.description.clone()}</p>
            </div>
        }
        .into_view()
    }
}

impl AdminCard for Testimonial {
    fn card(&self) -> View {
        view! {
            <div class="record-body">
                <h4>{self.reviewer_name.clone()}</h4>
                <StarRating rating=self.rating/>
                <p class="muted">{self.content.clone()}</p>
                {self.video_url.clone().map(|url| view! { <p class="muted small">{url}</p> })}
            </div>
        }
        .into_view()
    }
}

impl AdminCard for BlogPost {
    fn card(&self) -> View {
        view! {
            <img class="thumb" src=self.thumbnail_url.clone() alt=self.title.clone()/>
            <div class="record-body">
                <h4>{self.title.clone()}</h4>
                <p class="muted small">
                    {format!("/blog/{} · {}", self.slug, self.published_at.format("%B %-d, %Y"))}
                </p>
                <p class="muted">{self.excerpt.clone()}</p>
            </div>
        }
        .into_view()
    }
}

/// Renders the editor for `T`. A plain generic function rather than a
/// `#[component]` so it can be called as `{resource_manager::<GalleryImage>("Gallery")}`.
pub fn resource_manager<T: AdminCard>(title: &'static str) -> impl IntoView {
    let services = use_services();
    let manager = create_rw_signal(Manager::<T>::new());
    let busy = create_rw_signal(false);

    // Runs `op` against a copy of the manager, then folds only its result
    // back into the live state.
    let run = move |label: &'static str, op: Op| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let client = services.with_value(|s| s.client.clone());
        let mut working = manager.get_untracked();
        spawn_local(async move {
            let outcome = match op {
                Op::Refresh => {
                    let _ = working.refresh(&client).await;
                    Outcome::Refreshed
                }
                Op::Submit => {
                    let from = working.mode.clone();
                    let error = working.submit(&client).await.err().map(|e| e.to_string());
                    Outcome::Submitted { from, error }
                }
                Op::Delete { id, confirmed } => {
                    let result = working.delete(&client, &id, confirmed).await;
                    Outcome::Deleted {
                        id,
                        sent: matches!(result, Ok(true)),
                        error: result.err().map(|e| e.to_string()),
                    }
                }
            };
            apply(label, manager, move |live| live.settle(working.list, outcome));
            let _ = busy.try_set(false);
        });
    };

    create_effect(move |_| run(T::NOUN, Op::Refresh));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        run(T::NOUN, Op::Submit);
    };

    // Keystrokes change the manager; only a mode change rebuilds the form.
    let mode = create_memo(move |_| manager.with(|m| m.mode.clone()));

    let form = move || {
        let heading = match mode.get() {
            Mode::Idle => return None,
            Mode::Creating => format!("New {}", T::NOUN),
            Mode::Editing(_) => format!("Edit {}", T::NOUN),
        };
        Some(view! {
            <form class="card editor-form" on:submit=on_submit>
                <h3>{heading}</h3>
                {T::FIELDS.iter().map(|field| field_input(field, manager)).collect_view()}
                <div class="form-actions">
                    <button type="submit" class="button primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="button" on:click=move |_| manager.update(|m| m.cancel())>
                        { "Cancel" }
                    </button>
                </div>
            </form>
        })
    };

    let records = move || {
        manager.with(|m| {
            m.records()
                .iter()
                .map(|record| {
                    let edit_target = record.clone();
                    let id = record.id().to_string();
                    view! {
                        <li class="record">
                            {record.card()}
                            <div class="record-actions">
                                <button
                                    class="button small"
                                    on:click=move |_| manager.update(|m| m.begin_edit(&edit_target))
                                >
                                    { "Edit" }
                                </button>
                                <button
                                    class="button small danger"
                                    on:click=move |_| {
                                        let confirmed = confirm_delete(T::NOUN);
                                        run(T::NOUN, Op::Delete { id: id.clone(), confirmed });
                                    }
                                >
                                    { "Delete" }
                                </button>
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
                <h2>{title}</h2>
                <button class="button primary" on:click=move |_| manager.update(|m| m.toggle_create())>
                    {move || if mode.get() == Mode::Creating { "Cancel" } else { "New" }}
                </button>
            </div>
            {move || manager.with(|m| m.error.clone()).map(|err| view! { <div class="banner error">{err}</div> })}
            {form}
            <ul class="record-list">
                {records}
            </ul>
            <Show when=move || manager.with(|m| m.records().is_empty()) && !busy.get()>
                <p class="muted">{format!("No {} yet.", T::NOUN)}</p>
            </Show>
        </div>
    }
}

enum Op {
    Refresh,
    Submit,
    Delete { id: String, confirmed: bool },
}

fn field_input<T: Editable>(field: &'static FieldSpec, manager: RwSignal<Manager<T>>) -> View {
    let key = field.key;
    let value = move || manager.with(|m| m.form.value(key));
    let set = move |ev: ev::Event| {
        let input = event_target_value(&ev);
        manager.update(|m| m.set_field(key, &input));
    };

    let input = match field.kind {
        FieldKind::Text => view! {
            <input type="text" id=key required=field.required prop:value=value on:input=set/>
        }
        .into_view(),
        FieldKind::Url => view! {
            <input type="url" id=key required=field.required prop:value=value on:input=set/>
        }
        .into_view(),
        FieldKind::TextArea(rows) => view! {
            <textarea id=key rows=rows required=field.required prop:value=value on:input=set></textarea>
        }
        .into_view(),
        FieldKind::Rating => view! {
            <input
                type="number"
                id=key
                min=MIN_RATING
                max=MAX_RATING
                required=field.required
                prop:value=value
                on:input=set
            />
        }
        .into_view(),
        FieldKind::Choice(options) => view! {
            <select id=key required=field.required on:change=set>
                {options()
                    .into_iter()
                    .map(|option| view! {
                        <option value=option selected=move || value() == option>{option}</option>
                    })
                    .collect_view()}
            </select>
        }
        .into_view(),
    };

    view! {
        <div class="field">
            <label for=key>{field.label}</label>
            {input}
        </div>
    }
    .into_view()
}
