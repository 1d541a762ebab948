//! Admin picker for the two featured athletes of the week.

use leptos::prelude::*;
use wire::{Athlete, RecordId};

use crate::components::remote_view::remote_view;
use crate::content::PLACEHOLDER_ATHLETE_IMAGE;
use crate::net::api;
use crate::state::ui::Flash;
use crate::state::week::{WEEK_SIZE, WeekSelection};
use crate::util::remote::use_remote;

#[component]
pub fn WeekScreen() -> impl IntoView {
    let athletes = use_remote(api::get_athletes);
    let selection = RwSignal::new(WeekSelection::new());
    let outcome = RwSignal::new(None::<Flash>);
    let submitting = RwSignal::new(false);

    let on_submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        let request = match selection.with_untracked(WeekSelection::submission) {
            Ok(request) => request,
            Err(message) => {
                outcome.set(Some(Flash::error(message)));
                return;
            }
        };
        submitting.set(true);
        outcome.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let flash = match api::set_athletes_of_week(&request).await {
                Ok(()) => Flash::success("Athletes of the Week updated successfully"),
                Err(err) => Flash::error(err.user_message()),
            };
            outcome.try_set(Some(flash));
            submitting.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let grid = remote_view(athletes.state, "Loading athletes...", move |list: &Vec<Athlete>| {
        list.iter()
            .map(|athlete| {
                let id = athlete.id.clone();
                let is_selected = {
                    let id = id.clone();
                    move || selection.with(|s| s.is_selected(&id))
                };
                let name = athlete.display_name();
                let image = athlete.image.clone().unwrap_or_else(|| PLACEHOLDER_ATHLETE_IMAGE.to_owned());
                view! {
                    <button
                        class="week-card"
                        class:week-card--selected=is_selected.clone()
                        on:click=move |_| selection.update(|s| s.toggle(id.clone()))
                    >
                        <img class="week-card__image" src=image alt=name.clone()/>
                        <Show when=is_selected.clone()>
                            <span class="week-card__badge">"Selected"</span>
                        </Show>
                        <span class="week-card__name">{name.clone()}</span>
                        <span class="week-card__sport">{athlete.sport.clone()}</span>
                    </button>
                }
            })
            .collect_view()
    });

    let chosen_names = move || {
        let chosen: Vec<RecordId> = selection.with(|s| s.selected().to_vec());
        athletes.state.with(|state| {
            state
                .data()
                .map(|list| {
                    chosen
                        .iter()
                        .filter_map(|id| list.iter().find(|a| a.id == *id))
                        .map(Athlete::display_name)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default()
        })
    };

    view! {
        <section class="week-screen">
            <header class="crud-screen__header">
                <h2>"Athletes of the Week"</h2>
                <button
                    class="btn btn--primary"
                    on:click=on_submit
                    disabled=move || submitting.get() || selection.with(|s| s.len() != WEEK_SIZE)
                >
                    "Set Athletes of the Week"
                </button>
            </header>
            {move || {
                outcome.get().map(|flash| view! { <p class=flash.css_class()>{flash.text.clone()}</p> })
            }}
            <Show when=move || !selection.with(WeekSelection::is_empty)>
                <p class="week-screen__chosen">"Selected: " {chosen_names}</p>
            </Show>
            <div class="week-screen__grid">{grid}</div>
        </section>
    }
}
