//! Athlete roster with name search and sport filter.

use leptos::prelude::*;
use wire::Athlete;

use crate::components::remote_view::remote_view;
use crate::content::PLACEHOLDER_ATHLETE_IMAGE;
use crate::net::api;
use crate::state::catalog::{RosterFilter, roster_sports};
use crate::util::remote::use_remote;

#[component]
pub fn AthletesPage() -> impl IntoView {
    let athletes = use_remote(api::get_athletes);
    let filter = RwSignal::new(RosterFilter::default());

    let sport_options = move || {
        athletes.state.with(|s| s.data().map(|list| roster_sports(list)).unwrap_or_default())
    };

    view! {
        <main class="athletes-page">
            <h1>"Our Athletes"</h1>
            <div class="filter-bar">
                <input
                    type="search"
                    placeholder="Search athletes..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.sport = (!value.is_empty()).then_some(value));
                }>
                    <option value="">"All Sports"</option>
                    {move || {
                        sport_options()
                            .into_iter()
                            .map(|sport| view! { <option value=sport.clone()>{sport.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            {remote_view(athletes.state, "Loading athletes...", move |list: &Vec<Athlete>| {
                let list = list.clone();
                move || {
                    let shown = filter.with(|f| f.apply(&list));
                    if shown.is_empty() {
                        return view! { <p class="athletes-page__empty">"No athletes match your search."</p> }
                            .into_any();
                    }
                    view! {
                        <div class="athletes-page__grid">{shown.iter().map(athlete_card).collect_view()}</div>
                    }
                    .into_any()
                }
            })}
        </main>
    }
}

fn athlete_card(athlete: &Athlete) -> impl IntoView + use<> {
    let name = athlete.display_name();
    let image = athlete.image.clone().unwrap_or_else(|| PLACEHOLDER_ATHLETE_IMAGE.to_owned());
    view! {
        <article class="athlete-card">
            <img src=image alt=name.clone()/>
            <h3>{name}</h3>
            <p class="athlete-card__meta">{format!("{} · {}", athlete.sport, athlete.position)}</p>
            <p class="athlete-card__meta">{format!("{} · {}", athlete.year_group, athlete.nationality)}</p>
            {(!athlete.achievements.is_empty()).then(|| view! { <h4>"Achievements"</h4> })}
            <ul class="athlete-card__achievements">
                {athlete.achievements.iter().map(|a| view! { <li>{a.clone()}</li> }).collect_view()}
            </ul>
        </article>
    }
}
