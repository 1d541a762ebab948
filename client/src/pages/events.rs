//! Events page with upcoming/past tabs.

use leptos::prelude::*;
use wire::Event;

use crate::components::remote_view::remote_view;
use crate::net::api;
use crate::state::events::{EventsTab, split_events};
use crate::util::format::{display_date, today};
use crate::util::remote::use_remote;

#[component]
pub fn EventsPage() -> impl IntoView {
    let events = use_remote(api::get_events);
    let tab = RwSignal::new(EventsTab::Upcoming);

    view! {
        <main class="events-page">
            <h1>"Events"</h1>
            <div class="tabs" role="tablist">
                {[EventsTab::Upcoming, EventsTab::Past]
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == t
                                role="tab"
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {remote_view(events.state, "Loading events...", move |list: &Vec<Event>| {
                let (upcoming, past) = split_events(list, today());
                move || {
                    let shown = match tab.get() {
                        EventsTab::Upcoming => &upcoming,
                        EventsTab::Past => &past,
                    };
                    if shown.is_empty() {
                        return view! { <p class="events-page__empty">"No events to show."</p> }.into_any();
                    }
                    shown.iter().map(event_card).collect_view().into_any()
                }
            })}
        </main>
    }
}

fn event_card(event: &Event) -> impl IntoView + use<> {
    view! {
        <article class="event-card">
            <header>
                <span class="event-card__sport">{event.sport.clone()}</span>
                <h3>{event.name.clone()}</h3>
            </header>
            <p class="event-card__when">{format!("{} · {}", display_date(&event.date), event.time)}</p>
            <p class="event-card__where">{event.location.clone()}</p>
            <p>{event.details.clone()}</p>
            {event.result.clone().map(|result| view! { <p class="event-card__result">"Result: " {result}</p> })}
        </article>
    }
}
