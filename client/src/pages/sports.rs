//! Sports directory with each sport's social handles.

use leptos::prelude::*;
use wire::Sport;

use crate::components::remote_view::remote_view;
use crate::net::api;
use crate::util::remote::use_remote;

fn social_links(sport: &Sport) -> Vec<(&'static str, String)> {
    [
        ("Snapchat", "https://www.snapchat.com/", sport.snap.as_ref()),
        ("Instagram", "https://www.instagram.com/", sport.insta.as_ref()),
        ("X", "https://www.x.com/", sport.x.as_ref()),
    ]
    .into_iter()
    .filter_map(|(label, base, handle)| handle.map(|h| (label, format!("{base}{h}"))))
    .collect()
}

#[component]
pub fn SportsPage() -> impl IntoView {
    let sports = use_remote(api::get_sports);

    view! {
        <main class="sports-page">
            <h1>"Sports"</h1>
            {remote_view(sports.state, "Loading sports...", |list: &Vec<Sport>| {
                view! {
                    <ul class="sports-page__list">
                        {list
                            .iter()
                            .map(|sport| {
                                view! {
                                    <li class="sport-card">
                                        <h3>{sport.name.clone()}</h3>
                                        <span class="sport-card__socials">
                                            {social_links(sport)
                                                .into_iter()
                                                .map(|(label, href)| {
                                                    view! {
                                                        <a href=href target="_blank" rel="noopener noreferrer">
                                                            {label}
                                                        </a>
                                                    }
                                                })
                                                .collect_view()}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
            })}
        </main>
    }
}
