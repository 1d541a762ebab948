//! Teams grouped under their sport.

use leptos::prelude::*;
use wire::Team;

use crate::components::remote_view::remote_view;
use crate::net::api;
use crate::state::catalog::group_teams_by_sport;
use crate::util::remote::use_remote;

#[component]
pub fn TeamsPage() -> impl IntoView {
    let teams = use_remote(api::get_teams);

    view! {
        <main class="teams-page">
            <h1>"Teams"</h1>
            {remote_view(teams.state, "Loading teams...", |list: &Vec<Team>| {
                group_teams_by_sport(list)
                    .into_iter()
                    .map(|(sport, teams)| {
                        view! {
                            <section class="teams-page__sport">
                                <h2>{sport}</h2>
                                <div class="teams-page__grid">
                                    {teams
                                        .into_iter()
                                        .map(|team| {
                                            view! {
                                                <article class="team-card">
                                                    <h3>{team.name}</h3>
                                                    {team.coach_name.map(|c| view! { <p>"Coach: " {c}</p> })}
                                                    {team
                                                        .team_email
                                                        .map(|e| {
                                                            view! { <a href=format!("mailto:{e}")>{e.clone()}</a> }
                                                        })}
                                                </article>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </section>
                        }
                    })
                    .collect_view()
            })}
        </main>
    }
}
