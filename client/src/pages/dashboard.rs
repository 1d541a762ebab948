//! Admin back office: a sidebar of sections and the active section's screen.
//!
//! Only shown to administrator sessions. The gate is presentational; the API
//! enforces its own authorization.

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::components::crud_screen::crud_screen;
use crate::components::week_screen::WeekScreen;
use crate::state::admin::{AdminSection, AthleteAdmin, EventAdmin, HighlightAdmin, NewsAdmin, TeamAdmin};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let section = RwSignal::new(AdminSection::default());

    view! {
        <Show
            when=move || session.is_admin()
            fallback=|| {
                view! {
                    <main class="dashboard-page">
                        <p class="view-state view-state--error">"Administrator access required."</p>
                    </main>
                }
            }
        >
            <div class="dashboard-page">
                <aside class="dashboard-page__sidebar">
                    <h1>"Admin Dashboard"</h1>
                    {AdminSection::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <button
                                    class="dashboard-page__section"
                                    class:dashboard-page__section--active=move || section.get() == s
                                    data-section=s.slug()
                                    on:click=move |_| section.set(s)
                                >
                                    {s.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </aside>
                <div class="dashboard-page__content">
                    {move || match section.get() {
                        AdminSection::News => crud_screen::<NewsAdmin>().into_any(),
                        AdminSection::Highlights => crud_screen::<HighlightAdmin>().into_any(),
                        AdminSection::Athletes => crud_screen::<AthleteAdmin>().into_any(),
                        AdminSection::Events => crud_screen::<EventAdmin>().into_any(),
                        AdminSection::AthletesOfTheWeek => view! { <WeekScreen/> }.into_any(),
                        AdminSection::Teams => crud_screen::<TeamAdmin>().into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}
