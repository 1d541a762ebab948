//! Recruitment landing page. Starting an application requires a session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionHandle;

const PROGRAM_STATS: [(&str, &str); 3] =
    [("Championship Titles", "25+"), ("Student Athletes", "300+"), ("All-Americans", "50+")];

#[component]
pub fn RecruitmentPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();
    let show_login_prompt = RwSignal::new(false);

    let on_start = move |_| {
        if session.is_logged_in_untracked() {
            navigate("/recruit-form", NavigateOptions::default());
        } else {
            show_login_prompt.set(true);
        }
    };

    view! {
        <main class="recruitment-page">
            <section class="recruitment-page__hero">
                <h1>"Join Our Athletic Program"</h1>
                <p>
                    "Take your athletic career to the next level. We're looking for dedicated athletes who
                    want to compete at the collegiate level while pursuing academic excellence."
                </p>
            </section>
            <section class="stats-banner">
                {PROGRAM_STATS
                    .iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stats-banner__item">
                                <span class="stats-banner__value">{*value}</span>
                                <span class="stats-banner__label">{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="recruitment-page__cta">
                <h2>"Ready to Join Our Team?"</h2>
                <p>
                    "Take the first step towards your collegiate athletic career. Fill out our recruitment
                    form and our coaches will review your application."
                </p>
                <button class="btn btn--primary" on:click=on_start>
                    "Start Application"
                </button>
            </section>
            <Show when=move || show_login_prompt.get()>
                <div class="dialog-backdrop" on:click=move |_| show_login_prompt.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Login Required"</h2>
                        <p>"Please log in to start your recruitment application."</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_login_prompt.set(false)>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </main>
    }
}
