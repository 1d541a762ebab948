//! Five-step recruitment application.
//!
//! SYSTEM CONTEXT
//! ==============
//! Step navigation and validation live in `RecruitWizard`; this page only
//! renders the current step and wires the lookups (sports, teams) and the
//! optional attachment. A successful submission leaves the form for the
//! recruitment landing page with a confirmation banner.

use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use wire::{Sport, Team};

use crate::net::api;
use crate::state::fetch::ViewState;
use crate::state::recruit::{
    RecruitField, RecruitInput, RecruitStep, RecruitWizard, SUBMITTED_MESSAGE, team_options,
};
use crate::state::ui::Flash;
use crate::util::files::selected_file;
use crate::util::remote::use_remote;

#[component]
pub fn RecruitFormPage() -> impl IntoView {
    let flash = expect_context::<RwSignal<Option<Flash>>>();
    let navigate = use_navigate();
    let wizard = RwSignal::new(RecruitWizard::new());
    let step = Memo::new(move |_| wizard.with(RecruitWizard::step));
    let sports = use_remote(api::get_sports);
    let teams = use_remote(api::get_teams);
    let attachment = NodeRef::<Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if wizard.with_untracked(RecruitWizard::is_submitting) {
            return;
        }
        if step.get_untracked() != RecruitStep::Additional {
            wizard.update(|w| {
                let _ = w.next();
            });
            return;
        }
        let mut outcome = None;
        wizard.update(|w| outcome = w.begin_submit().ok());
        let Some(request) = outcome else {
            return;
        };
        let file = selected_file(&attachment);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = api::submit_recruitment(&request, file).await;
                let mut route = None;
                if wizard.try_update(|w| route = w.finish_submit(result)).is_none() {
                    return;
                }
                if let Some(route) = route {
                    flash.set(Some(Flash::success(SUBMITTED_MESSAGE)));
                    navigate(route, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, file, flash, &navigate);
    };

    let field_views = move || {
        step.get()
            .fields()
            .map(|field| field_input(field, wizard, sports.state, teams.state))
            .collect_view()
    };

    view! {
        <main class="recruit-form">
            <h1>"Recruitment Application"</h1>
            <ol class="recruit-form__progress">
                {RecruitStep::ALL
                    .into_iter()
                    .map(|s| {
                        view! {
                            <li
                                class:recruit-form__step--active=move || step.get() == s
                                class:recruit-form__step--done={move || step.get() > s}
                            >
                                <span>{s.number()}</span>
                                {s.title()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <form class="recruit-form__body" on:submit=on_submit>
                <h2>{move || step.get().title()}</h2>
                {field_views}
                <Show when=move || step.get() == RecruitStep::Additional>
                    <label>
                        "Supporting Documents (optional)"
                        <input type="file" node_ref=attachment/>
                    </label>
                </Show>
                {move || wizard.with(|w| w.error().map(|e| view! { <p class="recruit-form__error">{e.to_owned()}</p> }))}
                <div class="recruit-form__actions">
                    <button
                        class="btn"
                        type="button"
                        disabled=move || step.get() == RecruitStep::Personal
                        on:click=move |_| {
                            wizard.update(|w| {
                                let _ = w.previous();
                            });
                        }
                    >
                        "Previous"
                    </button>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || wizard.with(RecruitWizard::is_submitting)
                    >
                        {move || {
                            if step.get() != RecruitStep::Additional {
                                "Next"
                            } else if wizard.with(RecruitWizard::is_submitting) {
                                "Submitting..."
                            } else {
                                "Submit Application"
                            }
                        }}
                    </button>
                </div>
            </form>
        </main>
    }
}

fn field_input(
    field: RecruitField,
    wizard: RwSignal<RecruitWizard>,
    sports: RwSignal<ViewState<Vec<Sport>>>,
    teams: RwSignal<ViewState<Vec<Team>>>,
) -> impl IntoView {
    let value = move || wizard.with(|w| w.value(field).to_owned());
    let set = move |raw: String| wizard.update(|w| w.set(field, raw));
    let label = if field.required() { format!("{} *", field.label()) } else { field.label().to_owned() };

    let control = match field.input() {
        RecruitInput::LongText => view! {
            <textarea rows="4" prop:value=value on:input=move |ev| set(event_target_value(&ev))></textarea>
        }
        .into_any(),
        RecruitInput::Gender => view! {
            <select prop:value=value on:change=move |ev| set(event_target_value(&ev))>
                <option value="">"Select gender"</option>
                <option value="male">"Male"</option>
                <option value="female">"Female"</option>
            </select>
        }
        .into_any(),
        RecruitInput::Sport => view! {
            <select prop:value=value on:change=move |ev| set(event_target_value(&ev))>
                <option value="">"Select sport"</option>
                {move || {
                    sports.with(|s| {
                        s.data().map(|list| {
                            list.iter()
                                .map(|sport| {
                                    let id = sport.id.to_string();
                                    let selected = value() == id;
                                    view! { <option value=id selected=selected>{sport.name.clone()}</option> }
                                })
                                .collect_view()
                        })
                    })
                }}
            </select>
        }
        .into_any(),
        RecruitInput::Team => view! {
            <select prop:value=value on:change=move |ev| set(event_target_value(&ev))>
                <option value="">"Select team"</option>
                {move || {
                    teams.with(|t| {
                        t.data().map(|list| {
                            team_options(list)
                                .into_iter()
                                .map(|(id, label)| {
                                    let selected = value() == id;
                                    view! { <option value=id selected=selected>{label}</option> }
                                })
                                .collect_view()
                        })
                    })
                }}
            </select>
        }
        .into_any(),
        input @ (RecruitInput::Text
        | RecruitInput::Date
        | RecruitInput::Number
        | RecruitInput::Email
        | RecruitInput::Phone) => {
            let kind = match input {
                RecruitInput::Date => "date",
                RecruitInput::Number => "number",
                RecruitInput::Email => "email",
                RecruitInput::Phone => "tel",
                _ => "text",
            };
            view! { <input type=kind prop:value=value on:input=move |ev| set(event_target_value(&ev))/> }
                .into_any()
        }
    };

    view! {
        <label>
            {label}
            {control}
        </label>
    }
}
