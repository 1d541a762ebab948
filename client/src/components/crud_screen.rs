//! Admin list + add/edit modal for one [`AdminResource`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard mounts one of these per CRUD section. The list is fetched on
//! mount and refetched after every successful save or delete. The modal edits
//! plain text values; file inputs are read only at save time and attached as
//! multipart parts.

use leptos::html::Input;
use leptos::prelude::*;
use wire::{RecordId, Sport};

use crate::components::remote_view::remote_view;
use crate::net::api;
use crate::state::admin::{ADMIN_GENDER_OPTIONS, AdminResource, Cell, CrudModal, FieldKind, FieldSpec, can_edit};
use crate::util::files::selected_file;
use crate::util::remote::{Remote, use_remote};

pub fn crud_screen<R: AdminResource>() -> impl IntoView {
    let rows = use_remote(|| async {
        let endpoint = R::LIST;
        api::list::<R::Row>(&endpoint).await
    });
    let sports = use_remote(|| async {
        if R::needs_sports() { api::get_sports().await } else { Ok(Vec::new()) }
    });
    let modal = RwSignal::new(None::<CrudModal>);
    let notice = RwSignal::new(None::<String>);
    let file_input = NodeRef::<Input>::new();

    let on_add = move |_| modal.set(Some(CrudModal::add::<R>()));

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) =
            modal.with_untracked(|m| m.as_ref().filter(|m| !m.saving).map(|m| m.save_request::<R>()))
        else {
            return;
        };
        modal.update(|m| {
            if let Some(m) = m {
                m.begin_save();
            }
        });
        let files: Vec<_> = R::FIELDS
            .iter()
            .filter(|f| f.is_file())
            .filter_map(|f| selected_file(&file_input).map(|file| (f.name, file)))
            .collect();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let endpoint = R::SAVE;
            let result = api::save(&endpoint, &request, files).await;
            let mut close = false;
            let alive = modal.try_update(|m| {
                if let Some(m) = m {
                    close = m.finish_save(result);
                }
            });
            if alive.is_some() && close {
                modal.set(None);
                rows.reload.run(());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, files, rows);
    };

    let on_delete = move |id: RecordId| {
        notice.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::admin::DeleteOutcome;

            let endpoint = R::DELETE;
            match DeleteOutcome::from_result(api::delete(&endpoint, &id).await) {
                DeleteOutcome::Reload => {
                    if notice.try_update(|n| *n = None).is_some() {
                        rows.reload.run(());
                    }
                }
                DeleteOutcome::Failed(message) => {
                    notice.try_set(Some(message));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, rows);
    };

    let table = remote_view(rows.state, "Loading…", move |list: &Vec<R::Row>| {
        if list.is_empty() {
            return view! { <p class="crud-screen__empty">{format!("No {} yet.", R::NOUN.to_lowercase())}</p> }
                .into_any();
        }
        view! {
            <table class="crud-table">
                <thead>
                    <tr>
                        {R::COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {list
                        .iter()
                        .map(|row| {
                            let id = R::row_id(row).clone();
                            let row = row.clone();
                            view! {
                                <tr>
                                    {R::cells(&row).into_iter().map(cell_view).collect_view()}
                                    <td class="crud-table__actions">
                                        <button
                                            class="btn"
                                            disabled=move || !sports.state.with(|s| can_edit(R::needs_sports(), s))
                                            on:click=move |_| {
                                                let known = sports
                                                    .state
                                                    .with_untracked(|s| s.data().cloned().unwrap_or_default());
                                                modal.set(Some(CrudModal::edit::<R>(&row, &known)));
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button class="btn btn--danger" on:click=move |_| on_delete(id.clone())>
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    });

    view! {
        <section class="crud-screen">
            <header class="crud-screen__header">
                <h2>{R::TITLE}</h2>
                <button class="btn btn--primary" on:click=on_add>
                    {format!("Add {}", R::NOUN)}
                </button>
            </header>
            {move || notice.get().map(|message| view! { <p class="crud-screen__error">{message}</p> })}
            {table}
            <Show when=move || modal.with(Option::is_some)>
                <div class="dialog-backdrop" on:click=move |_| modal.set(None)>
                    <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                        <h2>{move || modal.with(|m| m.as_ref().map(|m| m.title::<R>()).unwrap_or_default())}</h2>
                        <form class="dialog__form" on:submit=on_save>
                            {R::FIELDS
                                .iter()
                                .map(|spec| field_view(*spec, modal, sports, file_input))
                                .collect_view()}
                            {move || {
                                modal
                                    .with(|m| m.as_ref().and_then(|m| m.error.clone()))
                                    .map(|message| view! { <p class="dialog__error">{message}</p> })
                            }}
                            <div class="dialog__actions">
                                <button class="btn" type="button" on:click=move |_| modal.set(None)>
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    type="submit"
                                    disabled=move || modal.with(|m| m.as_ref().is_some_and(|m| m.saving))
                                >
                                    {move || {
                                        if modal.with(|m| m.as_ref().is_some_and(|m| m.saving)) {
                                            "Saving…"
                                        } else {
                                            "Save"
                                        }
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </section>
    }
}

fn cell_view(cell: Cell) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <td>{text}</td> }.into_any(),
        Cell::Link(href) => view! {
            <td>
                <a href=href.clone() target="_blank" rel="noopener noreferrer">
                    {href.clone()}
                </a>
            </td>
        }
        .into_any(),
        Cell::Image(Some(src)) => view! {
            <td>
                <img class="crud-table__thumb" src=src alt=""/>
            </td>
        }
        .into_any(),
        Cell::Image(None) => view! { <td class="crud-table__muted">"No image"</td> }.into_any(),
    }
}

fn field_view(
    spec: FieldSpec,
    modal: RwSignal<Option<CrudModal>>,
    sports: Remote<Vec<Sport>>,
    file_input: NodeRef<Input>,
) -> impl IntoView {
    let name = spec.name;
    let value = move || modal.with(|m| m.as_ref().map(|m| m.values.get(name).to_owned()).unwrap_or_default());
    let set = move |raw: String| {
        modal.update(|m| {
            if let Some(m) = m {
                m.values.set(name, raw);
            }
        });
    };

    let control = match spec.kind {
        FieldKind::Image => view! { <input type="file" accept="image/*" node_ref=file_input/> }.into_any(),
        FieldKind::LongText => view! {
            <textarea rows="4" prop:value=value on:input=move |ev| set(event_target_value(&ev))></textarea>
        }
        .into_any(),
        FieldKind::Gender => view! {
            <select prop:value=value on:change=move |ev| set(event_target_value(&ev))>
                <option value="">"Select gender"</option>
                {ADMIN_GENDER_OPTIONS
                    .iter()
                    .map(|gender| view! { <option value=*gender>{*gender}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Sport => view! {
            <select prop:value=value on:change=move |ev| set(event_target_value(&ev))>
                <option value="">"Select sport"</option>
                {move || {
                    sports
                        .state
                        .with(|s| {
                            s.data()
                                .map(|list| {
                                    list.iter()
                                        .map(|sport| {
                                            let id = sport.id.to_string();
                                            let selected = value() == id;
                                            view! {
                                                <option value=id selected=selected>
                                                    {sport.name.clone()}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                })
                        })
                }}
            </select>
        }
        .into_any(),
        FieldKind::Text | FieldKind::Date | FieldKind::Time | FieldKind::Url | FieldKind::Email => {
            let kind = match spec.kind {
                FieldKind::Date => "date",
                FieldKind::Time => "time",
                FieldKind::Url => "url",
                FieldKind::Email => "email",
                _ => "text",
            };
            view! { <input type=kind prop:value=value on:input=move |ev| set(event_target_value(&ev))/> }
                .into_any()
        }
    };

    view! {
        <label>
            {spec.label}
            {control}
        </label>
    }
}
