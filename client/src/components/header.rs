//! Site header: navigation, login/signup modals, and the admin link.
//!
//! The dashboard link follows the session store, so it appears and
//! disappears on login/logout without a reload.

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::content::{DASHBOARD_LINK, NAV_LINKS};
use crate::state::auth::{LoginForm, SignupForm};
use crate::state::ui::{AuthModal, Flash, HeaderUi};

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let ui = RwSignal::new(HeaderUi::default());

    let on_logout = move |_| {
        session.logout();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"ASHESI ATHLETICS"</a>
            <button
                class="site-header__menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| ui.update(HeaderUi::toggle_menu)
            >
                {move || if ui.with(|u| u.menu_open) { "✕" } else { "☰" }}
            </button>
            <nav class="site-header__nav" class:site-header__nav--open=move || ui.with(|u| u.menu_open)>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.href on:click=move |_| ui.update(|u| u.menu_open = false)>
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
                <Show when=move || session.is_admin()>
                    <a href=DASHBOARD_LINK.href class="site-header__admin">{DASHBOARD_LINK.label}</a>
                </Show>
            </nav>
            <div class="site-header__account">
                <Show
                    when=move || session.is_logged_in()
                    fallback=move || {
                        view! {
                            <button class="btn" on:click=move |_| ui.update(|u| u.open(AuthModal::Login))>
                                "Log In"
                            </button>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| ui.update(|u| u.open(AuthModal::Signup))
                            >
                                "Sign Up"
                            </button>
                        }
                    }
                >
                    <span class="site-header__user">{move || session.display_name()}</span>
                    <button class="btn" on:click=on_logout>"Log Out"</button>
                </Show>
            </div>
            {move || {
                ui.with(|u| u.modal)
                    .map(|modal| match modal {
                        AuthModal::Login => view! { <LoginModal ui=ui/> }.into_any(),
                        AuthModal::Signup => view! { <SignupModal ui=ui/> }.into_any(),
                    })
            }}
        </header>
    }
}

#[component]
fn LoginModal(ui: RwSignal<HeaderUi>) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if ui.with_untracked(|u| u.busy) {
            return;
        }
        let Some(request) = form.with_untracked(LoginForm::request) else {
            ui.update(|u| u.fail("Enter your email and password."));
            return;
        };
        ui.update(|u| {
            u.busy = true;
            u.error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&request).await {
                Ok(user) => {
                    session.login(user);
                    ui.try_update(HeaderUi::close);
                }
                Err(err) => {
                    ui.try_update(|u| u.fail(err.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, session);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| ui.update(HeaderUi::close)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Log In"</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            required
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <ModalError ui=ui/>
                    <button class="btn btn--primary" type="submit" disabled=move || ui.with(|u| u.busy)>
                        "Log In"
                    </button>
                </form>
                <p class="dialog__switch">
                    "No account? "
                    <button class="btn btn--link" on:click=move |_| ui.update(|u| u.open(AuthModal::Signup))>
                        "Sign up"
                    </button>
                </p>
            </div>
        </div>
    }
}

#[component]
fn SignupModal(ui: RwSignal<HeaderUi>) -> impl IntoView {
    let flash = expect_context::<RwSignal<Option<Flash>>>();
    let form = RwSignal::new(SignupForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if ui.with_untracked(|u| u.busy) {
            return;
        }
        let request = match form.with_untracked(SignupForm::validate) {
            Ok(request) => request,
            Err(err) => {
                ui.update(|u| u.fail(err.message()));
                return;
            }
        };
        ui.update(|u| {
            u.busy = true;
            u.error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&request).await {
                Ok(()) => {
                    flash.try_set(Some(Flash::success("Account created. Please log in.")));
                    ui.try_update(HeaderUi::signup_succeeded);
                }
                Err(err) => {
                    ui.try_update(|u| u.fail(err.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, flash);
    };

    let text_input = move |label: &'static str,
                           kind: &'static str,
                           get: fn(&SignupForm) -> &String,
                           set: fn(&mut SignupForm, String)| {
        view! {
            <label>
                {label}
                <input
                    type=kind
                    required
                    prop:value=move || form.with(|f| get(f).clone())
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| ui.update(HeaderUi::close)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Sign Up"</h2>
                <form class="dialog__form" on:submit=on_submit>
                    {text_input("First Name", "text", |f| &f.first_name, |f, v| f.first_name = v)}
                    {text_input("Last Name", "text", |f| &f.last_name, |f, v| f.last_name = v)}
                    {text_input("Ashesi Email", "email", |f| &f.email, |f, v| f.email = v)}
                    {text_input("Password", "password", |f| &f.password, |f, v| f.password = v)}
                    {text_input(
                        "Confirm Password",
                        "password",
                        |f| &f.confirm_password,
                        |f, v| f.confirm_password = v,
                    )}
                    <ModalError ui=ui/>
                    <button class="btn btn--primary" type="submit" disabled=move || ui.with(|u| u.busy)>
                        "Create Account"
                    </button>
                </form>
                <p class="dialog__switch">
                    "Already registered? "
                    <button class="btn btn--link" on:click=move |_| ui.update(|u| u.open(AuthModal::Login))>
                        "Log in"
                    </button>
                </p>
            </div>
        </div>
    }
}

#[component]
fn ModalError(ui: RwSignal<HeaderUi>) -> impl IntoView {
    move || ui.with(|u| u.error.clone()).map(|message| view! { <p class="dialog__error">{message}</p> })
}
