//! One-shot confirmation/error banner read from context.

use leptos::prelude::*;

use crate::state::ui::Flash;

#[component]
pub fn FlashBanner() -> impl IntoView {
    let flash = expect_context::<RwSignal<Option<Flash>>>();

    move || {
        flash.get().map(|current| {
            view! {
                <div class=current.css_class() role="status">
                    <span>{current.text.clone()}</span>
                    <button class="flash__close" on:click=move |_| flash.set(None)>"×"</button>
                </div>
            }
        })
    }
}
