//! Loading / error / populated renderer for one remote resource.

use leptos::prelude::*;

use crate::state::fetch::ViewState;

/// Render exactly one of the three view states. `render` only ever sees a
/// settled payload.
pub fn remote_view<T, V>(
    state: RwSignal<ViewState<T>>,
    loading_text: &'static str,
    render: impl Fn(&T) -> V + Send + Sync + 'static,
) -> impl IntoView
where
    T: Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        state.with(|current| match current {
            ViewState::Loading => {
                view! { <p class="view-state view-state--loading">{loading_text}</p> }.into_any()
            }
            ViewState::Failure(message) => {
                view! { <p class="view-state view-state--error">{message.clone()}</p> }.into_any()
            }
            ViewState::Success(data) => render(data).into_any(),
        })
    }
}
