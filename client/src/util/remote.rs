//! Fetch-on-mount hook backing every remote-data view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `use_remote` owns the `ViewState` signal of one resource. The first fetch
//! runs once after hydration; `reload` starts a new cycle (admin lists use it
//! after a save or delete). A response that lands after the owning view was
//! torn down finds its signal disposed and is dropped.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use wire::ApiError;

use crate::state::fetch::ViewState;

/// Handle returned by [`use_remote`].
pub struct Remote<T: Send + Sync + 'static> {
    pub state: RwSignal<ViewState<T>>,
    pub reload: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for Remote<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Remote<T> {}

pub fn use_remote<T, F, Fut>(fetch: F) -> Remote<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = RwSignal::new(ViewState::<T>::Loading);
    let fetch = Arc::new(fetch);
    let run = move || {
        let _ = state.try_update(ViewState::restart);
        #[cfg(feature = "hydrate")]
        {
            let pending = untrack(|| fetch());
            leptos::task::spawn_local(async move {
                let _ = state.try_set(ViewState::from_result(pending.await));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &fetch;
    };
    let initial = run.clone();
    Effect::new(move || initial());
    Remote { state, reload: Callback::new(move |()| run()) }
}
