//! File-input helpers for multipart uploads.

use leptos::html::Input;
use leptos::prelude::*;

use crate::net::api::Upload;

/// First file picked in `input`, if any.
pub fn selected_file(input: &NodeRef<Input>) -> Option<Upload> {
    #[cfg(feature = "hydrate")]
    {
        input.get_untracked()?.files()?.get(0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        None
    }
}
