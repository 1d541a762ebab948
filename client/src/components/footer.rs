//! Site footer.

use leptos::prelude::*;

use crate::content::NAV_LINKS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <nav class="site-footer__links">
                {NAV_LINKS
                    .iter()
                    .map(|link| view! { <a href=link.href>{link.label}</a> })
                    .collect_view()}
            </nav>
            <p class="site-footer__note">"Ashesi University Athletics, Berekuso"</p>
        </footer>
    }
}
