//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use wire::SessionUser;

use crate::components::{flash_banner::FlashBanner, footer::Footer, header::Header};
use crate::pages::{
    athletes::AthletesPage, dashboard::DashboardPage, events::EventsPage, landing::LandingPage,
    recruit_form::RecruitFormPage, recruitment::RecruitmentPage, shop::ShopPage, sports::SportsPage,
    teams::TeamsPage, tickets::TicketsPage,
};
use crate::state::session::{BrowserStorage, SessionStore};
use crate::state::ui::Flash;

/// Reactive view of the process-wide session store.
///
/// The store is the single source of truth; `user` mirrors it through a
/// store subscription so every reader re-renders synchronously on login and
/// logout.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    store: StoredValue<SessionStore<BrowserStorage>>,
    user: RwSignal<Option<SessionUser>>,
}

impl SessionHandle {
    fn new() -> Self {
        let user = RwSignal::new(None::<SessionUser>);
        let mut store = SessionStore::new(BrowserStorage);
        let subscription = store.subscribe(move |current| {
            let _ = user.try_set(current.cloned());
        });
        let store = StoredValue::new(store);
        on_cleanup(move || {
            let _ = store.try_update_value(|s| s.unsubscribe(subscription));
        });
        Self { store, user }
    }

    /// Load the persisted user. Runs after hydration; the server render always
    /// starts logged out.
    pub fn restore(self) {
        self.store.update_value(SessionStore::restore);
    }

    pub fn login(self, user: SessionUser) {
        self.store.update_value(|s| s.login(user));
    }

    pub fn logout(self) {
        self.store.update_value(SessionStore::logout);
    }

    pub fn is_logged_in(self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn is_logged_in_untracked(self) -> bool {
        self.user.with_untracked(Option::is_some)
    }

    pub fn is_admin(self) -> bool {
        self.user.with(|u| u.as_ref().is_some_and(SessionUser::is_admin))
    }

    pub fn display_name(self) -> String {
        self.user.with(|u| u.as_ref().map(SessionUser::display_name).unwrap_or_default())
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session handle and the flash banner, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::new();
    let flash = RwSignal::new(None::<Flash>);
    provide_context(session);
    provide_context(flash);

    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/athletics-site.css"/>
        <Title text="Ashesi Athletics"/>

        <Router>
            <Header/>
            <FlashBanner/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("all-sports") view=SportsPage/>
                <Route path=StaticSegment("events") view=EventsPage/>
                <Route path=StaticSegment("teams") view=TeamsPage/>
                <Route path=StaticSegment("athlete-list") view=AthletesPage/>
                <Route path=StaticSegment("recruit") view=RecruitmentPage/>
                <Route path=StaticSegment("recruit-form") view=RecruitFormPage/>
                <Route path=StaticSegment("shop") view=ShopPage/>
                <Route path=StaticSegment("tickets") view=TicketsPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
            <Footer/>
        </Router>
    }
}
