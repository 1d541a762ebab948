//! Static ticket listing.

use leptos::prelude::*;

use crate::content::TICKETS;
use crate::util::format::{display_date, format_price};

#[component]
pub fn TicketsPage() -> impl IntoView {
    view! {
        <main class="tickets-page">
            <h1>"Tickets"</h1>
            <div class="tickets-page__grid">
                {TICKETS
                    .iter()
                    .map(|ticket| {
                        view! {
                            <article class="ticket-card">
                                <img src=ticket.image alt=ticket.title/>
                                <h3>{ticket.title}</h3>
                                <p>{ticket.descr}</p>
                                <p class="ticket-card__date">{display_date(ticket.event_date)}</p>
                                <p class="ticket-card__price">{format_price(ticket.price)}</p>
                                <button class="btn btn--primary">"Buy Tickets"</button>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </main>
    }
}
