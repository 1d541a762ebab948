//! Landing page: hero carousel, headline stats, highlights + news feed, and
//! the athletes of the week.

use leptos::prelude::*;
use wire::{Highlight, NewsItem, WeekAthlete};

use crate::components::remote_view::remote_view;
use crate::content::{HERO_SLIDES, PLACEHOLDER_ATHLETE_IMAGE};
use crate::net::api;
use crate::state::ui::Carousel;
use crate::util::format::display_date;
use crate::util::remote::use_remote;

const STATS: [(&str, &str); 4] =
    [("500+", "Active Athletes"), ("32", "Sports Teams"), ("45", "Championships"), ("12", "Facilities")];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <HeroCarousel/>
            <section class="stats-banner">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stats-banner__item">
                                <span class="stats-banner__value">{*value}</span>
                                <span class="stats-banner__label">{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <div class="main-feed">
                <HighlightsFeed/>
                <NewsFeed/>
            </div>
            <WeekAthletes/>
        </div>
    }
}

#[component]
fn HeroCarousel() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(HERO_SLIDES.len()));

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let period = std::time::Duration::from_millis(u64::from(crate::state::ui::CAROUSEL_INTERVAL_MS));
            loop {
                gloo_timers::future::sleep(period).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if carousel.try_update(Carousel::advance).is_none() {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <section class="hero">
            {HERO_SLIDES
                .iter()
                .enumerate()
                .map(|(i, slide)| {
                    view! {
                        <div class="hero__slide" class:hero__slide--active=move || carousel.get().index() == i>
                            <img src=slide.src alt=slide.alt/>
                            <div class="hero__caption">
                                <h2>{slide.title}</h2>
                                <p>{slide.description}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
            <button class="hero__nav hero__nav--prev" aria-label="Previous slide" on:click=move |_| carousel.update(Carousel::back)>
                "‹"
            </button>
            <button class="hero__nav hero__nav--next" aria-label="Next slide" on:click=move |_| carousel.update(Carousel::advance)>
                "›"
            </button>
            <div class="hero__dots">
                {(0..HERO_SLIDES.len())
                    .map(|i| {
                        view! {
                            <button
                                class="hero__dot"
                                class:hero__dot--active=move || carousel.get().index() == i
                                aria-label=format!("Go to slide {}", i + 1)
                                on:click=move |_| carousel.update(|c| c.go_to(i))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HighlightsFeed() -> impl IntoView {
    let highlights = use_remote(api::get_highlights);

    view! {
        <section class="feed feed--highlights">
            <h2 class="feed__title">"HIGHLIGHTS"</h2>
            {remote_view(highlights.state, "Loading highlights...", |items: &Vec<Highlight>| {
                items
                    .iter()
                    .map(|item| {
                        view! {
                            <article class="feed__item">
                                {item.image.clone().map(|src| view! { <img class="feed__image" src=src alt=item.title.clone()/> })}
                                <div>
                                    <span class="feed__date">{display_date(&item.date)}</span>
                                    <h3>{item.title.clone()}</h3>
                                    <a href=item.link.clone() target="_blank" rel="noopener noreferrer">
                                        "View →"
                                    </a>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()
            })}
        </section>
    }
}

#[component]
fn NewsFeed() -> impl IntoView {
    let news = use_remote(api::get_news);

    view! {
        <section class="feed feed--news">
            <h2 class="feed__title">"LATEST NEWS"</h2>
            {remote_view(news.state, "Loading news...", |items: &Vec<NewsItem>| {
                items
                    .iter()
                    .map(|item| {
                        view! {
                            <article class="feed__item feed__item--compact">
                                <span class="feed__tag">{item.sport.clone()}</span>
                                <h3>{item.headline.clone()}</h3>
                                <span class="feed__date">{display_date(&item.date)}</span>
                            </article>
                        }
                    })
                    .collect_view()
            })}
        </section>
    }
}

#[component]
fn WeekAthletes() -> impl IntoView {
    let featured = use_remote(api::get_athletes_of_week);

    view! {
        <section class="week-athletes">
            <h2>"ATHLETES OF THE WEEK"</h2>
            {remote_view(featured.state, "Loading athletes of the week...", |athletes: &Vec<WeekAthlete>| {
                athletes
                    .iter()
                    .map(|athlete| {
                        let image = athlete.image.clone().unwrap_or_else(|| PLACEHOLDER_ATHLETE_IMAGE.to_owned());
                        view! {
                            <article class="athlete-card athlete-card--featured">
                                <img src=image alt=athlete.full_name.clone()/>
                                <h3>{athlete.full_name.clone()}</h3>
                                <p class="athlete-card__meta">
                                    {format!("{} · {}", athlete.sport, athlete.year_group)}
                                </p>
                                <ul class="athlete-card__achievements">
                                    {athlete.achievements.iter().map(|a| view! { <li>{a.clone()}</li> }).collect_view()}
                                </ul>
                            </article>
                        }
                    })
                    .collect_view()
            })}
        </section>
    }
}
