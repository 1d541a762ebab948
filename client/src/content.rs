//! Compiled-in marketing tables: navigation, hero slides, tickets.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "HOME", href: "/" },
    NavLink { label: "SPORTS", href: "/all-sports" },
    NavLink { label: "EVENTS", href: "/events" },
    NavLink { label: "TEAMS", href: "/teams" },
    NavLink { label: "ATHLETES", href: "/athlete-list" },
    NavLink { label: "RECRUITING", href: "/recruit" },
    NavLink { label: "SHOP", href: "/shop" },
    NavLink { label: "TICKETS", href: "/tickets" },
];

/// Link shown to administrators only.
pub const DASHBOARD_LINK: NavLink = NavLink { label: "DASHBOARD", href: "/dashboard" };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroSlide {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        src: "/hero-images/image1.svg",
        alt: "Slide 1",
        title: "Ashesi Athletics",
        description: "Home of the Ashesi Eagles.",
    },
    HeroSlide {
        src: "/hero-images/image2.svg",
        alt: "Slide 2",
        title: "Game Day",
        description: "Catch every fixture on campus this season.",
    },
    HeroSlide {
        src: "/hero-images/image3.svg",
        alt: "Slide 3",
        title: "Join the Team",
        description: "Recruitment for the new academic year is open.",
    },
];

/// Demo ticket listing; purchases are not wired to any backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ticket {
    pub id: u32,
    pub title: &'static str,
    pub descr: &'static str,
    pub price: f64,
    pub event_date: &'static str,
    pub image: &'static str,
}

pub const TICKETS: &[Ticket] = &[
    Ticket {
        id: 0,
        title: "Ustun Tickets",
        descr: "Cop your tickets to Ashesi's biggest sport event",
        price: 100.0,
        event_date: "6/11/2024",
        image: "/tickets-images/ustun.svg",
    },
    Ticket {
        id: 1,
        title: "Ubora Tickets",
        descr: "A night dedicated to honouring excellence and recognizing the exceptional contributions of \
                individuals within the Ashesi Community",
        price: 150.0,
        event_date: "5/12/2024",
        image: "/tickets-images/ubora.svg",
    },
];

pub const PLACEHOLDER_ATHLETE_IMAGE: &str = "/placeholder-athlete.svg";
