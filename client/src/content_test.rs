use super::*;

#[test]
fn nav_links_are_absolute_and_unique() {
    for link in NAV_LINKS {
        assert!(link.href.starts_with('/'), "{} is relative", link.href);
    }
    let mut hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
    hrefs.sort_unstable();
    hrefs.dedup();
    assert_eq!(hrefs.len(), NAV_LINKS.len());
}

#[test]
fn dashboard_is_not_a_public_link() {
    assert!(!NAV_LINKS.contains(&DASHBOARD_LINK));
}

#[test]
fn tickets_have_distinct_ids() {
    assert_eq!(TICKETS.len(), 2);
    assert_ne!(TICKETS[0].id, TICKETS[1].id);
}

#[test]
fn hero_has_slides() {
    assert!(!HERO_SLIDES.is_empty());
}

#[test]
fn every_bundled_image_is_shipped_in_public() {
    let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../public");
    let paths = HERO_SLIDES
        .iter()
        .map(|s| s.src)
        .chain(TICKETS.iter().map(|t| t.image))
        .chain(std::iter::once(PLACEHOLDER_ATHLETE_IMAGE));
    for path in paths {
        let file = public.join(path.trim_start_matches('/'));
        assert!(file.is_file(), "{path} missing from public/");
    }
}
