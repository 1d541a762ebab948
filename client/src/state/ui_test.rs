use super::*;

// =============================================================
// HeaderUi
// =============================================================

#[test]
fn header_default_is_closed() {
    let ui = HeaderUi::default();
    assert!(!ui.menu_open);
    assert_eq!(ui.modal, None);
}

#[test]
fn opening_modal_closes_menu_and_clears_error() {
    let mut ui = HeaderUi { menu_open: true, error: Some("old".to_owned()), ..HeaderUi::default() };
    ui.open(AuthModal::Login);
    assert_eq!(ui.modal, Some(AuthModal::Login));
    assert!(!ui.menu_open);
    assert_eq!(ui.error, None);
}

#[test]
fn failed_request_keeps_modal_open() {
    let mut ui = HeaderUi::default();
    ui.open(AuthModal::Signup);
    ui.busy = true;
    ui.fail("Passwords do not match");
    assert_eq!(ui.modal, Some(AuthModal::Signup));
    assert_eq!(ui.error.as_deref(), Some("Passwords do not match"));
    assert!(!ui.busy);
}

#[test]
fn signup_success_switches_to_login() {
    let mut ui = HeaderUi::default();
    ui.open(AuthModal::Signup);
    ui.signup_succeeded();
    assert_eq!(ui.modal, Some(AuthModal::Login));
}

#[test]
fn toggle_menu_flips() {
    let mut ui = HeaderUi::default();
    ui.toggle_menu();
    assert!(ui.menu_open);
    ui.toggle_menu();
    assert!(!ui.menu_open);
}

// =============================================================
// Flash
// =============================================================

#[test]
fn flash_tone_selects_class() {
    assert_eq!(Flash::success("ok").css_class(), "flash flash--success");
    assert_eq!(Flash::error("no").css_class(), "flash flash--error");
}

// =============================================================
// Carousel
// =============================================================

#[test]
fn carousel_wraps_both_ways() {
    let mut carousel = Carousel::new(3);
    carousel.back();
    assert_eq!(carousel.index(), 2);
    carousel.advance();
    assert_eq!(carousel.index(), 0);
}

#[test]
fn carousel_go_to_ignores_out_of_range() {
    let mut carousel = Carousel::new(3);
    carousel.go_to(1);
    carousel.go_to(7);
    assert_eq!(carousel.index(), 1);
}

#[test]
fn empty_carousel_stays_at_zero() {
    let mut carousel = Carousel::new(0);
    carousel.advance();
    carousel.back();
    assert_eq!(carousel.index(), 0);
}
