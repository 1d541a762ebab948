use super::*;

#[test]
fn whole_prices_drop_decimals() {
    assert_eq!(format_price(100.0), "GHC 100");
}

#[test]
fn fractional_prices_keep_two_places() {
    assert_eq!(format_price(35.5), "GHC 35.50");
}

#[test]
fn display_date_formats_iso_dates() {
    assert_eq!(display_date("2024-11-02"), "Nov 2, 2024");
    assert_eq!(display_date("2024-11-02T18:00:00Z"), "Nov 2, 2024");
}

#[test]
fn display_date_passes_through_unknown_formats() {
    assert_eq!(display_date("4/11/24"), "4/11/24");
}
