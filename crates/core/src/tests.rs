use super::days::*;
use super::entries::*;
use super::maps::*;
use super::model::*;

#[test]
fn statuses_round_trip_through_their_wire_names() {
    for status in TripStatus::ALL {
        assert_eq!(TripStatus::parse(status.as_str()), Some(*status));
    }
    for status in EntryStatus::ALL {
        assert_eq!(EntryStatus::parse(status.as_str()), Some(*status));
    }
    assert_eq!(TripStatus::parse("archived"), None);
    assert_eq!(TripStatus::default(), TripStatus::Planning);
    assert_eq!(EntryStatus::default(), EntryStatus::Planned);
}

#[test]
fn category_set_is_closed_and_exact() {
    assert_eq!(EntryCategory::ALL.len(), 11);
    assert_eq!(EntryCategory::parse("museum"), Some(EntryCategory::Museum));
    assert_eq!(EntryCategory::parse("Museum"), None);
    assert_eq!(EntryCategory::parse("cafe"), None);
    assert!(EntryCategory::names().contains(&"nightlife"));
}

#[test]
fn maps_links_accept_common_google_shapes() {
    for link in [
        "https://maps.google.com/maps?q=Eiffel+Tower+Paris+France",
        "https://www.google.com/maps/place/Louvre+Museum",
        "http://google.co.uk/maps?q=Big+Ben",
        "https://maps.app.goo.gl/abc123",
        "https://goo.gl/maps/xyz",
    ] {
        assert_eq!(validate_maps_link(link), Ok(()), "{link}");
    }
}

#[test]
fn maps_links_reject_missing_or_foreign_urls() {
    assert_eq!(validate_maps_link(""), Err(MapsLinkError::Missing));
    assert_eq!(validate_maps_link("   "), Err(MapsLinkError::Missing));
    assert_eq!(
        validate_maps_link("https://example.com/maps.google.com"),
        Err(MapsLinkError::NotAMapsLink)
    );
    assert_eq!(
        validate_maps_link("Eiffel Tower"),
        Err(MapsLinkError::NotAMapsLink)
    );
}

#[test]
fn maps_links_reject_lookalike_hosts() {
    for link in [
        "https://google.evil.com/maps?q=x",
        "https://www.google.com.attacker.io/maps?q=x",
        "https://maps.google.example.org/?q=x",
        "https://maps.google.com.evil.net/maps",
    ] {
        assert_eq!(validate_maps_link(link), Err(MapsLinkError::NotAMapsLink), "{link}");
    }
    assert_eq!(validate_maps_link("https://www.google.com.au/maps?q=Opera+House"), Ok(()));
    assert_eq!(validate_maps_link("https://maps.google.de/maps?q=Reichstag"), Ok(()));
}

#[test]
fn search_link_joins_words_with_plus() {
    let link = search_link("Eiffel Tower  Paris");
    assert_eq!(link, "https://maps.google.com/maps?q=Eiffel+Tower+Paris");
    assert!(validate_maps_link(&link).is_ok());
}

#[test]
fn search_link_encodes_reserved_characters() {
    let link = search_link("Café & Bar #1?");
    assert_eq!(link, "https://maps.google.com/maps?q=Caf%C3%A9+%26+Bar+%231%3F");
    assert!(!link["https://maps.google.com/maps?".len()..].contains('&'));
    assert!(validate_maps_link(&link).is_ok());
}

#[test]
fn entry_orders_are_bounded() {
    assert!(is_valid_order(0));
    assert!(is_valid_order(MAX_ORDER));
    assert!(is_valid_order(-MAX_ORDER));
    assert!(!is_valid_order(MAX_ORDER + 1));
    assert!(!is_valid_order(i64::MAX));
    assert!(!is_valid_order(i64::MIN));
}

#[test]
fn day_defaults() {
    assert_eq!(default_day_title(3), "Day 3");
    assert!(is_valid_day_number(1));
    assert!(!is_valid_day_number(0));
    assert!(!is_valid_day_number(-2));
}
