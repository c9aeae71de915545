use shared::stallingsnet::coordinates::{Coordinate, REGISTRY, lookup};

fn registered(name: &str) -> Coordinate {
    REGISTRY
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, coordinate)| *coordinate)
        .unwrap_or_else(|| panic!("{name} is not registered"))
}

#[test]
fn exact_name_returns_registered_coordinate() {
    assert_eq!(
        lookup("Stadhuis"),
        Some(Coordinate {
            lat: 52.092_410_808_910_99,
            lon: 5.120_231_025_327_54,
        })
    );
    assert_eq!(lookup("Stadhuis Hoog"), Some(registered("Stadhuis Hoog")));
}

#[test]
fn every_registered_name_resolves_to_itself() {
    for (name, coordinate) in REGISTRY {
        assert_eq!(lookup(name), Some(*coordinate), "{name}");
    }
}

#[test]
fn case_variation_falls_back_to_first_key_in_table_order() {
    // "Stadhuis" precedes "Stadhuis Hoog", so the base location wins the scan.
    assert_eq!(lookup("stadhuis hoog"), Some(registered("Stadhuis")));
    assert_eq!(lookup("KNOOP LAAG"), Some(registered("Knoop")));
}

#[test]
fn embedded_name_matches_substring() {
    assert_eq!(
        lookup("Fietsenstalling Jaarbeursplein (ingang Noord)"),
        Some(registered("Jaarbeursplein"))
    );
    // "Neude" is scanned before "Pop Up Neude".
    assert_eq!(lookup("pop up neude west"), Some(registered("Neude")));
}

#[test]
fn unknown_name_has_no_coordinate() {
    assert_eq!(lookup("NonexistentPlace"), None);
    assert_eq!(lookup(""), None);
}
