use super::common::scenario;
use crate::quotes::scenarios::parser::{bathroom_count, bedroom_count, occupant_estimate};
use crate::quotes::scenarios::ScenarioCatalogue;

#[test]
fn bedroom_counts_parse_from_descriptions() {
    assert_eq!(
        bedroom_count("3-bedroom semi-detached house, 1 main bathroom"),
        Some(3)
    );
    assert_eq!(bedroom_count("6-bedroom period property, 3 bathrooms"), Some(6));
    assert_eq!(bedroom_count("studio flat with 1 bathroom"), None);
}

#[test]
fn bathroom_counts_parse_from_descriptions() {
    assert_eq!(
        bathroom_count("3-bedroom semi-detached house, 1 main bathroom"),
        Some(1)
    );
    assert_eq!(
        bathroom_count("4-bedroom detached house, 1 main bathroom + 1 ensuite"),
        Some(1)
    );
    assert_eq!(bathroom_count("2-bedroom flat, 2 bathrooms"), Some(2));
    assert_eq!(bathroom_count("4-bedroom barn conversion"), None);
}

#[test]
fn occupant_decode_table_is_complete() {
    assert_eq!(occupant_estimate("1-2"), Some(1.5));
    assert_eq!(occupant_estimate("2-3"), Some(2.5));
    assert_eq!(occupant_estimate("3-4"), Some(3.5));
    assert_eq!(occupant_estimate("family of 4"), Some(4.0));
    assert_eq!(occupant_estimate("family of 5"), Some(5.0));
    assert_eq!(occupant_estimate("couple"), Some(2.0));
}

#[test]
fn occupant_decode_covers_descriptor_sentences() {
    assert_eq!(occupant_estimate("2-3 people"), Some(2.5));
    assert_eq!(occupant_estimate("3 adults"), Some(3.0));
    assert_eq!(occupant_estimate("3 adults sharing"), Some(3.0));
}

#[test]
fn unrecognized_occupants_decode_to_none() {
    assert_eq!(occupant_estimate("a crowd"), None);
    assert_eq!(occupant_estimate(""), None);
}

#[test]
fn catalogue_normalizes_entries_at_load() {
    let catalogue = ScenarioCatalogue::from_scenarios(vec![scenario(
        "n1",
        "4-bedroom detached house, 2 bathrooms",
        "family of 4",
        "Regular boiler",
        "System Boiler Installation",
        Some(28),
        Some(210),
    )]);

    let entry = &catalogue.entries()[0];
    assert_eq!(entry.bedrooms(), Some(4));
    assert_eq!(entry.bathrooms(), Some(2));
    assert_eq!(entry.occupant_estimate(), Some(4.0));
}

#[test]
fn standard_catalogue_parses_every_entry() {
    let catalogue = ScenarioCatalogue::standard();

    assert_eq!(catalogue.len(), 20);
    for entry in catalogue.entries() {
        assert!(
            entry.bedrooms().is_some(),
            "entry {} lost its bedroom count",
            entry.scenario().id
        );
        assert!(
            entry.bathrooms().is_some(),
            "entry {} lost its bathroom count",
            entry.scenario().id
        );
        assert!(
            entry.occupant_estimate().is_some(),
            "entry {} lost its occupant estimate",
            entry.scenario().id
        );
    }
}
