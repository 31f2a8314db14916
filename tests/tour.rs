use menagerie::animal::{Animal, Bird, Describe, Dog, Fish};
use menagerie::demo::{self, Entry};
use menagerie::error::ConstructionError;
use menagerie::output;
use menagerie::vehicle::{self, Boat, Car, Vehicle};
use pretty_assertions::assert_eq;

const EXPECTED: &str = "\
Buddy is a Dog.
Breed: Golden Retriever
New Breed: Labrador
Tweety is a Bird and can fly.
Nemo is a Fish and lives in water.
The car drives on the road.
The boat sails on the water.
";

#[test]
fn full_tour_prints_exactly_seven_lines() {
    colored::control::set_override(false);
    let report = demo::run().unwrap();
    let mut buf = Vec::new();
    output::output_text(&report, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), EXPECTED);
}

#[test]
fn describe_follows_name_and_species() {
    for (name, species) in [("N", "S"), ("Ada", "Owl"), ("x y", "Sea Turtle")] {
        assert_eq!(Animal::new(name, species).describe(), format!("{} is a {}.", name, species));
    }
    assert_eq!(Bird::with_flight("N", true).describe(), "N is a Bird and can fly.");
    assert_eq!(Bird::with_flight("N", false).describe(), "N is a Bird and cannot fly.");
    assert_eq!(Fish::new("N").describe(), "N is a Fish and lives in water.");
}

#[test]
fn dog_breed_round_trips_through_accessors() {
    let mut dog = Dog::new("Buddy", "B");
    assert_eq!(dog.breed(), "B");
    dog.set_breed("B2");
    assert_eq!(dog.breed(), "B2");
}

#[test]
fn vehicles_move_and_abstract_one_does_not_build() {
    let mut buf = Vec::new();
    let fleet: [&dyn Vehicle; 2] = [&Car, &Boat];
    for v in fleet {
        v.travel(&mut buf).unwrap();
    }
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "The car drives on the road.\nThe boat sails on the water.\n"
    );

    assert!(matches!(vehicle::build("vehicle"), Err(ConstructionError::Abstract(_))));
}

#[test]
fn json_report_matches_text_report() {
    let report = demo::run().unwrap();
    let mut buf = Vec::new();
    output::output_json(&report, &mut buf).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    let texts: Vec<String> = report.entries.iter().map(Entry::line).collect();
    assert_eq!(value["entries"].as_array().unwrap().len(), texts.len());
    assert_eq!(value["entries"][3]["text"], "Tweety is a Bird and can fly.");
}
