use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;

use crate::animal::{Bird, Describe, Dog, Fish};
use crate::vehicle::{self, Vehicle, VehicleKind};

/// Which side of a breed change a `Breed` entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreedStage {
    Current,
    New,
}

/// One line of the tour, in the order it was produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Description {
        name: String,
        species: String,
        kingdom: String,
        text: String,
    },
    Breed {
        stage: BreedStage,
        breed: String,
    },
    Movement {
        vehicle: VehicleKind,
        text: String,
    },
}

impl Entry {
    fn description(animal: &dyn Describe) -> Self {
        Entry::Description {
            name: animal.name().to_string(),
            species: animal.species().to_string(),
            kingdom: animal.kingdom().to_string(),
            text: animal.describe(),
        }
    }

    fn movement(vehicle: &dyn Vehicle) -> Result<Self> {
        let mut buf = Vec::new();
        vehicle.travel(&mut buf)?;
        let text = String::from_utf8(buf).context("vehicle wrote invalid utf-8")?;
        Ok(Entry::Movement {
            vehicle: vehicle.kind(),
            text: text.trim_end().to_string(),
        })
    }

    /// The line as it appears in plain text output
    pub fn line(&self) -> String {
        match self {
            Entry::Description { text, .. } => text.clone(),
            Entry::Breed { stage: BreedStage::Current, breed } => format!("Breed: {}", breed),
            Entry::Breed { stage: BreedStage::New, breed } => format!("New Breed: {}", breed),
            Entry::Movement { text, .. } => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub entries: Vec<Entry>,
}

impl Report {
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(Entry::line).collect()
    }
}

/// Walk through the fixed sequence: describe the animals, rename the
/// dog's breed, then move every vehicle.
pub fn run() -> Result<Report> {
    let mut report = Report::default();

    let mut dog = Dog::new("Buddy", "Golden Retriever");
    let bird = Bird::new("Tweety");
    let fish = Fish::new("Nemo");
    debug!("created {:?}, {:?}, {:?}", dog, bird, fish);

    report.entries.push(Entry::description(&dog));
    report.entries.push(Entry::Breed {
        stage: BreedStage::Current,
        breed: dog.breed().to_string(),
    });
    dog.set_breed("Labrador");
    report.entries.push(Entry::Breed {
        stage: BreedStage::New,
        breed: dog.breed().to_string(),
    });

    report.entries.push(Entry::description(&bird));
    report.entries.push(Entry::description(&fish));

    for name in ["car", "boat"] {
        let vehicle = vehicle::build(name)?;
        report.entries.push(Entry::movement(vehicle.as_ref())?);
    }

    info!("tour finished with {} entries", report.entries.len());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn run_produces_lines_in_order() {
        let report = run().unwrap();
        assert_eq!(
            report.lines(),
            vec![
                "Buddy is a Dog.",
                "Breed: Golden Retriever",
                "New Breed: Labrador",
                "Tweety is a Bird and can fly.",
                "Nemo is a Fish and lives in water.",
                "The car drives on the road.",
                "The boat sails on the water.",
            ]
        );
    }

    #[test]
    fn descriptions_carry_kingdom() {
        let report = run().unwrap();
        let kingdoms: Vec<&str> = report
            .entries
            .iter()
            .filter_map(|e| match e {
                Entry::Description { kingdom, .. } => Some(kingdom.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(kingdoms, vec!["Animalia"; 3]);
    }

    #[test]
    fn movement_entry_strips_newline() {
        let entry = Entry::movement(&crate::vehicle::Boat).unwrap();
        assert_eq!(
            entry,
            Entry::Movement {
                vehicle: VehicleKind::Boat,
                text: "The boat sails on the water.".to_string(),
            }
        );
    }
}
