use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::error::ConstructionError;

/// Something that can move.
///
/// `travel` has no default, so every vehicle has to say how it gets around:
///
/// ```compile_fail
/// use menagerie::vehicle::{Vehicle, VehicleKind};
///
/// struct Cart;
///
/// impl Vehicle for Cart {
///     fn kind(&self) -> VehicleKind {
///         VehicleKind::Car
///     }
/// }
/// ```
///
/// and the capability on its own is not something you can build:
///
/// ```compile_fail
/// use menagerie::vehicle::Vehicle;
///
/// let v = Vehicle;
/// ```
pub trait Vehicle {
    fn kind(&self) -> VehicleKind;

    /// Write how this vehicle moves, one line
    fn travel(&self, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Boat,
}

impl VehicleKind {
    pub fn as_str(&self) -> &str {
        match self {
            VehicleKind::Car => "car",
            VehicleKind::Boat => "boat",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleKind {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleKind::Car),
            "boat" => Ok(VehicleKind::Boat),
            "vehicle" => Err(ConstructionError::Abstract(s.to_string())),
            _ => Err(ConstructionError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Car;

impl Car {
    pub const MOTION: &'static str = "The car drives on the road.";
}

impl Vehicle for Car {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn travel(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", Self::MOTION)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boat;

impl Boat {
    pub const MOTION: &'static str = "The boat sails on the water.";
}

impl Vehicle for Boat {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Boat
    }

    fn travel(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", Self::MOTION)
    }
}

/// Build a concrete vehicle from its name
pub fn build(name: &str) -> Result<Box<dyn Vehicle>, ConstructionError> {
    let kind: VehicleKind = name.parse()?;
    debug!("building {}", kind);
    Ok(match kind {
        VehicleKind::Car => Box::new(Car),
        VehicleKind::Boat => Box::new(Boat),
    })
}
