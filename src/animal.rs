/// A named creature of some species
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub name: String,
    pub species: String,
}

impl Animal {
    /// Shared by every animal, whatever its species
    pub const KINGDOM: &'static str = "Animalia";

    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Animal {
            name: name.into(),
            species: species.into(),
        }
    }
}

/// Anything built on top of an `Animal` that can describe itself.
///
/// Implementors only have to hand out their inner `Animal`; `describe`
/// falls back to `"{name} is a {species}."` unless overridden.
pub trait Describe {
    fn animal(&self) -> &Animal;

    fn name(&self) -> &str {
        &self.animal().name
    }

    fn species(&self) -> &str {
        &self.animal().species
    }

    fn kingdom(&self) -> &'static str {
        Animal::KINGDOM
    }

    fn describe(&self) -> String {
        format!("{} is a {}.", self.name(), self.species())
    }
}

impl Describe for Animal {
    fn animal(&self) -> &Animal {
        self
    }
}

/// A dog whose breed is only reachable through `breed` and `set_breed`:
///
/// ```compile_fail
/// let breed: String = menagerie::animal::Dog::new("Buddy", "Beagle").breed;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    animal: Animal,
    breed: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Dog {
            animal: Animal::new(name, "Dog"),
            breed: breed.into(),
        }
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    /// Replaces the breed, no questions asked
    pub fn set_breed(&mut self, breed: impl Into<String>) {
        self.breed = breed.into();
    }
}

impl Describe for Dog {
    fn animal(&self) -> &Animal {
        &self.animal
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bird {
    animal: Animal,
    pub can_fly: bool,
}

impl Bird {
    /// Birds fly unless told otherwise
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_flight(name, true)
    }

    pub fn with_flight(name: impl Into<String>, can_fly: bool) -> Self {
        Bird {
            animal: Animal::new(name, "Bird"),
            can_fly,
        }
    }
}

impl Describe for Bird {
    fn animal(&self) -> &Animal {
        &self.animal
    }

    fn describe(&self) -> String {
        let status = if self.can_fly { "can fly" } else { "cannot fly" };
        format!("{} is a {} and {}.", self.name(), self.species(), status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fish {
    animal: Animal,
}

impl Fish {
    pub fn new(name: impl Into<String>) -> Self {
        Fish {
            animal: Animal::new(name, "Fish"),
        }
    }
}

impl Describe for Fish {
    fn animal(&self) -> &Animal {
        &self.animal
    }

    fn describe(&self) -> String {
        format!("{} is a {} and lives in water.", self.name(), self.species())
    }
}
