//! Core type definitions shared by the graph and the console layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One-hop feeding classification of an organism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoreType {
    /// Eats nothing
    Producer,
    /// Every direct prey is a producer
    Herbivore,
    /// Direct prey are a mix of producers and consumers
    Omnivore,
    /// No direct prey is a producer
    Carnivore,
}

impl VoreType {
    /// Classify from the producer status of each direct prey, in edge order
    pub fn from_prey<I>(prey_is_producer: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut eats_producer = false;
        let mut eats_consumer = false;

        for is_producer in prey_is_producer {
            if is_producer {
                eats_producer = true;
            } else {
                eats_consumer = true;
            }
        }

        match (eats_producer, eats_consumer) {
            (false, false) => VoreType::Producer,
            (true, false) => VoreType::Herbivore,
            (false, true) => VoreType::Carnivore,
            (true, true) => VoreType::Omnivore,
        }
    }

    pub fn all() -> [VoreType; 4] {
        [
            VoreType::Producer,
            VoreType::Herbivore,
            VoreType::Omnivore,
            VoreType::Carnivore,
        ]
    }

    /// Plural heading used when listing a group
    pub fn plural(&self) -> &'static str {
        match self {
            VoreType::Producer => "Producers",
            VoreType::Herbivore => "Herbivores",
            VoreType::Omnivore => "Omnivores",
            VoreType::Carnivore => "Carnivores",
        }
    }
}

impl fmt::Display for VoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VoreType::Producer => "Producer",
            VoreType::Herbivore => "Herbivore",
            VoreType::Omnivore => "Omnivore",
            VoreType::Carnivore => "Carnivore",
        };
        write!(f, "{}", name)
    }
}

/// An organism's name together with the names of its direct prey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub name: String,
    pub prey: Vec<String>,
}

/// Trophic height of a single organism
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganismHeight {
    pub name: String,
    pub height: usize,
}

/// Organism names grouped by feeding type, each in web order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoreGroups {
    pub producers: Vec<String>,
    pub herbivores: Vec<String>,
    pub omnivores: Vec<String>,
    pub carnivores: Vec<String>,
}

impl VoreGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, vore: VoreType, name: String) {
        self.group_mut(vore).push(name);
    }

    pub fn group(&self, vore: VoreType) -> &[String] {
        match vore {
            VoreType::Producer => &self.producers,
            VoreType::Herbivore => &self.herbivores,
            VoreType::Omnivore => &self.omnivores,
            VoreType::Carnivore => &self.carnivores,
        }
    }

    fn group_mut(&mut self, vore: VoreType) -> &mut Vec<String> {
        match vore {
            VoreType::Producer => &mut self.producers,
            VoreType::Herbivore => &mut self.herbivores,
            VoreType::Omnivore => &mut self.omnivores,
            VoreType::Carnivore => &mut self.carnivores,
        }
    }

    /// Total number of classified organisms
    pub fn len(&self) -> usize {
        VoreType::all().iter().map(|v| self.group(*v).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
