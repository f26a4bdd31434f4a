//! One-hop feeding-type classification.
//!
//! An organism is judged only by whether its direct prey are producers; a
//! predator that eats only herbivores is a carnivore even though plants sit
//! further down its chain.

use crate::web::FoodWeb;
use foodweb_core::{VoreGroups, VoreType};

/// Feeding type of every organism, indexed like the web
pub fn classify(web: &FoodWeb) -> Vec<VoreType> {
    let organisms = web.organisms();
    organisms
        .iter()
        .map(|organism| {
            VoreType::from_prey(
                organism
                    .prey()
                    .iter()
                    .map(|&p| organisms[p].is_producer()),
            )
        })
        .collect()
}

/// Organism names grouped by feeding type
pub fn vore_types(web: &FoodWeb) -> VoreGroups {
    let mut groups = VoreGroups::new();
    for (organism, vore) in web.iter().zip(classify(web)) {
        groups.push(vore, organism.name.clone());
    }
    groups
}
