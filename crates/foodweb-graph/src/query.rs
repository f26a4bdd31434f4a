//! Read-only structural queries over a food web.
//!
//! Every query returns names in web order and yields an empty list for an
//! empty web.

use crate::web::FoodWeb;
use foodweb_core::Relation;

/// Each organism with the names of its direct prey, in edge order
pub fn relations(web: &FoodWeb) -> Vec<Relation> {
    web.iter()
        .map(|organism| Relation {
            name: organism.name.clone(),
            prey: organism
                .prey()
                .iter()
                .map(|&p| web.name_of(p).to_string())
                .collect(),
        })
        .collect()
}

/// Organisms that no organism preys upon
pub fn apex_predators(web: &FoodWeb) -> Vec<String> {
    let mut is_prey = vec![false; web.len()];
    for organism in web {
        for &p in organism.prey() {
            is_prey[p] = true;
        }
    }

    web.iter()
        .zip(is_prey)
        .filter(|(_, hunted)| !hunted)
        .map(|(organism, _)| organism.name.clone())
        .collect()
}

/// Organisms that eat nothing
pub fn producers(web: &FoodWeb) -> Vec<String> {
    web.iter()
        .filter(|organism| organism.is_producer())
        .map(|organism| organism.name.clone())
        .collect()
}

/// Organisms whose out-degree equals the largest out-degree in the web
pub fn most_flexible_eaters(web: &FoodWeb) -> Vec<String> {
    let degrees: Vec<usize> = web.iter().map(|organism| organism.num_prey()).collect();
    names_at_max(web, &degrees)
}

/// Number of distinct other organisms that eat each organism.
///
/// Repeated edges from one predator count once and self-predation is ignored.
pub fn predator_counts(web: &FoodWeb) -> Vec<usize> {
    let mut counts = vec![0; web.len()];
    // Last predator credited to each prey, so duplicate edges count once
    let mut last_predator: Vec<Option<usize>> = vec![None; web.len()];

    for (predator, organism) in web.iter().enumerate() {
        for &p in organism.prey() {
            if p != predator && last_predator[p] != Some(predator) {
                last_predator[p] = Some(predator);
                counts[p] += 1;
            }
        }
    }

    counts
}

/// Organisms eaten by the largest number of distinct predators
pub fn tastiest_food(web: &FoodWeb) -> Vec<String> {
    names_at_max(web, &predator_counts(web))
}

/// Names of every organism whose score equals the maximum score, ties included
fn names_at_max(web: &FoodWeb, scores: &[usize]) -> Vec<String> {
    let Some(&max) = scores.iter().max() else {
        return Vec::new();
    };

    web.iter()
        .zip(scores)
        .filter(|(_, &score)| score == max)
        .map(|(organism, _)| organism.name.clone())
        .collect()
}
