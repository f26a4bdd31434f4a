//! Trophic height by fixed-point relaxation.

use crate::web::FoodWeb;
use foodweb_core::{Error, OrganismHeight, Result};
use tracing::trace;

/// Height of every organism, indexed like the web.
///
/// Producers sit at 0; any other organism sits one above its highest prey.
/// Heights start at 0 and are recomputed in place, organism by organism,
/// until a full pass changes nothing. A non-empty acyclic web settles within
/// `len()` passes (at most `len() - 1` that change, then one quiet pass); the
/// extra pass allowed here covers the empty web. A web still changing after
/// `len() + 1` passes holds a cycle (self-predation included) and is rejected.
pub fn height_values(web: &FoodWeb) -> Result<Vec<usize>> {
    let mut heights = vec![0usize; web.len()];
    let max_passes = web.len() + 1;

    for pass in 1..=max_passes {
        let mut changed = false;

        for (index, organism) in web.iter().enumerate() {
            let new_height = organism
                .prey()
                .iter()
                .map(|&p| heights[p] + 1)
                .max()
                .unwrap_or(0);

            if new_height != heights[index] {
                heights[index] = new_height;
                changed = true;
            }
        }

        trace!("Height pass {} changed={}", pass, changed);
        if !changed {
            return Ok(heights);
        }
    }

    Err(Error::CycleDetected { passes: max_passes })
}

/// Trophic height of every organism by name, in web order
pub fn trophic_heights(web: &FoodWeb) -> Result<Vec<OrganismHeight>> {
    let heights = height_values(web)?;
    Ok(web
        .iter()
        .zip(heights)
        .map(|(organism, height)| OrganismHeight {
            name: organism.name.clone(),
            height,
        })
        .collect())
}
