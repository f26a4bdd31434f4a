//! Snapshot of every query over one state of a web.

use crate::height::trophic_heights;
use crate::query;
use crate::vore::vore_types;
use crate::web::FoodWeb;
use foodweb_core::{Error, OrganismHeight, Relation, Result, VoreGroups};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Results of all queries, taken together from the same web state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebReport {
    pub relations: Vec<Relation>,
    pub apex_predators: Vec<String>,
    pub producers: Vec<String>,
    pub most_flexible_eaters: Vec<String>,
    pub tastiest_food: Vec<String>,
    /// `None` when the web holds a predation cycle
    pub heights: Option<Vec<OrganismHeight>>,
    pub vore_types: VoreGroups,
}

impl WebReport {
    /// Run every query against `web`.
    ///
    /// A cyclic web still produces a report; only its heights are missing.
    pub fn analyze(web: &FoodWeb) -> Self {
        let heights = match trophic_heights(web) {
            Ok(heights) => Some(heights),
            Err(Error::CycleDetected { passes }) => {
                warn!("Trophic heights undefined: predation cycle ({} passes)", passes);
                None
            }
            Err(e) => {
                warn!("Trophic heights unavailable: {}", e);
                None
            }
        };

        Self {
            relations: query::relations(web),
            apex_predators: query::apex_predators(web),
            producers: query::producers(web),
            most_flexible_eaters: query::most_flexible_eaters(web),
            tastiest_food: query::tastiest_food(web),
            heights,
            vore_types: vore_types(web),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
