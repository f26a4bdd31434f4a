//! Predator/prey graph and the structural queries that run over it.
//!
//! A [`FoodWeb`] owns its organisms and their outgoing predation edges. Edges
//! are indices into the same web and stay valid across removals because
//! [`FoodWeb::remove_organism`] renumbers them in place.

pub mod web;
pub mod query;
pub mod height;
pub mod vore;
pub mod report;

pub use web::{FoodWeb, FoodWebData, Organism};
pub use height::trophic_heights;
pub use vore::vore_types;
pub use report::WebReport;
