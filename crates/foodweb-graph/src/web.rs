//! Organism store and its two mutations.

use foodweb_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A node in the predation graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organism {
    pub name: String,
    prey: Vec<usize>,
}

impl Organism {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prey: Vec::new(),
        }
    }

    /// Indices of the organisms this one preys upon, in insertion order
    pub fn prey(&self) -> &[usize] {
        &self.prey
    }

    /// Out-degree, counting duplicate edges
    pub fn num_prey(&self) -> usize {
        self.prey.len()
    }

    pub fn is_producer(&self) -> bool {
        self.prey.is_empty()
    }

}

/// The owned collection of organisms and their edges.
///
/// Every prey index held by any organism is `< len()` at all times.
/// Deserialized webs are checked against this before they are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FoodWebData")]
pub struct FoodWeb {
    organisms: Vec<Organism>,
}

/// Unchecked wire form of a [`FoodWeb`]
#[derive(Debug, Clone, Deserialize)]
pub struct FoodWebData {
    pub organisms: Vec<Organism>,
}

impl TryFrom<FoodWebData> for FoodWeb {
    type Error = Error;

    fn try_from(data: FoodWebData) -> Result<Self> {
        let len = data.organisms.len();
        for organism in &data.organisms {
            if let Some(&bad) = organism.prey.iter().find(|&&p| p >= len) {
                return Err(Error::invalid_index(bad, len));
            }
        }
        Ok(Self {
            organisms: data.organisms,
        })
    }
}

impl FoodWeb {
    /// Create one edgeless organism per name, in order
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let organisms: Vec<Organism> = names.into_iter().map(Organism::new).collect();
        debug!("Created food web with {} organisms", organisms.len());
        Self { organisms }
    }

    /// Create a web and add every `(predator, prey)` pair in order
    pub fn with_predations<I, S>(names: I, predations: &[(usize, usize)]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut web = Self::new(names);
        for &(predator, prey) in predations {
            web.add_predation(predator, prey)?;
        }
        Ok(web)
    }

    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    pub fn organism(&self, index: usize) -> Option<&Organism> {
        self.organisms.get(index)
    }

    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Organism> {
        self.organisms.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.organisms.iter().map(|o| o.name.clone()).collect()
    }

    /// Name of the organism at `index`; callers hold a valid index
    pub(crate) fn name_of(&self, index: usize) -> &str {
        &self.organisms[index].name
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.organisms.len() {
            Ok(())
        } else {
            Err(Error::invalid_index(index, self.organisms.len()))
        }
    }

    /// Record that `predator` eats `prey`.
    ///
    /// Duplicate edges and self-predation are accepted as given.
    pub fn add_predation(&mut self, predator: usize, prey: usize) -> Result<()> {
        self.check_index(predator)?;
        self.check_index(prey)?;

        self.organisms[predator].prey.push(prey);
        debug!(
            "{} now eats {} ({} prey)",
            self.organisms[predator].name,
            self.organisms[prey].name,
            self.organisms[predator].prey.len()
        );
        Ok(())
    }

    /// Remove the organism at `index` and renumber every surviving edge.
    ///
    /// Edges pointing at the removed organism are dropped, edges above it
    /// shift down by one, and survivors keep their relative order. The web
    /// is untouched when the index is out of range.
    pub fn remove_organism(&mut self, index: usize) -> Result<Organism> {
        self.check_index(index)?;

        for organism in &mut self.organisms {
            organism.prey.retain(|&p| p != index);
            for p in &mut organism.prey {
                if *p > index {
                    *p -= 1;
                }
            }
        }

        let removed = self.organisms.remove(index);
        debug!(
            "Removed {} at index {}, {} organisms remain",
            removed.name,
            index,
            self.organisms.len()
        );
        Ok(removed)
    }
}

impl<'a> IntoIterator for &'a FoodWeb {
    type Item = &'a Organism;
    type IntoIter = std::slice::Iter<'a, Organism>;

    fn into_iter(self) -> Self::IntoIter {
        self.organisms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prey_of(web: &FoodWeb, index: usize) -> Vec<usize> {
        web.organism(index).unwrap().prey().to_vec()
    }

    #[test]
    fn test_new_web_has_no_edges() {
        let web = FoodWeb::new(["Grass", "Rabbit", "Fox"]);
        assert_eq!(web.len(), 3);
        assert_eq!(web.names(), vec!["Grass", "Rabbit", "Fox"]);
        assert!(web.iter().all(Organism::is_producer));
    }

    #[test]
    fn test_empty_web() {
        let web = FoodWeb::new(Vec::<String>::new());
        assert!(web.is_empty());
        assert!(web.organism(0).is_none());
    }

    #[test]
    fn test_add_predation_appends_in_order() {
        let mut web = FoodWeb::new(["A", "B", "C"]);
        web.add_predation(0, 2).unwrap();
        web.add_predation(0, 1).unwrap();
        web.add_predation(0, 2).unwrap();
        web.add_predation(1, 1).unwrap();

        assert_eq!(prey_of(&web, 0), vec![2, 1, 2]);
        assert_eq!(prey_of(&web, 1), vec![1]);
        assert_eq!(web.organism(0).unwrap().num_prey(), 3);
    }

    #[test]
    fn test_add_predation_rejects_out_of_range() {
        let mut web = FoodWeb::new(["A", "B"]);
        web.add_predation(0, 1).unwrap();
        let before = web.clone();

        let err = web.add_predation(2, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { index: 2, len: 2 }));
        let err = web.add_predation(0, 5).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { index: 5, len: 2 }));

        assert_eq!(web, before);
    }

    #[test]
    fn test_remove_renumbers_edges() {
        // 0:A 1:B 2:C 3:D; D eats A, C, B, C; C eats B; A eats D
        let mut web = FoodWeb::with_predations(
            ["A", "B", "C", "D"],
            &[(3, 0), (3, 2), (3, 1), (3, 2), (2, 1), (0, 3)],
        )
        .unwrap();

        let removed = web.remove_organism(1).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(web.names(), vec!["A", "C", "D"]);

        assert_eq!(prey_of(&web, 0), vec![2]);
        assert!(web.organism(1).unwrap().is_producer());
        assert_eq!(prey_of(&web, 2), vec![0, 1, 1]);
    }

    #[test]
    fn test_remove_rejects_out_of_range() {
        let mut web = FoodWeb::with_predations(["A", "B"], &[(1, 0)]).unwrap();
        let before = web.clone();

        let err = web.remove_organism(2).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { index: 2, len: 2 }));
        assert_eq!(web, before);
    }

    #[test]
    fn test_remove_last_organism_leaves_empty_web() {
        let mut web = FoodWeb::with_predations(["Solo"], &[(0, 0)]).unwrap();
        web.remove_organism(0).unwrap();
        assert!(web.is_empty());
        assert!(web.remove_organism(0).is_err());
    }

    #[test]
    fn test_deserialize_keeps_valid_web() {
        let web =
            FoodWeb::with_predations(["Grass", "Cow", "Wolf"], &[(1, 0), (2, 1), (2, 1)]).unwrap();
        let json = serde_json::to_string(&web).unwrap();
        let restored: FoodWeb = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, web);
    }

    #[test]
    fn test_deserialize_rejects_dangling_prey() {
        let json = r#"{"organisms":[{"name":"A","prey":[5]}]}"#;
        let err = serde_json::from_str::<FoodWeb>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid index 5: web has 1 organisms"));

        let json = r#"{"organisms":[{"name":"A","prey":[0]},{"name":"B","prey":[1,2]}]}"#;
        assert!(serde_json::from_str::<FoodWeb>(json).is_err());
    }

    #[test]
    fn test_with_predations_fails_on_bad_pair() {
        let result = FoodWeb::with_predations(["A"], &[(0, 0), (0, 1)]);
        assert!(matches!(result, Err(Error::InvalidIndex { index: 1, len: 1 })));
    }
}
