//! Sparse binary ancestor grid and the tree walk that fills it.
//!
//! Slots use the classic binary ancestor numbering: the person at
//! `(generation, position)` has their father at `(generation + 1, 2 * position)`
//! and their mother at `(generation + 1, 2 * position + 1)`. Level `g` always
//! holds exactly `2^(g+1)` slots once it exists, however sparsely populated.

use crate::errors::ChartError;
use crate::records::{Person, RecordStore};

/// Sparse store of individuals indexed by `(generation, position)`.
///
/// Built once per chart by [`build_grid`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct AncestorGrid {
    levels: Vec<Vec<Option<Person>>>,
}

impl AncestorGrid {
    fn with_generations(generations: usize) -> Self {
        Self {
            levels: (0..generations)
                .map(|g| vec![None; 1usize << (g + 1)])
                .collect(),
        }
    }

    /// Number of generation levels.
    pub fn generations(&self) -> usize {
        self.levels.len()
    }

    /// All slots of one generation, occupied or not.
    pub fn level(&self, generation: usize) -> &[Option<Person>] {
        &self.levels[generation]
    }

    /// The person at `(generation, position)`, if that slot is filled.
    pub fn get(&self, generation: usize, position: usize) -> Option<&Person> {
        self.levels
            .get(generation)
            .and_then(|level| level.get(position))
            .and_then(Option::as_ref)
    }

    /// Occupied slots of one generation in position order.
    pub fn occupied(&self, generation: usize) -> impl Iterator<Item = (usize, &Person)> {
        self.levels[generation]
            .iter()
            .enumerate()
            .filter_map(|(pos, slot)| slot.as_ref().map(|p| (pos, p)))
    }

    fn place(&mut self, generation: usize, position: usize, person: Person) {
        self.levels[generation][position] = Some(person);
    }
}

/// Build the ancestor grid for two roots.
///
/// The roots seed level 0 at positions 0 and 1; an unresolvable root id fails
/// with [`ChartError::RootNotFound`] before any slot is filled. From there the
/// walk places each resolvable father and mother one generation out. A missing
/// parent family, a missing parent, or a parent id the store cannot resolve
/// silently ends that branch, leaving the slot and its whole subtree empty.
///
/// The walk uses an explicit work stack rather than call recursion, so depth
/// is bounded by slot count, not the call stack.
pub fn build_grid(
    store: &dyn RecordStore,
    root1: &str,
    root2: &str,
    generations: usize,
) -> Result<AncestorGrid, ChartError> {
    if generations == 0 {
        return Err(ChartError::InvalidConfig {
            reason: "generation count must be at least 1".into(),
        });
    }
    let first = store
        .find_individual(root1)
        .ok_or_else(|| ChartError::RootNotFound {
            id: root1.to_string(),
        })?;
    let second = store
        .find_individual(root2)
        .ok_or_else(|| ChartError::RootNotFound {
            id: root2.to_string(),
        })?;

    let mut grid = AncestorGrid::with_generations(generations);
    let mut pending = vec![(0usize, 0usize, first), (0, 1, second)];

    while let Some((generation, position, person)) = pending.pop() {
        // The last stored generation is `generations - 1`; parents of people
        // on that ring are out of frame and never fetched.
        if generation + 1 < generations {
            if let Some(family) = &person.parent_family {
                push_parent(store, &mut pending, family.father.as_deref(), generation, 2 * position);
                push_parent(
                    store,
                    &mut pending,
                    family.mother.as_deref(),
                    generation,
                    2 * position + 1,
                );
            }
        }
        grid.place(generation, position, person);
    }

    Ok(grid)
}

fn push_parent(
    store: &dyn RecordStore,
    pending: &mut Vec<(usize, usize, Person)>,
    id: Option<&str>,
    generation: usize,
    position: usize,
) {
    let Some(id) = id else { return };
    match store.find_individual(id) {
        Some(parent) => pending.push((generation + 1, position, parent)),
        None => {
            crate::log::debug!(id, generation = generation + 1, "parent id unresolved, branch truncated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::MemoryStore;

    fn two_root_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert(
            "A",
            Person::new("Alda", "Ames").child_of(Some("AF"), Some("AM")),
        );
        store.insert(
            "B",
            Person::new("Bert", "Byrne").child_of(Some("BF"), None::<String>),
        );
        store.insert("AF", Person::new("Axel", "Ames"));
        store.insert("AM", Person::new("Anna", "Arndt"));
        store.insert("BF", Person::new("Bodo", "Byrne"));
        store
    }

    #[test]
    fn levels_have_power_of_two_sizes() {
        let store = two_root_store();
        let grid = build_grid(&store, "A", "B", 4).unwrap();
        assert_eq!(grid.generations(), 4);
        for g in 0..4 {
            assert_eq!(grid.level(g).len(), 1 << (g + 1));
        }
    }

    #[test]
    fn roots_occupy_level_zero() {
        let store = two_root_store();
        let grid = build_grid(&store, "A", "B", 2).unwrap();
        assert_eq!(grid.get(0, 0).unwrap().name.display(), "Alda Ames");
        assert_eq!(grid.get(0, 1).unwrap().name.display(), "Bert Byrne");
    }

    #[test]
    fn parents_land_at_doubled_positions() {
        let store = two_root_store();
        let grid = build_grid(&store, "A", "B", 2).unwrap();
        // A's parents behind position 0, B's behind position 1.
        assert_eq!(grid.get(1, 0).unwrap().name.given, "Axel");
        assert_eq!(grid.get(1, 1).unwrap().name.given, "Anna");
        assert_eq!(grid.get(1, 2).unwrap().name.given, "Bodo");
        // B has no recorded mother.
        assert!(grid.get(1, 3).is_none());
    }

    #[test]
    fn missing_parent_truncates_whole_subtree() {
        let mut store = two_root_store();
        // Bodo has a family record but neither parent resolves.
        store.insert(
            "BF",
            Person::new("Bodo", "Byrne").child_of(Some("GHOST"), None::<String>),
        );
        let grid = build_grid(&store, "A", "B", 3).unwrap();
        // Descendants of the empty (1, 3) slot stay empty.
        assert!(grid.get(2, 6).is_none());
        assert!(grid.get(2, 7).is_none());
        // The unresolvable GHOST id behind (1, 2) also leaves its slot empty.
        assert!(grid.get(2, 4).is_none());
    }

    #[test]
    fn walk_stops_at_the_configured_generation_count() {
        let mut store = MemoryStore::new();
        // An unbroken chain: each Cn is the father of C(n-1).
        for n in 0..10 {
            let person = Person::new(format!("C{n}"), "Chain").child_of(
                Some(format!("C{}", n + 1)),
                None::<String>,
            );
            store.insert(format!("C{n}"), person);
        }
        store.insert("C10", Person::new("C10", "Chain"));
        store.insert("Z", Person::new("Zoe", "Zeal"));
        let grid = build_grid(&store, "C0", "Z", 3).unwrap();
        assert_eq!(grid.generations(), 3);
        // Outermost stored ring is generation 2; nothing beyond is fetched.
        assert_eq!(grid.get(2, 0).unwrap().name.given, "C2");
        assert_eq!(grid.occupied(2).count(), 1);
    }

    #[test]
    fn unknown_root_fails_without_partial_grid() {
        let store = two_root_store();
        let err = build_grid(&store, "NOPE", "B", 3).unwrap_err();
        assert!(matches!(err, ChartError::RootNotFound { id } if id == "NOPE"));
        let err = build_grid(&store, "A", "NOPE", 3).unwrap_err();
        assert!(matches!(err, ChartError::RootNotFound { id } if id == "NOPE"));
    }

    #[test]
    fn filled_slot_implies_parent_link_existed() {
        let store = two_root_store();
        let grid = build_grid(&store, "A", "B", 3).unwrap();
        for g in 1..grid.generations() {
            for (pos, _) in grid.occupied(g) {
                let child = grid.get(g - 1, pos / 2).expect("filled slot without child below");
                let family = child.parent_family.as_ref().expect("child without family");
                let link = if pos % 2 == 0 {
                    &family.father
                } else {
                    &family.mother
                };
                assert!(link.is_some(), "slot ({g}, {pos}) filled without a parent link");
            }
        }
    }
}
