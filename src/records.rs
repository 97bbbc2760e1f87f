//! Record-store collaborator contract.
//!
//! The chart never parses genealogical files itself; it resolves individuals
//! through a [`RecordStore`] supplied by the caller. Stores hand back owned
//! [`Person`] snapshots so the grid can be built without borrowing from the
//! store across the whole walk.

use std::collections::HashMap;

/// Primary name of an individual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub given: String,
    pub surname: String,
}

impl Name {
    pub fn new(given: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            given: given.into(),
            surname: surname.into(),
        }
    }

    /// The label drawn in a wedge: given name, space, surname.
    pub fn display(&self) -> String {
        format!("{} {}", self.given, self.surname)
    }
}

/// The family in which an individual is a child. Either parent may be
/// unknown; identifiers are resolved through the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentFamily {
    pub father: Option<String>,
    pub mother: Option<String>,
}

/// Read-only snapshot of one individual's chart-relevant record data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    /// Recorded birth date string, free-form (e.g. "12 JAN 1880").
    pub birth: Option<String>,
    /// Recorded death date string, free-form.
    pub death: Option<String>,
    pub parent_family: Option<ParentFamily>,
}

impl Person {
    pub fn new(given: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: Name::new(given, surname),
            birth: None,
            death: None,
            parent_family: None,
        }
    }

    pub fn born(mut self, date: impl Into<String>) -> Self {
        self.birth = Some(date.into());
        self
    }

    pub fn died(mut self, date: impl Into<String>) -> Self {
        self.death = Some(date.into());
        self
    }

    pub fn child_of(
        mut self,
        father: Option<impl Into<String>>,
        mother: Option<impl Into<String>>,
    ) -> Self {
        self.parent_family = Some(ParentFamily {
            father: father.map(Into::into),
            mother: mother.map(Into::into),
        });
        self
    }
}

/// Lookup of individuals by identifier.
pub trait RecordStore {
    /// Resolve an identifier to a person snapshot, or `None` if absent.
    fn find_individual(&self, id: &str) -> Option<Person>;
}

/// In-memory [`RecordStore`] backed by a `HashMap`, used by tests and by
/// callers that assemble records from some external source.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    people: HashMap<String, Person>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, person: Person) {
        self.people.insert(id.into(), person);
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn find_individual(&self, id: &str) -> Option<Person> {
        self.people.get(id).cloned()
    }
}
