use std::fmt;

use serde::Serialize;

/// # kind of record in the dataset
/// used in error messages, log lines and the not found page
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Driver,
    Team,
    Race,
}

impl EntityKind {
    /// the path segment the list page of this kind is mounted on
    pub fn section(&self) -> &'static str {
        match self {
            EntityKind::Driver => "drivers",
            EntityKind::Team => "teams",
            EntityKind::Race => "races",
        }
    }

    /// find the kind whose list page is mounted on `section`
    pub fn from_section(section: &str) -> Option<EntityKind> {
        match section {
            "drivers" => Some(EntityKind::Driver),
            "teams" => Some(EntityKind::Team),
            "races" => Some(EntityKind::Race),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntityKind::Driver => write!(f, "driver"),
            EntityKind::Team => write!(f, "team"),
            EntityKind::Race => write!(f, "race"),
        }
    }
}

/// # a record with a unique string identifier
pub trait Entity {
    const KIND: EntityKind;

    fn id(&self) -> &str;
}

/// # find by id
/// linear scan over `items`, the first record with the given id wins.
///
/// ## Arguments
/// * `items` - the collection to search
/// * `id` - the identifier, any string is accepted
///
/// ## Returns
/// * `Option<&T>` - the record or `None` when no record has this id
pub fn find_by_id<'a, T: Entity>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// # find duplicate id
/// get the first id that occurs more than once in `items`
pub fn find_duplicate_id<T: Entity>(items: &[T]) -> Option<&str> {
    let mut seen = std::collections::HashSet::new();
    items
        .iter()
        .map(|item| item.id())
        .find(|id| !seen.insert(*id))
}
