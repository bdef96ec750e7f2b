use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::types::CategoryId;

/// Service category such as "Plumbing" or "Electrical work".
///
/// Equality and hashing consider only `id`. A category that has not been
/// persisted yet (`id == None`) is equal to nothing but itself, so two
/// transient values never compare equal even when their fields match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    /// Assigned by the repository on first save.
    pub id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    /// Creates a transient category with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_id(mut self, id: CategoryId) -> Self {
        self.id = Some(id);
        self
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => std::ptr::eq(self, other),
            _ => false,
        }
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "category #{id} '{}'", self.name)?,
            None => write!(f, "new category '{}'", self.name)?,
        }
        if let Some(description) = &self.description {
            write!(f, ": {description}")?;
        }
        Ok(())
    }
}
