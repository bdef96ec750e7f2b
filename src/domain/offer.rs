use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::types::OfferId;

/// A priced service offer published by a provider.
///
/// Like [`Category`](crate::domain::category::Category), equality and hashing
/// are based on `id` alone; transient offers are equal only to themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Offer {
    /// Assigned by the repository on first save.
    pub id: Option<OfferId>,
    pub title: String,
    pub description: Option<String>,
    /// Must be strictly positive when the offer is added.
    pub price: f64,
    pub location: Option<String>,
    /// Free-form status, e.g. "ACTIVE" or "ARCHIVED".
    pub status: Option<String>,
}

impl Offer {
    /// Creates a transient offer with the required fields only.
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            price,
            location: None,
            status: None,
        }
    }

    /// Creates a transient offer with description and location filled in.
    pub fn with_details(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            description: Some(description.into()),
            location: Some(location.into()),
            ..Self::new(title, price)
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_id(mut self, id: OfferId) -> Self {
        self.id = Some(id);
        self
    }
}

impl PartialEq for Offer {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => std::ptr::eq(self, other),
            _ => false,
        }
    }
}

impl Eq for Offer {}

impl Hash for Offer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Offer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "offer #{id} '{}' at {}", self.title, self.price)?,
            None => write!(f, "new offer '{}' at {}", self.title, self.price)?,
        }
        if let Some(location) = &self.location {
            write!(f, " in {location}")?;
        }
        Ok(())
    }
}
