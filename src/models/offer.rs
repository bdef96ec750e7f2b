use diesel::prelude::*;

use crate::domain::offer::Offer as DomainOffer;
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `offers` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::offers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Offer {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub location: Option<String>,
    pub status: Option<String>,
}

/// Insertable/patchable form of [`Offer`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::offers)]
#[diesel(treat_none_as_null = true)]
pub struct NewOffer {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub location: Option<String>,
    pub status: Option<String>,
}

impl TryFrom<Offer> for DomainOffer {
    type Error = TypeConstraintError;

    fn try_from(offer: Offer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(offer.id.try_into()?),
            title: offer.title,
            description: offer.description,
            price: offer.price,
            location: offer.location,
            status: offer.status,
        })
    }
}

impl From<&DomainOffer> for NewOffer {
    fn from(offer: &DomainOffer) -> Self {
        Self {
            title: offer.title.clone(),
            description: offer.description.clone(),
            price: offer.price,
            location: offer.location.clone(),
            status: offer.status.clone(),
        }
    }
}
